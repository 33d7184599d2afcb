use aneurysm_types::KernelRequest;
use serde::Serialize;

use crate::errors::SaveError;
use crate::metadata::StudyMetadata;
use crate::snapshot::StudyDomain;

/// Format identifier written to every study file.
pub const FORMAT_ID: &str = "aneurysm-study";

/// Current study file version.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct StudyFile<'a> {
    format: &'static str,
    version: u32,
    study: &'a StudyMetadata,
    domain: &'a StudyDomain,
    /// Kernel requests in the order they were applied.
    requests: &'a [KernelRequest],
}

/// Serialize a study to a pretty-printed JSON string.
pub fn save_study(
    domain: &StudyDomain,
    requests: &[KernelRequest],
    metadata: &StudyMetadata,
) -> Result<String, SaveError> {
    let file = StudyFile {
        format: FORMAT_ID,
        version: FORMAT_VERSION,
        study: metadata,
        domain,
        requests,
    };
    Ok(serde_json::to_string_pretty(&file)?)
}
