use aneurysm_types::KernelRequest;
use serde::Deserialize;

use crate::errors::LoadError;
use crate::metadata::StudyMetadata;
use crate::save::{FORMAT_ID, FORMAT_VERSION};
use crate::snapshot::StudyDomain;

#[derive(Debug, Deserialize)]
struct StudyFileRaw {
    format: String,
    version: u32,
    study: StudyMetadata,
    domain: StudyDomain,
    requests: Vec<KernelRequest>,
}

/// A loaded study.
#[derive(Debug, Clone, PartialEq)]
pub struct Study {
    pub metadata: StudyMetadata,
    pub domain: StudyDomain,
    pub requests: Vec<KernelRequest>,
}

/// Deserialize a study from a JSON string.
///
/// Validates the format identifier and version.
pub fn load_study(json: &str) -> Result<Study, LoadError> {
    let raw: StudyFileRaw =
        serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;

    if raw.format != FORMAT_ID {
        return Err(LoadError::UnknownFormat(raw.format));
    }
    if raw.version > FORMAT_VERSION {
        return Err(LoadError::FutureVersion {
            file_version: raw.version,
            supported_version: FORMAT_VERSION,
        });
    }

    Ok(Study {
        metadata: raw.study,
        domain: raw.domain,
        requests: raw.requests,
    })
}
