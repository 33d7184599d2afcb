//! Parameter resolution for generation runs.
//!
//! Scalar inputs come from three layers, each field resolved independently:
//! explicit overrides (command line), then a JSON config file, then the
//! built-in defaults.

pub mod errors;
pub mod load;
pub mod overrides;
pub mod patient;

use std::path::Path;

use aneurysm_types::Parameters;
use tracing::debug;

pub use errors::ConfigError;
pub use load::{load_overrides, parse_overrides};
pub use overrides::ParameterOverrides;
pub use patient::{load_patient_config, PatientConfig, DEFAULT_RESAMPLE_FACTOR};

/// Resolve one immutable parameter set.
///
/// `explicit` wins over values read from `config_file`, which win over the
/// defaults. Fails only if the config file cannot be read or parsed.
pub fn resolve_parameters(
    explicit: &ParameterOverrides,
    config_file: Option<&Path>,
) -> Result<Parameters, ConfigError> {
    let layered = match config_file {
        Some(path) => explicit.or(&load_overrides(path)?),
        None => explicit.clone(),
    };
    let params = layered.resolve();
    debug!(?params, "resolved parameters");
    Ok(params)
}
