use std::path::Path;

use crate::errors::ConfigError;
use crate::overrides::ParameterOverrides;

/// Read parameter overrides from a JSON config file.
pub fn load_overrides(path: &Path) -> Result<ParameterOverrides, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_overrides(&text, path)
}

/// Parse parameter overrides from JSON text. `origin` is used in errors only.
pub fn parse_overrides(json: &str, origin: &Path) -> Result<ParameterOverrides, ConfigError> {
    serde_json::from_str(json).map_err(|e| ConfigError::Parse {
        path: origin.to_path_buf(),
        reason: e.to_string(),
    })
}
