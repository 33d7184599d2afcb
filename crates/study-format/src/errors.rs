/// Errors during study file loading.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadError {
    #[error("failed to parse study file: {0}")]
    ParseError(String),

    #[error("unknown file format: {0}")]
    UnknownFormat(String),

    #[error("file version {file_version} is newer than supported version {supported_version}")]
    FutureVersion {
        file_version: u32,
        supported_version: u32,
    },
}

/// Errors during study file serialization.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("failed to serialize study: {0}")]
    Serialize(#[from] serde_json::Error),
}
