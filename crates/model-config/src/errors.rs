use std::path::PathBuf;

/// Errors reading configuration input.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config file {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },
}
