use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while auditing repositories.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Missing or malformed policy file, environment variable or option.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The API answered with a non-success status.
    #[error("Request failed with status {status}: {body}")]
    Network { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, AuditError>;
