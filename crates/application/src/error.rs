//! Application error types

use apicheck_domain::CheckError;
use thiserror::Error;

use crate::config::ConfigError;
use crate::ports::HttpClientError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A check or extraction on a response failed.
    #[error(transparent)]
    Check(#[from] CheckError),

    /// The HTTP call itself failed.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpClientError),

    /// The run configuration is invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A request body could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A local file could not be read.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for ApplicationError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
