/// Unified error types for the Vodara client
use thiserror::Error;

/// Main error type for the client
#[derive(Error, Debug)]
pub enum ClientError {
    /// Credential validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// JSON codec errors, surfaced as-is
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Account store errors
    #[error("Account store error: {0}")]
    Storage(String),
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
