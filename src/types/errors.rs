//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation and provide
//! clear error messages with context.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the UFP object-mapping layer.
#[derive(Error, Debug)]
pub enum Error {
    /// Usage errors: back-reference accessed before being set, dangling
    /// session, relation id not present in the registry.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Validated-mode construction found schema mismatches.
    #[error("validation error: {0}")]
    Validation(String),

    /// Polymorphic construction could not resolve a `modelKey`.
    #[error("unknown model: {0}")]
    UnknownModel(String),

    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// Convenience constructors
impl Error {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unknown_model(msg: impl Into<String>) -> Self {
        Self::UnknownModel(msg.into())
    }

    /// Whether the error is a caller mistake rather than bad upstream data.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Error::BadRequest(_))
    }
}
