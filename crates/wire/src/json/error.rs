//! Wire decoding and encoding errors

use tensorwire_core::TensorError;
use thiserror::Error;

/// Result type for wire operations
pub type WireResult<T> = std::result::Result<T, WireError>;

/// Wire error types
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WireError {
    /// JSON text is malformed or does not have the tensor object shape
    #[error("invalid JSON: {0}")]
    Json(String),

    /// Tensor object has neither `value` nor `b64Value`
    #[error("tensor object carries neither value nor b64Value")]
    MissingPayload,

    /// The tensor itself failed to build or narrow
    #[error(transparent)]
    Tensor(#[from] TensorError),
}

impl From<serde_json::Error> for WireError {
    fn from(e: serde_json::Error) -> Self {
        WireError::Json(e.to_string())
    }
}
