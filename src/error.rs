//! Unified error type for tensorwire.
//!
//! Wraps the crate-local errors ([`TensorError`], [`WireError`],
//! [`DispatchError`]) into one flat enum that callers can match on without
//! knowing which layer raised it.

use tensorwire_api::DispatchError;
use tensorwire_core::{ShapeError, TensorError};
use tensorwire_wire::WireError;
use thiserror::Error;

/// All tensorwire errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Element type name is not one of the six supported types
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Data cannot be converted to the requested element type
    #[error("type conversion: {0}")]
    TypeConversion(String),

    /// Shape is malformed or does not match the element count
    #[error("{0}")]
    Shape(ShapeError),

    /// int64 element outside the safe-integer bound during narrowing
    #[error("element {value} is too big to represent as int32")]
    RangeNarrowing {
        /// Offending element
        value: i64,
    },

    /// Base64 payload is undecodable or used with the wrong type
    #[error("base64: {0}")]
    Base64(String),

    /// Tensor object carries neither `value` nor `b64Value`
    #[error("tensor has neither value nor b64Value")]
    MissingPayload,

    /// JSON text could not be parsed or produced
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Input collection contains a non-tensor element
    #[error("found non-tensor type in input {context}: {found}")]
    MalformedInput {
        /// Where the element was found
        context: &'static str,
        /// Runtime type of the element
        found: &'static str,
    },

    /// Inference call answered with a non-success status
    #[error("API returned {status}: {body}")]
    Transport {
        /// Status code
        status: u16,
        /// Raw body text
        body: String,
    },

    /// Inference call could not be completed
    #[error("connection failed: {0}")]
    Connection(String),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for tensorwire operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if the inference call answered with a non-success status.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. })
    }

    /// Check if this is a shape error.
    pub fn is_shape(&self) -> bool {
        matches!(self, Error::Shape(_))
    }

    /// Check if this is a type conversion error (including unknown types).
    pub fn is_type_conversion(&self) -> bool {
        matches!(self, Error::UnsupportedType(_) | Error::TypeConversion(_))
    }

    /// Check if this is a narrowing range error.
    pub fn is_range_narrowing(&self) -> bool {
        matches!(self, Error::RangeNarrowing { .. })
    }

    /// Check if the input to a query was malformed.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Error::MalformedInput { .. })
    }

    /// Status code of a transport error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<ShapeError> for Error {
    fn from(e: ShapeError) -> Self {
        Error::Shape(e)
    }
}

impl From<TensorError> for Error {
    fn from(e: TensorError) -> Self {
        match e {
            TensorError::UnsupportedType { name } => Error::UnsupportedType(name),
            e @ TensorError::InvalidElement { .. } | e @ TensorError::IncompatibleData { .. } => {
                Error::TypeConversion(e.to_string())
            }
            TensorError::Shape(shape) => Error::Shape(shape),
            TensorError::RangeNarrowing { value } => Error::RangeNarrowing { value },
            e @ TensorError::InvalidBase64(_)
            | e @ TensorError::InvalidBase64Type { .. }
            | e @ TensorError::ByteLength { .. } => Error::Base64(e.to_string()),
        }
    }
}

impl From<WireError> for Error {
    fn from(e: WireError) -> Self {
        match e {
            WireError::Json(msg) => Error::Serialization(msg),
            WireError::MissingPayload => Error::MissingPayload,
            WireError::Tensor(e) => e.into(),
        }
    }
}

impl From<DispatchError> for Error {
    fn from(e: DispatchError) -> Self {
        match e {
            DispatchError::Transport { status, body } => Error::Transport { status, body },
            DispatchError::MalformedInput { context, found } => {
                Error::MalformedInput { context, found }
            }
            DispatchError::Connection(msg) => Error::Connection(msg),
            DispatchError::Config(msg) => Error::Config(msg),
            DispatchError::Wire(e) => e.into(),
            DispatchError::Tensor(e) => e.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
