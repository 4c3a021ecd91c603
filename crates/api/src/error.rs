//! Dispatch errors
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | `Transport` | the inference call answered with a non-2xx status |
//! | `MalformedInput` | a collection input holds something that is not a tensor |
//! | `Connection` | the transport could not complete the call at all |
//! | `Config` | client configuration is invalid |
//! | `Wire` / `Tensor` | encoding or decoding a tensor failed |

use tensorwire_core::TensorError;
use tensorwire_wire::WireError;
use thiserror::Error;

/// Result type for dispatch operations
pub type DispatchResult<T> = std::result::Result<T, DispatchError>;

/// Dispatch error types
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Non-success response status, with the raw body text
    #[error("API returned {status}: {body}")]
    Transport {
        /// HTTP-style status code
        status: u16,
        /// Response body text
        body: String,
    },

    /// Input collection contains a non-tensor element
    #[error("found non-tensor type in input {context}: {found}")]
    MalformedInput {
        /// Where the element was found ("map", "list" or "value")
        context: &'static str,
        /// Runtime type of the offending element
        found: &'static str,
    },

    /// The call could not be completed
    #[error("connection failed: {0}")]
    Connection(String),

    /// Invalid client configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Wire encoding or decoding failure
    #[error(transparent)]
    Wire(#[from] WireError),

    /// Tensor construction or narrowing failure
    #[error(transparent)]
    Tensor(#[from] TensorError),
}

impl DispatchError {
    /// Check if the inference call answered with a non-success status
    pub fn is_transport(&self) -> bool {
        matches!(self, DispatchError::Transport { .. })
    }

    /// Check if the input was malformed
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, DispatchError::MalformedInput { .. })
    }

    /// Status code of a transport error
    pub fn status(&self) -> Option<u16> {
        match self {
            DispatchError::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }
}
