//! Convenient imports for tensorwire.
//!
//! ```
//! use tensorwire::prelude::*;
//!
//! let t = Tensor::from_i32(vec![2], vec![1, 2])?;
//! let text = encode_tensor(&t, true)?;
//! assert_eq!(decode_tensor(&text)?, t);
//! # Ok::<(), tensorwire::Error>(())
//! ```

// Error handling
pub use crate::error::{Error, Result};

// Tensor model
pub use tensorwire_core::{ElementType, EngineTensor, Tensor, TensorData};

// Wire codec
pub use tensorwire_wire::{decode_tensor, encode_tensor, from_json, to_json, TensorJson};

// Dispatch
pub use tensorwire_api::{
    ClientConfig, InferenceClient, InferenceFacade, InferenceInput, Transport, TransportResponse,
};

// Re-export serde_json for convenience
pub use serde_json::json;
