//! Wire encoding for tensorwire
//!
//! This crate implements the JSON wire contract for tensors and for the
//! inference call that carries them.
//!
//! ## Wire Encoding Rules
//!
//! | Element type | `encode64` | Encoding |
//! |--------------|------------|----------|
//! | float64, int64 | true | `b64Value`: base64 of little-endian bytes (lossless) |
//! | float64, int64 | false | `value`: narrowed to float32 / int32 (lossy) |
//! | float32, int32 | either | `value`: JSON numbers |
//! | string, bool | either | `value`: JSON strings / booleans |
//!
//! ## Examples
//!
//! ```
//! use tensorwire_core::Tensor;
//! use tensorwire_wire::{decode_tensor, encode_tensor};
//!
//! let t = Tensor::from_i64(vec![2], vec![i64::MAX, 7]).unwrap();
//! let json = encode_tensor(&t, true).unwrap();
//! assert_eq!(decode_tensor(&json).unwrap(), t);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod json;

// Re-export main types
pub use json::{
    decode_request, decode_response, decode_tensor, encode_request, encode_response,
    encode_tensor, from_json, from_value, is_tensor_object, to_json, InferenceRequest,
    InferenceResponse, TensorJson, WireError, WireResult,
};
