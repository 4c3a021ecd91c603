//! # tensorwire
//!
//! Typed tensors with a JSON/base64 wire codec and an inference dispatch
//! facade.
//!
//! A [`Tensor`] is a flat typed buffer with a shape and an optional name. On
//! the wire it is a JSON object; wide types (float64, int64) either travel as
//! base64 of their little-endian bytes (lossless) or narrowed to 32 bits
//! (lossy).
//!
//! ## Quick Start
//!
//! ```
//! use tensorwire::prelude::*;
//!
//! let transport = |_path: &str, _body: String| {
//!     Ok::<_, tensorwire::DispatchError>(TransportResponse::new(
//!         200,
//!         r#"{"y":{"type":"float32","shape":[1],"value":[0.5]}}"#,
//!     ))
//! };
//! let client = InferenceClient::new(transport);
//!
//! let x = Tensor::from_f64(vec![1], vec![1.0])?;
//! let outputs = client.query("my-model", x)?;
//! assert_eq!(outputs["y"].data(), &TensorData::Float32(vec![0.5]));
//! # Ok::<(), tensorwire::Error>(())
//! ```
//!
//! ## Crates
//!
//! - [`tensorwire_core`] - element types, storage, shape validation, narrowing
//! - [`tensorwire_wire`] - tensor JSON objects and request/response envelopes
//! - [`tensorwire_api`] - input normalization, transport seam, query

#![warn(missing_docs)]

mod error;

pub mod prelude;

pub use error::{Error, Result};

pub use tensorwire_api::{
    ClientConfig, DispatchError, InferenceClient, InferenceFacade, InferenceInput, Transport,
    TransportResponse,
};
pub use tensorwire_core::{
    ElementType, EngineTensor, ShapeError, Tensor, TensorData, TensorError, MAX_SAFE_INTEGER,
    MIN_SAFE_INTEGER,
};
pub use tensorwire_wire::{
    decode_request, decode_response, decode_tensor, encode_request, encode_response,
    encode_tensor, from_json, is_tensor_object, to_json, TensorJson, WireError,
};

#[cfg(feature = "http")]
pub use tensorwire_api::HttpTransport;
