//! Core types for tensorwire
//!
//! This crate defines the typed tensor model shared by every other crate:
//!
//! - [`ElementType`]: the six scalar kinds (float32, float64, int32, int64,
//!   string, bool)
//! - [`TensorData`]: flat typed storage with explicit, fallible conversions
//! - [`Tensor`]: shape-validated, immutable value object with a cached
//!   base64 form
//! - [`TensorError`]: construction, narrowing and binary decoding failures
//!
//! ## Wide and narrow types
//!
//! float64 and int64 are "wide": JSON numbers cannot carry them exactly. They
//! travel either as base64 of their raw bytes (lossless) or narrowed to
//! float32 / int32 (lossy). See [`Tensor::as_32bit`].
//!
//! ```
//! use tensorwire_core::{ElementType, Tensor};
//!
//! let t = Tensor::from_f64(vec![2], vec![0.1, 0.2]).unwrap();
//! assert!(t.is_64bit());
//! assert_eq!(t.as_32bit().unwrap().dtype(), ElementType::Float32);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod binary;
pub mod data;
pub mod dtype;
pub mod engine;
pub mod error;
pub mod shape;
pub mod tensor;

pub use data::{json_type_name, TensorData};
pub use dtype::ElementType;
pub use engine::EngineTensor;
pub use error::{ShapeError, TensorError, TensorResult};
pub use tensor::{Tensor, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER};
