//! Dispatch facade for tensorwire
//!
//! Normalizes inference inputs, sends them through a [`Transport`] and
//! decodes the named outputs.
//!
//! ## Architecture
//!
//! ```text
//! caller ──► InferenceFacade::query ──► encode_request ──► Transport::post
//!                                                               │
//! BTreeMap<String, Tensor> ◄── decode_response ◄────────────────┘
//! ```
//!
//! The blocking HTTP transport lives behind the `http` feature; any closure
//! of the right shape is a transport too.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod facade;
pub mod transport;

pub use config::ClientConfig;
pub use error::{DispatchError, DispatchResult};
pub use facade::{InferenceClient, InferenceFacade, InferenceInput};
pub use transport::{Transport, TransportResponse};

#[cfg(feature = "http")]
pub use transport::HttpTransport;
