//! Facade API
//!
//! The facade turns "run model M on these inputs" into one encoded request,
//! one transport call and one decoded response.
//!
//! ## Desugaring
//!
//! | Facade | Underlying steps |
//! |--------|------------------|
//! | `query(model, inputs)` | `normalize(inputs)`; `encode_request(model, tensors)`; `post(run_path, body)`; `decode_response(body)` |
//!
//! ## Implicit Behaviors
//!
//! - Requests always use the lossless path, so wide inputs keep full precision
//! - A non-2xx response is an error carrying the status and the raw body
//! - No retries
//! - Every failure propagates; nothing is swallowed

mod inference;
mod input;

pub use inference::{InferenceClient, InferenceFacade};
pub use input::InferenceInput;
