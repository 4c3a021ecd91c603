//! Inference facade and its transport-backed client

use super::input::InferenceInput;
use crate::config::ClientConfig;
use crate::error::{DispatchError, DispatchResult};
use crate::transport::Transport;
use std::collections::BTreeMap;
use tensorwire_core::Tensor;
use tensorwire_wire::{decode_response, encode_request};
use tracing::{debug, warn};

/// Inference facade - run a model on a set of input tensors
///
/// ## Example
///
/// ```
/// use tensorwire_api::{DispatchError, InferenceClient, InferenceFacade, TransportResponse};
/// use tensorwire_core::Tensor;
///
/// let transport = |_: &str, _: String| {
///     Ok::<_, DispatchError>(TransportResponse::new(
///         200,
///         r#"{"y":{"type":"int32","shape":[1],"value":[2]}}"#,
///     ))
/// };
/// let client = InferenceClient::new(transport);
/// let x = Tensor::from_i32(vec![1], vec![1]).unwrap();
/// let outputs = client.query("double", x).unwrap();
/// assert_eq!(outputs["y"], Tensor::from_i32(vec![1], vec![2]).unwrap());
/// ```
pub trait InferenceFacade {
    /// Run `model_id` on already normalized inputs
    ///
    /// ## Desugars to
    /// ```text
    /// body = encode_request(model_id, inputs.into_tensors())
    /// resp = post(run_path, body)
    /// resp.is_success() ? decode_response(resp.body) : Err(Transport)
    /// ```
    fn run(&self, model_id: &str, inputs: InferenceInput)
        -> DispatchResult<BTreeMap<String, Tensor>>;

    /// Run `model_id` on a single tensor, a list, or a name-keyed mapping
    fn query(
        &self,
        model_id: &str,
        inputs: impl Into<InferenceInput>,
    ) -> DispatchResult<BTreeMap<String, Tensor>>
    where
        Self: Sized,
    {
        self.run(model_id, inputs.into())
    }
}

/// Inference client over a [`Transport`]
#[derive(Debug, Clone)]
pub struct InferenceClient<T> {
    transport: T,
    config: ClientConfig,
}

impl<T: Transport> InferenceClient<T> {
    /// Create a client with the default configuration
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, ClientConfig::default())
    }

    /// Create a client with an explicit configuration
    pub fn with_config(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    /// Client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport> InferenceFacade for InferenceClient<T> {
    fn run(
        &self,
        model_id: &str,
        inputs: InferenceInput,
    ) -> DispatchResult<BTreeMap<String, Tensor>> {
        let tensors = inputs.into_tensors();
        let body = encode_request(model_id, &tensors)?;
        debug!(
            model = model_id,
            inputs = tensors.len(),
            bytes = body.len(),
            path = %self.config.run_path,
            "dispatching inference request"
        );

        let response = self.transport.post(&self.config.run_path, body)?;
        if !response.is_success() {
            warn!(model = model_id, status = response.status, "inference call failed");
            return Err(DispatchError::Transport {
                status: response.status,
                body: response.body,
            });
        }

        let outputs = decode_response(&response.body)?;
        debug!(model = model_id, outputs = outputs.len(), "inference response decoded");
        Ok(outputs)
    }
}
