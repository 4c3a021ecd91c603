//! JSON encoding of tensors
//!
//! Two paths:
//! - lossless: wide tensors (float64, int64) with `encode64` set carry their
//!   raw bytes as base64 in `b64Value`
//! - JSON-native: everything else is narrowed to 32 bits (a no-op for narrow
//!   types) and carries its elements in `value`

use super::error::WireResult;
use super::TensorJson;
use serde_json::Value;
use tensorwire_core::Tensor;
use tracing::{debug, trace};

/// Encode a tensor to its JSON object form
///
/// With `encode64` unset, float64 elements are rounded to float32 and int64
/// elements must fit the safe-integer bound; 64-bit precision is not kept.
pub fn to_json(tensor: &Tensor, encode64: bool) -> WireResult<TensorJson> {
    let shape = encode_shape(tensor.shape());
    let name = tensor.name().map(str::to_string);

    if encode64 && tensor.is_64bit() {
        let cached = tensor.cached_encoding().is_some();
        let b64 = tensor.encoded_base64()?.to_string();
        trace!(dtype = %tensor.dtype(), numel = tensor.numel(), cached, "base64 tensor encoding");
        return Ok(TensorJson {
            dtype: tensor.dtype().as_str().to_string(),
            shape,
            value: None,
            b64_value: Some(b64),
            name,
        });
    }

    let narrowed = tensor.as_32bit()?;
    if tensor.is_64bit() {
        debug!(
            from = %tensor.dtype(),
            to = %narrowed.dtype(),
            numel = tensor.numel(),
            "narrowing wide tensor for JSON-native encoding"
        );
    }
    Ok(TensorJson {
        dtype: narrowed.dtype().as_str().to_string(),
        shape,
        value: Some(narrowed.data().to_json_values()),
        b64_value: None,
        name,
    })
}

/// Encode a tensor to JSON text
pub fn encode_tensor(tensor: &Tensor, encode64: bool) -> WireResult<String> {
    Ok(serde_json::to_string(&to_json(tensor, encode64)?)?)
}

fn encode_shape(shape: &[usize]) -> Vec<Value> {
    shape.iter().map(|&d| Value::from(d)).collect()
}
