//! JSON decoding of tensors
//!
//! A non-null `value` always wins over `b64Value`, even when both are present
//! and even when `value` is an empty array. Only when `value` is null or
//! missing is the base64 payload used.

use super::error::{WireError, WireResult};
use super::TensorJson;
use serde_json::Value;
use tensorwire_core::{shape, ElementType, Tensor, TensorError};

/// Build a tensor from its JSON object form
pub fn from_json(json: TensorJson) -> WireResult<Tensor> {
    let TensorJson {
        dtype,
        shape: dims,
        value,
        b64_value,
        name,
    } = json;
    let dtype: ElementType = dtype.parse()?;

    match (value, b64_value) {
        (Some(values), _) => Ok(Tensor::from_values(dtype, &dims, &values, name)?),
        (None, Some(b64)) => {
            let dims = shape::shape_from_json(&dims).map_err(TensorError::from)?;
            Ok(Tensor::from_base64(dtype, dims, b64, name)?)
        }
        (None, None) => Err(WireError::MissingPayload),
    }
}

/// Build a tensor from an already parsed JSON value
pub fn from_value(value: Value) -> WireResult<Tensor> {
    from_json(serde_json::from_value(value)?)
}

/// Build a tensor from JSON text
pub fn decode_tensor(json: &str) -> WireResult<Tensor> {
    from_json(serde_json::from_str(json)?)
}
