//! Request and response envelopes for the inference call
//!
//! ## Request
//! ```json
//! {"model": "my-model", "input": [<tensor object>, ...]}
//! ```
//!
//! ## Response
//! ```json
//! {"<output name>": <tensor object>, ...}
//! ```
//!
//! Requests always use the lossless path: wide inputs travel as base64.

use super::decode::from_json;
use super::encode::to_json;
use super::error::WireResult;
use super::TensorJson;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tensorwire_core::Tensor;

/// Inference request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceRequest {
    /// Model identifier
    pub model: String,
    /// Input tensors, in order
    pub input: Vec<TensorJson>,
}

/// Inference response body, keyed by output name
pub type InferenceResponse = BTreeMap<String, TensorJson>;

/// Encode a request body for `model` with `inputs`
pub fn encode_request(model: &str, inputs: &[Tensor]) -> WireResult<String> {
    let input = inputs
        .iter()
        .map(|t| to_json(t, true))
        .collect::<WireResult<Vec<_>>>()?;
    let request = InferenceRequest {
        model: model.to_string(),
        input,
    };
    Ok(serde_json::to_string(&request)?)
}

/// Decode a request body into its model identifier and input tensors
pub fn decode_request(body: &str) -> WireResult<(String, Vec<Tensor>)> {
    let request: InferenceRequest = serde_json::from_str(body)?;
    let inputs = request
        .input
        .into_iter()
        .map(from_json)
        .collect::<WireResult<Vec<_>>>()?;
    Ok((request.model, inputs))
}

/// Encode a response body from named outputs
pub fn encode_response(outputs: &BTreeMap<String, Tensor>, encode64: bool) -> WireResult<String> {
    let response = outputs
        .iter()
        .map(|(name, t)| -> WireResult<(String, TensorJson)> {
            Ok((name.clone(), to_json(t, encode64)?))
        })
        .collect::<WireResult<InferenceResponse>>()?;
    Ok(serde_json::to_string(&response)?)
}

/// Decode a response body into named output tensors
///
/// Any output that fails to decode fails the whole response.
pub fn decode_response(body: &str) -> WireResult<BTreeMap<String, Tensor>> {
    let response: InferenceResponse = serde_json::from_str(body)?;
    response
        .into_iter()
        .map(|(name, json)| -> WireResult<(String, Tensor)> { Ok((name, from_json(json)?)) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::WireError;
    use serde_json::{json, Value};
    use tensorwire_core::{ElementType, TensorData};

    #[test]
    fn test_request_shape() {
        let x = Tensor::from_f64(vec![1], vec![1.0]).unwrap().with_name("x");
        let y = Tensor::from_strings(vec![1], vec!["hi"]).unwrap();
        let body = encode_request("m1", &[x, y]).unwrap();

        let parsed: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["model"], json!("m1"));
        assert_eq!(parsed["input"][0]["b64Value"], json!("AAAAAAAA8D8="));
        assert_eq!(parsed["input"][0]["value"], Value::Null);
        assert_eq!(parsed["input"][0]["name"], json!("x"));
        assert_eq!(parsed["input"][1]["value"], json!(["hi"]));
        assert_eq!(parsed["input"][1]["name"], Value::Null);
    }

    #[test]
    fn test_request_round_trip_keeps_wide_precision() {
        let ids = Tensor::from_i64(vec![2], vec![i64::MAX, -1]).unwrap();
        let body = encode_request("m", &[ids.clone()]).unwrap();
        let (model, inputs) = decode_request(&body).unwrap();
        assert_eq!(model, "m");
        assert_eq!(inputs, vec![ids]);
    }

    #[test]
    fn test_decode_response() {
        let body = r#"{
            "logits": {"type": "float32", "shape": [2], "value": [0.5, 1.5], "b64Value": null, "name": null},
            "ids": {"type": "int64", "shape": [1], "value": null, "b64Value": "AQAAAAAAAAA=", "name": "ids"}
        }"#;
        let outputs = decode_response(body).unwrap();
        assert_eq!(outputs.len(), 2);
        assert_eq!(outputs["logits"].data(), &TensorData::Float32(vec![0.5, 1.5]));
        assert_eq!(outputs["ids"].dtype(), ElementType::Int64);
        assert_eq!(outputs["ids"].data(), &TensorData::Int64(vec![1]));
    }

    #[test]
    fn test_response_round_trip() {
        let mut outputs = BTreeMap::new();
        outputs.insert("a".to_string(), Tensor::from_bools(vec![1], vec![true]).unwrap());
        outputs.insert("b".to_string(), Tensor::from_f64(vec![1], vec![0.25]).unwrap());
        let body = encode_response(&outputs, true).unwrap();
        assert_eq!(decode_response(&body).unwrap(), outputs);
    }

    #[test]
    fn test_bad_output_fails_whole_response() {
        let body = r#"{
            "good": {"type": "int32", "shape": [1], "value": [1]},
            "bad": {"type": "int32", "shape": [2], "value": [1]}
        }"#;
        let err = decode_response(body).unwrap_err();
        assert!(matches!(err, WireError::Tensor(_)));
    }

    #[test]
    fn test_response_must_be_object() {
        assert!(matches!(decode_response("[1,2]"), Err(WireError::Json(_))));
    }
}
