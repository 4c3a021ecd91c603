//! JSON wire encoding for tensors
//!
//! A tensor travels as a JSON object:
//!
//! ```json
//! {
//!   "type": "float64",
//!   "shape": [2],
//!   "value": null,
//!   "b64Value": "mpmZmZmZuT+amZmZmZnJPw==",
//!   "name": "x"
//! }
//! ```
//!
//! Exactly one of `value` / `b64Value` is expected to carry data. When both
//! do, `value` wins and the payloads are not cross-checked.

mod decode;
mod encode;
mod envelope;
mod error;

pub use decode::{decode_tensor, from_json, from_value};
pub use encode::{encode_tensor, to_json};
pub use envelope::{
    decode_request, decode_response, encode_request, encode_response, InferenceRequest,
    InferenceResponse,
};
pub use error::{WireError, WireResult};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The JSON object form of a tensor
///
/// `shape` and `value` stay dynamically typed until the tensor is built, so
/// that a bad dimension or element is reported as a shape or type error
/// rather than a parse error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TensorJson {
    /// Element type name
    #[serde(rename = "type")]
    pub dtype: String,
    /// Dimensions
    pub shape: Vec<Value>,
    /// Elements on the JSON-native path
    #[serde(default)]
    pub value: Option<Vec<Value>>,
    /// Base64 payload on the lossless path
    #[serde(rename = "b64Value", default)]
    pub b64_value: Option<String>,
    /// Tensor name
    #[serde(default)]
    pub name: Option<String>,
}

/// Check if a JSON value is a tensor object
///
/// A tensor object is a JSON object with `type` and `shape` keys and at least
/// one of `value` / `b64Value`. Unrelated objects that happen to share one of
/// these keys are not tensors.
pub fn is_tensor_object(value: &Value) -> bool {
    match value {
        Value::Object(map) => {
            map.get("type").map_or(false, Value::is_string)
                && map.get("shape").map_or(false, Value::is_array)
                && (map.contains_key("value") || map.contains_key("b64Value"))
        }
        _ => false,
    }
}


#[cfg(test)]
mod roundtrip_tests {
    use super::*;
    use tensorwire_core::{ElementType, Tensor, TensorData, MAX_SAFE_INTEGER};

    fn narrow_samples() -> Vec<Tensor> {
        vec![
            Tensor::from_f32(vec![2, 2], vec![0.5, -1.25, 3.0e-7, 1.0e30]).unwrap(),
            Tensor::from_i32(vec![3], vec![i32::MIN, 0, i32::MAX]).unwrap(),
            Tensor::from_strings(vec![2], vec!["hello", "日本語"]).unwrap(),
            Tensor::from_bools(vec![1, 3], vec![true, false, true]).unwrap(),
            Tensor::from_f32(vec![0], vec![]).unwrap().with_name("empty"),
        ]
    }

    #[test]
    fn test_round_trip_json_native_path() {
        for original in narrow_samples() {
            let decoded = from_json(to_json(&original, false).unwrap()).unwrap();
            assert_eq!(decoded, original);
        }
    }

    #[test]
    fn test_round_trip_lossless_path_narrow_types() {
        for original in narrow_samples() {
            let decoded = from_json(to_json(&original, true).unwrap()).unwrap();
            assert_eq!(decoded, original);
        }
    }

    #[test]
    fn test_round_trip_lossless_path_wide_types() {
        let originals = vec![
            Tensor::from_f64(vec![3], vec![0.1, f64::MAX, -0.0]).unwrap(),
            Tensor::from_i64(vec![3], vec![i64::MIN, MAX_SAFE_INTEGER + 2, i64::MAX])
                .unwrap()
                .with_name("ids"),
        ];
        for original in originals {
            let json = to_json(&original, true).unwrap();
            assert!(json.value.is_none());
            let decoded = from_json(json).unwrap();
            assert_eq!(decoded, original);
        }
    }

    #[test]
    fn test_round_trip_through_text() {
        let original = Tensor::from_f64(vec![2], vec![1.0 / 3.0, 2.0 / 3.0])
            .unwrap()
            .with_name("thirds");
        let text = encode_tensor(&original, true).unwrap();
        assert_eq!(decode_tensor(&text).unwrap(), original);
    }

    #[test]
    fn test_lossy_path_changes_wide_type() {
        let original = Tensor::from_f64(vec![1], vec![0.1]).unwrap();
        let decoded = from_json(to_json(&original, false).unwrap()).unwrap();
        assert_eq!(decoded.dtype(), ElementType::Float32);
        assert_eq!(decoded.data(), &TensorData::Float32(vec![0.1f32]));
        assert_eq!(decoded.shape(), original.shape());
    }
}
