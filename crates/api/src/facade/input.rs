//! Input normalization
//!
//! A query accepts a single tensor, an ordered list of tensors, or a mapping
//! from input name to tensor. All three flatten to an ordered list; in the
//! mapping case each key becomes the tensor's name.
//!
//! Dynamically typed inputs ([`InferenceInput::from_value`]) are classified
//! with [`is_tensor_object`], which requires `type`, `shape` and a payload key,
//! so an unrelated object is never mistaken for a tensor.

use crate::error::{DispatchError, DispatchResult};
use serde_json::Value;
use std::collections::BTreeMap;
use tensorwire_core::{json_type_name, Tensor};
use tensorwire_wire::{from_value, is_tensor_object};

/// Inputs to one inference call
#[derive(Debug, Clone, PartialEq)]
pub enum InferenceInput {
    /// One tensor
    Single(Tensor),
    /// Tensors in order
    List(Vec<Tensor>),
    /// Tensors keyed by input name, in iteration order
    Named(Vec<(String, Tensor)>),
}

impl InferenceInput {
    /// Classify a dynamically typed input
    ///
    /// - a tensor object is a single input
    /// - an array is a list; every element must be a tensor object
    /// - any other object is a name-keyed mapping, flattened in document
    ///   order; every value must be a tensor object
    ///
    /// One bad element fails the whole input.
    pub fn from_value(value: Value) -> DispatchResult<Self> {
        if is_tensor_object(&value) {
            return Ok(InferenceInput::Single(from_value(value)?));
        }
        match value {
            Value::Array(items) => items
                .into_iter()
                .map(|item| tensor_member(item, "list"))
                .collect::<DispatchResult<Vec<_>>>()
                .map(InferenceInput::List),
            Value::Object(map) => map
                .into_iter()
                .map(|(name, item)| Ok((name, tensor_member(item, "map")?)))
                .collect::<DispatchResult<Vec<_>>>()
                .map(InferenceInput::Named),
            other => Err(DispatchError::MalformedInput {
                context: "value",
                found: json_type_name(&other),
            }),
        }
    }

    /// Number of tensors
    pub fn len(&self) -> usize {
        match self {
            InferenceInput::Single(_) => 1,
            InferenceInput::List(v) => v.len(),
            InferenceInput::Named(v) => v.len(),
        }
    }

    /// True if there are no tensors
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten to an ordered list, naming mapped tensors after their keys
    pub fn into_tensors(self) -> Vec<Tensor> {
        match self {
            InferenceInput::Single(t) => vec![t],
            InferenceInput::List(v) => v,
            InferenceInput::Named(v) => v
                .into_iter()
                .map(|(name, t)| t.with_name(name))
                .collect(),
        }
    }
}

fn tensor_member(item: Value, context: &'static str) -> DispatchResult<Tensor> {
    if !is_tensor_object(&item) {
        return Err(DispatchError::MalformedInput {
            context,
            found: json_type_name(&item),
        });
    }
    Ok(from_value(item)?)
}

impl From<Tensor> for InferenceInput {
    fn from(t: Tensor) -> Self {
        InferenceInput::Single(t)
    }
}

impl From<Vec<Tensor>> for InferenceInput {
    fn from(v: Vec<Tensor>) -> Self {
        InferenceInput::List(v)
    }
}

impl From<Vec<(String, Tensor)>> for InferenceInput {
    fn from(v: Vec<(String, Tensor)>) -> Self {
        InferenceInput::Named(v)
    }
}

impl From<BTreeMap<String, Tensor>> for InferenceInput {
    fn from(map: BTreeMap<String, Tensor>) -> Self {
        InferenceInput::Named(map.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn t(v: i32) -> Tensor {
        Tensor::from_i32(vec![1], vec![v]).unwrap()
    }

    #[test]
    fn test_single_flattens_to_one() {
        let input = InferenceInput::from(t(1));
        assert_eq!(input.len(), 1);
        assert_eq!(input.into_tensors(), vec![t(1)]);
    }

    #[test]
    fn test_list_keeps_names_and_order() {
        let input = InferenceInput::from(vec![t(1).with_name("keep"), t(2)]);
        let tensors = input.into_tensors();
        assert_eq!(tensors[0].name(), Some("keep"));
        assert_eq!(tensors[1].name(), None);
    }

    #[test]
    fn test_named_assigns_keys_in_order() {
        let input = InferenceInput::from(vec![
            ("y".to_string(), t(2)),
            ("x".to_string(), t(1).with_name("overwritten")),
        ]);
        let names: Vec<_> = input
            .into_tensors()
            .iter()
            .map(|t| t.name().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["y", "x"]);
    }

    #[test]
    fn test_btreemap_iterates_sorted() {
        let mut map = BTreeMap::new();
        map.insert("b".to_string(), t(2));
        map.insert("a".to_string(), t(1));
        let tensors = InferenceInput::from(map).into_tensors();
        assert_eq!(tensors[0].name(), Some("a"));
        assert_eq!(tensors[1].name(), Some("b"));
    }

    #[test]
    fn test_from_value_single() {
        let input =
            InferenceInput::from_value(json!({"type": "int32", "shape": [1], "value": [3]})).unwrap();
        assert_eq!(input, InferenceInput::Single(t(3)));
    }

    #[test]
    fn test_from_value_list() {
        let input = InferenceInput::from_value(json!([
            {"type": "int32", "shape": [1], "value": [1]},
            {"type": "int32", "shape": [1], "value": [2]}
        ]))
        .unwrap();
        assert_eq!(input, InferenceInput::List(vec![t(1), t(2)]));
    }

    #[test]
    fn test_from_value_named() {
        let input = InferenceInput::from_value(json!({
            "x": {"type": "int32", "shape": [1], "value": [1]},
            "y": {"type": "int32", "shape": [1], "value": [2]}
        }))
        .unwrap();
        let tensors = input.into_tensors();
        assert_eq!(tensors[0].name(), Some("x"));
        assert_eq!(tensors[1].name(), Some("y"));
    }

    #[test]
    fn test_from_value_named_keeps_document_order() {
        let input = InferenceInput::from_value(json!({
            "y": {"type": "int32", "shape": [1], "value": [2]},
            "x": {"type": "int32", "shape": [1], "value": [1]}
        }))
        .unwrap();
        let tensors = input.into_tensors();
        let names: Vec<_> = tensors.iter().map(|t| t.name().unwrap()).collect();
        assert_eq!(names, vec!["y", "x"]);
        assert_eq!(tensors[0].data(), &tensorwire_core::TensorData::Int32(vec![2]));
    }

    #[test]
    fn test_non_tensor_in_map_reports_type() {
        let err = InferenceInput::from_value(json!({
            "x": {"type": "int32", "shape": [1], "value": [1]},
            "y": 42
        }))
        .unwrap_err();
        assert_eq!(err.to_string(), "found non-tensor type in input map: number");
    }

    #[test]
    fn test_lookalike_object_in_list_rejected() {
        let err = InferenceInput::from_value(json!([
            {"type": "int32", "shape": [1], "value": [1]},
            {"type": "note", "text": "not a tensor"}
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            DispatchError::MalformedInput {
                context: "list",
                found: "object"
            }
        ));
    }

    #[test]
    fn test_scalar_value_rejected() {
        let err = InferenceInput::from_value(json!("x")).unwrap_err();
        assert!(err.is_malformed_input());
    }

    #[test]
    fn test_bad_tensor_aborts_batch() {
        let err = InferenceInput::from_value(json!([
            {"type": "int32", "shape": [2], "value": [1]}
        ]))
        .unwrap_err();
        assert!(matches!(err, DispatchError::Wire(_)));
    }
}
