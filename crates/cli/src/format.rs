//! Output formatting for CLI results.
//!
//! Two modes:
//! - **Human**: aligned key/value lines
//! - **Json**: one JSON object per result

use serde_json::{json, Value};
#[cfg(feature = "http")]
use std::collections::BTreeMap;
use tensorwire_core::Tensor;

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Summary of one tensor: type, shape, element count, name, width, encoding
pub fn format_summary(tensor: &Tensor, mode: OutputMode) -> String {
    let cached = tensor.cached_encoding().is_some();
    match mode {
        OutputMode::Json => summary_value(tensor, cached).to_string(),
        OutputMode::Human => {
            let name = tensor.name().unwrap_or("(unnamed)");
            let width = if tensor.is_64bit() { "wide" } else { "narrow" };
            let mut lines = vec![
                format!("name:     {}", name),
                format!("type:     {} ({})", tensor.dtype(), width),
                format!("shape:    {:?}", tensor.shape()),
                format!("numel:    {}", tensor.numel()),
            ];
            if cached {
                lines.push("encoding: base64".to_string());
            }
            lines.join("\n")
        }
    }
}

/// Summaries of named outputs, in name order
#[cfg(feature = "http")]
pub fn format_outputs(outputs: &BTreeMap<String, Tensor>, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => {
            let map: serde_json::Map<String, Value> = outputs
                .iter()
                .map(|(name, t)| (name.clone(), summary_value(t, t.cached_encoding().is_some())))
                .collect();
            Value::Object(map).to_string()
        }
        OutputMode::Human => outputs
            .iter()
            .map(|(name, t)| format!("[{}]\n{}", name, format_summary(t, mode)))
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

fn summary_value(tensor: &Tensor, cached: bool) -> Value {
    json!({
        "name": tensor.name(),
        "type": tensor.dtype().as_str(),
        "shape": tensor.shape(),
        "numel": tensor.numel(),
        "wide": tensor.is_64bit(),
        "base64": cached,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_summary() {
        let t = Tensor::from_i64(vec![2, 2], vec![1, 2, 3, 4]).unwrap().with_name("ids");
        let out = format_summary(&t, OutputMode::Human);
        assert!(out.contains("name:     ids"));
        assert!(out.contains("type:     int64 (wide)"));
        assert!(out.contains("shape:    [2, 2]"));
        assert!(out.contains("numel:    4"));
        assert!(!out.contains("encoding"));
    }

    #[test]
    fn test_json_summary() {
        let t = Tensor::from_bools(vec![3], vec![true, false, true]).unwrap();
        let out: Value = serde_json::from_str(&format_summary(&t, OutputMode::Json)).unwrap();
        assert_eq!(out["name"], Value::Null);
        assert_eq!(out["type"], "bool");
        assert_eq!(out["shape"], json!([3]));
        assert_eq!(out["wide"], false);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_outputs_in_name_order() {
        let mut outputs = BTreeMap::new();
        outputs.insert("b".to_string(), Tensor::from_f32(vec![1], vec![1.0]).unwrap());
        outputs.insert("a".to_string(), Tensor::from_f32(vec![1], vec![2.0]).unwrap());
        let out = format_outputs(&outputs, OutputMode::Human);
        assert!(out.find("[a]").unwrap() < out.find("[b]").unwrap());
    }
}
