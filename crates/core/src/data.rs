//! Typed tensor storage
//!
//! [`TensorData`] is the canonical flat storage of a tensor, one variant per
//! [`ElementType`]. Conversions between variants are explicit and fallible:
//! nothing is silently truncated into an integer slot.
//!
//! ## Conversion rules
//!
//! | Target | Accepted sources |
//! |--------|------------------|
//! | float32 / float64 | any numeric (rounded to nearest) |
//! | int32 / int64 | integers in range, finite integral floats in range |
//! | bool | any numeric (non-zero and not NaN), strings (non-empty) |
//! | string | strings only |

use crate::dtype::ElementType;
use crate::error::{TensorError, TensorResult};
use serde_json::Value;

/// Flat, homogeneously typed element storage
#[derive(Debug, Clone, PartialEq)]
pub enum TensorData {
    /// float32 elements
    Float32(Vec<f32>),
    /// float64 elements
    Float64(Vec<f64>),
    /// int32 elements
    Int32(Vec<i32>),
    /// int64 elements
    Int64(Vec<i64>),
    /// string elements
    String(Vec<String>),
    /// bool elements
    Bool(Vec<bool>),
}

impl TensorData {
    /// Element type of this storage
    pub fn dtype(&self) -> ElementType {
        match self {
            TensorData::Float32(_) => ElementType::Float32,
            TensorData::Float64(_) => ElementType::Float64,
            TensorData::Int32(_) => ElementType::Int32,
            TensorData::Int64(_) => ElementType::Int64,
            TensorData::String(_) => ElementType::String,
            TensorData::Bool(_) => ElementType::Bool,
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        match self {
            TensorData::Float32(v) => v.len(),
            TensorData::Float64(v) => v.len(),
            TensorData::Int32(v) => v.len(),
            TensorData::Int64(v) => v.len(),
            TensorData::String(v) => v.len(),
            TensorData::Bool(v) => v.len(),
        }
    }

    /// True if there are no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert this storage to `target`
    ///
    /// Returns `self` unchanged when it already has the target type.
    pub fn convert_to(self, target: ElementType) -> TensorResult<TensorData> {
        if self.dtype() == target {
            return Ok(self);
        }
        match target {
            ElementType::Float32 => self.to_floats(target).map(|v| {
                TensorData::Float32(v.into_iter().map(|x| x as f32).collect())
            }),
            ElementType::Float64 => self.to_floats(target).map(TensorData::Float64),
            ElementType::Int32 => self.to_int32(),
            ElementType::Int64 => self.to_int64(),
            ElementType::Bool => self.to_bools(),
            ElementType::String => match self {
                TensorData::String(v) => Ok(TensorData::String(v)),
                other => match other.to_json_values().into_iter().next() {
                    Some(first) => Err(invalid(ElementType::String, &first)),
                    None => Ok(TensorData::String(Vec::new())),
                },
            },
        }
    }

    /// Build storage of type `dtype` from dynamically typed JSON elements
    ///
    /// Float targets read `null` as NaN, which is how non-finite floats come
    /// back from the JSON-native path.
    pub fn from_json_values(dtype: ElementType, values: &[Value]) -> TensorResult<TensorData> {
        match dtype {
            ElementType::Float32 => values
                .iter()
                .map(|v| json_float(dtype, v).map(|x| x as f32))
                .collect::<TensorResult<Vec<_>>>()
                .map(TensorData::Float32),
            ElementType::Float64 => values
                .iter()
                .map(|v| json_float(dtype, v))
                .collect::<TensorResult<Vec<_>>>()
                .map(TensorData::Float64),
            ElementType::Int32 => values
                .iter()
                .map(|v| {
                    json_integer(dtype, v)
                        .and_then(|i| i32::try_from(i).map_err(|_| invalid(dtype, v)))
                })
                .collect::<TensorResult<Vec<_>>>()
                .map(TensorData::Int32),
            ElementType::Int64 => values
                .iter()
                .map(|v| json_integer(dtype, v))
                .collect::<TensorResult<Vec<_>>>()
                .map(TensorData::Int64),
            ElementType::String => values
                .iter()
                .map(|v| match v {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(invalid(dtype, other)),
                })
                .collect::<TensorResult<Vec<_>>>()
                .map(TensorData::String),
            ElementType::Bool => Ok(TensorData::Bool(values.iter().map(json_truthy).collect())),
        }
    }

    /// Render the elements as JSON values
    ///
    /// Non-finite floats have no JSON number form and render as `null`.
    pub fn to_json_values(&self) -> Vec<Value> {
        match self {
            TensorData::Float32(v) => v.iter().map(|&x| float_value(x as f64)).collect(),
            TensorData::Float64(v) => v.iter().map(|&x| float_value(x)).collect(),
            TensorData::Int32(v) => v.iter().map(|&x| Value::from(x)).collect(),
            TensorData::Int64(v) => v.iter().map(|&x| Value::from(x)).collect(),
            TensorData::String(v) => v.iter().map(|s| Value::String(s.clone())).collect(),
            TensorData::Bool(v) => v.iter().map(|&b| Value::Bool(b)).collect(),
        }
    }

    fn to_floats(self, target: ElementType) -> TensorResult<Vec<f64>> {
        match self {
            TensorData::Float32(v) => Ok(v.into_iter().map(f64::from).collect()),
            TensorData::Float64(v) => Ok(v),
            TensorData::Int32(v) => Ok(v.into_iter().map(f64::from).collect()),
            TensorData::Int64(v) => Ok(v.into_iter().map(|x| x as f64).collect()),
            other => Err(incompatible(target, &other)),
        }
    }

    fn to_int32(self) -> TensorResult<TensorData> {
        const T: ElementType = ElementType::Int32;
        let out = match self {
            TensorData::Int32(v) => v,
            TensorData::Int64(v) => v
                .into_iter()
                .map(|x| i32::try_from(x).map_err(|_| invalid(T, &Value::from(x))))
                .collect::<TensorResult<_>>()?,
            TensorData::Float32(v) => v
                .into_iter()
                .map(|x| integral(T, f64::from(x), i32::MIN as f64, i32::MAX as f64).map(|x| x as i32))
                .collect::<TensorResult<_>>()?,
            TensorData::Float64(v) => v
                .into_iter()
                .map(|x| integral(T, x, i32::MIN as f64, i32::MAX as f64).map(|x| x as i32))
                .collect::<TensorResult<_>>()?,
            other => return Err(incompatible(T, &other)),
        };
        Ok(TensorData::Int32(out))
    }

    fn to_int64(self) -> TensorResult<TensorData> {
        const T: ElementType = ElementType::Int64;
        let out = match self {
            TensorData::Int64(v) => v,
            TensorData::Int32(v) => v.into_iter().map(i64::from).collect(),
            TensorData::Float32(v) => v
                .into_iter()
                .map(|x| integral_i64(f64::from(x)))
                .collect::<TensorResult<_>>()?,
            TensorData::Float64(v) => v
                .into_iter()
                .map(integral_i64)
                .collect::<TensorResult<_>>()?,
            other => return Err(incompatible(T, &other)),
        };
        Ok(TensorData::Int64(out))
    }

    fn to_bools(self) -> TensorResult<TensorData> {
        let out = match self {
            TensorData::Bool(v) => v,
            TensorData::Float32(v) => v.into_iter().map(|x| x != 0.0 && !x.is_nan()).collect(),
            TensorData::Float64(v) => v.into_iter().map(|x| x != 0.0 && !x.is_nan()).collect(),
            TensorData::Int32(v) => v.into_iter().map(|x| x != 0).collect(),
            TensorData::Int64(v) => v.into_iter().map(|x| x != 0).collect(),
            TensorData::String(v) => v.into_iter().map(|s| !s.is_empty()).collect(),
        };
        Ok(TensorData::Bool(out))
    }
}

/// Runtime type name of a JSON value, for error messages
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// JSON truthiness: null, false, 0, NaN and "" are false
fn json_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|x| x != 0.0 && !x.is_nan()).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn json_float(dtype: ElementType, value: &Value) -> TensorResult<f64> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| invalid(dtype, value)),
        Value::Null => Ok(f64::NAN),
        other => Err(invalid(dtype, other)),
    }
}

fn json_integer(dtype: ElementType, value: &Value) -> TensorResult<i64> {
    let Value::Number(n) = value else {
        return Err(invalid(dtype, value));
    };
    if let Some(i) = n.as_i64() {
        return Ok(i);
    }
    if n.is_u64() {
        // u64 above i64::MAX
        return Err(invalid(dtype, value));
    }
    match n.as_f64() {
        Some(x) => integral_i64(x).map_err(|_| invalid(dtype, value)),
        None => Err(invalid(dtype, value)),
    }
}

fn integral(dtype: ElementType, x: f64, lo: f64, hi: f64) -> TensorResult<f64> {
    if x.is_finite() && x.fract() == 0.0 && x >= lo && x <= hi {
        Ok(x)
    } else {
        Err(invalid(dtype, &float_value(x)))
    }
}

fn integral_i64(x: f64) -> TensorResult<i64> {
    // 2^63 is exactly representable; i64::MAX is not
    const UPPER: f64 = 9_223_372_036_854_775_808.0;
    if x.is_finite() && x.fract() == 0.0 && x >= -UPPER && x < UPPER {
        Ok(x as i64)
    } else {
        Err(invalid(ElementType::Int64, &float_value(x)))
    }
}

fn float_value(x: f64) -> Value {
    serde_json::Number::from_f64(x)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

fn invalid(dtype: ElementType, element: &Value) -> TensorError {
    TensorError::InvalidElement {
        dtype,
        element: format!("{} ({})", element, json_type_name(element)),
    }
}

fn incompatible(dtype: ElementType, data: &TensorData) -> TensorError {
    TensorError::IncompatibleData {
        dtype,
        source_kind: data.dtype().as_str(),
    }
}
