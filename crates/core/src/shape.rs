//! Shape validation
//!
//! A shape only constrains the element count. Layout of the flat storage is
//! up to the caller.

use crate::error::ShapeError;
use serde_json::Value;

/// Element count of `shape`, the product of its dimensions
///
/// An empty shape is a scalar with one element.
pub fn numel(shape: &[usize]) -> Result<usize, ShapeError> {
    shape.iter().try_fold(1usize, |acc, &d| {
        acc.checked_mul(d).ok_or_else(|| ShapeError::Overflow {
            shape: shape.to_vec(),
        })
    })
}

/// Check that `shape` accounts for exactly `len` elements
pub fn check_numel(shape: &[usize], len: usize) -> Result<(), ShapeError> {
    let expected = numel(shape)?;
    if expected != len {
        return Err(ShapeError::ElementCount {
            expected,
            actual: len,
            shape: shape.to_vec(),
        });
    }
    Ok(())
}

/// Read a dynamically typed shape
///
/// Every entry must be a non-negative integer. Integral floats such as `2.0`
/// are accepted.
pub fn shape_from_json(dims: &[Value]) -> Result<Vec<usize>, ShapeError> {
    dims.iter().map(dim_from_json).collect()
}

fn dim_from_json(value: &Value) -> Result<usize, ShapeError> {
    let non_integer = || ShapeError::NonIntegerDimension {
        dim: value.to_string(),
    };
    let Value::Number(n) = value else {
        return Err(non_integer());
    };
    if let Some(u) = n.as_u64() {
        return usize::try_from(u).map_err(|_| non_integer());
    }
    match n.as_f64() {
        Some(x) if x.is_finite() && x.fract() == 0.0 && x >= 0.0 && x < usize::MAX as f64 => {
            Ok(x as usize)
        }
        _ => Err(non_integer()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numel() {
        assert_eq!(numel(&[2, 3]).unwrap(), 6);
        assert_eq!(numel(&[]).unwrap(), 1);
        assert_eq!(numel(&[4, 0, 2]).unwrap(), 0);
    }

    #[test]
    fn test_numel_overflow() {
        let err = numel(&[usize::MAX, 2]).unwrap_err();
        assert!(matches!(err, ShapeError::Overflow { .. }));
    }

    #[test]
    fn test_check_numel_mismatch() {
        let err = check_numel(&[2, 3], 5).unwrap_err();
        assert_eq!(
            err,
            ShapeError::ElementCount {
                expected: 6,
                actual: 5,
                shape: vec![2, 3]
            }
        );
        assert!(check_numel(&[2, 3], 6).is_ok());
    }

    #[test]
    fn test_shape_from_json() {
        assert_eq!(shape_from_json(&[json!(2), json!(3.0)]).unwrap(), vec![2, 3]);
    }

    #[test]
    fn test_shape_from_json_rejects_non_integers() {
        for bad in [json!(2.5), json!("2"), json!(-1), json!(null), json!([2])] {
            let err = shape_from_json(&[json!(1), bad.clone()]).unwrap_err();
            assert_eq!(
                err,
                ShapeError::NonIntegerDimension {
                    dim: bad.to_string()
                }
            );
        }
    }

    #[test]
    fn test_shape_from_json_rejects_float_past_usize() {
        // 2^64 as a float would saturate to usize::MAX
        let too_big = json!(18_446_744_073_709_551_616.0f64);
        let err = shape_from_json(&[too_big.clone()]).unwrap_err();
        assert_eq!(
            err,
            ShapeError::NonIntegerDimension {
                dim: too_big.to_string()
            }
        );
        assert_eq!(shape_from_json(&[json!(4.0e6)]).unwrap(), vec![4_000_000]);
    }
}
