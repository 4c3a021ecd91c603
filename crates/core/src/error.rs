//! Error types for tensor construction, narrowing and binary decoding
//!
//! Every error is raised at the point of detection. Construction either fully
//! succeeds or returns one of these; no partially built tensor escapes.
//!
//! ## Taxonomy
//!
//! | Family | Variants |
//! |--------|----------|
//! | Type conversion | `UnsupportedType`, `InvalidElement`, `IncompatibleData` |
//! | Shape | `Shape(ShapeError)` |
//! | Range narrowing | `RangeNarrowing` |
//! | Binary payload | `InvalidBase64`, `InvalidBase64Type`, `ByteLength` |

use crate::dtype::ElementType;
use thiserror::Error;

/// Result type for tensor operations
pub type TensorResult<T> = std::result::Result<T, TensorError>;

/// Shape validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShapeError {
    /// A dimension is not a non-negative integer
    #[error("invalid shape: expected shape to be array-like of integers but found non-integer element {dim}")]
    NonIntegerDimension {
        /// Rendering of the offending dimension
        dim: String,
    },

    /// Product of the shape does not match the number of elements
    #[error("invalid shape: expected {expected} elements for shape {shape:?} but value array has length {actual}")]
    ElementCount {
        /// Element count implied by the shape
        expected: usize,
        /// Element count actually supplied
        actual: usize,
        /// The shape itself
        shape: Vec<usize>,
    },

    /// Product of the shape does not fit in `usize`
    #[error("invalid shape: element count of shape {shape:?} overflows")]
    Overflow {
        /// The shape itself
        shape: Vec<usize>,
    },
}

/// Tensor errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TensorError {
    /// Element type name is not one of the six recognized types
    #[error("unsupported type: {name}")]
    UnsupportedType {
        /// The unrecognized type name
        name: String,
    },

    /// An element cannot be converted to the target type
    #[error("element {element} is not a valid {dtype}")]
    InvalidElement {
        /// Target element type
        dtype: ElementType,
        /// Rendering of the offending element
        element: String,
    },

    /// Source storage kind cannot be converted to the target type at all
    #[error("cannot convert {source_kind} data to {dtype}")]
    IncompatibleData {
        /// Target element type
        dtype: ElementType,
        /// Name of the source storage kind
        source_kind: &'static str,
    },

    /// Shape validation failure
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Value outside the safe-integer bound during 64 to 32 bit narrowing
    #[error("element {value} is too big to represent as int32")]
    RangeNarrowing {
        /// The offending value
        value: i64,
    },

    /// Payload is not valid base64
    #[error("invalid base64: {0}")]
    InvalidBase64(String),

    /// Element type has no binary representation
    #[error("invalid data type for base64 input: {dtype}")]
    InvalidBase64Type {
        /// The element type
        dtype: ElementType,
    },

    /// Decoded byte count is not a multiple of the element width
    #[error("invalid number of bytes ({len}) for input of type {dtype}")]
    ByteLength {
        /// The element type
        dtype: ElementType,
        /// Decoded byte count
        len: usize,
    },
}

impl TensorError {
    /// Check if this is a type conversion error
    pub fn is_type_conversion(&self) -> bool {
        matches!(
            self,
            TensorError::UnsupportedType { .. }
                | TensorError::InvalidElement { .. }
                | TensorError::IncompatibleData { .. }
        )
    }

    /// Check if this is a shape error
    pub fn is_shape(&self) -> bool {
        matches!(self, TensorError::Shape(_))
    }

    /// Check if this is a range narrowing error
    pub fn is_range_narrowing(&self) -> bool {
        matches!(self, TensorError::RangeNarrowing { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_count_message_reports_both_counts() {
        let err = TensorError::from(ShapeError::ElementCount {
            expected: 6,
            actual: 5,
            shape: vec![2, 3],
        });
        let msg = err.to_string();
        assert!(msg.contains("expected 6 elements"));
        assert!(msg.contains("length 5"));
        assert!(msg.contains("[2, 3]"));
        assert!(err.is_shape());
    }

    #[test]
    fn test_range_narrowing_message() {
        let err = TensorError::RangeNarrowing {
            value: 9_007_199_254_740_993,
        };
        assert_eq!(
            err.to_string(),
            "element 9007199254740993 is too big to represent as int32"
        );
        assert!(err.is_range_narrowing());
        assert!(!err.is_type_conversion());
    }

    #[test]
    fn test_base64_type_message() {
        let err = TensorError::InvalidBase64Type {
            dtype: ElementType::String,
        };
        assert_eq!(err.to_string(), "invalid data type for base64 input: string");
    }
}
