//! Element types
//!
//! The six scalar kinds a tensor can hold. The set is closed: every site that
//! depends on the element type (construction, narrowing, binary encoding)
//! matches on [`ElementType`] exhaustively.
//!
//! | Type | Width | Wide | Base64 |
//! |------|-------|------|--------|
//! | float32 | 4 | no | yes |
//! | float64 | 8 | yes | yes |
//! | int32 | 4 | no | yes |
//! | int64 | 8 | yes | yes |
//! | string | - | no | no |
//! | bool | - | no | no |

use crate::error::TensorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scalar kind stored by a tensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// 32-bit IEEE-754 float
    Float32,
    /// 64-bit IEEE-754 float
    Float64,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// UTF-8 string
    String,
    /// Boolean
    Bool,
}

impl ElementType {
    /// All element types, in wire-name order
    pub const ALL: [ElementType; 6] = [
        ElementType::Float32,
        ElementType::Int32,
        ElementType::Float64,
        ElementType::Int64,
        ElementType::String,
        ElementType::Bool,
    ];

    /// Wire name of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Float32 => "float32",
            ElementType::Float64 => "float64",
            ElementType::Int32 => "int32",
            ElementType::Int64 => "int64",
            ElementType::String => "string",
            ElementType::Bool => "bool",
        }
    }

    /// True for float64 and int64, whose precision JSON numbers cannot carry
    pub fn is_64bit(&self) -> bool {
        matches!(self, ElementType::Float64 | ElementType::Int64)
    }

    /// The 32-bit counterpart of a wide type; narrow types map to themselves
    pub fn narrowed(&self) -> ElementType {
        match self {
            ElementType::Float64 => ElementType::Float32,
            ElementType::Int64 => ElementType::Int32,
            other => *other,
        }
    }

    /// Bytes per element in the binary layout, `None` for string and bool
    pub fn byte_width(&self) -> Option<usize> {
        match self {
            ElementType::Float32 | ElementType::Int32 => Some(4),
            ElementType::Float64 | ElementType::Int64 => Some(8),
            ElementType::String | ElementType::Bool => None,
        }
    }

    /// True for the four numeric types
    pub fn is_numeric(&self) -> bool {
        self.byte_width().is_some()
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = TensorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "float32" => Ok(ElementType::Float32),
            "float64" => Ok(ElementType::Float64),
            "int32" => Ok(ElementType::Int32),
            "int64" => Ok(ElementType::Int64),
            "string" => Ok(ElementType::String),
            "bool" => Ok(ElementType::Bool),
            other => Err(TensorError::UnsupportedType {
                name: other.to_string(),
            }),
        }
    }
}
