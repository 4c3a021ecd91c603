//! The tensor value object
//!
//! A [`Tensor`] is an element type, a shape, flat typed storage and an
//! optional name. It is immutable once built; the only interior state is a
//! write-once cell holding the base64 form of its storage.
//!
//! ## Lifecycle
//!
//! - [`Tensor::new`] from typed storage (converted to the requested type)
//! - [`Tensor::from_values`] from dynamically typed JSON elements
//! - [`Tensor::from_base64`] from a binary payload
//! - [`Tensor::as_32bit`] by narrowing a wide tensor

use crate::binary;
use crate::data::TensorData;
use crate::dtype::ElementType;
use crate::error::{TensorError, TensorResult};
use crate::shape;
use once_cell::sync::OnceCell;
use serde_json::Value;
use std::borrow::Cow;

/// Largest integer an IEEE-754 double represents exactly (2^53 - 1)
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// Smallest integer an IEEE-754 double represents exactly
pub const MIN_SAFE_INTEGER: i64 = -MAX_SAFE_INTEGER;

/// Typed, shaped, optionally named array
#[derive(Debug, Clone)]
pub struct Tensor {
    dtype: ElementType,
    shape: Vec<usize>,
    data: TensorData,
    name: Option<String>,
    encoded: OnceCell<String>,
}

impl Tensor {
    /// Build a tensor, converting `data` to `dtype` and validating the shape
    ///
    /// Conversion errors take precedence over shape errors.
    pub fn new(
        dtype: ElementType,
        shape: Vec<usize>,
        data: TensorData,
        name: Option<String>,
    ) -> TensorResult<Self> {
        let data = data.convert_to(dtype)?;
        shape::check_numel(&shape, data.len())?;
        Ok(Self {
            dtype,
            shape,
            data,
            name,
            encoded: OnceCell::new(),
        })
    }

    /// Build a tensor from dynamically typed shape entries and elements
    pub fn from_values(
        dtype: ElementType,
        shape: &[Value],
        values: &[Value],
        name: Option<String>,
    ) -> TensorResult<Self> {
        let data = TensorData::from_json_values(dtype, values)?;
        let shape = shape::shape_from_json(shape)?;
        Self::new(dtype, shape, data, name)
    }

    /// Build a tensor from a base64 payload of little-endian elements
    ///
    /// The payload is kept as the cached encoding, so serializing the tensor
    /// again does not re-encode it.
    pub fn from_base64(
        dtype: ElementType,
        shape: Vec<usize>,
        b64: impl Into<String>,
        name: Option<String>,
    ) -> TensorResult<Self> {
        let b64 = b64.into();
        let data = binary::decode_base64(dtype, &b64)?;
        let tensor = Self::new(dtype, shape, data, name)?;
        // fresh cell, cannot already be set
        let _ = tensor.encoded.set(b64);
        Ok(tensor)
    }

    /// float32 tensor
    pub fn from_f32(shape: Vec<usize>, values: Vec<f32>) -> TensorResult<Self> {
        Self::new(ElementType::Float32, shape, TensorData::Float32(values), None)
    }

    /// float64 tensor
    pub fn from_f64(shape: Vec<usize>, values: Vec<f64>) -> TensorResult<Self> {
        Self::new(ElementType::Float64, shape, TensorData::Float64(values), None)
    }

    /// int32 tensor
    pub fn from_i32(shape: Vec<usize>, values: Vec<i32>) -> TensorResult<Self> {
        Self::new(ElementType::Int32, shape, TensorData::Int32(values), None)
    }

    /// int64 tensor
    pub fn from_i64(shape: Vec<usize>, values: Vec<i64>) -> TensorResult<Self> {
        Self::new(ElementType::Int64, shape, TensorData::Int64(values), None)
    }

    /// string tensor
    pub fn from_strings<S: Into<String>>(shape: Vec<usize>, values: Vec<S>) -> TensorResult<Self> {
        let values = values.into_iter().map(Into::into).collect();
        Self::new(ElementType::String, shape, TensorData::String(values), None)
    }

    /// bool tensor
    pub fn from_bools(shape: Vec<usize>, values: Vec<bool>) -> TensorResult<Self> {
        Self::new(ElementType::Bool, shape, TensorData::Bool(values), None)
    }

    /// Same tensor under a new name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Element type
    pub fn dtype(&self) -> ElementType {
        self.dtype
    }

    /// Dimensions
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Flat storage
    pub fn data(&self) -> &TensorData {
        &self.data
    }

    /// Consume the tensor, returning its storage
    pub fn into_data(self) -> TensorData {
        self.data
    }

    /// Name, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Element count
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// True for float64 and int64 tensors
    pub fn is_64bit(&self) -> bool {
        self.dtype.is_64bit()
    }

    /// The cached base64 encoding, if one has been computed or supplied
    pub fn cached_encoding(&self) -> Option<&str> {
        self.encoded.get().map(String::as_str)
    }

    /// Base64 of the raw storage bytes, computed once and cached
    pub fn encoded_base64(&self) -> TensorResult<&str> {
        self.encoded
            .get_or_try_init(|| binary::encode_base64(&self.data))
            .map(String::as_str)
    }

    /// Narrow a wide tensor to its 32-bit counterpart
    ///
    /// - float64 elements round to the nearest float32.
    /// - int64 elements must lie within
    ///   [`MIN_SAFE_INTEGER`]..=[`MAX_SAFE_INTEGER`]; they are then stored in
    ///   the 32-bit slot modulo 2^32.
    ///
    /// Narrow tensors are returned as-is without copying.
    pub fn as_32bit(&self) -> TensorResult<Cow<'_, Tensor>> {
        let data = match &self.data {
            TensorData::Float64(v) => TensorData::Float32(v.iter().map(|&x| x as f32).collect()),
            TensorData::Int64(v) => TensorData::Int32(
                v.iter()
                    .map(|&n| {
                        if !(MIN_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&n) {
                            return Err(TensorError::RangeNarrowing { value: n });
                        }
                        Ok(n as i32)
                    })
                    .collect::<TensorResult<_>>()?,
            ),
            TensorData::Float32(_)
            | TensorData::Int32(_)
            | TensorData::String(_)
            | TensorData::Bool(_) => return Ok(Cow::Borrowed(self)),
        };
        Ok(Cow::Owned(Self {
            dtype: self.dtype.narrowed(),
            shape: self.shape.clone(),
            data,
            name: self.name.clone(),
            encoded: OnceCell::new(),
        }))
    }
}

impl PartialEq for Tensor {
    fn eq(&self, other: &Self) -> bool {
        self.dtype == other.dtype
            && self.shape == other.shape
            && self.data == other.data
            && self.name == other.name
    }
}
