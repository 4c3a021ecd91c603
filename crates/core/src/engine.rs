//! Adapter for tensors produced by an external inference engine
//!
//! Engines describe tensors as `{type, dims, data}`. Adapting one is a field
//! rename; no element is changed.

use crate::data::TensorData;
use crate::dtype::ElementType;
use crate::error::{TensorError, TensorResult};
use crate::tensor::Tensor;

/// Tensor in the shape an inference engine hands it out
#[derive(Debug, Clone, PartialEq)]
pub struct EngineTensor {
    /// Element type
    pub dtype: ElementType,
    /// Dimensions
    pub dims: Vec<usize>,
    /// Flat storage
    pub data: TensorData,
}

impl Tensor {
    /// Adapt an engine tensor; the result is unnamed
    pub fn from_engine(engine: EngineTensor) -> TensorResult<Self> {
        Tensor::new(engine.dtype, engine.dims, engine.data, None)
    }
}

impl TryFrom<EngineTensor> for Tensor {
    type Error = TensorError;

    fn try_from(engine: EngineTensor) -> Result<Self, Self::Error> {
        Tensor::from_engine(engine)
    }
}
