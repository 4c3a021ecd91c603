//! Binary layout and base64 codec for numeric storage
//!
//! Elements are laid out back to back in little-endian byte order:
//! 4 bytes per float32/int32 element, 8 bytes per float64/int64 element.
//! String and bool storage has no binary form.

use crate::data::TensorData;
use crate::dtype::ElementType;
use crate::error::{TensorError, TensorResult};
use base64::Engine;

/// Raw little-endian bytes of numeric storage
pub fn to_le_bytes(data: &TensorData) -> TensorResult<Vec<u8>> {
    let bytes = match data {
        TensorData::Float32(v) => v.iter().flat_map(|x| x.to_le_bytes()).collect(),
        TensorData::Float64(v) => v.iter().flat_map(|x| x.to_le_bytes()).collect(),
        TensorData::Int32(v) => v.iter().flat_map(|x| x.to_le_bytes()).collect(),
        TensorData::Int64(v) => v.iter().flat_map(|x| x.to_le_bytes()).collect(),
        TensorData::String(_) | TensorData::Bool(_) => {
            return Err(TensorError::InvalidBase64Type {
                dtype: data.dtype(),
            })
        }
    };
    Ok(bytes)
}

/// Reinterpret little-endian bytes as elements of `dtype`
pub fn from_le_bytes(dtype: ElementType, bytes: &[u8]) -> TensorResult<TensorData> {
    let width = dtype
        .byte_width()
        .ok_or(TensorError::InvalidBase64Type { dtype })?;
    if bytes.len() % width != 0 {
        return Err(TensorError::ByteLength {
            dtype,
            len: bytes.len(),
        });
    }

    let data = match dtype {
        ElementType::Float32 => TensorData::Float32(
            bytes
                .chunks_exact(4)
                .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                .collect(),
        ),
        ElementType::Int32 => TensorData::Int32(
            bytes
                .chunks_exact(4)
                .map(|c| i32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                .collect(),
        ),
        ElementType::Float64 => TensorData::Float64(
            bytes
                .chunks_exact(8)
                .map(|c| f64::from_le_bytes(eight(c)))
                .collect(),
        ),
        ElementType::Int64 => TensorData::Int64(
            bytes
                .chunks_exact(8)
                .map(|c| i64::from_le_bytes(eight(c)))
                .collect(),
        ),
        ElementType::String | ElementType::Bool => {
            return Err(TensorError::InvalidBase64Type { dtype })
        }
    };
    Ok(data)
}

/// Standard base64 of the raw bytes
pub fn encode_base64(data: &TensorData) -> TensorResult<String> {
    let bytes = to_le_bytes(data)?;
    Ok(base64::engine::general_purpose::STANDARD.encode(bytes))
}

/// Decode standard base64 into elements of `dtype`
pub fn decode_base64(dtype: ElementType, b64: &str) -> TensorResult<TensorData> {
    if !dtype.is_numeric() {
        return Err(TensorError::InvalidBase64Type { dtype });
    }
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(b64)
        .map_err(|e| TensorError::InvalidBase64(e.to_string()))?;
    from_le_bytes(dtype, &bytes)
}

fn eight(c: &[u8]) -> [u8; 8] {
    [c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int32_layout_is_little_endian() {
        let bytes = to_le_bytes(&TensorData::Int32(vec![1, 256])).unwrap();
        assert_eq!(bytes, vec![1, 0, 0, 0, 0, 1, 0, 0]);
    }

    #[test]
    fn test_float64_base64() {
        // 1.0f64 = 0x3FF0000000000000
        let b64 = encode_base64(&TensorData::Float64(vec![1.0])).unwrap();
        assert_eq!(b64, "AAAAAAAA8D8=");
        let data = decode_base64(ElementType::Float64, &b64).unwrap();
        assert_eq!(data, TensorData::Float64(vec![1.0]));
    }

    #[test]
    fn test_int64_full_precision() {
        let original = TensorData::Int64(vec![i64::MAX, i64::MIN, 9_007_199_254_740_993]);
        let b64 = encode_base64(&original).unwrap();
        assert_eq!(decode_base64(ElementType::Int64, &b64).unwrap(), original);
    }

    #[test]
    fn test_empty_payload() {
        assert_eq!(
            decode_base64(ElementType::Float32, "").unwrap(),
            TensorData::Float32(vec![])
        );
    }

    #[test]
    fn test_string_and_bool_have_no_binary_form() {
        assert!(matches!(
            encode_base64(&TensorData::Bool(vec![true])),
            Err(TensorError::InvalidBase64Type { .. })
        ));
        assert!(matches!(
            decode_base64(ElementType::String, "AAAA"),
            Err(TensorError::InvalidBase64Type { .. })
        ));
    }

    #[test]
    fn test_misaligned_length() {
        // three bytes
        let err = decode_base64(ElementType::Float32, "AAAA").unwrap_err();
        assert_eq!(
            err,
            TensorError::ByteLength {
                dtype: ElementType::Float32,
                len: 3
            }
        );
    }

    #[test]
    fn test_invalid_base64() {
        let err = decode_base64(ElementType::Int32, "not base64!").unwrap_err();
        assert!(matches!(err, TensorError::InvalidBase64(_)));
    }
}
