//! Component-wise decoding of formatted values.
//!
//! Raw bytes become typed numeric tuples according to a [`ResourceFormat`]:
//! little-endian primitive decode per component, then normalization for
//! Unorm/Snorm, then a BGRA reorder when the format asks for one. Scaled
//! types deliberately stay raw integers; the consumer interprets them as
//! already scaled.

use half::f16;
use meshcap_replay::{CompType, ResourceFormat};

use crate::error::MeshDecodeError;

/// A decoded attribute: `comp_count` components, all of one numeric kind.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Unsigned integer components (`Uint`, `Uscaled`).
    Uint(Vec<u64>),
    /// Signed integer components (`Sint`, `Sscaled`).
    Sint(Vec<i64>),
    /// Floating-point components (`Float`, `Double`, `Unorm`, `Snorm`).
    Float(Vec<f64>),
}

impl AttributeValue {
    /// Number of components.
    pub fn len(&self) -> usize {
        match self {
            AttributeValue::Uint(v) => v.len(),
            AttributeValue::Sint(v) => v.len(),
            AttributeValue::Float(v) => v.len(),
        }
    }

    /// True if the value has no components.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Raw per-component decode result, before normalization.
#[derive(Clone, Copy)]
enum Scalar {
    Uint(u64),
    Sint(i64),
    Float(f64),
}

impl Scalar {
    // The decode table guarantees the scalar kind matches the component
    // type, so these only ever see their own variant.
    fn uint(self) -> u64 {
        match self {
            Scalar::Uint(v) => v,
            _ => unreachable!("decode table produced a mismatched scalar kind"),
        }
    }

    fn sint(self) -> i64 {
        match self {
            Scalar::Sint(v) => v,
            _ => unreachable!("decode table produced a mismatched scalar kind"),
        }
    }

    fn float(self) -> f64 {
        match self {
            Scalar::Float(v) => v,
            _ => unreachable!("decode table produced a mismatched scalar kind"),
        }
    }
}

/// Decodes one raw little-endian component.
///
/// The `(comp_type, byte_width)` pairing is a closed set; anything outside it
/// is `InvalidComponentWidth`. `bytes` must be exactly `byte_width` long.
fn decode_scalar(
    comp_type: CompType,
    comp_byte_width: u8,
    bytes: &[u8],
) -> Result<Scalar, MeshDecodeError> {
    let scalar = match (comp_type, comp_byte_width) {
        (CompType::Uint | CompType::Unorm | CompType::Uscaled, 1) => Scalar::Uint(bytes[0].into()),
        (CompType::Uint | CompType::Unorm | CompType::Uscaled, 2) => {
            Scalar::Uint(u16::from_le_bytes(bytes.try_into().unwrap()).into())
        }
        (CompType::Uint | CompType::Unorm | CompType::Uscaled, 4) => {
            Scalar::Uint(u32::from_le_bytes(bytes.try_into().unwrap()).into())
        }
        (CompType::Uint | CompType::Unorm | CompType::Uscaled, 8) => {
            Scalar::Uint(u64::from_le_bytes(bytes.try_into().unwrap()))
        }
        (CompType::Sint | CompType::Snorm | CompType::Sscaled, 1) => {
            Scalar::Sint((bytes[0] as i8).into())
        }
        (CompType::Sint | CompType::Snorm | CompType::Sscaled, 2) => {
            Scalar::Sint(i16::from_le_bytes(bytes.try_into().unwrap()).into())
        }
        (CompType::Sint | CompType::Snorm | CompType::Sscaled, 4) => {
            Scalar::Sint(i32::from_le_bytes(bytes.try_into().unwrap()).into())
        }
        (CompType::Sint | CompType::Snorm | CompType::Sscaled, 8) => {
            Scalar::Sint(i64::from_le_bytes(bytes.try_into().unwrap()))
        }
        (CompType::Float, 2) => {
            Scalar::Float(f16::from_bits(u16::from_le_bytes(bytes.try_into().unwrap())).to_f64())
        }
        (CompType::Float, 4) => {
            Scalar::Float(f32::from_le_bytes(bytes.try_into().unwrap()).into())
        }
        (CompType::Float | CompType::Double, 8) => {
            Scalar::Float(f64::from_le_bytes(bytes.try_into().unwrap()))
        }
        (comp_type, comp_byte_width) => {
            return Err(MeshDecodeError::InvalidComponentWidth {
                comp_type,
                comp_byte_width,
            })
        }
    };
    Ok(scalar)
}

fn unorm_to_f64(raw: u64, bits: u32) -> f64 {
    let max = if bits >= 64 {
        u64::MAX as f64
    } else {
        ((1u64 << bits) - 1) as f64
    };
    raw as f64 / max
}

// Signed normalized: the maximal-negative raw value maps to exactly -1.0,
// so the mapping stays symmetric despite the two's-complement range.
fn snorm_to_f64(raw: i64, bits: u32) -> f64 {
    let min = -(1i128 << (bits - 1));
    let max = ((1i128 << (bits - 1)) - 1) as f64;
    if i128::from(raw) == min {
        -1.0
    } else {
        raw as f64 / max
    }
}

fn swizzle_bgra<T: Copy>(v: &[T]) -> Vec<T> {
    vec![v[2], v[1], v[0], v[3]]
}

/// Decodes one attribute's raw bytes into a typed numeric tuple.
///
/// `data` is the fetched buffer contents and `byte_offset` the position of
/// the value within it. Reads that would run past `data` fail with
/// [`MeshDecodeError::MalformedBuffer`]; nothing is ever zero-filled.
pub fn decode_attribute(
    format: &ResourceFormat,
    data: &[u8],
    byte_offset: usize,
) -> Result<AttributeValue, MeshDecodeError> {
    if format.special || (format.bgra_order && format.comp_count != 4) {
        return Err(MeshDecodeError::UnsupportedFormat {
            comp_type: format.comp_type,
            comp_count: format.comp_count,
            bgra_order: format.bgra_order,
        });
    }

    let width = usize::from(format.comp_byte_width);
    let need = format.byte_size();
    let end = byte_offset.checked_add(need);
    if end.map_or(true, |end| end > data.len()) {
        return Err(MeshDecodeError::MalformedBuffer {
            offset: i64::try_from(byte_offset).unwrap_or(i64::MAX),
            need: need as u64,
            have: data.len() as u64,
        });
    }

    let mut raw = Vec::with_capacity(usize::from(format.comp_count));
    for comp in 0..usize::from(format.comp_count) {
        let at = byte_offset + comp * width;
        raw.push(decode_scalar(
            format.comp_type,
            format.comp_byte_width,
            &data[at..at + width],
        )?);
    }

    let bits = u32::from(format.comp_byte_width) * 8;
    let mut value = match format.comp_type {
        CompType::Uint | CompType::Uscaled => {
            AttributeValue::Uint(raw.iter().map(|s| s.uint()).collect())
        }
        CompType::Sint | CompType::Sscaled => {
            AttributeValue::Sint(raw.iter().map(|s| s.sint()).collect())
        }
        CompType::Float | CompType::Double => {
            AttributeValue::Float(raw.iter().map(|s| s.float()).collect())
        }
        CompType::Unorm => {
            AttributeValue::Float(raw.iter().map(|s| unorm_to_f64(s.uint(), bits)).collect())
        }
        CompType::Snorm => {
            AttributeValue::Float(raw.iter().map(|s| snorm_to_f64(s.sint(), bits)).collect())
        }
    };

    if format.bgra_order {
        value = match value {
            AttributeValue::Uint(v) => AttributeValue::Uint(swizzle_bgra(&v)),
            AttributeValue::Sint(v) => AttributeValue::Sint(swizzle_bgra(&v)),
            AttributeValue::Float(v) => AttributeValue::Float(swizzle_bgra(&v)),
        };
    }

    Ok(value)
}
