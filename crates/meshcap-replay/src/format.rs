//! Buffer identities and resource format descriptions.

/// Opaque identity of a GPU buffer within a captured frame.
///
/// The replay backend assigns these; the decoder only ever uses them as
/// lookup keys and never inspects the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BufferId(pub u64);

/// Numeric interpretation of one component of a formatted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompType {
    /// Unsigned integer.
    Uint,
    /// Signed (two's-complement) integer.
    Sint,
    /// IEEE floating point (16, 32 or 64 bits wide).
    Float,
    /// Unsigned normalized: raw `[0, 2^n - 1]` maps to `[0.0, 1.0]`.
    Unorm,
    /// Signed normalized: raw `[-2^(n-1), 2^(n-1) - 1]` maps to `[-1.0, 1.0]`.
    Snorm,
    /// Unsigned integer that the consumer treats as a pre-scaled float.
    Uscaled,
    /// Signed integer that the consumer treats as a pre-scaled float.
    Sscaled,
    /// 64-bit double-precision floating point.
    Double,
}

/// Layout of one formatted value, as reported by the replay backend's
/// pipeline-state reflection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceFormat {
    /// Number of components per value (1–4).
    pub comp_count: u8,
    /// Byte width of each component (1, 2, 4 or 8).
    pub comp_byte_width: u8,
    /// Numeric interpretation of each component.
    pub comp_type: CompType,
    /// Red/blue channels are swapped relative to canonical RGBA order.
    pub bgra_order: bool,
    /// Bit-packed layout (e.g. 10:10:10:2) that cannot be decoded
    /// component-by-component. Such formats are rejected, not decoded.
    pub special: bool,
}

impl ResourceFormat {
    /// A regular (non-packed, RGBA-ordered) format.
    pub fn regular(comp_type: CompType, comp_byte_width: u8, comp_count: u8) -> Self {
        ResourceFormat {
            comp_count,
            comp_byte_width,
            comp_type,
            bgra_order: false,
            special: false,
        }
    }

    /// Total byte size of one value (`comp_count * comp_byte_width`).
    pub fn byte_size(&self) -> usize {
        usize::from(self.comp_count) * usize::from(self.comp_byte_width)
    }
}
