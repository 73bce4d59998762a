use meshcap_replay::{CompType, ReplayError};

/// Errors produced while decoding captured mesh data.
///
/// All of these are terminal for the enclosing call: a failure on one
/// attribute of one vertex aborts the whole decode, since a partially
/// populated record set is not a meaningful result to compare against
/// reference fixtures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshDecodeError {
    #[error(
        "format {comp_type:?}x{comp_count} (bgra_order {bgra_order}) is bit-packed or has a component order that cannot be decoded component-by-component"
    )]
    UnsupportedFormat {
        comp_type: CompType,
        comp_count: u8,
        bgra_order: bool,
    },

    #[error("no {comp_byte_width}-byte decode exists for {comp_type:?} components")]
    InvalidComponentWidth {
        comp_type: CompType,
        comp_byte_width: u8,
    },

    #[error("index buffers must use a 1/2/4-byte stride, found {index_byte_stride}")]
    InvalidIndexByteStride { index_byte_stride: u32 },

    #[error("attribute {attribute:?} has no vertex buffer bound")]
    MissingVertexBuffer { attribute: String },

    #[error("need {need} bytes at offset {offset}, but only {have} bytes were fetched")]
    MalformedBuffer { offset: i64, need: u64, have: u64 },

    #[error(transparent)]
    Replay(#[from] ReplayError),
}
