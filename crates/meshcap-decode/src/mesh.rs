//! Per-draw descriptors and the decoded vertex record.

use std::collections::BTreeMap;

use meshcap_replay::{BufferId, ResourceFormat};

use crate::format::AttributeValue;

/// Immutable snapshot of one vertex/index stream binding for a draw.
///
/// The test harness fills this in from the replay backend's pipeline state;
/// the decoder treats it as read-only input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeshBufferDescriptor {
    /// Buffer holding vertex data, if one is bound.
    pub vertex_buffer: Option<BufferId>,
    /// Byte offset of the first element within the vertex buffer.
    pub vertex_byte_offset: u64,
    /// Byte distance between consecutive elements.
    pub vertex_byte_stride: u64,
    /// Buffer holding index data, if the draw is indexed.
    pub index_buffer: Option<BufferId>,
    /// Byte offset of index 0 within the index buffer.
    pub index_byte_offset: u64,
    /// Byte width of one index: 1, 2 or 4. Zero marks a non-indexed draw.
    pub index_byte_stride: u32,
    /// Signed bias added to every fetched index. The biased result may be
    /// negative; that is still a valid logical index.
    pub base_vertex: i64,
    /// This stream advances per instance rather than per vertex.
    pub instanced: bool,
    /// For instanced streams, the number of instances drawn with each
    /// element before stepping to the next one.
    pub instance_step_rate: u32,
    /// Strip restart (primitive restart) is enabled for the draw.
    pub strip_restart: bool,
    /// The configured restart index value, at full 32-bit width. The decoder
    /// masks it down to the draw's index width before comparing.
    pub strip_restart_index: u32,
}

/// One attribute of the planned vertex layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDescriptor {
    /// Attribute name, used as the key in decoded records. Names are not
    /// required to be unique across shader stages; callers must tolerate
    /// duplicates.
    pub name: String,
    /// The stream this attribute reads from.
    pub mesh: MeshBufferDescriptor,
    /// Component layout of the attribute's values.
    pub format: ResourceFormat,
    /// Byte offset of this attribute within one vertex, as computed by the
    /// layout planner (or by the harness, for input-assembler streams).
    pub vertex_byte_offset: u64,
}

/// One decoded vertex.
///
/// Sequences of these are produced fresh per decode call and owned by the
/// caller; the decoder never caches or mutates them.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexRecord {
    /// Position of this record in the output sequence.
    pub vtx: usize,
    /// The resolved logical vertex index (may be negative after a
    /// `base_vertex` bias).
    pub idx: i64,
    /// Decoded values keyed by attribute name. Empty for strip-restart
    /// sentinels, which encode "no vertex" rather than real geometry.
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl VertexRecord {
    /// True if this record is a strip-restart sentinel (no attribute data).
    pub fn is_restart(&self) -> bool {
        self.attributes.is_empty()
    }
}
