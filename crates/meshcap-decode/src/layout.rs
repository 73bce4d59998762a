//! Planning of post-shader vertex data layouts from output signatures.
//!
//! After a shader stage runs, the replay backend exposes its outputs as a
//! tightly ordered struct per vertex. The planner reproduces that struct's
//! layout from the stage's output signature: position first, everything else
//! in declaration order, with offsets accumulated either tightly packed or
//! padded to 16-byte boundaries depending on which the backend's API does
//! for interstage data.

use meshcap_replay::{CompType, ResourceFormat, SignatureParameter, SystemValue};

use crate::mesh::{AttributeDescriptor, MeshBufferDescriptor};

fn align_up_16(v: u64) -> u64 {
    (v + 15) & !15
}

/// Derives the ordered attribute list for a stage's output signature.
///
/// Every signature entry becomes one attribute over `base`'s stream, named
/// after its variable (or its indexed semantic, when the capture carries no
/// debug names). Signature components are 4 bytes wide, or 8 for doubles.
///
/// If an entry carries the position system value it is relocated to the
/// front; the relative order of all other entries is preserved. Offsets are
/// then assigned by accumulation, rounding the running offset up to the next
/// 16-byte boundary between attributes when `align_to_16` is set.
///
/// An empty signature plans an empty layout.
pub fn plan_layout(
    signature: &[SignatureParameter],
    base: &MeshBufferDescriptor,
    align_to_16: bool,
) -> Vec<AttributeDescriptor> {
    let mut attrs = Vec::with_capacity(signature.len());
    let mut position = None;

    for param in signature {
        if param.system_value == SystemValue::Position {
            position = Some(attrs.len());
        }

        let comp_byte_width = if param.comp_type == CompType::Double { 8 } else { 4 };
        let name = if param.var_name.is_empty() {
            param.semantic_index_name()
        } else {
            param.var_name.clone()
        };

        attrs.push(AttributeDescriptor {
            name,
            mesh: base.clone(),
            format: ResourceFormat::regular(param.comp_type, comp_byte_width, param.comp_count),
            vertex_byte_offset: 0,
        });
    }

    // Single relocation, not a sort: position moves to the front and the
    // rest keep their relative order.
    if let Some(position) = position {
        if position > 0 {
            let attr = attrs.remove(position);
            attrs.insert(0, attr);
        }
    }

    let mut offset = 0u64;
    for attr in &mut attrs {
        attr.vertex_byte_offset = offset;
        offset += attr.format.byte_size() as u64;
        if align_to_16 && offset % 16 != 0 {
            offset = align_up_16(offset);
        }
    }

    tracing::debug!(
        attributes = attrs.len(),
        packed_bytes = offset,
        align_to_16,
        "planned output signature layout"
    );

    attrs
}
