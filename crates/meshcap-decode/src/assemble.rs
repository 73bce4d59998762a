//! Assembly of decoded vertex records for a draw.

use std::collections::BTreeMap;

use meshcap_replay::ReplayBackend;

use crate::cache::BufferCache;
use crate::error::MeshDecodeError;
use crate::format::{decode_attribute, AttributeValue};
use crate::mesh::{AttributeDescriptor, MeshBufferDescriptor, VertexRecord};

/// Decodes one vertex record per resolved index, in input order.
///
/// `draw` is the draw-level stream descriptor (it supplies strip-restart
/// state and the index width); `attributes` is the planned layout. All
/// buffer reads go through a cache constructed for this call and dropped at
/// its end.
///
/// When strip restart is enabled for an indexed draw, any index equal to the
/// configured restart value (masked to the draw's index width) yields a
/// sentinel record with no attribute data: that index encodes "no vertex",
/// not real geometry.
///
/// Any failure decoding any attribute of any vertex aborts the whole call;
/// there are no partial record sets.
pub fn assemble<B: ReplayBackend + ?Sized>(
    backend: &mut B,
    draw: &MeshBufferDescriptor,
    indices: &[i64],
    attributes: &[AttributeDescriptor],
    instance: u32,
) -> Result<Vec<VertexRecord>, MeshDecodeError> {
    let mut cache = BufferCache::new(backend);

    let restart_value = if draw.strip_restart && draw.index_byte_stride > 0 {
        let bits = draw.index_byte_stride * 8;
        let mask = (1u64 << bits) - 1;
        Some((u64::from(draw.strip_restart_index) & mask) as i64)
    } else {
        None
    };

    let mut records = Vec::with_capacity(indices.len());
    for (vtx, &idx) in indices.iter().enumerate() {
        if restart_value == Some(idx) {
            tracing::trace!(vtx, idx, "strip restart sentinel");
            records.push(VertexRecord {
                vtx,
                idx,
                attributes: BTreeMap::new(),
            });
            continue;
        }

        let mut values = BTreeMap::new();
        for attr in attributes {
            let value = decode_one(&mut cache, attr, idx, instance)?;
            values.insert(attr.name.clone(), value);
        }
        records.push(VertexRecord {
            vtx,
            idx,
            attributes: values,
        });
    }

    Ok(records)
}

fn decode_one<B: ReplayBackend + ?Sized>(
    cache: &mut BufferCache<'_, B>,
    attr: &AttributeDescriptor,
    idx: i64,
    instance: u32,
) -> Result<AttributeValue, MeshDecodeError> {
    let Some(buffer) = attr.mesh.vertex_buffer else {
        return Err(MeshDecodeError::MissingVertexBuffer {
            attribute: attr.name.clone(),
        });
    };

    let stride = i128::from(attr.mesh.vertex_byte_stride);
    let offset = if attr.mesh.instanced {
        // Instance data is addressed purely by instance; idx plays no part,
        // and the read starts one stride in rather than at the attribute's
        // own offset.
        // TODO: confirm whether instanced streams should honour
        // vertex_byte_offset the way the per-vertex path does.
        let step = u64::from(attr.mesh.instance_step_rate.max(1));
        stride + stride * i128::from(u64::from(instance) / step)
    } else {
        i128::from(attr.vertex_byte_offset) + stride * i128::from(idx)
    };

    let data = cache.get(buffer)?;
    let byte_offset = usize::try_from(offset).map_err(|_| MeshDecodeError::MalformedBuffer {
        offset: offset.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64,
        need: attr.format.byte_size() as u64,
        have: data.len() as u64,
    })?;

    decode_attribute(&attr.format, data, byte_offset)
}
