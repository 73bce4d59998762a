//! Resolution of a draw's logical vertex indices.
//!
//! Indexed draws read little-endian unsigned indices from the bound index
//! buffer and bias them by `base_vertex`; non-indexed draws generate the
//! literal vertex range. Either way the result is the ordered list of
//! logical indices the draw referenced.
//!
//! Logical indices are `i64`: wide enough to hold an unbiased 32-bit index
//! plus a negative `base_vertex` without wrapping. Negative results are
//! valid logical indices; callers must tolerate them.

use meshcap_replay::ReplayBackend;

use crate::cache::BufferCache;
use crate::error::MeshDecodeError;
use crate::mesh::MeshBufferDescriptor;

/// Resolves a draw's index sequence from already-fetched index buffer bytes.
///
/// Identical inputs always produce identical output; nothing is mutated.
///
/// - Non-indexed (`index_byte_stride == 0` or no index buffer bound):
///   returns the literal range `[first_index, first_index + num_indices)`.
///   `index_data` and `base_vertex` are not consulted.
/// - Indexed: reads `num_indices` indices starting at
///   `index_byte_offset + index_byte_stride * (first_index + index_offset_vertices)`,
///   unpacks each as a little-endian unsigned integer of the stride's width,
///   and adds `base_vertex`.
pub fn resolve_indices(
    index_data: &[u8],
    mesh: &MeshBufferDescriptor,
    index_offset_vertices: u64,
    first_index: u64,
    num_indices: u64,
) -> Result<Vec<i64>, MeshDecodeError> {
    if mesh.index_byte_stride == 0 || mesh.index_buffer.is_none() {
        return Ok((0..num_indices).map(|i| (first_index + i) as i64).collect());
    }

    let stride = match mesh.index_byte_stride {
        1 | 2 | 4 => u64::from(mesh.index_byte_stride),
        other => {
            return Err(MeshDecodeError::InvalidIndexByteStride {
                index_byte_stride: other,
            })
        }
    };

    // Widen before multiplying so absurd offsets fail the bounds check
    // instead of wrapping.
    let start = u128::from(mesh.index_byte_offset)
        + u128::from(stride) * (u128::from(first_index) + u128::from(index_offset_vertices));
    let need = u128::from(stride) * u128::from(num_indices);
    if start + need > index_data.len() as u128 {
        return Err(MeshDecodeError::MalformedBuffer {
            offset: i64::try_from(start).unwrap_or(i64::MAX),
            need: u64::try_from(need).unwrap_or(u64::MAX),
            have: index_data.len() as u64,
        });
    }

    let start = start as usize;
    let need = need as usize;
    let stride = stride as usize;
    let indices = index_data[start..start + need]
        .chunks_exact(stride)
        .map(|raw| {
            let unsigned = match stride {
                1 => u64::from(raw[0]),
                2 => u64::from(u16::from_le_bytes([raw[0], raw[1]])),
                _ => u64::from(u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]])),
            };
            unsigned as i64 + mesh.base_vertex
        })
        .collect();

    Ok(indices)
}

/// Fetches the draw's index buffer through the cache, then resolves as
/// [`resolve_indices`].
pub fn resolve<B: ReplayBackend + ?Sized>(
    cache: &mut BufferCache<'_, B>,
    mesh: &MeshBufferDescriptor,
    index_offset_vertices: u64,
    first_index: u64,
    num_indices: u64,
) -> Result<Vec<i64>, MeshDecodeError> {
    let index_data = match mesh.index_buffer {
        Some(buffer) if mesh.index_byte_stride != 0 => cache.get(buffer)?,
        _ => &[],
    };
    resolve_indices(index_data, mesh, index_offset_vertices, first_index, num_indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshcap_replay::BufferId;

    fn indexed_mesh(stride: u32) -> MeshBufferDescriptor {
        MeshBufferDescriptor {
            index_buffer: Some(BufferId(1)),
            index_byte_stride: stride,
            ..MeshBufferDescriptor::default()
        }
    }

    #[test]
    fn non_indexed_draws_generate_the_literal_range() {
        let mesh = MeshBufferDescriptor::default();
        let got = resolve_indices(&[], &mesh, 0, 10, 5).unwrap();
        assert_eq!(got, vec![10, 11, 12, 13, 14]);
    }

    #[test]
    fn non_indexed_draws_ignore_base_vertex() {
        let mesh = MeshBufferDescriptor {
            base_vertex: 100,
            ..MeshBufferDescriptor::default()
        };
        let got = resolve_indices(&[], &mesh, 0, 0, 3).unwrap();
        assert_eq!(got, vec![0, 1, 2]);
    }

    #[test]
    fn u16_indices_with_base_vertex() {
        let mesh = MeshBufferDescriptor {
            base_vertex: 100,
            ..indexed_mesh(2)
        };
        let got = resolve_indices(&[0x01, 0x00, 0x02, 0x00], &mesh, 0, 0, 2).unwrap();
        assert_eq!(got, vec![101, 102]);
    }

    #[test]
    fn negative_biased_indices_are_preserved() {
        let mesh = MeshBufferDescriptor {
            base_vertex: -5,
            ..indexed_mesh(1)
        };
        let got = resolve_indices(&[0, 3, 10], &mesh, 0, 0, 3).unwrap();
        assert_eq!(got, vec![-5, -2, 5]);
    }

    #[test]
    fn u32_indices_do_not_wrap() {
        let mesh = indexed_mesh(4);
        let got = resolve_indices(&0xFFFF_FFFFu32.to_le_bytes(), &mesh, 0, 0, 1).unwrap();
        assert_eq!(got, vec![0xFFFF_FFFF]);
    }

    #[test]
    fn first_index_and_offset_vertices_skip_indices() {
        let mesh = indexed_mesh(1);
        let data = [10u8, 11, 12, 13, 14, 15];
        assert_eq!(resolve_indices(&data, &mesh, 0, 2, 2).unwrap(), vec![12, 13]);
        assert_eq!(resolve_indices(&data, &mesh, 1, 2, 2).unwrap(), vec![13, 14]);
    }

    #[test]
    fn index_byte_offset_is_honoured() {
        let mesh = MeshBufferDescriptor {
            index_byte_offset: 2,
            ..indexed_mesh(2)
        };
        let data = [0xAA, 0xAA, 0x07, 0x00, 0x08, 0x00];
        assert_eq!(resolve_indices(&data, &mesh, 0, 0, 2).unwrap(), vec![7, 8]);
    }

    #[test]
    fn reads_past_the_index_data_fail() {
        let mesh = indexed_mesh(2);
        let got = resolve_indices(&[0x01, 0x00, 0x02], &mesh, 0, 0, 2);
        assert_eq!(
            got,
            Err(MeshDecodeError::MalformedBuffer {
                offset: 0,
                need: 4,
                have: 3,
            })
        );
    }

    #[test]
    fn odd_strides_are_rejected() {
        let mesh = indexed_mesh(3);
        assert_eq!(
            resolve_indices(&[0u8; 12], &mesh, 0, 0, 4),
            Err(MeshDecodeError::InvalidIndexByteStride {
                index_byte_stride: 3
            })
        );
    }
}
