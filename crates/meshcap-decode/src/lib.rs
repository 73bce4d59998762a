//! Decoding of captured GPU vertex/index data into typed per-vertex records.
//!
//! Given a replayed draw, this crate turns raw buffer bytes into structured
//! attribute records suitable for comparison against reference fixtures:
//!
//! 1. [`plan_layout`] derives attribute descriptors (with byte offsets) from
//!    a shader stage's output signature.
//! 2. [`resolve`] / [`resolve_indices`] produce the draw's ordered logical
//!    index sequence, from the index buffer or by literal range generation.
//! 3. [`assemble`] walks the indices and decodes every attribute of every
//!    vertex via [`decode_attribute`], with strip-restart sentinel handling
//!    and per-instance addressing, reading buffers through a call-scoped
//!    [`BufferCache`].
//!
//! The decoder is synchronous and single-threaded; all entry points are pure
//! functions over explicit inputs. Bit-packed "special" formats (10:10:10:2
//! and friends) are rejected with a typed error rather than mis-decoded, and
//! every out-of-bounds read fails loudly — nothing is zero-filled.

#![forbid(unsafe_code)]

mod assemble;
mod cache;
mod compare;
mod error;
mod format;
mod indices;
mod layout;
mod mesh;

pub use crate::assemble::assemble;
pub use crate::cache::BufferCache;
pub use crate::compare::{find_mismatch, values_match, RecordMismatch};
pub use crate::error::MeshDecodeError;
pub use crate::format::{decode_attribute, AttributeValue};
pub use crate::indices::{resolve, resolve_indices};
pub use crate::layout::plan_layout;
pub use crate::mesh::{AttributeDescriptor, MeshBufferDescriptor, VertexRecord};
