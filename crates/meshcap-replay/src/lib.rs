//! The narrow interface between the mesh decoder and an external replay backend.
//!
//! A replay backend owns a captured frame and can service byte-range reads of
//! GPU buffers, answer pipeline-state queries for the selected draw, and expose
//! shader reflection data. Everything the decoder needs crosses this boundary
//! as plain data: the decoder never sees capture files, replay controllers, or
//! GPU objects.
//!
//! This crate intentionally stays close to dependency-free; it defines the
//! boundary types and the [`ReplayBackend`] trait, nothing else.
//!
//! For tests, the `test-utils` feature (or this crate's own test build)
//! provides [`test_utils::RecordedReplay`], an in-memory backend seeded with
//! literal buffers and pipeline state.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod backend;
mod format;
mod signature;

/// In-memory replay backend for tests.
///
/// Only available when compiling this crate's own tests, or when the
/// `test-utils` feature is enabled. It is **not** part of the stable API.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use crate::backend::{ReplayBackend, ReplayError};
pub use crate::format::{BufferId, CompType, ResourceFormat};
pub use crate::signature::{ShaderStage, SignatureParameter, SystemValue};
