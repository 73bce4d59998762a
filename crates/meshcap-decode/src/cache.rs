//! Call-scoped memoization of whole-buffer fetches.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use meshcap_replay::{BufferId, ReplayBackend, ReplayError};

/// Memoizes whole-buffer fetches by buffer identity.
///
/// A cache borrows the backend mutably for the duration of one decode call
/// and is dropped at its end; it is never persisted or shared across calls,
/// so a later call against a different captured event can never observe
/// stale bytes. The borrow also makes concurrent use a compile error —
/// callers wanting parallel decodes construct one backend + cache per
/// thread.
pub struct BufferCache<'a, B: ReplayBackend + ?Sized> {
    backend: &'a mut B,
    buffers: HashMap<BufferId, Vec<u8>>,
}

impl<'a, B: ReplayBackend + ?Sized> BufferCache<'a, B> {
    /// A fresh cache over the backend, holding no buffers.
    pub fn new(backend: &'a mut B) -> Self {
        BufferCache {
            backend,
            buffers: HashMap::new(),
        }
    }

    /// The buffer's full contents, fetched from the backend on first
    /// reference and served from memory afterwards.
    pub fn get(&mut self, buffer: BufferId) -> Result<&[u8], ReplayError> {
        match self.buffers.entry(buffer) {
            Entry::Occupied(entry) => Ok(entry.into_mut().as_slice()),
            Entry::Vacant(entry) => {
                tracing::trace!(?buffer, "fetching full buffer contents");
                let bytes = self.backend.buffer_data(buffer, 0, 0)?;
                Ok(entry.insert(bytes).as_slice())
            }
        }
    }
}
