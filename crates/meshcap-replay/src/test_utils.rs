//! An in-memory [`ReplayBackend`] seeded with literal data.
//!
//! Tests build a `RecordedReplay`, insert the buffers and pipeline state a
//! draw would have had, and run the decoder against it. Every buffer read is
//! counted so tests can assert caching behavior.

use std::collections::HashMap;

use crate::backend::{ReplayBackend, ReplayError};
use crate::format::BufferId;
use crate::signature::{ShaderStage, SignatureParameter};

/// In-memory replay backend holding seeded buffers and pipeline state.
#[derive(Debug, Default)]
pub struct RecordedReplay {
    buffers: HashMap<BufferId, Vec<u8>>,
    fetch_counts: HashMap<BufferId, usize>,
    strip_restart: bool,
    strip_restart_index: u32,
    signatures: HashMap<ShaderStage, Vec<SignatureParameter>>,
}

impl RecordedReplay {
    /// An empty backend: no buffers, strip restart disabled, no signatures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds (or replaces) a buffer's contents.
    pub fn insert_buffer(&mut self, buffer: BufferId, bytes: Vec<u8>) {
        self.buffers.insert(buffer, bytes);
    }

    /// Builder-style [`Self::insert_buffer`].
    pub fn with_buffer(mut self, buffer: BufferId, bytes: Vec<u8>) -> Self {
        self.insert_buffer(buffer, bytes);
        self
    }

    /// Configures the draw's strip-restart state.
    pub fn set_strip_restart(&mut self, enabled: bool, index: u32) {
        self.strip_restart = enabled;
        self.strip_restart_index = index;
    }

    /// Seeds the output signature reflected for a shader stage.
    pub fn set_output_signature(&mut self, stage: ShaderStage, params: Vec<SignatureParameter>) {
        self.signatures.insert(stage, params);
    }

    /// How many times [`ReplayBackend::buffer_data`] was called for this
    /// buffer, successfully or not.
    pub fn fetch_count(&self, buffer: BufferId) -> usize {
        self.fetch_counts.get(&buffer).copied().unwrap_or(0)
    }
}

impl ReplayBackend for RecordedReplay {
    fn buffer_data(
        &mut self,
        buffer: BufferId,
        byte_offset: u64,
        byte_len: u64,
    ) -> Result<Vec<u8>, ReplayError> {
        *self.fetch_counts.entry(buffer).or_insert(0) += 1;

        let bytes = self
            .buffers
            .get(&buffer)
            .ok_or(ReplayError::UnknownBuffer { buffer })?;

        let start = usize::try_from(byte_offset)
            .unwrap_or(usize::MAX)
            .min(bytes.len());
        let end = if byte_len == 0 {
            bytes.len()
        } else {
            start
                .saturating_add(usize::try_from(byte_len).unwrap_or(usize::MAX))
                .min(bytes.len())
        };
        Ok(bytes[start..end].to_vec())
    }

    fn strip_restart_enabled(&self) -> bool {
        self.strip_restart
    }

    fn strip_restart_index(&self) -> u32 {
        self.strip_restart_index
    }

    fn output_signature(
        &mut self,
        stage: ShaderStage,
    ) -> Result<Vec<SignatureParameter>, ReplayError> {
        Ok(self.signatures.get(&stage).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_reads_return_available_suffix() {
        let mut replay = RecordedReplay::new().with_buffer(BufferId(1), vec![1, 2, 3, 4]);

        assert_eq!(replay.buffer_data(BufferId(1), 0, 0).unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(replay.buffer_data(BufferId(1), 2, 0).unwrap(), vec![3, 4]);
        assert_eq!(replay.buffer_data(BufferId(1), 2, 8).unwrap(), vec![3, 4]);
        assert_eq!(replay.buffer_data(BufferId(1), 9, 0).unwrap(), Vec::<u8>::new());
        assert_eq!(replay.fetch_count(BufferId(1)), 4);
    }

    #[test]
    fn unknown_buffer_is_an_error() {
        let mut replay = RecordedReplay::new();
        assert_eq!(
            replay.buffer_data(BufferId(7), 0, 0),
            Err(ReplayError::UnknownBuffer { buffer: BufferId(7) })
        );
        // Failed fetches still count.
        assert_eq!(replay.fetch_count(BufferId(7)), 1);
    }
}
