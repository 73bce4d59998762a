//! The [`ReplayBackend`] trait and its error type.

use crate::format::BufferId;
use crate::signature::{ShaderStage, SignatureParameter};

/// Error reported by a replay backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    /// The backend has no buffer with this identity in the captured frame.
    #[error("no buffer {buffer:?} exists at the selected event")]
    UnknownBuffer {
        /// The unresolvable buffer identity.
        buffer: BufferId,
    },

    /// The backend failed for a reason of its own (lost replay connection,
    /// corrupt capture section, ...).
    #[error("replay backend failure: {reason}")]
    Backend {
        /// Backend-specific description of the failure.
        reason: String,
    },
}

/// Access to a replayed capture, positioned at one draw.
///
/// Implementations may block while servicing a call (a live replay round-trips
/// to a GPU process); the decoder issues calls serially and never overlaps
/// them. Methods take `&mut self` because advancing an external replay is
/// inherently stateful, even though the decoder itself treats each call as a
/// pure read of the selected event.
pub trait ReplayBackend {
    /// Reads `byte_len` bytes of a buffer starting at `byte_offset`.
    ///
    /// A `byte_len` of 0 means "to the end of the buffer". Reads past the end
    /// of the buffer return the available suffix (possibly empty); it is the
    /// decoder's job to treat short data as an error.
    fn buffer_data(
        &mut self,
        buffer: BufferId,
        byte_offset: u64,
        byte_len: u64,
    ) -> Result<Vec<u8>, ReplayError>;

    /// Whether strip-restart (primitive restart) is enabled for the selected
    /// draw.
    fn strip_restart_enabled(&self) -> bool;

    /// The configured strip-restart index value for the selected draw.
    ///
    /// Only meaningful when [`Self::strip_restart_enabled`] returns true. The
    /// value is configured at full 32-bit width; the decoder masks it down to
    /// the draw's index width.
    fn strip_restart_index(&self) -> u32;

    /// The ordered output signature of the given shader stage at the selected
    /// draw.
    fn output_signature(
        &mut self,
        stage: ShaderStage,
    ) -> Result<Vec<SignatureParameter>, ReplayError>;
}
