//! Recording sessions.
//!
//! While a flyover plays, the host can record the rendered frames to video.
//! The encoder lives outside this crate; what lives here is the chunk buffer
//! for one recording, scoped to a [`RecordingSession`] that exclusively owns
//! it for the session's lifetime. There is no process-wide accumulator:
//! concurrent or back-to-back recordings each get their own session.

use log::debug;

use crate::errors::{FlyoverError, Result};

/// Buffered chunk accumulator for a single recording.
///
/// Lifecycle: [`start`](Self::start) creates an active session,
/// [`push_chunk`](Self::push_chunk) appends encoded data while active,
/// [`stop`](Self::stop) seals it, and [`finish`](Self::finish) consumes the
/// session and yields the recording bytes.
pub struct RecordingSession {
    chunks: Vec<Vec<u8>>,
    active: bool,
}

impl RecordingSession {
    /// Opens a new, active session with an empty buffer.
    #[must_use]
    pub fn start() -> Self {
        debug!("recorder: session started");
        Self {
            chunks: Vec::new(),
            active: true,
        }
    }

    /// Appends one encoded chunk.
    ///
    /// # Errors
    ///
    /// Returns [`FlyoverError::RecordingStopped`] when the session has been
    /// sealed; a late chunk from a cancelled recording must not leak into the
    /// next one.
    pub fn push_chunk(&mut self, data: Vec<u8>) -> Result<()> {
        if !self.active {
            return Err(FlyoverError::RecordingStopped);
        }
        self.chunks.push(data);
        Ok(())
    }

    /// Seals the session; further chunks are rejected.
    pub fn stop(&mut self) {
        if self.active {
            debug!(
                "recorder: session stopped, {} chunks / {} bytes",
                self.chunks.len(),
                self.byte_len()
            );
        }
        self.active = false;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Total buffered size in bytes.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.chunks.iter().map(Vec::len).sum()
    }

    /// Consumes the session and returns the recording as one contiguous
    /// buffer, in push order.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.byte_len());
        for chunk in self.chunks {
            out.extend_from_slice(&chunk);
        }
        out
    }
}
