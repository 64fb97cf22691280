//! Pipeline Latch Interface.
//!
//! This module defines the common trait for inter-stage latches: every latch can be
//! reset to the canonical NOOP with its auxiliary fields zeroed.

/// Represents a pipeline latch (inter-stage buffer).
///
/// Latches hold the state of an instruction as it moves between stages. The word
/// may be a bubble, a real instruction, or a data word fetched past a HALT.
pub trait PipelineLatch: Sized {
    /// Returns the flushed form of the latch: NOOP with every auxiliary field zero.
    fn flushed() -> Self;

    /// Clears the latch back to its flushed form.
    ///
    /// Typically called when a taken branch squashes younger instructions.
    fn flush(&mut self) {
        *self = Self::flushed();
    }
}
