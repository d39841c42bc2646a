//! Error types used by the crosslight runtime.
//!
//! The state-machine core itself has no recoverable error conditions: every
//! event is either applied or ignored, and neither outcome is a fault. The
//! only failures that can surface live at the runtime boundary, when the
//! intersection loop is joined during [`Intersection::stop`](crate::Intersection::stop).

use thiserror::Error;

/// # Errors produced by the intersection runtime.
///
/// These represent failures of the orchestration layer, never of the signal
/// machines themselves.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// The intersection event loop panicked and could not be joined cleanly.
    #[error("intersection loop terminated abnormally: {0}")]
    LoopPanicked(#[from] tokio::task::JoinError),
}

impl RuntimeError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            RuntimeError::LoopPanicked(_) => "runtime_loop_panicked",
        }
    }
}
