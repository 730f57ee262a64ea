//! Rendering seam: where each frame's combined transform leaves the core.
//!
//! # Invariants
//! - Sinks only read the transform; camera state is never handed out mutably.
//! - The uploaded layout is the column-major 16-float matrix, untransposed.
//!
//! # Workaround
//! No GPU backend lives here. The [`TransformSink`] trait is the stable
//! boundary; a real uniform upload implements it without changing callers.

mod sink;
mod uniform;

pub use sink::{DebugTextSink, RecordingSink, TransformSink, run_frame};
pub use uniform::TransformUniform;

pub fn crate_info() -> &'static str {
    "flycam-render v0.1.0"
}
