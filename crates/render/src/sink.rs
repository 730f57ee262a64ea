use std::fmt::Write;

use flycam_camera::FrameContext;
use flycam_input::InputFrame;
use flycam_math::Matrix4;

/// Receiver for the combined transform, once per frame.
///
/// A GPU backend uploads it as a uniform; the implementations here record or
/// print it instead.
pub trait TransformSink {
    fn submit(&mut self, frame: u64, transform: &Matrix4);
}

/// Step `ctx` by one frame and hand the result to `sink`.
pub fn run_frame(
    ctx: &mut FrameContext,
    input: &InputFrame,
    sink: &mut impl TransformSink,
) -> Matrix4 {
    let frame = ctx.frame_index();
    let transform = ctx.step(input);
    sink.submit(frame, &transform);
    transform
}

/// Keeps every submitted transform. Used by tests and scripted runs.
#[derive(Debug, Default)]
pub struct RecordingSink {
    frames: Vec<(u64, Matrix4)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[(u64, Matrix4)] {
        &self.frames
    }

    pub fn last(&self) -> Option<&Matrix4> {
        self.frames.last().map(|(_, m)| m)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl TransformSink for RecordingSink {
    fn submit(&mut self, frame: u64, transform: &Matrix4) {
        self.frames.push((frame, *transform));
    }
}

/// Formats each transform as four rows of text.
///
/// Rows are printed in math order (row r across columns 0..4) even though
/// storage is column-major.
#[derive(Debug)]
pub struct DebugTextSink {
    out: String,
    precision: usize,
}

impl Default for DebugTextSink {
    fn default() -> Self {
        Self::new(4)
    }
}

impl DebugTextSink {
    pub fn new(precision: usize) -> Self {
        Self {
            out: String::new(),
            precision,
        }
    }

    pub fn output(&self) -> &str {
        &self.out
    }

    /// Take the accumulated text, leaving the sink empty.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.out)
    }
}

impl TransformSink for DebugTextSink {
    fn submit(&mut self, frame: u64, transform: &Matrix4) {
        let p = self.precision;
        // Writing into a String cannot fail.
        let _ = writeln!(self.out, "frame {frame}:");
        for row in 0..4 {
            let _ = writeln!(
                self.out,
                "  [{:>w$.p$} {:>w$.p$} {:>w$.p$} {:>w$.p$}]",
                transform.get(0, row),
                transform.get(1, row),
                transform.get(2, row),
                transform.get(3, row),
                w = p + 6,
            );
        }
        tracing::debug!(frame, "transform formatted");
    }
}
