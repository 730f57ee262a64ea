//! Input deltas: the plain numbers the camera controller consumes each frame.
//!
//! # Invariants
//! - No device events cross this boundary, only numeric deltas and intents.
//! - Move intents are always in `{-1, 0, 1}` per axis.

pub mod frame;
pub mod intent;
pub mod look;

pub use frame::InputFrame;
pub use intent::{HeldKeys, MoveIntent};
pub use look::{LookDelta, TurnSpeeds, Viewport};

pub fn crate_info() -> &'static str {
    "flycam-input v0.1.0"
}
