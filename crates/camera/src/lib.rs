//! Fly camera: one position and one look direction, moved every frame.
//!
//! # Invariants
//! - The look direction is unit length after every update.
//! - Camera state is owned by a [`FrameContext`], never by a global.
//! - The per-frame path never validates and never fails; configuration is
//!   checked once, at startup.
//! - Each frame folds translation, then view, then projection.

pub mod config;
pub mod controller;
pub mod frame;
pub mod state;

pub use config::{ConfigError, ControlsConfig, FlycamConfig, ProjectionConfig, StartPose};
pub use controller::{apply_look, apply_move, update_camera};
pub use frame::{FrameContext, build_frame_transform};
pub use state::{CameraState, WORLD_UP};

pub fn crate_info() -> &'static str {
    "flycam-camera v0.1.0"
}
