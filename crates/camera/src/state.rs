use flycam_math::{Vector3, normalized};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// World up axis. Strafing and the view basis both assume Y-up.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Where the camera is and where it looks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub position: Vector3,
    /// Unit look direction.
    pub direction: Vector3,
}

impl CameraState {
    /// Camera at `position` looking along `direction`, normalized here.
    ///
    /// `direction` must be non-zero.
    pub fn new(position: Vector3, direction: Vector3) -> Self {
        Self {
            position,
            direction: normalized(direction),
        }
    }

    /// Camera at the origin looking down +Z.
    pub fn looking_forward() -> Self {
        Self::new(Vec3::ZERO, Vec3::Z)
    }

    /// Point the camera is looking at, one unit ahead.
    pub fn target(&self) -> Vector3 {
        self.position + self.direction
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::looking_forward()
    }
}
