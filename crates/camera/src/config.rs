//! Startup configuration: window size, projection intrinsics, control speeds,
//! and the starting pose. Loaded from JSON; every field has a default.

use std::path::{Path, PathBuf};

use flycam_input::{TurnSpeeds, Viewport};
use flycam_math::{Matrix4, projection};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::state::{CameraState, WORLD_UP};

/// Errors from loading or validating a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("viewport must be non-empty, got {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },
    #[error("field of view must lie in (0, 180) degrees, got {fov_degrees} (effective)")]
    FieldOfView { fov_degrees: f32 },
    #[error("clip planes must satisfy 0 < near < far, got near={near} far={far}")]
    ClipPlanes { near: f32, far: f32 },
    #[error("move speed must be finite and positive, got {0}")]
    MoveSpeed(f32),
    #[error("start direction {0:?} has no horizontal component")]
    StartDirection(Vec3),
}

/// Projection intrinsics. Constant for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Horizontal field of view in degrees.
    pub fov_x_degrees: f32,
    pub near: f32,
    /// Far clip distance, i.e. how far the camera can see.
    pub far: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fov_x_degrees: 90.0,
            near: 0.5,
            far: 1000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub turn: TurnSpeeds,
    /// Distance covered per frame while a movement key is held.
    pub move_speed: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            turn: TurnSpeeds::default(),
            move_speed: 0.5,
        }
    }
}

/// Pose the camera starts from. The direction need not be unit length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartPose {
    pub position: Vec3,
    pub direction: Vec3,
}

impl Default for StartPose {
    fn default() -> Self {
        // Above the corner of the grid, looking down across it.
        Self {
            position: Vec3::new(-23.0, 37.0, -22.0),
            direction: Vec3::new(0.653162, -0.532276, 0.538574),
        }
    }
}

/// Full configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlycamConfig {
    pub window: Viewport,
    pub projection: ProjectionConfig,
    pub controls: ControlsConfig,
    pub camera: StartPose,
}

impl FlycamConfig {
    /// Read and parse a JSON config file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&data)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Width over height of the window.
    pub fn aspect(&self) -> f32 {
        self.window.aspect()
    }

    /// Check the contracts the per-frame math relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Viewport { width, height } = self.window;
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyViewport { width, height });
        }

        // The half-angle is fov_x / (2 * aspect), so that is what has to stay in range.
        let effective_fov = self.projection.fov_x_degrees / self.aspect();
        if !(effective_fov > 0.0 && effective_fov < 180.0) {
            return Err(ConfigError::FieldOfView {
                fov_degrees: effective_fov,
            });
        }

        let ProjectionConfig { near, far, .. } = self.projection;
        if !(near > 0.0 && far > near && far.is_finite()) {
            return Err(ConfigError::ClipPlanes { near, far });
        }

        let speed = self.controls.move_speed;
        if !(speed.is_finite() && speed > 0.0) {
            return Err(ConfigError::MoveSpeed(speed));
        }

        // Zero, or parallel to the up axis: the view basis would be undefined.
        let direction = self.camera.direction;
        let horizontal = direction - direction.dot(WORLD_UP) * WORLD_UP;
        if !direction.is_finite() || horizontal.length_squared() <= f32::EPSILON {
            return Err(ConfigError::StartDirection(direction));
        }

        Ok(())
    }

    /// The constant projection matrix for this configuration.
    pub fn projection_matrix(&self) -> Matrix4 {
        let p = &self.projection;
        projection(p.fov_x_degrees, self.aspect(), p.near, p.far)
    }

    /// The starting camera state, direction normalized.
    pub fn start_camera(&self) -> CameraState {
        CameraState::new(self.camera.position, self.camera.direction)
    }
}
