use flycam_input::InputFrame;
use flycam_math::{Matrix4, MatrixStack, translation, view};

use crate::config::{ConfigError, FlycamConfig};
use crate::controller::update_camera;
use crate::state::{CameraState, WORLD_UP};

/// Combined transform for one frame: `projection × view × translation`.
///
/// Folds onto a fresh identity in that fixed order, so a point is first moved
/// into camera-relative space, then rotated, then projected.
pub fn build_frame_transform(camera: &CameraState, projection: &Matrix4) -> Matrix4 {
    let mut stack = MatrixStack::new();
    fold_frame(&mut stack, camera, projection);
    *stack.current()
}

fn fold_frame(stack: &mut MatrixStack, camera: &CameraState, projection: &Matrix4) {
    stack.reset();
    stack
        .push(&translation(camera.position))
        .push(&view(camera.direction, WORLD_UP))
        .push(projection);
}

/// Everything the frame loop owns: the camera, the constant projection, the
/// movement speed, and the matrix stack reused every frame.
#[derive(Debug, Clone)]
pub struct FrameContext {
    camera: CameraState,
    projection: Matrix4,
    move_speed: f32,
    stack: MatrixStack,
    frame_index: u64,
}

impl FrameContext {
    pub fn new(camera: CameraState, projection: Matrix4, move_speed: f32) -> Self {
        Self {
            camera,
            projection,
            move_speed,
            stack: MatrixStack::new(),
            frame_index: 0,
        }
    }

    /// Validate `config` and build the starting context from it.
    pub fn from_config(config: &FlycamConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let ctx = Self::new(
            config.start_camera(),
            config.projection_matrix(),
            config.controls.move_speed,
        );
        tracing::info!(
            position = ?ctx.camera.position,
            direction = ?ctx.camera.direction,
            aspect = config.aspect(),
            "frame context ready"
        );
        Ok(ctx)
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn projection(&self) -> &Matrix4 {
        &self.projection
    }

    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    /// Frames stepped so far.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Mutate the camera from one frame of input.
    pub fn update(&mut self, input: &InputFrame) {
        update_camera(&mut self.camera, input, self.move_speed);
    }

    /// Fold this frame's transform using the owned stack.
    pub fn build_transform(&mut self) -> Matrix4 {
        fold_frame(&mut self.stack, &self.camera, &self.projection);
        *self.stack.current()
    }

    /// One whole frame: update the camera, then build its transform.
    pub fn step(&mut self, input: &InputFrame) -> Matrix4 {
        let _span = tracing::trace_span!("frame", index = self.frame_index).entered();
        self.update(input);
        let transform = self.build_transform();
        self.frame_index += 1;
        transform
    }
}
