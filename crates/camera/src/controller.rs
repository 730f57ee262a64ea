use flycam_input::{InputFrame, LookDelta, MoveIntent};
use flycam_math::{horizontal_perpendicular, normalize};

use crate::state::CameraState;

/// Turn the camera by one frame of look input.
///
/// Yaw shears `x` and `z` against each other using the previous `x`, a
/// small-angle approximation rather than an exact rotation. Pitch goes through
/// `asin`/`sin` on `y`. The shear does not preserve length, so the direction is
/// renormalized at the end.
///
/// `direction.y` must stay within `[-1, 1]` for `asin`; nothing enforces it.
pub fn apply_look(camera: &mut CameraState, delta: LookDelta) {
    let dir = &mut camera.direction;
    let previous_x = dir.x;
    dir.x += delta.dx * -dir.z;
    dir.y = (delta.dy + dir.y.asin()).sin();
    dir.z += delta.dx * previous_x;

    normalize(dir);
}

/// Move the camera by one frame of movement intent.
///
/// Forward motion follows the full look direction (so looking down and moving
/// forward descends). Strafing stays in the horizontal plane. The two add up
/// without renormalization: diagonal movement is `√2` times faster.
pub fn apply_move(camera: &mut CameraState, intent: MoveIntent, speed: f32) {
    if intent.forward() != 0 {
        camera.position += f32::from(intent.forward()) * speed * camera.direction;
    }

    if intent.side() != 0 {
        camera.position +=
            f32::from(intent.side()) * speed * horizontal_perpendicular(camera.direction);
    }
}

/// Apply one frame of input: look first, then move along the new direction.
pub fn update_camera(camera: &mut CameraState, input: &InputFrame, speed: f32) {
    apply_look(camera, input.look);
    apply_move(camera, input.movement, speed);

    tracing::trace!(
        position = ?camera.position,
        direction = ?camera.direction,
        "camera updated"
    );
}
