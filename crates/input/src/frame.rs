use serde::{Deserialize, Serialize};

use crate::intent::{HeldKeys, MoveIntent};
use crate::look::LookDelta;

/// Everything the camera controller needs from one frame of input.
///
/// Deserializable so scripted runs can replay a recorded sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputFrame {
    pub look: LookDelta,
    pub movement: MoveIntent,
}

impl InputFrame {
    /// No cursor motion, no keys held.
    pub const IDLE: Self = Self {
        look: LookDelta::ZERO,
        movement: MoveIntent::NONE,
    };

    pub fn new(look: LookDelta, movement: MoveIntent) -> Self {
        Self { look, movement }
    }

    pub fn from_keys(look: LookDelta, keys: HeldKeys) -> Self {
        Self::new(look, MoveIntent::from_keys(keys))
    }

    pub fn is_idle(&self) -> bool {
        self.look.is_zero() && self.movement.is_idle()
    }
}
