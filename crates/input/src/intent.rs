use serde::{Deserialize, Serialize};

/// Movement keys held during a frame.
///
/// Plain booleans, filled in by whatever owns the keyboard (W/S/A/D on desktop).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

/// Directional intent for one frame.
///
/// `forward` moves along the look direction (negative = backwards), `side`
/// strafes in the horizontal plane (positive = right). Both axes are always
/// in `{-1, 0, 1}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawMoveIntent")]
pub struct MoveIntent {
    forward: i8,
    side: i8,
}

impl MoveIntent {
    pub const NONE: Self = Self { forward: 0, side: 0 };

    /// Any magnitude is reduced to its sign.
    pub fn new(forward: i32, side: i32) -> Self {
        Self {
            forward: forward.signum() as i8,
            side: side.signum() as i8,
        }
    }

    /// Opposing keys cancel: forward = W - S, side = D - A.
    pub fn from_keys(keys: HeldKeys) -> Self {
        Self::new(
            keys.forward as i32 - keys.backward as i32,
            keys.right as i32 - keys.left as i32,
        )
    }

    pub fn forward(&self) -> i8 {
        self.forward
    }

    pub fn side(&self) -> i8 {
        self.side
    }

    pub fn is_idle(&self) -> bool {
        self.forward == 0 && self.side == 0
    }
}

#[derive(Deserialize)]
struct RawMoveIntent {
    #[serde(default)]
    forward: i32,
    #[serde(default)]
    side: i32,
}

impl From<RawMoveIntent> for MoveIntent {
    fn from(raw: RawMoveIntent) -> Self {
        Self::new(raw.forward, raw.side)
    }
}
