use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Drawable area in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height. Infinite or NaN for a zero-height viewport.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Where the cursor is parked between frames.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}

/// Cursor-to-angle scale factors, one per screen axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurnSpeeds {
    pub horizontal: f32,
    pub vertical: f32,
}

impl Default for TurnSpeeds {
    fn default() -> Self {
        Self {
            horizontal: 1.0,
            vertical: 1.0,
        }
    }
}

/// One frame of look input: yaw (`dx`) and pitch (`dy`) deltas.
///
/// Positive `dx` turns right, positive `dy` pitches up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookDelta {
    pub dx: f32,
    pub dy: f32,
}

impl LookDelta {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// Delta from the cursor's offset to the viewport center.
    ///
    /// The offset is normalized by the viewport size and scaled by the turn
    /// speeds. Screen Y grows downwards, so it is negated to pitch up when the
    /// cursor moves up. The caller re-centers the cursor afterwards.
    pub fn from_cursor(cursor: Vec2, viewport: Viewport, speeds: TurnSpeeds) -> Self {
        let width = viewport.width as f32;
        let height = viewport.height as f32;
        Self {
            dx: (cursor.x - width / 2.0) * speeds.horizontal / width,
            dy: -(cursor.y - height / 2.0) * speeds.vertical / height,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}
