use glam::Vec2;

use crate::constants::{POINTER_RANGE_X, POINTER_RANGE_Y, POINTER_SMOOTHING};

/// Low-pass filtered pointer offset. `offset` chases `target` by a fixed
/// fraction each frame and never quite reaches it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSmoother {
    pub offset: Vec2,
    pub target: Vec2,
}

impl PointerSmoother {
    /// Map a position inside a `width` x `height` box to a target offset of
    /// roughly +-20 horizontally and +-15 vertically.
    pub fn aim(&mut self, local: Vec2, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.target = Vec2::new(
            (local.x / width - 0.5) * POINTER_RANGE_X,
            (local.y / height - 0.5) * POINTER_RANGE_Y,
        );
    }

    /// Pointer left the container: drift back to rest.
    pub fn release(&mut self) {
        self.target = Vec2::ZERO;
    }

    #[inline]
    pub fn step(&mut self) {
        self.offset += (self.target - self.offset) * POINTER_SMOOTHING;
    }
}
