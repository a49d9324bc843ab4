//! Damped pointer tracking in normalized UV space.

use crate::scroll::lerp;
use glam::Vec2;

/// Eased follower for pointer-driven distortion (bulge, grid deformation).
/// Raw input is clamped to the unit square; `tick` moves the smoothed value
/// toward it once per frame.
#[derive(Clone, Copy, Debug)]
pub struct PointerFollow {
    pub current: Vec2,
    pub target: Vec2,
    pub ease: f32,
}

impl PointerFollow {
    pub fn new(ease: f32) -> Self {
        let center = Vec2::splat(0.5);
        Self {
            current: center,
            target: center,
            ease,
        }
    }

    pub fn set_target(&mut self, u: f32, v: f32) {
        self.target = Vec2::new(u.clamp(0.0, 1.0), v.clamp(0.0, 1.0));
    }

    pub fn tick(&mut self) {
        self.current.x = lerp(self.current.x, self.target.x, self.ease);
        self.current.y = lerp(self.current.y, self.target.y, self.ease);
    }
}
