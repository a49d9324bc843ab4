//! Screen-to-world viewport mapping.
//!
//! The camera is placed so that one CSS pixel corresponds to one world unit
//! across the whole plane at z = 0: the world-space size of the view frustum
//! slice is derived from the camera field of view and distance, and every
//! mesh scale/position is expressed as a fraction of it.

use glam::Vec2;

/// Browser layout size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }
}

/// World-space width/height of the camera frustum at the scene plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldSize {
    pub width: f32,
    pub height: f32,
}

/// Pure frustum-slice computation: `height = 2 * tan(fov/2) * camera_z`.
pub fn compute_viewport(fov_degrees: f32, camera_z: f32, aspect: f32) -> WorldSize {
    let fov = fov_degrees.to_radians();
    let height = 2.0 * (fov / 2.0).tan() * camera_z;
    WorldSize {
        width: height * aspect,
        height,
    }
}

/// The `{screen, viewport}` pair handed to every renderable item.
///
/// Always built as a whole so a mesh never sees a stale width paired with a
/// fresh height. Passed by value on construction and on every resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub screen: ScreenSize,
    pub world: WorldSize,
}

impl ViewState {
    pub fn compute(screen: ScreenSize, fov_degrees: f32, camera_z: f32) -> Self {
        Self {
            screen,
            world: compute_viewport(fov_degrees, camera_z, screen.aspect()),
        }
    }

    /// Per-axis pixel-to-world conversion factor.
    pub fn px_to_world(&self) -> Vec2 {
        Vec2::new(
            self.world.width / self.screen.width.max(1.0),
            self.world.height / self.screen.height.max(1.0),
        )
    }
}
