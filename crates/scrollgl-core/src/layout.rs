//! DOM layout box -> world-space mesh placement.
//!
//! The web side fills `LayoutRect` from element offset geometry; tests feed
//! synthetic rectangles, so none of this needs a browser.

use crate::viewport::ViewState;
use glam::Vec2;

/// One element's layout box in CSS pixels, top-left origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl LayoutRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// World-space scale and center position for one mesh.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Placement {
    pub scale: Vec2,
    pub position: Vec2,
}

impl Placement {
    /// Convert a pixel layout box into world units.
    ///
    /// Scale is the pixel size times the world/screen ratio. Position moves
    /// the top-left pixel origin to the world's center origin; Y flips sign
    /// because screen Y grows downward. Pure, so calling it twice with the
    /// same inputs is bit-identical.
    pub fn from_rect(rect: LayoutRect, view: &ViewState) -> Self {
        let ratio = view.px_to_world();
        let scale = Vec2::new(rect.width * ratio.x, rect.height * ratio.y);
        let position = Vec2::new(
            -view.world.width / 2.0 + scale.x / 2.0 + rect.left * ratio.x,
            view.world.height / 2.0 - scale.y / 2.0 - rect.top * ratio.y,
        );
        Self { scale, position }
    }
}
