//! Infinite-loop gallery wrap-around.
//!
//! Each looped item keeps an `extra` offset that jumps by one total content
//! height when the item has scrolled entirely past the viewport edge in the
//! travel direction, recycling it to the other end of the strip.

use crate::scroll::Direction;

#[derive(Clone, Copy, Debug)]
pub struct LoopItem {
    /// Resting y for this slot, `slot_height * index`.
    pub base_y: f32,
    /// Half the item's world-space height, used in the crossing check.
    pub half_scale: f32,
    /// Full strip height, `slot_height * item_count`.
    pub height_total: f32,
    pub extra: f32,
    wrapped: bool,
}

impl LoopItem {
    pub fn new(base_y: f32, half_scale: f32, height_total: f32) -> Self {
        Self {
            base_y,
            half_scale,
            height_total,
            extra: 0.0,
            wrapped: false,
        }
    }

    /// Reset slot geometry after a resize; `extra` survives so the strip does
    /// not visually jump.
    pub fn relayout(&mut self, base_y: f32, half_scale: f32, height_total: f32) {
        self.base_y = base_y;
        self.half_scale = half_scale;
        self.height_total = height_total;
    }

    /// Advance the item for this frame and return its plane-space y.
    ///
    /// The crossing check is strict inequality against the viewport edge
    /// offset by the item's half height. `wrapped` keeps a crossing from
    /// being applied more than once while the item stays out of view; it
    /// clears as soon as the item is visible again.
    pub fn update(
        &mut self,
        scroll_current: f32,
        direction: Direction,
        world_height: f32,
    ) -> f32 {
        let mut y = self.base_y - scroll_current - self.extra;

        let is_before = y + self.half_scale < -world_height;
        let is_after = y - self.half_scale > world_height;

        if !is_before && !is_after {
            self.wrapped = false;
        } else if !self.wrapped {
            match direction {
                Direction::Up if is_before => {
                    self.extra -= self.height_total;
                    self.wrapped = true;
                }
                Direction::Down if is_after => {
                    self.extra += self.height_total;
                    self.wrapped = true;
                }
                _ => {}
            }
            y = self.base_y - scroll_current - self.extra;
        }

        y
    }
}
