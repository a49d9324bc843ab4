//! Damped scroll-follow state.
//!
//! Raw wheel/touch input moves `target`; `tick` eases `current` toward it
//! once per animation frame and keeps `last` exactly one frame behind so
//! per-frame velocity is always `current - last`.

use crate::constants::{WHEEL_LINE_HEIGHT_PX, WHEEL_PAGE_HEIGHT_PX};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Flatten the three WheelEvent delta modes into pixels.
pub fn normalize_wheel(delta_y: f64, delta_mode: u32) -> f32 {
    let px = match delta_mode {
        1 => delta_y * WHEEL_LINE_HEIGHT_PX,
        2 => delta_y * WHEEL_PAGE_HEIGHT_PX,
        _ => delta_y,
    };
    px as f32
}

#[derive(Clone, Copy, Debug)]
struct Grab {
    /// Pointer y at touch-down, CSS px.
    start: f32,
    /// `current` captured at touch-down; drag targets are relative to it.
    origin: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct ScrollState {
    pub current: f32,
    pub target: f32,
    pub last: f32,
    pub ease: f32,
    wheel_speed: f32,
    drag_speed: f32,
    grab: Option<Grab>,
}

impl ScrollState {
    pub fn new(ease: f32, wheel_speed: f32, drag_speed: f32) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            last: 0.0,
            ease,
            wheel_speed,
            drag_speed,
            grab: None,
        }
    }

    pub fn on_wheel(&mut self, pixel_y: f32) {
        self.target += pixel_y * self.wheel_speed;
    }

    pub fn begin_drag(&mut self, y: f32) {
        self.grab = Some(Grab {
            start: y,
            origin: self.current,
        });
    }

    pub fn drag_to(&mut self, y: f32) {
        if let Some(grab) = self.grab {
            self.target = grab.origin + (grab.start - y) * self.drag_speed;
        }
    }

    pub fn end_drag(&mut self) {
        self.grab = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }

    /// One animation-frame step. Returns the frame velocity.
    pub fn tick(&mut self) -> f32 {
        self.last = self.current;
        self.current = lerp(self.current, self.target, self.ease);
        self.current - self.last
    }

    pub fn velocity(&self) -> f32 {
        self.current - self.last
    }

    pub fn direction(&self) -> Direction {
        if self.current > self.last {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}
