// Host-side tests for damped scroll state and wheel normalization.

use scrollgl_core::{normalize_wheel, Direction, ScrollState};

const EPS: f32 = 1e-5;

#[test]
fn tick_eases_current_toward_target() {
    let mut scroll = ScrollState::new(0.1, 1.0, 1.0);
    scroll.target = 100.0;

    scroll.tick();
    assert!((scroll.current - 10.0).abs() < EPS, "{}", scroll.current);
}

#[test]
fn last_holds_the_pre_tick_current() {
    let mut scroll = ScrollState::new(0.1, 1.0, 1.0);
    scroll.target = 100.0;

    scroll.tick();
    // After the tick, `last` is the value `current` had before it, not after.
    assert!((scroll.last - 0.0).abs() < EPS);
    assert!((scroll.velocity() - 10.0).abs() < EPS);

    scroll.tick();
    assert!((scroll.last - 10.0).abs() < EPS);
}

#[test]
fn direction_tracks_frame_over_frame_movement() {
    let mut scroll = ScrollState::new(0.5, 1.0, 1.0);
    scroll.target = 10.0;
    scroll.tick();
    assert_eq!(scroll.direction(), Direction::Up);

    scroll.target = -10.0;
    scroll.tick();
    assert_eq!(scroll.direction(), Direction::Down);
}

#[test]
fn wheel_input_scales_into_the_target() {
    let mut scroll = ScrollState::new(0.1, 0.005, 1.0);
    scroll.on_wheel(100.0);
    assert!((scroll.target - 0.5).abs() < EPS);
}

#[test]
fn drag_targets_are_relative_to_the_grab_point() {
    let mut scroll = ScrollState::new(0.1, 1.0, 0.1);
    scroll.current = 5.0;
    scroll.target = 5.0;

    scroll.begin_drag(300.0);
    assert!(scroll.is_dragging());

    // Pointer moved 100px up -> target advances by 100 * drag_speed
    scroll.drag_to(200.0);
    assert!((scroll.target - 15.0).abs() < EPS, "{}", scroll.target);

    scroll.end_drag();
    scroll.drag_to(0.0); // ignored after release
    assert!((scroll.target - 15.0).abs() < EPS);
}

#[test]
fn wheel_delta_modes_flatten_to_pixels() {
    assert!((normalize_wheel(3.0, 0) - 3.0).abs() < 1e-6);
    assert!((normalize_wheel(3.0, 1) - 48.0).abs() < 1e-6);
    assert!(normalize_wheel(1.0, 2) > normalize_wheel(1.0, 1));
}
