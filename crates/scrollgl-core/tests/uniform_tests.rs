use scrollgl_core::{map_range, MediaUniforms, PointerFollow, STRENGTH_MAX, STRENGTH_MIN};

const EPS: f32 = 1e-6;

#[test]
fn default_block_is_neutral() {
    let u = MediaUniforms::default();
    assert_eq!(u.image_size, [0.0, 0.0]);
    assert_eq!(u.pointer, [0.5, 0.5]);
    assert_eq!(u.time, 0.0);
    assert_eq!(u.speed, 0.0);
    assert_eq!(u.strength, 0.0);
    assert_eq!(u.reveal, 0.0);
    assert_eq!(std::mem::size_of::<MediaUniforms>(), 64);
}

#[test]
fn frame_updates_leave_image_size_neutral() {
    // An image that never decodes keeps its [0, 0] sentinel while every
    // frame-driven field keeps moving.
    let mut u = MediaUniforms::default();
    for frame in 0..120 {
        u.time += 0.04;
        u.speed = 0.3;
        u.strength = map_range(frame as f32 * 0.1, -8.0, 8.0, STRENGTH_MIN, STRENGTH_MAX);
        u.position = [0.0, frame as f32 * 0.05];
        u.pointer = [0.4, 0.6];
    }
    assert_eq!(u.image_size, [0.0, 0.0]);
}

#[test]
fn strength_mapping_over_viewport_height() {
    let vh = 8.2843;
    assert!((map_range(0.0, -vh, vh, STRENGTH_MIN, STRENGTH_MAX) - 10.0).abs() < EPS);
    assert!((map_range(-vh, -vh, vh, STRENGTH_MIN, STRENGTH_MAX) - STRENGTH_MIN).abs() < EPS);
    assert!((map_range(vh, -vh, vh, STRENGTH_MIN, STRENGTH_MAX) - STRENGTH_MAX).abs() < EPS);
}

#[test]
fn map_range_is_unclamped() {
    // Planes above or below the viewport keep extrapolating.
    assert!((map_range(2.0, -1.0, 1.0, 5.0, 15.0) - 20.0).abs() < EPS);
    assert!((map_range(-2.0, -1.0, 1.0, 5.0, 15.0) - 0.0).abs() < EPS);
}

#[test]
fn pointer_target_clamps_to_unit_square() {
    let mut p = PointerFollow::new(0.1);
    p.set_target(-0.5, 1.7);
    assert_eq!(p.target.x, 0.0);
    assert_eq!(p.target.y, 1.0);
    p.set_target(0.25, 0.75);
    assert!((p.target.x - 0.25).abs() < EPS);
    assert!((p.target.y - 0.75).abs() < EPS);
}

#[test]
fn pointer_eases_toward_target() {
    let mut p = PointerFollow::new(0.1);
    p.set_target(1.0, 0.0);
    p.tick();
    // One step from center with ease 0.1.
    assert!((p.current.x - 0.55).abs() < EPS);
    assert!((p.current.y - 0.45).abs() < EPS);
    for _ in 0..200 {
        p.tick();
    }
    assert!((p.current.x - 1.0).abs() < 1e-3);
    assert!((p.current.y - 0.0).abs() < 1e-3);
}
