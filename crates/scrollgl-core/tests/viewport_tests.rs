// Host-side tests for the screen-to-world viewport mapping.

use scrollgl_core::{compute_viewport, ScreenSize, ViewState};

const EPS: f32 = 1e-3;

#[test]
fn world_aspect_matches_input_aspect() {
    for &(fov, z, aspect) in &[
        (45.0_f32, 20.0_f32, 16.0 / 9.0_f32),
        (75.0, 10.0, 0.5),
        (30.0, 5.0, 1.0),
        (60.0, 100.0, 2.35),
    ] {
        let world = compute_viewport(fov, z, aspect);
        assert!(
            (world.width / world.height - aspect).abs() < EPS,
            "fov={fov} z={z} aspect={aspect} got {}",
            world.width / world.height
        );
    }
}

#[test]
fn reference_scenario_1000x1088() {
    // 1000x1088 screen, fov 45 degrees, camera at z=20
    let screen = ScreenSize::new(1000.0, 1088.0);
    let view = ViewState::compute(screen, 45.0, 20.0);

    assert!((view.world.height - 16.5685).abs() < EPS, "{}", view.world.height);
    assert!((view.world.width - 15.2284).abs() < EPS, "{}", view.world.width);
}

#[test]
fn view_state_pair_is_consistent() {
    // Both components always come from the same computation, so the ratio
    // between screen and world must agree on both axes.
    let view = ViewState::compute(ScreenSize::new(1440.0, 900.0), 45.0, 20.0);
    let ratio = view.px_to_world();
    assert!((ratio.x * view.screen.width - view.world.width).abs() < EPS);
    assert!((ratio.y * view.screen.height - view.world.height).abs() < EPS);
}

#[test]
fn degenerate_screen_height_does_not_divide_by_zero() {
    let view = ViewState::compute(ScreenSize::new(800.0, 0.0), 45.0, 20.0);
    assert!(view.world.width.is_finite());
    assert!(view.px_to_world().y.is_finite());
}
