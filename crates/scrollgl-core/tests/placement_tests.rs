// Host-side tests for DOM-rect to world-space placement.

use scrollgl_core::{LayoutRect, Placement, ScreenSize, ViewState};

const EPS: f32 = 1e-4;

fn view_1000x1088() -> ViewState {
    ViewState::compute(ScreenSize::new(1000.0, 1088.0), 45.0, 20.0)
}

#[test]
fn full_bleed_element_fills_the_viewport() {
    let view = view_1000x1088();
    let rect = LayoutRect::new(0.0, 0.0, view.screen.width, view.screen.height);
    let p = Placement::from_rect(rect, &view);

    assert!((p.scale.x - view.world.width).abs() < EPS);
    assert!((p.scale.y - view.world.height).abs() < EPS);
    assert!(p.position.x.abs() < EPS);
    assert!(p.position.y.abs() < EPS);
}

#[test]
fn placement_is_idempotent() {
    let view = view_1000x1088();
    let rect = LayoutRect::new(26.0, 207.7, 331.4, 249.6);

    let a = Placement::from_rect(rect, &view);
    let b = Placement::from_rect(rect, &view);
    assert_eq!(a, b, "same inputs must be bit-identical");
}

#[test]
fn top_left_element_sits_in_the_upper_left_quadrant() {
    let view = view_1000x1088();
    let rect = LayoutRect::new(0.0, 0.0, 100.0, 100.0);
    let p = Placement::from_rect(rect, &view);

    assert!(p.position.x < 0.0);
    assert!(p.position.y > 0.0);
    // Element's left edge touches the world's left edge
    assert!((p.position.x - p.scale.x / 2.0 + view.world.width / 2.0).abs() < EPS);
    // Element's top edge touches the world's top edge
    assert!((p.position.y + p.scale.y / 2.0 - view.world.height / 2.0).abs() < EPS);
}

#[test]
fn scale_follows_the_pixel_to_world_ratio() {
    let view = view_1000x1088();
    let rect = LayoutRect::new(0.0, 0.0, 320.0, 300.0);
    let p = Placement::from_rect(rect, &view);

    assert!((p.scale.x - view.world.width * 320.0 / 1000.0).abs() < EPS);
    assert!((p.scale.y - view.world.height * 300.0 / 1088.0).abs() < EPS);
}
