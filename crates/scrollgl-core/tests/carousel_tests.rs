// Host-side tests for the infinite-loop wrap-around.

use scrollgl_core::{Direction, LoopItem};

const EPS: f32 = 1e-4;

#[test]
fn wraps_exactly_once_when_crossing_below_the_viewport() {
    let world_height = 16.0;
    // Item whose plane y sits just past the lower crossing edge:
    // y + half_scale < -world_height
    let mut item = LoopItem::new(-20.0, 2.0, 100.0);

    let y = item.update(0.0, Direction::Up, world_height);
    assert!((item.extra - (-100.0)).abs() < EPS, "extra={}", item.extra);
    assert!((y - 80.0).abs() < EPS, "y={y}");

    // Still out of view on the next frame (it wrapped far past the top):
    // the guard must keep extra unchanged.
    let _ = item.update(0.0, Direction::Up, world_height);
    assert!((item.extra - (-100.0)).abs() < EPS, "double wrap");
}

#[test]
fn wraps_upward_when_scrolling_the_other_way() {
    let world_height = 16.0;
    let mut item = LoopItem::new(20.0, 2.0, 100.0);

    item.update(0.0, Direction::Down, world_height);
    assert!((item.extra - 100.0).abs() < EPS);
}

#[test]
fn edge_contact_does_not_wrap() {
    // Strict inequality: an item resting exactly on the crossing edge stays.
    let world_height = 16.0;
    let mut item = LoopItem::new(-18.0, 2.0, 100.0); // y + half == -16 exactly

    item.update(0.0, Direction::Up, world_height);
    assert_eq!(item.extra, 0.0);
}

#[test]
fn guard_clears_once_the_item_is_visible_again() {
    let world_height = 16.0;
    // height_total small enough that the item re-enters view after wrapping
    let mut item = LoopItem::new(-20.0, 2.0, 30.0);

    let y = item.update(0.0, Direction::Up, world_height);
    assert!((item.extra - (-30.0)).abs() < EPS);
    assert!(y.abs() <= world_height + 2.0, "back in view, y={y}");

    // Visible frame clears the guard...
    item.update(0.0, Direction::Up, world_height);
    // ...so a later genuine crossing wraps again. Scrolling forward by 30
    // puts the plane back below the lower edge.
    item.update(30.0, Direction::Up, world_height);
    assert!((item.extra - (-60.0)).abs() < EPS, "extra={}", item.extra);
}

#[test]
fn wrapping_direction_must_match_travel_direction() {
    let world_height = 16.0;
    let mut item = LoopItem::new(-20.0, 2.0, 100.0);

    // Out below but traveling Down: no wrap.
    item.update(0.0, Direction::Down, world_height);
    assert_eq!(item.extra, 0.0);
}

#[test]
fn relayout_preserves_the_extra_offset() {
    let mut item = LoopItem::new(10.0, 2.0, 100.0);
    item.update(0.0, Direction::Down, 4.0); // forces a wrap, extra = 100
    let extra = item.extra;
    assert!(extra != 0.0);

    item.relayout(12.0, 2.5, 110.0);
    assert_eq!(item.extra, extra);
    assert_eq!(item.base_y, 12.0);
}
