use draftkit_core::constants::{MAX_ZOOM, MIN_ZOOM};
use draftkit_designer::viewport::VIEW_PADDING;
use draftkit_designer::{Point2, Rect2, Viewport};

const EPS: f64 = 1e-9;

#[test]
fn test_round_trip_through_pixels() {
    let mut viewport = Viewport::new(800.0, 600.0);
    viewport.set_zoom(2.5);
    viewport.set_pan(-40.0, 17.0);

    let world = Point2::new(12.0, -3.5);
    let (px, py) = viewport.world_to_pixel(world);
    let back = viewport.pixel_to_world(px, py);
    assert!((back.x - world.x).abs() < EPS);
    assert!((back.y - world.y).abs() < EPS);
}

#[test]
fn test_zoom_is_clamped() {
    let mut viewport = Viewport::default();
    viewport.set_zoom(1_000.0);
    assert_eq!(viewport.zoom(), MAX_ZOOM);
    viewport.set_zoom(0.0);
    assert_eq!(viewport.zoom(), MIN_ZOOM);
    viewport.set_zoom(f64::NAN);
    assert_eq!(viewport.zoom(), MIN_ZOOM);
}

#[test]
fn test_zoom_at_keeps_anchor_fixed() {
    let mut viewport = Viewport::new(800.0, 600.0);
    let anchor = Point2::new(100.0, 50.0);
    let before = viewport.world_to_pixel(anchor);

    viewport.zoom_in_at(anchor);
    viewport.zoom_in_at(anchor);
    let after = viewport.world_to_pixel(anchor);

    assert!(viewport.zoom() > 1.0);
    assert!((before.0 - after.0).abs() < EPS);
    assert!((before.1 - after.1).abs() < EPS);
}

#[test]
fn test_fit_to_bounds_centers_content() {
    let mut viewport = Viewport::new(1000.0, 500.0);
    let bounds = Rect2::from_xywh(0.0, 0.0, 200.0, 200.0);

    viewport.fit_to_bounds(bounds, VIEW_PADDING);

    // Height is the limiting side: 500 * 0.9 / 200.
    assert!((viewport.zoom() - 2.25).abs() < EPS);
    let (cx, cy) = viewport.world_to_pixel(bounds.center());
    assert!((cx - 500.0).abs() < EPS);
    assert!((cy - 250.0).abs() < EPS);
}

#[test]
fn test_marquee_from_pixels_is_normalized() {
    let mut viewport = Viewport::new(800.0, 600.0);
    viewport.set_zoom(2.0);

    let rect = viewport.pixel_rect_to_world(40.0, 40.0, 20.0, 0.0);
    assert_eq!(rect, Rect2::from_xywh(10.0, 0.0, 10.0, 20.0));
}
