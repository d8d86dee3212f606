use std::sync::Arc;

use draftkit_designer::{
    BoundsRegistry, Canvas, Hit, Modifiers, PointerEvent, PointerKind, Point2, Rect2,
};
use draftkit_settings::{Config, ToggleModifier};

fn press(x: f64, y: f64, modifiers: Modifiers) -> PointerEvent {
    PointerEvent::new(PointerKind::LeftDown, Point2::new(x, y), modifiers)
}

#[test]
fn test_shift_click_extends_selection_by_default() {
    let mut canvas = Canvas::new();
    let a = canvas.shape_store.add_rectangle(0.0, 0.0, 40.0, 40.0);
    let b = canvas.shape_store.add_rectangle(60.0, 0.0, 40.0, 40.0);

    canvas.handle_pointer(&press(20.0, 20.0, Modifiers::NONE)).unwrap();
    let outcome = canvas
        .handle_pointer(&press(80.0, 20.0, Modifiers::shift()))
        .unwrap();

    assert!(outcome.selection_changed);
    assert_eq!(canvas.selected_ids(), &[a, b]);
}

#[test]
fn test_configured_toggle_modifier_is_honored() {
    let mut config = Config::default();
    config.selection.toggle_modifier = ToggleModifier::Ctrl;
    let mut canvas = Canvas::with_config(&config);
    let a = canvas.shape_store.add_rectangle(0.0, 0.0, 40.0, 40.0);
    let b = canvas.shape_store.add_rectangle(60.0, 0.0, 40.0, 40.0);

    canvas.handle_pointer(&press(20.0, 20.0, Modifiers::NONE)).unwrap();
    // Shift no longer toggles.
    canvas
        .handle_pointer(&press(80.0, 20.0, Modifiers::shift()))
        .unwrap();
    assert_eq!(canvas.selected_ids(), &[b]);

    canvas
        .handle_pointer(&press(20.0, 20.0, Modifiers::ctrl()))
        .unwrap();
    assert_eq!(canvas.selected_ids(), &[b, a]);
}

#[test]
fn test_marquee_drag_end_selects_in_document_space() {
    let mut canvas = Canvas::new();
    let a = canvas.shape_store.add_rectangle(0.0, 0.0, 40.0, 40.0);
    canvas.shape_store.add_rectangle(200.0, 200.0, 10.0, 10.0);
    canvas.viewport_mut().set_zoom(2.0);

    // Dragging right-to-left works the same as left-to-right.
    let event = PointerEvent::new(
        PointerKind::RectDragEnd {
            origin: Point2::new(30.0, 30.0),
        },
        Point2::new(-2.0, -2.0),
        Modifiers::NONE,
    );
    let outcome = canvas.handle_pixel_event(&event).unwrap();

    assert!(outcome.selection_changed);
    assert_eq!(canvas.selected_ids(), &[a]);
}

#[test]
fn test_left_up_is_ignored() {
    let mut canvas = Canvas::new();
    canvas.shape_store.add_rectangle(0.0, 0.0, 40.0, 40.0);

    let event = PointerEvent::new(PointerKind::LeftUp, Point2::new(20.0, 20.0), Modifiers::NONE);
    let outcome = canvas.handle_pointer(&event).unwrap();

    assert!(!outcome.needs_redraw());
    assert!(canvas.selected_ids().is_empty());
}

#[test]
fn test_delete_selected_clears_hover_and_selection() {
    let mut canvas = Canvas::new();
    let rect = canvas.shape_store.add_rectangle(0.0, 0.0, 40.0, 40.0);
    let hover = PointerEvent::new(PointerKind::Move, Point2::new(20.0, 20.0), Modifiers::NONE);
    canvas.handle_pointer(&hover).unwrap();
    assert_eq!(canvas.hovered(), Some(Hit::shape(rect)));

    canvas.select_all();
    let report = canvas.delete_selected();

    assert!(report.removed.contains(&rect));
    assert!(canvas.selected_ids().is_empty());
    assert_eq!(canvas.hovered(), None);
    assert!(canvas.delete_selected().is_empty());
}

#[test]
fn test_selection_bounds_follow_selection() {
    let mut canvas = Canvas::new();
    canvas.shape_store.add_rectangle(0.0, 0.0, 10.0, 10.0);
    canvas.shape_store.add_ellipse(20.0, 20.0, 10.0, 5.0);

    assert_eq!(canvas.selection_bounds().unwrap(), None);
    canvas.select_all();
    assert_eq!(
        canvas.selection_bounds().unwrap(),
        Some(Rect2::from_xywh(0.0, 0.0, 30.0, 25.0))
    );
}

#[test]
fn test_canvases_share_a_registry() {
    let registry = Arc::new(BoundsRegistry::with_defaults());
    let config = Config::default();
    let first = Canvas::with_registry(Arc::clone(&registry), &config);
    let second = Canvas::with_registry(Arc::clone(&registry), &config);

    assert!(Arc::ptr_eq(first.registry(), second.registry()));
    assert_eq!(Arc::strong_count(&registry), 3);
}

#[test]
fn test_paste_after_cut_restores_shape_geometry() {
    let mut canvas = Canvas::new();
    canvas.shape_store.add_rectangle(0.0, 0.0, 40.0, 40.0);
    canvas.select_all();
    canvas.cut();
    assert!(canvas.shape_store.shapes().is_empty());

    let pasted = canvas.paste();
    assert_eq!(pasted.len(), 1);
    assert!(canvas.click_select(Point2::new(20.0, 20.0), false).unwrap());
    assert_eq!(canvas.selected_ids(), pasted.as_slice());
}
