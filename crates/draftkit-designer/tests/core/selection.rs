use draftkit_designer::{
    BoundsRegistry, Hit, Point2, Rect2, SelectionManager, SelectionOptions, ShapeStore,
};

fn setup() -> (ShapeStore, BoundsRegistry, SelectionManager) {
    (
        ShapeStore::new(),
        BoundsRegistry::with_defaults(),
        SelectionManager::default(),
    )
}

#[test]
fn test_click_inside_rectangle_selects_it() {
    let (mut store, registry, mut manager) = setup();
    let rect = store.add_rectangle(0.0, 0.0, 10.0, 10.0);

    let changed = manager
        .click_select(&mut store, &registry, Point2::new(5.0, 5.0), 1.0, 1.0, false)
        .unwrap();
    assert!(changed);
    assert_eq!(manager.selection().items(), &[rect]);
    assert_eq!(manager.selected_id(), Some(rect));
}

#[test]
fn test_click_on_empty_space_preserves_selection() {
    let (mut store, registry, mut manager) = setup();
    let rect = store.add_rectangle(0.0, 0.0, 10.0, 10.0);
    manager
        .click_select(&mut store, &registry, Point2::new(5.0, 5.0), 1.0, 1.0, false)
        .unwrap();
    let revision = manager.selection().revision();

    let changed = manager
        .click_select(&mut store, &registry, Point2::new(100.0, 100.0), 1.0, 1.0, false)
        .unwrap();
    assert!(!changed);
    assert_eq!(manager.selection().items(), &[rect]);
    assert_eq!(manager.selection().revision(), revision);

    // Also with nothing selected.
    manager.deselect_all(&mut store);
    let changed = manager
        .click_select(&mut store, &registry, Point2::new(100.0, 100.0), 1.0, 1.0, true)
        .unwrap();
    assert!(!changed);
    assert!(manager.selection().is_empty());
}

#[test]
fn test_click_without_modifier_replaces_selection() {
    let (mut store, registry, mut manager) = setup();
    let a = store.add_rectangle(0.0, 0.0, 10.0, 10.0);
    let b = store.add_rectangle(20.0, 0.0, 10.0, 10.0);

    manager
        .click_select(&mut store, &registry, Point2::new(5.0, 5.0), 1.0, 1.0, false)
        .unwrap();
    manager
        .click_select(&mut store, &registry, Point2::new(25.0, 5.0), 1.0, 1.0, false)
        .unwrap();
    assert_eq!(manager.selection().items(), &[b]);
    assert!(!store.get(a).unwrap().is_selected());
    assert!(store.get(b).unwrap().is_selected());
}

#[test]
fn test_modifier_click_toggles_membership() {
    let (mut store, registry, mut manager) = setup();
    let a = store.add_rectangle(0.0, 0.0, 10.0, 10.0);
    let b = store.add_rectangle(20.0, 0.0, 10.0, 10.0);

    assert!(manager
        .click_select(&mut store, &registry, Point2::new(5.0, 5.0), 1.0, 1.0, true)
        .unwrap());
    assert!(manager
        .click_select(&mut store, &registry, Point2::new(25.0, 5.0), 1.0, 1.0, true)
        .unwrap());
    assert_eq!(manager.selection().items(), &[a, b]);

    // Removing one of two leaves a non-empty set.
    assert!(manager
        .click_select(&mut store, &registry, Point2::new(5.0, 5.0), 1.0, 1.0, true)
        .unwrap());
    // Removing the last one reports an empty set.
    assert!(!manager
        .click_select(&mut store, &registry, Point2::new(25.0, 5.0), 1.0, 1.0, true)
        .unwrap());
    assert!(manager.selection().is_empty());
    assert!(!store.get(b).unwrap().is_selected());
}

#[test]
fn test_click_precedence_shapes_before_guides() {
    let (mut store, registry, mut manager) = setup();
    let guide = store.add_guide_line(Point2::new(-100.0, 5.0), Point2::new(100.0, 5.0));
    let rect = store.add_rectangle(0.0, 0.0, 10.0, 10.0);

    manager
        .click_select(&mut store, &registry, Point2::new(5.0, 5.0), 1.0, 1.0, false)
        .unwrap();
    assert_eq!(manager.selection().items(), &[rect]);

    manager
        .click_select(&mut store, &registry, Point2::new(50.0, 5.0), 1.0, 1.0, false)
        .unwrap();
    assert_eq!(manager.selection().items(), &[guide]);
}

#[test]
fn test_guide_point_beats_guide_body() {
    let (mut store, registry, manager) = setup();
    let guide = store.add_guide_line(Point2::new(0.0, 0.0), Point2::new(100.0, 0.0));
    let end = store.get(guide).unwrap().kind.control_points()[1].unwrap();

    let hit = manager
        .hover(&store, &registry, Point2::new(99.5, 0.0), 1.0, 1.0)
        .unwrap();
    assert_eq!(hit, Some(Hit::point(end)));
}

#[test]
fn test_hover_never_mutates() {
    let (mut store, registry, manager) = setup();
    let rect = store.add_rectangle(0.0, 0.0, 10.0, 10.0);

    let hit = manager
        .hover(&store, &registry, Point2::new(5.0, 5.0), 1.0, 1.0)
        .unwrap();
    assert_eq!(hit, Some(Hit::shape(rect)));
    assert!(manager.selection().is_empty());
    assert!(!store.get(rect).unwrap().is_selected());
}

#[test]
fn test_hover_and_click_agree() {
    let (mut store, registry, mut manager) = setup();
    store.add_rectangle(0.0, 0.0, 10.0, 10.0);
    store.add_rectangle(5.0, 5.0, 10.0, 10.0);
    let target = Point2::new(7.0, 7.0);

    let hovered = manager
        .hover(&store, &registry, target, 1.0, 1.0)
        .unwrap()
        .map(|hit| hit.id);
    manager
        .click_select(&mut store, &registry, target, 1.0, 1.0, false)
        .unwrap();
    assert_eq!(manager.selected_id(), hovered);
}

#[test]
fn test_rect_select_replaces_or_toggles() {
    let (mut store, registry, mut manager) = setup();
    let a = store.add_rectangle(0.0, 0.0, 10.0, 10.0);
    let b = store.add_rectangle(20.0, 0.0, 10.0, 10.0);
    let c = store.add_rectangle(40.0, 0.0, 10.0, 10.0);
    let options = SelectionOptions {
        topmost_first: false,
        ..SelectionOptions::default()
    };
    manager.set_options(options);

    let changed = manager
        .rect_select(&mut store, &registry, Rect2::from_xywh(-1.0, -1.0, 25.0, 5.0), 1.0, 1.0, false)
        .unwrap();
    assert!(changed);
    assert_eq!(manager.selection().items(), &[a, b]);

    // Toggle: b leaves, c joins.
    let changed = manager
        .rect_select(&mut store, &registry, Rect2::from_xywh(25.0, 2.0, 20.0, 2.0), 1.0, 1.0, true)
        .unwrap();
    assert!(changed);
    assert_eq!(manager.selection().items(), &[a, c]);
    assert!(!store.get(b).unwrap().is_selected());

    // An empty marquee is a no-op.
    let changed = manager
        .rect_select(&mut store, &registry, Rect2::from_xywh(200.0, 200.0, 5.0, 5.0), 1.0, 1.0, false)
        .unwrap();
    assert!(!changed);
    assert_eq!(manager.selection().items(), &[a, c]);
}

#[test]
fn test_select_all_and_deselect_all() {
    let (mut store, _registry, mut manager) = setup();
    let a = store.add_rectangle(0.0, 0.0, 10.0, 10.0);
    let b = store.add_line(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));

    assert!(manager.select_all(&mut store));
    assert_eq!(manager.selection().items(), &[a, b]);
    assert_eq!(manager.selected_id(), Some(b));

    assert!(manager.deselect_all(&mut store));
    assert!(!manager.deselect_all(&mut store));
    assert!(store.iter().all(|node| !node.is_selected()));
}
