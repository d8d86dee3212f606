use draftkit_core::HitTestError;
use draftkit_designer::{
    BoundsRegistry, Hit, HitTest, Point2, Rect2, ShapeState, ShapeStore, ShapeVariant,
};

#[test]
fn test_point_level_hit_takes_precedence() {
    let mut store = ShapeStore::new();
    // The line's end point sits inside the rectangle drawn before it.
    let rect = store.add_rectangle(0.0, 0.0, 10.0, 10.0);
    let line = store.add_line(Point2::new(5.0, 5.0), Point2::new(50.0, 5.0));
    let start = store.get(line).unwrap().kind.control_points()[0].unwrap();
    let registry = BoundsRegistry::with_defaults();
    let hit_test = HitTest::new(&store, &registry);

    let hit = hit_test
        .find(store.shapes(), Point2::new(5.0, 5.0), 1.0, 1.0)
        .unwrap();
    assert_eq!(hit, Some(Hit::point(start)));

    let shape = hit_test
        .try_get_shape(store.shapes(), Point2::new(5.0, 5.0), 1.0, 1.0)
        .unwrap();
    assert_eq!(shape, Some(rect));
}

#[test]
fn test_composite_absorbs_child_hit() {
    let mut store = ShapeStore::new();
    let inner = store.add_rectangle(0.0, 0.0, 10.0, 10.0);
    let group = store.group(&[inner]).unwrap();
    let registry = BoundsRegistry::with_defaults();
    let hit_test = HitTest::new(&store, &registry);

    let hit = hit_test
        .find(store.shapes(), Point2::new(5.0, 5.0), 1.0, 1.0)
        .unwrap();
    assert_eq!(hit, Some(Hit::shape(group)));
}

#[test]
fn test_rect_query_returns_every_overlap_in_order() {
    let mut store = ShapeStore::new();
    let a = store.add_rectangle(0.0, 0.0, 10.0, 10.0);
    let _far = store.add_rectangle(100.0, 100.0, 10.0, 10.0);
    let c = store.add_line(Point2::new(-5.0, 5.0), Point2::new(30.0, 5.0));
    let registry = BoundsRegistry::with_defaults();
    let rect = Rect2::from_xywh(5.0, 0.0, 20.0, 20.0);

    let hits = HitTest::new(&store, &registry)
        .try_get_shapes(store.shapes(), rect, 1.0, 1.0)
        .unwrap();
    assert_eq!(hits, vec![a, c]);

    let hits = HitTest::new(&store, &registry)
        .topmost_first(true)
        .try_get_shapes(store.shapes(), rect, 1.0, 1.0)
        .unwrap();
    assert_eq!(hits, vec![c, a]);
}

#[test]
fn test_hidden_shapes_are_skipped() {
    let mut store = ShapeStore::new();
    let below = store.add_rectangle(0.0, 0.0, 10.0, 10.0);
    let above = store.add_rectangle(0.0, 0.0, 10.0, 10.0);
    store
        .get_mut(above)
        .unwrap()
        .state
        .remove(ShapeState::VISIBLE);
    let registry = BoundsRegistry::with_defaults();

    let hit = HitTest::new(&store, &registry)
        .topmost_first(true)
        .try_get_shape(store.shapes(), Point2::new(5.0, 5.0), 1.0, 1.0)
        .unwrap();
    assert_eq!(hit, Some(below));
}

#[test]
fn test_missing_registration_fails_the_whole_query() {
    let mut store = ShapeStore::new();
    store.add_rectangle(0.0, 0.0, 10.0, 10.0);
    store.add_ellipse(50.0, 50.0, 10.0, 10.0);
    let mut registry = BoundsRegistry::with_defaults();
    registry.unregister(ShapeVariant::Ellipse);
    let hit_test = HitTest::new(&store, &registry);

    // The rectangle answers first, so the scan never reaches the ellipse.
    assert!(hit_test
        .try_get_shape(store.shapes(), Point2::new(5.0, 5.0), 1.0, 1.0)
        .is_ok());

    let err = hit_test
        .try_get_shape(store.shapes(), Point2::new(500.0, 500.0), 1.0, 1.0)
        .unwrap_err();
    assert_eq!(
        err,
        HitTestError::MissingStrategy {
            variant: ShapeVariant::Ellipse
        }
    );
    assert!(hit_test
        .try_get_shapes(store.shapes(), Rect2::from_xywh(0.0, 0.0, 1.0, 1.0), 1.0, 1.0)
        .is_err());
}

#[test]
fn test_union_bounds_of_collection() {
    let mut store = ShapeStore::new();
    store.add_rectangle(0.0, 0.0, 10.0, 10.0);
    store.add_line(Point2::new(20.0, -5.0), Point2::new(30.0, 5.0));
    let registry = BoundsRegistry::with_defaults();

    let bounds = HitTest::new(&store, &registry)
        .union_bounds(store.shapes())
        .unwrap();
    assert_eq!(bounds, Some(Rect2::from_xywh(0.0, -5.0, 30.0, 15.0)));
}
