use draftkit_core::HitTestError;
use draftkit_designer::bounds::{BoundsRegistry, HitContext, LineBounds};
use draftkit_designer::model::{PathFigure, ShapeKind};
use draftkit_designer::{Point2, Rect2, ShapeStore, ShapeVariant};

#[test]
fn test_group_containing_line_reports_group() {
    let mut store = ShapeStore::new();
    let line = store.add_line(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
    let group = store.group(&[line]).unwrap();
    let registry = BoundsRegistry::with_defaults();
    let cx = HitContext::new(&store, &registry);

    assert_eq!(cx.contains(group, Point2::new(5.0, 0.0), 1.0, 1.0), Ok(true));
}

#[test]
fn test_nested_composites_delegate_to_leaves() {
    let mut store = ShapeStore::new();
    let a = store.create_point(Point2::new(0.0, 0.0));
    let b = store.create_point(Point2::new(20.0, 0.0));
    let segment = store.create_line(a, b).unwrap();
    let path = store
        .create_path(vec![PathFigure::new(vec![segment], false)])
        .unwrap();
    let inner = store.create_group(vec![path]).unwrap();
    store.add_shape(inner).unwrap();
    let outer = store.group(&[inner]).unwrap();

    let registry = BoundsRegistry::with_defaults();
    let cx = HitContext::new(&store, &registry);

    assert_eq!(cx.contains(outer, Point2::new(10.0, 0.5), 1.0, 1.0), Ok(true));
    assert_eq!(cx.try_get_point(outer, Point2::new(20.0, 0.0), 1.0, 1.0), Ok(Some(b)));
    assert_eq!(
        cx.overlaps(outer, Rect2::from_xywh(9.0, -1.0, 2.0, 2.0), 1.0, 1.0),
        Ok(true)
    );
    assert_eq!(cx.bounds(outer), Ok(Some(Rect2::from_xywh(0.0, 0.0, 20.0, 0.0))));
}

#[test]
fn test_missing_child_strategy_aborts_composite_query() {
    let mut store = ShapeStore::new();
    let line = store.add_line(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
    let group = store.group(&[line]).unwrap();

    let mut registry = BoundsRegistry::with_defaults();
    registry.unregister(ShapeVariant::Line);
    let cx = HitContext::new(&store, &registry);

    assert_eq!(
        cx.contains(group, Point2::new(5.0, 0.0), 1.0, 1.0),
        Err(HitTestError::MissingStrategy {
            variant: ShapeVariant::Line
        })
    );

    registry.register(LineBounds);
    let cx = HitContext::new(&store, &registry);
    assert_eq!(cx.contains(group, Point2::new(5.0, 0.0), 1.0, 1.0), Ok(true));
}

#[test]
fn test_dangling_control_point_fails_closed() {
    let mut store = ShapeStore::new();
    let rect = store.add_rectangle(0.0, 0.0, 10.0, 10.0);
    if let Some(ShapeKind::Rectangle(frame)) = store.get_mut(rect).map(|n| &mut n.kind) {
        frame.bottom_right = Some(draftkit_designer::ShapeId(9_999));
    }
    let registry = BoundsRegistry::with_defaults();
    let cx = HitContext::new(&store, &registry);

    assert_eq!(cx.contains(rect, Point2::new(5.0, 5.0), 1.0, 1.0), Ok(false));
    assert_eq!(cx.try_get_point(rect, Point2::new(10.0, 10.0), 1.0, 1.0), Ok(None));
}

#[test]
fn test_image_is_box_like() {
    let mut store = ShapeStore::new();
    let tl = store.create_point(Point2::new(0.0, 0.0));
    let br = store.create_point(Point2::new(40.0, 30.0));
    let image = store.create_image(tl, br, "logo.png").unwrap();
    store.add_shape(image).unwrap();
    let registry = BoundsRegistry::with_defaults();
    let cx = HitContext::new(&store, &registry);

    assert_eq!(cx.contains(image, Point2::new(20.0, 15.0), 1.0, 1.0), Ok(true));
    assert_eq!(
        cx.overlaps(image, Rect2::from_xywh(39.0, 29.0, 5.0, 5.0), 1.0, 1.0),
        Ok(true)
    );
    assert_eq!(
        cx.overlaps(image, Rect2::from_xywh(41.0, 31.0, 5.0, 5.0), 1.0, 1.0),
        Ok(false)
    );
}

#[test]
fn test_point_overlap_inflates_by_tolerance() {
    let mut store = ShapeStore::new();
    let point = store.add_point(Point2::new(10.0, 10.0));
    let registry = BoundsRegistry::with_defaults();
    let cx = HitContext::new(&store, &registry);
    let near = Rect2::from_xywh(11.0, 11.0, 5.0, 5.0);

    assert_eq!(cx.overlaps(point, near, 2.0, 1.0), Ok(true));
    assert_eq!(cx.overlaps(point, near, 2.0, 4.0), Ok(false));
}
