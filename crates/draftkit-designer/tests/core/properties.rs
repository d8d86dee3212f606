use proptest::prelude::*;

use draftkit_designer::{
    BoundsRegistry, ConnectorRole, HitContext, HitTest, Point2, Rect2, SelectionSet, ShapeId,
    ShapeStore,
};

fn coord() -> impl Strategy<Value = f64> {
    -500.0..500.0f64
}

fn point() -> impl Strategy<Value = Point2> {
    (coord(), coord()).prop_map(|(x, y)| Point2::new(x, y))
}

fn scene(boxes: &[(f64, f64, f64, f64)]) -> ShapeStore {
    let mut store = ShapeStore::new();
    for &(x, y, w, h) in boxes {
        store.add_rectangle(x, y, w, h);
    }
    store
}

/// Shapes exposing control points to pick.
#[derive(Debug, Clone, Copy)]
enum Pickable {
    Line,
    Rectangle,
    CubicBezier,
    WiredGroup,
}

fn pickable() -> impl Strategy<Value = Pickable> {
    prop_oneof![
        Just(Pickable::Line),
        Just(Pickable::Rectangle),
        Just(Pickable::CubicBezier),
        Just(Pickable::WiredGroup),
    ]
}

fn build_pickable(store: &mut ShapeStore, kind: Pickable, p: [Point2; 4]) -> ShapeId {
    let frame = Rect2::from_points(p[0], p[1]);
    match kind {
        Pickable::Line => store.add_line(p[0], p[1]),
        Pickable::Rectangle => store.add_rectangle(frame.x, frame.y, frame.width, frame.height),
        Pickable::CubicBezier => store.add_cubic_bezier(p),
        Pickable::WiredGroup => {
            let rect = store.add_rectangle(frame.x, frame.y, frame.width, frame.height);
            let group = store.group(&[rect]).unwrap();
            let port = store.create_point(p[2]);
            store.add_connector(group, port, ConnectorRole::Output).unwrap();
            group
        }
    }
}

fn boxes() -> impl Strategy<Value = Vec<(f64, f64, f64, f64)>> {
    prop::collection::vec((coord(), coord(), 1.0..100.0f64, 1.0..100.0f64), 1..12)
}

proptest! {
    #[test]
    fn line_hits_grow_with_radius(
        start in point(),
        end in point(),
        target in point(),
        radius in 0.1..20.0f64,
        extra in 0.0..20.0f64,
    ) {
        let mut store = ShapeStore::new();
        let line = store.add_line(start, end);
        let registry = BoundsRegistry::with_defaults();
        let cx = HitContext::new(&store, &registry);

        let small = cx.contains(line, target, radius, 1.0).unwrap();
        let large = cx.contains(line, target, radius + extra, 1.0).unwrap();
        prop_assert!(!small || large);
    }

    #[test]
    fn point_picks_grow_with_radius(
        kind in pickable(),
        points in [point(), point(), point(), point()],
        anchor in 0usize..4,
        offset in (-25.0..25.0f64, -25.0..25.0f64),
        radius in 0.1..20.0f64,
        extra in 0.0..20.0f64,
        scale in 0.1..10.0f64,
    ) {
        let mut store = ShapeStore::new();
        let id = build_pickable(&mut store, kind, points);
        let registry = BoundsRegistry::with_defaults();
        let cx = HitContext::new(&store, &registry);
        let base = points[anchor];
        let target = Point2::new(base.x + offset.0, base.y + offset.1);

        let small = cx.try_get_point(id, target, radius, scale).unwrap();
        let large = cx.try_get_point(id, target, radius + extra, scale).unwrap();
        prop_assert!(small.is_none() || large.is_some());
    }

    #[test]
    fn zooming_in_never_widens_hits(
        start in point(),
        end in point(),
        target in point(),
        scale in 0.1..10.0f64,
    ) {
        let mut store = ShapeStore::new();
        let line = store.add_line(start, end);
        let registry = BoundsRegistry::with_defaults();
        let cx = HitContext::new(&store, &registry);

        let zoomed = cx.contains(line, target, 6.0, scale * 2.0).unwrap();
        let base = cx.contains(line, target, 6.0, scale).unwrap();
        prop_assert!(!zoomed || base);
    }

    #[test]
    fn rect_queries_are_deterministic(boxes in boxes(), rect in (point(), point())) {
        let store = scene(&boxes);
        let registry = BoundsRegistry::with_defaults();
        let query = Rect2::from_points(rect.0, rect.1);
        let hit_test = HitTest::new(&store, &registry);

        let first = hit_test.try_get_shapes(store.shapes(), query, 6.0, 1.0).unwrap();
        let second = hit_test.try_get_shapes(store.shapes(), query, 6.0, 1.0).unwrap();
        prop_assert_eq!(&first, &second);

        let mut reversed = hit_test
            .topmost_first(true)
            .try_get_shapes(store.shapes(), query, 6.0, 1.0)
            .unwrap();
        reversed.reverse();
        prop_assert_eq!(first, reversed);
    }

    #[test]
    fn shape_hit_is_contained(boxes in boxes(), target in point()) {
        let store = scene(&boxes);
        let registry = BoundsRegistry::with_defaults();
        let hit_test = HitTest::new(&store, &registry).topmost_first(true);

        if let Some(id) = hit_test.try_get_shape(store.shapes(), target, 6.0, 1.0).unwrap() {
            prop_assert!(hit_test.contains(id, target, 6.0, 1.0).unwrap());
        }
    }

    #[test]
    fn double_toggle_restores_membership(
        initial in prop::collection::vec(1u64..20, 0..10),
        id in 1u64..20,
    ) {
        let mut set = SelectionSet::new();
        for &raw in &initial {
            set.add(ShapeId(raw));
        }
        let before: Vec<ShapeId> = set.items().to_vec();

        set.toggle(ShapeId(id));
        set.toggle(ShapeId(id));

        let mut after = set.items().to_vec();
        let mut expected = before;
        after.sort();
        expected.sort();
        prop_assert_eq!(after, expected);
    }
}
