use draftkit_designer::{
    copy_shapes, ConnectorRole, PathFigure, Point2, ShapeKind, ShapeState, ShapeStore,
};

#[test]
fn test_copies_share_one_copied_point() {
    let mut source = ShapeStore::new();
    let shared = source.create_point(Point2::new(5.0, 5.0));
    let a = source.create_point(Point2::new(0.0, 0.0));
    let b = source.create_point(Point2::new(10.0, 0.0));
    let l1 = source.create_line(a, shared).unwrap();
    let l2 = source.create_line(shared, b).unwrap();
    source.add_shape(l1).unwrap();
    source.add_shape(l2).unwrap();

    let mut target = ShapeStore::new();
    let copies = copy_shapes(&source, &[l1, l2], &mut target);

    assert_eq!(copies.len(), 2);
    assert_eq!(target.shapes(), copies.as_slice());
    let end_of_first = target.get(copies[0]).unwrap().kind.control_points()[1];
    let start_of_second = target.get(copies[1]).unwrap().kind.control_points()[0];
    assert!(end_of_first.is_some());
    assert_eq!(end_of_first, start_of_second);
    assert_ne!(end_of_first, Some(shared));

    // Two lines, three distinct points.
    assert_eq!(target.len(), 5);
}

#[test]
fn test_separate_calls_do_not_share_points() {
    let mut source = ShapeStore::new();
    let shared = source.create_point(Point2::new(5.0, 5.0));
    let a = source.create_point(Point2::new(0.0, 0.0));
    let l1 = source.create_line(a, shared).unwrap();
    source.add_shape(l1).unwrap();

    let mut target = ShapeStore::new();
    let first = copy_shapes(&source, &[l1], &mut target)[0];
    let second = copy_shapes(&source, &[l1], &mut target)[0];

    let p1 = target.get(first).unwrap().kind.control_points()[1];
    let p2 = target.get(second).unwrap().kind.control_points()[1];
    assert_ne!(p1, p2);
}

#[test]
fn test_group_copy_reowns_children_and_connectors() {
    let mut source = ShapeStore::new();
    let rect = source.add_rectangle(0.0, 0.0, 10.0, 10.0);
    let group = source.group(&[rect]).unwrap();
    let port = source.create_point(Point2::new(10.0, 5.0));
    source.add_connector(group, port, ConnectorRole::Input).unwrap();

    let mut target = ShapeStore::new();
    let copy = copy_shapes(&source, &[group], &mut target)[0];

    let ShapeKind::Group(copied) = &target.get(copy).unwrap().kind else {
        panic!("copy is not a group");
    };
    assert_eq!(copied.shapes.len(), 1);
    assert_eq!(copied.connectors.len(), 1);
    assert_eq!(target.get(copied.shapes[0]).unwrap().owner, Some(copy));

    let connector = target.get(copied.connectors[0]).unwrap();
    assert_eq!(connector.owner, Some(copy));
    assert_eq!(connector.state.connector_role(), ConnectorRole::Input);
    assert_eq!(connector.position(), Some(Point2::new(10.0, 5.0)));
}

#[test]
fn test_path_copy_keeps_figure_layout() {
    let mut source = ShapeStore::new();
    let a = source.create_point(Point2::new(0.0, 0.0));
    let b = source.create_point(Point2::new(10.0, 0.0));
    let c = source.create_point(Point2::new(10.0, 10.0));
    let x = source.create_line(a, b).unwrap();
    let y = source.create_line(b, c).unwrap();
    let path = source
        .add_path(vec![PathFigure::new(vec![x, y], true)])
        .unwrap();

    let mut target = ShapeStore::new();
    let copy = copy_shapes(&source, &[path], &mut target)[0];

    let ShapeKind::Path(copied) = &target.get(copy).unwrap().kind else {
        panic!("copy is not a path");
    };
    assert_eq!(copied.figures.len(), 1);
    assert!(copied.figures[0].is_closed);
    assert_eq!(target.path_points(copy).len(), 3);
}

#[test]
fn test_copies_are_unselected_and_keep_collection() {
    let mut source = ShapeStore::new();
    let guide = source.add_guide_line(Point2::new(0.0, 0.0), Point2::new(0.0, 50.0));
    let rect = source.add_rectangle(0.0, 0.0, 10.0, 10.0);
    source
        .get_mut(rect)
        .unwrap()
        .state
        .insert(ShapeState::SELECTED | ShapeState::LOCKED);

    let mut target = ShapeStore::new();
    let copies = copy_shapes(&source, &[guide, rect], &mut target);

    assert_eq!(target.guides(), &copies[..1]);
    assert_eq!(target.shapes(), &copies[1..]);
    let copied = target.get(copies[1]).unwrap();
    assert!(!copied.is_selected());
    assert!(copied.is_locked());
}

#[test]
fn test_bare_points_are_not_copied() {
    let mut source = ShapeStore::new();
    let point = source.add_point(Point2::new(1.0, 1.0));

    let mut target = ShapeStore::new();
    assert!(copy_shapes(&source, &[point], &mut target).is_empty());
    assert!(target.is_empty());
}
