//! Structural edits applied to a resolved selection: delete and copy.
//!
//! Both operations perform the forward mutation only. Undo bookkeeping is the
//! caller's job; [`DeleteReport`] tells it what disappeared and which
//! surviving composites need their cached geometry rebuilt.

use std::collections::{HashMap, HashSet};

use crate::model::{ShapeId, ShapeKind, ShapeNode, ShapeState, ShapeVariant};
use crate::shape_store::ShapeStore;

/// Outcome of [`delete_shapes`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteReport {
    /// Every node removed from the store, including cascaded parents,
    /// owned descendants and orphaned control points.
    pub removed: Vec<ShapeId>,
    /// Surviving composites whose children changed, in id order.
    pub dirty: Vec<ShapeId>,
}

impl DeleteReport {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty()
    }
}

/// Deletes `ids` from the store, repairing composite parents.
///
/// Each id is resolved in this order: top-level shape, guide, group
/// connector, path segment, group child. Removing the last segment of a
/// figure removes the figure; removing the last figure of a path removes the
/// path; removing the last child of a group removes the group. The cascade
/// continues up through nested owners. Points (control points, connectors,
/// standalone points) still referenced by a remaining shape are detached
/// instead of deleted.
pub fn delete_shapes(store: &mut ShapeStore, ids: &[ShapeId]) -> DeleteReport {
    let mut report = DeleteReport::default();
    let mut dirty: HashSet<ShapeId> = HashSet::new();
    let mut released_points: Vec<ShapeId> = Vec::new();

    for &id in ids {
        let Some(node) = store.get(id) else {
            tracing::debug!("Skipping delete of {}: already gone", id);
            continue;
        };
        let owner = node.owner;
        let variant = node.variant();

        if store.is_top_level(id) {
            store.shapes_mut().retain(|&s| s != id);
            destroy_subtree(store, id, &mut report, &mut released_points);
        } else if store.is_guide(id) {
            store.guides_mut().retain(|&s| s != id);
            destroy_subtree(store, id, &mut report, &mut released_points);
        } else if let Some(owner) = owner {
            detach_and_cascade(store, id, owner, &mut report, &mut dirty, &mut released_points);
        } else if variant == ShapeVariant::Point && store.is_point_referenced(id) {
            tracing::debug!("Skipping delete of {}: control point in use", id);
        } else {
            destroy_subtree(store, id, &mut report, &mut released_points);
        }
    }

    prune_orphan_points(store, &released_points, &mut report);

    report.dirty = dirty.into_iter().filter(|&id| store.contains(id)).collect();
    report.dirty.sort();
    if !report.is_empty() {
        tracing::info!(
            "Deleted {} node(s), {} composite(s) dirty",
            report.removed.len(),
            report.dirty.len()
        );
    }
    report
}

/// Removes `child` from `owner`, then walks upward removing every composite
/// the removal leaves empty.
fn detach_and_cascade(
    store: &mut ShapeStore,
    child: ShapeId,
    owner: ShapeId,
    report: &mut DeleteReport,
    dirty: &mut HashSet<ShapeId>,
    released_points: &mut Vec<ShapeId>,
) {
    let mut child = child;
    let mut owner = owner;

    loop {
        let emptied = remove_from_owner(store, owner, child);
        store.mark_dirty(owner);
        dirty.insert(owner);
        destroy_subtree(store, child, report, released_points);

        if !emptied {
            return;
        }
        tracing::debug!("Composite {} is empty, removing it", owner);

        if store.is_top_level(owner) {
            store.shapes_mut().retain(|&s| s != owner);
            destroy_subtree(store, owner, report, released_points);
            return;
        }
        if store.is_guide(owner) {
            store.guides_mut().retain(|&s| s != owner);
            destroy_subtree(store, owner, report, released_points);
            return;
        }
        match store.get(owner).and_then(|n| n.owner) {
            Some(grand) => {
                child = owner;
                owner = grand;
            }
            None => {
                destroy_subtree(store, owner, report, released_points);
                return;
            }
        }
    }
}

/// Drops `child` from whichever collection of `owner` holds it.
///
/// Returns whether the owner is left with nothing to draw: a group without
/// child shapes, or a path without figures. An emptied figure is removed from
/// its path on the way.
fn remove_from_owner(store: &mut ShapeStore, owner: ShapeId, child: ShapeId) -> bool {
    let Some(node) = store.get_mut(owner) else {
        return false;
    };
    match &mut node.kind {
        ShapeKind::Group(group) => {
            if let Some(index) = group.connectors.iter().position(|&c| c == child) {
                group.connectors.remove(index);
                return false;
            }
            group.shapes.retain(|&s| s != child);
            group.shapes.is_empty()
        }
        ShapeKind::Path(path) => {
            let Some(index) = path.figure_of(child) else {
                return false;
            };
            let figure = &mut path.figures[index];
            figure.shapes.retain(|&s| s != child);
            if figure.is_empty() {
                path.figures.remove(index);
            }
            path.figures.is_empty()
        }
        _ => false,
    }
}

/// Removes `root` and every shape it owns, children before parents.
///
/// Points are never destroyed here. A point root and every connector met on
/// the way are detached and queued with the released control points, so
/// only the ones no surviving shape references get pruned.
fn destroy_subtree(
    store: &mut ShapeStore,
    root: ShapeId,
    report: &mut DeleteReport,
    released_points: &mut Vec<ShapeId>,
) {
    if store
        .get(root)
        .is_some_and(|n| n.variant() == ShapeVariant::Point)
    {
        release_point(store, root, released_points);
        return;
    }

    // Pre-order collection, reversed for a post-order removal.
    let mut order = Vec::new();
    let mut connectors = Vec::new();
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        let Some(node) = store.get(id) else { continue };
        order.push(id);
        stack.extend(node.kind.children());
        connectors.extend(node.kind.connectors().iter().copied());
    }

    for id in order.into_iter().rev() {
        if let Some(node) = store.remove_node(id) {
            released_points.extend(node.kind.control_points().into_iter().flatten());
            tracing::trace!("Removed {} {}", node.variant(), id);
            report.removed.push(id);
        }
    }
    for connector in connectors {
        release_point(store, connector, released_points);
    }
}

/// Turns a connector or layer point back into a plain detached point.
fn release_point(store: &mut ShapeStore, point: ShapeId, released_points: &mut Vec<ShapeId>) {
    if let Some(node) = store.get_mut(point) {
        node.owner = None;
        node.state.remove(
            ShapeState::CONNECTOR
                | ShapeState::INPUT
                | ShapeState::OUTPUT
                | ShapeState::STANDALONE,
        );
        released_points.push(point);
    }
}

/// Removes control points left without any referencing shape.
fn prune_orphan_points(store: &mut ShapeStore, candidates: &[ShapeId], report: &mut DeleteReport) {
    let mut seen = HashSet::new();
    for &point in candidates {
        if !seen.insert(point) {
            continue;
        }
        let orphaned = store.get(point).is_some_and(|n| n.owner.is_none())
            && !store.is_top_level(point)
            && !store.is_guide(point)
            && !store.is_point_referenced(point);
        if orphaned {
            store.remove_node(point);
            report.removed.push(point);
        }
    }
}

/// Deep-copies `ids` from `source` into `target`, appending the copies to
/// the matching top-level collection (shapes or guides).
///
/// Points are looked up in one substitution map for the whole call, so
/// shapes that share a point in `source` share the copied point in `target`.
/// Bare points are not copied as top-level items. Copies start unselected.
///
/// Returns the ids of the top-level copies in input order.
pub fn copy_shapes(source: &ShapeStore, ids: &[ShapeId], target: &mut ShapeStore) -> Vec<ShapeId> {
    let mut points: HashMap<ShapeId, ShapeId> = HashMap::new();
    let mut copies = Vec::new();

    for &id in ids {
        let Some(node) = source.get(id) else {
            tracing::debug!("Skipping copy of unknown shape {}", id);
            continue;
        };
        if node.variant() == ShapeVariant::Point {
            continue;
        }
        let Some(copy) = copy_node(source, id, target, &mut points, None) else {
            continue;
        };
        if source.is_guide(id) {
            target.guides_mut().push(copy);
        } else {
            target.shapes_mut().push(copy);
        }
        copies.push(copy);
    }

    if !copies.is_empty() {
        tracing::info!(
            "Copied {} shape(s) sharing {} point(s)",
            copies.len(),
            points.len()
        );
    }
    copies
}

fn copy_node(
    source: &ShapeStore,
    id: ShapeId,
    target: &mut ShapeStore,
    points: &mut HashMap<ShapeId, ShapeId>,
    owner: Option<ShapeId>,
) -> Option<ShapeId> {
    let node = source.get(id)?;
    let new_id = target.generate_id();
    let mut kind = node.kind.clone();

    for slot in kind.control_points_mut() {
        *slot = slot.and_then(|p| copy_point(source, p, target, points));
    }

    match &mut kind {
        ShapeKind::Group(group) => {
            group.shapes = group
                .shapes
                .iter()
                .filter_map(|&child| copy_node(source, child, target, points, Some(new_id)))
                .collect();
            group.connectors = group
                .connectors
                .iter()
                .filter_map(|&c| copy_point(source, c, target, points))
                .collect();
            for &connector in &group.connectors {
                if let Some(n) = target.get_mut(connector) {
                    n.owner = Some(new_id);
                }
            }
        }
        ShapeKind::Path(path) => {
            for figure in &mut path.figures {
                figure.shapes = figure
                    .shapes
                    .iter()
                    .filter_map(|&seg| copy_node(source, seg, target, points, Some(new_id)))
                    .collect();
            }
        }
        _ => {}
    }

    target.insert_node(ShapeNode {
        id: new_id,
        name: node.name.clone(),
        owner,
        state: node.state - ShapeState::SELECTED,
        dirty: false,
        kind,
    });
    Some(new_id)
}

fn copy_point(
    source: &ShapeStore,
    id: ShapeId,
    target: &mut ShapeStore,
    points: &mut HashMap<ShapeId, ShapeId>,
) -> Option<ShapeId> {
    if let Some(&copied) = points.get(&id) {
        return Some(copied);
    }
    let node = source.get(id)?;
    if node.variant() != ShapeVariant::Point {
        return None;
    }
    let new_id = target.generate_id();
    target.insert_node(ShapeNode {
        id: new_id,
        name: node.name.clone(),
        owner: None,
        state: node.state - ShapeState::SELECTED,
        dirty: false,
        kind: node.kind.clone(),
    });
    points.insert(id, new_id);
    Some(new_id)
}
