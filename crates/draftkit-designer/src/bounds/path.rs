use std::collections::HashSet;

use draftkit_core::{polygon_contains, polygon_overlaps_rect};

use super::{BoundsStrategy, HitContext, HitResult};
use crate::model::{PathFigure, PathShape, Point2, Rect2, ShapeId, ShapeKind, ShapeNode, ShapeVariant};

/// Composite paths.
///
/// Points are tested across every segment in declaration order. A path
/// contains a target when a figure's point polygon does, or when any of its
/// segments does; the path itself is the hit either way.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathBounds;

impl PathBounds {
    fn shape(node: &ShapeNode) -> Option<&PathShape> {
        match &node.kind {
            ShapeKind::Path(path) => Some(path),
            _ => None,
        }
    }

    /// Points of a figure's segments, each once, in declaration order.
    ///
    /// `None` when any segment or point is missing.
    fn figure_polygon(figure: &PathFigure, cx: &HitContext<'_>) -> Option<Vec<Point2>> {
        let mut seen = HashSet::new();
        let mut polygon = Vec::new();
        for &segment in &figure.shapes {
            for slot in cx.node(segment)?.kind.control_points() {
                let id = slot?;
                if seen.insert(id) {
                    polygon.push(cx.store.position(id)?);
                }
            }
        }
        Some(polygon)
    }
}

impl BoundsStrategy for PathBounds {
    fn variant(&self) -> ShapeVariant {
        ShapeVariant::Path
    }

    fn try_get_point(
        &self,
        node: &ShapeNode,
        target: Point2,
        radius: f64,
        scale: f64,
        cx: &HitContext<'_>,
    ) -> HitResult<Option<ShapeId>> {
        let points = cx.store.path_points(node.id);
        cx.first_point_hit(points.into_iter().map(Some), target, radius, scale)
    }

    fn contains(
        &self,
        node: &ShapeNode,
        target: Point2,
        radius: f64,
        scale: f64,
        cx: &HitContext<'_>,
    ) -> HitResult<bool> {
        let Some(path) = Self::shape(node) else {
            return Ok(false);
        };
        for figure in &path.figures {
            if Self::figure_polygon(figure, cx).is_some_and(|poly| polygon_contains(&poly, target)) {
                return Ok(true);
            }
            for &segment in &figure.shapes {
                if cx.contains(segment, target, radius, scale)? {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    fn overlaps(
        &self,
        node: &ShapeNode,
        target: Rect2,
        radius: f64,
        scale: f64,
        cx: &HitContext<'_>,
    ) -> HitResult<bool> {
        let Some(path) = Self::shape(node) else {
            return Ok(false);
        };
        for figure in &path.figures {
            if Self::figure_polygon(figure, cx)
                .is_some_and(|poly| polygon_overlaps_rect(&poly, &target))
            {
                return Ok(true);
            }
            for &segment in &figure.shapes {
                if cx.overlaps(segment, target, radius, scale)? {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    fn bounds(&self, node: &ShapeNode, cx: &HitContext<'_>) -> HitResult<Option<Rect2>> {
        match Self::shape(node) {
            Some(path) => cx.union_bounds(path.segments()),
            None => Ok(None),
        }
    }
}
