use draftkit_core::{distance_to_segment, segment_intersects_rect};

use super::{tolerance, BoundsStrategy, HitContext, HitResult};
use crate::model::{Point2, Rect2, ShapeId, ShapeKind, ShapeNode, ShapeVariant};

/// Lines: end points first (start, then end), then distance to the segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineBounds;

impl LineBounds {
    fn segment(node: &ShapeNode, cx: &HitContext<'_>) -> Option<(Point2, Point2)> {
        match &node.kind {
            ShapeKind::Line(line) => Some((cx.point(line.start)?, cx.point(line.end)?)),
            _ => None,
        }
    }
}

impl BoundsStrategy for LineBounds {
    fn variant(&self) -> ShapeVariant {
        ShapeVariant::Line
    }

    fn try_get_point(
        &self,
        node: &ShapeNode,
        target: Point2,
        radius: f64,
        scale: f64,
        cx: &HitContext<'_>,
    ) -> HitResult<Option<ShapeId>> {
        cx.first_point_hit(node.kind.control_points(), target, radius, scale)
    }

    fn contains(
        &self,
        node: &ShapeNode,
        target: Point2,
        radius: f64,
        scale: f64,
        cx: &HitContext<'_>,
    ) -> HitResult<bool> {
        Ok(Self::segment(node, cx)
            .is_some_and(|(a, b)| distance_to_segment(a, b, target) <= tolerance(radius, scale)))
    }

    fn overlaps(
        &self,
        node: &ShapeNode,
        target: Rect2,
        _radius: f64,
        _scale: f64,
        cx: &HitContext<'_>,
    ) -> HitResult<bool> {
        Ok(Self::segment(node, cx).is_some_and(|(a, b)| segment_intersects_rect(a, b, &target)))
    }

    fn bounds(&self, node: &ShapeNode, cx: &HitContext<'_>) -> HitResult<Option<Rect2>> {
        Ok(Self::segment(node, cx).map(|(a, b)| Rect2::from_points(a, b)))
    }
}
