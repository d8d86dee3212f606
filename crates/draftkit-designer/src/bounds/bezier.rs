use draftkit_core::{polygon_contains, polygon_overlaps_rect};

use super::{BoundsStrategy, HitContext, HitResult};
use crate::model::{Point2, Rect2, ShapeId, ShapeNode, ShapeVariant};

/// Cubic and quadratic beziers.
///
/// Containment treats the curve as the polygon of its control points rather
/// than evaluating the curve itself.
#[derive(Debug, Clone, Copy)]
pub struct BezierBounds {
    variant: ShapeVariant,
}

impl BezierBounds {
    /// Strategy for `variant`, which should be one of the bezier tags.
    pub fn new(variant: ShapeVariant) -> Self {
        debug_assert!(matches!(
            variant,
            ShapeVariant::CubicBezier | ShapeVariant::QuadraticBezier
        ));
        Self { variant }
    }
}

impl BoundsStrategy for BezierBounds {
    fn variant(&self) -> ShapeVariant {
        self.variant
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
        _radius: f64,
        _scale: f64,
        cx: &HitContext<'_>,
    ) -> HitResult<bool> {
        Ok(cx
            .points(&node.kind.control_points())
            .is_some_and(|pts| polygon_contains(&pts, target)))
    }

    fn overlaps(
        &self,
        node: &ShapeNode,
        target: Rect2,
        _radius: f64,
        _scale: f64,
        cx: &HitContext<'_>,
    ) -> HitResult<bool> {
        Ok(cx
            .points(&node.kind.control_points())
            .is_some_and(|pts| polygon_overlaps_rect(&pts, &target)))
    }

    fn bounds(&self, node: &ShapeNode, cx: &HitContext<'_>) -> HitResult<Option<Rect2>> {
        Ok(cx
            .points(&node.kind.control_points())
            .and_then(Rect2::enclosing))
    }
}
