use super::{BoundsStrategy, HitContext, HitResult};
use crate::model::{Point2, Rect2, ShapeId, ShapeKind, ShapeNode, ShapeVariant};

/// Arcs hit-test against the rectangle spanned by their first two points.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArcBounds;

impl ArcBounds {
    fn rect(node: &ShapeNode, cx: &HitContext<'_>) -> Option<Rect2> {
        match &node.kind {
            ShapeKind::Arc(arc) => Some(Rect2::from_points(
                cx.point(arc.point1)?,
                cx.point(arc.point2)?,
            )),
            _ => None,
        }
    }
}

impl BoundsStrategy for ArcBounds {
    fn variant(&self) -> ShapeVariant {
        ShapeVariant::Arc
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
        Ok(Self::rect(node, cx).is_some_and(|r| r.contains(target)))
    }

    fn overlaps(
        &self,
        node: &ShapeNode,
        target: Rect2,
        _radius: f64,
        _scale: f64,
        cx: &HitContext<'_>,
    ) -> HitResult<bool> {
        Ok(Self::rect(node, cx).is_some_and(|r| r.intersects(&target)))
    }

    fn bounds(&self, node: &ShapeNode, cx: &HitContext<'_>) -> HitResult<Option<Rect2>> {
        Ok(Self::rect(node, cx))
    }
}
