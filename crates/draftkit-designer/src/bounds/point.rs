use super::{tolerance, BoundsStrategy, HitContext, HitResult};
use crate::model::{Point2, Rect2, ShapeId, ShapeNode, ShapeVariant};

/// A point hits when the target lies inside the square of half-width
/// `radius / scale` centered on it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointBounds;

impl PointBounds {
    fn pick_rect(node: &ShapeNode, radius: f64, scale: f64) -> Option<Rect2> {
        node.position()
            .map(|p| p.expand_to_rect(tolerance(radius, scale)))
    }
}

impl BoundsStrategy for PointBounds {
    fn variant(&self) -> ShapeVariant {
        ShapeVariant::Point
    }

    fn try_get_point(
        &self,
        node: &ShapeNode,
        target: Point2,
        radius: f64,
        scale: f64,
        _cx: &HitContext<'_>,
    ) -> HitResult<Option<ShapeId>> {
        let hit = Self::pick_rect(node, radius, scale).is_some_and(|r| r.contains(target));
        Ok(hit.then_some(node.id))
    }

    fn contains(
        &self,
        node: &ShapeNode,
        target: Point2,
        radius: f64,
        scale: f64,
        _cx: &HitContext<'_>,
    ) -> HitResult<bool> {
        Ok(Self::pick_rect(node, radius, scale).is_some_and(|r| r.contains(target)))
    }

    fn overlaps(
        &self,
        node: &ShapeNode,
        target: Rect2,
        radius: f64,
        scale: f64,
        _cx: &HitContext<'_>,
    ) -> HitResult<bool> {
        Ok(Self::pick_rect(node, radius, scale).is_some_and(|r| r.intersects(&target)))
    }

    fn bounds(&self, node: &ShapeNode, _cx: &HitContext<'_>) -> HitResult<Option<Rect2>> {
        Ok(node.position().map(|p| Rect2::from_points(p, p)))
    }
}
