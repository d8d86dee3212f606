use super::{BoundsStrategy, HitContext, HitResult};
use crate::model::{GroupShape, Point2, Rect2, ShapeId, ShapeKind, ShapeNode, ShapeVariant};

/// Groups have no geometry of their own: every predicate is answered by the
/// connectors and children. An empty group never hits.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupBounds;

impl GroupBounds {
    fn shape(node: &ShapeNode) -> Option<&GroupShape> {
        match &node.kind {
            ShapeKind::Group(group) => Some(group),
            _ => None,
        }
    }
}

impl BoundsStrategy for GroupBounds {
    fn variant(&self) -> ShapeVariant {
        ShapeVariant::Group
    }

    /// Connectors first, then each child in order.
    fn try_get_point(
        &self,
        node: &ShapeNode,
        target: Point2,
        radius: f64,
        scale: f64,
        cx: &HitContext<'_>,
    ) -> HitResult<Option<ShapeId>> {
        let Some(group) = Self::shape(node) else {
            return Ok(None);
        };
        if let Some(hit) =
            cx.first_point_hit(group.connectors.iter().copied().map(Some), target, radius, scale)?
        {
            return Ok(Some(hit));
        }
        for &child in &group.shapes {
            if let Some(hit) = cx.try_get_point(child, target, radius, scale)? {
                return Ok(Some(hit));
            }
        }
        Ok(None)
    }

    fn contains(
        &self,
        node: &ShapeNode,
        target: Point2,
        radius: f64,
        scale: f64,
        cx: &HitContext<'_>,
    ) -> HitResult<bool> {
        let Some(group) = Self::shape(node) else {
            return Ok(false);
        };
        for &child in &group.shapes {
            if cx.contains(child, target, radius, scale)? {
                return Ok(true);
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
        let Some(group) = Self::shape(node) else {
            return Ok(false);
        };
        for &child in &group.shapes {
            if cx.overlaps(child, target, radius, scale)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn bounds(&self, node: &ShapeNode, cx: &HitContext<'_>) -> HitResult<Option<Rect2>> {
        match Self::shape(node) {
            Some(group) => cx.union_bounds(group.shapes.iter().copied()),
            None => Ok(None),
        }
    }
}
