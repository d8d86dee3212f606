use super::{BoundsStrategy, HitContext, HitResult};
use crate::model::{Point2, Rect2, ShapeId, ShapeNode, ShapeVariant};

/// Box-like shapes (rectangle, ellipse, text, image): the rectangle between
/// the top-left and bottom-right corners.
#[derive(Debug, Clone, Copy)]
pub struct BoxBounds {
    variant: ShapeVariant,
}

impl BoxBounds {
    pub fn new(variant: ShapeVariant) -> Self {
        Self { variant }
    }

    fn rect(node: &ShapeNode, cx: &HitContext<'_>) -> Option<Rect2> {
        let frame = node.kind.frame()?;
        Some(Rect2::from_points(
            cx.point(frame.top_left)?,
            cx.point(frame.bottom_right)?,
        ))
    }
}

impl BoundsStrategy for BoxBounds {
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
