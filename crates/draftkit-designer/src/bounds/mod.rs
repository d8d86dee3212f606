//! Bounds-test registry.
//!
//! One [`BoundsStrategy`] per [`ShapeVariant`], looked up by tag. Each strategy
//! answers three predicates for a shape node:
//! - `try_get_point`: which of the shape's points lies under the pointer
//! - `contains`: whether the shape covers a point
//! - `overlaps`: whether the shape touches a rectangle
//!
//! Composite strategies recurse through [`HitContext`], which resolves ids
//! against the store and dispatches back into the registry.

mod arc;
mod bezier;
mod boxed;
mod group;
mod line;
mod path;
mod point;

pub use arc::ArcBounds;
pub use bezier::BezierBounds;
pub use boxed::BoxBounds;
pub use group::GroupBounds;
pub use line::LineBounds;
pub use path::PathBounds;
pub use point::PointBounds;

use std::collections::HashMap;
use std::fmt;

use draftkit_core::HitTestError;
use smallvec::SmallVec;

use crate::model::{Point2, Rect2, ShapeId, ShapeNode, ShapeVariant};
use crate::shape_store::ShapeStore;

/// Result of a single bounds predicate.
pub type HitResult<T> = Result<T, HitTestError>;

/// Effective pick tolerance in document units.
///
/// `radius` is the logical tolerance, `scale` the current zoom. A non-positive
/// scale leaves the radius uncompensated.
pub fn tolerance(radius: f64, scale: f64) -> f64 {
    if scale > 0.0 {
        radius / scale
    } else {
        radius
    }
}

/// Hit-test strategy for one shape variant.
pub trait BoundsStrategy: fmt::Debug + Send + Sync {
    /// Variant this strategy answers for.
    fn variant(&self) -> ShapeVariant;

    /// First point of `node` within tolerance of `target`, in the variant's fixed order.
    fn try_get_point(
        &self,
        node: &ShapeNode,
        target: Point2,
        radius: f64,
        scale: f64,
        cx: &HitContext<'_>,
    ) -> HitResult<Option<ShapeId>>;

    /// Whether `node` covers `target`.
    fn contains(
        &self,
        node: &ShapeNode,
        target: Point2,
        radius: f64,
        scale: f64,
        cx: &HitContext<'_>,
    ) -> HitResult<bool>;

    /// Whether `node` touches `target`.
    fn overlaps(
        &self,
        node: &ShapeNode,
        target: Rect2,
        radius: f64,
        scale: f64,
        cx: &HitContext<'_>,
    ) -> HitResult<bool>;

    /// Axis-aligned bounding rectangle, `None` when geometry is incomplete.
    fn bounds(&self, node: &ShapeNode, cx: &HitContext<'_>) -> HitResult<Option<Rect2>>;
}

/// Table of bounds strategies keyed by variant tag.
///
/// Built once and shared read-only by every query.
#[derive(Debug, Default)]
pub struct BoundsRegistry {
    strategies: HashMap<ShapeVariant, Box<dyn BoundsStrategy>>,
}

impl BoundsRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with a strategy for every built-in variant.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(PointBounds);
        registry.register(LineBounds);
        registry.register(BezierBounds::new(ShapeVariant::CubicBezier));
        registry.register(BezierBounds::new(ShapeVariant::QuadraticBezier));
        registry.register(ArcBounds);
        registry.register(BoxBounds::new(ShapeVariant::Rectangle));
        registry.register(BoxBounds::new(ShapeVariant::Ellipse));
        registry.register(BoxBounds::new(ShapeVariant::Text));
        registry.register(BoxBounds::new(ShapeVariant::Image));
        registry.register(PathBounds);
        registry.register(GroupBounds);
        registry
    }

    /// Registers `strategy` for its variant, returning the one it replaces.
    pub fn register<S>(&mut self, strategy: S) -> Option<Box<dyn BoundsStrategy>>
    where
        S: BoundsStrategy + 'static,
    {
        let variant = strategy.variant();
        tracing::trace!("Registering bounds strategy for {}", variant);
        self.strategies.insert(variant, Box::new(strategy))
    }

    /// Removes the strategy for `variant`.
    pub fn unregister(&mut self, variant: ShapeVariant) -> Option<Box<dyn BoundsStrategy>> {
        self.strategies.remove(&variant)
    }

    pub fn strategy(&self, variant: ShapeVariant) -> Option<&dyn BoundsStrategy> {
        self.strategies.get(&variant).map(|s| s.as_ref())
    }

    pub fn is_registered(&self, variant: ShapeVariant) -> bool {
        self.strategies.contains_key(&variant)
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Registered variants in declaration order.
    pub fn variants(&self) -> Vec<ShapeVariant> {
        let mut variants: Vec<_> = self.strategies.keys().copied().collect();
        variants.sort();
        variants
    }
}

/// Shared state of one query: the store being searched and the registry to dispatch into.
#[derive(Debug, Clone, Copy)]
pub struct HitContext<'a> {
    pub store: &'a ShapeStore,
    pub registry: &'a BoundsRegistry,
}

impl<'a> HitContext<'a> {
    pub fn new(store: &'a ShapeStore, registry: &'a BoundsRegistry) -> Self {
        Self { store, registry }
    }

    /// Strategy for `variant`, or the configuration error that aborts the query.
    pub fn strategy(&self, variant: ShapeVariant) -> HitResult<&'a dyn BoundsStrategy> {
        self.registry.strategy(variant).ok_or_else(|| {
            tracing::error!("No bounds strategy registered for {}", variant);
            HitTestError::MissingStrategy { variant }
        })
    }

    pub fn node(&self, id: ShapeId) -> Option<&'a ShapeNode> {
        self.store.get(id)
    }

    /// Position of a control point slot. Absent or dangling slots resolve to `None`.
    pub fn point(&self, slot: Option<ShapeId>) -> Option<Point2> {
        slot.and_then(|id| self.store.position(id))
    }

    /// Positions of every slot, or `None` if any is missing.
    pub fn points(&self, slots: &[Option<ShapeId>]) -> Option<SmallVec<[Point2; 4]>> {
        slots.iter().map(|slot| self.point(*slot)).collect()
    }

    /// Tests the shape `id` for a point hit. Unknown and hidden shapes never hit.
    pub fn try_get_point(
        &self,
        id: ShapeId,
        target: Point2,
        radius: f64,
        scale: f64,
    ) -> HitResult<Option<ShapeId>> {
        let Some(node) = self.visible(id) else {
            return Ok(None);
        };
        self.strategy(node.variant())?
            .try_get_point(node, target, radius, scale, self)
    }

    /// Tests a list of control point slots in order; first hit wins.
    pub fn first_point_hit<I>(
        &self,
        slots: I,
        target: Point2,
        radius: f64,
        scale: f64,
    ) -> HitResult<Option<ShapeId>>
    where
        I: IntoIterator<Item = Option<ShapeId>>,
    {
        for id in slots.into_iter().flatten() {
            if let Some(hit) = self.try_get_point(id, target, radius, scale)? {
                return Ok(Some(hit));
            }
        }
        Ok(None)
    }

    pub fn contains(&self, id: ShapeId, target: Point2, radius: f64, scale: f64) -> HitResult<bool> {
        let Some(node) = self.visible(id) else {
            return Ok(false);
        };
        self.strategy(node.variant())?
            .contains(node, target, radius, scale, self)
    }

    pub fn overlaps(&self, id: ShapeId, target: Rect2, radius: f64, scale: f64) -> HitResult<bool> {
        let Some(node) = self.visible(id) else {
            return Ok(false);
        };
        self.strategy(node.variant())?
            .overlaps(node, target, radius, scale, self)
    }

    pub fn bounds(&self, id: ShapeId) -> HitResult<Option<Rect2>> {
        let Some(node) = self.visible(id) else {
            return Ok(None);
        };
        self.strategy(node.variant())?.bounds(node, self)
    }

    /// Union of the bounds of `ids`, skipping shapes without geometry.
    pub fn union_bounds<I>(&self, ids: I) -> HitResult<Option<Rect2>>
    where
        I: IntoIterator<Item = ShapeId>,
    {
        let mut acc: Option<Rect2> = None;
        for id in ids {
            if let Some(rect) = self.bounds(id)? {
                acc = Some(match acc {
                    Some(prev) => prev.union(&rect),
                    None => rect,
                });
            }
        }
        Ok(acc)
    }

    fn visible(&self, id: ShapeId) -> Option<&'a ShapeNode> {
        self.node(id).filter(|node| node.is_visible())
    }
}
