//! Shape model: the closed set of drawable variants and their store nodes.
//!
//! Every shape lives in a [`ShapeNode`] inside a [`crate::shape_store::ShapeStore`].
//! Nodes refer to each other by [`ShapeId`] only, so ownership always flows
//! from the store to its nodes and the `owner` field is a plain back-reference.

mod shapes;

pub use shapes::{
    ArcShape, BoxShape, CubicBezierShape, GroupShape, ImageShape, LineShape, PathFigure,
    PathShape, PointShape, QuadraticBezierShape, TextShape,
};

pub use draftkit_core::{ConnectorRole, Point2, Rect2, ShapeId, ShapeVariant};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

bitflags::bitflags! {
    /// Per-shape state flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ShapeState: u16 {
        /// Shape participates in rendering and hit testing.
        const VISIBLE    = 0b0000_0000_0001;
        /// Shape is included in printed output.
        const PRINTABLE  = 0b0000_0000_0010;
        /// Shape cannot be moved or resized.
        const LOCKED     = 0b0000_0000_0100;
        /// Shape is a member of the current selection.
        const SELECTED   = 0b0000_0000_1000;
        /// Point is a connector of a connectable shape.
        const CONNECTOR  = 0b0000_0001_0000;
        /// Connector accepts incoming links.
        const INPUT      = 0b0000_0010_0000;
        /// Connector offers outgoing links.
        const OUTPUT     = 0b0000_0100_0000;
        /// Point stands alone on a layer rather than inside another shape.
        const STANDALONE = 0b0000_1000_0000;
    }
}

impl Default for ShapeState {
    fn default() -> Self {
        Self::VISIBLE | Self::PRINTABLE
    }
}

impl ShapeState {
    /// Connector role encoded by the `INPUT` / `OUTPUT` flags.
    pub fn connector_role(self) -> ConnectorRole {
        if self.contains(Self::INPUT) {
            ConnectorRole::Input
        } else if self.contains(Self::OUTPUT) {
            ConnectorRole::Output
        } else {
            ConnectorRole::None
        }
    }

    /// Flags marking a connector with the given role.
    pub fn connector(role: ConnectorRole) -> Self {
        match role {
            ConnectorRole::None => Self::CONNECTOR,
            ConnectorRole::Input => Self::CONNECTOR | Self::INPUT,
            ConnectorRole::Output => Self::CONNECTOR | Self::OUTPUT,
        }
    }
}

/// Variant payload of a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeKind {
    Point(PointShape),
    Line(LineShape),
    CubicBezier(CubicBezierShape),
    QuadraticBezier(QuadraticBezierShape),
    Arc(ArcShape),
    Rectangle(BoxShape),
    Ellipse(BoxShape),
    Text(TextShape),
    Image(ImageShape),
    Path(PathShape),
    Group(GroupShape),
}

impl ShapeKind {
    /// Tag used to look up the bounds strategy.
    pub fn variant(&self) -> ShapeVariant {
        match self {
            ShapeKind::Point(_) => ShapeVariant::Point,
            ShapeKind::Line(_) => ShapeVariant::Line,
            ShapeKind::CubicBezier(_) => ShapeVariant::CubicBezier,
            ShapeKind::QuadraticBezier(_) => ShapeVariant::QuadraticBezier,
            ShapeKind::Arc(_) => ShapeVariant::Arc,
            ShapeKind::Rectangle(_) => ShapeVariant::Rectangle,
            ShapeKind::Ellipse(_) => ShapeVariant::Ellipse,
            ShapeKind::Text(_) => ShapeVariant::Text,
            ShapeKind::Image(_) => ShapeVariant::Image,
            ShapeKind::Path(_) => ShapeVariant::Path,
            ShapeKind::Group(_) => ShapeVariant::Group,
        }
    }

    /// The frame of box-like variants.
    pub fn frame(&self) -> Option<&BoxShape> {
        match self {
            ShapeKind::Rectangle(b) | ShapeKind::Ellipse(b) => Some(b),
            ShapeKind::Text(t) => Some(&t.frame),
            ShapeKind::Image(i) => Some(&i.frame),
            _ => None,
        }
    }

    /// Control point slots in hit-test order. Absent points show up as `None`.
    ///
    /// Composites have no control points of their own.
    pub fn control_points(&self) -> SmallVec<[Option<ShapeId>; 4]> {
        match self {
            ShapeKind::Point(_) | ShapeKind::Path(_) | ShapeKind::Group(_) => SmallVec::new(),
            ShapeKind::Line(l) => SmallVec::from_slice(&[l.start, l.end]),
            ShapeKind::CubicBezier(c) => {
                SmallVec::from_slice(&[c.point1, c.point2, c.point3, c.point4])
            }
            ShapeKind::QuadraticBezier(q) => SmallVec::from_slice(&[q.point1, q.point2, q.point3]),
            ShapeKind::Arc(a) => SmallVec::from_slice(&[a.point1, a.point2, a.point3, a.point4]),
            ShapeKind::Rectangle(_)
            | ShapeKind::Ellipse(_)
            | ShapeKind::Text(_)
            | ShapeKind::Image(_) => match self.frame() {
                Some(b) => SmallVec::from_slice(&[b.top_left, b.bottom_right]),
                None => SmallVec::new(),
            },
        }
    }

    /// Mutable access to the control point slots, in the same order as [`Self::control_points`].
    pub fn control_points_mut(&mut self) -> SmallVec<[&mut Option<ShapeId>; 4]> {
        let mut slots = SmallVec::new();
        match self {
            ShapeKind::Point(_) | ShapeKind::Path(_) | ShapeKind::Group(_) => {}
            ShapeKind::Line(l) => {
                slots.push(&mut l.start);
                slots.push(&mut l.end);
            }
            ShapeKind::CubicBezier(c) => {
                slots.push(&mut c.point1);
                slots.push(&mut c.point2);
                slots.push(&mut c.point3);
                slots.push(&mut c.point4);
            }
            ShapeKind::QuadraticBezier(q) => {
                slots.push(&mut q.point1);
                slots.push(&mut q.point2);
                slots.push(&mut q.point3);
            }
            ShapeKind::Arc(a) => {
                slots.push(&mut a.point1);
                slots.push(&mut a.point2);
                slots.push(&mut a.point3);
                slots.push(&mut a.point4);
            }
            ShapeKind::Rectangle(b) | ShapeKind::Ellipse(b) => {
                slots.push(&mut b.top_left);
                slots.push(&mut b.bottom_right);
            }
            ShapeKind::Text(t) => {
                slots.push(&mut t.frame.top_left);
                slots.push(&mut t.frame.bottom_right);
            }
            ShapeKind::Image(i) => {
                slots.push(&mut i.frame.top_left);
                slots.push(&mut i.frame.bottom_right);
            }
        }
        slots
    }

    /// Child shapes owned by a composite: group members, or path segments in figure order.
    pub fn children(&self) -> Vec<ShapeId> {
        match self {
            ShapeKind::Group(g) => g.shapes.clone(),
            ShapeKind::Path(p) => p.segments().collect(),
            _ => Vec::new(),
        }
    }

    /// Connector points owned by a connectable shape.
    pub fn connectors(&self) -> &[ShapeId] {
        match self {
            ShapeKind::Group(g) => &g.connectors,
            _ => &[],
        }
    }

    /// Whether `id` is used as a control point or connector by this shape.
    pub fn references_point(&self, id: ShapeId) -> bool {
        self.control_points().contains(&Some(id)) || self.connectors().contains(&id)
    }
}

/// A shape stored in a [`crate::shape_store::ShapeStore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeNode {
    pub id: ShapeId,
    pub name: Option<String>,
    /// Composite that holds this shape in one of its child collections.
    pub owner: Option<ShapeId>,
    pub state: ShapeState,
    /// Cached bounds/geometry must be recomputed.
    pub dirty: bool,
    pub kind: ShapeKind,
}

impl ShapeNode {
    /// Creates a detached node with default state.
    pub fn new(id: ShapeId, kind: ShapeKind) -> Self {
        Self {
            id,
            name: None,
            owner: None,
            state: ShapeState::default(),
            dirty: false,
            kind,
        }
    }

    pub fn variant(&self) -> ShapeVariant {
        self.kind.variant()
    }

    /// Explicit name, falling back to the variant name.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.variant().name())
    }

    pub fn is_visible(&self) -> bool {
        self.state.contains(ShapeState::VISIBLE)
    }

    pub fn is_locked(&self) -> bool {
        self.state.contains(ShapeState::LOCKED)
    }

    pub fn is_selected(&self) -> bool {
        self.state.contains(ShapeState::SELECTED)
    }

    /// Position of a point shape.
    pub fn position(&self) -> Option<Point2> {
        match &self.kind {
            ShapeKind::Point(p) => Some(p.position()),
            _ => None,
        }
    }
}
