use serde::{Deserialize, Serialize};

use super::{Point2, ShapeId};

/// A positioned point. Other shapes reference points by id, so two shapes
/// connected at the same location share one point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointShape {
    pub x: f64,
    pub y: f64,
}

impl PointShape {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn position(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineShape {
    pub start: Option<ShapeId>,
    pub end: Option<ShapeId>,
}

impl LineShape {
    pub fn new(start: ShapeId, end: ShapeId) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }
}

/// Cubic bezier: start point, two control points, end point.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CubicBezierShape {
    pub point1: Option<ShapeId>,
    pub point2: Option<ShapeId>,
    pub point3: Option<ShapeId>,
    pub point4: Option<ShapeId>,
}

impl CubicBezierShape {
    pub fn new(points: [ShapeId; 4]) -> Self {
        Self {
            point1: Some(points[0]),
            point2: Some(points[1]),
            point3: Some(points[2]),
            point4: Some(points[3]),
        }
    }
}

/// Quadratic bezier: start point, control point, end point.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuadraticBezierShape {
    pub point1: Option<ShapeId>,
    pub point2: Option<ShapeId>,
    pub point3: Option<ShapeId>,
}

impl QuadraticBezierShape {
    pub fn new(points: [ShapeId; 3]) -> Self {
        Self {
            point1: Some(points[0]),
            point2: Some(points[1]),
            point3: Some(points[2]),
        }
    }
}

/// Elliptical arc. `point1`/`point2` span the ellipse bounds, `point3`/`point4`
/// give the start and end angles.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArcShape {
    pub point1: Option<ShapeId>,
    pub point2: Option<ShapeId>,
    pub point3: Option<ShapeId>,
    pub point4: Option<ShapeId>,
}

impl ArcShape {
    pub fn new(points: [ShapeId; 4]) -> Self {
        Self {
            point1: Some(points[0]),
            point2: Some(points[1]),
            point3: Some(points[2]),
            point4: Some(points[3]),
        }
    }
}

/// Frame shared by rectangle, ellipse, text and image shapes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxShape {
    pub top_left: Option<ShapeId>,
    pub bottom_right: Option<ShapeId>,
}

impl BoxShape {
    pub fn new(top_left: ShapeId, bottom_right: ShapeId) -> Self {
        Self {
            top_left: Some(top_left),
            bottom_right: Some(bottom_right),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextShape {
    pub frame: BoxShape,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageShape {
    pub frame: BoxShape,
    /// Key of the image in the host's image cache.
    pub key: String,
}

/// One contiguous run of segments inside a path.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathFigure {
    /// Segment shapes in drawing order; consecutive segments share end/start points.
    pub shapes: Vec<ShapeId>,
    pub is_closed: bool,
    pub is_filled: bool,
}

impl PathFigure {
    pub fn new(shapes: Vec<ShapeId>, is_closed: bool) -> Self {
        Self {
            shapes,
            is_closed,
            is_filled: is_closed,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathShape {
    pub figures: Vec<PathFigure>,
}

impl PathShape {
    /// All segment shapes, figure by figure.
    pub fn segments(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.figures.iter().flat_map(|f| f.shapes.iter().copied())
    }

    /// Index of the figure holding `segment`.
    pub fn figure_of(&self, segment: ShapeId) -> Option<usize> {
        self.figures.iter().position(|f| f.shapes.contains(&segment))
    }
}

/// A composite of child shapes plus its own connector points.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupShape {
    pub shapes: Vec<ShapeId>,
    pub connectors: Vec<ShapeId>,
}
