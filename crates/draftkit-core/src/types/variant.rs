//! Shape variant tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tag naming the closed set of drawable kinds.
///
/// The bounds registry is keyed by this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeVariant {
    Point,
    Line,
    CubicBezier,
    QuadraticBezier,
    Arc,
    Rectangle,
    Ellipse,
    Text,
    Image,
    Path,
    Group,
}

impl ShapeVariant {
    /// Every variant, in declaration order.
    pub const ALL: [ShapeVariant; 11] = [
        ShapeVariant::Point,
        ShapeVariant::Line,
        ShapeVariant::CubicBezier,
        ShapeVariant::QuadraticBezier,
        ShapeVariant::Arc,
        ShapeVariant::Rectangle,
        ShapeVariant::Ellipse,
        ShapeVariant::Text,
        ShapeVariant::Image,
        ShapeVariant::Path,
        ShapeVariant::Group,
    ];

    /// Whether the variant's geometry is derived from child shapes.
    pub fn is_composite(self) -> bool {
        matches!(self, ShapeVariant::Path | ShapeVariant::Group)
    }

    /// Human readable name, also used as the default shape name.
    pub fn name(self) -> &'static str {
        match self {
            ShapeVariant::Point => "Point",
            ShapeVariant::Line => "Line",
            ShapeVariant::CubicBezier => "CubicBezier",
            ShapeVariant::QuadraticBezier => "QuadraticBezier",
            ShapeVariant::Arc => "Arc",
            ShapeVariant::Rectangle => "Rectangle",
            ShapeVariant::Ellipse => "Ellipse",
            ShapeVariant::Text => "Text",
            ShapeVariant::Image => "Image",
            ShapeVariant::Path => "Path",
            ShapeVariant::Group => "Group",
        }
    }
}

impl fmt::Display for ShapeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Role of a connector point on a connectable shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectorRole {
    #[default]
    None,
    Input,
    Output,
}
