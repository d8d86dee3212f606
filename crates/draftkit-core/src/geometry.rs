//! Geometry primitives used by hit testing.
//!
//! Everything here is pure math with no knowledge of shapes:
//! - [`Point2`], [`Vector2`] and [`Rect2`] value types
//! - Nearest point / distance to a segment
//! - Segment clipping against a rectangle (Liang-Barsky)
//! - Point-in-polygon and polygon/rectangle overlap tests
//!
//! All rectangle tests are closed-interval and tolerate [`EPSILON`] of slack,
//! so a zero-area rectangle degrades to a point equality test.

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::constants::EPSILON;

/// A position in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    /// Creates a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point2) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns the axis-aligned square of half-size `radius` centered on this point.
    ///
    /// A negative radius is treated as zero.
    pub fn expand_to_rect(self, radius: f64) -> Rect2 {
        let r = radius.max(0.0);
        Rect2::from_xywh(self.x - r, self.y - r, r * 2.0, r * 2.0)
    }

    /// Orthogonal projection of this point onto segment `a`-`b`, clamped to the segment.
    pub fn nearest_on_segment(self, a: Point2, b: Point2) -> Point2 {
        nearest_point_on_segment(a, b, self)
    }
}

impl Sub for Point2 {
    type Output = Vector2;

    fn sub(self, rhs: Point2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Vector2> for Point2 {
    type Output = Point2;

    fn add(self, rhs: Vector2) -> Point2 {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// A 2D displacement, used for segment math.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// Creates a new vector.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dot(&self, other: &Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product.
    pub fn cross(&self, other: &Vector2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

/// An axis-aligned rectangle. Width and height are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect2 {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect2 {
    /// Creates a rectangle from an origin and a size.
    ///
    /// Negative sizes are normalized so the rectangle spans the same area.
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        let (x, width) = if width < 0.0 { (x + width, -width) } else { (x, width) };
        let (y, height) = if height < 0.0 { (y + height, -height) } else { (y, height) };
        Self { x, y, width, height }
    }

    /// Creates the rectangle spanned by two opposite corners, in any order.
    pub fn from_points(a: Point2, b: Point2) -> Self {
        let left = a.x.min(b.x);
        let top = a.y.min(b.y);
        Self {
            x: left,
            y: top,
            width: a.x.max(b.x) - left,
            height: a.y.max(b.y) - top,
        }
    }

    /// Smallest rectangle enclosing every point, or `None` for an empty input.
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in iter {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self::from_points(Point2::new(min_x, min_y), Point2::new(max_x, max_y)))
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn top_left(&self) -> Point2 {
        Point2::new(self.left(), self.top())
    }

    pub fn bottom_right(&self) -> Point2 {
        Point2::new(self.right(), self.bottom())
    }

    pub fn center(&self) -> Point2 {
        Point2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Corners in clockwise order starting at the top-left.
    pub fn corners(&self) -> [Point2; 4] {
        [
            Point2::new(self.left(), self.top()),
            Point2::new(self.right(), self.top()),
            Point2::new(self.right(), self.bottom()),
            Point2::new(self.left(), self.bottom()),
        ]
    }

    /// Closed-interval containment test.
    pub fn contains(&self, p: Point2) -> bool {
        p.x >= self.left() - EPSILON
            && p.x <= self.right() + EPSILON
            && p.y >= self.top() - EPSILON
            && p.y <= self.bottom() + EPSILON
    }

    /// Closed-interval intersection test; touching edges count as intersecting.
    pub fn intersects(&self, other: &Rect2) -> bool {
        self.left() <= other.right() + EPSILON
            && other.left() <= self.right() + EPSILON
            && self.top() <= other.bottom() + EPSILON
            && other.top() <= self.bottom() + EPSILON
    }

    /// Grows the rectangle by `amount` on every side.
    pub fn inflate(&self, amount: f64) -> Rect2 {
        Rect2::from_points(
            Point2::new(self.left() - amount, self.top() - amount),
            Point2::new(self.right() + amount, self.bottom() + amount),
        )
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &Rect2) -> Rect2 {
        Rect2::from_points(
            Point2::new(self.left().min(other.left()), self.top().min(other.top())),
            Point2::new(self.right().max(other.right()), self.bottom().max(other.bottom())),
        )
    }
}

/// Orthogonal projection of `target` onto segment `a`-`b`, clamped to the segment.
///
/// A zero-length segment projects everything onto `a`.
pub fn nearest_point_on_segment(a: Point2, b: Point2, target: Point2) -> Point2 {
    let ab = b - a;
    let l2 = ab.length_squared();
    if l2 < EPSILON * EPSILON {
        return a;
    }
    let t = ((target - a).dot(&ab) / l2).clamp(0.0, 1.0);
    a + ab * t
}

/// Distance from `target` to the closest point of segment `a`-`b`.
pub fn distance_to_segment(a: Point2, b: Point2, target: Point2) -> f64 {
    target.distance_to(&nearest_point_on_segment(a, b, target))
}

/// Clips segment `a`-`b` against `rect`.
///
/// Returns the clipped endpoints when any part of the segment lies inside the
/// (closed) rectangle.
pub fn clip_segment_to_rect(a: Point2, b: Point2, rect: &Rect2) -> Option<(Point2, Point2)> {
    let d = b - a;
    if d.length_squared() < EPSILON * EPSILON {
        return rect.contains(a).then_some((a, a));
    }

    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;
    let edges = [
        (-d.x, a.x - rect.left()),
        (d.x, rect.right() - a.x),
        (-d.y, a.y - rect.top()),
        (d.y, rect.bottom() - a.y),
    ];

    for (p, q) in edges {
        if p.abs() < EPSILON {
            // Parallel to this edge: reject when fully outside it.
            if q < -EPSILON {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((a + d * t0, a + d * t1))
}

/// Whether segment `a`-`b` touches `rect` anywhere.
pub fn segment_intersects_rect(a: Point2, b: Point2, rect: &Rect2) -> bool {
    clip_segment_to_rect(a, b, rect).is_some()
}

/// Even-odd point-in-polygon test. The polygon is implicitly closed.
///
/// Polygons with fewer than three vertices have no interior and never contain a point.
pub fn polygon_contains(points: &[Point2], target: Point2) -> bool {
    if points.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (pi, pj) = (points[i], points[j]);
        if (pi.y > target.y) != (pj.y > target.y) {
            let x_cross = (pj.x - pi.x) * (target.y - pi.y) / (pj.y - pi.y) + pi.x;
            if target.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Whether the implicitly closed polygon touches `rect`.
///
/// True when a vertex lies in the rectangle, an edge crosses it, or the
/// rectangle lies entirely inside the polygon.
pub fn polygon_overlaps_rect(points: &[Point2], rect: &Rect2) -> bool {
    match points.len() {
        0 => false,
        1 => rect.contains(points[0]),
        n => {
            if points.iter().any(|p| rect.contains(*p)) {
                return true;
            }
            let crosses = (0..n).any(|i| {
                let a = points[i];
                let b = points[(i + 1) % n];
                segment_intersects_rect(a, b, rect)
            });
            crosses || polygon_contains(points, rect.center())
        }
    }
}
