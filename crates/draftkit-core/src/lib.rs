//! # draftkit Core
//!
//! Core types and utilities shared by every draftkit crate.
//! Provides the geometry primitives used by hit testing, the shape
//! identifiers and variant tags, and the error taxonomy.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod types;

pub use error::{Error, HitTestError, Result, ShapeError};

pub use geometry::{
    clip_segment_to_rect, distance_to_segment, nearest_point_on_segment, polygon_contains,
    polygon_overlaps_rect, segment_intersects_rect, Point2, Rect2, Vector2,
};

pub use types::{ConnectorRole, ShapeId, ShapeVariant};
