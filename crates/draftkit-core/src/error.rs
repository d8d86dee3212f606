//! Error handling for draftkit
//!
//! Provides the error types for the hit-testing and editing core:
//! - Hit-test errors (registry wiring defects surfaced at query time)
//! - Shape errors (invalid structural edits on a shape store)
//!
//! Absent geometry and empty composites are not errors; they are ordinary
//! "no hit" outcomes and never show up here.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::types::{ShapeId, ShapeVariant};

/// Hit-test error type
///
/// Raised while answering a point-pick, contains, or overlaps query. Any of
/// these aborts the whole query: they indicate a wiring defect, not a data
/// condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HitTestError {
    /// No bounds strategy is registered for the variant.
    #[error("No bounds strategy registered for shape variant {variant}")]
    MissingStrategy {
        /// The variant that has no strategy.
        variant: ShapeVariant,
    },

    /// A collection referenced a shape id the store does not hold.
    #[error("Shape {id} referenced by a collection does not exist")]
    UnknownShape {
        /// The dangling id.
        id: ShapeId,
    },
}

/// Shape error type
///
/// Represents invalid structural edits: building composites, grouping,
/// inserting into collections.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// The shape does not exist in the store.
    #[error("Shape {id} not found")]
    NotFound {
        /// The missing id.
        id: ShapeId,
    },

    /// A point was required but another variant was supplied.
    #[error("Shape {id} is a {actual}, expected a Point")]
    NotAPoint {
        /// The offending shape.
        id: ShapeId,
        /// Its actual variant.
        actual: ShapeVariant,
    },

    /// The shape already belongs to a composite or a top-level collection.
    #[error("Shape {id} already has an owner")]
    AlreadyOwned {
        /// The shape that is already a member elsewhere.
        id: ShapeId,
    },

    /// The operation expected a top-level shape.
    #[error("Shape {id} is not a top-level shape")]
    NotTopLevel {
        /// The shape that was expected at the top level.
        id: ShapeId,
    },

    /// The operation expected a different variant.
    #[error("Shape {id} is a {actual}, expected a {expected}")]
    WrongVariant {
        /// The offending shape.
        id: ShapeId,
        /// The expected variant.
        expected: ShapeVariant,
        /// Its actual variant.
        actual: ShapeVariant,
    },

    /// Bare points are control points or connectors, never composite members.
    #[error("Point {id} cannot be a member of a composite")]
    PointMember {
        /// The offending point.
        id: ShapeId,
    },

    /// A composite cannot be built without members.
    #[error("Cannot build an empty {variant}")]
    EmptyComposite {
        /// The composite variant being built.
        variant: ShapeVariant,
    },
}

/// Main error type for draftkit
///
/// A unified error type that can represent any error from the core layers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Hit-test error
    #[error(transparent)]
    HitTest(#[from] HitTestError),

    /// Shape error
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

impl Error {
    /// Check if this is a configuration (registry wiring) error
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Error::HitTest(HitTestError::MissingStrategy { .. }))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
