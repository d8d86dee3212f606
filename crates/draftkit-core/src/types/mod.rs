//! Identifier and tag types shared across crates.
//!
//! ## Modules
//!
//! - [`ids`]: Shape identifiers
//! - [`variant`]: Shape variant tags and connector roles

pub mod ids;
pub mod variant;

pub use ids::ShapeId;
pub use variant::{ConnectorRole, ShapeVariant};
