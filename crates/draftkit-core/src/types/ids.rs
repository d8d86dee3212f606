//! Shape identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a shape inside a shape store.
///
/// Two shapes are the same shape exactly when their ids are equal; geometry
/// plays no part in equality. Ids are never reused within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(pub u64);

impl ShapeId {
    /// Raw numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for ShapeId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}
