//! Shared numeric constants.

/// Tolerance used by closed-interval comparisons and degenerate-input checks.
pub const EPSILON: f64 = 1e-9;

/// Default logical pick tolerance in document units.
pub const DEFAULT_HIT_RADIUS: f64 = 6.0;

/// Smallest zoom factor a viewport accepts.
pub const MIN_ZOOM: f64 = 0.1;

/// Largest zoom factor a viewport accepts.
pub const MAX_ZOOM: f64 = 50.0;

/// Multiplier applied by a single zoom-in / zoom-out step.
pub const ZOOM_STEP: f64 = 1.2;
