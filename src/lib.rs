//! # draftkit
//!
//! Hit testing and selection for 2D vector drawing editors:
//! - Point picking on control points with a zoom-independent tolerance
//! - Shape containment and marquee overlap for every shape variant
//! - Click, toggle and rectangle selection with guides as a fallback layer
//! - Delete and copy helpers that keep composites and shared points consistent
//!
//! ## Architecture
//!
//! draftkit is organized as a workspace with multiple crates:
//!
//! 1. **draftkit-core** - Geometry primitives, identifiers, error types
//! 2. **draftkit-settings** - Pick tolerance, selection and logging configuration
//! 3. **draftkit-designer** - Shape store, bounds registry, hit testing, selection, canvas
//! 4. **draftkit** - This crate: re-exports, logging setup and a demo binary

pub use draftkit_designer as designer;

pub use draftkit_core::{Error, HitTestError, Result, ShapeError};

pub use draftkit_designer::{
    copy_shapes, delete_shapes, BoundsRegistry, BoundsStrategy, Canvas, DeleteReport,
    EventOutcome, Hit, HitKind, HitTest, Modifiers, PathFigure, Point2, PointerEvent,
    PointerKind, Rect2, SelectionManager, SelectionOptions, SelectionSet, SelectionTool,
    ShapeId, ShapeKind, ShapeNode, ShapeState, ShapeStore, ShapeVariant, Viewport,
};

pub use draftkit_settings::{Config, LoggingSettings, SettingsError, ToggleModifier};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with(&LoggingSettings::default())
}

/// Initialize logging from the `[logging]` section of the config
///
/// `RUST_LOG` takes precedence over `settings.level`. With `settings.json`
/// set, events are written as JSON lines instead.
pub fn init_logging_with(settings: &LoggingSettings) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))?;

    if settings.json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stdout)
            .with_target(true)
            .with_level(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_target(true)
            .with_level(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
