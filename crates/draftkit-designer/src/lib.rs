//! # draftkit Designer
//!
//! Hit testing and selection for a 2D vector drawing editor. Given a pointer
//! position or a marquee rectangle, the designer decides which shape (or
//! which control point of which shape) the user is addressing, and turns that
//! answer into consistent selection changes.
//!
//! ## Core Components
//!
//! - **Model**: points, lines, beziers, arcs, box-like shapes, paths and groups
//! - **Shape store**: id arena with top-level shapes and guides in draw order
//! - **Bounds registry**: one hit-test strategy per shape variant
//! - **Hit test**: point-pick, contains and overlaps over whole collections
//! - **Selection manager**: hover, click, toggle and marquee selection
//! - **Operations**: delete with composite repair, copy with shared points
//! - **Canvas**: an editing session with viewport, clipboard and input routing
//!
//! ## Architecture
//!
//! ```text
//! Canvas (session)
//!   ├── SelectionTool (pointer events)
//!   ├── SelectionManager (selected set)
//!   │     └── HitTest (collection queries)
//!   │           └── BoundsRegistry (per-variant strategies)
//!   ├── ShapeStore (shapes, guides, points)
//!   └── Viewport (zoom = hit-test scale)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use draftkit_designer::{Canvas, Point2};
//!
//! let mut canvas = Canvas::new();
//! let rect = canvas.shape_store.add_rectangle(0.0, 0.0, 40.0, 40.0);
//!
//! assert!(canvas.click_select(Point2::new(20.0, 20.0), false).unwrap());
//! assert_eq!(canvas.selected_ids(), &[rect]);
//! ```

pub mod bounds;
pub mod canvas;
pub mod input;
pub mod model;
pub mod operations;
pub mod selection_manager;
pub mod shape_store;
pub mod viewport;

pub use bounds::{tolerance, BoundsRegistry, BoundsStrategy, HitContext, HitResult};
pub use canvas::Canvas;
pub use hit_test::{Hit, HitKind, HitTest};
pub use input::{EventOutcome, Modifiers, PointerEvent, PointerKind, SelectionTool};
pub use model::{
    ConnectorRole, PathFigure, Point2, Rect2, ShapeId, ShapeKind, ShapeNode, ShapeState,
    ShapeVariant,
};
pub use operations::{copy_shapes, delete_shapes, DeleteReport};
pub use selection_manager::{SelectionManager, SelectionOptions, SelectionSet};
pub use shape_store::ShapeStore;
pub use viewport::Viewport;
