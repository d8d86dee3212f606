//! Viewport and coordinate transformation for the canvas.
//!
//! Converts between pixel coordinates (screen space) and document
//! coordinates. Both spaces have +Y pointing down. The zoom factor doubles as
//! the `scale` passed to every hit-test query, keeping the on-screen pick
//! tolerance constant.

use std::fmt;

use draftkit_core::constants::{MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};

use crate::model::{Point2, Rect2};

/// Fraction of the canvas kept free on each side by [`Viewport::fit_to_bounds`].
pub const VIEW_PADDING: f64 = 0.05;

/// Represents the viewport transformation state (zoom and pan).
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    canvas_width: f64,
    canvas_height: f64,
}

impl Viewport {
    /// Creates a new viewport showing the document origin at the top-left.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            canvas_width,
            canvas_height,
        }
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions (typically called when the host resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Scale factor for hit-test queries.
    pub fn scale(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped to the supported range.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        }
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / ZOOM_STEP);
    }

    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Pans by a pixel delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Converts pixel coordinates to document coordinates.
    ///
    /// ```text
    /// world = (pixel - pan) / zoom
    /// ```
    pub fn pixel_to_world(&self, pixel_x: f64, pixel_y: f64) -> Point2 {
        Point2::new(
            (pixel_x - self.pan_x) / self.zoom,
            (pixel_y - self.pan_y) / self.zoom,
        )
    }

    /// Converts document coordinates to pixel coordinates.
    pub fn world_to_pixel(&self, point: Point2) -> (f64, f64) {
        (
            point.x * self.zoom + self.pan_x,
            point.y * self.zoom + self.pan_y,
        )
    }

    /// Converts a pixel-space marquee to a document rectangle.
    pub fn pixel_rect_to_world(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> Rect2 {
        Rect2::from_points(self.pixel_to_world(x1, y1), self.pixel_to_world(x2, y2))
    }

    /// Zooms to `new_zoom` keeping `world_point` at the same pixel position.
    ///
    /// Out-of-range zoom levels are ignored.
    pub fn zoom_to_point(&mut self, world_point: Point2, new_zoom: f64) {
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&new_zoom) {
            return;
        }
        let (pixel_x, pixel_y) = self.world_to_pixel(world_point);
        self.zoom = new_zoom;
        self.pan_x = pixel_x - world_point.x * new_zoom;
        self.pan_y = pixel_y - world_point.y * new_zoom;
    }

    pub fn zoom_in_at(&mut self, world_point: Point2) {
        self.zoom_to_point(world_point, self.zoom * ZOOM_STEP);
    }

    pub fn zoom_out_at(&mut self, world_point: Point2) {
        self.zoom_to_point(world_point, self.zoom / ZOOM_STEP);
    }

    /// Centers the viewport on a document point.
    pub fn center_on(&mut self, point: Point2) {
        self.pan_x = self.canvas_width / 2.0 - point.x * self.zoom;
        self.pan_y = self.canvas_height / 2.0 - point.y * self.zoom;
    }

    /// Fits `bounds` into the canvas, leaving `padding` (fraction of the
    /// canvas) free on every side, and centers it.
    ///
    /// Degenerate bounds are ignored.
    pub fn fit_to_bounds(&mut self, bounds: Rect2, padding: f64) {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return;
        }
        let padding_factor = 1.0 - padding * 2.0;
        let zoom_x = self.canvas_width * padding_factor / bounds.width;
        let zoom_y = self.canvas_height * padding_factor / bounds.height;

        self.zoom = zoom_x.min(zoom_y).clamp(MIN_ZOOM, MAX_ZOOM);
        self.center_on(bounds.center());
    }

    /// Resets to 1:1 zoom with no pan.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}
