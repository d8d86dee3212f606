//! Canvas: one editing session over a shape store.
//!
//! Ties together the store, the selection manager, the viewport, the shared
//! bounds registry and the selection tool. Pointer positions handed to the
//! canvas are in document units unless a method says pixels.

mod clipboard;

use std::sync::Arc;

use draftkit_settings::Config;

use crate::bounds::{BoundsRegistry, HitResult};
use crate::hit_test::{Hit, HitTest};
use crate::input::{EventOutcome, PointerEvent, PointerKind, SelectionTool};
use crate::model::{Point2, Rect2, ShapeId, ShapeState, ShapeVariant};
use crate::operations::{delete_shapes, DeleteReport};
use crate::selection_manager::{SelectionManager, SelectionOptions};
use crate::shape_store::ShapeStore;
use crate::viewport::Viewport;

/// Canvas state managing shapes, selection and view.
#[derive(Debug, Clone)]
pub struct Canvas {
    pub shape_store: ShapeStore,
    pub selection_manager: SelectionManager,
    registry: Arc<BoundsRegistry>,
    viewport: Viewport,
    tool: SelectionTool,
    clipboard: ShapeStore,
    hit_radius: f64,
}

impl Canvas {
    /// Creates a canvas with default configuration and the built-in strategies.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        Self::with_registry(Arc::new(BoundsRegistry::with_defaults()), config)
    }

    /// Creates a canvas sharing an existing registry.
    pub fn with_registry(registry: Arc<BoundsRegistry>, config: &Config) -> Self {
        Self {
            shape_store: ShapeStore::new(),
            selection_manager: SelectionManager::new(SelectionOptions::from_config(config)),
            registry,
            viewport: Viewport::default(),
            tool: SelectionTool::new(config.selection.toggle_modifier),
            clipboard: ShapeStore::new(),
            hit_radius: config.hit.radius,
        }
    }

    /// Re-applies hit and selection settings. The selection itself is kept.
    pub fn apply_config(&mut self, config: &Config) {
        self.selection_manager
            .set_options(SelectionOptions::from_config(config));
        self.tool = SelectionTool::new(config.selection.toggle_modifier);
        self.hit_radius = config.hit.radius;
    }

    pub fn registry(&self) -> &Arc<BoundsRegistry> {
        &self.registry
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn hit_radius(&self) -> f64 {
        self.hit_radius
    }

    pub fn set_hit_radius(&mut self, radius: f64) {
        if radius.is_finite() && radius > 0.0 {
            self.hit_radius = radius;
        }
    }

    /// Target under the pointer after the last `Move` event.
    pub fn hovered(&self) -> Option<Hit> {
        self.tool.hovered()
    }

    /// Currently selected ids.
    pub fn selected_ids(&self) -> &[ShapeId] {
        self.selection_manager.selection().items()
    }

    /// Read-only hit-test façade for tools, using the canvas scan order.
    pub fn hit_test(&self) -> HitTest<'_> {
        HitTest::new(&self.shape_store, &self.registry)
            .topmost_first(self.selection_manager.options().topmost_first)
    }

    pub fn hover(&self, point: Point2) -> HitResult<Option<Hit>> {
        self.selection_manager.hover(
            &self.shape_store,
            &self.registry,
            point,
            self.hit_radius,
            self.viewport.scale(),
        )
    }

    pub fn click_select(&mut self, point: Point2, modifier: bool) -> HitResult<bool> {
        self.selection_manager.click_select(
            &mut self.shape_store,
            &self.registry,
            point,
            self.hit_radius,
            self.viewport.scale(),
            modifier,
        )
    }

    pub fn rect_select(&mut self, rect: Rect2, modifier: bool) -> HitResult<bool> {
        self.selection_manager.rect_select(
            &mut self.shape_store,
            &self.registry,
            rect,
            self.hit_radius,
            self.viewport.scale(),
            modifier,
        )
    }

    pub fn select_all(&mut self) -> bool {
        self.selection_manager.select_all(&mut self.shape_store)
    }

    pub fn deselect_all(&mut self) -> bool {
        self.selection_manager.deselect_all(&mut self.shape_store)
    }

    /// Routes a pointer event given in document coordinates.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> HitResult<EventOutcome> {
        self.tool.handle(
            event,
            &mut self.selection_manager,
            &mut self.shape_store,
            &self.registry,
            self.hit_radius,
            self.viewport.scale(),
        )
    }

    /// Routes a pointer event given in pixel coordinates.
    pub fn handle_pixel_event(&mut self, event: &PointerEvent) -> HitResult<EventOutcome> {
        let to_world = |p: Point2| self.viewport.pixel_to_world(p.x, p.y);
        let kind = match event.kind {
            PointerKind::RectDragEnd { origin } => PointerKind::RectDragEnd {
                origin: to_world(origin),
            },
            other => other,
        };
        let world = PointerEvent::new(kind, to_world(event.position), event.modifiers);
        self.handle_pointer(&world)
    }

    /// Deletes the selection, leaving nothing selected.
    ///
    /// Selected points that survive because another shape still uses them
    /// are detached and deselected.
    pub fn delete_selected(&mut self) -> DeleteReport {
        let ids = self.selected_ids().to_vec();
        if ids.is_empty() {
            return DeleteReport::default();
        }
        let report = delete_shapes(&mut self.shape_store, &ids);
        self.selection_manager.deselect_all(&mut self.shape_store);
        if self
            .tool
            .hovered()
            .is_some_and(|hit| !self.shape_store.contains(hit.id))
        {
            self.tool.clear_hover();
        }
        report
    }

    /// Groups the selected shapes and selects the new group.
    ///
    /// Every selected id must be a top-level shape other than a bare point.
    pub fn group_selected(&mut self) -> draftkit_core::Result<ShapeId> {
        let ids = self.selected_ids().to_vec();
        let group = self.shape_store.group(&ids)?;
        self.selection_manager
            .select_id(&mut self.shape_store, group, false);
        tracing::info!("Grouped {} shape(s) into {}", ids.len(), group);
        Ok(group)
    }

    /// Dissolves every selected group and selects what they held.
    ///
    /// Selected shapes that are not groups are left alone.
    pub fn ungroup_selected(&mut self) -> draftkit_core::Result<Vec<ShapeId>> {
        let groups: Vec<ShapeId> = self
            .selected_ids()
            .iter()
            .copied()
            .filter(|&id| {
                self.shape_store
                    .get(id)
                    .is_some_and(|n| n.variant() == ShapeVariant::Group)
            })
            .collect();

        let mut released = Vec::new();
        for group in groups {
            released.extend(self.shape_store.ungroup(group)?);
        }
        if !released.is_empty() {
            self.selection_manager
                .select_ids(&mut self.shape_store, &released);
            tracing::info!("Ungrouped into {} shape(s)", released.len());
        }
        Ok(released)
    }

    /// Bounding rectangle of everything selected.
    pub fn selection_bounds(&self) -> HitResult<Option<Rect2>> {
        let ids: Vec<ShapeId> = self
            .selected_ids()
            .iter()
            .copied()
            .filter(|&id| self.shape_store.contains(id))
            .collect();
        self.hit_test().union_bounds(&ids)
    }

    /// Replaces the document. Selection and hover are cleared.
    pub fn load(&mut self, mut store: ShapeStore) {
        for node in store.iter_mut() {
            node.state.remove(ShapeState::SELECTED);
        }
        self.shape_store = store;
        self.selection_manager.reset();
        self.tool.clear_hover();
        tracing::info!(
            "Loaded document with {} top-level shape(s)",
            self.shape_store.shapes().len()
        );
    }

    /// Starts an empty document.
    pub fn new_document(&mut self) {
        self.load(ShapeStore::new());
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
