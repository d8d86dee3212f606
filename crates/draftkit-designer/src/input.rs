//! Normalized pointer input and the selection tool that consumes it.
//!
//! Host toolkits translate their pointer events into [`PointerEvent`]s in
//! document coordinates; the [`SelectionTool`] turns them into hover, click
//! and marquee selection calls.

use draftkit_settings::ToggleModifier;

use crate::bounds::{BoundsRegistry, HitResult};
use crate::hit_test::Hit;
use crate::model::{Point2, Rect2};
use crate::selection_manager::SelectionManager;
use crate::shape_store::ShapeStore;

/// Keyboard modifiers held during a pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    /// Whether the configured toggle key is held.
    pub fn is_active(&self, toggle: ToggleModifier) -> bool {
        match toggle {
            ToggleModifier::Shift => self.shift,
            ToggleModifier::Ctrl => self.ctrl,
            ToggleModifier::Alt => self.alt,
            ToggleModifier::Meta => self.meta,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerKind {
    LeftDown,
    LeftUp,
    Move,
    /// A marquee drag finished; the event position is the opposite corner.
    RectDragEnd { origin: Point2 },
}

/// Pointer event in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub position: Point2,
    pub modifiers: Modifiers,
    pub kind: PointerKind,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, position: Point2, modifiers: Modifiers) -> Self {
        Self {
            position,
            modifiers,
            kind,
        }
    }
}

/// What an event changed, so the host knows whether to redraw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOutcome {
    pub selection_changed: bool,
    pub hover_changed: bool,
}

impl EventOutcome {
    pub fn needs_redraw(&self) -> bool {
        self.selection_changed || self.hover_changed
    }
}

/// Routes pointer events into the selection protocol.
///
/// `LeftDown` click-selects, `Move` updates the hovered target,
/// `RectDragEnd` marquee-selects, `LeftUp` is accepted and ignored.
#[derive(Debug, Clone, Default)]
pub struct SelectionTool {
    hovered: Option<Hit>,
    toggle: ToggleModifier,
}

impl SelectionTool {
    pub fn new(toggle: ToggleModifier) -> Self {
        Self {
            hovered: None,
            toggle,
        }
    }

    pub fn hovered(&self) -> Option<Hit> {
        self.hovered
    }

    pub fn toggle_modifier(&self) -> ToggleModifier {
        self.toggle
    }

    /// Forgets the hovered target, e.g. after the shapes under it were deleted.
    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    pub fn handle(
        &mut self,
        event: &PointerEvent,
        selection: &mut SelectionManager,
        store: &mut ShapeStore,
        registry: &BoundsRegistry,
        radius: f64,
        scale: f64,
    ) -> HitResult<EventOutcome> {
        let modifier = event.modifiers.is_active(self.toggle);
        let mut outcome = EventOutcome::default();

        match event.kind {
            PointerKind::Move => {
                let hovered = selection.hover(store, registry, event.position, radius, scale)?;
                outcome.hover_changed = hovered != self.hovered;
                self.hovered = hovered;
            }
            PointerKind::LeftDown => {
                outcome.selection_changed = selection
                    .click_select(store, registry, event.position, radius, scale, modifier)?;
            }
            PointerKind::RectDragEnd { origin } => {
                let rect = Rect2::from_points(origin, event.position);
                outcome.selection_changed =
                    selection.rect_select(store, registry, rect, radius, scale, modifier)?;
            }
            PointerKind::LeftUp => {}
        }

        Ok(outcome)
    }
}
