use draftkit_settings::Config;

use crate::bounds::{BoundsRegistry, HitResult};
use crate::hit_test::{Hit, HitTest};
use crate::model::{Point2, Rect2, ShapeId, ShapeState};
use crate::shape_store::ShapeStore;

/// Ordered set of selected shape ids.
///
/// Membership is by identity. The primary item is the most recently added
/// one; the revision counter changes whenever the contents or primary do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    items: Vec<ShapeId>,
    primary: Option<ShapeId>,
    revision: u64,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Selected ids in the order they were selected.
    pub fn items(&self) -> &[ShapeId] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShapeId> {
        self.items.iter()
    }

    pub fn primary(&self) -> Option<ShapeId> {
        self.primary
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.items.contains(&id)
    }

    /// Empties the set.
    pub fn clear(&mut self) {
        if self.items.is_empty() && self.primary.is_none() {
            return;
        }
        self.items.clear();
        self.primary = None;
        self.bump_revision();
    }

    /// Replaces the set with `id` alone.
    pub fn select_only(&mut self, id: ShapeId) {
        if self.items == [id] && self.primary == Some(id) {
            return;
        }
        self.items.clear();
        self.items.push(id);
        self.primary = Some(id);
        self.bump_revision();
    }

    /// Replaces the set with `ids`, ignoring duplicates. The last id becomes primary.
    pub fn replace_with<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = ShapeId>,
    {
        let mut items: Vec<ShapeId> = Vec::new();
        for id in ids {
            if !items.contains(&id) {
                items.push(id);
            }
        }
        let primary = items.last().copied();
        if items == self.items && primary == self.primary {
            return;
        }
        self.items = items;
        self.primary = primary;
        self.bump_revision();
    }

    /// Adds `id` if absent and makes it primary.
    pub fn add(&mut self, id: ShapeId) {
        if !self.items.contains(&id) {
            self.items.push(id);
        } else if self.primary == Some(id) {
            return;
        }
        self.primary = Some(id);
        self.bump_revision();
    }

    /// Removes `id` if present.
    pub fn remove(&mut self, id: ShapeId) {
        let Some(index) = self.items.iter().position(|&item| item == id) else {
            return;
        };
        self.items.remove(index);
        if self.primary == Some(id) {
            self.primary = self.items.last().copied();
        }
        self.bump_revision();
    }

    /// Flips membership of `id`.
    pub fn toggle(&mut self, id: ShapeId) {
        if self.contains(id) {
            self.remove(id);
        } else {
            self.add(id);
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

/// Tunables for the selection protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionOptions {
    /// Scan collections from the last drawn shape downward.
    pub topmost_first: bool,
    /// Fall through to guides when no shape answers.
    pub include_guides: bool,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            topmost_first: true,
            include_guides: true,
        }
    }
}

impl SelectionOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            topmost_first: config.hit.topmost_first,
            include_guides: config.selection.include_guides,
        }
    }
}

/// Manages shape selection state and selection operations.
///
/// `SelectionManager` is responsible for:
/// - Resolving what lies under the pointer (hover)
/// - Handling point-based selection (clicking on shapes)
/// - Handling rectangle-based selection (drag-select)
/// - Multi-select operations (toggle modifier held)
///
/// # Selection Model
///
/// - **Precedence**: a click resolves, first match wins, to a point in the
///   shapes, a shape containing the pointer, a point in the guides, then a
///   guide containing the pointer
/// - **Replace**: without the modifier the candidate becomes the whole selection
/// - **Toggle**: with the modifier the candidate's membership flips
/// - **Empty click**: finding no candidate leaves the selection untouched
///
/// # Design
///
/// The manager owns the [`SelectionSet`] and mirrors membership into the
/// `SELECTED` flag of each shape in the `ShapeStore`. Hit testing is delegated
/// to [`HitTest`], so hover and click always agree on what is under the pointer.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selection: SelectionSet,
    options: SelectionOptions,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use draftkit_designer::selection_manager::{SelectionManager, SelectionOptions};
    ///
    /// let manager = SelectionManager::new(SelectionOptions::default());
    /// assert!(manager.selection().is_empty());
    /// ```
    pub fn new(options: SelectionOptions) -> Self {
        Self {
            selection: SelectionSet::new(),
            options,
        }
    }

    pub fn options(&self) -> SelectionOptions {
        self.options
    }

    pub fn set_options(&mut self, options: SelectionOptions) {
        self.options = options;
    }

    /// The current selection.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Returns the ID of the primary selected shape.
    pub fn selected_id(&self) -> Option<ShapeId> {
        self.selection.primary()
    }

    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.selection.contains(id)
    }

    /// Resolves what lies under `point` without touching the selection.
    ///
    /// # Arguments
    ///
    /// * `store` - The shape store to search
    /// * `registry` - Bounds strategies used for every test
    /// * `point` - Pointer position in document units
    /// * `radius` - Logical pick tolerance
    /// * `scale` - Current zoom factor
    ///
    /// # Returns
    ///
    /// The winning candidate under click precedence, or `None`.
    pub fn hover(
        &self,
        store: &ShapeStore,
        registry: &BoundsRegistry,
        point: Point2,
        radius: f64,
        scale: f64,
    ) -> HitResult<Option<Hit>> {
        let hit_test = HitTest::new(store, registry).topmost_first(self.options.topmost_first);

        if let Some(hit) = hit_test.find(store.shapes(), point, radius, scale)? {
            return Ok(Some(hit));
        }
        if self.options.include_guides {
            return hit_test.find(store.guides(), point, radius, scale);
        }
        Ok(None)
    }

    /// Selects the candidate under `point`.
    ///
    /// # Arguments
    ///
    /// * `store` - The shape store to select from
    /// * `registry` - Bounds strategies used for every test
    /// * `point` - Pointer position in document units
    /// * `radius` - Logical pick tolerance
    /// * `scale` - Current zoom factor
    /// * `modifier` - Whether the toggle modifier is held
    ///
    /// # Returns
    ///
    /// `false` when nothing is under the pointer (selection unchanged).
    /// Otherwise `true` without the modifier, or whether the selection is
    /// non-empty after toggling with it.
    #[allow(clippy::too_many_arguments)]
    pub fn click_select(
        &mut self,
        store: &mut ShapeStore,
        registry: &BoundsRegistry,
        point: Point2,
        radius: f64,
        scale: f64,
        modifier: bool,
    ) -> HitResult<bool> {
        let Some(hit) = self.hover(store, registry, point, radius, scale)? else {
            tracing::debug!("Click at ({:.3}, {:.3}) found no candidate", point.x, point.y);
            return Ok(false);
        };
        tracing::debug!("Click resolved to {} ({:?})", hit.id, hit.kind);
        Ok(self.select_id(store, hit.id, modifier))
    }

    /// Selects every shape overlapping `rect`.
    ///
    /// An empty overlap set leaves the selection untouched and returns `false`.
    /// Otherwise the modifier rule of [`Self::click_select`] applies to each match.
    #[allow(clippy::too_many_arguments)]
    pub fn rect_select(
        &mut self,
        store: &mut ShapeStore,
        registry: &BoundsRegistry,
        rect: Rect2,
        radius: f64,
        scale: f64,
        modifier: bool,
    ) -> HitResult<bool> {
        let hit_test = HitTest::new(store, registry).topmost_first(self.options.topmost_first);
        let mut matches = hit_test.try_get_shapes(store.shapes(), rect, radius, scale)?;
        if self.options.include_guides {
            matches.extend(hit_test.try_get_shapes(store.guides(), rect, radius, scale)?);
        }

        if matches.is_empty() {
            return Ok(false);
        }

        let previous = self.selection.items().to_vec();
        if modifier {
            for id in matches {
                self.selection.toggle(id);
            }
        } else {
            self.selection.replace_with(matches);
        }
        self.sync_flags(store, &previous);
        tracing::debug!("Rectangle selection now holds {} item(s)", self.selection.len());

        Ok(!modifier || !self.selection.is_empty())
    }

    /// Applies the click rule to a known id.
    ///
    /// Returns `true` without the modifier, or whether the selection is
    /// non-empty after toggling with it.
    pub fn select_id(&mut self, store: &mut ShapeStore, id: ShapeId, modifier: bool) -> bool {
        let previous = self.selection.items().to_vec();
        if modifier {
            self.selection.toggle(id);
        } else {
            self.selection.select_only(id);
        }
        self.sync_flags(store, &previous);
        !modifier || !self.selection.is_empty()
    }

    /// Replaces the selection with `ids`. Returns whether anything is selected.
    pub fn select_ids(&mut self, store: &mut ShapeStore, ids: &[ShapeId]) -> bool {
        let previous = self.selection.items().to_vec();
        self.selection.replace_with(ids.iter().copied());
        self.sync_flags(store, &previous);
        !self.selection.is_empty()
    }

    /// Selects every top-level shape.
    ///
    /// The topmost (last in draw order) shape becomes primary.
    pub fn select_all(&mut self, store: &mut ShapeStore) -> bool {
        let previous = self.selection.items().to_vec();
        self.selection.replace_with(store.shapes().iter().copied());
        self.sync_flags(store, &previous);
        !self.selection.is_empty()
    }

    /// Deselects all shapes. Returns whether anything was selected.
    pub fn deselect_all(&mut self, store: &mut ShapeStore) -> bool {
        let previous = self.selection.items().to_vec();
        self.selection.clear();
        self.sync_flags(store, &previous);
        !previous.is_empty()
    }

    /// Forgets the selection without touching any store, e.g. when a new
    /// document replaces the old one.
    pub fn reset(&mut self) {
        self.selection.clear();
    }

    fn sync_flags(&self, store: &mut ShapeStore, previous: &[ShapeId]) {
        for &id in previous {
            if !self.selection.contains(id) {
                if let Some(node) = store.get_mut(id) {
                    node.state.remove(ShapeState::SELECTED);
                }
            }
        }
        for &id in self.selection.items() {
            if let Some(node) = store.get_mut(id) {
                node.state.insert(ShapeState::SELECTED);
            }
        }
    }
}
