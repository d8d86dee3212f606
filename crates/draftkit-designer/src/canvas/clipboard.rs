//! Clipboard operations for Canvas.
//!
//! The clipboard is a scratch `ShapeStore`. Copy moves a deep copy of the
//! selection into it; paste copies its contents back with fresh ids, so the
//! same clipboard can be pasted repeatedly.

use super::Canvas;
use crate::model::ShapeId;
use crate::operations::{copy_shapes, DeleteReport};
use crate::shape_store::ShapeStore;

impl Canvas {
    /// Copies the selection to the clipboard. Returns the number of shapes copied.
    pub fn copy(&mut self) -> usize {
        let ids = self.selected_ids().to_vec();
        self.clipboard.clear();
        copy_shapes(&self.shape_store, &ids, &mut self.clipboard).len()
    }

    /// Copies the selection to the clipboard, then deletes it.
    pub fn cut(&mut self) -> DeleteReport {
        if self.copy() == 0 {
            return DeleteReport::default();
        }
        self.delete_selected()
    }

    /// Pastes the clipboard contents and selects them.
    pub fn paste(&mut self) -> Vec<ShapeId> {
        let ids: Vec<ShapeId> = self
            .clipboard
            .shapes()
            .iter()
            .chain(self.clipboard.guides())
            .copied()
            .collect();
        let pasted = copy_shapes(&self.clipboard, &ids, &mut self.shape_store);
        if !pasted.is_empty() {
            self.selection_manager
                .select_ids(&mut self.shape_store, &pasted);
        }
        pasted
    }

    /// Copies the selection in place, leaving the clipboard untouched, and
    /// selects the copies.
    pub fn duplicate(&mut self) -> Vec<ShapeId> {
        let ids = self.selected_ids().to_vec();
        let mut scratch = ShapeStore::new();
        let staged = copy_shapes(&self.shape_store, &ids, &mut scratch);
        let copies = copy_shapes(&scratch, &staged, &mut self.shape_store);
        if !copies.is_empty() {
            self.selection_manager
                .select_ids(&mut self.shape_store, &copies);
        }
        copies
    }

    pub fn has_clipboard(&self) -> bool {
        !self.clipboard.shapes().is_empty() || !self.clipboard.guides().is_empty()
    }
}
