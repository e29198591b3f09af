//! Selection and inline rename
//!
//! Rename has no cancel: typing renames live, and both Enter and losing
//! focus simply leave edit mode with whatever name was typed.

use super::Toolbar;
use crate::pages::PageId;

impl Toolbar {
    /// Click on a page chip
    pub fn page_click(&mut self, id: PageId) {
        if self.editing == Some(id) {
            return;
        }
        if self.pages.contains(id) {
            self.active = Some(id);
        }
        self.reconcile();
    }

    /// Enter rename mode for `id`
    pub fn begin_rename(&mut self, id: PageId) {
        if self.pages.contains(id) {
            self.editing = Some(id);
            tracing::debug!(page = %id, "Rename started");
        }
        self.reconcile();
    }

    /// Live update of the page being renamed
    pub fn edit_name(&mut self, name: impl Into<String>) {
        if let Some(id) = self.editing {
            self.rename_page(id, name);
        }
    }

    /// Enter pressed in the rename field
    pub fn confirm_edit(&mut self) {
        self.finish_edit();
    }

    /// Rename field lost focus
    pub fn blur_edit(&mut self) {
        self.finish_edit();
    }

    fn finish_edit(&mut self) {
        if let Some(id) = self.editing.take() {
            tracing::debug!(page = %id, "Rename finished");
        }
    }

    /// Pointer now over the chip for `id` (or over no chip)
    pub fn hover_page(&mut self, id: Option<PageId>) {
        if self.drag.is_dragging() {
            return;
        }
        self.hovered = id.filter(|&id| self.pages.contains(id));
    }

    /// Activate the page after the active one
    pub fn select_next(&mut self) {
        self.step_selection(1);
    }

    /// Activate the page before the active one
    pub fn select_previous(&mut self) {
        self.step_selection(-1);
    }

    fn step_selection(&mut self, delta: isize) {
        if self.editing.is_some() || self.pages.is_empty() {
            return;
        }
        let current = self
            .active
            .and_then(|id| self.pages.index_of(id))
            .unwrap_or(0);
        let last = self.pages.len() - 1;
        let next = current.saturating_add_signed(delta).min(last);
        self.active = self.pages.id_at(next);
        self.reconcile();
    }
}
