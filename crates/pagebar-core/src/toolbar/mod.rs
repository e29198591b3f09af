//! Toolbar State - the single owner of all widget state
//!
//! Groups the page store with selection, editing, drag, affordance and
//! context menu state. Handlers live in submodules as `impl Toolbar` blocks;
//! every mutating handler ends with [`Toolbar::reconcile`] so the
//! active-page invariant holds synchronously after each event.

mod affordance;
mod context_menu;
mod drag;
mod selection;

#[cfg(test)]
mod scenario_tests;

use std::time::{Duration, Instant};

use crate::constants::pages::SEED_NAMES;
use crate::pages::{PageId, PageList};
use crate::timer::Deferred;

pub use affordance::AffordanceState;
pub use context_menu::{ContextMenuState, MenuAction};
pub use drag::{DragPayload, DragState, DropTarget};

/// Deferred actions owned by the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKey {
    /// Hide the insert control after the pointer left its gap
    HideAffordance,
    /// End the highlight on a freshly dropped page
    ClearDropPulse,
}

/// Page navigation toolbar state
#[derive(Debug)]
pub struct Toolbar {
    pages: PageList,
    active: Option<PageId>,
    editing: Option<PageId>,
    hovered: Option<PageId>,
    drag: DragState,
    affordance: AffordanceState,
    menu: ContextMenuState,
    timers: Deferred<TimerKey>,
}

impl Default for Toolbar {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Toolbar {
    /// Create a toolbar over `pages`, selecting the first one
    pub fn new(pages: PageList) -> Self {
        let mut toolbar = Self {
            pages,
            active: None,
            editing: None,
            hovered: None,
            drag: DragState::default(),
            affordance: AffordanceState::default(),
            menu: ContextMenuState::default(),
            timers: Deferred::new(),
        };
        toolbar.reconcile();
        toolbar
    }

    /// Toolbar with the four default pages
    pub fn seeded() -> Self {
        Self::new(PageList::from_names(SEED_NAMES))
    }

    // =========================================================================
    // Read access
    // =========================================================================

    pub fn pages(&self) -> &PageList {
        &self.pages
    }

    pub fn active(&self) -> Option<PageId> {
        self.active
    }

    pub fn editing(&self) -> Option<PageId> {
        self.editing
    }

    pub fn hovered(&self) -> Option<PageId> {
        self.hovered
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn affordance(&self) -> &AffordanceState {
        &self.affordance
    }

    pub fn menu(&self) -> &ContextMenuState {
        &self.menu
    }

    pub fn is_timer_pending(&self, key: TimerKey) -> bool {
        self.timers.is_pending(key)
    }

    /// Whether the chip for `id` shows its "more" trigger
    pub fn shows_menu_trigger(&self, id: PageId) -> bool {
        self.active == Some(id)
            && (self.hovered == Some(id)
                || self.editing == Some(id)
                || self.menu.target == Some(id)
                || self.drag.dragged == Some(id))
    }

    // =========================================================================
    // Timers
    // =========================================================================

    /// Run every deferred action due at `now`. Returns true if any fired.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = self.timers.tick(now);
        for key in &due {
            match key {
                TimerKey::HideAffordance => self.hide_affordance(),
                TimerKey::ClearDropPulse => self.drag.dropped = None,
            }
        }
        !due.is_empty()
    }

    /// Time until the next deferred action, if any is pending
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.timers.next_deadline(now)
    }

    // =========================================================================
    // Store operations
    // =========================================================================

    /// Insert a page at gap `at` (append when omitted) and make it active
    pub fn insert_page(&mut self, at: Option<usize>) -> PageId {
        let id = self.pages.insert_page(at);
        tracing::info!(page = %id, index = ?at, "Inserted page");
        self.active = Some(id);
        self.timers.cancel(TimerKey::HideAffordance);
        self.hide_affordance();
        if let Some(index) = at {
            self.affordance.forget(index);
        }
        self.reconcile();
        id
    }

    /// Move a page into a gap, compensating for its own removal
    pub fn move_page(&mut self, id: PageId, to_gap: usize) -> bool {
        let moved = match self.pages.move_page(id, to_gap) {
            Ok(index) => {
                tracing::info!(page = %id, gap = to_gap, index, "Moved page");
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring move");
                false
            }
        };
        self.reconcile();
        moved
    }

    /// Duplicate a page right after itself; selection is left alone
    pub fn duplicate_page(&mut self, id: PageId) -> Option<PageId> {
        let copy = match self.pages.duplicate_page(id) {
            Ok(copy) => {
                tracing::info!(source = %id, copy = %copy, "Duplicated page");
                Some(copy)
            }
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring duplicate");
                None
            }
        };
        self.reconcile();
        copy
    }

    /// Delete a page; an active page hands selection to its successor, or
    /// its predecessor when it was last
    pub fn delete_page(&mut self, id: PageId) -> bool {
        let was_active = self.active == Some(id);
        let deleted = match self.pages.delete_page(id) {
            Ok(index) => {
                tracing::info!(page = %id, index, "Deleted page");
                if was_active {
                    self.active = match self.pages.len() {
                        0 => None,
                        len => self.pages.id_at(index.min(len - 1)),
                    };
                }
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring delete");
                false
            }
        };
        self.reconcile();
        deleted
    }

    pub fn rename_page(&mut self, id: PageId, name: impl Into<String>) -> bool {
        let renamed = match self.pages.rename_page(id, name) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring rename");
                false
            }
        };
        self.reconcile();
        renamed
    }

    pub fn set_as_first(&mut self, id: PageId) -> bool {
        let moved = match self.pages.set_as_first(id) {
            Ok(()) => {
                tracing::info!(page = %id, "Set page as first");
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring set-as-first");
                false
            }
        };
        self.reconcile();
        moved
    }

    // =========================================================================
    // Invariants
    // =========================================================================

    /// Restore the cross-field invariants after a mutation
    ///
    /// The active page must exist whenever any page exists; every other
    /// reference to a page is dropped once that page is gone.
    fn reconcile(&mut self) {
        match self.active {
            Some(id) if self.pages.contains(id) => {}
            _ => self.active = self.pages.first_id(),
        }

        let pages = &self.pages;
        let gone = |id: &Option<PageId>| id.is_some_and(|id| !pages.contains(id));

        if gone(&self.editing) {
            self.editing = None;
        }
        if gone(&self.hovered) {
            self.hovered = None;
        }
        if gone(&self.drag.dragged) {
            self.drag.dragged = None;
            self.drag.target = None;
        }
        if gone(&self.drag.dropped) {
            self.drag.dropped = None;
            self.timers.cancel(TimerKey::ClearDropPulse);
        }
        let target = self.drag.target;
        match target {
            Some(DropTarget::Page(id)) if !pages.contains(id) => self.drag.target = None,
            Some(DropTarget::Gap(gap)) if gap > pages.len() => self.drag.target = None,
            _ => {}
        }
        if gone(&self.menu.target) {
            self.menu.hide();
        }
        if self.affordance.visible.is_some_and(|gap| gap > pages.len()) {
            self.hide_affordance();
        }
    }
}
