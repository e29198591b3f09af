//! Drag-and-drop reordering
//!
//! `idle -> dragging -> (dropped | cancelled) -> idle`. The page being
//! dragged travels as an opaque string payload, exactly like a native drag
//! transfer, so drops validate it before touching the store.

use std::fmt;
use std::time::Instant;

use super::{TimerKey, Toolbar};
use crate::constants::drag::DROP_PULSE;
use crate::pages::PageId;

/// Where a dragged page would land
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// Onto another page chip (insert before it)
    Page(PageId),
    /// Into the gap before the page at this index
    Gap(usize),
}

/// Drag transfer payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload(String);

impl DragPayload {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PageId> for DragPayload {
    fn from(id: PageId) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for DragPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Transient drag state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Page being dragged
    pub dragged: Option<PageId>,
    /// Current drop target, a page or a gap but never both
    pub target: Option<DropTarget>,
    /// Page highlighted after a successful drop
    pub dropped: Option<PageId>,
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }

    /// Page chip currently offered as a drop target (never the dragged one)
    pub fn target_page(&self) -> Option<PageId> {
        match self.target {
            Some(DropTarget::Page(id)) if self.dragged != Some(id) => Some(id),
            _ => None,
        }
    }

    pub fn target_gap(&self) -> Option<usize> {
        match self.target {
            Some(DropTarget::Gap(gap)) if self.dragged.is_some() => Some(gap),
            _ => None,
        }
    }

    fn clear(&mut self) {
        self.dragged = None;
        self.target = None;
    }
}

impl Toolbar {
    /// Begin dragging `id`, returning the payload the drop will carry
    pub fn drag_start(&mut self, id: PageId) -> Option<DragPayload> {
        if !self.pages.contains(id) {
            tracing::debug!(page = %id, "Ignoring drag of unknown page");
            return None;
        }

        self.drag.dragged = Some(id);
        self.drag.target = None;
        self.drag.dropped = None;
        self.timers.cancel(TimerKey::ClearDropPulse);
        self.timers.cancel(TimerKey::HideAffordance);
        self.hide_affordance();
        self.menu.hide();
        self.editing = None;
        self.hovered = None;
        self.active = Some(id);
        tracing::debug!(page = %id, "Drag started");

        self.reconcile();
        Some(DragPayload::from(id))
    }

    /// Dragging over the chip for `id`
    pub fn drag_over_page(&mut self, id: PageId) {
        if self.drag.is_dragging() {
            self.drag.target = Some(DropTarget::Page(id));
        }
    }

    pub fn drag_leave_page(&mut self) {
        if matches!(self.drag.target, Some(DropTarget::Page(_))) {
            self.drag.target = None;
        }
    }

    /// Dragging over gap `gap`
    pub fn drag_over_gap(&mut self, gap: usize) {
        if self.drag.is_dragging() {
            self.drag.target = Some(DropTarget::Gap(gap));
        }
    }

    pub fn drag_leave_gap(&mut self) {
        if matches!(self.drag.target, Some(DropTarget::Gap(_))) {
            self.drag.target = None;
        }
    }

    /// Drop onto the chip for `target`: the dragged page takes the target's
    /// index. Returns true if the order changed.
    pub fn drop_on_page(
        &mut self,
        payload: Option<&DragPayload>,
        target: PageId,
        now: Instant,
    ) -> bool {
        let was_dragging = self.drag.is_dragging();
        let moving = self.resolve_payload(payload);
        let target_index = self.pages.index_of(target);
        self.drag.clear();

        if !was_dragging {
            tracing::debug!(target = %target, "Ignoring drop with no drag in progress");
            self.reconcile();
            return false;
        }
        let (Some(moving), Some(target_index)) = (moving, target_index) else {
            tracing::debug!(target = %target, "Ignoring drop without a valid page");
            self.reconcile();
            return false;
        };
        if moving == target {
            tracing::debug!(page = %moving, "Ignoring drop onto itself");
            self.reconcile();
            return false;
        }

        let moved = match self.pages.relocate(moving, target_index) {
            Ok(index) => {
                tracing::info!(page = %moving, index, "Dropped page onto page");
                self.pulse(moving, now);
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring drop");
                false
            }
        };
        self.reconcile();
        moved
    }

    /// Drop into gap `gap`. Returns true if the page was reinserted.
    pub fn drop_on_gap(&mut self, payload: Option<&DragPayload>, gap: usize, now: Instant) -> bool {
        let was_dragging = self.drag.is_dragging();
        let moving = self.resolve_payload(payload);
        self.drag.clear();

        if !was_dragging {
            tracing::debug!(gap, "Ignoring gap drop with no drag in progress");
            self.reconcile();
            return false;
        }
        let Some(moving) = moving else {
            tracing::debug!(gap, "Ignoring gap drop without a valid page");
            self.reconcile();
            return false;
        };

        let moved = match self.pages.move_page(moving, gap) {
            Ok(index) => {
                tracing::info!(page = %moving, gap, index, "Dropped page into gap");
                self.pulse(moving, now);
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring gap drop");
                false
            }
        };
        self.reconcile();
        moved
    }

    /// Drag finished without a valid drop
    pub fn drag_end(&mut self) {
        if self.drag.is_dragging() {
            tracing::debug!("Drag ended");
        }
        self.drag.clear();
    }

    fn resolve_payload(&self, payload: Option<&DragPayload>) -> Option<PageId> {
        let payload = payload?;
        match payload.as_str().parse::<PageId>() {
            Ok(id) if self.pages.contains(id) => Some(id),
            Ok(id) => {
                tracing::debug!(page = %id, "Drag payload names a missing page");
                None
            }
            Err(e) => {
                tracing::debug!(error = %e, "Unreadable drag payload");
                None
            }
        }
    }

    fn pulse(&mut self, id: PageId, now: Instant) {
        self.drag.dropped = Some(id);
        self.timers.schedule(TimerKey::ClearDropPulse, DROP_PULSE, now);
    }
}
