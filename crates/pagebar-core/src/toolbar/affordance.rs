//! Insert-page affordances
//!
//! Shows the insert control only at the gap under the pointer. Leaving a gap
//! arms a short hide timer instead of hiding at once, so sliding between
//! neighbouring gaps and their controls never flickers.

use std::collections::HashMap;
use std::time::Instant;

use super::{TimerKey, Toolbar};
use crate::constants::affordance::{HIDE_DELAY, OPEN_ROTATION, SPIN_INCREMENT};
use crate::pages::PageId;

/// Visual state of the insert controls
#[derive(Debug, Clone, Default)]
pub struct AffordanceState {
    /// Gap whose control is shown
    pub visible: Option<usize>,
    rotations: HashMap<usize, u32>,
    glow: HashMap<usize, bool>,
}

impl AffordanceState {
    pub fn is_visible(&self, gap: usize) -> bool {
        self.visible == Some(gap)
    }

    /// Accumulated rotation in degrees
    pub fn rotation(&self, gap: usize) -> u32 {
        self.rotations.get(&gap).copied().unwrap_or(0)
    }

    pub fn is_glowing(&self, gap: usize) -> bool {
        self.glow.get(&gap).copied().unwrap_or(false)
    }

    /// Drop the rotation and glow kept for `gap`
    pub(super) fn forget(&mut self, gap: usize) {
        self.rotations.remove(&gap);
        self.glow.remove(&gap);
    }
}

impl Toolbar {
    /// Pointer entered gap `gap`
    pub fn gap_enter(&mut self, gap: usize) {
        self.timers.cancel(TimerKey::HideAffordance);
        if let Some(previous) = self.affordance.visible.filter(|&g| g != gap) {
            self.affordance.forget(previous);
        }
        self.affordance.visible = Some(gap);
        self.affordance.rotations.insert(gap, OPEN_ROTATION);
    }

    /// Pointer left the gap; the control hides unless a gap claims it first
    pub fn gap_leave(&mut self, now: Instant) {
        if self.affordance.visible.is_some() {
            self.timers.schedule(TimerKey::HideAffordance, HIDE_DELAY, now);
        }
    }

    /// Pointer entered the control itself: spin it further and light it up
    pub fn control_enter(&mut self, gap: usize) {
        if !self.affordance.is_visible(gap) {
            tracing::debug!(gap, "Ignoring enter on a hidden control");
            return;
        }
        *self.affordance.rotations.entry(gap).or_insert(0) += SPIN_INCREMENT;
        self.affordance.glow.insert(gap, true);
    }

    /// Pointer left the control; the spin stays until the control hides
    pub fn control_leave(&mut self, gap: usize) {
        self.affordance.glow.insert(gap, false);
    }

    /// The control at `gap` was clicked
    pub fn control_click(&mut self, gap: usize) -> PageId {
        self.insert_page(Some(gap))
    }

    pub(super) fn hide_affordance(&mut self) {
        if let Some(gap) = self.affordance.visible.take() {
            self.affordance.forget(gap);
        }
    }
}
