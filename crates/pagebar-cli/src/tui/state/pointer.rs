//! Pointer State - what the mouse was over on the previous event
//!
//! Terminals only report positions, so enter and leave transitions are
//! derived by comparing against the last hit.

use pagebar_core::{DragPayload, PageId};

/// Left button pressed on a chip, not yet released
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressState {
    pub page: PageId,
    pub column: u16,
    pub row: u16,
}

#[derive(Debug, Default)]
pub struct PointerState {
    /// Gap the pointer is inside, including its control
    pub gap: Option<usize>,
    /// Control the pointer is on
    pub control: Option<usize>,
    /// Pending press that may become a click or a drag
    pub press: Option<PressState>,
    /// Payload carried by the drag in progress
    pub payload: Option<DragPayload>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget gap and control so the next move re-enters them
    pub fn reset_hover(&mut self) {
        self.gap = None;
        self.control = None;
    }
}
