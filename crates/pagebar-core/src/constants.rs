//! Interaction constants and defaults
//!
//! Centralized location for timings, angles and placement offsets

use std::time::Duration;

/// Hover affordance timing and animation
pub mod affordance {
    use super::*;

    /// Delay before an insert control hides after the pointer leaves its gap
    pub const HIDE_DELAY: Duration = Duration::from_millis(100);

    /// Rotation applied when a gap reveals its control
    pub const OPEN_ROTATION: u32 = 180;

    /// Rotation added each time the pointer enters the control itself
    pub const SPIN_INCREMENT: u32 = 180;
}

/// Drag-and-drop feedback
pub mod drag {
    use super::*;

    /// How long a dropped page keeps its highlight
    pub const DROP_PULSE: Duration = Duration::from_millis(300);
}

/// Context menu placement
pub mod menu {
    /// Distance between the anchor and the menu
    pub const ANCHOR_GAP: i32 = 9;

    /// Minimum distance kept from the left and right viewport edges
    pub const EDGE_MARGIN: i32 = 10;

    /// Coordinate used to park a menu whose anchor is missing
    pub const OFFSCREEN: i32 = -9999;
}

/// Page naming and seed data
pub mod pages {
    /// Names of the pages every toolbar starts with
    pub const SEED_NAMES: [&str; 4] = ["Info", "Details", "Other", "Ending"];

    /// Suffix appended to duplicated page names
    pub const COPY_SUFFIX: &str = " (Copy)";

    /// Name given to a freshly inserted page
    pub fn new_page_name(id: impl std::fmt::Display) -> String {
        format!("New Page {}", id)
    }
}
