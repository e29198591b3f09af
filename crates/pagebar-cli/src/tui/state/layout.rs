//! Layout State - cached areas for hit testing
//!
//! Updated each frame during rendering, used for mouse event handling.

use ratatui::layout::Rect;

use pagebar_core::{MenuAction, PageId};

use crate::tui::components::ToolbarLayout;

/// Where the context menu was drawn last frame
#[derive(Debug, Clone, Default)]
pub struct MenuLayout {
    /// Menu area drawn so far, including its border
    pub area: Rect,
    /// One row per action drawn so far
    pub items: Vec<(Rect, MenuAction)>,
}

/// Cached layout areas for hit testing and rendering
#[derive(Debug, Default)]
pub struct LayoutState {
    /// Toolbar block including its border
    pub toolbar_area: Option<Rect>,
    /// Chips, gaps and the add button inside the toolbar
    pub toolbar: ToolbarLayout,
    /// Context menu, while one is on screen
    pub menu: Option<MenuLayout>,
    /// Index of the first page laid out in the toolbar
    pub scroll: usize,
    /// Active page the scroll offset last followed
    pub followed: Option<PageId>,
    /// Whether the open menu's missing anchor was already reported
    pub menu_anchor_lost: bool,
}

impl LayoutState {
    pub fn new() -> Self {
        Self::default()
    }
}
