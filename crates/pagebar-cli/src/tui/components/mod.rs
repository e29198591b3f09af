//! UI components for Pagebar
//!
//! Rendering for the toolbar, its context menu, the status bar and the
//! starfield behind them.

pub mod context_menu;
pub mod starfield;
pub mod status_bar;
pub mod toolbar;

pub use context_menu::{
    anchor_bounds, menu_rect, render_context_menu, unfold_rect, MENU_HEIGHT, MENU_UNFOLD,
    MENU_WIDTH,
};
pub use starfield::Starfield;
pub use status_bar::render_status_bar;
pub use toolbar::{render_toolbar, scroll_to_show, toolbar_inner, ToolbarLayout};
