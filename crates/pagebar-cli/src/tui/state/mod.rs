//! App State Components
//!
//! Per-frame layout caches and pointer tracking for the TUI. Toolbar state
//! itself lives in `pagebar_core::Toolbar`.

mod layout;
mod pointer;

pub use layout::{LayoutState, MenuLayout};
pub use pointer::{PointerState, PressState};
