//! Pagebar Core - Page list store and toolbar interaction state
//!
//! This crate provides the toolkit-independent half of the pagebar widget:
//! - Ordered page store with stable, never-reused ids
//! - Selection and inline-rename state
//! - Drag-and-drop reordering onto pages or gaps
//! - Debounced "insert page" affordances
//! - Context menu state, actions and placement math

pub mod constants;
pub mod error;
pub mod geometry;
pub mod pages;
pub mod timer;
pub mod toolbar;

// Re-exports for convenience
pub use error::PageError;
pub use geometry::{
    place_menu, Bounds, HorizontalOrigin, MenuPlacement, PlacementConfig, TransformOrigin,
    VerticalOrigin,
};
pub use pages::{Page, PageId, PageList};
pub use timer::Deferred;
pub use toolbar::{DragPayload, DropTarget, MenuAction, TimerKey, Toolbar};
