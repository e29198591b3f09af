//! Utilities for the TUI

mod text;

pub use text::truncate_ellipsis;
