//! Event handlers for the TUI
//!
//! Each submodule adds an `impl App` block for one kind of input.

mod keyboard;
mod mouse;

pub use hit_test::HitTarget;
