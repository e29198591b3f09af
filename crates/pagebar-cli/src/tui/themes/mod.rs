//! Color themes for the toolbar

mod definitions;
mod registry;

use once_cell::sync::Lazy;
use ratatui::style::Color;

pub use registry::ThemeRegistry;

/// All built-in themes, keyed by name
pub static THEME_REGISTRY: Lazy<ThemeRegistry> = Lazy::new(ThemeRegistry::new);

/// A complete set of toolbar colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub display_name: String,

    // Base
    pub bg_color: Color,
    pub text_color: Color,
    pub dim_color: Color,
    pub title_color: Color,
    pub border_color: Color,
    pub accent_color: Color,
    pub danger_color: Color,

    // Page chips
    pub chip_bg: Color,
    pub chip_text: Color,
    pub chip_active_bg: Color,
    pub chip_active_text: Color,
    pub icon_active_color: Color,
    pub drop_target_color: Color,

    // Insert controls
    pub separator_color: Color,
    pub glow_color: Color,

    // Starfield sky, top to bottom
    pub sky_gradient: [Color; 3],
    pub star_color: Color,
}
