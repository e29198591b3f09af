//! Built-in theme definitions

use ratatui::style::Color;

use super::Theme;

/// Default theme: dusk sky, light chips, blue accents
pub fn pagebar() -> Theme {
    Theme {
        name: "pagebar".to_string(),
        display_name: "Pagebar".to_string(),
        bg_color: Color::Rgb(249, 250, 251),
        text_color: Color::Rgb(26, 26, 26),
        dim_color: Color::Rgb(103, 114, 137),
        title_color: Color::Rgb(255, 255, 255),
        border_color: Color::Rgb(225, 225, 225),
        accent_color: Color::Rgb(47, 114, 226),
        danger_color: Color::Rgb(239, 73, 79),
        chip_bg: Color::Rgb(232, 234, 238),
        chip_text: Color::Rgb(103, 114, 137),
        chip_active_bg: Color::Rgb(255, 255, 255),
        chip_active_text: Color::Rgb(26, 26, 26),
        icon_active_color: Color::Rgb(245, 157, 14),
        drop_target_color: Color::Rgb(191, 219, 254),
        separator_color: Color::Rgb(192, 192, 192),
        glow_color: Color::Rgb(147, 180, 240),
        sky_gradient: [
            Color::Rgb(74, 112, 144),
            Color::Rgb(124, 109, 140),
            Color::Rgb(209, 123, 148),
        ],
        star_color: Color::Rgb(255, 255, 255),
    }
}

/// Dark chips over a night sky
pub fn midnight() -> Theme {
    Theme {
        name: "midnight".to_string(),
        display_name: "Midnight".to_string(),
        bg_color: Color::Rgb(22, 27, 34),
        text_color: Color::Rgb(230, 237, 243),
        dim_color: Color::Rgb(125, 133, 144),
        title_color: Color::Rgb(230, 237, 243),
        border_color: Color::Rgb(48, 54, 61),
        accent_color: Color::Rgb(88, 166, 255),
        danger_color: Color::Rgb(248, 81, 73),
        chip_bg: Color::Rgb(33, 38, 45),
        chip_text: Color::Rgb(139, 148, 158),
        chip_active_bg: Color::Rgb(56, 63, 74),
        chip_active_text: Color::Rgb(240, 246, 252),
        icon_active_color: Color::Rgb(210, 153, 34),
        drop_target_color: Color::Rgb(31, 66, 112),
        separator_color: Color::Rgb(72, 79, 88),
        glow_color: Color::Rgb(56, 139, 253),
        sky_gradient: [
            Color::Rgb(8, 10, 24),
            Color::Rgb(20, 22, 48),
            Color::Rgb(44, 30, 64),
        ],
        star_color: Color::Rgb(220, 226, 255),
    }
}

/// Uses the terminal's own palette
pub fn terminal() -> Theme {
    Theme {
        name: "terminal".to_string(),
        display_name: "Terminal".to_string(),
        bg_color: Color::Reset,
        text_color: Color::Reset,
        dim_color: Color::DarkGray,
        title_color: Color::White,
        border_color: Color::Gray,
        accent_color: Color::Blue,
        danger_color: Color::Red,
        chip_bg: Color::Reset,
        chip_text: Color::Gray,
        chip_active_bg: Color::DarkGray,
        chip_active_text: Color::White,
        icon_active_color: Color::Yellow,
        drop_target_color: Color::Blue,
        separator_color: Color::DarkGray,
        glow_color: Color::LightBlue,
        sky_gradient: [Color::Reset, Color::Reset, Color::Reset],
        star_color: Color::White,
    }
}
