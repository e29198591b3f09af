//! Status bar component - page position and key hints

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use pagebar_core::Toolbar;

use crate::tui::themes::Theme;
use crate::tui::utils::truncate_ellipsis;

/// Key hints for whatever currently has the keyboard
pub fn key_hints(toolbar: &Toolbar) -> &'static str {
    if toolbar.editing().is_some() {
        "type to rename · enter done "
    } else if toolbar.menu().visible {
        "↑↓ choose · enter run · esc close "
    } else {
        "←→ select · n new · m menu · q quit "
    }
}

/// Render the status bar at the bottom of the screen
pub fn render_status_bar(f: &mut Frame, area: Rect, theme: &Theme, toolbar: &Toolbar) {
    let bg = Paragraph::new("").style(Style::default().bg(theme.bg_color));
    f.render_widget(bg, area);

    let pages = toolbar.pages();
    let position = toolbar
        .active()
        .and_then(|id| pages.index_of(id).zip(pages.get(id)))
        .map(|(index, page)| {
            format!(
                " Page {} of {} │ {}",
                index + 1,
                pages.len(),
                truncate_ellipsis(&page.name, 24)
            )
        })
        .unwrap_or_else(|| " No pages".to_string());

    let hints = key_hints(toolbar);
    let hints_width = (hints.width() as u16).min(area.width);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(hints_width)])
        .split(area);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            position,
            Style::default()
                .fg(theme.text_color)
                .add_modifier(Modifier::BOLD),
        ))),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(theme.dim_color))),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagebar_core::PageId;

    #[test]
    fn test_hints_follow_focus() {
        let mut toolbar = Toolbar::seeded();
        assert!(key_hints(&toolbar).contains("n new"));

        toolbar.open_context_menu(PageId::new(2));
        assert!(key_hints(&toolbar).contains("esc close"));

        toolbar.select_menu_action(pagebar_core::MenuAction::Rename);
        assert!(key_hints(&toolbar).contains("rename"));
    }
}
