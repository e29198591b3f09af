//! Context menu popup - page settings anchored to a chip
//!
//! Position comes from `pagebar_core::place_menu`; this module only turns
//! the placement into cells and draws it.

use std::time::Duration;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use pagebar_core::{Bounds, MenuAction, MenuPlacement, VerticalOrigin};

use crate::tui::state::MenuLayout;
use crate::tui::themes::Theme;

pub const MENU_WIDTH: u16 = 24;

/// Border, five actions and the separator above Delete
pub const MENU_HEIGHT: u16 = 8;

/// How long the menu takes to unfold from its origin
pub const MENU_UNFOLD: Duration = Duration::from_millis(200);

fn action_icon(action: MenuAction) -> &'static str {
    match action {
        MenuAction::SetAsFirst => "⚑",
        MenuAction::Rename => "✎",
        MenuAction::Copy => "⧉",
        MenuAction::Duplicate => "❐",
        MenuAction::Delete => "✕",
    }
}

/// Anchor bounds for a chip drawn at `area`
pub fn anchor_bounds(area: Rect) -> Bounds {
    Bounds::new(
        area.x as i32,
        area.y as i32,
        area.width as i32,
        area.height as i32,
    )
}

/// Cells covered by the menu, clipped to `frame`; `None` when off-screen
pub fn menu_rect(placement: &MenuPlacement, frame: Rect) -> Option<Rect> {
    if placement.is_offscreen() {
        return None;
    }
    let x = placement.x.max(frame.x as i32) as u16;
    let y = placement.y.max(frame.y as i32) as u16;
    if x >= frame.right() || y >= frame.bottom() {
        return None;
    }
    let width = MENU_WIDTH.min(frame.right() - x);
    let height = MENU_HEIGHT.min(frame.bottom() - y);
    Some(Rect::new(x, y, width, height))
}

/// Part of `full` drawn `elapsed` after opening, growing from the origin
pub fn unfold_rect(full: Rect, placement: &MenuPlacement, elapsed: Duration) -> Rect {
    if elapsed >= MENU_UNFOLD {
        return full;
    }
    let grown = (full.height as u128 * elapsed.as_millis()).div_ceil(MENU_UNFOLD.as_millis());
    let height = (grown as u16).clamp(1, full.height.max(1));
    match placement.origin.vertical {
        VerticalOrigin::Bottom => Rect::new(full.x, full.bottom() - height, full.width, height),
        VerticalOrigin::Top => Rect::new(full.x, full.y, full.width, height),
    }
}

/// Row areas for each action inside the menu at `area`
fn item_rows(area: Rect) -> Vec<(Rect, MenuAction)> {
    let inner_x = area.x + 1;
    let inner_width = area.width.saturating_sub(2);
    let mut y = area.y + 1;
    let mut rows = Vec::with_capacity(MenuAction::ALL.len());
    for action in MenuAction::ALL {
        if action.is_destructive() {
            y += 1;
        }
        if y + 1 >= area.bottom() {
            break;
        }
        rows.push((Rect::new(inner_x, y, inner_width, 1), action));
        y += 1;
    }
    rows
}

/// Draw the menu and return the hit areas of the rows drawn so far
pub fn render_context_menu(
    f: &mut Frame,
    full: Rect,
    visible: Rect,
    theme: &Theme,
    highlighted: MenuAction,
) -> MenuLayout {
    let rows = item_rows(full);
    let items: Vec<(Rect, MenuAction)> = rows
        .iter()
        .filter_map(|(row, action)| clip(*row, visible).map(|row| (row, *action)))
        .collect();

    f.render_widget(Clear, visible);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_color))
        .style(Style::default().bg(theme.bg_color))
        .title(Span::styled(
            " Settings ",
            Style::default()
                .fg(theme.text_color)
                .add_modifier(Modifier::BOLD),
        ));
    f.render_widget(block, visible);

    for (row, action) in &items {
        let mut style = if action.is_destructive() {
            Style::default().fg(theme.danger_color)
        } else {
            Style::default().fg(theme.text_color)
        };
        if *action == highlighted {
            style = style.bg(theme.chip_bg).add_modifier(Modifier::BOLD);
        }
        let line = Line::from(vec![
            Span::styled(format!(" {} ", action_icon(*action)), style),
            Span::styled(action.label(), style),
        ]);
        f.render_widget(Paragraph::new(line).style(style), *row);
    }

    if let Some(separator) = rows
        .iter()
        .find(|(_, action)| action.is_destructive())
        .and_then(|(row, _)| clip(Rect::new(row.x, row.y - 1, row.width, 1), visible))
    {
        let line = Span::styled(
            "─".repeat(separator.width as usize),
            Style::default().fg(theme.border_color),
        );
        f.render_widget(Paragraph::new(line), separator);
    }

    MenuLayout {
        area: visible,
        items,
    }
}

/// `row` if it lies wholly inside `visible`
fn clip(row: Rect, visible: Rect) -> Option<Rect> {
    (row.y >= visible.y && row.bottom() <= visible.bottom()).then_some(row)
}
