//! Toolbar component - page chips with insert gaps between them
//!
//! Layout is computed separately from drawing so the handlers can hit test
//! against exactly what was rendered last frame.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use pagebar_core::{PageId, Toolbar};

use crate::tui::themes::Theme;
use crate::tui::utils::truncate_ellipsis;

/// Longest page name shown on a chip, in cells
const MAX_NAME_WIDTH: usize = 18;

/// Gap showing its insert control: dashes, control, dashes
const OPEN_GAP_WIDTH: u16 = 7;

/// Gap showing only a dashed separator
const COLLAPSED_GAP_WIDTH: u16 = 3;

/// The leading gap draws nothing until it opens
const LEADING_GAP_WIDTH: u16 = 1;

const CONTROL_WIDTH: u16 = 3;

const ADD_BUTTON_LABEL: &str = " + Add page ";

/// Control glyph per half turn of spin
const SPIN_GLYPHS: [&str; 2] = ["+", "✚"];

const MENU_TRIGGER: &str = "⋮";

/// Cursor drawn after the name being edited
const EDIT_CURSOR: &str = "▏";

/// Overflow markers, one glyph plus a spacer cell
const SCROLL_LEFT_MARKER: &str = "‹";
const SCROLL_RIGHT_MARKER: &str = "›";
const SCROLL_MARKER_WIDTH: u16 = 2;

/// A rendered page chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipArea {
    pub page: PageId,
    pub area: Rect,
    /// The "more" trigger, when shown
    pub trigger: Option<Rect>,
}

/// A rendered gap before page `index` (or after the last page)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapArea {
    pub index: usize,
    pub area: Rect,
    /// The insert control, while the gap is open
    pub control: Option<Rect>,
}

/// Hit areas for everything inside the toolbar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolbarLayout {
    pub chips: Vec<ChipArea>,
    pub gaps: Vec<GapArea>,
    pub add_button: Option<Rect>,
    /// Marker shown when pages are scrolled off the left edge
    pub scroll_left: Option<Rect>,
    /// Marker shown when something is cut off at the right edge
    pub scroll_right: Option<Rect>,
}

impl ToolbarLayout {
    pub fn chip(&self, page: PageId) -> Option<&ChipArea> {
        self.chips.iter().find(|chip| chip.page == page)
    }

    #[cfg(test)]
    pub fn gap(&self, index: usize) -> Option<&GapArea> {
        self.gaps.iter().find(|gap| gap.index == index)
    }
}

/// Info and Ending pages keep their own icons
fn page_icon(page: PageId) -> &'static str {
    match page.get() {
        1 => "ⓘ",
        4 => "✓",
        _ => "▤",
    }
}

fn spin_glyph(rotation: u32) -> &'static str {
    SPIN_GLYPHS[(rotation / 180) as usize % SPIN_GLYPHS.len()]
}

/// Label text between the icon and the trigger
fn chip_label(toolbar: &Toolbar, page: PageId, name: &str) -> String {
    if toolbar.editing() == Some(page) {
        format!("{}{}", truncate_ellipsis(name, MAX_NAME_WIDTH), EDIT_CURSOR)
    } else {
        truncate_ellipsis(name, MAX_NAME_WIDTH)
    }
}

fn gap_width(toolbar: &Toolbar, index: usize) -> u16 {
    if toolbar.affordance().is_visible(index) {
        OPEN_GAP_WIDTH
    } else if index == 0 {
        LEADING_GAP_WIDTH
    } else {
        COLLAPSED_GAP_WIDTH
    }
}

/// Lay out gaps and chips left to right inside `inner`, starting with the
/// page at index `first`
///
/// Pages before `first` and anything crossing the right edge are left out,
/// so they can be neither drawn nor hit. Overflow on either side reserves a
/// marker cell at that edge.
pub fn layout_toolbar(inner: Rect, toolbar: &Toolbar, first: usize) -> ToolbarLayout {
    if inner.width == 0 || inner.height == 0 {
        return ToolbarLayout::default();
    }

    let first = first.min(toolbar.pages().len().saturating_sub(1));
    let y = inner.y + inner.height / 2;
    let right = inner.right();
    let scroll_left = (first > 0).then(|| Rect::new(inner.x, y, 1, 1));
    let left = if scroll_left.is_some() {
        inner.x.saturating_add(SCROLL_MARKER_WIDTH).min(right)
    } else {
        inner.x
    };

    let (mut layout, complete) = fill_row(toolbar, first, left, right, y);
    if !complete && right.saturating_sub(left) > SCROLL_MARKER_WIDTH {
        let (clipped, _) = fill_row(toolbar, first, left, right - SCROLL_MARKER_WIDTH, y);
        layout = clipped;
        layout.scroll_right = Some(Rect::new(right - 1, y, 1, 1));
    }
    layout.scroll_left = scroll_left;
    layout
}

/// Place elements between `left` and `right`; false if any were left out
fn fill_row(
    toolbar: &Toolbar,
    first: usize,
    left: u16,
    right: u16,
    y: u16,
) -> (ToolbarLayout, bool) {
    let mut layout = ToolbarLayout::default();
    let mut x = left;
    let fits = |x: u16, w: u16| x.saturating_add(w) <= right;

    for (index, page) in toolbar.pages().iter().enumerate().skip(first) {
        let w = gap_width(toolbar, index);
        if !fits(x, w) {
            return (layout, false);
        }
        layout.gaps.push(gap_area(toolbar, index, Rect::new(x, y, w, 1)));
        x += w;

        let label = chip_label(toolbar, page.id, &page.name);
        let with_trigger = toolbar.shows_menu_trigger(page.id);
        // " icon label " plus " ⋮" when the trigger shows
        let w = label.width() as u16 + 4 + if with_trigger { 2 } else { 0 };
        if !fits(x, w) {
            return (layout, false);
        }
        let area = Rect::new(x, y, w, 1);
        let trigger = with_trigger.then(|| Rect::new(x + w - 2, y, 1, 1));
        layout.chips.push(ChipArea {
            page: page.id,
            area,
            trigger,
        });
        x += w;
    }

    let trailing = toolbar.pages().len();
    let w = gap_width(toolbar, trailing).max(COLLAPSED_GAP_WIDTH);
    if !fits(x, w) {
        return (layout, false);
    }
    layout
        .gaps
        .push(gap_area(toolbar, trailing, Rect::new(x, y, w, 1)));
    x += w;

    let w = ADD_BUTTON_LABEL.width() as u16;
    if !fits(x, w) {
        return (layout, false);
    }
    layout.add_button = Some(Rect::new(x, y, w, 1));
    (layout, true)
}

/// Scroll offset closest to `first` that keeps `page` on screen
pub fn scroll_to_show(inner: Rect, toolbar: &Toolbar, first: usize, page: PageId) -> usize {
    let first = first.min(toolbar.pages().len().saturating_sub(1));
    let Some(index) = toolbar.pages().index_of(page) else {
        return first;
    };
    let mut first = first.min(index);
    while first < index && layout_toolbar(inner, toolbar, first).chip(page).is_none() {
        first += 1;
    }
    first
}

/// Area inside the toolbar border
pub fn toolbar_inner(area: Rect) -> Rect {
    toolbar_block().inner(area)
}

fn toolbar_block<'a>() -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

fn gap_area(toolbar: &Toolbar, index: usize, area: Rect) -> GapArea {
    let control = toolbar.affordance().is_visible(index).then(|| {
        Rect::new(
            area.x + (area.width - CONTROL_WIDTH) / 2,
            area.y,
            CONTROL_WIDTH,
            1,
        )
    });
    GapArea {
        index,
        area,
        control,
    }
}

/// Render the toolbar block scrolled to `first` and return the layout that
/// was drawn
pub fn render_toolbar(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    toolbar: &Toolbar,
    first: usize,
) -> ToolbarLayout {
    let block = toolbar_block()
        .border_style(Style::default().fg(theme.border_color))
        .style(Style::default().bg(theme.bg_color));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let layout = layout_toolbar(inner, toolbar, first);

    for gap in &layout.gaps {
        render_gap(f, gap, theme, toolbar);
    }
    for chip in &layout.chips {
        render_chip(f, chip, theme, toolbar);
    }
    if let Some(rect) = layout.add_button {
        let style = Style::default()
            .fg(theme.accent_color)
            .add_modifier(Modifier::BOLD);
        f.render_widget(Paragraph::new(Span::styled(ADD_BUTTON_LABEL, style)), rect);
    }

    let marker_style = Style::default()
        .fg(theme.accent_color)
        .add_modifier(Modifier::BOLD);
    for (marker, glyph) in [
        (layout.scroll_left, SCROLL_LEFT_MARKER),
        (layout.scroll_right, SCROLL_RIGHT_MARKER),
    ] {
        if let Some(rect) = marker {
            f.render_widget(Paragraph::new(Span::styled(glyph, marker_style)), rect);
        }
    }

    layout
}

fn render_gap(f: &mut Frame, gap: &GapArea, theme: &Theme, toolbar: &Toolbar) {
    let dashes = Style::default().fg(theme.separator_color);
    let mut base = Style::default().bg(theme.bg_color);
    if toolbar.drag().target_gap() == Some(gap.index) {
        base = base.bg(theme.drop_target_color);
    }

    let line = match gap.control {
        Some(control) => {
            let side = (control.x - gap.area.x) as usize;
            let trailing = (gap.area.width - CONTROL_WIDTH) as usize - side;
            let affordance = toolbar.affordance();
            let mut control_style = Style::default()
                .fg(theme.text_color)
                .add_modifier(Modifier::BOLD);
            if affordance.is_glowing(gap.index) {
                control_style = control_style.bg(theme.glow_color);
            }
            Line::from(vec![
                Span::styled("╌".repeat(side), dashes),
                Span::styled(
                    format!("({})", spin_glyph(affordance.rotation(gap.index))),
                    control_style,
                ),
                Span::styled("╌".repeat(trailing), dashes),
            ])
        }
        None if gap.index == 0 => Line::from(" ".repeat(gap.area.width as usize)),
        None => Line::from(Span::styled(
            format!(" {} ", "╌".repeat(gap.area.width.saturating_sub(2) as usize)),
            dashes,
        )),
    };
    f.render_widget(Paragraph::new(line).style(base), gap.area);
}

fn render_chip(f: &mut Frame, chip: &ChipArea, theme: &Theme, toolbar: &Toolbar) {
    let Some(page) = toolbar.pages().get(chip.page) else {
        return;
    };
    let is_active = toolbar.active() == Some(chip.page);
    let drag = toolbar.drag();

    let mut style = if is_active {
        Style::default()
            .fg(theme.chip_active_text)
            .bg(theme.chip_active_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.chip_text).bg(theme.chip_bg)
    };
    if !is_active && toolbar.hovered() == Some(chip.page) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if drag.target_page() == Some(chip.page) {
        style = style.bg(theme.drop_target_color);
    }
    if drag.dragged == Some(chip.page) {
        style = style.add_modifier(Modifier::DIM);
    }
    if drag.dropped == Some(chip.page) {
        style = style.bg(theme.accent_color).fg(theme.chip_active_bg);
    }

    let icon_style = if is_active {
        style.fg(theme.icon_active_color)
    } else {
        style
    };
    let mut label_style = style;
    if toolbar.editing() == Some(chip.page) {
        label_style = label_style.add_modifier(Modifier::UNDERLINED);
    }

    let mut spans = vec![
        Span::styled(" ", style),
        Span::styled(page_icon(chip.page), icon_style),
        Span::styled(" ", style),
        Span::styled(chip_label(toolbar, chip.page, &page.name), label_style),
        Span::styled(" ", style),
    ];
    if chip.trigger.is_some() {
        spans.push(Span::styled(MENU_TRIGGER, style.fg(theme.accent_color)));
        spans.push(Span::styled(" ", style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), chip.area);
}
