//! Main application state and event loop

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use pagebar_core::{place_menu, PageList, PlacementConfig, Toolbar};

use crate::config::PagebarConfig;
use crate::tui::components::{
    anchor_bounds, menu_rect, render_context_menu, render_status_bar, render_toolbar,
    scroll_to_show, toolbar_inner, unfold_rect, Starfield, MENU_HEIGHT, MENU_UNFOLD,
    MENU_WIDTH,
};
use crate::tui::state::{LayoutState, PointerState};
use crate::tui::themes::{Theme, THEME_REGISTRY};

/// Redraw interval while something is animating
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Wake-up interval when nothing is animating
const IDLE_INTERVAL: Duration = Duration::from_millis(250);

/// Toolbar block height including its border
const TOOLBAR_HEIGHT: u16 = 3;

/// Main application state
pub struct App {
    pub toolbar: Toolbar,
    pub theme: Arc<Theme>,
    pub layout: LayoutState,
    pub pointer: PointerState,
    pub starfield: Option<Starfield>,
    pub placement: PlacementConfig,
    pub started_at: Instant,
    /// When the context menu last opened, for the unfold animation
    pub menu_opened_at: Option<Instant>,
    pub should_quit: bool,
    needs_redraw: bool,
}

impl App {
    pub fn new(config: &PagebarConfig) -> Self {
        let theme = Arc::new(THEME_REGISTRY.get_or_default(&config.theme).clone());
        let starfield = config.starfield.enabled.then(|| {
            Starfield::new(
                config.starfield.stars,
                config.starfield.shooting_stars,
                &mut rand::thread_rng(),
            )
        });
        let pages = PageList::from_names(config.seed_pages.iter().map(String::as_str));
        tracing::info!(
            pages = pages.len(),
            stars = starfield.as_ref().map_or(0, Starfield::star_count),
            "Starting toolbar"
        );

        Self {
            toolbar: Toolbar::new(pages),
            theme,
            layout: LayoutState::new(),
            pointer: PointerState::new(),
            starfield,
            placement: config.menu.into(),
            started_at: Instant::now(),
            menu_opened_at: None,
            should_quit: false,
            needs_redraw: true,
        }
    }

    /// Whether the context menu is still unfolding at `now`
    fn is_menu_unfolding(&self, now: Instant) -> bool {
        self.toolbar.menu().visible
            && self
                .menu_opened_at
                .is_some_and(|opened| now.duration_since(opened) < MENU_UNFOLD)
    }

    /// Run the application
    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        loop {
            let now = Instant::now();

            // Fire deferred hides and drop pulses that came due
            if self.toolbar.tick(now) {
                self.needs_redraw = true;
            }

            let animating = self.starfield.is_some() || self.is_menu_unfolding(now);
            if animating {
                self.needs_redraw = true;
            }

            // Only render if something changed
            if self.needs_redraw {
                terminal.draw(|f| self.ui(f))?;
                self.needs_redraw = false;
            }

            // Wake for the next frame or the next deadline, whichever is first
            let mut poll_timeout = if animating {
                FRAME_INTERVAL
            } else {
                IDLE_INTERVAL
            };
            if let Some(deadline) = self.toolbar.next_deadline(now) {
                poll_timeout = poll_timeout.min(deadline);
            }

            tokio::select! {
                biased; // Prefer events over timeout when both are ready

                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(e)) => tracing::warn!("Terminal event error: {}", e),
                        None => break,
                    }
                }
                _ = tokio::time::sleep(poll_timeout) => {}
            }

            if self.should_quit {
                break;
            }
        }
        tracing::info!("Toolbar closed");
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                self.handle_key(key);
                self.needs_redraw = true;
            }
            Event::Mouse(mouse) => {
                self.handle_mouse_event(mouse, Instant::now());
                self.needs_redraw = true;
            }
            Event::Resize(_, _) => {
                self.needs_redraw = true;
            }
            _ => {}
        }
    }

    /// Draw one frame and refresh the cached hit areas
    pub fn ui(&mut self, f: &mut Frame) {
        let area = f.area();
        let now = Instant::now();

        match &self.starfield {
            Some(starfield) => {
                starfield.render(f.buffer_mut(), area, &self.theme, now - self.started_at)
            }
            None => f.render_widget(
                Block::default().style(Style::default().bg(self.theme.bg_color)),
                area,
            ),
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(TOOLBAR_HEIGHT),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_page_title(f, chunks[0]);

        self.layout.toolbar_area = Some(chunks[1]);
        self.follow_focus(toolbar_inner(chunks[1]));
        self.layout.toolbar = render_toolbar(
            f,
            chunks[1],
            &self.theme,
            &self.toolbar,
            self.layout.scroll,
        );
        render_status_bar(f, chunks[2], &self.theme, &self.toolbar);

        self.layout.menu = None;
        if self.toolbar.menu().visible {
            self.render_menu(f, area, now);
        } else {
            self.layout.menu_anchor_lost = false;
        }
    }

    /// Scroll the toolbar so the page in focus is laid out
    ///
    /// The menu target and the page being renamed stay pinned on screen. The
    /// active page is followed only when it changes, so manual scrolling
    /// sticks until the selection moves.
    fn follow_focus(&mut self, inner: Rect) {
        let menu = self.toolbar.menu();
        let pinned = if menu.visible {
            menu.target
        } else {
            self.toolbar.editing()
        };
        let active = self.toolbar.active();
        let follow = pinned.is_some() || active != self.layout.followed;
        self.layout.followed = active;

        let scroll = self.layout.scroll;
        self.layout.scroll = match pinned.or(active) {
            Some(page) if follow => scroll_to_show(inner, &self.toolbar, scroll, page),
            _ => scroll.min(self.toolbar.pages().len().saturating_sub(1)),
        };
    }

    /// Shift the toolbar one page left (`-1`) or right (`1`)
    pub fn scroll_toolbar(&mut self, step: isize) {
        if step < 0 {
            self.layout.scroll = self.layout.scroll.saturating_sub(1);
        } else if step > 0 && self.layout.toolbar.scroll_right.is_some() {
            self.layout.scroll += 1;
        }
    }

    /// Name of the active page, centred in the space above the toolbar
    fn render_page_title(&self, f: &mut Frame, area: Rect) {
        let Some(page) = self.toolbar.active().and_then(|id| self.toolbar.pages().get(id)) else {
            return;
        };
        if area.height == 0 {
            return;
        }
        let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
        let title = Paragraph::new(Line::from(Span::styled(
            page.name.clone(),
            Style::default()
                .fg(self.theme.title_color)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        f.render_widget(title, row);
    }

    fn render_menu(&mut self, f: &mut Frame, area: Rect, now: Instant) {
        let target = self.toolbar.menu().target;
        let Some(anchor) = target
            .and_then(|id| self.layout.toolbar.chip(id))
            .map(|chip| anchor_bounds(chip.area))
        else {
            if !self.layout.menu_anchor_lost {
                tracing::error!(page = ?target, "Context menu target chip is not on screen");
                self.layout.menu_anchor_lost = true;
            }
            return;
        };
        self.layout.menu_anchor_lost = false;

        let placement = place_menu(
            Some(anchor),
            MENU_WIDTH as i32,
            MENU_HEIGHT as i32,
            area.width as i32,
            self.placement,
        );
        let Some(full) = menu_rect(&placement, area) else {
            return;
        };

        let elapsed = self
            .menu_opened_at
            .map(|opened| now.duration_since(opened))
            .unwrap_or(MENU_UNFOLD);
        let visible = unfold_rect(full, &placement, elapsed);
        self.layout.menu = Some(render_context_menu(
            f,
            full,
            visible,
            &self.theme,
            self.toolbar.menu().highlighted_action(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn test_app() -> App {
        let mut config = PagebarConfig::default();
        config.starfield.enabled = false;
        App::new(&config)
    }

    #[test]
    fn test_new_uses_seed_pages_from_config() {
        let mut config = PagebarConfig::default();
        config.seed_pages = vec!["Welcome".to_string(), "Survey".to_string()];
        config.starfield.enabled = false;
        let app = App::new(&config);

        let names: Vec<&str> = app.toolbar.pages().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Welcome", "Survey"]);
        assert_eq!(app.toolbar.active(), app.toolbar.pages().first_id());
        assert!(app.starfield.is_none());
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let mut config = PagebarConfig::default();
        config.theme = "does-not-exist".to_string();
        config.starfield.enabled = false;
        assert_eq!(App::new(&config).theme.name, "pagebar");
    }

    #[test]
    fn test_ui_caches_toolbar_layout() {
        let mut app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| app.ui(f)).unwrap();

        assert_eq!(app.layout.toolbar_area, Some(Rect::new(0, 16, 100, 3)));
        assert_eq!(app.layout.toolbar.chips.len(), 4);
        assert!(app.layout.menu.is_none());
    }

    #[test]
    fn test_ui_places_menu_above_chip() {
        let mut app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| app.ui(f)).unwrap();

        let id = pagebar_core::PageId::new(3);
        app.toolbar.open_context_menu(id);
        terminal.draw(|f| app.ui(f)).unwrap();

        let chip = *app.layout.toolbar.chip(id).unwrap();
        let menu = app.layout.menu.as_ref().unwrap();
        assert_eq!(menu.area.x, chip.area.x);
        assert_eq!(menu.area.bottom() + 1, chip.area.y);
    }

    #[test]
    fn test_new_pages_past_the_edge_stay_reachable() {
        let mut app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        for _ in 0..4 {
            app.toolbar.insert_page(None);
        }
        terminal.draw(|f| app.ui(f)).unwrap();

        let active = app.toolbar.active().unwrap();
        assert_eq!(app.toolbar.pages().len(), 8);
        let chip = *app.layout.toolbar.chip(active).unwrap();
        assert!(chip.area.right() <= 79);
        assert!(app.layout.toolbar.scroll_left.is_some());

        app.toolbar.open_context_menu(active);
        terminal.draw(|f| app.ui(f)).unwrap();
        let menu = app.layout.menu.as_ref().unwrap();
        assert_eq!(menu.area.bottom() + 1, chip.area.y);
        assert!(!app.layout.menu_anchor_lost);
    }

    #[test]
    fn test_manual_scroll_sticks_until_selection_moves() {
        let mut app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
        terminal.draw(|f| app.ui(f)).unwrap();
        assert_eq!(app.layout.scroll, 0);
        assert!(app.layout.toolbar.scroll_right.is_some());

        app.scroll_toolbar(1);
        terminal.draw(|f| app.ui(f)).unwrap();
        assert_eq!(app.layout.scroll, 1);
        assert!(app.layout.toolbar.chip(pagebar_core::PageId::new(1)).is_none());

        // Page 2 is already in view, so the offset holds
        app.toolbar.select_next();
        terminal.draw(|f| app.ui(f)).unwrap();
        assert_eq!(app.layout.scroll, 1);

        // Selecting page 1 brings it back into view
        app.toolbar.select_previous();
        terminal.draw(|f| app.ui(f)).unwrap();
        assert_eq!(app.layout.scroll, 0);
    }
}
