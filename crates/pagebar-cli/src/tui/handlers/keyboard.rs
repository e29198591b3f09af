//! Keyboard event handlers
//!
//! Rename mode owns the keyboard while active, then the context menu, then
//! the toolbar shortcuts.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

use crate::tui::app::App;

impl App {
    /// Main keyboard event dispatcher
    pub fn handle_key(&mut self, key: KeyEvent) {
        let code = key.code;
        let modifiers = key.modifiers;

        // Ctrl+C always quits
        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.toolbar.editing().is_some() {
            self.handle_rename_key(code, modifiers);
            return;
        }

        if self.toolbar.menu().visible {
            self.handle_menu_key(code);
            return;
        }

        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Left | KeyCode::Char('h') => self.toolbar.select_previous(),
            KeyCode::Right | KeyCode::Char('l') => self.toolbar.select_next(),
            KeyCode::Char('n') => {
                self.toolbar.insert_page(None);
            }
            KeyCode::Char('m') => {
                if let Some(active) = self.toolbar.active() {
                    self.toolbar.open_context_menu(active);
                    self.menu_opened_at = Some(Instant::now());
                }
            }
            _ => {}
        }
    }

    /// Typing edits the name live; Enter confirms, Esc or Tab move focus away
    fn handle_rename_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let Some(page) = self
            .toolbar
            .editing()
            .and_then(|id| self.toolbar.pages().get(id))
        else {
            return;
        };
        let mut name = page.name.clone();

        match code {
            KeyCode::Enter => self.toolbar.confirm_edit(),
            KeyCode::Esc | KeyCode::Tab => self.toolbar.blur_edit(),
            KeyCode::Backspace => {
                name.pop();
                self.toolbar.edit_name(name);
            }
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                name.push(c);
                self.toolbar.edit_name(name);
            }
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.toolbar.highlight_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.toolbar.highlight_next(),
            KeyCode::Enter => self.toolbar.activate_highlighted(),
            KeyCode::Esc => self.toolbar.hide_context_menu(),
            _ => {}
        }
    }
}
