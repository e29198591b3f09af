//! Mouse event handling
//!
//! Turns raw terminal mouse reports into toolbar interactions. A press on a
//! chip becomes a click on release, or a drag once the pointer moves.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use std::time::Instant;

use pagebar_core::{MenuAction, PageId};

use crate::tui::app::App;
use crate::tui::handlers::HitTarget;
use crate::tui::state::PressState;

impl App {
    /// Handle mouse events for hover, clicks, drags and the context menu
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, now: Instant) {
        let (x, y) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => self.handle_pointer_move(x, y, now),
            MouseEventKind::Down(MouseButton::Left) => self.handle_left_down(x, y, now),
            MouseEventKind::Drag(MouseButton::Left) => self.handle_drag(x, y),
            MouseEventKind::Up(MouseButton::Left) => self.handle_left_up(x, y, now),
            MouseEventKind::Down(MouseButton::Right) => self.handle_right_down(x, y, now),
            MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => self.handle_wheel(x, y, -1),
            MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => self.handle_wheel(x, y, 1),
            _ => {}
        }
    }

    // =========================================================================
    // Hover
    // =========================================================================

    fn handle_pointer_move(&mut self, x: u16, y: u16, now: Instant) {
        let hit = self.hit_test(x, y);

        if let HitTarget::MenuItem(action) = hit {
            if let Some(index) = MenuAction::ALL.iter().position(|a| *a == action) {
                self.toolbar.highlight_action(index);
            }
        }

        self.toolbar.hover_page(hit.page());
        self.update_gap_hover(hit, now);
    }

    /// Derive gap and control enter/leave from the previous hit
    fn update_gap_hover(&mut self, hit: HitTarget, now: Instant) {
        let control = match hit {
            HitTarget::Control(gap) => Some(gap),
            _ => None,
        };
        if control != self.pointer.control {
            if let Some(previous) = self.pointer.control {
                self.toolbar.control_leave(previous);
            }
            if let Some(gap) = control {
                self.toolbar.control_enter(gap);
            }
            self.pointer.control = control;
        }

        let gap = hit.gap();
        if gap != self.pointer.gap {
            if self.pointer.gap.is_some() {
                self.toolbar.gap_leave(now);
            }
            if let Some(gap) = gap {
                self.toolbar.gap_enter(gap);
            }
            self.pointer.gap = gap;
        }
    }

    // =========================================================================
    // Buttons
    // =========================================================================

    fn handle_left_down(&mut self, x: u16, y: u16, now: Instant) {
        let hit = self.hit_test(x, y);

        if self.toolbar.menu().visible {
            if let HitTarget::MenuItem(action) = hit {
                self.toolbar.select_menu_action(action);
                return;
            }
            self.toolbar.pointer_down(hit.is_inside_menu());
            if hit.is_inside_menu() {
                return;
            }
        }

        if let Some(editing) = self.toolbar.editing() {
            if hit != HitTarget::Chip(editing) {
                self.toolbar.blur_edit();
            }
        }

        match hit {
            HitTarget::Chip(page) => {
                self.pointer.press = Some(PressState {
                    page,
                    column: x,
                    row: y,
                });
            }
            HitTarget::MenuTrigger(page) => self.open_menu(page, now),
            HitTarget::Control(gap) => {
                self.toolbar.control_click(gap);
                self.pointer.reset_hover();
            }
            HitTarget::AddButton => {
                self.toolbar.insert_page(None);
            }
            HitTarget::ScrollLeft | HitTarget::ScrollRight => {
                if let Some(step) = hit.scroll_step() {
                    self.scroll_toolbar(step);
                }
            }
            _ => {}
        }
    }

    /// The wheel scrolls the toolbar while the pointer is over it
    fn handle_wheel(&mut self, x: u16, y: u16, step: isize) {
        if self.is_over_toolbar(x, y) && self.layout.menu.is_none() {
            self.scroll_toolbar(step);
        }
    }

    fn handle_drag(&mut self, x: u16, y: u16) {
        if !self.toolbar.drag().is_dragging() {
            let Some(press) = self.pointer.press else {
                return;
            };
            if (press.column, press.row) == (x, y) {
                return;
            }
            self.pointer.payload = self.toolbar.drag_start(press.page);
            self.pointer.reset_hover();
        }

        let hit = self.hit_test(x, y);
        if let Some(step) = hit.scroll_step() {
            // Dragging across a marker brings hidden pages into reach
            self.scroll_toolbar(step);
            self.toolbar.drag_leave_page();
            self.toolbar.drag_leave_gap();
        } else if let Some(page) = hit.page() {
            self.toolbar.drag_over_page(page);
        } else if let Some(gap) = hit.gap() {
            self.toolbar.drag_over_gap(gap);
        } else {
            self.toolbar.drag_leave_page();
            self.toolbar.drag_leave_gap();
        }
    }

    fn handle_left_up(&mut self, x: u16, y: u16, now: Instant) {
        let press = self.pointer.press.take();
        let payload = self.pointer.payload.take();
        let hit = self.hit_test(x, y);

        if self.toolbar.drag().is_dragging() {
            if let Some(page) = hit.page() {
                self.toolbar.drop_on_page(payload.as_ref(), page, now);
            } else if let Some(gap) = hit.gap() {
                self.toolbar.drop_on_gap(payload.as_ref(), gap, now);
            } else {
                self.toolbar.drag_end();
            }
            return;
        }

        if let Some(press) = press {
            if hit == HitTarget::Chip(press.page) {
                self.toolbar.page_click(press.page);
            }
        }
    }

    fn handle_right_down(&mut self, x: u16, y: u16, now: Instant) {
        let hit = self.hit_test(x, y);
        match hit.page() {
            Some(page) => self.open_menu(page, now),
            None => {
                self.toolbar.pointer_down(hit.is_inside_menu());
            }
        }
    }

    fn open_menu(&mut self, page: PageId, now: Instant) {
        self.toolbar.open_context_menu(page);
        self.menu_opened_at = Some(now);
    }
}
