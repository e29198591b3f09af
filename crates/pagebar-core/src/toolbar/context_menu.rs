//! Page context menu
//!
//! `hidden -> visible -> hidden`. Opening targets a page and activates it;
//! choosing an action hides the menu before the action runs. Placement is
//! derived from the anchor each time it is drawn, see [`crate::geometry`].

use super::Toolbar;
use crate::pages::PageId;

/// Actions offered by the context menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    SetAsFirst,
    Rename,
    Copy,
    Duplicate,
    Delete,
}

impl MenuAction {
    pub const ALL: [MenuAction; 5] = [
        MenuAction::SetAsFirst,
        MenuAction::Rename,
        MenuAction::Copy,
        MenuAction::Duplicate,
        MenuAction::Delete,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::SetAsFirst => "Set as first page",
            MenuAction::Rename => "Rename",
            MenuAction::Copy => "Copy",
            MenuAction::Duplicate => "Duplicate",
            MenuAction::Delete => "Delete",
        }
    }

    /// Rendered apart from the others, in a warning colour
    pub fn is_destructive(&self) -> bool {
        matches!(self, MenuAction::Delete)
    }
}

/// Context menu visibility and target
#[derive(Debug, Clone, Default)]
pub struct ContextMenuState {
    pub visible: bool,
    pub target: Option<PageId>,
    /// Index into [`MenuAction::ALL`] for keyboard navigation
    pub highlighted: usize,
}

impl ContextMenuState {
    pub fn highlighted_action(&self) -> MenuAction {
        MenuAction::ALL[self.highlighted.min(MenuAction::ALL.len() - 1)]
    }

    pub(super) fn hide(&mut self) {
        self.visible = false;
        self.target = None;
    }
}

impl Toolbar {
    /// Right-click (or the "more" trigger) on the chip for `id`
    pub fn open_context_menu(&mut self, id: PageId) {
        if !self.pages.contains(id) {
            tracing::debug!(page = %id, "Ignoring context menu for unknown page");
            return;
        }
        self.active = Some(id);
        self.menu.visible = true;
        self.menu.target = Some(id);
        self.menu.highlighted = 0;
        self.reconcile();
    }

    pub fn hide_context_menu(&mut self) {
        self.menu.hide();
    }

    /// Pointer pressed somewhere while the menu may be open. Returns true if
    /// the press dismissed the menu.
    pub fn pointer_down(&mut self, inside_menu: bool) -> bool {
        if self.menu.visible && !inside_menu {
            self.menu.hide();
            return true;
        }
        false
    }

    /// Run `action` against the menu's target page
    pub fn select_menu_action(&mut self, action: MenuAction) {
        let target = self.menu.target;
        self.menu.hide();

        let Some(id) = target else {
            tracing::debug!(?action, "Menu action without a target");
            return;
        };

        match action {
            MenuAction::SetAsFirst => {
                self.set_as_first(id);
            }
            MenuAction::Rename => self.begin_rename(id),
            MenuAction::Copy => {
                tracing::info!(page = %id, "Copy requested; copying pages is not supported yet");
            }
            MenuAction::Duplicate => {
                self.duplicate_page(id);
            }
            MenuAction::Delete => {
                self.delete_page(id);
            }
        }
    }

    pub fn highlight_next(&mut self) {
        self.menu.highlighted = (self.menu.highlighted + 1) % MenuAction::ALL.len();
    }

    pub fn highlight_previous(&mut self) {
        let len = MenuAction::ALL.len();
        self.menu.highlighted = (self.menu.highlighted + len - 1) % len;
    }

    /// Pointer over the menu row at `index`
    pub fn highlight_action(&mut self, index: usize) {
        if index < MenuAction::ALL.len() {
            self.menu.highlighted = index;
        }
    }

    /// Run the highlighted action, if the menu is open
    pub fn activate_highlighted(&mut self) {
        if self.menu.visible {
            let action = self.menu.highlighted_action();
            self.select_menu_action(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u64) -> PageId {
        PageId::new(raw)
    }

    fn names(toolbar: &Toolbar) -> Vec<String> {
        toolbar.pages().iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_open_targets_and_activates() {
        let mut toolbar = Toolbar::seeded();
        toolbar.open_context_menu(id(3));
        assert!(toolbar.menu().visible);
        assert_eq!(toolbar.menu().target, Some(id(3)));
        assert_eq!(toolbar.active(), Some(id(3)));
    }

    #[test]
    fn test_outside_press_dismisses() {
        let mut toolbar = Toolbar::seeded();
        toolbar.open_context_menu(id(2));
        assert!(!toolbar.pointer_down(true));
        assert!(toolbar.menu().visible);

        assert!(toolbar.pointer_down(false));
        assert!(!toolbar.menu().visible);
        assert_eq!(toolbar.menu().target, None);
        assert!(!toolbar.pointer_down(false));
    }

    #[test]
    fn test_set_as_first_action() {
        let mut toolbar = Toolbar::seeded();
        toolbar.open_context_menu(id(4));
        toolbar.select_menu_action(MenuAction::SetAsFirst);
        assert_eq!(names(&toolbar), vec!["Ending", "Info", "Details", "Other"]);
        assert!(!toolbar.menu().visible);
    }

    #[test]
    fn test_rename_action_enters_edit_mode() {
        let mut toolbar = Toolbar::seeded();
        toolbar.open_context_menu(id(2));
        toolbar.select_menu_action(MenuAction::Rename);
        assert_eq!(toolbar.editing(), Some(id(2)));
    }

    #[test]
    fn test_copy_action_changes_nothing() {
        let mut toolbar = Toolbar::seeded();
        toolbar.open_context_menu(id(2));
        toolbar.select_menu_action(MenuAction::Copy);
        assert_eq!(toolbar.pages().len(), 4);
        assert!(!toolbar.menu().visible);
    }

    #[test]
    fn test_duplicate_action() {
        let mut toolbar = Toolbar::seeded();
        toolbar.open_context_menu(id(3));
        toolbar.select_menu_action(MenuAction::Duplicate);
        assert_eq!(
            names(&toolbar),
            vec!["Info", "Details", "Other", "Other (Copy)", "Ending"]
        );
        assert_eq!(toolbar.active(), Some(id(3)));
    }

    #[test]
    fn test_delete_action_moves_selection() {
        let mut toolbar = Toolbar::seeded();
        toolbar.open_context_menu(id(2));
        toolbar.select_menu_action(MenuAction::Delete);
        assert_eq!(names(&toolbar), vec!["Info", "Other", "Ending"]);
        assert_eq!(toolbar.active(), Some(id(3)));
    }

    #[test]
    fn test_action_without_target_is_noop() {
        let mut toolbar = Toolbar::seeded();
        toolbar.select_menu_action(MenuAction::Delete);
        assert_eq!(toolbar.pages().len(), 4);
    }

    #[test]
    fn test_keyboard_highlight_wraps() {
        let mut toolbar = Toolbar::seeded();
        toolbar.open_context_menu(id(1));
        toolbar.highlight_previous();
        assert_eq!(toolbar.menu().highlighted_action(), MenuAction::Delete);
        toolbar.highlight_next();
        toolbar.highlight_next();
        assert_eq!(toolbar.menu().highlighted_action(), MenuAction::Rename);

        toolbar.activate_highlighted();
        assert_eq!(toolbar.editing(), Some(id(1)));
    }
}
