//! End-to-end interaction scenarios for the toolbar

use std::time::{Duration, Instant};

use proptest::prelude::*;

use super::*;
use crate::geometry::{place_menu, Bounds, PlacementConfig, VerticalOrigin};

fn id(raw: u64) -> PageId {
    PageId::new(raw)
}

fn order(toolbar: &Toolbar) -> Vec<(String, u64)> {
    toolbar
        .pages()
        .iter()
        .map(|p| (p.name.clone(), p.id.get()))
        .collect()
}

fn pairs(items: &[(&str, u64)]) -> Vec<(String, u64)> {
    items.iter().map(|(n, i)| (n.to_string(), *i)).collect()
}

#[test]
fn test_move_first_page_to_gap_three() {
    let mut toolbar = Toolbar::seeded();
    assert!(toolbar.move_page(id(1), 3));
    assert_eq!(
        order(&toolbar),
        pairs(&[("Details", 2), ("Other", 3), ("Info", 1), ("Ending", 4)])
    );
}

#[test]
fn test_append_page_gets_next_id_and_focus() {
    let mut toolbar = Toolbar::seeded();
    let new_id = toolbar.insert_page(None);
    assert_eq!(new_id.to_string(), "5");
    assert_eq!(toolbar.pages().id_at(4), Some(new_id));
    assert_eq!(toolbar.pages().get(new_id).unwrap().name, "New Page 5");
    assert_eq!(toolbar.active(), Some(new_id));
}

#[test]
fn test_gap_reenter_within_delay_never_hides() {
    let start = Instant::now();
    let mut toolbar = Toolbar::seeded();

    toolbar.gap_enter(2);
    toolbar.gap_leave(start);
    assert!(!toolbar.tick(start + Duration::from_millis(50)));
    assert!(toolbar.affordance().is_visible(2));

    toolbar.gap_enter(2);
    assert!(toolbar.affordance().is_visible(2));
    assert!(!toolbar.tick(start + Duration::from_millis(500)));
    assert!(toolbar.affordance().is_visible(2));
}

#[test]
fn test_menu_near_top_flips_below() {
    let mut toolbar = Toolbar::seeded();
    toolbar.open_context_menu(id(3));
    assert_eq!(toolbar.menu().target, Some(id(3)));

    // Page 3 sits in a toolbar pinned to the top of the viewport
    let anchor = Bounds::new(260, 12, 90, 32);
    let placement = place_menu(Some(anchor), 192, 260, 1440, PlacementConfig::default());
    assert_eq!(placement.origin.vertical, VerticalOrigin::Top);
    assert_eq!(placement.y, anchor.bottom() + 9);
    assert_eq!(placement.origin.to_string(), "top left");
}

#[test]
fn test_drop_onto_itself_keeps_order() {
    let now = Instant::now();
    let mut toolbar = Toolbar::seeded();
    let payload = toolbar.drag_start(id(2));
    toolbar.drag_over_page(id(2));

    assert!(!toolbar.drop_on_page(payload.as_ref(), id(2), now));
    assert_eq!(toolbar.pages().ids(), vec![id(1), id(2), id(3), id(4)]);
    assert!(!toolbar.drag().is_dragging());
    assert_eq!(toolbar.drag().target, None);
    assert_eq!(toolbar.drag().dropped, None);
}

#[test]
fn test_delete_last_active_page_selects_previous() {
    let mut toolbar = Toolbar::seeded();
    toolbar.page_click(id(4));
    toolbar.delete_page(id(4));
    assert_eq!(toolbar.active(), Some(id(3)));
}

#[test]
fn test_delete_inactive_page_keeps_selection() {
    let mut toolbar = Toolbar::seeded();
    toolbar.page_click(id(3));
    toolbar.delete_page(id(1));
    assert_eq!(toolbar.active(), Some(id(3)));
}

#[test]
fn test_deleting_everything_clears_selection() {
    let mut toolbar = Toolbar::seeded();
    for raw in 1..=4 {
        toolbar.delete_page(id(raw));
    }
    assert!(toolbar.pages().is_empty());
    assert_eq!(toolbar.active(), None);

    let fresh = toolbar.insert_page(None);
    assert_eq!(fresh, id(5));
    assert_eq!(toolbar.active(), Some(fresh));
}

#[test]
fn test_deleting_page_clears_edit_and_hover() {
    let mut toolbar = Toolbar::seeded();
    toolbar.begin_rename(id(2));
    toolbar.hover_page(Some(id(2)));
    toolbar.delete_page(id(2));

    assert_eq!(toolbar.editing(), None);
    assert_eq!(toolbar.hovered(), None);
}

#[test]
fn test_duplicate_keeps_active_page() {
    let mut toolbar = Toolbar::seeded();
    toolbar.page_click(id(2));
    let copy = toolbar.duplicate_page(id(1)).unwrap();
    assert_eq!(toolbar.pages().index_of(copy), Some(1));
    assert_eq!(toolbar.active(), Some(id(2)));
}

#[test]
fn test_new_drag_cancels_pending_hide() {
    let start = Instant::now();
    let mut toolbar = Toolbar::seeded();
    toolbar.gap_enter(1);
    toolbar.gap_leave(start);
    toolbar.drag_start(id(1));

    assert!(!toolbar.is_timer_pending(TimerKey::HideAffordance));
    assert_eq!(toolbar.affordance().visible, None);
}

#[derive(Debug, Clone)]
enum Step {
    Insert(Option<usize>),
    Delete(usize),
    Click(usize),
    Duplicate(usize),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        proptest::option::of(0usize..6).prop_map(Step::Insert),
        (0usize..6).prop_map(Step::Delete),
        (0usize..6).prop_map(Step::Click),
        (0usize..6).prop_map(Step::Duplicate),
    ]
}

proptest! {
    #[test]
    fn prop_active_always_valid(steps in proptest::collection::vec(step_strategy(), 0..50)) {
        let mut toolbar = Toolbar::seeded();
        for step in steps {
            match step {
                Step::Insert(at) => { toolbar.insert_page(at); }
                Step::Delete(i) => {
                    if let Some(id) = toolbar.pages().id_at(i) { toolbar.delete_page(id); }
                }
                Step::Click(i) => {
                    if let Some(id) = toolbar.pages().id_at(i) { toolbar.page_click(id); }
                }
                Step::Duplicate(i) => {
                    if let Some(id) = toolbar.pages().id_at(i) { toolbar.duplicate_page(id); }
                }
            }
            match toolbar.active() {
                None => prop_assert!(toolbar.pages().is_empty()),
                Some(id) => prop_assert!(toolbar.pages().contains(id)),
            }
        }
    }
}
