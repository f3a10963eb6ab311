use super::*;

// =============================================================
// Scroll threshold
// =============================================================

#[test]
fn starts_at_top_with_menu_closed() {
    let nav = NavState::default();
    assert!(!nav.is_scrolled());
    assert!(!nav.is_menu_open());
    assert_eq!(nav.navbar_class(), "navbar");
}

#[test]
fn exactly_threshold_is_not_scrolled() {
    let mut nav = NavState::default();
    assert!(!nav.on_scroll(50.0));
    assert!(!nav.is_scrolled());
}

#[test]
fn past_threshold_is_scrolled() {
    let mut nav = NavState::default();
    assert!(nav.on_scroll(51.0));
    assert!(nav.is_scrolled());
    assert_eq!(nav.navbar_class(), "navbar navbar-scrolled");
}

#[test]
fn scroll_change_reported_once() {
    let mut nav = NavState::default();
    assert!(nav.on_scroll(300.0));
    assert!(!nav.on_scroll(400.0));
    assert!(nav.on_scroll(0.0));
    assert!(!nav.is_scrolled());
}

// =============================================================
// Mobile menu
// =============================================================

#[test]
fn toggle_opens_then_closes() {
    let mut nav = NavState::default();
    nav.toggle_menu();
    assert_eq!(nav.menu(), MenuState::Open);
    assert_eq!(nav.toggle_label(), "Close menu");
    nav.toggle_menu();
    assert_eq!(nav.menu(), MenuState::Closed);
    assert_eq!(nav.toggle_label(), "Open menu");
}

#[test]
fn link_activation_closes_open_menu() {
    let mut nav = NavState::default();
    nav.toggle_menu();
    nav.activate_link();
    assert!(!nav.is_menu_open());
}

#[test]
fn link_activation_keeps_closed_menu_closed() {
    let mut nav = NavState::default();
    nav.activate_link();
    assert!(!nav.is_menu_open());
}

#[test]
fn menu_state_is_independent_of_scroll() {
    let mut nav = NavState::default();
    nav.toggle_menu();
    nav.on_scroll(500.0);
    assert!(nav.is_menu_open());
    assert!(nav.is_scrolled());
}
