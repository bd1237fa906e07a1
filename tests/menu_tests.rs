//! Mobile menu toggling tests.
//!
//! The menu, overlay and body scroll lock must always agree, and nav-link
//! clicks only toggle the menu on narrow viewports.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use folio::ui::MenuState;
use test_case::test_case;

const BREAKPOINT: f64 = 768.0;

#[test]
fn test_toggle_twice_restores_original_flags() {
    let mut menu = MenuState::new();
    let before = menu.classes();
    menu.toggle();
    let after = menu.toggle();
    assert_eq!(before, after);
    assert!(!menu.is_open());
}

#[test]
fn test_toggle_twice_from_open() {
    let mut menu = MenuState::new();
    menu.toggle();
    let open = menu.classes();
    menu.toggle();
    assert_eq!(menu.toggle(), open);
}

#[test]
fn test_flags_always_agree() {
    let mut menu = MenuState::new();
    for _ in 0..5 {
        let classes = menu.toggle();
        assert_eq!(classes.menu_active, classes.overlay_active);
        assert_eq!(classes.overlay_active, classes.scroll_locked);
        assert_eq!(classes.menu_active, menu.is_open());
    }
}

#[test_case(320.0 ; "phone")]
#[test_case(768.0 ; "exactly at breakpoint")]
fn test_nav_link_closes_open_menu_on_narrow_viewport(width: f64) {
    let mut menu = MenuState::new();
    menu.toggle();
    let classes = menu.nav_link_clicked(width, BREAKPOINT).expect("menu should close");
    assert!(!classes.menu_active);
    assert!(!classes.scroll_locked);
    assert!(!menu.is_open());
}

#[test_case(769.0 ; "just above breakpoint")]
#[test_case(1440.0 ; "desktop")]
fn test_nav_link_ignored_on_wide_viewport(width: f64) {
    let mut menu = MenuState::new();
    menu.toggle();
    assert_eq!(menu.nav_link_clicked(width, BREAKPOINT), None);
    assert!(menu.is_open());
}

#[test]
fn test_nav_link_toggles_closed_menu_on_narrow_viewport() {
    let mut menu = MenuState::new();
    let classes = menu
        .nav_link_clicked(320.0, BREAKPOINT)
        .expect("narrow click should toggle");
    assert!(classes.menu_active);
    assert!(classes.overlay_active);
    assert!(classes.scroll_locked);
    assert!(menu.is_open());

    menu.nav_link_clicked(320.0, BREAKPOINT);
    assert!(!menu.is_open());
}

#[test]
fn test_nav_link_leaves_closed_menu_on_wide_viewport() {
    let mut menu = MenuState::new();
    assert_eq!(menu.nav_link_clicked(1024.0, BREAKPOINT), None);
    assert!(!menu.is_open());
}
