//! In-browser tests: build the portfolio markup, mount the controller and
//! drive it with real DOM events.
//!
//! Run with: wasm-pack test --headless --firefox
#![cfg(target_arch = "wasm32")]
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use std::cell::Cell;
use std::rc::Rc;

use folio::{mount_with_json, unmount, PageController};
use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, Event, EventInit, HtmlButtonElement, HtmlElement, HtmlInputElement,
    KeyboardEvent, KeyboardEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r##"
<header id="header">
  <button class="menu-btn">menu</button>
  <nav id="menu">
    <button class="close-menu">x</button>
    <a class="nav-link" href="#about">About</a>
  </nav>
</header>
<div class="overlay"></div>
<section id="about" class="about-content">About</section>
<section class="skills-content">
  <div class="skill-progress" data-progress="80"></div>
</section>
<div class="tabs">
  <button class="tab-btn" data-tab="web">Web</button>
  <button class="tab-btn" data-tab="ml">ML</button>
  <div class="tab-pane" id="web"></div>
  <div class="tab-pane" id="ml"></div>
</div>
<div class="profiles-container profiles-section">
  <div class="profile-item"><a class="github-link" target="_blank" href="https://github.com/someone">GitHub</a></div>
  <div class="profile-item"><a class="cv-link" target="_blank" href="ftp://files.example.com/cv.pdf">CV</a></div>
</div>
<div class="project-card"><div class="project-overlay"></div></div>
<section class="contact-content">
  <form id="contactForm">
    <input name="name">
    <button type="submit">Send Message</button>
  </form>
</section>
<a href="#" class="plain-top">top</a>
<a href="#missing" class="dangling">nowhere</a>
<div style="height: 4000px"></div>
<a href="#" class="back-to-top">top</a>
"##;

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn setup() -> PageController {
    setup_with(r#"{"diagnostics": false}"#)
}

fn setup_with(json: &str) -> PageController {
    let window = web_sys::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, 0.0);
    document().body().unwrap().set_inner_html(FIXTURE);
    mount_with_json(json).unwrap()
}

fn query(selector: &str) -> Element {
    document().query_selector(selector).unwrap().unwrap()
}

fn click(selector: &str) {
    query(selector).dyn_into::<HtmlElement>().unwrap().click();
}

fn has_class(selector: &str, class: &str) -> bool {
    query(selector).class_list().contains(class)
}

/// Dispatch a bubbling, cancelable event; returns whether a handler
/// cancelled it.
fn dispatch(target: &Element, event_name: &str) -> bool {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict(event_name, &init).unwrap();
    target.dispatch_event(&event).unwrap();
    event.default_prevented()
}

fn press(target: &Element, key: &str) -> bool {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    target.dispatch_event(&event).unwrap();
    event.default_prevented()
}

fn scroll_window_to(top: f64) {
    let window = web_sys::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, top);
    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
}

fn style_of(selector: &str, property: &str) -> String {
    query(selector)
        .dyn_into::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value(property)
        .unwrap()
}

fn submit_button() -> HtmlButtonElement {
    query("#contactForm button").dyn_into::<HtmlButtonElement>().unwrap()
}

#[wasm_bindgen_test]
fn test_menu_button_toggles_menu_overlay_and_body() {
    let page = setup();
    click(".menu-btn");
    assert!(page.menu_open());
    assert!(has_class("#menu", "active"));
    assert!(has_class(".overlay", "active"));
    assert!(has_class("body", "no-scroll"));

    click(".overlay");
    assert!(!page.menu_open());
    assert!(!has_class("#menu", "active"));
    assert!(!has_class("body", "no-scroll"));
}

#[wasm_bindgen_test]
fn test_first_tab_active_after_mount() {
    let page = setup();
    assert_eq!(page.active_tab().as_deref(), Some("web"));
    assert!(has_class("#web", "active"));
    assert!(!has_class("#ml", "active"));

    click(".tab-btn[data-tab=\"ml\"]");
    assert_eq!(page.active_tab().as_deref(), Some("ml"));
    assert!(has_class("#ml", "active"));
    assert!(!has_class("#web", "active"));
}

#[wasm_bindgen_test]
fn test_profile_items_become_focusable() {
    let _page = setup();
    assert_eq!(
        query(".profile-item").get_attribute("tabindex").as_deref(),
        Some("0")
    );
}

#[wasm_bindgen_test]
fn test_submit_enters_sending_and_destroy_restores_button() {
    let page = setup();
    click("#contactForm button[type=\"submit\"]");
    assert_eq!(page.submit_phase(), "sending");

    let button = submit_button();
    assert!(button.disabled());
    assert!(button.inner_html().contains("Sending..."));

    page.destroy();
    assert!(!button.disabled());
    assert_eq!(button.inner_html(), "Send Message");
    assert_eq!(page.submit_phase(), "idle");
}

#[wasm_bindgen_test]
fn test_missing_required_element_fails_mount() {
    document().body().unwrap().set_inner_html("<div></div>");
    assert!(mount_with_json("{}").is_err());
}


#[wasm_bindgen_test]
fn test_dropping_handle_keeps_page_wired() {
    drop(setup());
    click(".menu-btn");
    assert!(has_class("#menu", "active"));
    assert!(has_class("body", "no-scroll"));
}

#[wasm_bindgen_test]
fn test_unmount_detaches_listeners() {
    let page = setup();
    assert!(page.is_mounted());
    assert!(unmount());
    assert!(!page.is_mounted());

    click(".menu-btn");
    assert!(!has_class("#menu", "active"));
    assert!(!unmount());
}

#[wasm_bindgen_test]
fn test_second_mount_replaces_first() {
    let first = setup();
    let second = mount_with_json(r#"{"diagnostics": false}"#).unwrap();
    assert!(!first.is_mounted());
    assert!(second.is_mounted());

    // A stale handle cannot tear down the newer mount.
    first.destroy();
    assert!(second.is_mounted());

    // Only one set of listeners: one click opens the menu.
    click(".menu-btn");
    assert!(second.menu_open());
    assert!(has_class("#menu", "active"));
}

#[wasm_bindgen_test]
fn test_scroll_toggles_header_and_back_to_top() {
    let _page = setup();
    assert!(!has_class("#header", "scrolled"));
    assert!(!has_class(".back-to-top", "active"));

    scroll_window_to(600.0);
    assert!(has_class("#header", "scrolled"));
    assert!(has_class(".back-to-top", "active"));

    scroll_window_to(100.0);
    assert!(has_class("#header", "scrolled"));
    assert!(!has_class(".back-to-top", "active"));

    scroll_window_to(0.0);
    assert!(!has_class("#header", "scrolled"));
    assert!(!has_class(".back-to-top", "active"));
}

#[wasm_bindgen_test]
fn test_anchor_with_target_cancels_default_navigation() {
    let _page = setup();
    assert!(dispatch(&query(".nav-link"), "click"));
    assert!(!dispatch(&query(".plain-top"), "click"));
    assert!(!dispatch(&query(".dangling"), "click"));
    web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);
}

#[wasm_bindgen_test]
fn test_profile_links_get_https_scheme() {
    let _page = setup();
    let cv = query(".cv-link").dyn_into::<web_sys::HtmlAnchorElement>().unwrap();
    assert!(cv.href().starts_with("https://"), "got {}", cv.href());
    let github = query(".github-link")
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .unwrap();
    assert_eq!(github.href(), "https://github.com/someone");
}

#[wasm_bindgen_test]
fn test_enter_and_space_click_the_inner_link() {
    let _page = setup();
    let clicks = Rc::new(Cell::new(0));
    let counter = Rc::clone(&clicks);
    let _count_clicks = EventListener::new_with_options(
        &query(".github-link"),
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            counter.set(counter.get() + 1);
        },
    );

    let item = query(".profile-item");
    assert!(press(&item, "Enter"));
    assert_eq!(clicks.get(), 1);
    assert!(press(&item, " "));
    assert_eq!(clicks.get(), 2);
    assert!(!press(&item, "a"));
    assert_eq!(clicks.get(), 2);
}

#[wasm_bindgen_test]
fn test_focus_outline_follows_focusin_and_focusout() {
    let _page = setup();
    let button = query(".tab-btn");
    dispatch(&button, "focusin");
    assert!(style_of(".tab-btn", "outline").contains("var(--primary-color)"));
    dispatch(&button, "focusout");
    assert_eq!(style_of(".tab-btn", "outline-style"), "none");

    // Not matched by the focusable selector.
    dispatch(&query("#about"), "focusin");
    assert_eq!(style_of("#about", "outline"), "");
}

#[wasm_bindgen_test]
fn test_project_overlay_slides_on_hover() {
    let _page = setup();
    let card = query(".project-card");
    dispatch(&card, "mouseenter");
    assert_eq!(style_of(".project-overlay", "height"), "100%");
    dispatch(&card, "mouseleave");
    let height = style_of(".project-overlay", "height");
    assert!(matches!(height.as_str(), "0" | "0px"), "got {height}");
}

#[wasm_bindgen_test]
async fn test_submit_reaches_sent_and_clears_fields() {
    let page = setup_with(r#"{"diagnostics": false, "form": {"sendingMs": 1, "sentMs": 60000}}"#);
    let input = query("#contactForm input")
        .dyn_into::<HtmlInputElement>()
        .unwrap();
    input.set_value("Ada");
    submit_button().click();
    assert_eq!(page.submit_phase(), "sending");

    TimeoutFuture::new(50).await;
    assert_eq!(page.submit_phase(), "sent");
    assert_eq!(input.value(), "");
    let button = submit_button();
    assert!(button.class_list().contains("success"));
    assert!(button.disabled());
    assert!(button.inner_html().contains("Message Sent!"));

    page.destroy();
    assert!(!button.class_list().contains("success"));
    assert_eq!(button.inner_html(), "Send Message");
}

#[wasm_bindgen_test]
async fn test_submit_returns_to_idle_after_both_delays() {
    let page = setup_with(r#"{"diagnostics": false, "form": {"sendingMs": 1, "sentMs": 1}}"#);
    submit_button().click();

    TimeoutFuture::new(50).await;
    assert_eq!(page.submit_phase(), "idle");
    let button = submit_button();
    assert!(!button.disabled());
    assert!(!button.class_list().contains("success"));
    assert_eq!(button.inner_html(), "Send Message");
}
