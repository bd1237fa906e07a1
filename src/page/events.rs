//! Event wiring for the mounted page.
//!
//! Every handler follows the same shape: borrow the shared state, compute the
//! next projection, drop the borrow, then touch the DOM. DOM mutations can
//! synchronously dispatch further events whose handlers need the state again.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, KeyboardEvent};

use super::listener::{self, Listener};
use super::view::PageView;
use crate::diag;
use crate::ui::{focus, hover, links, scroll, PageState};

type Shared = Rc<RefCell<PageState>>;

/// Menu open/close buttons, overlay, and nav links on narrow viewports.
pub(crate) fn wire_menu(state: &Shared, view: &Rc<PageView>) -> Vec<Listener> {
    let mut listeners = Vec::new();

    for trigger in [&view.menu_button, &view.close_menu_button, &view.overlay] {
        let state = Rc::clone(state);
        let view_for_click = Rc::clone(view);
        listeners.push(Listener::new(trigger, "click", move |_event: &Event| {
            let classes = state.borrow_mut().menu.toggle();
            view_for_click.apply_menu(classes);
        }));
    }

    for link in &view.nav_links {
        let state = Rc::clone(state);
        let view_for_click = Rc::clone(view);
        listeners.push(Listener::new(link, "click", move |_event: &Event| {
            let width = view_for_click.viewport_width();
            let classes = state.borrow_mut().nav_link_clicked(width);
            if let Some(classes) = classes {
                view_for_click.apply_menu(classes);
            }
        }));
    }

    listeners
}

/// Header and back-to-top flags on every scroll event, plus back-to-top click.
pub(crate) fn wire_scroll(state: &Shared, view: &Rc<PageView>) -> Vec<Listener> {
    let mut listeners = Vec::new();

    let state_for_scroll = Rc::clone(state);
    let view_for_scroll = Rc::clone(view);
    listeners.push(listener::passive(&view.window, "scroll", move |_event: &Event| {
        let offset = view_for_scroll.scroll_offset();
        let flags = state_for_scroll.borrow_mut().scrolled_to(offset);
        view_for_scroll.apply_scroll(flags);
    }));

    let view_for_click = Rc::clone(view);
    listeners.push(listener::cancelable(&view.back_to_top, "click", move |event: &Event| {
        event.prevent_default();
        view_for_click.smooth_scroll_to(0.0);
    }));

    listeners
}

/// Smooth scrolling for in-page anchors, leaving room for the fixed header.
pub(crate) fn wire_anchors(state: &Shared, view: &Rc<PageView>) -> Vec<Listener> {
    view.anchors
        .iter()
        .map(|anchor| {
            let state = Rc::clone(state);
            let view = Rc::clone(view);
            let anchor_for_click = anchor.clone();
            listener::cancelable(anchor, "click", move |event: &Event| {
                let Some(href) = anchor_for_click.get_attribute("href") else {
                    return;
                };
                let Some(fragment) = scroll::in_page_fragment(&href) else {
                    return;
                };
                let Ok(Some(target)) = view.document.query_selector(fragment) else {
                    return;
                };
                event.prevent_default();
                let header_offset = state.borrow().config.thresholds.header_offset;
                let top = scroll::anchor_scroll_top(
                    target.get_bounding_client_rect().top(),
                    view.scroll_offset(),
                    header_offset,
                );
                view.smooth_scroll_to(top);
            })
        })
        .collect()
}

/// Tab buttons activate their pane.
pub(crate) fn wire_tabs(state: &Shared, view: &Rc<PageView>) -> Vec<Listener> {
    view.tab_buttons
        .iter()
        .enumerate()
        .map(|(index, button)| {
            let state = Rc::clone(state);
            let view = Rc::clone(view);
            Listener::new(button, "click", move |_event: &Event| {
                let classes = state.borrow_mut().tabs.activate(index);
                if let Some(classes) = classes {
                    view.apply_tabs(&classes);
                }
            })
        })
        .collect()
}

/// Normalize profile link addresses now, and log / correct them on click.
pub(crate) fn wire_profile_links(state: &Shared, view: &Rc<PageView>) -> Vec<Listener> {
    let (diagnostics, domain) = {
        let s = state.borrow();
        (s.config.diagnostics, s.config.link_fix_domain.clone())
    };

    view.profile_links
        .iter()
        .map(|link| {
            if let Some(fixed) = links::normalize_profile_href(&link.href()) {
                link.set_href(&fixed);
            }

            let link_for_click = link.clone();
            let window = view.window.clone();
            let domain = domain.clone();
            listener::cancelable(link, "click", move |event: &Event| {
                let href = link_for_click.href();
                diag::debug_value(diagnostics, "Profile link clicked:", &href.as_str().into());
                let Some(domain) = domain.as_deref() else {
                    return;
                };
                if let Some(url) = links::reopen_over_https(&href, domain) {
                    event.prevent_default();
                    let _ = window.open_with_url_and_target(&url, "_blank");
                }
            })
        })
        .collect()
}

/// Lift on hover and keyboard activation for profile items.
pub(crate) fn wire_profile_items(view: &Rc<PageView>) -> Vec<Listener> {
    let mut listeners = Vec::new();

    for item in &view.profile_items {
        let _ = item.set_attribute("tabindex", hover::PROFILE_ITEM_TABINDEX);

        for (event_name, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let item_for_hover = item.clone();
            listeners.push(Listener::new(item, event_name, move |_event: &Event| {
                let lift = hover::LiftStyle::for_hover(hovered);
                let style = item_for_hover.style();
                let _ = style.set_property("transform", lift.transform);
                let _ = style.set_property("box-shadow", lift.box_shadow);
            }));
        }

        let item_for_key = item.clone();
        listeners.push(listener::cancelable(item, "keydown", move |event: &Event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if !hover::is_activation_key(&key_event.key()) {
                return;
            }
            event.prevent_default();
            if let Some(link) = item_for_key
                .query_selector("a")
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            {
                link.click();
            }
        }));
    }

    listeners
}

/// Overlay slide on project card hover.
pub(crate) fn wire_project_cards(view: &Rc<PageView>) -> Vec<Listener> {
    let mut listeners = Vec::new();

    for card in &view.project_cards {
        let Some(overlay) = &card.overlay else {
            continue;
        };
        for (event_name, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let overlay = overlay.clone();
            listeners.push(Listener::new(&card.card, event_name, move |_event: &Event| {
                let _ = overlay
                    .style()
                    .set_property("height", hover::overlay_height(hovered));
            }));
        }
    }

    listeners
}

/// Outline on focus for anything matching the focusable selector.
///
/// Delegated from the document so elements made focusable after mount are
/// covered too.
pub(crate) fn wire_focus(view: &Rc<PageView>) -> Vec<Listener> {
    [("focusin", true), ("focusout", false)]
        .into_iter()
        .map(|(event_name, focused)| {
            let selector = view.focusable.clone();
            Listener::new(&view.document, event_name, move |event: &Event| {
                let Some(target) = event
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlElement>().ok())
                else {
                    return;
                };
                if target.matches(&selector).unwrap_or(false) {
                    let _ = target.style().set_property("outline", focus::outline(focused));
                }
            })
        })
        .collect()
}
