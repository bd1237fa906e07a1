//! Page mounting and the `PageController` handle exported to JavaScript.
//!
//! Mounting binds the [`view::PageView`] once, builds the shared
//! [`PageState`], and wires each behavior:
//! - Mobile menu toggling and scroll lock
//! - Header / back-to-top scroll styling and anchor smooth scrolling
//! - Tab switching
//! - Skill bar and section reveal animations
//! - Profile link correction, hover and keyboard micro-interactions
//! - Simulated contact form submission
//!
//! The mounted page owns all listeners, observers and timers and lives in a
//! thread-local slot until [`unmount`] (or a later mount) replaces it. The
//! [`PageController`] handed to JavaScript only reads state, so the page stays
//! wired however long the JS side keeps the handle.

mod contact;
mod events;
mod listener;
mod observers;
mod view;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::PageConfig;
use crate::diag;
use crate::error::{FolioError, Result};
use crate::ui::{PageState, TabState};

use contact::ContactForm;
use listener::Listener;
use observers::Observer;
use view::PageView;

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

/// Everything wired into the document by one mount.
struct Mounted {
    state: Rc<RefCell<PageState>>,
    _view: Rc<PageView>,
    listeners: Vec<Listener>,
    observers: Vec<Observer>,
    contact: Option<ContactForm>,
}

impl Mounted {
    fn new(config: PageConfig) -> Result<Self> {
        console_error_panic_hook::set_once();
        config.validate()?;

        let window =
            web_sys::window().ok_or_else(|| FolioError::Dom("no global window".to_string()))?;
        let view = Rc::new(PageView::bind(window, &config)?);
        let tabs = TabState::new(view.tab_targets(), view.tab_pane_ids());
        let state = Rc::new(RefCell::new(PageState::new(
            config,
            tabs,
            view.animated_sections.len(),
        )));

        let mut listeners = Vec::new();
        listeners.extend(events::wire_menu(&state, &view));
        listeners.extend(events::wire_scroll(&state, &view));
        listeners.extend(events::wire_tabs(&state, &view));
        listeners.extend(events::wire_profile_links(&state, &view));
        listeners.extend(events::wire_profile_items(&view));
        listeners.extend(events::wire_anchors(&state, &view));
        listeners.extend(events::wire_project_cards(&view));
        listeners.extend(events::wire_focus(&view));

        let observers: Vec<Observer> = [
            observers::observe_skills(&state, &view)?,
            observers::observe_sections(&state, &view)?,
        ]
        .into_iter()
        .flatten()
        .collect();

        let contact = ContactForm::wire(&state, &view);

        // Initial state: first tab active, scroll flags matching the current offset.
        let (tab_classes, scroll_flags, diagnostics) = {
            let mut s = state.borrow_mut();
            let tab_classes = s.tabs.activate_first();
            let scroll_flags = s.scrolled_to(view.scroll_offset());
            (tab_classes, scroll_flags, s.config.diagnostics)
        };
        if let Some(classes) = tab_classes {
            view.apply_tabs(&classes);
        }
        view.apply_scroll(scroll_flags);

        diag::debug(
            diagnostics,
            &format!(
                "mounted: {} tabs, {} skill bars, {} animated sections, contact form {}",
                view.tab_buttons.len(),
                view.skill_bars.len(),
                view.animated_sections.len(),
                if contact.is_some() { "wired" } else { "absent" },
            ),
        );

        Ok(Self {
            state,
            _view: view,
            listeners,
            observers,
            contact,
        })
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        if let Some(contact) = self.contact.take() {
            contact.cancel();
        }
        self.observers.clear();
        self.listeners.clear();
    }
}

/// Tear down the current mount, if any. Returns whether anything was mounted.
///
/// The page keeps whatever classes and styles it has.
pub(crate) fn unmount() -> bool {
    let previous = MOUNTED.with(|slot| slot.borrow_mut().take());
    previous.is_some()
}

/// Handle to the mounted page, exported to JavaScript.
///
/// Holds no listeners; dropping it leaves the page wired.
#[wasm_bindgen]
pub struct PageController {
    state: Rc<RefCell<PageState>>,
}

impl PageController {
    pub(crate) fn mount(config: PageConfig) -> Result<Self> {
        let mounted = Mounted::new(config)?;
        let handle = Self {
            state: Rc::clone(&mounted.state),
        };
        let previous = MOUNTED.with(|slot| slot.borrow_mut().replace(mounted));
        drop(previous);
        Ok(handle)
    }
}

#[wasm_bindgen]
impl PageController {
    /// Whether the mobile menu is open.
    #[wasm_bindgen(js_name = "menuOpen")]
    pub fn menu_open(&self) -> bool {
        self.state.borrow().menu.is_open()
    }

    /// Id of the active tab pane, if any.
    #[wasm_bindgen(js_name = "activeTab")]
    pub fn active_tab(&self) -> Option<String> {
        self.state.borrow().tabs.active_pane_id().map(str::to_string)
    }

    /// `"idle"`, `"sending"` or `"sent"`.
    #[wasm_bindgen(js_name = "submitPhase")]
    pub fn submit_phase(&self) -> String {
        self.state.borrow().form.phase().as_str().to_string()
    }

    /// Whether this handle belongs to the page that is currently mounted.
    #[wasm_bindgen(js_name = "isMounted")]
    pub fn is_mounted(&self) -> bool {
        MOUNTED.with(|slot| {
            slot.borrow()
                .as_ref()
                .is_some_and(|mounted| Rc::ptr_eq(&mounted.state, &self.state))
        })
    }

    /// Unmount the page this handle came from. A handle from an earlier,
    /// already replaced mount does nothing.
    pub fn destroy(&self) {
        if self.is_mounted() {
            unmount();
        }
    }
}
