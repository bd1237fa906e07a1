//! One-shot intersection observers for the skill bars and animated sections.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::view::PageView;
use crate::error::Result;
use crate::ui::PageState;

type Callback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// An `IntersectionObserver` and the closure it calls; disconnected on drop.
pub(crate) struct Observer {
    observer: IntersectionObserver,
    _callback: Callback,
}

impl Observer {
    fn new<F>(threshold: f64, mut handler: F) -> Result<Self>
    where
        F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    {
        let callback: Callback = Closure::wrap(Box::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        handler(&entry, &observer);
                    }
                }
            },
        )
            as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Fill every skill bar the first time the skills section is visible enough.
///
/// Returns `None` when the page has no skills section.
pub(crate) fn observe_skills(
    state: &Rc<RefCell<PageState>>,
    view: &Rc<PageView>,
) -> Result<Option<Observer>> {
    let Some(section) = &view.skills_section else {
        return Ok(None);
    };
    let threshold = state.borrow().config.thresholds.skills_visibility;
    let weak_state = Rc::downgrade(state);
    let weak_view = Rc::downgrade(view);
    let observer = Observer::new(threshold, move |entry, observer| {
        let (Some(state), Some(view)) = (weak_state.upgrade(), weak_view.upgrade()) else {
            return;
        };
        let fire = state
            .borrow_mut()
            .skills_observed(entry.is_intersecting(), entry.intersection_ratio());
        if fire {
            view.fill_skill_bars();
            observer.unobserve(&entry.target());
        }
    })?;
    observer.observer.observe(section);
    Ok(Some(observer))
}

/// Add the animate class to each section the first time it is visible enough.
///
/// The observer disconnects itself once every section has been revealed.
pub(crate) fn observe_sections(
    state: &Rc<RefCell<PageState>>,
    view: &Rc<PageView>,
) -> Result<Option<Observer>> {
    if view.animated_sections.is_empty() {
        return Ok(None);
    }
    let threshold = state.borrow().config.thresholds.section_visibility;
    let weak_state = Rc::downgrade(state);
    let weak_view = Rc::downgrade(view);
    let observer = Observer::new(threshold, move |entry, observer| {
        let (Some(state), Some(view)) = (weak_state.upgrade(), weak_view.upgrade()) else {
            return;
        };
        let target = entry.target();
        let Some(index) = view.section_index(&target) else {
            return;
        };
        let (fire, complete) = {
            let mut s = state.borrow_mut();
            let fire = s.section_observed(index, entry.is_intersecting(), entry.intersection_ratio());
            (fire, s.sections.is_complete())
        };
        if fire {
            view.reveal_section(index);
            observer.unobserve(&target);
        }
        if complete {
            observer.disconnect();
        }
    })?;
    for section in &view.animated_sections {
        observer.observer.observe(section);
    }
    Ok(Some(observer))
}
