//! Simulated contact form submission with cancellable timers.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use web_sys::{Element, Event};

use super::listener::{self, Listener};
use super::view::PageView;
use crate::diag;
use crate::ui::{PageState, Step};

/// Owns the pending delay of a running submission.
///
/// Dropping (or [`ContactForm::cancel`]) clears the browser timer, so no
/// callback outlives the mount.
pub(crate) struct ContactForm {
    pending: Rc<RefCell<Option<Timeout>>>,
    state: Rc<RefCell<PageState>>,
    view: Rc<PageView>,
    _submit: Listener,
}

impl ContactForm {
    /// Wire the form's submit event. Returns `None` when the page has no
    /// contact form.
    pub(crate) fn wire(state: &Rc<RefCell<PageState>>, view: &Rc<PageView>) -> Option<Self> {
        let contact = view.contact.as_ref()?;
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

        let weak_state = Rc::downgrade(state);
        let weak_view = Rc::downgrade(view);
        let weak_pending = Rc::downgrade(&pending);
        let submit = listener::cancelable(&contact.form, "submit", move |event: &Event| {
            event.prevent_default();
            let (Some(state), Some(view)) = (weak_state.upgrade(), weak_view.upgrade()) else {
                return;
            };
            let Some(contact) = &view.contact else {
                return;
            };

            let label = contact.submit.inner_html();
            let step = state.borrow_mut().submit(&label);
            let Some(step) = step else {
                return;
            };
            let diagnostics = state.borrow().config.diagnostics;
            diag::debug(
                diagnostics,
                &format!(
                    "contact form submitted with {} named fields",
                    named_field_count(&contact.form)
                ),
            );
            run_step(&state, &view, &weak_pending, &step);
        });

        Some(Self {
            pending,
            state: Rc::clone(state),
            view: Rc::clone(view),
            _submit: submit,
        })
    }

    /// Abandon a running submission: clear the timer and restore the button.
    pub(crate) fn cancel(&self) {
        drop(self.pending.borrow_mut().take());
        let (button, success_class) = {
            let mut s = self.state.borrow_mut();
            (s.form.cancel(), s.config.form.success_class.clone())
        };
        if let Some(button) = button {
            self.view.apply_button(&button, &success_class);
        }
    }
}

/// Apply one transition and schedule the next.
fn run_step(
    state: &Rc<RefCell<PageState>>,
    view: &Rc<PageView>,
    pending: &Weak<RefCell<Option<Timeout>>>,
    step: &Step,
) {
    let success_class = state.borrow().config.form.success_class.clone();
    if step.reset_fields {
        if let Some(contact) = &view.contact {
            contact.form.reset();
        }
    }
    view.apply_button(&step.button, &success_class);

    let Some(delay) = step.next_delay_ms else {
        return;
    };
    let Some(slot) = pending.upgrade() else {
        return;
    };
    let weak_state = Rc::downgrade(state);
    let weak_view = Rc::downgrade(view);
    let weak_pending = Weak::clone(pending);
    let timeout = Timeout::new(delay, move || {
        let (Some(state), Some(view)) = (weak_state.upgrade(), weak_view.upgrade()) else {
            return;
        };
        let next = state.borrow_mut().submit_elapsed();
        if let Some(next) = next {
            run_step(&state, &view, &weak_pending, &next);
        }
    });
    *slot.borrow_mut() = Some(timeout);
}

fn named_field_count(form: &Element) -> u32 {
    form.query_selector_all("input[name], textarea[name], select[name]")
        .map(|list| list.length())
        .unwrap_or(0)
}
