//! Event listener handles, removed from their target on drop.

use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
use web_sys::{Event, EventTarget};

/// Passive unless built with [`cancelable`].
pub(crate) type Listener = EventListener;

/// A listener whose handler may call `preventDefault`.
pub(crate) fn cancelable<F>(target: &EventTarget, event: &'static str, handler: F) -> Listener
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new_with_options(
        target,
        event,
        EventListenerOptions::enable_prevent_default(),
        handler,
    )
}

/// A listener that promises never to cancel the event, so the browser need
/// not wait for it before scrolling.
pub(crate) fn passive<F>(target: &EventTarget, event: &'static str, handler: F) -> Listener
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new_with_options(
        target,
        event,
        EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: true,
        },
        handler,
    )
}
