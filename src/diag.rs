//! Console diagnostics.
//!
//! Everything goes through `web_sys::console` with a `[folio]` prefix and is
//! dropped when the page config turns diagnostics off.

use wasm_bindgen::JsValue;

const PREFIX: &str = "[folio]";

pub(crate) fn debug(enabled: bool, message: &str) {
    if enabled {
        web_sys::console::log_2(&JsValue::from_str(PREFIX), &JsValue::from_str(message));
    }
}

/// Log a message together with a JS value (an element, a URL).
pub(crate) fn debug_value(enabled: bool, message: &str, value: &JsValue) {
    if enabled {
        web_sys::console::log_3(&JsValue::from_str(PREFIX), &JsValue::from_str(message), value);
    }
}

pub(crate) fn warn(enabled: bool, message: &str) {
    if enabled {
        web_sys::console::warn_2(&JsValue::from_str(PREFIX), &JsValue::from_str(message));
    }
}
