//! folio - interaction layer for a static portfolio page
//!
//! Compiled to WebAssembly and mounted once the document is ready:
//! - Mobile menu with overlay and scroll lock
//! - Header and back-to-top styling driven by scroll offset
//! - Smooth scrolling to in-page anchors below a fixed header
//! - Tabs, skill bar fill and section reveal animations
//! - Profile link correction, hover and keyboard affordances
//! - A simulated contact form submission
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { mount, mountWithConfig, unmount } from 'folio';
//! await init();
//! document.addEventListener('DOMContentLoaded', () => {
//!     mount();
//!     // or: mountWithConfig({ thresholds: { headerOffset: 96 } })
//! });
//! // later, e.g. before swapping the page out:
//! unmount();
//! ```
//!
//! The page stays wired until `unmount()` or the next mount; the returned
//! handle only reads state and may be dropped freely.
//!
//! The interaction model itself lives in [`ui`] and has no DOM dependency.

pub mod config;
pub mod error;
pub mod ui;

// Browser bindings (wasm32 only)
#[cfg(target_arch = "wasm32")]
mod diag;
#[cfg(target_arch = "wasm32")]
pub mod page;

use wasm_bindgen::prelude::*;

pub use config::PageConfig;
pub use error::{FolioError, Result};
#[cfg(target_arch = "wasm32")]
pub use page::PageController;

/// Mount the page with the default configuration, replacing any earlier mount.
///
/// # Errors
/// Returns an error if a required element is missing from the document.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn mount() -> std::result::Result<PageController, JsValue> {
    Ok(PageController::mount(PageConfig::default())?)
}

/// Mount the page with a partial configuration object; missing fields
/// take their defaults.
///
/// # Errors
/// Returns an error if the config is invalid or a required element is missing.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = "mountWithConfig")]
pub fn mount_with_config(config: JsValue) -> std::result::Result<PageController, JsValue> {
    let config: PageConfig = if config.is_undefined() || config.is_null() {
        PageConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Config error: {e}")))?
    };
    Ok(PageController::mount(config)?)
}

/// Mount the page with a JSON configuration string.
///
/// # Errors
/// Returns an error if the JSON is invalid or a required element is missing.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = "mountWithJson")]
pub fn mount_with_json(json: &str) -> std::result::Result<PageController, JsValue> {
    Ok(PageController::mount(PageConfig::from_json(json)?)?)
}

/// Detach every listener and observer of the mounted page and cancel a
/// pending submission. Returns `false` when nothing was mounted.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn unmount() -> bool {
    page::unmount()
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
