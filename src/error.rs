//! Structured error types for folio.
//!
//! Binding the page view and loading configuration are the only fallible
//! steps; everything after mount is cosmetic and never surfaces an error.

/// All errors that can occur while configuring and mounting the page controller.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    /// A required element is absent from the document.
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// A DOM call failed (bad selector, no window, no document).
    #[error("DOM error: {0}")]
    Dom(String),

    /// Configuration values out of range.
    #[error("Invalid config: {0}")]
    Config(String),

    /// Configuration JSON could not be decoded.
    #[error("Config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for FolioError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<FolioError> for wasm_bindgen::JsValue {
    fn from(e: FolioError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
