//! Focus outline for keyboard users.

/// Inline `outline` while an element has focus.
pub const FOCUS_OUTLINE: &str = "2px solid var(--primary-color)";

/// Inline `outline` after the element loses focus.
pub const BLUR_OUTLINE: &str = "none";

pub fn outline(focused: bool) -> &'static str {
    if focused {
        FOCUS_OUTLINE
    } else {
        BLUR_OUTLINE
    }
}
