//! Hover and keyboard micro-interactions on profile items and project cards.
//!
//! Enter/leave are symmetric pairs of inline styles; there is no
//! transition state to track.

/// Inline styles for a profile item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiftStyle {
    pub transform: &'static str,
    pub box_shadow: &'static str,
}

impl LiftStyle {
    pub const RAISED: Self = Self {
        transform: "translateY(-5px)",
        box_shadow: "0 10px 20px rgba(0,0,0,0.1)",
    };

    pub const REST: Self = Self {
        transform: "none",
        box_shadow: "none",
    };

    pub fn for_hover(hovered: bool) -> Self {
        if hovered {
            Self::RAISED
        } else {
            Self::REST
        }
    }
}

/// Inline `height` of a project card's overlay.
pub fn overlay_height(hovered: bool) -> &'static str {
    if hovered {
        "100%"
    } else {
        "0"
    }
}

/// Tab stop given to profile items so they are keyboard reachable.
pub const PROFILE_ITEM_TABINDEX: &str = "0";

/// Keys that activate a focused profile item's link.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}
