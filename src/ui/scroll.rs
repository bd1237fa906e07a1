//! Scroll-reactive styling and anchor scroll targets.

use crate::config::Thresholds;

/// Flags derived from the current vertical scroll offset.
///
/// Recomputed from scratch on every scroll event; nothing is remembered
/// between events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// `scrolled` on the header.
    pub header_scrolled: bool,
    /// `active` on the back-to-top control.
    pub back_to_top_visible: bool,
}

impl ScrollState {
    pub fn at_offset(offset: f64, thresholds: &Thresholds) -> Self {
        Self {
            header_scrolled: offset > thresholds.header_scrolled,
            back_to_top_visible: offset > thresholds.back_to_top,
        }
    }
}

/// Returns the fragment selector for an in-page anchor, or `None` when the
/// link should keep its default navigation (`"#"` alone or not a fragment).
pub fn in_page_fragment(href: &str) -> Option<&str> {
    if href.starts_with('#') && href != "#" {
        Some(href)
    } else {
        None
    }
}

/// Document offset to smooth-scroll to so the target sits just below the
/// fixed header.
///
/// `element_top` is the target's viewport-relative top and `page_scroll`
/// the current vertical scroll of the page.
pub fn anchor_scroll_top(element_top: f64, page_scroll: f64, header_offset: f64) -> f64 {
    element_top + page_scroll - header_offset
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_subtracts_header() {
        assert_eq!(anchor_scroll_top(300.0, 1000.0, 80.0), 1220.0);
    }

    #[test]
    fn test_bare_hash_is_not_in_page() {
        assert_eq!(in_page_fragment("#"), None);
        assert_eq!(in_page_fragment("#about"), Some("#about"));
        assert_eq!(in_page_fragment("https://example.com/#about"), None);
    }
}
