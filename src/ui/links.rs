//! Outward profile link normalization.

/// Prefix addresses that do not start with `http` with `https://`.
///
/// Returns `None` when the address is already fine.
pub fn normalize_profile_href(href: &str) -> Option<String> {
    if href.starts_with("http") {
        None
    } else {
        Some(format!("https://{href}"))
    }
}

/// For links to `domain` that are not already `https://`, the corrected
/// address to open in a new browsing context instead of the default
/// navigation.
///
/// The scheme (anything up to `://`) is replaced; an address without one is
/// prefixed as-is.
pub fn reopen_over_https(href: &str, domain: &str) -> Option<String> {
    if domain.is_empty() || !href.contains(domain) || href.starts_with("https://") {
        return None;
    }
    let rest = href.split_once("://").map_or(href, |(_, rest)| rest);
    Some(format!("https://{rest}"))
}
