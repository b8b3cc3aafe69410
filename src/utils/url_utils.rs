//! URL manipulation utilities.
//!
//! This module provides the helpers used to turn raw `href` values into
//! canonical absolute URLs suitable for deduplication.

use anyhow::{Result, anyhow};
use url::Url;

/// Check if a URL is valid for crawling (absolute http or https)
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    // Skip data URLs, javascript URLs, and other non-http schemes
    if url.starts_with("data:") || url.starts_with("javascript:") || url.starts_with("mailto:") {
        return false;
    }

    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Normalize a URL string by stripping the fragment anchor.
///
/// Fragments are client-side navigation markers and never name a different
/// resource, so `https://a/b#x` and `https://a/b` dedup to the same key.
///
/// # Errors
///
/// Returns an error when `url` does not parse as an absolute URL.
pub fn normalize_url(url: &str) -> Result<String> {
    let mut parsed =
        Url::parse(url).map_err(|e| anyhow!("Failed to parse URL for normalization: {e}"))?;
    parsed.set_fragment(None);
    Ok(parsed.to_string())
}

/// Resolve an `href` against the document base into a canonical absolute URL.
///
/// Returns `None` for empty or fragment-only references, non-http(s) schemes,
/// and anything the URL parser rejects.
#[must_use]
pub fn resolve_link(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lowered = href.to_ascii_lowercase();
    if ["javascript:", "mailto:", "tel:", "data:"]
        .iter()
        .any(|scheme| lowered.starts_with(scheme))
    {
        return None;
    }

    let mut resolved = base.join(href).ok()?;
    if !matches!(resolved.scheme(), "http" | "https") {
        return None;
    }
    resolved.set_fragment(None);
    Some(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://doc.example.com/quantum/current/manual/intro").expect("base url")
    }

    #[test]
    fn test_is_valid_url() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://example.com/a"));
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("javascript:void(0)"));
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("/relative/path"));
    }

    #[test]
    fn test_normalize_url_drops_fragment() {
        assert_eq!(
            normalize_url("https://example.com/page#section").expect("normalize"),
            "https://example.com/page"
        );
        assert!(normalize_url("not a url").is_err());
    }

    #[test]
    fn test_resolve_relative_links() {
        let resolved = resolve_link(&base(), "../concepts/#top").expect("resolves");
        assert_eq!(
            resolved.as_str(),
            "https://doc.example.com/quantum/current/concepts/"
        );

        let sibling = resolve_link(&base(), "setup").expect("resolves");
        assert_eq!(
            sibling.as_str(),
            "https://doc.example.com/quantum/current/manual/setup"
        );
    }

    #[test]
    fn test_resolve_skips_non_navigational_links() {
        assert!(resolve_link(&base(), "").is_none());
        assert!(resolve_link(&base(), "#anchor").is_none());
        assert!(resolve_link(&base(), "mailto:team@example.com").is_none());
        assert!(resolve_link(&base(), "JavaScript:void(0)").is_none());
        assert!(resolve_link(&base(), "ftp://example.com/file").is_none());
    }
}
