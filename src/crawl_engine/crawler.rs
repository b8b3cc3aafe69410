//! Scope filtering for discovered links.

use url::Url;

use crate::config::CrawlConfig;

/// Decide whether a resolved link belongs to the crawl.
///
/// A link is in scope when its host equals one of the allowed domains, its
/// path contains the configured base path, and the full URL contains none of
/// the excluded patterns.
#[must_use]
pub fn should_visit_url(url: &Url, config: &CrawlConfig) -> bool {
    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }

    let url_host = url.host_str().unwrap_or_default();
    let host_allowed = config
        .allowed_domains()
        .iter()
        .any(|domain| url_host.eq_ignore_ascii_case(domain));
    if !host_allowed {
        return false;
    }

    if !url.path().contains(config.base_path()) {
        return false;
    }

    let url_str = url.as_str();
    !config
        .excluded_patterns()
        .iter()
        .any(|pattern| url_str.contains(pattern.as_str()))
}

/// Filter resolved links down to the in-scope ones, preserving order.
#[must_use]
pub fn extract_valid_urls(links: Vec<Url>, config: &CrawlConfig) -> Vec<Url> {
    links
        .into_iter()
        .filter(|link| should_visit_url(link, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CrawlConfig {
        CrawlConfig::builder()
            .storage_dir("/tmp/docscrape-test")
            .start_url("https://doc.example.com/quantum/current/intro")
            .base_path("/quantum/current/")
            .build()
            .expect("Test operation should succeed")
    }

    fn url(s: &str) -> Url {
        Url::parse(s).expect("Test operation should succeed")
    }

    #[test]
    fn test_in_scope_link_is_accepted() {
        assert!(should_visit_url(
            &url("https://doc.example.com/quantum/current/concepts/"),
            &config()
        ));
    }

    #[test]
    fn test_other_host_is_rejected() {
        let cfg = config();
        assert!(!should_visit_url(
            &url("https://example.com/quantum/current/concepts/"),
            &cfg
        ));
        // Subdomains are not implicitly allowed
        assert!(!should_visit_url(
            &url("https://api.doc.example.com/quantum/current/x"),
            &cfg
        ));
    }

    #[test]
    fn test_outside_base_path_is_rejected() {
        assert!(!should_visit_url(
            &url("https://doc.example.com/realtime/current/intro"),
            &config()
        ));
    }

    #[test]
    fn test_locale_patterns_are_rejected() {
        let cfg = config();
        for locale in ["ja-jp", "ko-kr", "zh-cn", "zh-tw"] {
            let link = url(&format!(
                "https://doc.example.com/{locale}/quantum/current/intro"
            ));
            assert!(!should_visit_url(&link, &cfg), "{locale} must be excluded");
        }
    }

    #[test]
    fn test_filter_preserves_order() {
        let links = vec![
            url("https://doc.example.com/quantum/current/b"),
            url("https://other.com/quantum/current/a"),
            url("https://doc.example.com/quantum/current/a"),
        ];
        let kept = extract_valid_urls(links, &config());
        assert_eq!(
            kept,
            vec![
                url("https://doc.example.com/quantum/current/b"),
                url("https://doc.example.com/quantum/current/a"),
            ]
        );
    }
}
