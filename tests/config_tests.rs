//! Tests for the type-safe configuration builder pattern

use docscrape::config::{CrawlConfig, ProviderVariant};
use docscrape::utils::{DEFAULT_LOCALE_EXCLUSIONS, DEFAULT_MAX_CONCURRENCY, DEFAULT_MAX_DEPTH};
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_builder_requires_storage_dir_and_start_url() {
    // Does not compile: build() only exists once both required fields are set
    // let config = CrawlConfig::builder().build();
    // let config = CrawlConfig::builder().storage_dir("/tmp").build();

    let temp_dir = TempDir::new().unwrap();
    let config = CrawlConfig::builder()
        .storage_dir(temp_dir.path().to_path_buf())
        .start_url("https://example.com")
        .build()
        .unwrap();

    assert_eq!(config.storage_dir(), temp_dir.path());
    assert_eq!(config.start_url(), "https://example.com");
}

#[test]
fn test_builder_optional_fields_have_defaults() {
    let config = CrawlConfig::builder()
        .storage_dir("/tmp/docscrape")
        .start_url("doc.example.com/manual/intro")
        .build()
        .unwrap();

    // Scheme is added when missing
    assert_eq!(config.start_url(), "https://doc.example.com/manual/intro");
    assert_eq!(config.allowed_domains(), ["doc.example.com".to_string()]);
    assert_eq!(config.primary_domain(), "doc.example.com");
    assert_eq!(config.base_path(), "/");
    assert!(!config.list_only());
    assert_eq!(config.max_concurrent_pages(), DEFAULT_MAX_CONCURRENCY);
    assert_eq!(config.max_depth(), DEFAULT_MAX_DEPTH);
    assert_eq!(config.excluded_patterns().len(), DEFAULT_LOCALE_EXCLUSIONS.len());
    assert_eq!(config.provider(), ProviderVariant::Default);
    assert_eq!(config.content_selectors(), None);
    assert_eq!(config.request_timeout(), Duration::from_secs(30));
}

#[test]
fn test_builder_with_all_optional_fields() {
    let config = CrawlConfig::builder()
        .storage_dir("/tmp/docscrape")
        .start_url("https://doc.example.com/quantum/current/intro")
        .allowed_domains(["doc.example.com", "cdn.example.com"])
        .base_path("/quantum/current/")
        .list_only(true)
        .max_concurrent_pages(12)
        .max_depth(2)
        .exclude_pattern("/legacy/")
        .provider(ProviderVariant::Quantum)
        .content_selectors(["div.article"])
        .request_timeout_secs(5)
        .user_agent("test-agent/1.0")
        .build()
        .unwrap();

    assert_eq!(config.allowed_domains().len(), 2);
    assert_eq!(config.base_path(), "/quantum/current/");
    assert!(config.list_only());
    assert_eq!(config.max_concurrent_pages(), 12);
    assert_eq!(config.max_depth(), 2);
    assert!(config.excluded_patterns().iter().any(|p| p == "/legacy/"));
    assert!(config.excluded_patterns().iter().any(|p| p == "/ja-jp/"));
    assert_eq!(config.provider(), ProviderVariant::Quantum);
    assert_eq!(config.content_selectors(), Some(&["div.article".to_string()][..]));
    assert_eq!(config.request_timeout(), Duration::from_secs(5));
    assert_eq!(config.user_agent(), "test-agent/1.0");
}

#[test]
fn test_excluded_patterns_replace_defaults() {
    let config = CrawlConfig::builder()
        .storage_dir("/tmp/docscrape")
        .start_url("https://example.com")
        .excluded_patterns(["/v1/"])
        .build()
        .unwrap();
    assert_eq!(config.excluded_patterns(), ["/v1/".to_string()]);
}

#[test]
fn test_zero_concurrency_is_rejected() {
    let result = CrawlConfig::builder()
        .storage_dir("/tmp/docscrape")
        .start_url("https://example.com")
        .max_concurrent_pages(0)
        .build();
    assert!(result.is_err());
}

#[test]
fn test_invalid_selector_is_rejected() {
    let err = CrawlConfig::builder()
        .storage_dir("/tmp/docscrape")
        .start_url("https://example.com")
        .content_selectors(["div[[["])
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("div[[["));
}

#[test]
fn test_empty_overrides_fall_back_to_defaults() {
    let config = CrawlConfig::builder()
        .storage_dir("/tmp/docscrape")
        .start_url("https://example.com")
        .allowed_domains(Vec::<String>::new())
        .content_selectors(Vec::<String>::new())
        .base_path("  ")
        .build()
        .unwrap();
    assert_eq!(config.allowed_domains(), ["example.com".to_string()]);
    assert_eq!(config.content_selectors(), None);
    assert_eq!(config.base_path(), "/");
}

#[test]
fn test_config_serializes_to_json() {
    let config = CrawlConfig::builder()
        .storage_dir("/tmp/docscrape")
        .start_url("https://example.com")
        .provider(ProviderVariant::Realtime)
        .build()
        .unwrap();
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["provider"], "realtime");
    assert_eq!(json["start_url"], "https://example.com");
}
