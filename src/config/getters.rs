//! Getter methods for `CrawlConfig`
//!
//! This module provides all the accessor methods for retrieving configuration
//! values from a `CrawlConfig` instance.

use std::path::PathBuf;
use std::time::Duration;

use super::provider::ProviderVariant;
use super::types::CrawlConfig;

impl CrawlConfig {
    #[must_use]
    pub fn storage_dir(&self) -> &PathBuf {
        &self.storage_dir
    }

    #[must_use]
    pub fn start_url(&self) -> &str {
        &self.start_url
    }

    #[must_use]
    pub fn allowed_domains(&self) -> &[String] {
        &self.allowed_domains
    }

    /// Host whose prefix the output path mapper strips.
    #[must_use]
    pub fn primary_domain(&self) -> &str {
        self.allowed_domains
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    #[must_use]
    pub fn list_only(&self) -> bool {
        self.list_only
    }

    #[must_use]
    pub fn max_concurrent_pages(&self) -> usize {
        self.max_concurrent_pages
    }

    #[must_use]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    #[must_use]
    pub fn excluded_patterns(&self) -> &[String] {
        &self.excluded_patterns
    }

    #[must_use]
    pub fn provider(&self) -> ProviderVariant {
        self.provider
    }

    #[must_use]
    pub fn content_selectors(&self) -> Option<&[String]> {
        self.content_selectors.as_deref()
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
