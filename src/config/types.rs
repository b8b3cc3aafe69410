//! Core configuration types for documentation crawling
//!
//! This module contains the main `CrawlConfig` struct that defines the
//! immutable parameters of one crawl run.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::provider::ProviderVariant;
use crate::utils::{
    DEFAULT_LOCALE_EXCLUSIONS, DEFAULT_MAX_CONCURRENCY, DEFAULT_MAX_DEPTH,
    DEFAULT_REQUEST_TIMEOUT_SECS, USER_AGENT,
};

/// Main configuration struct for a crawl run
///
/// Constructed once through [`CrawlConfig::builder`] and read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// Output root for mirrored Markdown files.
    pub(crate) storage_dir: PathBuf,
    /// Seed URL, always carrying an http or https scheme.
    pub(crate) start_url: String,
    /// Hosts a link must match exactly to be in scope.
    /// **INVARIANT:** never empty after `build()` (defaults to the seed host).
    pub(crate) allowed_domains: Vec<String>,
    /// Path prefix a link must contain to be in scope.
    pub(crate) base_path: String,
    /// Discover and report URLs without writing anything.
    pub(crate) list_only: bool,
    pub(crate) max_concurrent_pages: usize,
    /// Maximum number of link hops from the seed (seed is depth 0).
    pub(crate) max_depth: u8,
    /// Substrings that exclude a URL, checked in order.
    pub(crate) excluded_patterns: Vec<String>,
    pub(crate) provider: ProviderVariant,
    /// Replaces the provider's content-selector chain when set.
    pub(crate) content_selectors: Option<Vec<String>>,
    pub(crate) request_timeout_secs: u64,
    pub(crate) user_agent: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("./output"),
            start_url: String::new(),
            allowed_domains: Vec::new(),
            base_path: "/".to_string(),
            list_only: false,
            max_concurrent_pages: DEFAULT_MAX_CONCURRENCY,
            max_depth: DEFAULT_MAX_DEPTH,
            excluded_patterns: DEFAULT_LOCALE_EXCLUSIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
            provider: ProviderVariant::Default,
            content_selectors: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: USER_AGENT.to_string(),
        }
    }
}
