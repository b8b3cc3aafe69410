//! Type-safe builder for `CrawlConfig` using the typestate pattern
//!
//! This module provides a fluent builder interface with compile-time validation
//! ensuring that required fields are set before building a `CrawlConfig`.

use anyhow::{Result, anyhow, bail};
use scraper::Selector;
use std::marker::PhantomData;
use std::path::PathBuf;
use url::Url;

use super::provider::ProviderVariant;
use super::types::CrawlConfig;
use crate::utils::{
    DEFAULT_LOCALE_EXCLUSIONS, DEFAULT_MAX_CONCURRENCY, DEFAULT_MAX_DEPTH,
    DEFAULT_REQUEST_TIMEOUT_SECS, USER_AGENT, is_valid_url,
};

// Type states for the builder
pub struct WithStorageDir;
pub struct WithStartUrl;

pub struct CrawlConfigBuilder<State = ()> {
    pub(crate) storage_dir: Option<PathBuf>,
    pub(crate) start_url: Option<String>,
    pub(crate) allowed_domains: Option<Vec<String>>,
    pub(crate) base_path: Option<String>,
    pub(crate) list_only: bool,
    pub(crate) max_concurrent_pages: usize,
    pub(crate) max_depth: u8,
    pub(crate) excluded_patterns: Vec<String>,
    pub(crate) provider: ProviderVariant,
    pub(crate) content_selectors: Option<Vec<String>>,
    pub(crate) request_timeout_secs: u64,
    pub(crate) user_agent: String,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for CrawlConfigBuilder<()> {
    fn default() -> Self {
        Self {
            storage_dir: None,
            start_url: None,
            allowed_domains: None,
            base_path: None,
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
            _phantom: PhantomData,
        }
    }
}

impl CrawlConfig {
    /// Create a builder for configuring a `CrawlConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> CrawlConfigBuilder<()> {
        CrawlConfigBuilder::default()
    }
}

impl<State> CrawlConfigBuilder<State> {
    /// Move every field into a builder of another state.
    fn transition<Next>(self) -> CrawlConfigBuilder<Next> {
        CrawlConfigBuilder {
            storage_dir: self.storage_dir,
            start_url: self.start_url,
            allowed_domains: self.allowed_domains,
            base_path: self.base_path,
            list_only: self.list_only,
            max_concurrent_pages: self.max_concurrent_pages,
            max_depth: self.max_depth,
            excluded_patterns: self.excluded_patterns,
            provider: self.provider,
            content_selectors: self.content_selectors,
            request_timeout_secs: self.request_timeout_secs,
            user_agent: self.user_agent,
            _phantom: PhantomData,
        }
    }
}

impl CrawlConfigBuilder<()> {
    pub fn storage_dir(mut self, dir: impl Into<PathBuf>) -> CrawlConfigBuilder<WithStorageDir> {
        self.storage_dir = Some(dir.into());
        self.transition()
    }
}

impl CrawlConfigBuilder<WithStorageDir> {
    pub fn start_url(mut self, url: impl Into<String>) -> CrawlConfigBuilder<WithStartUrl> {
        let url_string = url.into();

        // Normalize URL: add https:// if no scheme is present
        let normalized_url =
            if url_string.starts_with("http://") || url_string.starts_with("https://") {
                url_string
            } else {
                format!("https://{url_string}")
            };

        self.start_url = Some(normalized_url);
        self.transition()
    }
}

// Build method only available when all required fields are set
impl CrawlConfigBuilder<WithStartUrl> {
    /// Validate and freeze the configuration.
    ///
    /// # Errors
    ///
    /// Fails when the seed URL has no host, the concurrency limit is zero, or
    /// any content selector (configured or provider-supplied) does not parse.
    pub fn build(self) -> Result<CrawlConfig> {
        let start_url = self
            .start_url
            .ok_or_else(|| anyhow!("start_url is required"))?;
        if !is_valid_url(&start_url) {
            bail!("Start URL '{start_url}' is not an absolute http(s) URL");
        }
        let parsed = Url::parse(&start_url)
            .map_err(|e| anyhow!("Invalid start URL '{start_url}': {e}"))?;
        let seed_host = parsed
            .host_str()
            .ok_or_else(|| anyhow!("Start URL '{start_url}' has no host"))?
            .to_string();

        if self.max_concurrent_pages == 0 {
            bail!("max_concurrent_pages must be at least 1");
        }

        let allowed_domains = match self.allowed_domains {
            Some(domains) if !domains.is_empty() => domains,
            _ => vec![seed_host],
        };

        let base_path = match self.base_path {
            Some(path) if !path.trim().is_empty() => path,
            _ => "/".to_string(),
        };

        let content_selectors = self.content_selectors.filter(|s| !s.is_empty());
        if let Some(overrides) = &content_selectors {
            for selector in overrides {
                check_selector(selector)?;
            }
        }
        let provider_selectors = self
            .provider
            .content_selectors()
            .iter()
            .copied()
            .chain(self.provider.removal_selectors());
        for selector in provider_selectors {
            check_selector(selector)?;
        }

        Ok(CrawlConfig {
            storage_dir: self
                .storage_dir
                .ok_or_else(|| anyhow!("storage_dir is required"))?,
            start_url,
            allowed_domains,
            base_path,
            list_only: self.list_only,
            max_concurrent_pages: self.max_concurrent_pages,
            max_depth: self.max_depth,
            excluded_patterns: self.excluded_patterns,
            provider: self.provider,
            content_selectors,
            request_timeout_secs: self.request_timeout_secs,
            user_agent: self.user_agent,
        })
    }
}

fn check_selector(selector: &str) -> Result<()> {
    Selector::parse(selector)
        .map(|_| ())
        .map_err(|e| anyhow!("Invalid CSS selector '{selector}': {e}"))
}
