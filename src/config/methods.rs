//! Builder methods available for all states
//!
//! This module contains methods that can be called on the builder
//! regardless of its current type state.

use super::builder::CrawlConfigBuilder;
use super::provider::ProviderVariant;

impl<State> CrawlConfigBuilder<State> {
    /// Replace the in-scope host list. An empty list falls back to the seed host.
    #[must_use]
    pub fn allowed_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_domains = Some(domains.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn base_path(mut self, path: impl Into<String>) -> Self {
        self.base_path = Some(path.into());
        self
    }

    /// Only discover URLs; nothing is fetched past link extraction or written.
    #[must_use]
    pub fn list_only(mut self, list_only: bool) -> Self {
        self.list_only = list_only;
        self
    }

    #[must_use]
    pub fn max_concurrent_pages(mut self, max: usize) -> Self {
        self.max_concurrent_pages = max;
        self
    }

    #[must_use]
    pub fn max_depth(mut self, depth: u8) -> Self {
        self.max_depth = depth;
        self
    }

    /// Replace the exclusion list, dropping the default locale patterns.
    #[must_use]
    pub fn excluded_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Append one pattern to the current exclusion list.
    #[must_use]
    pub fn exclude_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.excluded_patterns.push(pattern.into());
        self
    }

    #[must_use]
    pub fn provider(mut self, provider: ProviderVariant) -> Self {
        self.provider = provider;
        self
    }

    /// Override the provider's content-selector chain.
    #[must_use]
    pub fn content_selectors<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content_selectors = Some(selectors.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }
}
