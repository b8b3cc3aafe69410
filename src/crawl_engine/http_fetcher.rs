//! HTTP transport for page tasks.
//!
//! The orchestrator only sees the [`Fetcher`] trait so tests and alternative
//! transports can stand in for the reqwest client.

use anyhow::{Context, Result, bail};
use log::debug;
use std::future::Future;
use std::sync::Arc;
use url::Url;

use crate::config::CrawlConfig;

/// Raw response for one fetched page
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// URL that was requested
    pub url: Url,
    /// URL after redirects
    pub final_url: Url,
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl FetchResult {
    /// True when the server either declared an HTML type or declared nothing.
    #[must_use]
    pub fn is_html(&self) -> bool {
        self.content_type
            .as_deref()
            .is_none_or(|ct| ct.to_ascii_lowercase().contains("html"))
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Fetches a single URL.
///
/// Implementations return an error for transport failures and for any
/// non-success status.
pub trait Fetcher: Send + Sync + 'static {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<FetchResult>> + Send;
}

impl<F: Fetcher> Fetcher for Arc<F> {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<FetchResult>> + Send {
        (**self).fetch(url)
    }
}

/// `reqwest`-backed fetcher with the configured timeout and user agent
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    /// Build the HTTP client for a run.
    ///
    /// # Errors
    ///
    /// Fails when the TLS backend or client cannot be initialised.
    pub fn new(config: &CrawlConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent())
            .timeout(config.request_timeout())
            .pool_max_idle_per_host(config.max_concurrent_pages())
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchResult> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to fetch URL {url}"))?;

        let status = response.status();
        if !status.is_success() {
            bail!("Request to {url} failed with status: {status}");
        }

        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read response body from {url}"))?
            .to_vec();

        debug!(
            target: "docscrape::fetch",
            "Fetched {} ({} bytes, status {})",
            url,
            body.len(),
            status.as_u16()
        );

        Ok(FetchResult {
            url: url.clone(),
            final_url,
            status: status.as_u16(),
            content_type,
            body,
        })
    }
}
