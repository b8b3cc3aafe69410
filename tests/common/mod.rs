//! Test utilities and helper functions for the docscrape test suite

use docscrape::config::CrawlConfig;
use docscrape::crawl_engine::{FetchResult, Fetcher};
use mockito::{Mock, ServerGuard};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;
use url::Url;

/// Creates a test HTML document with the given body markup
#[allow(dead_code)]
pub fn create_test_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
</head>
<body>
    <nav>Navigation</nav>
    {body}
    <footer>Footer text</footer>
</body>
</html>"#
    )
}

/// Wraps `inner` in a `<main>` element so the default selector chain finds it
#[allow(dead_code)]
pub fn main_page(title: &str, inner: &str) -> String {
    create_test_html(title, &format!("<main>{inner}</main>"))
}

/// Creates a mock endpoint that returns HTML content exactly `hits` times
#[allow(dead_code)]
pub async fn html_mock(server: &mut ServerGuard, path: &str, html: &str, hits: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(html)
        .expect(hits)
        .create_async()
        .await
}

/// Creates a mock endpoint that returns an error status
#[allow(dead_code)]
pub async fn error_mock(server: &mut ServerGuard, path: &str, status: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_body("Error")
        .expect(1)
        .create_async()
        .await
}

/// Creates test configuration for crawling a mock server
#[allow(dead_code)]
pub fn create_test_config(storage_dir: &Path, start_url: &str) -> CrawlConfig {
    CrawlConfig::builder()
        .storage_dir(storage_dir.to_path_buf())
        .start_url(start_url)
        .max_concurrent_pages(4)
        .build()
        .expect("Failed to create test config")
}

/// Helper to create test URLs
#[allow(dead_code)]
pub fn test_url(server: &ServerGuard, path: &str) -> String {
    format!("{}{}", server.url(), path)
}

/// In-memory fetcher that serves fixed pages and counts every request
#[allow(dead_code)]
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
    hits: Mutex<HashMap<String, usize>>,
}

#[allow(dead_code)]
impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, html: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), html.into());
        self
    }

    /// Request count per URL
    pub fn hits(&self) -> HashMap<String, usize> {
        self.hits.lock().expect("hits lock poisoned").clone()
    }
}

impl Fetcher for StaticFetcher {
    async fn fetch(&self, url: &Url) -> anyhow::Result<FetchResult> {
        *self
            .hits
            .lock()
            .expect("hits lock poisoned")
            .entry(url.to_string())
            .or_default() += 1;

        // Yield so concurrent tasks interleave their discoveries
        tokio::task::yield_now().await;

        let body = self
            .pages
            .get(url.as_str())
            .ok_or_else(|| anyhow::anyhow!("404 for {url}"))?;

        Ok(FetchResult {
            url: url.clone(),
            final_url: url.clone(),
            status: 200,
            content_type: Some("text/html".to_string()),
            body: body.as_bytes().to_vec(),
        })
    }
}
