//! Core types for crawl operations.
//!
//! This module contains the fundamental types used throughout the crawler:
//! the error taxonomy, queue items, and the end-of-run summary.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fatal errors that stop a crawl before or while it starts.
///
/// Per-page failures never surface here; they are logged and counted in
/// [`CrawlSummary::pages_failed`].
#[derive(Debug, thiserror::Error)]
pub enum CrawlError {
    /// The configuration was rejected during validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// A run-level resource could not be prepared
    #[error("Setup failed: {0}")]
    Setup(String),
}

impl From<anyhow::Error> for CrawlError {
    fn from(err: anyhow::Error) -> Self {
        // Use {:#} to preserve full error chain with context
        Self::Setup(format!("{err:#}"))
    }
}

/// Convenience alias for Result with `CrawlError`
pub type CrawlResult<T> = Result<T, CrawlError>;

/// Represents an item in the crawl queue with URL and depth tracking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlQueue {
    pub url: String,
    /// Link hops from the seed (seed is 0)
    pub depth: u8,
}

/// How a single page task ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// Converted Markdown was written
    Saved,
    /// Conversion failed and the raw body was written instead
    SavedRaw,
    /// Links were discovered but nothing was written
    Listed,
    /// Non-HTML response, nothing to do
    Skipped,
    /// Fetch, extraction, or write failed
    Failed,
}

/// Result of a finished crawl run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrawlSummary {
    /// Every URL claimed during the run, sorted
    pub claimed_urls: Vec<String>,
    pub pages_saved: usize,
    /// Pages written as raw body after a conversion failure
    pub pages_saved_raw: usize,
    pub pages_failed: usize,
    /// Markdown files rewritten by the cleanup pass
    pub files_cleaned: usize,
    pub elapsed: Duration,
}

impl CrawlSummary {
    pub(crate) fn record(&mut self, outcome: PageOutcome) {
        match outcome {
            PageOutcome::Saved => self.pages_saved += 1,
            PageOutcome::SavedRaw => self.pages_saved_raw += 1,
            PageOutcome::Failed => self.pages_failed += 1,
            PageOutcome::Listed | PageOutcome::Skipped => {}
        }
    }
}
