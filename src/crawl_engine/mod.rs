//! Crawl Engine Module
//!
//! This module contains the crawling engine: scope filtering, the shared
//! visited set, page fetching, per-page processing, and the orchestrator
//! that drives them to completion before the Markdown cleanup pass.

// Sub-modules
pub mod cleanup;
pub mod crawl_types;
pub mod crawler;
pub mod frontier;
pub mod http_fetcher;
pub mod link_processor;
pub mod orchestrator;
pub mod page_processor;
pub mod progress;

// Re-export orchestration and progress types for advanced usage
pub use orchestrator::{crawl_pages, crawl_pages_with_converter};
pub use progress::{ConsoleProgress, NoOpProgress, ProgressReporter};

// Re-export crawler types and functions
pub use crawler::{extract_valid_urls, should_visit_url};
pub use frontier::{ClaimedUrls, VisitedSet};
pub use http_fetcher::{FetchResult, Fetcher, ReqwestFetcher};
pub use link_processor::extract_links;

// Re-export cleanup entry points
pub use cleanup::{CleanupReport, cleanup_markdown_files, cleanup_markdown_files_sync};

// Re-export crawl types
pub use crawl_types::{CrawlError, CrawlQueue, CrawlResult, CrawlSummary, PageOutcome};
