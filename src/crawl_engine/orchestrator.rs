//! Main crawl orchestration logic
//!
//! Coordinates multi-page crawling with:
//! - Seed claiming and breadth-first queueing with depth control
//! - Concurrent task execution bounded by a semaphore
//! - A join barrier before the Markdown cleanup pass

use futures::StreamExt;
use futures::stream::FuturesUnordered;
use log::{debug, error, info, warn};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;

use super::cleanup::cleanup_markdown_files;
use super::crawl_types::{CrawlError, CrawlQueue, CrawlResult, CrawlSummary, PageOutcome};
use super::frontier::VisitedSet;
use super::http_fetcher::Fetcher;
use super::page_processor::{PageProcessorContext, process_single_page};
use super::progress::ProgressReporter;
use crate::config::CrawlConfig;
use crate::content_saver::markdown_converter::{
    ExtractionProfile, HtmdConverter, MarkdownConverter,
};
use crate::utils::normalize_url;

/// Run a complete crawl.
///
/// The seed is claimed first and fetched regardless of scope. Each fetched
/// page claims its in-scope links before they are queued, so no URL is ever
/// processed twice. Once the queue is empty and every task has finished, the
/// cleanup pass runs over the output directory (skipped in list-only mode).
///
/// # Errors
///
/// Returns [`CrawlError::Config`] when the concurrency limit is zero or the
/// extraction selectors or seed URL are unusable, and [`CrawlError::Setup`]
/// when the output directory cannot be created. Per-page failures are counted
/// in the summary instead.
pub async fn crawl_pages<F: Fetcher, P: ProgressReporter>(
    config: CrawlConfig,
    fetcher: F,
    progress: P,
) -> CrawlResult<CrawlSummary> {
    crawl_pages_with_converter(config, fetcher, HtmdConverter, progress).await
}

/// [`crawl_pages`] with a caller-supplied Markdown converter.
///
/// # Errors
///
/// Same as [`crawl_pages`].
pub async fn crawl_pages_with_converter<F, C, P>(
    config: CrawlConfig,
    fetcher: F,
    converter: C,
    progress: P,
) -> CrawlResult<CrawlSummary>
where
    F: Fetcher,
    C: MarkdownConverter,
    P: ProgressReporter,
{
    let start_time = Instant::now();

    // Deserialized configs never went through the builder
    if config.max_concurrent_pages() == 0 {
        return Err(CrawlError::Config(
            "max_concurrent_pages must be at least 1".to_string(),
        ));
    }

    let profile = ExtractionProfile::from_config(&config)
        .map_err(|e| CrawlError::Config(format!("{e:#}")))?;
    let seed = normalize_url(config.start_url())
        .map_err(|e| CrawlError::Config(format!("{e:#}")))?;

    if !config.list_only() {
        tokio::fs::create_dir_all(config.storage_dir())
            .await
            .map_err(|e| {
                CrawlError::Setup(format!(
                    "Failed to create output directory {}: {e}",
                    config.storage_dir().display()
                ))
            })?;
    }

    info!(
        "Starting crawl of {} (provider {}, depth {}, concurrency {})",
        seed,
        config.provider(),
        config.max_depth(),
        config.max_concurrent_pages()
    );

    let visited = Arc::new(VisitedSet::new());
    let progress = Arc::new(progress);
    visited.try_claim(&seed);
    progress.report_claimed(&seed);

    let mut queue = VecDeque::from([CrawlQueue {
        url: seed,
        depth: 0,
    }]);

    let ctx = PageProcessorContext {
        config: Arc::new(config),
        profile: Arc::new(profile),
        visited: Arc::clone(&visited),
        fetcher: Arc::new(fetcher),
        converter: Arc::new(converter),
        progress: Arc::clone(&progress),
    };

    // Concurrency control
    let concurrency = ctx.config.max_concurrent_pages();
    let semaphore = Arc::new(Semaphore::new(concurrency));

    let mut summary = CrawlSummary::default();
    let mut active_tasks = FuturesUnordered::new();

    loop {
        // Fill up to concurrency limit
        while active_tasks.len() < concurrency {
            let Some(item) = queue.pop_front() else {
                break;
            };

            let permit = if let Ok(p) = Arc::clone(&semaphore).acquire_owned().await {
                p
            } else {
                error!("Semaphore closed unexpectedly");
                break;
            };

            let ctx = ctx.clone();
            active_tasks.push(tokio::spawn(async move {
                let _permit = permit; // Hold until task completes
                process_single_page(item, ctx).await
            }));
        }

        // Wait for at least one task to complete
        match active_tasks.next().await {
            Some(Ok(report)) => {
                debug!(
                    "Completed {} ({:?}, {} new links)",
                    report.url,
                    report.outcome,
                    report.discovered.len()
                );
                summary.record(report.outcome);
                queue.extend(report.discovered);
            }
            Some(Err(e)) => {
                error!("Task panicked: {e}");
                summary.record(PageOutcome::Failed);
            }
            None => break, // Queue drained and nothing in flight
        }
    }

    summary.claimed_urls = visited.list_claimed().sorted();

    if !ctx.config.list_only() {
        let root = ctx.config.storage_dir().clone();
        match cleanup_markdown_files(root, Arc::clone(&progress)).await {
            Ok(report) => summary.files_cleaned = report.files_cleaned,
            Err(e) => warn!("Markdown cleanup failed: {e:#}"),
        }
    }

    summary.elapsed = start_time.elapsed();
    info!(
        "Crawl finished in {:.2?}: {} claimed, {} saved, {} saved raw, {} failed, {} cleaned",
        summary.elapsed,
        summary.claimed_urls.len(),
        summary.pages_saved,
        summary.pages_saved_raw,
        summary.pages_failed,
        summary.files_cleaned
    );

    Ok(summary)
}
