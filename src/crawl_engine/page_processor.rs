//! Single page processing logic
//!
//! Handles the complete lifecycle of one claimed URL:
//! - Fetching the page
//! - Link discovery, scope filtering, and claiming
//! - Main content extraction and Markdown conversion
//! - Writing the document, or the raw body when conversion fails

use anyhow::{Result, anyhow};
use log::{debug, info, warn};
use scraper::Html;
use std::sync::Arc;
use url::Url;

use super::crawl_types::{CrawlQueue, PageOutcome};
use super::crawler::extract_valid_urls;
use super::frontier::VisitedSet;
use super::http_fetcher::Fetcher;
use super::link_processor::extract_links;
use super::progress::ProgressReporter;
use crate::config::CrawlConfig;
use crate::content_saver::markdown_converter::{
    ExtractionProfile, MarkdownConverter, extract_main_content,
};
use crate::content_saver::{
    document_title, format_markdown_document, map_output_path, save_markdown_content,
};
use crate::utils::MAX_HTML_SIZE;

/// Context for page processing containing shared crawler state
pub struct PageProcessorContext<F, C, P> {
    pub config: Arc<CrawlConfig>,
    pub profile: Arc<ExtractionProfile>,
    pub visited: Arc<VisitedSet>,
    pub fetcher: Arc<F>,
    pub converter: Arc<C>,
    pub progress: Arc<P>,
}

// Manual impl so F, C and P don't need to be Clone themselves
impl<F, C, P> Clone for PageProcessorContext<F, C, P> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            profile: Arc::clone(&self.profile),
            visited: Arc::clone(&self.visited),
            fetcher: Arc::clone(&self.fetcher),
            converter: Arc::clone(&self.converter),
            progress: Arc::clone(&self.progress),
        }
    }
}

/// What one page task hands back to the orchestrator
#[derive(Debug, Clone)]
pub struct PageReport {
    pub url: String,
    pub outcome: PageOutcome,
    /// Newly claimed links, already owned by this run
    pub discovered: Vec<CrawlQueue>,
}

/// Output of the blocking parse step
struct ParsedPage {
    links: Vec<Url>,
    content: Option<String>,
}

/// Parse the body, collect links, and extract main content on the blocking pool.
async fn parse_page(
    body: String,
    base: Url,
    profile: Arc<ExtractionProfile>,
    extract_content: bool,
) -> Result<ParsedPage> {
    if body.len() > MAX_HTML_SIZE {
        return Err(anyhow!(
            "HTML input too large: {} bytes (limit {} bytes)",
            body.len(),
            MAX_HTML_SIZE
        ));
    }

    tokio::task::spawn_blocking(move || {
        let document = Html::parse_document(&body);
        let links = extract_links(&document, &base);
        let content = extract_content.then(|| extract_main_content(&document, &profile));
        ParsedPage { links, content }
    })
    .await
    .map_err(|e| anyhow!("HTML parsing task panicked: {e}"))
}

/// Claim every in-scope link one hop deeper than `item`.
///
/// Links past the depth limit are dropped without being claimed.
fn claim_links<F, C, P: ProgressReporter>(
    item: &CrawlQueue,
    links: Vec<Url>,
    ctx: &PageProcessorContext<F, C, P>,
) -> Vec<CrawlQueue> {
    if item.depth >= ctx.config.max_depth() {
        return Vec::new();
    }

    let next_depth = item.depth + 1;
    let mut discovered = Vec::new();
    for link in extract_valid_urls(links, &ctx.config) {
        if ctx.visited.try_claim(link.as_str()) {
            ctx.progress.report_claimed(link.as_str());
            discovered.push(CrawlQueue {
                url: link.into(),
                depth: next_depth,
            });
        }
    }
    discovered
}

/// Process a single claimed page
///
/// Every failure is logged and reported; none propagates, so one bad page
/// never stops the crawl.
pub async fn process_single_page<F: Fetcher, C: MarkdownConverter, P: ProgressReporter>(
    item: CrawlQueue,
    ctx: PageProcessorContext<F, C, P>,
) -> PageReport {
    let (outcome, discovered) = match process_page_inner(&item, &ctx).await {
        Ok(result) => result,
        Err(e) => {
            warn!("Failed to process {}: {e:#}", item.url);
            ctx.progress.report_failed(&item.url, &format!("{e:#}"));
            (PageOutcome::Failed, Vec::new())
        }
    };

    PageReport {
        url: item.url,
        outcome,
        discovered,
    }
}

async fn process_page_inner<F: Fetcher, C: MarkdownConverter, P: ProgressReporter>(
    item: &CrawlQueue,
    ctx: &PageProcessorContext<F, C, P>,
) -> Result<(PageOutcome, Vec<CrawlQueue>)> {
    let url = Url::parse(&item.url).map_err(|e| anyhow!("Invalid URL {}: {e}", item.url))?;

    info!("Crawling [depth {}]: {}", item.depth, item.url);
    let fetched = ctx.fetcher.fetch(&url).await?;

    if !fetched.is_html() {
        debug!(
            "Skipping non-HTML response from {} ({})",
            item.url,
            fetched.content_type.as_deref().unwrap_or_default()
        );
        return Ok((PageOutcome::Skipped, Vec::new()));
    }

    if fetched.final_url != url {
        debug!("{} redirected to {}", item.url, fetched.final_url);
    }

    let body = fetched.text();
    let list_only = ctx.config.list_only();
    let parsed = parse_page(
        body.clone(),
        fetched.final_url.clone(),
        Arc::clone(&ctx.profile),
        !list_only,
    )
    .await?;

    let discovered = claim_links(item, parsed.links, ctx);
    debug!(
        target: "docscrape::links",
        "{} new links claimed from {}",
        discovered.len(),
        item.url
    );

    let Some(content) = parsed.content else {
        return Ok((PageOutcome::Listed, discovered));
    };

    let path = map_output_path(
        &item.url,
        ctx.config.primary_domain(),
        ctx.config.base_path(),
        ctx.config.storage_dir(),
    );

    let (document, outcome) = match ctx.converter.convert(&content).await {
        Ok(markdown) => {
            let title = document_title(&path);
            (
                format_markdown_document(&title, &item.url, &markdown),
                PageOutcome::Saved,
            )
        }
        Err(e) => {
            warn!("Markdown conversion failed for {}: {e:#}, saving raw HTML", item.url);
            (body, PageOutcome::SavedRaw)
        }
    };

    save_markdown_content(&document, &path).await?;

    match outcome {
        PageOutcome::SavedRaw => ctx.progress.report_fallback_saved(&item.url, &path),
        _ => ctx.progress.report_saved(&item.url, &path),
    }

    Ok((outcome, discovered))
}
