pub mod config;
pub mod content_saver;
pub mod crawl_engine;
pub mod utils;

pub use config::{CrawlConfig, ProviderVariant};
pub use content_saver::markdown_converter::{
    HtmdConverter, MarkdownConverter, convert_html_to_markdown, post_process,
};
pub use content_saver::map_output_path;
pub use crawl_engine::{
    ConsoleProgress, CrawlError, CrawlQueue, CrawlResult, CrawlSummary, Fetcher, NoOpProgress,
    ProgressReporter, ReqwestFetcher, crawl_pages, crawl_pages_with_converter,
};

/// Crawl with the default HTTP client and no progress output.
pub async fn crawl(config: CrawlConfig) -> Result<CrawlSummary, CrawlError> {
    crawl_with_progress(config, NoOpProgress).await
}

/// Crawl with the default HTTP client, reporting lifecycle events to `progress`.
pub async fn crawl_with_progress<P: ProgressReporter>(
    config: CrawlConfig,
    progress: P,
) -> Result<CrawlSummary, CrawlError> {
    let fetcher = ReqwestFetcher::new(&config)?;
    crawl_pages(config, fetcher, progress).await
}
