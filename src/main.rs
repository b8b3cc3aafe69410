// docscrape command line entry point.
//
// Mirrors a documentation site as Markdown, or lists its in-scope URLs.

use anyhow::{Result, bail};
use clap::Parser;
use docscrape::utils::{DEFAULT_MAX_CONCURRENCY, DEFAULT_MAX_DEPTH, DEFAULT_REQUEST_TIMEOUT_SECS};
use docscrape::{ConsoleProgress, CrawlConfig, ProviderVariant, crawl_with_progress};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Output directory used when neither `--output` nor a preset supplies one
const FALLBACK_OUTPUT_DIR: &str = "output";

#[derive(Debug, Parser)]
#[command(name = "docscrape", version, about = "Crawl a documentation site into Markdown files")]
struct Cli {
    /// Site template: default, quantum, or realtime
    #[arg(long = "type", default_value_t = ProviderVariant::Default)]
    provider: ProviderVariant,

    /// Seed URL (required for the default template)
    #[arg(long)]
    base_url: Option<String>,

    /// Output directory for Markdown files
    #[arg(long)]
    output: Option<PathBuf>,

    /// Domain allowed in scope (repeatable, defaults to the seed host)
    #[arg(long = "allowed-domain")]
    allowed_domains: Vec<String>,

    /// Only discover URLs, write nothing
    #[arg(long)]
    list_only: bool,

    /// Path prefix every crawled URL must contain
    #[arg(long)]
    base_path: Option<String>,

    /// Maximum pages fetched at the same time
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    concurrency: usize,

    /// Maximum link hops from the seed
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: u8,

    /// Content selector overriding the template chain (repeatable)
    #[arg(long = "content-selector")]
    content_selectors: Vec<String>,

    /// Additional URL substring to exclude (repeatable)
    #[arg(long = "exclude")]
    excludes: Vec<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    timeout: u64,
}

impl Cli {
    /// Fill unset values from the template preset and build the config.
    fn into_config(self) -> Result<CrawlConfig> {
        let preset = self.provider.preset();

        let Some(start_url) = self
            .base_url
            .or_else(|| preset.map(|p| p.start_url.to_string()))
        else {
            bail!("--base-url is required for provider type '{}'", self.provider);
        };
        let output = self
            .output
            .or_else(|| preset.map(|p| PathBuf::from(p.output_dir)))
            .unwrap_or_else(|| PathBuf::from(FALLBACK_OUTPUT_DIR));
        let base_path = self
            .base_path
            .or_else(|| preset.map(|p| p.base_path.to_string()));

        let mut builder = CrawlConfig::builder()
            .storage_dir(output)
            .start_url(start_url)
            .provider(self.provider)
            .list_only(self.list_only)
            .max_concurrent_pages(self.concurrency)
            .max_depth(self.max_depth)
            .request_timeout_secs(self.timeout)
            .allowed_domains(self.allowed_domains)
            .content_selectors(self.content_selectors);

        if let Some(base_path) = base_path {
            builder = builder.base_path(base_path);
        }
        for pattern in self.excludes {
            builder = builder.exclude_pattern(pattern);
        }

        builder.build()
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.into_config()?;
    let list_only = config.list_only();

    let summary = crawl_with_progress(config, ConsoleProgress).await?;

    if list_only {
        println!("\nDiscovered {} URLs:", summary.claimed_urls.len());
        for url in &summary.claimed_urls {
            println!("{url}");
        }
    } else {
        println!(
            "\nSaved {} pages ({} as raw HTML), {} failed, {} files cleaned in {:.2?}",
            summary.pages_saved + summary.pages_saved_raw,
            summary.pages_saved_raw,
            summary.pages_failed,
            summary.files_cleaned,
            summary.elapsed
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
