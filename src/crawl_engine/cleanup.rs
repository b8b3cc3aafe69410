//! Post-crawl Markdown cleanup
//!
//! Runs strictly after the crawl drains. Every `.md` file under the output
//! root is read, normalized with [`post_process`], and written back only when
//! it changed. Files are independent so they are processed in parallel.

use anyhow::{Context, Result};
use jwalk::WalkDir;
use log::{debug, info, warn};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::progress::ProgressReporter;
use crate::content_saver::markdown_converter::post_process;

/// Result of one cleanup pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupReport {
    /// Markdown files found under the output root
    pub files_seen: usize,
    /// Files whose contents changed and were rewritten
    pub files_cleaned: usize,
    /// Files that could not be read or written
    pub files_failed: usize,
}

/// Thread count for the directory walk, scaled to the machine
fn walk_parallelism() -> usize {
    let cpu_count = num_cpus::get();
    match cpu_count {
        1..=4 => cpu_count,
        5..=8 => cpu_count - 1,
        9..=16 => (cpu_count * 3) / 4,
        17..=32 => cpu_count / 2,
        _ => 32,
    }
}

/// Every regular `.md` file under `root`, sorted for stable processing order
pub fn discover_markdown_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .parallelism(jwalk::Parallelism::RayonNewPool(walk_parallelism()))
        .skip_hidden(false)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) if entry.file_type().is_file() => {
                let path = entry.path();
                path.extension()
                    .is_some_and(|ext| ext == "md")
                    .then_some(path)
            }
            Ok(_) => None,
            Err(e) => {
                warn!(target: "docscrape::cleanup", "Failed to read directory entry: {e}");
                None
            }
        })
        .collect();
    files.sort_unstable();
    files
}

/// Rewrite one file in place. Returns whether the contents changed.
fn clean_file(path: &Path) -> Result<bool> {
    let original = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let cleaned = post_process(&original);
    if cleaned == original {
        return Ok(false);
    }
    std::fs::write(path, cleaned)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}

/// Clean every Markdown file under `root` synchronously
pub fn cleanup_markdown_files_sync<P: ProgressReporter>(root: &Path, progress: &P) -> CleanupReport {
    let files = discover_markdown_files(root);
    debug!(
        target: "docscrape::cleanup",
        "Found {} markdown files under {}",
        files.len(),
        root.display()
    );

    let results: Vec<Result<bool>> = files
        .par_iter()
        .map(|path| {
            let result = clean_file(path);
            if let Ok(true) = result {
                progress.report_cleaned(path);
            }
            result
        })
        .collect();

    let mut report = CleanupReport {
        files_seen: files.len(),
        ..CleanupReport::default()
    };
    for result in results {
        match result {
            Ok(true) => report.files_cleaned += 1,
            Ok(false) => {}
            Err(e) => {
                warn!(target: "docscrape::cleanup", "Skipping file: {e:#}");
                report.files_failed += 1;
            }
        }
    }

    info!(
        target: "docscrape::cleanup",
        "Cleanup finished: {} of {} files rewritten, {} failed",
        report.files_cleaned,
        report.files_seen,
        report.files_failed
    );
    report
}

/// Clean every Markdown file under `root` on the blocking pool
///
/// # Errors
///
/// Fails only if the blocking task panics; per-file errors are logged and
/// counted in the report.
pub async fn cleanup_markdown_files<P: ProgressReporter>(
    root: PathBuf,
    progress: Arc<P>,
) -> Result<CleanupReport> {
    tokio::task::spawn_blocking(move || cleanup_markdown_files_sync(&root, progress.as_ref()))
        .await
        .map_err(|e| anyhow::anyhow!("Markdown cleanup task panicked: {e}"))
}
