//! Progress reporting abstraction for crawl operations
//!
//! Defines the `ProgressReporter` trait for lifecycle event reporting
//! and provides a no-op and a console implementation.

use std::path::Path;
use std::sync::Arc;

/// Trait for reporting crawl progress at key lifecycle events
///
/// Implementations are shared by every page task, so they must be
/// `Send + Sync` and cheap to call.
pub trait ProgressReporter: Send + Sync + 'static {
    /// Report that a URL was claimed and will be fetched
    fn report_claimed(&self, url: &str);

    /// Report that converted Markdown was written
    fn report_saved(&self, url: &str, path: &Path);

    /// Report that the raw body was written after a conversion failure
    fn report_fallback_saved(&self, url: &str, path: &Path);

    /// Report that a page could not be fetched, extracted, or written
    fn report_failed(&self, url: &str, error: &str);

    /// Report that the cleanup pass rewrote a file
    fn report_cleaned(&self, path: &Path);
}

/// Progress reporter that does nothing
///
/// Used by library callers that don't need progress updates.
/// All methods are no-ops and will be inlined away by the compiler.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    #[inline(always)]
    fn report_claimed(&self, _url: &str) {}

    #[inline(always)]
    fn report_saved(&self, _url: &str, _path: &Path) {}

    #[inline(always)]
    fn report_fallback_saved(&self, _url: &str, _path: &Path) {}

    #[inline(always)]
    fn report_failed(&self, _url: &str, _error: &str) {}

    #[inline(always)]
    fn report_cleaned(&self, _path: &Path) {}
}

/// Prints one line per event to stdout, as the CLI shows them
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleProgress;

impl ProgressReporter for ConsoleProgress {
    fn report_claimed(&self, url: &str) {
        println!("Found: {url}");
    }

    fn report_saved(&self, _url: &str, path: &Path) {
        println!("Saved: {}", path.display());
    }

    fn report_fallback_saved(&self, _url: &str, path: &Path) {
        println!("Saved (raw HTML): {}", path.display());
    }

    fn report_failed(&self, url: &str, error: &str) {
        eprintln!("Failed: {url}: {error}");
    }

    fn report_cleaned(&self, path: &Path) {
        println!("Cleaned: {}", path.display());
    }
}

/// Share one reporter between the crawl and the caller
impl<P: ProgressReporter> ProgressReporter for Arc<P> {
    fn report_claimed(&self, url: &str) {
        (**self).report_claimed(url);
    }

    fn report_saved(&self, url: &str, path: &Path) {
        (**self).report_saved(url, path);
    }

    fn report_fallback_saved(&self, url: &str, path: &Path) {
        (**self).report_fallback_saved(url, path);
    }

    fn report_failed(&self, url: &str, error: &str) {
        (**self).report_failed(url, error);
    }

    fn report_cleaned(&self, path: &Path) {
        (**self).report_cleaned(path);
    }
}
