//! HTML to Markdown conversion pipeline
//!
//! 1. Extract the main content region with the run's selector profile
//!    ([`html_preprocessing`])
//! 2. Convert to Markdown with htmd plus the custom heading and code rules
//!    ([`custom_handlers`])
//! 3. After the crawl, normalize fence artifacts in the written files
//!    ([`markdown_postprocessing`])

use anyhow::{Result, anyhow};
use std::future::Future;
use std::sync::Arc;

pub mod custom_handlers;
pub mod html_preprocessing;
pub mod markdown_postprocessing;

pub use custom_handlers::create_converter;
pub use html_preprocessing::{
    ExtractionProfile, extract_main_content, extract_main_content_from_str,
};
pub use markdown_postprocessing::post_process;

/// Convert an HTML fragment to Markdown synchronously (blocking)
///
/// # Errors
///
/// Returns an error when htmd fails to serialize the document.
pub fn convert_html_to_markdown_sync(html: &str) -> Result<String> {
    let converter = create_converter();
    let markdown = converter
        .convert(html)
        .map_err(|e| anyhow!("htmd conversion failed: {e}"))?;

    tracing::trace!(
        html_bytes = html.len(),
        markdown_bytes = markdown.len(),
        "Converted HTML to Markdown"
    );
    Ok(markdown.trim().to_string())
}

/// Convert HTML to Markdown on the blocking pool
///
/// The htmd DOM is `!Send`, so the whole conversion runs inside one
/// `spawn_blocking` task.
///
/// # Errors
///
/// Returns an error when conversion fails or the blocking task panics.
pub async fn convert_html_to_markdown(html: &str) -> Result<String> {
    let html = Arc::<str>::from(html);

    tokio::task::spawn_blocking(move || convert_html_to_markdown_sync(&html))
        .await
        .map_err(|e| anyhow!("HTML-to-Markdown conversion task panicked: {e}"))?
}

/// Turns an extracted content fragment into Markdown.
///
/// Page tasks call this once per saved page. An error makes the page fall
/// back to saving its raw HTML.
pub trait MarkdownConverter: Send + Sync + 'static {
    fn convert(&self, html: &str) -> impl Future<Output = Result<String>> + Send;
}

impl<C: MarkdownConverter> MarkdownConverter for Arc<C> {
    fn convert(&self, html: &str) -> impl Future<Output = Result<String>> + Send {
        (**self).convert(html)
    }
}

/// The htmd pipeline with the custom heading and code rules
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmdConverter;

impl MarkdownConverter for HtmdConverter {
    fn convert(&self, html: &str) -> impl Future<Output = Result<String>> + Send {
        convert_html_to_markdown(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_html_to_markdown_basic() {
        let html = r"
            <h1>Test Title</h1>
            <p>This is a <strong>test</strong> paragraph.</p>
        ";

        let markdown =
            convert_html_to_markdown_sync(html).expect("Test operation should succeed");
        assert!(markdown.starts_with("# Test Title"));
        assert!(markdown.contains("**test**"));
    }

    #[tokio::test]
    async fn test_async_conversion_matches_sync() {
        let html = "<h2>Section</h2><pre><code class=\"language-bash\">ls -la</code></pre>";
        let sync = convert_html_to_markdown_sync(html).expect("Test operation should succeed");
        let async_result = convert_html_to_markdown(html)
            .await
            .expect("Test operation should succeed");
        assert_eq!(sync, async_result);
        assert!(async_result.contains("## Section"));
        assert!(async_result.contains("```bash\nls -la\n```"));
    }

    #[tokio::test]
    async fn test_htmd_converter_uses_pipeline() {
        let markdown = HtmdConverter
            .convert("<h3>Notes</h3><p>Plain <em>text</em>.</p>")
            .await
            .expect("Test operation should succeed");
        assert!(markdown.starts_with("### Notes\n\nPlain "));
        assert!(markdown.contains("text"));
    }
}
