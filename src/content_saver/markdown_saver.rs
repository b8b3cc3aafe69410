use anyhow::{Context, Result};
use std::path::Path;

/// Prefix a converted body with the document header.
#[must_use]
pub fn format_markdown_document(title: &str, url: &str, body: &str) -> String {
    format!("# {title}\n\n_Source: {url}_\n\n{body}")
}

/// Save markdown content to disk, creating parent directories as needed
///
/// # Arguments
///
/// * `markdown_content` - The full document text to write
/// * `path` - Destination file, usually from `map_output_path`
///
/// Existing files are overwritten.
pub async fn save_markdown_content(markdown_content: &str, path: &Path) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    tokio::fs::write(path, markdown_content)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::debug!(
        "Saved markdown to {} ({} bytes)",
        path.display(),
        markdown_content.len()
    );

    Ok(())
}
