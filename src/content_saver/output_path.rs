//! URL to filesystem path projection.
//!
//! The mapping is pure: the same URL, domain, base path, and root always give
//! the same path, and nothing here touches the filesystem.

use std::path::{Path, PathBuf};
use url::Url;

/// Project a page URL onto its Markdown file under `output_root`.
///
/// The scheme, host, query, and fragment are discarded and `base_path` is
/// stripped from the front of the URL path. Directory-style paths map to
/// `index.md` inside the directory, an extension on the last segment is
/// replaced by `.md` (also when the URL ends in a slash), and `.`/`..` segments are dropped so the result always
/// stays under `output_root`.
#[must_use]
pub fn map_output_path(url: &str, domain: &str, base_path: &str, output_root: &Path) -> PathBuf {
    let url_path = url_path(url, domain);
    let relative = strip_base_path(&url_path, base_path);

    let mut segments: Vec<&str> = relative
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != "." && *segment != "..")
        .collect();

    // A trailing slash names a directory unless the last segment has an extension
    let is_directory = relative.is_empty() || relative.ends_with('/');
    if is_directory && segments.last().is_none_or(|last| drop_extension(last) == *last) {
        segments.push("index");
    }

    let Some((last, dirs)) = segments.split_last() else {
        return output_root.join("index.md");
    };

    let mut path = output_root.to_path_buf();
    for dir in dirs {
        path.push(dir);
    }
    path.push(format!("{}.md", drop_extension(last)));
    path
}

/// The file stem used as the document title.
#[must_use]
pub fn document_title(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "index".to_string())
}

fn url_path(url: &str, domain: &str) -> String {
    if let Ok(parsed) = Url::parse(url) {
        return parsed.path().to_string();
    }

    // Not absolute: strip scheme and host textually
    let without_scheme = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let without_host = without_scheme
        .strip_prefix(domain)
        .unwrap_or(without_scheme);
    let end = without_host
        .find(['?', '#'])
        .unwrap_or(without_host.len());
    without_host[..end].to_string()
}

fn strip_base_path<'a>(path: &'a str, base_path: &str) -> &'a str {
    if base_path.is_empty() {
        return path;
    }
    if let Some(rest) = path.strip_prefix(base_path) {
        return rest;
    }
    // "/guide" with base path "/guide/" is the section root
    if path == base_path.trim_end_matches('/') {
        return "";
    }
    path
}

fn drop_extension(segment: &str) -> &str {
    match segment.rfind('.') {
        Some(idx) if idx > 0 => &segment[..idx],
        _ => segment,
    }
}
