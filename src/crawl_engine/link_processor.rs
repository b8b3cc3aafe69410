//! Link discovery
//!
//! This module pulls anchor targets out of a parsed page and resolves them to
//! canonical absolute URLs.

use log::debug;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::utils::resolve_link;

static LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("a[href]").expect("LINK_SELECTOR: hardcoded selector is valid")
});

static BASE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("base[href]").expect("BASE_SELECTOR: hardcoded selector is valid")
});

/// Base URL for resolving relative links: the first `<base href>` when it
/// resolves, otherwise the page URL.
#[must_use]
pub fn document_base(document: &Html, page_url: &Url) -> Url {
    document
        .select(&BASE_SELECTOR)
        .next()
        .and_then(|base| base.value().attr("href"))
        .and_then(|href| page_url.join(href.trim()).ok())
        .unwrap_or_else(|| page_url.clone())
}

/// Extract every navigable link from `document`, resolved and de-fragmented.
///
/// Duplicates within the page are kept; the visited set handles them.
#[must_use]
pub fn extract_links(document: &Html, page_url: &Url) -> Vec<Url> {
    let base = document_base(document, page_url);
    let links: Vec<Url> = document
        .select(&LINK_SELECTOR)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter_map(|href| resolve_link(&base, href))
        .collect();

    debug!(
        target: "docscrape::links",
        "Extracted {} links from {}",
        links.len(),
        page_url
    );
    links
}
