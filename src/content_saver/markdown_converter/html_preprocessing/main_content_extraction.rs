//! Main content extraction from HTML documents.
//!
//! This module extracts the primary content from a documentation page by:
//! 1. Marking every element matched by the removal selectors (navigation, headers,
//!    footers, sidebars, and the variant's own chrome)
//! 2. Trying the content-selector chain in priority order and taking the first
//!    element that survived removal
//! 3. Falling back to `<body>` when no selector in the chain matches
//! 4. Serializing the chosen element's inner HTML while skipping removed subtrees

use anyhow::{Result, anyhow};
use ego_tree::NodeId;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::config::CrawlConfig;
use crate::utils::{MAX_HTML_NESTING_DEPTH, MAX_HTML_SIZE};

static BODY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("body").expect("BUG: hardcoded CSS selector 'body' is invalid")
});

// ============================================================================
// Extraction Profile
// ============================================================================

/// Pre-parsed removal and content selectors for one crawl.
///
/// Built once per run from the config so page tasks never re-parse selectors.
#[derive(Debug, Clone)]
pub struct ExtractionProfile {
    removal: Vec<Selector>,
    content: Vec<Selector>,
}

impl ExtractionProfile {
    /// Parse the provider's removal list and the effective content chain.
    ///
    /// A configured content-selector override replaces the provider chain.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first selector that fails to parse.
    pub fn from_config(config: &CrawlConfig) -> Result<Self> {
        let provider = config.provider();
        let content: Vec<&str> = match config.content_selectors() {
            Some(overrides) => overrides.iter().map(String::as_str).collect(),
            None => provider.content_selectors().to_vec(),
        };
        let removal: Vec<&str> = provider.removal_selectors().collect();
        Self::new(&removal, &content)
    }

    /// Build a profile from explicit selector lists.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first selector that fails to parse.
    pub fn new(removal: &[&str], content: &[&str]) -> Result<Self> {
        Ok(Self {
            removal: parse_selectors(removal)?,
            content: parse_selectors(content)?,
        })
    }
}

fn parse_selectors(selectors: &[&str]) -> Result<Vec<Selector>> {
    selectors
        .iter()
        .map(|&sel_str| {
            Selector::parse(sel_str)
                .map_err(|e| anyhow!("Invalid CSS selector '{sel_str}': {e}"))
        })
        .collect()
}

// ============================================================================
// Element Removal Utilities
// ============================================================================

/// Collect the ids of every element matched by a removal selector.
fn collect_removed(document: &Html, removal: &[Selector]) -> HashSet<NodeId> {
    let mut to_remove: HashSet<NodeId> = HashSet::new();
    for sel in removal {
        for elem in document.select(sel) {
            to_remove.insert(elem.id());
        }
    }
    to_remove
}

/// True if `element` or any of its ancestors is in the removal set.
fn is_removed(element: &ElementRef, to_remove: &HashSet<NodeId>) -> bool {
    if to_remove.contains(&element.id()) {
        return true;
    }
    element
        .ancestors()
        .any(|ancestor| to_remove.contains(&ancestor.id()))
}

/// Serialize an element's children to HTML, skipping elements in the removal set.
///
/// This preserves the full HTML structure (tags, attributes, nesting) of
/// everything that survives.
fn serialize_html_excluding(
    element: &ElementRef,
    to_remove: &HashSet<NodeId>,
    output: &mut String,
) {
    serialize_html_excluding_depth(element, to_remove, output, 0);
}

/// Internal implementation of HTML serialization with depth tracking.
///
/// Recursion is limited to [`MAX_HTML_NESTING_DEPTH`]; deeper branches are
/// dropped with a warning.
fn serialize_html_excluding_depth(
    element: &ElementRef,
    to_remove: &HashSet<NodeId>,
    output: &mut String,
    depth: usize,
) {
    if depth > MAX_HTML_NESTING_DEPTH {
        tracing::warn!(
            element = element.value().name(),
            depth = depth,
            limit = MAX_HTML_NESTING_DEPTH,
            "Maximum HTML nesting depth exceeded, truncating output"
        );
        return;
    }

    if to_remove.contains(&element.id()) {
        return;
    }

    const VOID_ELEMENTS: &[&str] = &[
        "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
        "source", "track", "wbr",
    ];

    for child in element.children() {
        use scraper::node::Node;

        match child.value() {
            Node::Text(text) => {
                for ch in text.chars() {
                    match ch {
                        '<' => output.push_str("&lt;"),
                        '>' => output.push_str("&gt;"),
                        '&' => output.push_str("&amp;"),
                        c => output.push(c),
                    }
                }
            }
            Node::Element(_) => {
                let Some(child_elem) = ElementRef::wrap(child) else {
                    continue;
                };
                if to_remove.contains(&child_elem.id()) {
                    continue;
                }

                let elem_name = child_elem.value().name();
                output.push('<');
                output.push_str(elem_name);
                for (name, value) in child_elem.value().attrs() {
                    output.push(' ');
                    output.push_str(name);
                    output.push_str("=\"");
                    for ch in value.chars() {
                        match ch {
                            '"' => output.push_str("&quot;"),
                            '&' => output.push_str("&amp;"),
                            '<' => output.push_str("&lt;"),
                            '>' => output.push_str("&gt;"),
                            c => output.push(c),
                        }
                    }
                    output.push('"');
                }
                output.push('>');

                if VOID_ELEMENTS.contains(&elem_name) {
                    continue;
                }

                serialize_html_excluding_depth(&child_elem, to_remove, output, depth + 1);

                output.push_str("</");
                output.push_str(elem_name);
                output.push('>');
            }
            Node::Comment(comment) => {
                output.push_str("<!--");
                output.push_str(comment);
                output.push_str("-->");
            }
            _ => {}
        }
    }
}

// ============================================================================
// Main Content Extraction
// ============================================================================

/// Extract the main content region of an already-parsed document.
///
/// Returns the inner HTML of the first content-selector match that is not
/// inside a removed element, or the trimmed `<body>` when nothing in the
/// chain matches.
#[must_use]
pub fn extract_main_content(document: &Html, profile: &ExtractionProfile) -> String {
    let to_remove = collect_removed(document, &profile.removal);

    for selector in &profile.content {
        let candidate = document
            .select(selector)
            .find(|element| !is_removed(element, &to_remove));

        if let Some(element) = candidate {
            let mut output = String::new();
            serialize_html_excluding(&element, &to_remove, &mut output);
            return output;
        }
    }

    tracing::debug!("No content selector matched, falling back to <body>");

    let root = document
        .select(&BODY_SELECTOR)
        .next()
        .unwrap_or_else(|| document.root_element());
    let mut output = String::new();
    serialize_html_excluding(&root, &to_remove, &mut output);
    output
}

/// Parse `html` and extract its main content.
///
/// # Errors
///
/// Fails when the input exceeds [`MAX_HTML_SIZE`].
pub fn extract_main_content_from_str(html: &str, profile: &ExtractionProfile) -> Result<String> {
    if html.len() > MAX_HTML_SIZE {
        return Err(anyhow!(
            "HTML input too large: {} bytes. Maximum allowed: {} bytes ({} MB)",
            html.len(),
            MAX_HTML_SIZE,
            MAX_HTML_SIZE / (1024 * 1024)
        ));
    }

    let document = Html::parse_document(html);
    Ok(extract_main_content(&document, profile))
}

// ============================================================================
// TESTS
// ============================================================================
