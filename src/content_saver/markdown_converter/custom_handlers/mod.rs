//! Custom handlers for htmd HTML-to-Markdown conversion
//!
//! This module layers the documentation-specific rules on top of htmd's
//! defaults: ATX headings, fenced code blocks tagged from `language-*`
//! classes, and plain single-backtick inline code.

use htmd::{
    Element, HtmlToMarkdown,
    element_handler::{HandlerResult, Handlers},
};
use markup5ever_rcdom::{Node, NodeData};
use std::rc::Rc;

/// Create an htmd converter with the custom handlers
///
/// Custom handlers:
/// - Headings (`<h1>`..`<h6>`): `#` repeated per level, trimmed inline content
/// - Code blocks (`<pre>`): fenced, language read from the `<code>` child
/// - Inline code (`<code>` outside `<pre>`): wrapped in single backticks
pub fn create_converter() -> HtmlToMarkdown {
    HtmlToMarkdown::builder()
        .add_handler(vec!["h1", "h2", "h3", "h4", "h5", "h6"], heading_handler)
        .add_handler(vec!["pre"], pre_handler)
        .add_handler(vec!["code"], code_handler)
        .build()
}

/// Handle `<h1>`..`<h6>` elements
fn heading_handler(handlers: &dyn Handlers, element: Element) -> Option<HandlerResult> {
    let level = element_tag(element.node)
        .as_deref()
        .and_then(heading_level)
        .unwrap_or(1);

    let content = handlers.walk_children(element.node).content;
    let text = content.replace('\n', " ");
    let text = text.trim();

    if text.is_empty() {
        return Some(HandlerResult::from(String::new()));
    }

    Some(HandlerResult::from(format!(
        "\n\n{} {}\n\n",
        "#".repeat(level),
        text
    )))
}

/// Handle `<pre>` elements - code blocks with fences
///
/// A `<pre>` without a `<code>` child is fenced too, with an empty language
/// tag. Single-line results are turned back into inline code by the cleanup
/// pass.
fn pre_handler(_handlers: &dyn Handlers, element: Element) -> Option<HandlerResult> {
    // Raw text keeps indentation and angle brackets intact
    let raw = extract_raw_text(element.node);

    // Already fenced upstream: pass through rather than nesting fences
    if raw.contains("```") {
        return Some(HandlerResult::from(format!("\n\n{raw}\n\n")));
    }

    let content = raw.trim_matches('\n');
    let language = code_child_language(element.node).unwrap_or_default();

    Some(HandlerResult::from(format!(
        "\n\n```{language}\n{content}\n```\n\n"
    )))
}

/// Handle `<code>` elements outside `<pre>` - inline code
fn code_handler(_handlers: &dyn Handlers, element: Element) -> Option<HandlerResult> {
    let content = extract_raw_text(element.node);

    if is_inside_pre(element.node) {
        return Some(HandlerResult::from(content));
    }

    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Some(HandlerResult::from(String::new()));
    }

    Some(HandlerResult::from(format!("`{trimmed}`")))
}

// === Helper Functions ===

fn heading_level(tag: &str) -> Option<usize> {
    let level = tag.strip_prefix('h')?.parse::<usize>().ok()?;
    (1..=6).contains(&level).then_some(level)
}

/// Local name of an element node
fn element_tag(node: &Rc<Node>) -> Option<String> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.to_string()),
        _ => None,
    }
}

/// Extract raw text content from a node tree, preserving all whitespace
fn extract_raw_text(node: &Rc<Node>) -> String {
    let mut text = String::new();

    match &node.data {
        NodeData::Text { contents } => {
            text.push_str(&contents.borrow());
        }
        NodeData::Element { .. } | NodeData::Document | NodeData::Doctype { .. } => {
            for child in node.children.borrow().iter() {
                text.push_str(&extract_raw_text(child));
            }
        }
        NodeData::Comment { .. } | NodeData::ProcessingInstruction { .. } => {}
    }

    text
}

/// Check if a node is inside a <pre> element
fn is_inside_pre(node: &Rc<Node>) -> bool {
    let mut current = node.parent.take();
    node.parent.set(current.clone());

    while let Some(weak_parent) = current {
        let Some(parent) = weak_parent.upgrade() else {
            break;
        };
        if let NodeData::Element { ref name, .. } = parent.data
            && &*name.local == "pre"
        {
            return true;
        }
        current = parent.parent.take();
        parent.parent.set(current.clone());
    }
    false
}

/// Language named by a `language-<name>` class on the first `<code>` child
fn code_child_language(pre: &Rc<Node>) -> Option<String> {
    pre.children.borrow().iter().find_map(|child| match &child.data {
        NodeData::Element { name, attrs, .. } if &*name.local == "code" => {
            let attrs = attrs.borrow();
            get_attr(&attrs, "class").and_then(|class| language_from_class(&class))
        }
        _ => None,
    })
}

fn language_from_class(class: &str) -> Option<String> {
    class
        .split_whitespace()
        .find_map(|token| token.strip_prefix("language-"))
        .filter(|lang| !lang.is_empty())
        .map(str::to_string)
}

/// Get attribute value from element
fn get_attr(attrs: &[html5ever::Attribute], name: &str) -> Option<String> {
    attrs
        .iter()
        .find(|a| &*a.name.local == name)
        .map(|a| a.value.to_string())
        .filter(|v| !v.trim().is_empty())
}
