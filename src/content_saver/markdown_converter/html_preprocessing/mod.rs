//! HTML preprocessing before htmd conversion.
//!
//! Selects the main content region of a page and drops site chrome.

pub mod main_content_extraction;

pub use main_content_extraction::{
    ExtractionProfile, extract_main_content, extract_main_content_from_str,
};
