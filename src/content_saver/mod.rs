//! Content saving utilities: path mapping, conversion, and persistence

// Module declarations
pub mod markdown_converter;
mod markdown_saver;
mod output_path;

// Re-export public API from markdown_saver module
pub use markdown_saver::{format_markdown_document, save_markdown_content};

// Re-export public API from output_path module
pub use output_path::{document_title, map_output_path};
