//! Configuration module for documentation crawling
//!
//! This module provides the `CrawlConfig` struct and its type-safe builder
//! for configuring a crawl run with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod provider;
pub mod types;

// Re-exports for public API
pub use builder::{CrawlConfigBuilder, WithStartUrl, WithStorageDir};
pub use provider::{BLANKET_REMOVAL_SELECTORS, ProviderPreset, ProviderVariant};
pub use types::CrawlConfig;
