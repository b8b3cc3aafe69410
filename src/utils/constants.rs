//! Shared configuration constants for docscrape
//!
//! This module contains default values and configuration constants used
//! throughout the codebase to ensure consistency and avoid magic numbers.

/// Default maximum crawl depth: 5 link hops from the seed
pub const DEFAULT_MAX_DEPTH: u8 = 5;

/// Default number of pages fetched at the same time
pub const DEFAULT_MAX_CONCURRENCY: usize = 5;

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Translated copies of the manuals live under these path segments.
pub const DEFAULT_LOCALE_EXCLUSIONS: &[&str] = &["/ja-jp/", "/ko-kr/", "/zh-cn/", "/zh-tw/"];

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("docscrape/", env!("CARGO_PKG_VERSION"));

/// Pages larger than this are rejected before DOM parsing (10 MiB)
pub const MAX_HTML_SIZE: usize = 10 * 1024 * 1024;

/// Elements nested deeper than this are dropped during serialization
pub const MAX_HTML_NESTING_DEPTH: usize = 100;
