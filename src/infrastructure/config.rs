//! Configuration constants and helpers for crawling
//!
//! Centralizes target-site URLs, HTTP defaults, and logging configuration.
//! Configuration is plain immutable data passed into the infrastructure
//! clients; there is no file-backed configuration store.

use serde::{Deserialize, Serialize};

/// Amazon site URLs and extraction configuration constants
pub mod amazon {
    /// Base origin used to absolutize relative detail links
    pub const BASE_URL: &str = "https://www.amazon.sg";

    /// Accepted URL prefix for crawl requests; anything else is rejected
    /// before a request is issued
    pub const URL_PREFIX: &str = "https://www.amazon.";

    /// Path segment identifying a product detail page link
    pub const DETAIL_PATH_MARKER: &str = "/dp/";
}

/// GitHub API constants for the workflow-trigger collaborator
pub mod github {
    /// GitHub REST API base URL
    pub const API_BASE: &str = "https://api.github.com";

    /// `repository_dispatch` event type consumed by the crawl workflow
    pub const DISPATCH_EVENT_TYPE: &str = "crawl-request";

    /// Accept header for the v3 REST API
    pub const API_ACCEPT: &str = "application/vnd.github.v3+json";
}

/// Default crawling configuration values
pub mod defaults {
    /// Default request timeout in seconds
    pub const REQUEST_TIMEOUT_SECONDS: u64 = 30;

    /// Desktop browser user agent presented to the target site
    pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

    /// Redirect hops allowed before a fetch is abandoned
    pub const MAX_REDIRECTS: usize = 10;
}

/// Static browser headers sent with every page fetch.
///
/// User-Agent is handled separately by the client builder.
pub const DEFAULT_HEADERS: &[(&str, &str)] = &[
    ("Accept-Language", "en-US,en;q=0.9"),
    (
        "Accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
    ),
    ("Connection", "keep-alive"),
    ("Upgrade-Insecure-Requests", "1"),
];

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Base log level when RUST_LOG is not set (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
