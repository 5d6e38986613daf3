//! Parsing context for HTML extraction
//!
//! Context objects carry per-call information into the parser: the page
//! being parsed and the origin used to absolutize relative links.

use crate::infrastructure::config::amazon;

/// Context information for one listing extraction call
#[derive(Debug, Clone)]
pub struct ParseContext {
    /// URL of the page being parsed, for diagnostics
    pub url: String,

    /// Base origin for resolving relative detail links
    pub base_url: String,
}

impl ParseContext {
    /// Create new parse context
    pub fn new(url: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            base_url: base_url.into(),
        }
    }

    /// Context for a page on the default site origin
    pub fn for_url(url: impl Into<String>) -> Self {
        Self::new(url, amazon::BASE_URL)
    }
}
