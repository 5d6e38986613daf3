//! Parsing error types for bestseller listing extraction
//!
//! Field-level absence is never an error; these types cover construction
//! faults and the per-item conditions that cause an item to be dropped.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ParsingError {
    #[error("Invalid CSS selector: {selector} - {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("No product fields resolved for listing item {index}")]
    EmptyListingItem { index: usize },

    #[error("URL resolution failed: {url} - {reason}")]
    UrlResolutionFailed {
        url: String,
        reason: String,
        base_url: Option<String>,
    },
}

impl ParsingError {
    /// Create an invalid selector error
    pub fn invalid_selector(selector: &str, reason: &str) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an empty listing item error for a decorative node
    pub fn empty_listing_item(index: usize) -> Self {
        Self::EmptyListingItem { index }
    }
}

pub type ParsingResult<T> = Result<T, ParsingError>;
