//! HTML parsing infrastructure for bestseller listing pages
//!
//! Trait-based parsing architecture with cascading selector strategies and
//! sentinel-based absence handling.

pub mod bestseller_list_parser;
pub mod config;
pub mod context;
pub mod error;

// Re-export public types
pub use bestseller_list_parser::BestsellerListParser;
pub use config::ListingSelectors;
pub use context::ParseContext;
pub use error::{ParsingError, ParsingResult};

use scraper::Html;

/// Parser trait with context support.
///
/// Implementations encode the propagation policy in the output type: a
/// parser whose absence handling is sentinel-based returns its records
/// directly instead of a `Result`.
pub trait ContextualParser {
    type Output;
    type Context;

    /// Parse HTML with contextual information
    fn parse_with_context(&self, html: &Html, context: &Self::Context) -> Self::Output;
}
