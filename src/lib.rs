//! Bestseller Crawler - Amazon bestseller listing extraction
//!
//! This crate extracts structured product records (rank, name, price,
//! rating, review count, detail link, image URL) from a bestseller listing
//! page, tolerating class-name churn and partial markup through cascading
//! fallback selectors.

// Module declarations
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export the primary entry points
pub use application::{BestsellerCrawlUseCase, CrawlResult};
pub use domain::{BestsellerProduct, NOT_AVAILABLE};
pub use infrastructure::{BestsellerListParser, ParseContext};
