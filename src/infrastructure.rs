//! Infrastructure layer for HTTP fetching, parsing, and external integrations
//!
//! Provides the fetch collaborator, the bestseller listing parser, the
//! remote workflow trigger, and logging/configuration support.

pub mod config; // Configuration constants and helpers
pub mod logging; // Logging infrastructure
pub mod parsing; // Listing extraction (the core)
pub mod parsing_error; // Typed parsing errors
pub mod simple_http_client; // Fetch collaborator
pub mod workflow_dispatch; // Remote workflow trigger

// Re-export commonly used items
pub use config::amazon;
pub use logging::{init_logging, init_logging_with_config};
pub use parsing::{BestsellerListParser, ListingSelectors, ParseContext};
pub use parsing_error::{ParsingError, ParsingResult};
pub use simple_http_client::{HttpClient, HttpClientConfig};
pub use workflow_dispatch::{WorkflowDispatchClient, WorkflowDispatchConfig};
