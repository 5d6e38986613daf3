//! Error module re-export
//!
//! Re-exports the parsing error types for use within the parsing module.

pub use crate::infrastructure::parsing_error::{ParsingError, ParsingResult};
