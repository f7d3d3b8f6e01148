//! Error types for grammar construction and parser configuration
//!
//! An address that does not match the grammar is not an error: the parse
//! entry points return `None` for that case.

use thiserror::Error;

/// Errors that can occur while building a parser
#[derive(Error, Debug)]
pub enum AddressError {
    /// A required argument was missing or blank
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The composed pattern failed to compile
    #[error("Failed to compile address grammar: {0}")]
    Grammar(#[from] regex::Error),

    /// Parser configuration could not be decoded
    #[error("Invalid parser configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for parser construction
pub type Result<T> = std::result::Result<T, AddressError>;
