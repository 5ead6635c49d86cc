//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for API requests and REPL commands.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Request could not be sent or its body could not be read
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with a non-success status
    #[error("{url} responded with status {status}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    /// Response body was not the expected JSON
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A command was run without the argument it needs
    #[error("Please enter a {0}")]
    MissingArgument(&'static str),

    /// The first word of the input names no registered command
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A name cannot be used as a single URL path segment
    #[error("Invalid name: {0}")]
    InvalidName(String),
}

impl PokedexError {
    /// Returns true if the API reported that the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PokedexError::Status { status: 404, .. })
    }
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;
