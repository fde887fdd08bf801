//! Error types shared between the listing core and the client.
//!
//! The `BrowserError` enum unifies the failure cases of loading listings,
//! reading configuration, fetching stock details and delivering notifications,
//! allowing every crate in the workspace to propagate a single error type.
use std::io;

use thiserror::Error;

/// Unified error type shared by the library and the client.
#[derive(Error, Debug)]
pub enum BrowserError {
    /// I/O error originating from the standard library (data or config files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Invalid configuration value with a human-readable message.
    #[error("Config error: {0}")]
    Config(String),

    /// Two listing records share the same symbol.
    #[error("Duplicate symbol in listing: {0}")]
    DuplicateSymbol(String),

    /// The detail source could not be reached. Distinct from an unknown symbol.
    #[error("Detail source unavailable: {0}")]
    Unavailable(String),

    /// A symbol that must exist could not be resolved by the detail source.
    #[error("Stock not found: {0}")]
    SymbolNotFound(String),

    /// Notification channel send failed (receiver dropped).
    #[error("Channel send failed: {0}")]
    ChannelSend(String),
}
