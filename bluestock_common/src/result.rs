//! Result type alias shared across the workspace.
//!
//! Defaults the error type to `BrowserError`, so functions can simply return
//! `Result<T>`.
use crate::error::BrowserError;

/// Workspace-wide `Result` alias with `BrowserError` as the default error.
pub type Result<T, E = BrowserError> = std::result::Result<T, E>;
