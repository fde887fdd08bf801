//!
//! Core of the Bluestock stock browser, shared with the terminal client.
//!
//! This crate aggregates:
//! - `stock` — `StockSummary` / `StockDetail` records and display formatting.
//! - `listing` — the read-only `ListingRepository`.
//! - `filter` — query and sector filtering over listing records.
//! - `source` — the pluggable `DetailSource` trait and the simulated source.
//! - `detail` — `DetailLookup`, resolving a symbol to a detail record.
//! - `notification` — toast messages and their sinks.
//! - `config` — `BrowserConfig` loaded from JSON.
//! - `error` / `result` — unified error type `BrowserError` and `Result` alias.
#![warn(missing_docs)]
pub mod config;
pub mod detail;
pub mod error;
pub mod filter;
pub mod listing;
pub mod notification;
pub mod result;
pub mod source;
pub mod stock;

pub use config::BrowserConfig;
pub use detail::{DetailLookup, DetailOutcome};
pub use error::BrowserError;
pub use filter::{FilterCriteria, filter};
pub use listing::ListingRepository;
pub use result::Result;
pub use stock::{StockDetail, StockSummary};
