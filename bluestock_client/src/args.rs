//! Command-line arguments for the Bluestock client.
//!
//! This module defines the CLI interface using `clap`. Each subcommand renders
//! one page of the browser. See `main` for end-to-end usage.
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a JSON config file.
    #[clap(long)]
    pub config: Option<String>,

    /// Path to a JSON listing file. Overrides `data_path` from the config.
    #[clap(long)]
    pub data: Option<String>,

    /// Simulated fetch latency in milliseconds. Overrides the config.
    #[clap(long)]
    pub delay_ms: Option<u64>,

    /// Print records as JSON instead of cards.
    #[clap(long, default_value_t = false)]
    pub json: bool,

    /// Page to render.
    #[command(subcommand)]
    pub page: Page,
}

/// Pages of the browser.
#[derive(Debug, Subcommand)]
pub enum Page {
    /// Hero text and featured stocks.
    Home,
    /// Search stocks by symbol or company name, optionally within a sector.
    Search {
        /// Search term (case-insensitive, matched against symbol and name).
        #[clap(long, short, default_value = "")]
        query: String,
        /// Exact sector label. Omit for all sectors.
        #[clap(long, short, default_value = "")]
        sector: String,
    },
    /// List the sectors available as filters.
    Sectors,
    /// Show the detail page of a single stock.
    Detail {
        /// Stock symbol, e.g. `AAPL`.
        symbol: String,
        /// Report unknown symbols as not found instead of showing the default stock.
        #[clap(long, default_value_t = false)]
        strict: bool,
    },
    /// Add a stock to the watchlist (UI only, nothing is stored).
    Watch {
        /// Stock symbol, e.g. `AAPL`.
        symbol: String,
    },
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
pub fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}
