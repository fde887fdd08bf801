//! Symbol to detail-record lookup.
//!
//! `DetailLookup` wraps a [`DetailSource`] and resolves a requested symbol to a
//! [`StockDetail`]. A miss does not fail: the designated default record is
//! returned as [`DetailOutcome::Defaulted`] so the caller can still tell it
//! apart from a real match and decide how to present it. Only a failing source
//! produces an error.
//!
//! Every call goes to the source. There is no caching and concurrent requests
//! for the same symbol are not merged.
use log::{info, warn};

use crate::error::BrowserError;
use crate::result::Result;
use crate::source::{DetailSource, SourceReply};
use crate::stock::StockDetail;

/// Symbol served when a lookup misses, unless configured otherwise.
pub const DEFAULT_SYMBOL: &str = "AAPL";

/// Result of a successful lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailOutcome {
    /// The requested symbol was known.
    Found(StockDetail),
    /// The requested symbol was unknown; `detail` is the default record.
    Defaulted {
        /// Symbol the caller asked for.
        requested: String,
        /// The default record served instead.
        detail: StockDetail,
    },
}

impl DetailOutcome {
    /// The record to display, whichever branch produced it.
    pub fn detail(&self) -> &StockDetail {
        match self {
            DetailOutcome::Found(detail) => detail,
            DetailOutcome::Defaulted { detail, .. } => detail,
        }
    }

    /// Consumes the outcome, returning the record.
    pub fn into_detail(self) -> StockDetail {
        match self {
            DetailOutcome::Found(detail) => detail,
            DetailOutcome::Defaulted { detail, .. } => detail,
        }
    }

    /// Returns `true` if the default record was substituted for a miss.
    pub fn is_fallback(&self) -> bool {
        matches!(self, DetailOutcome::Defaulted { .. })
    }
}

/// Resolves symbols through a [`DetailSource`].
pub struct DetailLookup<S> {
    source: S,
    default_symbol: String,
}

impl<S: DetailSource> DetailLookup<S> {
    /// Creates a lookup that falls back to [`DEFAULT_SYMBOL`].
    pub fn new(source: S) -> Self {
        Self::with_default(source, DEFAULT_SYMBOL)
    }

    /// Creates a lookup with a custom fallback symbol.
    pub fn with_default(source: S, default_symbol: &str) -> Self {
        Self {
            source,
            default_symbol: String::from(default_symbol),
        }
    }

    /// The symbol served on a miss.
    pub fn default_symbol(&self) -> &str {
        &self.default_symbol
    }

    /// Fetches the detail record for `symbol` in a single source round trip.
    ///
    /// Errors with `Unavailable` when the source fails, and with
    /// `SymbolNotFound` only if the default record itself is missing.
    pub async fn fetch_detail(&self, symbol: &str) -> Result<DetailOutcome> {
        info!("Fetching details for {}", symbol);
        match self.source.fetch(symbol, &self.default_symbol).await? {
            SourceReply::Hit(detail) => Ok(DetailOutcome::Found(detail)),
            SourceReply::Fallback(detail) => {
                warn!(
                    "No details for {}, serving default {}",
                    symbol, self.default_symbol
                );
                Ok(DetailOutcome::Defaulted {
                    requested: String::from(symbol),
                    detail,
                })
            }
            SourceReply::Miss => Err(BrowserError::SymbolNotFound(self.default_symbol.clone())),
        }
    }
}
