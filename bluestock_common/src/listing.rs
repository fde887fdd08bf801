//! Read-only repository of stock summaries.
//!
//! The backing set is fixed at startup: either the built-in sample table or a
//! JSON array supplied by the caller. Nothing can be added or removed later.
use std::collections::HashSet;
use std::io::Read;

use log::debug;

use crate::error::BrowserError;
use crate::result::Result;
use crate::stock::StockSummary;

/// Immutable, ordered collection of listing records with unique symbols.
#[derive(Debug, Clone)]
pub struct ListingRepository {
    records: Vec<StockSummary>,
}

impl ListingRepository {
    /// Builds a repository, rejecting duplicate symbols.
    ///
    /// Symbols are compared case-insensitively, so `aapl` and `AAPL` collide.
    pub fn new(records: Vec<StockSummary>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.symbol.to_ascii_uppercase()) {
                return Err(BrowserError::DuplicateSymbol(record.symbol.clone()));
            }
        }
        debug!("Listing repository loaded with {} records", records.len());
        Ok(Self { records })
    }

    /// Parses a JSON array of summaries (camelCase keys) from `reader`.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let records: Vec<StockSummary> = serde_json::from_reader(reader)?;
        Self::new(records)
    }

    /// The built-in eight-row sample table.
    pub fn sample() -> Self {
        let records = vec![
            StockSummary::new("AAPL", "Apple Inc.", 170.34, 1.50, 0.89, 75_000_000, "Technology"),
            StockSummary::new("MSFT", "Microsoft Corp.", 330.12, -0.50, -0.15, 25_000_000, "Technology"),
            StockSummary::new("GOOGL", "Alphabet Inc.", 2750.80, 20.10, 0.74, 1_500_000, "Technology"),
            StockSummary::new("AMZN", "Amazon.com Inc.", 120.50, 2.30, 1.95, 60_000_000, "Consumer Discretionary"),
            StockSummary::new("TSLA", "Tesla Inc.", 180.00, -5.20, -2.81, 90_000_000, "Consumer Discretionary"),
            StockSummary::new("JPM", "JPMorgan Chase & Co.", 150.75, 0.80, 0.53, 12_000_000, "Financials"),
            StockSummary::new("V", "Visa Inc.", 230.25, 1.10, 0.48, 8_000_000, "Financials"),
            StockSummary::new("NVDA", "NVIDIA Corporation", 450.00, 10.50, 2.39, 50_000_000, "Technology"),
        ];
        Self { records }
    }

    /// All records in their original order.
    pub fn all(&self) -> &[StockSummary] {
        &self.records
    }

    /// Distinct sector labels, in order of first appearance.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.sector.as_str()))
            .map(|r| r.sector.clone())
            .collect()
    }

    /// Case-insensitive lookup by symbol.
    pub fn get(&self, symbol: &str) -> Option<&StockSummary> {
        self.records
            .iter()
            .find(|r| r.symbol.eq_ignore_ascii_case(symbol))
    }

    /// The first `count` records, shown as featured stocks on the home page.
    pub fn featured(&self, count: usize) -> &[StockSummary] {
        &self.records[..count.min(self.records.len())]
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the repository holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
