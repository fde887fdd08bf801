//! Pluggable data sources for stock details.
//!
//! [`DetailSource`] is the one "fetch by key" capability the detail lookup
//! depends on. A real network or storage backend implements it to replace the
//! bundled [`SimulatedSource`], which answers from a static table after an
//! artificial delay.
use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use rand::Rng;

use crate::error::BrowserError;
use crate::result::Result;
use crate::stock::StockDetail;

/// Answer of a single source round trip.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceReply {
    /// The requested key was known.
    Hit(StockDetail),
    /// The requested key was unknown; this is the record stored under the fallback key.
    Fallback(StockDetail),
    /// Neither the requested nor the fallback key is known.
    Miss,
}

/// Async source of detail records.
#[async_trait]
pub trait DetailSource: Send + Sync {
    /// Fetches the record stored under `key`, or the one under `fallback` when
    /// `key` is unknown, in one round trip.
    ///
    /// Returns `Err(BrowserError::Unavailable)` when the source itself cannot
    /// be reached.
    async fn fetch(&self, key: &str, fallback: &str) -> Result<SourceReply>;
}

/// In-memory source that simulates network latency and, optionally, outages.
pub struct SimulatedSource {
    table: HashMap<String, StockDetail>,
    delay: Duration,
    failure_rate: f64,
}

impl SimulatedSource {
    /// Creates a source over `records`, keyed by upper-cased symbol.
    pub fn new(records: Vec<StockDetail>, delay: Duration) -> Self {
        let table = records
            .into_iter()
            .map(|d| (d.symbol.to_uppercase(), d))
            .collect();
        Self {
            table,
            delay,
            failure_rate: 0.0,
        }
    }

    /// The bundled two-record table (AAPL, MSFT).
    pub fn sample(delay: Duration) -> Self {
        Self::new(sample_details(), delay)
    }

    /// Fails each fetch with probability `rate` (clamped to `[0, 1]`).
    pub fn with_failure_rate(mut self, rate: f64) -> Self {
        self.failure_rate = rate.clamp(0.0, 1.0);
        self
    }
}

#[async_trait]
impl DetailSource for SimulatedSource {
    async fn fetch(&self, key: &str, fallback: &str) -> Result<SourceReply> {
        debug!("Simulated fetch for {} ({} ms)", key, self.delay.as_millis());
        let fail = self.failure_rate > 0.0 && rand::rng().random_bool(self.failure_rate);
        tokio::time::sleep(self.delay).await;

        if fail {
            return Err(BrowserError::Unavailable(format!(
                "simulated outage while fetching {}",
                key
            )));
        }
        if let Some(detail) = self.table.get(&key.to_uppercase()) {
            return Ok(SourceReply::Hit(detail.clone()));
        }
        Ok(match self.table.get(&fallback.to_uppercase()) {
            Some(detail) => SourceReply::Fallback(detail.clone()),
            None => SourceReply::Miss,
        })
    }
}

/// Detail records bundled with the simulated source.
pub fn sample_details() -> Vec<StockDetail> {
    vec![
        StockDetail {
            symbol: String::from("AAPL"),
            name: String::from("Apple Inc."),
            price: 170.34,
            change: 1.50,
            change_percent: 0.89,
            volume: Some(75_200_000),
            sector: String::from("Technology"),
            industry: String::from("Consumer Electronics"),
            ceo: String::from("Timothy D. Cook"),
            description: String::from(
                "Apple Inc. designs, manufactures, and markets smartphones, personal computers, \
                 tablets, wearables, and accessories worldwide. It also sells various related services.",
            ),
            website: Some(String::from("https://www.apple.com")),
            market_cap: Some(String::from("2.75T")),
            pe_ratio: Some(28.5),
            dividend_yield: Some(String::from("0.55%")),
            open: Some(169.80),
            high: Some(171.20),
            low: Some(169.50),
            prev_close: Some(168.84),
            year_high: Some(199.62),
            year_low: Some(150.23),
        },
        StockDetail {
            symbol: String::from("MSFT"),
            name: String::from("Microsoft Corporation"),
            price: 330.12,
            change: -0.50,
            change_percent: -0.15,
            volume: Some(25_100_000),
            sector: String::from("Technology"),
            industry: String::from("Software - Infrastructure"),
            ceo: String::from("Satya Nadella"),
            description: String::from(
                "Microsoft Corporation develops, licenses, and supports software, services, \
                 devices, and solutions worldwide.",
            ),
            website: Some(String::from("https://www.microsoft.com")),
            market_cap: Some(String::from("2.45T")),
            pe_ratio: Some(35.2),
            dividend_yield: Some(String::from("0.85%")),
            open: Some(330.00),
            high: Some(331.50),
            low: Some(328.90),
            prev_close: Some(330.62),
            year_high: Some(366.78),
            year_low: Some(275.32),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn simulated_source_matches_any_case() {
        let source = SimulatedSource::sample(Duration::from_millis(500));
        match source.fetch("msft", "AAPL").await.unwrap() {
            SourceReply::Hit(detail) => assert_eq!(detail.ceo, "Satya Nadella"),
            other => panic!("expected hit, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_key_answers_with_fallback_in_one_delay() {
        let source = SimulatedSource::sample(Duration::from_millis(500));
        let start = tokio::time::Instant::now();
        match source.fetch("ZZZZ", "aapl").await.unwrap() {
            SourceReply::Fallback(detail) => assert_eq!(detail.symbol, "AAPL"),
            other => panic!("expected fallback, got {:?}", other),
        }
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(500) && elapsed < Duration::from_secs(1));
        assert_eq!(source.fetch("ZZZZ", "NVDA").await.unwrap(), SourceReply::Miss);
    }

    #[tokio::test(start_paused = true)]
    async fn certain_failure_reports_unavailable() {
        let source = SimulatedSource::sample(Duration::ZERO).with_failure_rate(1.0);
        match source.fetch("AAPL", "AAPL").await {
            Err(BrowserError::Unavailable(msg)) => assert!(msg.contains("AAPL")),
            other => panic!("expected Unavailable, got {:?}", other),
        }
    }
}
