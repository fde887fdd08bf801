//! Runtime configuration for the stock browser.
//!
//! Settings come from an optional JSON file; every field has a default, so an
//! empty object `{}` is a valid config. Command-line flags are applied on top
//! by the client.
//!
//! # Example
//!
//! ```json
//! {
//!   "fetch_delay_ms": 250,
//!   "failure_rate": 0.1,
//!   "default_symbol": "MSFT",
//!   "featured_count": 3,
//!   "data_path": "./listings.json"
//! }
//! ```
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::detail::DEFAULT_SYMBOL;
use crate::error::BrowserError;
use crate::result::Result;

/// Browser settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Simulated latency of a detail fetch, in milliseconds.
    pub fetch_delay_ms: u64,
    /// Probability in `[0, 1]` that a simulated fetch fails.
    pub failure_rate: f64,
    /// Symbol served when a detail lookup misses.
    pub default_symbol: String,
    /// Number of stocks shown on the home page.
    pub featured_count: usize,
    /// JSON listing file; the built-in sample table is used when absent.
    pub data_path: Option<PathBuf>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            fetch_delay_ms: 500,
            failure_rate: 0.0,
            default_symbol: String::from(DEFAULT_SYMBOL),
            featured_count: 3,
            data_path: None,
        }
    }
}

impl BrowserConfig {
    /// Reads and validates a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let config: BrowserConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.failure_rate) {
            return Err(BrowserError::Config(format!(
                "failure_rate must be within [0, 1], got {}",
                self.failure_rate
            )));
        }
        if self.default_symbol.trim().is_empty() {
            return Err(BrowserError::Config(String::from(
                "default_symbol must not be empty",
            )));
        }
        Ok(())
    }

    /// Simulated fetch latency.
    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config: BrowserConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, BrowserConfig::default());
        assert_eq!(config.fetch_delay(), Duration::from_millis(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_object_overrides_fields() {
        let config: BrowserConfig =
            serde_json::from_str(r#"{"default_symbol": "MSFT", "featured_count": 5}"#).unwrap();
        assert_eq!(config.default_symbol, "MSFT");
        assert_eq!(config.featured_count, 5);
        assert_eq!(config.fetch_delay_ms, 500);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let config = BrowserConfig {
            failure_rate: 1.5,
            ..BrowserConfig::default()
        };
        assert!(matches!(config.validate(), Err(BrowserError::Config(_))));

        let config = BrowserConfig {
            default_symbol: String::from("  "),
            ..BrowserConfig::default()
        };
        assert!(matches!(config.validate(), Err(BrowserError::Config(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = BrowserConfig::from_file(Path::new("/nonexistent/bluestock.json")).unwrap_err();
        assert!(matches!(err, BrowserError::Io(_)));
    }
}
