//! Stock records and their display formatting.
//!
//! A `StockSummary` is the minimal row used by list views (home and search
//! pages). A `StockDetail` extends it with the statistics and company profile
//! shown on the detail page. Both are plain serde types whose JSON shape uses
//! camelCase keys (`changePercent`, `prevClose`, ...).
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Text shown for a statistic the record does not carry.
pub const NOT_AVAILABLE: &str = "N/A";

/// Minimal per-stock record used in list views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSummary {
    /// Unique short identifier (e.g., `AAPL`).
    pub symbol: String,
    /// Display name of the company.
    pub name: String,
    /// Last traded price.
    pub price: f64,
    /// Absolute change since the previous close.
    pub change: f64,
    /// Percent change since the previous close.
    pub change_percent: f64,
    /// Traded volume.
    pub volume: u64,
    /// Category label used as the exact-match filter axis.
    pub sector: String,
}

impl StockSummary {
    /// Creates a new summary record.
    pub fn new(
        symbol: &str,
        name: &str,
        price: f64,
        change: f64,
        change_percent: f64,
        volume: u64,
        sector: &str,
    ) -> Self {
        StockSummary {
            symbol: String::from(symbol),
            name: String::from(name),
            price,
            change,
            change_percent,
            volume,
            sector: String::from(sector),
        }
    }

    /// Direction of the last move.
    pub fn trend(&self) -> Trend {
        Trend::from_change(self.change)
    }
}

/// Extended per-stock record used in the single-item view.
///
/// Statistics that a data source may not provide are `Option`s and render as
/// [`NOT_AVAILABLE`] through [`or_na`] / [`price_or_na`].
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockDetail {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: Option<u64>,
    pub sector: String,
    pub industry: String,
    pub ceo: String,
    pub description: String,
    pub website: Option<String>,
    pub market_cap: Option<String>,
    pub pe_ratio: Option<f64>,
    pub dividend_yield: Option<String>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub prev_close: Option<f64>,
    /// 52-week high.
    pub year_high: Option<f64>,
    /// 52-week low.
    pub year_low: Option<f64>,
}

impl StockDetail {
    /// Direction of the last move.
    pub fn trend(&self) -> Trend {
        Trend::from_change(self.change)
    }

    /// Projects the detail record down to the list-view summary.
    pub fn summary(&self) -> StockSummary {
        StockSummary {
            symbol: self.symbol.clone(),
            name: self.name.clone(),
            price: self.price,
            change: self.change,
            change_percent: self.change_percent,
            volume: self.volume.unwrap_or_default(),
            sector: self.sector.clone(),
        }
    }
}

/// Direction of a price move.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    /// Classifies a signed change. Exactly zero is `Flat`.
    pub fn from_change(change: f64) -> Self {
        if change > 0.0 {
            Trend::Up
        } else if change < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }

    /// Single-character marker used by the text views.
    pub fn arrow(&self) -> char {
        match self {
            Trend::Up => '▲',
            Trend::Down => '▼',
            Trend::Flat => '-',
        }
    }
}

/// Formats a price as dollars with two decimals, e.g. `$170.34`.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Formats the change line, e.g. `-0.50 (-0.15%)`.
pub fn format_change(change: f64, change_percent: f64) -> String {
    format!("{:.2} ({:.2}%)", change, change_percent)
}

/// Formats an integer with comma thousands separators, e.g. `75,000,000`.
pub fn format_volume(volume: u64) -> String {
    let digits = volume.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats an optional price, or `N/A`.
pub fn price_or_na(value: Option<f64>) -> String {
    value.map(format_price).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Formats any optional displayable value, or `N/A`.
pub fn or_na<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_gets_thousands_separators() {
        assert_eq!(format_volume(0), "0");
        assert_eq!(format_volume(999), "999");
        assert_eq!(format_volume(1_000), "1,000");
        assert_eq!(format_volume(75_000_000), "75,000,000");
        assert_eq!(format_volume(1_500_000), "1,500,000");
    }

    #[test]
    fn prices_and_changes_use_two_decimals() {
        assert_eq!(format_price(170.34), "$170.34");
        assert_eq!(format_price(2750.8), "$2750.80");
        assert_eq!(format_change(-0.5, -0.15), "-0.50 (-0.15%)");
        assert_eq!(format_change(1.5, 0.89), "1.50 (0.89%)");
    }

    #[test]
    fn missing_values_render_as_na() {
        assert_eq!(price_or_na(None), "N/A");
        assert_eq!(price_or_na(Some(169.8)), "$169.80");
        assert_eq!(or_na::<String>(None), "N/A");
        assert_eq!(or_na(Some("2.75T")), "2.75T");
    }

    #[test]
    fn trend_follows_sign_of_change() {
        assert_eq!(Trend::from_change(1.5), Trend::Up);
        assert_eq!(Trend::from_change(-5.2), Trend::Down);
        assert_eq!(Trend::from_change(0.0), Trend::Flat);
        assert_eq!(Trend::Down.to_string(), "down");
    }

    #[test]
    fn summary_json_uses_camel_case() {
        let s = StockSummary::new("V", "Visa Inc.", 230.25, 1.1, 0.48, 8_000_000, "Financials");
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["changePercent"], 0.48);
        let back: StockSummary = serde_json::from_value(json).unwrap();
        assert_eq!(back, s);
    }
}
