//! Query and sector filtering over listing records.
//!
//! A record is kept when the query is a case-insensitive substring of its
//! symbol or name (or the query is empty) and its sector equals the category
//! exactly (or the category is empty). The query is matched literally: it is
//! not trimmed, so a whitespace-only query only keeps names containing that
//! whitespace.
//!
//! Filtering is a pure function: input order is preserved and the input slice
//! is never modified.
use crate::stock::StockSummary;

/// Search text and sector selection, passed in on every recomputation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Free-text term matched against symbol and name. Empty matches all.
    pub query: String,
    /// Exact sector label. Empty matches all.
    pub category: String,
}

impl FilterCriteria {
    /// Creates criteria from a query and a category.
    pub fn new(query: &str, category: &str) -> Self {
        FilterCriteria {
            query: String::from(query),
            category: String::from(category),
        }
    }

    /// Returns `true` when neither a query nor a category is set.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.category.is_empty()
    }

    /// Match predicate for a single record.
    pub fn matches(&self, record: &StockSummary) -> bool {
        matches_query(record, &self.query.to_lowercase())
            && (self.category.is_empty() || record.sector == self.category)
    }

    /// Applies the criteria to `records`.
    pub fn apply(&self, records: &[StockSummary]) -> Vec<StockSummary> {
        filter(records, &self.query, &self.category)
    }
}

fn matches_query(record: &StockSummary, needle: &str) -> bool {
    needle.is_empty()
        || record.symbol.to_lowercase().contains(needle)
        || record.name.to_lowercase().contains(needle)
}

/// Returns the records matching `query` and `category`, in input order.
pub fn filter(records: &[StockSummary], query: &str, category: &str) -> Vec<StockSummary> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| matches_query(r, &needle))
        .filter(|r| category.is_empty() || r.sector == category)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::ListingRepository;

    fn symbols(records: &[StockSummary]) -> Vec<&str> {
        records.iter().map(|r| r.symbol.as_str()).collect()
    }

    #[test]
    fn empty_criteria_returns_everything_in_order() {
        let repo = ListingRepository::sample();
        assert_eq!(filter(repo.all(), "", ""), repo.all().to_vec());
        assert!(FilterCriteria::default().is_empty());
    }

    #[test]
    fn query_matches_name_case_insensitively() {
        let repo = ListingRepository::sample();
        assert_eq!(symbols(&filter(repo.all(), "tesla", "")), vec!["TSLA"]);
        assert_eq!(filter(repo.all(), "aapl", ""), filter(repo.all(), "AAPL", ""));
        assert_eq!(symbols(&filter(repo.all(), "aapl", "")), vec!["AAPL"]);
    }

    #[test]
    fn query_matches_symbol_substrings() {
        let repo = ListingRepository::sample();
        // Microsoft is the only row without an "a" in its symbol or name.
        let out = filter(repo.all(), "a", "");
        assert_eq!(symbols(&out), vec!["AAPL", "GOOGL", "AMZN", "TSLA", "JPM", "V", "NVDA"]);
    }

    #[test]
    fn category_is_exact_match() {
        let repo = ListingRepository::sample();
        assert_eq!(symbols(&filter(repo.all(), "", "Financials")), vec!["JPM", "V"]);
        assert!(filter(repo.all(), "", "financials").is_empty());
        assert!(filter(repo.all(), "", "Energy").is_empty());
    }

    #[test]
    fn query_and_category_combine() {
        let repo = ListingRepository::sample();
        let criteria = FilterCriteria::new("inc", "Consumer Discretionary");
        assert_eq!(symbols(&criteria.apply(repo.all())), vec!["AMZN", "TSLA"]);
    }

    #[test]
    fn whitespace_query_is_not_trimmed() {
        let repo = ListingRepository::sample();
        // Every sample name contains a single space, none contains two.
        assert_eq!(filter(repo.all(), " ", "").len(), 8);
        assert!(filter(repo.all(), "  ", "").is_empty());
    }

    #[test]
    fn filtering_is_idempotent_and_agrees_with_predicate() {
        let repo = ListingRepository::sample();
        let cases = [("", ""), ("o", ""), ("n", "Technology"), ("x", "Financials"), (" ", "")];
        for (q, c) in cases {
            let once = filter(repo.all(), q, c);
            assert_eq!(filter(&once, q, c), once);

            let criteria = FilterCriteria::new(q, c);
            for record in repo.all() {
                assert_eq!(once.contains(record), criteria.matches(record), "{q:?} {c:?} {}", record.symbol);
            }
        }
    }
}
