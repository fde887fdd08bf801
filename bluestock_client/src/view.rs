//! Text rendering of the browser pages.
//!
//! Every function returns a `String` so pages can be printed or inspected in
//! tests. Layout follows the web pages: cards for list views, header plus
//! statistics and company profile for the detail view.
use bluestock_common::notification::{Notification, NotificationKind};
use bluestock_common::stock::{
    StockDetail, StockSummary, format_change, format_price, format_volume, or_na, price_or_na,
};

/// Shown when a search yields nothing.
pub const EMPTY_RESULTS: &str = "No stocks found matching your criteria.";
/// Hint printed below [`EMPTY_RESULTS`].
pub const EMPTY_HINT: &str = "Try adjusting your search or filters.";

/// Hero section of the home page.
pub fn render_hero() -> String {
    [
        "Analyze Stocks Smarter",
        "Bluestock empowers you with cutting-edge tools and insights to navigate the stock market with confidence.",
        "",
        "  * Powerful Search: Instantly find any stock with our comprehensive search.",
        "  * Detailed Analytics: Dive deep into stock performance with rich data and metrics.",
        "  * Interactive Charts: Visualize trends and patterns with dynamic, easy-to-use charts.",
        "",
    ]
    .join("\n")
}

/// A single stock card.
pub fn render_card(stock: &StockSummary) -> String {
    format!(
        "{:<6} {}\n  {}\n  {} {}\n  Volume: {}\n",
        stock.symbol,
        stock.name,
        format_price(stock.price),
        stock.trend().arrow(),
        format_change(stock.change, stock.change_percent),
        format_volume(stock.volume)
    )
}

/// A list of cards, or the empty-results message.
pub fn render_cards(stocks: &[StockSummary]) -> String {
    if stocks.is_empty() {
        return format!("{}\n{}\n", EMPTY_RESULTS, EMPTY_HINT);
    }
    stocks
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n")
}

/// The sector selector: "All Sectors" followed by each label.
pub fn render_sectors(sectors: &[String]) -> String {
    let mut out = String::from("All Sectors\n");
    for sector in sectors {
        out.push_str(sector);
        out.push('\n');
    }
    out
}

/// Full detail page.
pub fn render_detail(stock: &StockDetail) -> String {
    let mut out = format!(
        "{} - {}\n{}  {} {}\n\n[ Chart data will be displayed here ]\n\nKey Statistics\n",
        stock.symbol,
        stock.name,
        format_price(stock.price),
        stock.trend().arrow(),
        format_change(stock.change, stock.change_percent)
    );

    let stats = [
        ("Open", price_or_na(stock.open)),
        ("High", price_or_na(stock.high)),
        ("Low", price_or_na(stock.low)),
        ("Prev. Close", price_or_na(stock.prev_close)),
        ("Volume", or_na(stock.volume.map(format_volume))),
        ("Market Cap", or_na(stock.market_cap.as_deref())),
        ("P/E Ratio", or_na(stock.pe_ratio.map(|v| format!("{:.2}", v)))),
        ("Dividend Yield", or_na(stock.dividend_yield.as_deref())),
        ("52 Wk High", price_or_na(stock.year_high)),
        ("52 Wk Low", price_or_na(stock.year_low)),
    ];
    for (label, value) in stats {
        out.push_str(&format!("  {:<15} {}\n", format!("{}:", label), value));
    }

    out.push_str(&format!(
        "\nAbout {}\n  {}\n  Sector:   {}\n  Industry: {}\n  CEO:      {}\n",
        stock.name, stock.description, stock.sector, stock.industry, stock.ceo
    ));
    if let Some(website) = &stock.website {
        out.push_str(&format!("  Website:  {}\n", website));
    }
    out
}

/// Banner above a detail page served for an unknown symbol.
pub fn render_defaulted(requested: &str, shown: &str) -> String {
    format!("No details for {}, showing {} instead.\n\n", requested, shown)
}

/// Page shown when no record can be displayed.
pub fn render_not_found(symbol: &str) -> String {
    format!("Stock Not Found: {}\nBack to Search: bluestock search\n", symbol)
}

/// A toast line.
pub fn render_notification(notification: &Notification) -> String {
    let marker = match notification.kind {
        NotificationKind::Info => "i",
        NotificationKind::Destructive => "!",
    };
    format!(
        "[{}] {} {}",
        marker, notification.title, notification.description
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bluestock_common::ListingRepository;
    use bluestock_common::source::sample_details;

    #[test]
    fn card_shows_price_change_and_volume() {
        let repo = ListingRepository::sample();
        let card = render_card(repo.get("MSFT").unwrap());
        assert!(card.contains("Microsoft Corp."));
        assert!(card.contains("$330.12"));
        assert!(card.contains("▼ -0.50 (-0.15%)"));
        assert!(card.contains("Volume: 25,000,000"));
    }

    #[test]
    fn empty_list_renders_hint() {
        let text = render_cards(&[]);
        assert!(text.starts_with(EMPTY_RESULTS));
        assert!(text.contains(EMPTY_HINT));
    }

    #[test]
    fn detail_page_fills_missing_stats_with_na() {
        let mut detail = sample_details().remove(0);
        let full = render_detail(&detail);
        assert!(full.contains("P/E Ratio:      28.50"));
        assert!(full.contains("Website:  https://www.apple.com"));

        detail.pe_ratio = None;
        detail.open = None;
        detail.website = None;
        let sparse = render_detail(&detail);
        assert!(sparse.contains("P/E Ratio:      N/A"));
        assert!(sparse.contains("Open:           N/A"));
        assert!(!sparse.contains("Website:"));
    }

    #[test]
    fn sectors_start_with_all() {
        let text = render_sectors(&ListingRepository::sample().categories());
        assert_eq!(
            text,
            "All Sectors\nTechnology\nConsumer Discretionary\nFinancials\n"
        );
    }

    #[test]
    fn toasts_are_marked_by_kind() {
        let line = render_notification(&Notification::load_failed());
        assert_eq!(line, "[!] Error Could not load stock details. Please try again.");
    }
}
