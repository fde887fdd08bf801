//! Bluestock Client — a terminal browser for stock listings.
//!
//! It renders the three pages of the browser from in-memory sample data (or a
//! JSON listing file): the home page with featured stocks, the search page that
//! filters listings by query and sector, and the detail page that loads one
//! stock through the simulated detail source.
//!
//! Usage example (CLI):
//! ```bash
//! bluestock_client search --query apple --sector Technology
//! bluestock_client --delay-ms 0 detail MSFT
//! bluestock_client --config ./bluestock.json home
//! ```
//!
//! Toasts raised while rendering (watchlist adds, search started, load
//! failures) are collected through a `ChannelSink` and printed after the page.
#![warn(missing_docs)]
mod args;
mod view;

use crate::args::{Args, Page, normalize_path};
use bluestock_common::config::BrowserConfig;
use bluestock_common::detail::{DetailLookup, DetailOutcome};
use bluestock_common::notification::{ChannelSink, LogSink, Notification, NotificationSink};
use bluestock_common::source::{DetailSource, SimulatedSource};
use bluestock_common::stock::StockSummary;
use bluestock_common::{BrowserError, FilterCriteria, ListingRepository, Result};
use clap::Parser;
use crossbeam_channel::Receiver;
use log::{debug, error, info, warn};
use std::fs::File;
use std::io::BufReader;

/// Everything a page needs to render.
struct App {
    config: BrowserConfig,
    listings: ListingRepository,
    sink: ChannelSink,
    json: bool,
}

impl App {
    fn print_records(&self, records: &[StockSummary]) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(records)?);
        } else {
            println!("{}", view::render_cards(records));
        }
        Ok(())
    }

    fn home(&self) -> Result<()> {
        println!("{}", view::render_hero());
        println!("Featured Stocks\n");
        self.print_records(self.listings.featured(self.config.featured_count))
    }

    fn search(&self, criteria: FilterCriteria) -> Result<()> {
        if !criteria.query.is_empty() {
            self.sink.notify(Notification::search_initiated(&criteria.query))?;
        }
        let results = criteria.apply(self.listings.all());
        info!(
            "Search {:?} in {:?}: {} of {} stocks",
            criteria.query,
            criteria.category,
            results.len(),
            self.listings.len()
        );
        self.print_records(&results)
    }

    fn sectors(&self) {
        print!("{}", view::render_sectors(&self.listings.categories()));
    }

    /// Renders the detail page for `symbol` into `out`.
    ///
    /// An unavailable source is not fatal: the page falls back to "Stock Not
    /// Found" and a destructive toast is queued. A strict lookup that misses
    /// fails with `SymbolNotFound` after rendering the same page.
    async fn detail<S: DetailSource>(
        &self,
        lookup: &DetailLookup<S>,
        symbol: &str,
        strict: bool,
        out: &mut String,
    ) -> Result<()> {
        let outcome = match lookup.fetch_detail(symbol).await {
            Ok(outcome) => outcome,
            Err(e @ BrowserError::Unavailable(_)) => {
                error!("Failed to fetch stock details: {}", e);
                self.sink.notify(Notification::load_failed())?;
                out.push_str(&view::render_not_found(symbol));
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        if let DetailOutcome::Defaulted { requested, detail } = &outcome {
            if strict {
                out.push_str(&view::render_not_found(requested));
                return Err(BrowserError::SymbolNotFound(requested.clone()));
            }
            warn!("{} is unknown, showing {} instead", requested, detail.symbol);
            out.push_str(&view::render_defaulted(requested, &detail.symbol));
        }

        let detail = outcome.into_detail();
        if self.json {
            out.push_str(&serde_json::to_string_pretty(&detail)?);
            out.push('\n');
        } else {
            out.push_str(&view::render_detail(&detail));
        }
        Ok(())
    }

    fn watch(&self, symbol: &str) -> Result<()> {
        let symbol = match self.listings.get(symbol) {
            Some(stock) => stock.symbol.clone(),
            None => symbol.to_uppercase(),
        };
        self.sink.notify(Notification::added_to_watchlist(&symbol))
    }
}

/// Prints and logs every pending toast.
fn flush_notifications(rx: &Receiver<Notification>) -> Result<()> {
    for notification in rx.try_iter() {
        println!("{}", view::render_notification(&notification));
        LogSink.notify(notification)?;
    }
    Ok(())
}

fn build_lookup(config: &BrowserConfig) -> DetailLookup<SimulatedSource> {
    let source = SimulatedSource::sample(config.fetch_delay()).with_failure_rate(config.failure_rate);
    DetailLookup::with_default(source, &config.default_symbol)
}

fn load_config(args: &Args) -> Result<BrowserConfig> {
    let mut config = match &args.config {
        Some(path) => BrowserConfig::from_file(&normalize_path(path))?,
        None => BrowserConfig::default(),
    };
    if let Some(data) = &args.data {
        config.data_path = Some(normalize_path(data));
    }
    if let Some(delay_ms) = args.delay_ms {
        config.fetch_delay_ms = delay_ms;
    }
    config.validate()?;
    debug!("Config: {:?}", config);
    Ok(config)
}

fn load_listings(config: &BrowserConfig) -> Result<ListingRepository> {
    match &config.data_path {
        Some(path) => {
            info!("Loading listings from {}", path.display());
            let file = File::open(path)?;
            ListingRepository::from_json_reader(BufReader::new(file))
        }
        None => Ok(ListingRepository::sample()),
    }
}

#[tokio::main]
async fn main() -> Result<(), BrowserError> {
    init_logger();
    let args = Args::parse();
    let config = load_config(&args)?;
    let listings = load_listings(&config)?;
    let (sink, rx) = ChannelSink::channel();

    let app = App {
        config,
        listings,
        sink,
        json: args.json,
    };

    let result = match args.page {
        Page::Home => app.home(),
        Page::Search { query, sector } => app.search(FilterCriteria::new(&query, &sector)),
        Page::Sectors => {
            app.sectors();
            Ok(())
        }
        Page::Detail { symbol, strict } => {
            let lookup = build_lookup(&app.config);
            println!("Loading stock details...");
            let mut page = String::new();
            let result = app.detail(&lookup, &symbol, strict, &mut page).await;
            print!("{}", page);
            result
        }
        Page::Watch { symbol } => app.watch(&symbol),
    };

    flush_notifications(&rx)?;
    result
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
