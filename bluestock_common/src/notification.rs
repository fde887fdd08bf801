//! Ephemeral user-facing notifications ("toasts").
//!
//! Notifications describe something that just happened (a stock added to the
//! watchlist, a search started, a detail load failed). Sinks only display or
//! forward them; emitting one never changes any listing or lookup state.
use chrono::{DateTime, Utc};
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{info, warn};
use strum_macros::Display;

use crate::error::BrowserError;
use crate::result::Result;

/// Visual weight of a notification.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Destructive,
}

/// A single toast message.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Short headline.
    pub title: String,
    /// One-sentence body.
    pub description: String,
    /// Info or destructive.
    pub kind: NotificationKind,
    /// Creation time (UTC).
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Creates an info notification.
    pub fn info(title: &str, description: &str) -> Self {
        Self::with_kind(title, description, NotificationKind::Info)
    }

    /// Creates a destructive (error) notification.
    pub fn destructive(title: &str, description: &str) -> Self {
        Self::with_kind(title, description, NotificationKind::Destructive)
    }

    fn with_kind(title: &str, description: &str, kind: NotificationKind) -> Self {
        Notification {
            title: String::from(title),
            description: String::from(description),
            kind,
            created_at: Utc::now(),
        }
    }

    /// `symbol` was added to the watchlist. The watchlist itself is not stored.
    pub fn added_to_watchlist(symbol: &str) -> Self {
        Self::info(
            "Added to Watchlist!",
            &format!("{} has been added to your watchlist. (UI Only)", symbol),
        )
    }

    /// A search for `query` was submitted.
    pub fn search_initiated(query: &str) -> Self {
        Self::info("Search Initiated", &format!("Searching for \"{}\"...", query))
    }

    /// Stock details could not be loaded.
    pub fn load_failed() -> Self {
        Self::destructive("Error", "Could not load stock details. Please try again.")
    }
}

/// Receiver of notifications.
pub trait NotificationSink {
    /// Delivers `notification`.
    fn notify(&self, notification: Notification) -> Result<()>;
}

/// Sink that writes notifications to the log.
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, notification: Notification) -> Result<()> {
        match notification.kind {
            NotificationKind::Info => info!("{}: {}", notification.title, notification.description),
            NotificationKind::Destructive => {
                warn!("{}: {}", notification.title, notification.description)
            }
        }
        Ok(())
    }
}

/// Sink that forwards notifications over a crossbeam channel.
#[derive(Clone)]
pub struct ChannelSink {
    tx: Sender<Notification>,
}

impl ChannelSink {
    /// Creates a sink and the receiver that drains it.
    pub fn channel() -> (Self, Receiver<Notification>) {
        let (tx, rx) = unbounded();
        (Self { tx }, rx)
    }
}

impl NotificationSink for ChannelSink {
    fn notify(&self, notification: Notification) -> Result<()> {
        self.tx
            .send(notification)
            .map_err(|e| BrowserError::ChannelSend(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watchlist_message_names_the_symbol() {
        let n = Notification::added_to_watchlist("TSLA");
        assert_eq!(n.title, "Added to Watchlist!");
        assert_eq!(n.description, "TSLA has been added to your watchlist. (UI Only)");
        assert_eq!(n.kind, NotificationKind::Info);
    }

    #[test]
    fn load_failure_is_destructive() {
        let n = Notification::load_failed();
        assert_eq!(n.kind, NotificationKind::Destructive);
        assert_eq!(n.kind.to_string(), "destructive");
    }

    #[test]
    fn channel_sink_delivers_in_order() {
        let (sink, rx) = ChannelSink::channel();
        sink.notify(Notification::search_initiated("apple")).unwrap();
        sink.notify(Notification::added_to_watchlist("AAPL")).unwrap();

        let received: Vec<String> = rx.try_iter().map(|n| n.title).collect();
        assert_eq!(received, vec!["Search Initiated", "Added to Watchlist!"]);
    }

    #[test]
    fn channel_sink_fails_when_receiver_is_gone() {
        let (sink, rx) = ChannelSink::channel();
        drop(rx);
        let err = sink.notify(Notification::load_failed()).unwrap_err();
        assert!(matches!(err, BrowserError::ChannelSend(_)));
    }

    #[test]
    fn log_sink_accepts_everything() {
        assert!(LogSink.notify(Notification::load_failed()).is_ok());
    }
}
