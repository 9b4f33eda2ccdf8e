//! Error types for the feed client, the notifier and the watch loop.
//!
//! Only [`WatchError`] ever reaches the process boundary; the other two are
//! contained within the processing of a single feed.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure to obtain a feed snapshot.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The request could not be completed (DNS, connect, timeout, body read).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote answered, but not with a success status.
    #[error("HTTP {0}")]
    Status(StatusCode),

    /// The body is not a parseable RSS document.
    #[error("invalid feed: {0}")]
    Parse(#[from] rss::Error),
}

impl SourceError {
    /// Whether this failure means the feed is unreachable.
    ///
    /// A body that fails to parse still came with a success status, so the
    /// feed exists; it simply has nothing usable right now.
    pub fn is_unreachable(&self) -> bool {
        !matches!(self, SourceError::Parse(_))
    }
}

/// Failure to deliver a notification to the chat webhook.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("webhook request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("webhook answered HTTP {0}")]
    Status(StatusCode),
}

/// Fatal conditions of the watch loop.
#[derive(Debug, Error)]
pub enum WatchError {
    /// Every requested feed was dropped during seeding.
    #[error("no valid feeds left. TIP: do not specify feeds to watch {hint}")]
    NoFeeds { hint: String },
}
