//! RSS feed source for the AWS status feeds.
//!
//! Fetches `<template with {feed} replaced>` over HTTP with a blocking
//! [`reqwest`] client and parses the body with the [`rss`] crate.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use tracing::debug;

use super::{Entry, FeedId, FeedSnapshot, FeedSource};
use crate::error::SourceError;

/// Placeholder substituted with the feed identifier in URL templates.
pub const FEED_PLACEHOLDER: &str = "{feed}";

/// URL template of the public AWS status feeds.
pub const DEFAULT_URL_TEMPLATE: &str = "http://status.aws.amazon.com/rss/{feed}.rss";

/// Total timeout for one feed request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("aws-status-watch/", env!("CARGO_PKG_VERSION"));

/// An RSS status feed source.
pub struct RssSource {
    client: Client,
    /// Fetch URL template; every `{feed}` is replaced by the feed identifier.
    url_template: String,
}

impl RssSource {
    /// Create a source fetching feeds from `url_template`.
    pub fn new(url_template: impl Into<String>) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            url_template: url_template.into(),
        })
    }

    /// Parse an already-fetched [`rss::Channel`] into [`Entry`] values.
    ///
    /// Pure (no I/O) so tests can exercise it without the network.  Items
    /// whose `pubDate` is missing or not RFC 2822 are left out: without a
    /// timestamp they cannot take part in change detection.
    pub fn parse_channel(channel: &rss::Channel) -> Vec<Entry> {
        channel
            .items()
            .iter()
            .filter_map(|item| {
                let published_at = item
                    .pub_date()
                    .and_then(|d| DateTime::parse_from_rfc2822(d).ok())
                    .map(|dt| dt.with_timezone(&Utc))?;

                Some(Entry {
                    title: item.title().unwrap_or("(untitled)").to_string(),
                    link: item.link().unwrap_or_default().to_string(),
                    summary: item.description().unwrap_or_default().to_string(),
                    published_at,
                })
            })
            .collect()
    }

    fn try_fetch(&self, url: &str) -> Result<Vec<Entry>, SourceError> {
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status));
        }

        let body = response.bytes()?;
        let channel = rss::Channel::read_from(body.as_ref())?;
        Ok(Self::parse_channel(&channel))
    }
}

impl FeedSource for RssSource {
    fn url(&self, feed: &FeedId) -> String {
        self.url_template.replace(FEED_PLACEHOLDER, feed.as_str())
    }

    fn fetch(&self, feed: &FeedId) -> FeedSnapshot {
        let url = self.url(feed);

        match self.try_fetch(&url) {
            Ok(entries) => FeedSnapshot::reachable(entries),
            Err(e) if e.is_unreachable() => {
                debug!("Feed {feed} unreachable at {url}: {e}");
                FeedSnapshot::unreachable()
            }
            Err(e) => {
                debug!("Feed {feed} answered with an unusable body: {e}");
                FeedSnapshot::reachable(Vec::new())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
