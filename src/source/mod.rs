//! Feed source abstraction layer.
//!
//! This module defines the [`FeedSource`] trait and the snapshot types it
//! produces.  The only concrete implementation is [`RssSource`], which fetches
//! the AWS status RSS feeds over HTTP.
//!
//! ## For contributors
//!
//! A new source (a different status provider, a JSON API, a fixture directory)
//! only has to implement [`FeedSource`]; seeding, change detection and
//! notification never look past the [`FeedSnapshot`] it returns.

mod entry;
mod rss;

pub use self::entry::{Entry, FeedId, FeedSnapshot};
pub use self::rss::{RssSource, DEFAULT_URL_TEMPLATE, FEED_PLACEHOLDER};

#[cfg(test)]
pub(crate) use self::entry::tests::make_entry;

/// Trait that every feed source must implement.
///
/// The watch loop calls [`fetch()`](FeedSource::fetch) once per feed per
/// cycle, strictly sequentially.
pub trait FeedSource {
    /// The URL the given feed is fetched from, used in diagnostics.
    fn url(&self, feed: &FeedId) -> String;

    /// Fetch the current state of a feed.
    ///
    /// This never fails: network errors and non-success responses are
    /// reported as an unreachable snapshot.  Implementations must not retry;
    /// pacing belongs to the caller.
    fn fetch(&self, feed: &FeedId) -> FeedSnapshot;
}
