//! The data types produced by a feed fetch.
//!
//! A [`FeedSnapshot`] is the normalised result of fetching one status feed:
//! whether the remote answered at all, and the [`Entry`] values it published.
//! Every source implementation converts its native format into these types so
//! the watch loop, change detection and notification stay format-agnostic.

use std::fmt;

use chrono::{DateTime, Utc};

/// Name of a status feed, e.g. `all` or `ec2-us-east-1`.
///
/// The identifier is substituted into the source's URL template to build the
/// fetch URL.  It never changes once a feed is registered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedId(String);

impl FeedId {
    /// The feed watched when no identifiers are given on the command line.
    pub const DEFAULT: &'static str = "all";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single published status entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Headline, used for severity classification.
    pub title: String,

    /// URL of the status page for this event.  Empty when the feed gave none.
    pub link: String,

    /// Body text of the entry.  Empty when the feed gave none.
    pub summary: String,

    /// Publication time, the only field change detection looks at.
    pub published_at: DateTime<Utc>,
}

/// Outcome of one fetch of one feed.
///
/// `reachable == false` means the remote did not answer with a success
/// status; that is distinct from a reachable feed with no entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedSnapshot {
    pub reachable: bool,

    /// Entries in feed order, newest first by feed convention.
    pub entries: Vec<Entry>,
}

impl FeedSnapshot {
    pub fn reachable(entries: Vec<Entry>) -> Self {
        Self {
            reachable: true,
            entries,
        }
    }

    pub fn unreachable() -> Self {
        Self {
            reachable: false,
            entries: Vec::new(),
        }
    }

    /// The entry at the head of the feed, if any.
    ///
    /// The feed's own ordering is trusted: no sorting is done here.
    pub fn newest(&self) -> Option<&Entry> {
        self.entries.first()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
