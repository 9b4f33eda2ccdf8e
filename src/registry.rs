//! Watched feeds and their last-seen publication times.
//!
//! [`seed`] validates the requested feed names once at startup and produces
//! the [`WatchSet`] the watch loop owns for the rest of the run.  Feeds that
//! are unreachable at that moment are dropped for good.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::pace::Pacer;
use crate::source::{FeedId, FeedSnapshot, FeedSource};

/// Per-feed record of the most recent publication already accounted for.
///
/// `last_seen_at` never moves backwards: the only mutator is
/// [`advance`](WatchState::advance), which accepts strictly newer times only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchState {
    last_seen_at: DateTime<Utc>,
}

impl WatchState {
    pub fn new(last_seen_at: DateTime<Utc>) -> Self {
        Self { last_seen_at }
    }

    /// Initial state for a freshly validated feed: its newest entry's time,
    /// or `started_at` when the feed has nothing published yet.
    pub fn seeded_from(snapshot: &FeedSnapshot, started_at: DateTime<Utc>) -> Self {
        let last_seen_at = snapshot
            .newest()
            .map(|entry| entry.published_at)
            .unwrap_or(started_at);
        Self::new(last_seen_at)
    }

    pub fn last_seen_at(&self) -> DateTime<Utc> {
        self.last_seen_at
    }

    /// Move `last_seen_at` forward to `published_at` if it is strictly newer.
    ///
    /// Returns whether the state changed.
    pub fn advance(&mut self, published_at: DateTime<Utc>) -> bool {
        if published_at > self.last_seen_at {
            self.last_seen_at = published_at;
            true
        } else {
            false
        }
    }
}

/// One watched feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Watched {
    pub feed: FeedId,
    pub state: WatchState,
}

/// The feeds under watch, in the fixed order established at seeding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchSet {
    feeds: Vec<Watched>,
}

impl WatchSet {
    pub fn len(&self) -> usize {
        self.feeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.feeds.is_empty()
    }

    pub fn contains(&self, feed: &FeedId) -> bool {
        self.feeds.iter().any(|w| &w.feed == feed)
    }

    #[cfg(test)]
    pub fn get(&self, feed: &FeedId) -> Option<&WatchState> {
        self.feeds.iter().find(|w| &w.feed == feed).map(|w| &w.state)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Watched> {
        self.feeds.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Watched> {
        self.feeds.iter_mut()
    }

    fn insert(&mut self, feed: FeedId, state: WatchState) {
        self.feeds.push(Watched { feed, state });
    }
}

/// Validate `candidates` in input order and build the initial [`WatchSet`].
///
/// Each candidate is fetched exactly once, with a `request_interval` pause
/// after every fetch.  Unreachable feeds are logged and left out; duplicates
/// keep the position of their first occurrence.  The result may be empty,
/// which the caller must treat as fatal.
pub fn seed<S, P>(
    candidates: &[FeedId],
    source: &S,
    pacer: &mut P,
    request_interval: Duration,
    started_at: DateTime<Utc>,
) -> WatchSet
where
    S: FeedSource + ?Sized,
    P: Pacer + ?Sized,
{
    let mut set = WatchSet::default();

    for feed in candidates {
        if set.contains(feed) {
            debug!("Feed {feed} listed more than once, watching it once");
            continue;
        }

        let snapshot = source.fetch(feed);
        if snapshot.reachable {
            set.insert(feed.clone(), WatchState::seeded_from(&snapshot, started_at));
        } else {
            warn!("Ignoring not existent feed: {}", source.url(feed));
        }

        pacer.pause(request_interval);
    }

    set
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pace::tests::RecordingPacer;
    use crate::source::make_entry;
    use chrono::TimeZone;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Serves fixed snapshots and records the order of fetches.
    struct FixedSource {
        snapshots: HashMap<String, FeedSnapshot>,
        fetched: RefCell<Vec<String>>,
    }

    impl FixedSource {
        fn new(snapshots: Vec<(&str, FeedSnapshot)>) -> Self {
            Self {
                snapshots: snapshots
                    .into_iter()
                    .map(|(name, s)| (name.to_string(), s))
                    .collect(),
                fetched: RefCell::new(Vec::new()),
            }
        }
    }

    impl FeedSource for FixedSource {
        fn url(&self, feed: &FeedId) -> String {
            format!("http://status.test/rss/{feed}.rss")
        }

        fn fetch(&self, feed: &FeedId) -> FeedSnapshot {
            self.fetched.borrow_mut().push(feed.to_string());
            self.snapshots
                .get(feed.as_str())
                .cloned()
                .unwrap_or_else(FeedSnapshot::unreachable)
        }
    }

    fn ids(names: &[&str]) -> Vec<FeedId> {
        names.iter().map(|n| FeedId::new(*n)).collect()
    }

    fn t(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap()
    }

    // -- watch state ---------------------------------------------------------

    #[test]
    fn advance_accepts_strictly_newer_only() {
        let mut state = WatchState::new(t(10));

        assert!(!state.advance(t(9)), "older must be ignored");
        assert!(!state.advance(t(10)), "equal must be ignored");
        assert_eq!(state.last_seen_at(), t(10));

        assert!(state.advance(t(11)));
        assert_eq!(state.last_seen_at(), t(11));
    }

    #[test]
    fn seeded_from_newest_entry() {
        let snapshot = FeedSnapshot::reachable(vec![
            make_entry("Newest", t(12)),
            make_entry("Older", t(8)),
        ]);
        let state = WatchState::seeded_from(&snapshot, t(20));
        assert_eq!(state.last_seen_at(), t(12));
    }

    #[test]
    fn seeded_from_start_time_when_feed_is_empty() {
        let state = WatchState::seeded_from(&FeedSnapshot::reachable(vec![]), t(20));
        assert_eq!(state.last_seen_at(), t(20));
    }

    // -- seeding -------------------------------------------------------------

    #[test]
    fn unreachable_feeds_are_dropped() {
        let source = FixedSource::new(vec![
            ("ec2", FeedSnapshot::reachable(vec![make_entry("E", t(5))])),
            ("bogus", FeedSnapshot::unreachable()),
            ("s3", FeedSnapshot::reachable(vec![])),
        ]);
        let mut pacer = RecordingPacer::default();

        let set = seed(
            &ids(&["ec2", "bogus", "s3"]),
            &source,
            &mut pacer,
            Duration::from_secs(2),
            t(20),
        );

        assert_eq!(set.len(), 2);
        assert!(!set.contains(&FeedId::new("bogus")));
        assert_eq!(set.get(&FeedId::new("ec2")).unwrap().last_seen_at(), t(5));
        assert_eq!(set.get(&FeedId::new("s3")).unwrap().last_seen_at(), t(20));
    }

    #[test]
    fn order_follows_input() {
        let source = FixedSource::new(vec![
            ("b", FeedSnapshot::reachable(vec![])),
            ("a", FeedSnapshot::reachable(vec![])),
            ("c", FeedSnapshot::reachable(vec![])),
        ]);
        let mut pacer = RecordingPacer::default();

        let set = seed(&ids(&["b", "a", "c"]), &source, &mut pacer, Duration::ZERO, t(0));

        let order: Vec<&str> = set.iter().map(|w| w.feed.as_str()).collect();
        assert_eq!(order, ["b", "a", "c"]);
        assert_eq!(*source.fetched.borrow(), ["b", "a", "c"]);
    }

    #[test]
    fn all_unreachable_yields_empty_set() {
        let source = FixedSource::new(vec![]);
        let mut pacer = RecordingPacer::default();

        let set = seed(&ids(&["x", "y"]), &source, &mut pacer, Duration::ZERO, t(0));

        assert!(set.is_empty());
    }

    #[test]
    fn pauses_after_every_fetch() {
        let source = FixedSource::new(vec![("ok", FeedSnapshot::reachable(vec![]))]);
        let mut pacer = RecordingPacer::default();

        seed(
            &ids(&["ok", "missing", "ok2"]),
            &source,
            &mut pacer,
            Duration::from_secs(2),
            t(0),
        );

        assert_eq!(pacer.pauses, vec![Duration::from_secs(2); 3]);
    }

    #[test]
    fn duplicates_are_fetched_once() {
        let source = FixedSource::new(vec![("all", FeedSnapshot::reachable(vec![]))]);
        let mut pacer = RecordingPacer::default();

        let set = seed(&ids(&["all", "all"]), &source, &mut pacer, Duration::ZERO, t(0));

        assert_eq!(set.len(), 1);
        assert_eq!(source.fetched.borrow().len(), 1);
    }
}
