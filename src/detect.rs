//! Change detection: has a feed published something since we last looked?

use tracing::debug;

use crate::registry::WatchState;
use crate::source::{Entry, FeedId, FeedSnapshot};

/// Compare the head of `snapshot` against `state` and advance it.
///
/// Only the first entry is inspected; the feed's newest-first ordering is
/// trusted.  Several publications between two polls therefore collapse into a
/// single notification for the newest one.  An empty snapshot leaves `state`
/// untouched.
pub fn detect<'a>(
    feed: &FeedId,
    snapshot: &'a FeedSnapshot,
    state: &mut WatchState,
) -> Option<&'a Entry> {
    let newest = snapshot.newest()?;

    debug!(
        "Feed: {feed} last saved date: {} last gotten date: {}",
        state.last_seen_at(),
        newest.published_at
    );

    state.advance(newest.published_at).then_some(newest)
}
