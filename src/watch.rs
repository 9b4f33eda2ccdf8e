//! The feed-watch loop.
//!
//! Two phases:
//!
//! * **Startup** ([`Watcher::start`]): seed the [`WatchSet`] from the
//!   requested feeds.  Fails with [`WatchError::NoFeeds`] if nothing is left.
//! * **Steady state** ([`Watcher::run`]): forever, fetch every watched feed in
//!   seeding order, notify on new entries, pause between fetches and between
//!   full passes.
//!
//! Everything runs on the calling thread; the only suspension points are the
//! two pacing delays.

use chrono::{DateTime, Utc};
use tracing::{debug, error, info, warn};

use crate::detect::detect;
use crate::error::WatchError;
use crate::notify::{Notifier, Severity};
use crate::pace::{Pacer, Pacing};
use crate::registry::{self, WatchSet};
use crate::source::{FeedId, FeedSource};

/// Process exit status when startup leaves nothing to watch.
pub const EXIT_NO_FEEDS: u8 = 1;

/// Log a failed startup and map it to the process exit status.
pub fn exit_on_startup_failure<T>(started: Result<T, WatchError>) -> Result<T, u8> {
    started.map_err(|e| {
        error!("{e}");
        match e {
            WatchError::NoFeeds { .. } => EXIT_NO_FEEDS,
        }
    })
}

/// Owns the watch set and the three collaborators the loop drives.
pub struct Watcher<S, N, P> {
    source: S,
    notifier: N,
    pacer: P,
    pacing: Pacing,
    watched: WatchSet,
}

impl<S, N, P> Watcher<S, N, P>
where
    S: FeedSource,
    N: Notifier,
    P: Pacer,
{
    /// Run the startup phase.
    ///
    /// `started_at` is the fallback last-seen time for feeds that currently
    /// have no entries.
    pub fn start(
        feeds: &[FeedId],
        source: S,
        notifier: N,
        mut pacer: P,
        pacing: Pacing,
        started_at: DateTime<Utc>,
    ) -> Result<Self, WatchError> {
        let watched = registry::seed(
            feeds,
            &source,
            &mut pacer,
            pacing.request_interval,
            started_at,
        );

        if watched.is_empty() {
            return Err(WatchError::NoFeeds {
                hint: source.url(&FeedId::new(FeedId::DEFAULT)),
            });
        }

        info!("Entering check loop for following {} feed(s):", watched.len());
        for w in watched.iter() {
            info!(
                "\tFeed: {}\tLast publication: {}",
                source.url(&w.feed),
                w.state.last_seen_at()
            );
        }

        Ok(Self {
            source,
            notifier,
            pacer,
            pacing,
            watched,
        })
    }

    #[cfg(test)]
    pub fn watched(&self) -> &WatchSet {
        &self.watched
    }

    /// Run the steady-state phase.  Never returns.
    pub fn run(mut self) -> ! {
        loop {
            self.run_cycle();
        }
    }

    /// One full pass over every watched feed, followed by the check pause.
    ///
    /// Returns the number of notifications attempted.
    pub fn run_cycle(&mut self) -> usize {
        debug!("Starting a new check.");
        let mut notified = 0;

        for w in self.watched.iter_mut() {
            let snapshot = self.source.fetch(&w.feed);

            if snapshot.entries.is_empty() {
                debug!(
                    "Feed without entries: {} (reachable: {})",
                    w.feed, snapshot.reachable
                );
            } else if let Some(entry) = detect(&w.feed, &snapshot, &mut w.state) {
                let severity = Severity::classify(&entry.title);
                notified += 1;

                match self.notifier.dispatch(entry, severity) {
                    Ok(()) => info!("Notification sent for {} ({severity}): {}", w.feed, entry.title),
                    Err(e) => warn!("Failed to send notification for {}: {e}", w.feed),
                }
            }

            self.pacer.pause(self.pacing.request_interval);
        }

        self.pacer.pause(self.pacing.check_interval);
        notified
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
