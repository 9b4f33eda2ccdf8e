//! Pacing between feed requests and between full check cycles.
//!
//! The loop is strictly sequential, so a pause is a plain blocking sleep:
//! there is no other work to yield to.

use std::thread;
use std::time::Duration;

/// Pacing delays used by seeding and the watch loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Pause after every single feed fetch.
    pub request_interval: Duration,
    /// Pause after a full pass over all watched feeds.
    pub check_interval: Duration,
}

impl Pacing {
    pub const DEFAULT_REQUEST_INTERVAL: Duration = Duration::from_secs(2);
    pub const DEFAULT_CHECK_INTERVAL: Duration = Duration::from_secs(60);
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            request_interval: Self::DEFAULT_REQUEST_INTERVAL,
            check_interval: Self::DEFAULT_CHECK_INTERVAL,
        }
    }
}

/// Something that can suspend the loop for a given duration.
pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

/// Blocks the current thread.
#[derive(Debug, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}
