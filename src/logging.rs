//! Logging setup.
//!
//! Output looks like `12:34:56  INFO Notification sent ...`: wall-clock time
//! and level, no targets.  `RUST_LOG` overrides the default level.

use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` if set and valid, otherwise `default_level`.
fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber.  Call once, first thing in `main`.
pub fn init(default_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_timer(ChronoLocal::new("%H:%M:%S".to_string()))
                .with_target(false),
        )
        .with(filter(default_level))
        .init();
}
