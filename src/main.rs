//! aws-status-watch: poll AWS status RSS feeds and post new entries to Slack.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌──────────┐  fetch   ┌───────────┐ detect ┌───────────┐ dispatch ┌───────────┐
//! │ watch.rs │ ───────► │ source/   │ ─────► │ detect.rs │ ───────► │ notify/   │
//! │  (loop)  │          │ (RSS)     │        │ registry  │          │ (webhook) │
//! └──────────┘          └───────────┘        └───────────┘          └───────────┘
//! ```
//!
//! * **`source/`**: the `FeedSource` trait, snapshot types and the RSS client.
//! * **`registry`**: startup validation and the per-feed last-seen state.
//! * **`detect`**: decides whether a fetched feed has something new.
//! * **`notify/`**: severity classification and the Slack webhook.
//! * **`pace`**: the two pacing delays.
//! * **`watch`**: startup phase, then the never-ending check loop.
//! * **`main`**: parse args, set up logging, wire everything together.

mod config;
mod detect;
mod error;
mod logging;
mod notify;
mod pace;
mod registry;
mod source;
#[cfg(test)]
mod test_server;
mod watch;

use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::info;

use config::Config;
use notify::SlackNotifier;
use pace::ThreadPacer;
use source::RssSource;
use watch::Watcher;

fn main() -> Result<ExitCode> {
    let started_at = Utc::now();

    // -- parse arguments -----------------------------------------------------
    let config = Config::parse();
    logging::init(&config.log_level);

    info!(
        "Watching {} feed(s), notifying {}",
        config.feeds.len(),
        config.channel
    );

    // -- collaborators -------------------------------------------------------
    let source =
        RssSource::new(config.feed_url_template.clone()).context("failed to create feed client")?;
    let notifier = SlackNotifier::new(config.webhook.clone(), config.channel.clone(), config.sender())
        .context("failed to create webhook client")?;

    // -- startup -------------------------------------------------------------
    let started = Watcher::start(
        &config.feed_ids(),
        source,
        notifier,
        ThreadPacer,
        config.pacing(),
        started_at,
    );
    let watcher = match watch::exit_on_startup_failure(started) {
        Ok(watcher) => watcher,
        Err(status) => return Ok(ExitCode::from(status)),
    };

    // -- steady state (never returns) ----------------------------------------
    watcher.run()
}
