//! Command-line configuration.

use std::time::Duration;

use clap::Parser;

use crate::notify::{Sender, DEFAULT_ICON_URL};
use crate::pace::Pacing;
use crate::source::{FeedId, DEFAULT_URL_TEMPLATE, FEED_PLACEHOLDER};

/// Poll status from AWS RSS feeds and notify changes in Slack.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Config {
    /// Slack webhook URL to receive alerts.
    pub webhook: String,

    /// Slack channel to receive alerts.
    pub channel: String,

    /// AWS status RSS feeds to check, by name only. For
    /// http://status.aws.amazon.com/rss/all.rss just give `all`.
    #[arg(default_value = FeedId::DEFAULT)]
    pub feeds: Vec<String>,

    /// Feed URL template; `{feed}` is replaced by each feed name.
    #[arg(
        long,
        env = "STATUS_FEED_URL_TEMPLATE",
        default_value = DEFAULT_URL_TEMPLATE,
        value_parser = parse_template,
    )]
    pub feed_url_template: String,

    /// Seconds to wait after each feed request.
    #[arg(long, value_name = "SECS", default_value_t = 2)]
    pub requests_interval: u64,

    /// Seconds to wait between two full checks of all feeds.
    #[arg(long, value_name = "SECS", default_value_t = 60)]
    pub checks_interval: u64,

    /// Username notifications are posted as.
    #[arg(long, default_value = "aws")]
    pub username: String,

    /// Avatar shown next to notifications.
    #[arg(long, default_value = DEFAULT_ICON_URL)]
    pub icon_url: String,

    /// Default log level; RUST_LOG takes precedence.
    #[arg(
        long,
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
    )]
    pub log_level: String,
}

fn parse_template(s: &str) -> Result<String, String> {
    if s.contains(FEED_PLACEHOLDER) {
        Ok(s.to_string())
    } else {
        Err(format!("template must contain {FEED_PLACEHOLDER}"))
    }
}

impl Config {
    pub fn feed_ids(&self) -> Vec<FeedId> {
        self.feeds.iter().map(FeedId::new).collect()
    }

    pub fn pacing(&self) -> Pacing {
        Pacing {
            request_interval: Duration::from_secs(self.requests_interval),
            check_interval: Duration::from_secs(self.checks_interval),
        }
    }

    pub fn sender(&self) -> Sender {
        Sender {
            username: self.username.clone(),
            icon_url: self.icon_url.clone(),
        }
    }
}
