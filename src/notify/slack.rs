//! Slack-compatible incoming-webhook notifier.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Serialize;

use super::{Notifier, Severity};
use crate::error::NotifyError;
use crate::source::Entry;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Default avatar shown next to notifications.
pub const DEFAULT_ICON_URL: &str = "https://dl.dropboxusercontent.com/u/62469907/aws-icon.png";

/// Identity notifications are posted under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    pub username: String,
    pub icon_url: String,
}

impl Default for Sender {
    fn default() -> Self {
        Self {
            username: "aws".to_string(),
            icon_url: DEFAULT_ICON_URL.to_string(),
        }
    }
}

/// Webhook body.
#[derive(Debug, Serialize)]
pub struct Payload<'a> {
    pub username: &'a str,
    pub icon_url: &'a str,
    pub channel: &'a str,
    pub attachments: [Attachment<'a>; 1],
}

#[derive(Debug, Serialize)]
pub struct Attachment<'a> {
    pub color: &'static str,
    pub title: &'a str,
    pub title_link: &'a str,
    pub text: &'a str,
}

/// Posts one attachment per entry to a fixed webhook and channel.
pub struct SlackNotifier {
    client: Client,
    webhook: String,
    channel: String,
    sender: Sender,
}

impl SlackNotifier {
    pub fn new(
        webhook: impl Into<String>,
        channel: impl Into<String>,
        sender: Sender,
    ) -> Result<Self, NotifyError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            webhook: webhook.into(),
            channel: channel.into(),
            sender,
        })
    }

    /// Build the webhook body for an entry.
    pub fn payload<'a>(&'a self, entry: &'a Entry, severity: Severity) -> Payload<'a> {
        Payload {
            username: &self.sender.username,
            icon_url: &self.sender.icon_url,
            channel: &self.channel,
            attachments: [Attachment {
                color: severity.color(),
                title: &entry.title,
                title_link: &entry.link,
                text: &entry.summary,
            }],
        }
    }
}

impl Notifier for SlackNotifier {
    fn dispatch(&self, entry: &Entry, severity: Severity) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(&self.webhook)
            .json(&self.payload(entry, severity))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Status(status));
        }
        Ok(())
    }
}
