//! Severity classification of status entries.
//!
//! AWS prefixes entry titles with a fixed phrase depending on the state of the
//! event.  Classification is an ordered rule table, first match wins, with
//! [`Severity::Alert`] as the catch-all.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// An incident has been resolved.
    Resolved,
    /// Advisory, no active disruption.
    Informational,
    /// Anything else is treated as an active incident.
    Alert,
}

/// Title substrings and the severity they map to, in priority order.
const RULES: &[(&str, Severity)] = &[
    ("Service is operating normally:", Severity::Resolved),
    ("Informational message:", Severity::Informational),
];

impl Severity {
    /// Classify an entry by its title.
    pub fn classify(title: &str) -> Self {
        RULES
            .iter()
            .find(|(pattern, _)| title.contains(pattern))
            .map(|&(_, severity)| severity)
            .unwrap_or(Severity::Alert)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Resolved => "informational-resolved",
            Severity::Informational => "informational",
            Severity::Alert => "alert",
        }
    }

    /// Attachment color understood by Slack-compatible webhooks.
    pub fn color(self) -> &'static str {
        match self {
            Severity::Resolved => "good",
            Severity::Informational => "warning",
            Severity::Alert => "danger",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
