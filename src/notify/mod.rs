//! Outbound notifications for newly published entries.
//!
//! An entry is first classified into a [`Severity`], then handed to a
//! [`Notifier`].  Delivery is fire-and-forget: a failed dispatch is reported
//! to the caller once and never retried.

mod severity;
mod slack;

pub use severity::Severity;
pub use slack::{Sender, SlackNotifier, DEFAULT_ICON_URL};

use crate::error::NotifyError;
use crate::source::Entry;

/// Trait that every notification backend must implement.
pub trait Notifier {
    /// Deliver one entry, tagged with its severity.
    fn dispatch(&self, entry: &Entry, severity: Severity) -> Result<(), NotifyError>;
}
