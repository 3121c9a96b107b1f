//! Dispatch Module - Emailed Result Reports
//!
//! Validates the caller-supplied result data, renders the HTML report, and
//! hands it to the mail transport exactly once.

pub mod dispatcher;
pub mod mailer;
pub mod report;

// Re-export common types
pub use dispatcher::{DispatchError, EmailIdentity, ResultDispatcher};
pub use mailer::{MailTransport, OutboundEmail, SendGridMailer};
