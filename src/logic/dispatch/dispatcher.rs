//! Result Dispatcher
//!
//! Validates the caller-supplied data, distinguishes caller problems from
//! server-configuration problems, renders the report, and delegates to the
//! transport once.

use std::sync::Arc;

use thiserror::Error;
use validator::ValidateEmail;

use crate::models::DispatchRequest;
use super::mailer::{MailTransport, OutboundEmail};
use super::report::{render_report, REPORT_SUBJECT};

/// Dispatch failures, from validation through transport.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Caller-supplied data incomplete or malformed.
    #[error("{0}")]
    Validation(String),

    /// Server is missing a required credential; operator action needed.
    #[error("{0}")]
    Configuration(String),

    #[error("network error: {0}")]
    Network(String),

    /// Transport collaborator rejected the delivery.
    #[error("transport rejected message ({status}): {detail}")]
    Transport { status: u16, detail: String },
}

/// Sender identity used for every outbound report.
#[derive(Debug, Clone)]
pub struct EmailIdentity {
    pub from_email: String,
    pub from_name: String,
    pub reply_to: String,
}

/// Composes and delivers one result report per request.
///
/// The transport is resolved once at startup; `None` means the transport
/// credential was absent, which fails dispatch only - never the rest of the
/// service.
pub struct ResultDispatcher {
    transport: Option<Arc<dyn MailTransport>>,
    identity: EmailIdentity,
}

impl ResultDispatcher {
    pub fn new(transport: Option<Arc<dyn MailTransport>>, identity: EmailIdentity) -> Self {
        Self {
            transport,
            identity,
        }
    }

    /// Validate, render, and deliver one report. At most one transport call.
    pub async fn dispatch(&self, request: &DispatchRequest) -> Result<(), DispatchError> {
        // Caller-data validation comes first, before any config check or
        // remote call.
        let email = request
            .email
            .as_deref()
            .filter(|e| !e.is_empty())
            .ok_or_else(|| DispatchError::Validation("missing required field: email".to_string()))?;

        let answers = request
            .answers
            .as_ref()
            .filter(|a| !a.is_empty())
            .ok_or_else(|| {
                DispatchError::Validation("missing required field: answers".to_string())
            })?;

        let prediction = request.prediction.as_ref().ok_or_else(|| {
            DispatchError::Validation("missing required field: prediction".to_string())
        })?;

        if !email.validate_email() {
            return Err(DispatchError::Validation(format!(
                "invalid email address: {}",
                email
            )));
        }

        let transport = self.transport.as_ref().ok_or_else(|| {
            DispatchError::Configuration("mail transport credential not configured".to_string())
        })?;

        // Explicit insight wins; otherwise fall back to the one embedded in
        // the prediction summary.
        let insight = request
            .insight
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| prediction.insight.as_deref().filter(|s| !s.is_empty()));

        let email = OutboundEmail {
            to: email.to_string(),
            from_email: self.identity.from_email.clone(),
            from_name: self.identity.from_name.clone(),
            reply_to: self.identity.reply_to.clone(),
            subject: REPORT_SUBJECT.to_string(),
            html_body: render_report(answers, prediction, insight),
        };

        transport.send(&email).await
    }
}
