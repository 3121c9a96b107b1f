//! Mail Transport
//!
//! HTTP client for the outbound email collaborator (SendGrid v3 mail/send).
//! One delivery attempt per call; a non-2xx response surfaces the transport's
//! own detail text.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use super::dispatcher::DispatchError;

/// SendGrid mail/send endpoint.
const SENDGRID_MAIL_URL: &str = "https://api.sendgrid.com/v3/mail/send";

/// Remote call timeout (seconds).
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Fully composed outbound message.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub to: String,
    pub from_email: String,
    pub from_name: String,
    pub reply_to: String,
    pub subject: String,
    pub html_body: String,
}

/// At-most-once delivery seam.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), DispatchError>;
}

// Request types

#[derive(Debug, Serialize)]
struct MailSendRequest {
    personalizations: Vec<Personalization>,
    from: EmailAddress,
    reply_to: EmailAddress,
    subject: String,
    content: Vec<MailContent>,
}

#[derive(Debug, Serialize)]
struct Personalization {
    to: Vec<EmailAddress>,
}

#[derive(Debug, Serialize)]
struct EmailAddress {
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

#[derive(Debug, Serialize)]
struct MailContent {
    #[serde(rename = "type")]
    content_type: String,
    value: String,
}

/// SendGrid-backed transport.
pub struct SendGridMailer {
    http_client: reqwest::Client,
    api_key: String,
}

impl SendGridMailer {
    pub fn new(api_key: String) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            api_key,
        }
    }
}

#[async_trait]
impl MailTransport for SendGridMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), DispatchError> {
        let request = MailSendRequest {
            personalizations: vec![Personalization {
                to: vec![EmailAddress {
                    email: email.to.clone(),
                    name: None,
                }],
            }],
            from: EmailAddress {
                email: email.from_email.clone(),
                name: Some(email.from_name.clone()),
            },
            reply_to: EmailAddress {
                email: email.reply_to.clone(),
                name: None,
            },
            subject: email.subject.clone(),
            content: vec![MailContent {
                content_type: "text/html".to_string(),
                value: email.html_body.clone(),
            }],
        };

        let response = self
            .http_client
            .post(SENDGRID_MAIL_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| DispatchError::Network(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status().as_u16();
            let detail = response.text().await.unwrap_or_default();
            Err(DispatchError::Transport { status, detail })
        }
    }
}
