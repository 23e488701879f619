//! Transactional email transport.
//!
//! Thin client for the mail provider's HTTP API. Delivery is best-effort
//! everywhere in this codebase: callers go through [`Mailer::spawn_send`],
//! which detaches the send from the request and downgrades any failure to
//! an error log line. Losing an email is tolerable; losing the lead that
//! triggered it is not, so nothing here ever blocks or fails a request.

use serde::Serialize;
use thiserror::Error;

use crate::config::MailConfig;

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("Mail request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Mail provider rejected the message: {status} {body}")]
    Provider { status: u16, body: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

#[derive(Clone)]
pub struct Mailer {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    from_address: String,
    admin_address: String,
}

impl Mailer {
    pub fn new(config: &MailConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.api_endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            from_address: config.from_address.clone(),
            admin_address: config.admin_address.clone(),
        }
    }

    pub fn admin_address(&self) -> &str {
        &self.admin_address
    }

    pub async fn send(&self, message: &EmailMessage) -> Result<(), MailerError> {
        let request = SendRequest {
            from: &self.from_address,
            to: &message.to,
            subject: &message.subject,
            html: &message.html,
        };

        let response = self
            .http
            .post(format!("{}/send", self.endpoint))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            Err(MailerError::Provider { status, body })
        }
    }

    /// Fire-and-forget send. The caller's result type never includes the
    /// email outcome; a failure is only a log line.
    pub fn spawn_send(&self, message: EmailMessage) {
        let mailer = self.clone();
        tokio::spawn(async move {
            if let Err(err) = mailer.send(&message).await {
                tracing::error!(to = %message.to, subject = %message.subject, "Email send failed: {}", err);
            }
        });
    }
}
