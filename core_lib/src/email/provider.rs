//! Transactional email provider client

use crate::config::EmailConfig;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// A fully rendered message, ready to hand to a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Email provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Email provider rejected the message ({status}): {body}")]
    Rejected { status: StatusCode, body: String },
}

#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), ProviderError>;
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

/// Resend-compatible HTTP API client.
#[derive(Debug, Clone)]
pub struct ResendProvider {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl ResendProvider {
    pub fn new(config: &EmailConfig) -> Result<Self, ProviderError> {
        let mut builder = reqwest::Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        Ok(Self {
            http: builder.build()?,
            api_key: config.api_key.clone(),
            endpoint: format!("{}/emails", config.api_base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EmailProvider for ResendProvider {
    async fn send(&self, message: &EmailMessage) -> Result<(), ProviderError> {
        let payload = SendEmailRequest {
            from: &message.from,
            to: [message.to.as_str()],
            subject: &message.subject,
            html: &message.html,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Rejected { status, body });
        }

        tracing::debug!(status = status.as_u16(), "email provider accepted message");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_from_config() {
        let mut config = EmailConfig::default();
        assert_eq!(
            ResendProvider::new(&config).unwrap().endpoint(),
            "https://api.resend.com/emails"
        );

        config.api_base_url = "http://127.0.0.1:4010/".to_string();
        config.timeout_seconds = Some(3);
        assert_eq!(
            ResendProvider::new(&config).unwrap().endpoint(),
            "http://127.0.0.1:4010/emails"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let payload = SendEmailRequest {
            from: "noreply@example.com",
            to: ["sales@example.com"],
            subject: "Acme Hotels from Hotel Council has signed up",
            html: "<p>hi</p>",
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "from": "noreply@example.com",
                "to": ["sales@example.com"],
                "subject": "Acme Hotels from Hotel Council has signed up",
                "html": "<p>hi</p>",
            })
        );
    }
}
