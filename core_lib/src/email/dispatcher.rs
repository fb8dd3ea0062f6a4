//! Turns a lead into a notification email and hands it to the provider

use super::provider::{EmailMessage, EmailProvider};
use super::template::{offer_form_subject, render_offer_form_email};
use crate::config::EmailConfig;
use crate::models::LeadSubmission;
use chrono::Datelike;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct NotificationDispatcher {
    provider: Arc<dyn EmailProvider>,
    from_address: String,
    notify_address: String,
}

impl NotificationDispatcher {
    pub fn new(provider: Arc<dyn EmailProvider>, from_address: String, notify_address: String) -> Self {
        Self {
            provider,
            from_address,
            notify_address,
        }
    }

    pub fn from_config(provider: Arc<dyn EmailProvider>, config: &EmailConfig) -> Self {
        Self::new(
            provider,
            config.from_address.clone(),
            config.notify_address.clone(),
        )
    }

    pub fn notify_address(&self) -> &str {
        &self.notify_address
    }

    /// Sends the "signed up" notification for one offer form submission.
    ///
    /// Provider failures are logged and reported as `false`; they never propagate.
    pub async fn send_offer_form_notification(&self, lead: &LeadSubmission) -> bool {
        let message = EmailMessage {
            from: self.from_address.clone(),
            to: self.notify_address.clone(),
            subject: offer_form_subject(lead.company_name()),
            html: render_offer_form_email(lead, chrono::Utc::now().year()),
        };

        self.send(&message).await
    }

    async fn send(&self, message: &EmailMessage) -> bool {
        match self.provider.send(message).await {
            Ok(()) => {
                info!(
                    "Email sent successfully to {} with subject \"{}\"",
                    message.to, message.subject
                );
                true
            }
            Err(e) => {
                error!("Error sending email to {}: {}", message.to, e);
                false
            }
        }
    }
}

impl std::fmt::Debug for NotificationDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationDispatcher")
            .field("from_address", &self.from_address)
            .field("notify_address", &self.notify_address)
            .finish_non_exhaustive()
    }
}
