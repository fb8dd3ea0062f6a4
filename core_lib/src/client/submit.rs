//! Posts the offer form to the submission endpoint and maps the outcome to a notice

use super::form::LeadForm;
use crate::handlers::SUBMIT_OFFER_PATH;
use reqwest::StatusCode;
use tracing::{error, info, warn};

pub const SUCCESS_MESSAGE: &str = "Message sent! We will get back to you soon.";
pub const RATE_LIMITED_MESSAGE: &str = "Too many requests. Please try again later.";
pub const INVALID_INPUT_MESSAGE: &str = "Invalid form data. Please check your inputs.";
pub const AUTH_FAILED_MESSAGE: &str = "Authentication failed. Please refresh and try again.";
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to send message. Please try again later.";

/// User-facing toast produced by a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn is_success(&self) -> bool {
        matches!(self, Notice::Success(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Notice::Success(message) | Notice::Error(message) => message,
        }
    }

    /// Maps a non-ok response status to the message shown to the user.
    pub fn for_status(status: StatusCode) -> Self {
        let message = match status {
            StatusCode::TOO_MANY_REQUESTS => RATE_LIMITED_MESSAGE.to_string(),
            StatusCode::BAD_REQUEST => INVALID_INPUT_MESSAGE.to_string(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AUTH_FAILED_MESSAGE.to_string(),
            other => format!(
                "Failed to send message ({}). Please try again later.",
                other.as_u16()
            ),
        };
        Notice::Error(message)
    }

    pub fn for_transport_error(err: &reqwest::Error) -> Self {
        let text = err.to_string();
        if text.is_empty() {
            Notice::Error(DEFAULT_FAILURE_MESSAGE.to_string())
        } else {
            Notice::Error(format!("Error: {}", text))
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubmissionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SubmissionClient {
    /// `base_url` is the site origin, e.g. `https://hotelcouncil.example.com`.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), SUBMIT_OFFER_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submits the form once. The form is cleared only when the server answers with
    /// a success status; every other outcome leaves it as the user typed it.
    pub async fn submit(&self, form: &mut LeadForm) -> Notice {
        if let Err(errors) = form.check() {
            warn!("Form submission blocked by validation: {}", errors);
            return Notice::Error(INVALID_INPUT_MESSAGE.to_string());
        }

        let response = match self
            .http
            .post(&self.endpoint)
            .json(&form.to_submission())
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("Form submission error: {}", e);
                return Notice::for_transport_error(&e);
            }
        };

        let status = response.status();
        if status.is_success() {
            info!("Offer form submitted for {}", form.company_name);
            form.reset();
            return Notice::Success(SUCCESS_MESSAGE.to_string());
        }

        let error_text = response.text().await.unwrap_or_default();
        error!("Form submission error ({}): {}", status.as_u16(), error_text);

        Notice::for_status(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        assert_eq!(
            Notice::for_status(StatusCode::TOO_MANY_REQUESTS).message(),
            "Too many requests. Please try again later."
        );
        assert_eq!(
            Notice::for_status(StatusCode::BAD_REQUEST).message(),
            "Invalid form data. Please check your inputs."
        );
        assert_eq!(
            Notice::for_status(StatusCode::UNAUTHORIZED).message(),
            "Authentication failed. Please refresh and try again."
        );
        assert_eq!(
            Notice::for_status(StatusCode::FORBIDDEN),
            Notice::for_status(StatusCode::UNAUTHORIZED)
        );
        assert_eq!(
            Notice::for_status(StatusCode::INTERNAL_SERVER_ERROR).message(),
            "Failed to send message (500). Please try again later."
        );
        assert_eq!(
            Notice::for_status(StatusCode::NOT_FOUND).message(),
            "Failed to send message (404). Please try again later."
        );
        assert!(!Notice::for_status(StatusCode::BAD_GATEWAY).is_success());
    }

    #[test]
    fn test_endpoint() {
        let client = SubmissionClient::new("http://127.0.0.1:3000/");
        assert_eq!(
            client.endpoint(),
            "http://127.0.0.1:3000/api/submit-hotel-council-offer"
        );
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_sent() {
        // Nothing listens here; reaching the network would produce a transport notice.
        let client = SubmissionClient::new("http://127.0.0.1:9");
        let mut form = LeadForm {
            first_name: "Jane".to_string(),
            ..Default::default()
        };

        let notice = client.submit(&mut form).await;
        assert_eq!(notice, Notice::Error(INVALID_INPUT_MESSAGE.to_string()));
        assert_eq!(form.first_name, "Jane");
    }
}
