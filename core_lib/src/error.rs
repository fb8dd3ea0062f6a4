//! Application error types and handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Message returned to the browser whenever a submission could not be turned into an email.
pub const SUBMISSION_FAILED_MESSAGE: &str = "Failed to send email";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Notification email was not sent")]
    SubmissionFailed,

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;

        match self {
            AppError::SubmissionFailed => {
                tracing::error!("Error sending email: dispatcher reported failure");
                submission_failed_response()
            }
            AppError::MalformedBody(msg) => {
                tracing::error!("Error sending email: {}", msg);
                submission_failed_response()
            }
            AppError::Config(msg) => {
                tracing::error!("Configuration error: {}", msg);
                let body = Json(json!({
                    "error": "Configuration error",
                    "status": status.as_u16(),
                }));
                (status, body).into_response()
            }
            AppError::Other(err) => {
                tracing::error!("Unexpected error: {:?}", err);
                let body = Json(json!({
                    "error": "Internal server error",
                    "status": status.as_u16(),
                }));
                (status, body).into_response()
            }
        }
    }
}

fn submission_failed_response() -> Response {
    let body = Json(json!({ "error": SUBMISSION_FAILED_MESSAGE }));
    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_submission_failed_body() {
        let response = AppError::SubmissionFailed.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({ "error": "Failed to send email" }));
    }

    #[tokio::test]
    async fn test_malformed_body_uses_same_response() {
        let response = AppError::MalformedBody("expected value at line 1".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({ "error": "Failed to send email" }));
    }

    #[tokio::test]
    async fn test_other_error_hides_details() {
        let response = AppError::Other(anyhow::anyhow!("secret detail")).into_response();
        let body = body_json(response).await;
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(body["status"], 500);
    }
}
