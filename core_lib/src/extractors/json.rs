//! JSON body extractor that ignores the request content type
//!
//! The offer form endpoint parses whatever body it receives as JSON. Any failure to
//! read or decode the body is reported as a failed submission.

use crate::error::AppError;
use axum::{
    async_trait,
    body::{Body, Bytes},
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

pub struct LenientJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::MalformedBody(rejection.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(LenientJson)
            .map_err(|e| AppError::MalformedBody(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LeadSubmission;
    use axum::http::Request as HttpRequest;

    async fn extract(body: &'static str, content_type: Option<&str>) -> Result<LeadSubmission, AppError> {
        let mut builder = HttpRequest::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        let request = builder.body(Body::from(body)).unwrap();

        LenientJson::<LeadSubmission>::from_request(request, &())
            .await
            .map(|LenientJson(lead)| lead)
    }

    #[tokio::test]
    async fn test_parses_without_content_type() {
        let lead = extract(r#"{"firstName":"Jane"}"#, None).await.unwrap();
        assert_eq!(lead.first_name(), "Jane");

        let lead = extract(r#"{"firstName":"Jane"}"#, Some("text/plain")).await.unwrap();
        assert_eq!(lead.first_name(), "Jane");
    }

    #[tokio::test]
    async fn test_invalid_json_is_malformed() {
        let result = extract("firstName=Jane", Some("application/json")).await;
        assert!(matches!(result, Err(AppError::MalformedBody(_))));

        let result = extract("", Some("application/json")).await;
        assert!(matches!(result, Err(AppError::MalformedBody(_))));
    }

    #[tokio::test]
    async fn test_non_string_field_is_kept_as_text() {
        let lead = extract(r#"{"firstName": 42}"#, Some("application/json")).await.unwrap();
        assert_eq!(lead.first_name(), "42");
    }
}
