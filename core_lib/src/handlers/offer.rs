//! Hotel Council offer form submission

use crate::{
    error::{AppError, Result},
    extractors::LenientJson,
    models::{ApiResponse, LeadSubmission},
    AppState,
};
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::Value;
use tracing::info;

pub const SUBMIT_OFFER_PATH: &str = "/api/submit-hotel-council-offer";

pub async fn handle_submit_offer(
    State(state): State<AppState>,
    LenientJson(body): LenientJson<Value>,
) -> Result<impl IntoResponse> {
    let lead = LeadSubmission::from_json(body).map_err(|e| AppError::MalformedBody(e.to_string()))?;
    info!("POST {} - company: {:?}", SUBMIT_OFFER_PATH, lead.company_name);

    if !state.dispatcher.send_offer_form_notification(&lead).await {
        return Err(AppError::SubmissionFailed);
    }

    Ok(Json(ApiResponse::ok()))
}
