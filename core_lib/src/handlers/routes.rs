//! Route table

use super::{health::handle_health, offer::handle_submit_offer, offer::SUBMIT_OFFER_PATH};
use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handle_health))
        .route(SUBMIT_OFFER_PATH, post(handle_submit_offer))
}
