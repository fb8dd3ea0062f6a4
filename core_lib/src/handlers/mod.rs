//! HTTP route handlers

pub mod health;
pub mod offer;
pub mod routes;

pub use offer::SUBMIT_OFFER_PATH;
