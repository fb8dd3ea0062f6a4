//! Core library for the Hotel Council offer service: the submission endpoint, the
//! notification dispatcher and the form client.

pub mod client;
pub mod config;
pub mod email;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod models;

pub use client::{LeadForm, Notice, SubmissionClient};
pub use crate::config::AppConfig;
pub use email::{EmailMessage, EmailProvider, NotificationDispatcher, ProviderError, ResendProvider};
pub use error::{AppError, Result};
pub use handlers::routes::create_routes;
pub use models::LeadSubmission;

use axum::Router;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub dispatcher: Arc<NotificationDispatcher>,
}

impl AppState {
    pub fn new(dispatcher: NotificationDispatcher) -> Self {
        Self {
            app_name: "Hotel Council Offer Service".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            dispatcher: Arc::new(dispatcher),
        }
    }

    /// Builds the Resend-backed dispatcher from the email settings.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let provider = ResendProvider::new(&config.email)
            .map_err(|e| AppError::Config(e.to_string()))?;
        info!("Email provider endpoint: {}", provider.endpoint());

        let dispatcher = NotificationDispatcher::from_config(Arc::new(provider), &config.email);
        Ok(Self::new(dispatcher))
    }
}

pub fn create_app(state: AppState) -> Router {
    create_app_with_config(state, &AppConfig::default())
}

pub fn create_app_with_config(state: AppState, config: &AppConfig) -> Router {
    let router = Router::new()
        .merge(create_routes())
        .layer(middleware::cors::cors_layer_from_config(&config.cors));

    middleware::logging::with_request_tracing(router).with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Other(e.into()))?;

    serve(listener, app).await
}

/// Serves on an already bound listener until Ctrl+C or SIGTERM.
pub async fn serve(listener: tokio::net::TcpListener, app: Router) -> Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Other(e.into()))?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
