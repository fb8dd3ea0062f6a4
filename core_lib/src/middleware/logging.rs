//! Request tracing layer

use axum::http::{Request, Response, StatusCode};
use axum::Router;
use std::time::Duration;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::trace::TraceLayer;
use tracing::{info_span, Span};

/// Wraps every route of `router` in a `TraceLayer` with one span per request.
pub fn with_request_tracing<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<_>| {
            info_span!(
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        })
        .on_request(|request: &Request<_>, _span: &Span| {
            tracing::debug!("{} {}", request.method(), request.uri().path());
        })
        .on_response(|response: &Response<_>, latency: Duration, _span: &Span| {
            log_response(response.status(), latency);
        })
        .on_failure(|error: ServerErrorsFailureClass, latency: Duration, _span: &Span| {
            tracing::error!(
                latency_ms = latency.as_millis(),
                error = %error,
                "request failed"
            );
        });

    router.layer(layer)
}

fn log_response(status: StatusCode, latency: Duration) {
    let code = status.as_u16();
    let latency_ms = latency.as_millis();

    if status.is_server_error() {
        tracing::error!(status = code, latency_ms, "server error response");
    } else if status.is_client_error() {
        tracing::warn!(status = code, latency_ms, "client error response");
    } else {
        tracing::info!(status = code, latency_ms, "request completed");
    }
}
