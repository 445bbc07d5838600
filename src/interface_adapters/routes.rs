use crate::interface_adapters::handlers::matches::{join, status};
use crate::interface_adapters::handlers::metrics::metrics;
use crate::interface_adapters::logging::log_requests;
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    http::StatusCode,
    middleware,
    routing::{get, post},
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;

// Build the HTTP router for matchmaking endpoints.
pub fn app(state: Arc<AppState>) -> Router {
    let request_timeout = state.request_timeout;
    let routes = Router::new()
        .route("/join", post(join))
        .route("/status/{match_id}", get(status))
        .route("/metrics", get(metrics));

    with_http_layers(routes, request_timeout).with_state(state)
}

// Request logging wraps the timeout so timed-out requests are logged too.
fn with_http_layers<S>(router: Router<S>, request_timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(middleware::from_fn(log_requests))
}
