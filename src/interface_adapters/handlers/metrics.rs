use crate::interface_adapters::protocol::{EndpointMetricsResponse, MetricsResponse};
use crate::interface_adapters::state::AppState;
use axum::{Json, extract::State};
use std::sync::Arc;

// Report request counts and average latency per endpoint.
pub async fn metrics(State(state): State<Arc<AppState>>) -> Json<MetricsResponse> {
    let endpoints = state
        .metrics
        .snapshot()
        .await
        .into_iter()
        .map(|(name, snapshot)| {
            (
                name,
                EndpointMetricsResponse {
                    count: snapshot.requests,
                    average_ms: snapshot.average.as_secs_f64() * 1000.0,
                },
            )
        })
        .collect();

    Json(MetricsResponse { endpoints })
}
