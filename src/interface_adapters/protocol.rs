use crate::domain::entities::Match;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Request payload for joining matchmaking.
#[derive(Debug, Deserialize)]
pub struct JoinRequest {
    pub id: String,
}

// Wire representation of a match.
#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub match_id: String,
    pub players: Vec<String>,
    pub status: &'static str,
    pub updated_at: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ready_at: Option<u64>,
}

impl From<Match> for MatchResponse {
    fn from(value: Match) -> Self {
        Self {
            match_id: value.id,
            players: value.players,
            status: value.status.as_str(),
            updated_at: value.updated_at,
            ready_at: value.ready_at,
        }
    }
}

// Per-endpoint request statistics.
#[derive(Debug, Serialize)]
pub struct EndpointMetricsResponse {
    pub count: u64,
    pub average_ms: f64,
}

// Response payload for the metrics endpoint.
#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub endpoints: BTreeMap<String, EndpointMetricsResponse>,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
