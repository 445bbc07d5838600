use crate::domain::errors::MatchmakingError;
use crate::interface_adapters::protocol::{ErrorResponse, JoinRequest, MatchResponse};
use crate::interface_adapters::state::AppState;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;

pub const JOIN_ENDPOINT: &str = "join";
pub const STATUS_ENDPOINT: &str = "status";

type HandlerError = (StatusCode, Json<ErrorResponse>);

// Put a player into matchmaking and return the match they currently belong to.
pub async fn join(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<JoinRequest>, JsonRejection>,
) -> Result<Json<MatchResponse>, HandlerError> {
    state.metrics.increment(JOIN_ENDPOINT).await;
    let timer = state.metrics.start_timer(JOIN_ENDPOINT);

    let result = join_matchmaking(&state, payload).await;

    state.metrics.stop_timer(timer).await;
    result
}

#[tracing::instrument(name = "join", skip_all)]
async fn join_matchmaking(
    state: &AppState,
    payload: Result<Json<JoinRequest>, JsonRejection>,
) -> Result<Json<MatchResponse>, HandlerError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "rejected join body");
        error_response(StatusCode::BAD_REQUEST, "invalid request body")
    })?;

    if request.id.is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "player id is required",
        ));
    }

    let joined = state
        .matchmaker
        .add_player(&request.id)
        .await
        .map_err(|err| map_matchmaking_error(err, MatchmakingErrorContext::Join))?;

    tracing::info!(
        player_id = %request.id,
        match_id = %joined.id,
        status = joined.status.as_str(),
        "player joined"
    );

    Ok(Json(MatchResponse::from(joined)))
}

// Report the formation status of a match.
pub async fn status(
    State(state): State<Arc<AppState>>,
    Path(match_id): Path<String>,
) -> Result<Json<MatchResponse>, HandlerError> {
    state.metrics.increment(STATUS_ENDPOINT).await;
    let timer = state.metrics.start_timer(STATUS_ENDPOINT);

    let result = state
        .matchmaker
        .get_match(&match_id)
        .await
        .map(|found| Json(MatchResponse::from(found)))
        .map_err(|err| map_matchmaking_error(err, MatchmakingErrorContext::Status));

    state.metrics.stop_timer(timer).await;
    result
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> HandlerError {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

// Maps domain errors to HTTP responses by endpoint context.
enum MatchmakingErrorContext {
    Join,
    Status,
}

fn map_matchmaking_error(
    err: MatchmakingError,
    context: MatchmakingErrorContext,
) -> HandlerError {
    match context {
        // Joining has no client-facing failure mode; anything here is ours.
        MatchmakingErrorContext::Join => {
            tracing::error!(error = %err, "failed to add player");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
        }
        MatchmakingErrorContext::Status => match err {
            MatchmakingError::MatchNotFound { .. } => {
                error_response(StatusCode::NOT_FOUND, "match not found")
            }
        },
    }
}
