// Domain-level errors for matchmaking workflows.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MatchmakingError {
    #[error("match not found: {match_id}")]
    MatchNotFound { match_id: String },
}
