// Domain layer: match entity, errors, and ports.

pub mod entities;
pub mod errors;
pub mod ports;

pub use entities::{MATCH_SIZE, Match, MatchStatus};
pub use errors::MatchmakingError;
pub use ports::{Clock, MatchIdGenerator};
