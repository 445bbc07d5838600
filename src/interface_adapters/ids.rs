use crate::domain::ports::MatchIdGenerator;
use chrono::Utc;
use rand::{Rng, distributions::Alphanumeric};

const SUFFIX_LEN: usize = 8;

/// Mints ids shaped like `match_20260102150405_aZ3kQ9xB`.
///
/// The timestamp is UTC wall-clock time at second resolution and the suffix is
/// drawn from the thread-local CSPRNG. Uniqueness within a process is enforced
/// by the matchmaker, which regenerates on collision.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomMatchIds;

impl MatchIdGenerator for RandomMatchIds {
    fn next_id(&self) -> String {
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(SUFFIX_LEN)
            .map(char::from)
            .collect();

        format!("match_{}_{}", Utc::now().format("%Y%m%d%H%M%S"), suffix)
    }
}
