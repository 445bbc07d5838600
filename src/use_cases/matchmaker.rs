use crate::domain::entities::{MATCH_SIZE, Match};
use crate::domain::errors::MatchmakingError;
use crate::domain::ports::{Clock, MatchIdGenerator};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

// Everything the matchmaker mutates, guarded as one unit.
#[derive(Debug, Default)]
struct MatchmakerState {
    // Players not yet drained into a complete match, oldest first.
    waiting: VecDeque<String>,
    // Complete matches keyed by id.
    matches: HashMap<String, Match>,
    // Single-player placeholders keyed by id. Never grown after insertion.
    pending: HashMap<String, Match>,
}

impl MatchmakerState {
    fn contains_id(&self, match_id: &str) -> bool {
        self.matches.contains_key(match_id) || self.pending.contains_key(match_id)
    }
}

// In-memory matchmaker that groups players into matches of three, in arrival order.
pub struct Matchmaker {
    state: RwLock<MatchmakerState>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn MatchIdGenerator>,
}

impl Matchmaker {
    // Create a new matchmaker with an empty queue and empty stores.
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn MatchIdGenerator>) -> Self {
        Self {
            state: RwLock::new(MatchmakerState::default()),
            clock,
            ids,
        }
    }

    // Queue a player and form as many matches as the queue allows.
    //
    // Returns the complete match the player was drained into by this call, or a
    // fresh single-player pending match otherwise. The pending match is a
    // snapshot placeholder: it is not updated when the player is later drained
    // into a complete match by someone else's call.
    pub async fn add_player(&self, player_id: &str) -> Result<Match, MatchmakingError> {
        let mut state = self.state.write().await;
        state.waiting.push_back(player_id.to_string());

        let mut joined = None;
        while let Some(group) = take_group(&mut state.waiting) {
            let formed = self.form_match(&state, group);

            debug!(match_id = %formed.id, players = ?formed.players, "match formed");
            if formed.contains(player_id) {
                joined = Some(formed.clone());
            }
            state.matches.insert(formed.id.clone(), formed);
        }

        if let Some(formed) = joined {
            return Ok(formed);
        }

        let id = self.unique_id(&state);
        let placeholder = Match::new(id, player_id.to_string(), self.clock.now_epoch_seconds());
        debug!(
            match_id = %placeholder.id,
            player_id,
            queued = state.waiting.len(),
            "pending match created"
        );
        state
            .pending
            .insert(placeholder.id.clone(), placeholder.clone());

        Ok(placeholder)
    }

    // Look up a match by id, complete matches first.
    pub async fn get_match(&self, match_id: &str) -> Result<Match, MatchmakingError> {
        let state = self.state.read().await;

        state
            .matches
            .get(match_id)
            .or_else(|| state.pending.get(match_id))
            .cloned()
            .ok_or_else(|| MatchmakingError::MatchNotFound {
                match_id: match_id.to_string(),
            })
    }

    fn form_match(&self, state: &MatchmakerState, group: [String; MATCH_SIZE]) -> Match {
        let id = self.unique_id(state);
        let [first, rest @ ..] = group;

        let mut formed = Match::new(id, first, self.clock.now_epoch_seconds());
        for player in rest {
            formed.add_player(player, self.clock.now_epoch_seconds());
        }
        formed
    }

    // Must be called with the write guard held so the check and the insert
    // that follows it are atomic.
    fn unique_id(&self, state: &MatchmakerState) -> String {
        loop {
            let id = self.ids.next_id();
            if !state.contains_id(&id) {
                return id;
            }
            warn!(match_id = %id, "generated match id collided; regenerating");
        }
    }
}

// Pop the oldest full group off the queue, if there is one.
fn take_group(waiting: &mut VecDeque<String>) -> Option<[String; MATCH_SIZE]> {
    if waiting.len() < MATCH_SIZE {
        return None;
    }
    let group: Vec<String> = waiting.drain(..MATCH_SIZE).collect();
    group.try_into().ok()
}
