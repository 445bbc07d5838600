// Number of players that completes a match.
pub const MATCH_SIZE: usize = 3;

// Formation status of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchStatus {
    Waiting,
    Ready,
}

impl MatchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStatus::Waiting => "waiting",
            MatchStatus::Ready => "ready",
        }
    }
}

// A batch of players being assembled into a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    pub id: String,
    pub players: Vec<String>,
    pub status: MatchStatus,
    pub updated_at: u64,
    pub ready_at: Option<u64>,
}

impl Match {
    // Start a new match seeded with a single player.
    pub fn new(id: String, player_id: String, now: u64) -> Self {
        Self {
            id,
            players: vec![player_id],
            status: MatchStatus::Waiting,
            updated_at: now,
            ready_at: None,
        }
    }

    // Append a player; the match turns ready on the exact append that fills it.
    // Callers must not add to a match that is already ready.
    pub fn add_player(&mut self, player_id: String, now: u64) {
        self.players.push(player_id);
        self.updated_at = now;

        if self.players.len() == MATCH_SIZE {
            self.status = MatchStatus::Ready;
            self.ready_at = Some(self.updated_at);
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == MatchStatus::Ready
    }

    pub fn contains(&self, player_id: &str) -> bool {
        self.players.iter().any(|player| player == player_id)
    }
}
