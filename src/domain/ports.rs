// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now_epoch_seconds(&self) -> u64;
}

// Port for minting match identifiers.
pub trait MatchIdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}
