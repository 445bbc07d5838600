use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::ports::{Clock, MatchIdGenerator};

// Shared fixed time source for deterministic use-case tests.
pub(crate) struct FixedClock(pub(crate) u64);

impl Clock for FixedClock {
    fn now_epoch_seconds(&self) -> u64 {
        self.0
    }
}

// Predictable ids: match-1, match-2, ...
#[derive(Default)]
pub(crate) struct SequentialMatchIds {
    counter: AtomicU64,
}

impl MatchIdGenerator for SequentialMatchIds {
    fn next_id(&self) -> String {
        let next = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("match-{next}")
    }
}

// Hands out a scripted list of ids, then falls back to sequential ones.
pub(crate) struct RepeatingMatchIds {
    scripted: Mutex<VecDeque<String>>,
    fallback: SequentialMatchIds,
}

impl RepeatingMatchIds {
    pub(crate) fn new(ids: &[&str]) -> Self {
        Self {
            scripted: Mutex::new(ids.iter().map(|id| id.to_string()).collect()),
            fallback: SequentialMatchIds::default(),
        }
    }
}

impl MatchIdGenerator for RepeatingMatchIds {
    fn next_id(&self) -> String {
        let mut guard = self.scripted.lock().expect("scripted ids mutex poisoned");
        guard
            .pop_front()
            .unwrap_or_else(|| self.fallback.next_id())
    }
}
