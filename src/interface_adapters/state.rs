use crate::domain::ports::Clock;
use crate::interface_adapters::ids::RandomMatchIds;
use crate::interface_adapters::metrics::Metrics;
use crate::use_cases::matchmaker::Matchmaker;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

// Shared application state for the HTTP handlers.
pub struct AppState {
    pub matchmaker: Arc<Matchmaker>,
    pub metrics: Arc<Metrics>,
    // Applied to every route by the router.
    pub request_timeout: Duration,
}

impl AppState {
    // Production wiring: wall clock and random match ids.
    pub fn new(request_timeout: Duration) -> Self {
        Self {
            matchmaker: Arc::new(Matchmaker::new(
                Arc::new(SystemClock),
                Arc::new(RandomMatchIds),
            )),
            metrics: Arc::new(Metrics::new()),
            request_timeout,
        }
    }
}

// System clock adapter for epoch seconds.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_seconds(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}
