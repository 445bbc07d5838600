use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Default)]
struct EndpointStats {
    requests: u64,
    samples: u64,
    total: Duration,
}

impl EndpointStats {
    fn average(&self) -> Duration {
        if self.samples == 0 {
            return Duration::ZERO;
        }
        let nanos = self.total.as_nanos() / u128::from(self.samples);
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }
}

/// Point-in-time view of one endpoint's counters.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointSnapshot {
    pub requests: u64,
    pub average: Duration,
}

/// Running timer handed out by [`Metrics::start_timer`].
#[derive(Debug)]
pub struct RequestTimer {
    endpoint: String,
    started: Instant,
}

/// Per-endpoint request counters and latency averages.
#[derive(Debug, Default)]
pub struct Metrics {
    endpoints: RwLock<HashMap<String, EndpointStats>>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn increment(&self, endpoint: &str) {
        let mut endpoints = self.endpoints.write().await;
        let stats = endpoints.entry(endpoint.to_string()).or_default();
        stats.requests += 1;
        debug!(endpoint, count = stats.requests, "request counted");
    }

    pub fn start_timer(&self, endpoint: &str) -> RequestTimer {
        RequestTimer {
            endpoint: endpoint.to_string(),
            started: Instant::now(),
        }
    }

    /// Records the elapsed time of `timer` as one sample and returns it.
    pub async fn stop_timer(&self, timer: RequestTimer) -> Duration {
        let elapsed = timer.started.elapsed();
        let mut endpoints = self.endpoints.write().await;
        let stats = endpoints.entry(timer.endpoint.clone()).or_default();
        stats.samples += 1;
        stats.total += elapsed;
        debug!(
            endpoint = %timer.endpoint,
            elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
            "request timed"
        );
        elapsed
    }

    pub async fn request_count(&self, endpoint: &str) -> u64 {
        let endpoints = self.endpoints.read().await;
        endpoints.get(endpoint).map_or(0, |stats| stats.requests)
    }

    /// Mean of all recorded samples, or zero when nothing was timed yet.
    pub async fn average_request_time(&self, endpoint: &str) -> Duration {
        let endpoints = self.endpoints.read().await;
        endpoints
            .get(endpoint)
            .map_or(Duration::ZERO, EndpointStats::average)
    }

    pub async fn snapshot(&self) -> BTreeMap<String, EndpointSnapshot> {
        let endpoints = self.endpoints.read().await;
        endpoints
            .iter()
            .map(|(name, stats)| {
                (
                    name.clone(),
                    EndpointSnapshot {
                        requests: stats.requests,
                        average: stats.average(),
                    },
                )
            })
            .collect()
    }
}
