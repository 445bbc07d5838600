pub mod matches;
pub mod metrics;
