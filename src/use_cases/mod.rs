// Use cases layer: matchmaking workflows.

pub mod matchmaker;

#[cfg(test)]
pub(crate) mod test_support;

pub use matchmaker::Matchmaker;
