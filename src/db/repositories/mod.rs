//! Repository implementations

pub mod round_repo;

pub use round_repo::{InMemoryRoundRepository, RoundRepository};
