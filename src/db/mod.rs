//! Persistence contracts
//!
//! Storage is owned elsewhere; this module only describes how stored round
//! records are read.

pub mod repositories;

pub use repositories::*;
