//! CubeComp - Speedcubing competition rules core
//!
//! This library encodes the result and round rules of speedcubing
//! competitions: how attempts are stored as signed integers and read back,
//! and which formats, cutoffs and round structures each event allows.
//!
//! # Features
//!
//! - Result value encoding (DNF, DNS, empty slots, centiseconds)
//! - Event, format, round kind and soft cutoff catalogs
//! - Per-event rules: allowed formats, cutoffs, hard cutoff defaults
//! - Round count limits by competitor pool size
//!
//! # Architecture
//!
//! - **Models**: Domain types and stored records
//! - **Services**: Result codec, rules catalog and round lookups
//! - **Repositories**: Read-only contracts over stored rounds
//!
//! Fewest-moves and multi-blind values are not given their special encodings;
//! see [`services::result_codec`].

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod telemetry;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{RulesError, RulesResult};
pub use models::{AttemptOutcome, PenaltyKind, ResultValue};
pub use services::{CATALOG, ResultValueCodec, RulesCatalog};
