//! Regulation-derived constants
//!
//! Values here come straight from the competition regulations or from the
//! results export format. Constants are grouped by their purpose.

// =============================================================================
// RESULT VALUES
// =============================================================================

/// Encoded value for "did not finish"
pub const DNF_VALUE: i64 = -1;

/// Encoded value for "did not start"
pub const DNS_VALUE: i64 = -2;

/// Encoded value for an empty attempt slot (e.g. value4/value5 of a Bo3)
pub const NO_RESULT_VALUE: i64 = 0;

/// Milliseconds per encoded centisecond
pub const MILLIS_PER_CENTISECOND: u128 = 10;

/// Subsecond digits kept when a centisecond value is decoded for display
pub const CENTISECOND_DECIMALS: u8 = 2;

// =============================================================================
// ROUNDS
// =============================================================================

/// https://www.worldcubeassociation.org/regulations/#9m
pub const MAX_ROUNDS_PER_EVENT: usize = 4;

/// https://www.worldcubeassociation.org/regulations/#9p1
pub const MINIMUM_CUTOFF_PERCENTAGE: u32 = 25;

/// First-round competitor ceilings for 1, 2 and 3 rounds (regulation 9m1-9m3)
pub const MAX_COMPETITORS_FOR_ONE_ROUND: u32 = 7;
pub const MAX_COMPETITORS_FOR_TWO_ROUNDS: u32 = 15;
pub const MAX_COMPETITORS_FOR_THREE_ROUNDS: u32 = 99;

// =============================================================================
// TIME LIMITS
// =============================================================================

/// https://www.worldcubeassociation.org/regulations/#A1a1
pub const DEFAULT_HARD_CUTOFF_SECONDS: u32 = 10 * 60;

/// Hard cutoff for 444bf, 555bf and 333mbf
pub const LONG_BLINDFOLDED_HARD_CUTOFF_SECONDS: u32 = 60 * 60;

// =============================================================================
// CONFIGURATION DEFAULTS
// =============================================================================

/// Default tracing filter
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default number of subsecond digits shown for timed results
pub const DEFAULT_DISPLAY_DECIMALS: u8 = CENTISECOND_DECIMALS;
