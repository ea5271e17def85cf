//! Attempt outcomes and their encoded result values

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{DNF_VALUE, DNS_VALUE, NO_RESULT_VALUE};

/// A penalty recorded against a single attempt.
///
/// DNF and DNS end the attempt. The `PlusTwo*` kinds record why two seconds
/// were added; the added time must already be part of the attempt's
/// milliseconds, the penalty itself is never encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PenaltyKind {
    #[serde(rename = "DNF")]
    Dnf,
    #[serde(rename = "DNS")]
    Dns,
    #[serde(rename = "PLUSTWO_ONE_MOVE_AWAY")]
    PlusTwoOneMoveAway,
    #[serde(rename = "PLUSTWO_PUZZLE_ON_TIMER")]
    PlusTwoPuzzleOnTimer,
    #[serde(rename = "PLUSTWO_START_PALMS_NOT_DOWN")]
    PlusTwoStartPalmsNotDown,
    #[serde(rename = "PLUSTWO_START_TOUCHING_PUZZLE")]
    PlusTwoStartTouchingPuzzle,
    #[serde(rename = "PLUSTWO_START_AFTER_INSPECTION")]
    PlusTwoStartAfterInspection,
    #[serde(rename = "PLUSTWO_STOP_TOUCHING_PUZZLE")]
    PlusTwoStopTouchingPuzzle,
    #[serde(rename = "PLUSTWO_STOP_PALMS_NOT_DOWN")]
    PlusTwoStopPalmsNotDown,
    #[serde(rename = "PLUSTWO_STOP_TOUCHED_PUZZLE_BEFORE_JUDGE_INSPECTED")]
    PlusTwoStopTouchedPuzzleBeforeJudgeInspected,
}

impl PenaltyKind {
    pub const ALL: [PenaltyKind; 10] = [
        PenaltyKind::Dnf,
        PenaltyKind::Dns,
        PenaltyKind::PlusTwoOneMoveAway,
        PenaltyKind::PlusTwoPuzzleOnTimer,
        PenaltyKind::PlusTwoStartPalmsNotDown,
        PenaltyKind::PlusTwoStartTouchingPuzzle,
        PenaltyKind::PlusTwoStartAfterInspection,
        PenaltyKind::PlusTwoStopTouchingPuzzle,
        PenaltyKind::PlusTwoStopPalmsNotDown,
        PenaltyKind::PlusTwoStopTouchedPuzzleBeforeJudgeInspected,
    ];

    /// Stored name of the penalty
    pub fn name(&self) -> &'static str {
        match self {
            PenaltyKind::Dnf => "DNF",
            PenaltyKind::Dns => "DNS",
            PenaltyKind::PlusTwoOneMoveAway => "PLUSTWO_ONE_MOVE_AWAY",
            PenaltyKind::PlusTwoPuzzleOnTimer => "PLUSTWO_PUZZLE_ON_TIMER",
            PenaltyKind::PlusTwoStartPalmsNotDown => "PLUSTWO_START_PALMS_NOT_DOWN",
            PenaltyKind::PlusTwoStartTouchingPuzzle => "PLUSTWO_START_TOUCHING_PUZZLE",
            PenaltyKind::PlusTwoStartAfterInspection => "PLUSTWO_START_AFTER_INSPECTION",
            PenaltyKind::PlusTwoStopTouchingPuzzle => "PLUSTWO_STOP_TOUCHING_PUZZLE",
            PenaltyKind::PlusTwoStopPalmsNotDown => "PLUSTWO_STOP_PALMS_NOT_DOWN",
            PenaltyKind::PlusTwoStopTouchedPuzzleBeforeJudgeInspected => {
                "PLUSTWO_STOP_TOUCHED_PUZZLE_BEFORE_JUDGE_INSPECTED"
            }
        }
    }

    /// Regulation article defining a +2, if this is one
    pub fn regulation(&self) -> Option<&'static str> {
        match self {
            PenaltyKind::Dnf | PenaltyKind::Dns => None,
            PenaltyKind::PlusTwoOneMoveAway => Some("10e3"),
            PenaltyKind::PlusTwoPuzzleOnTimer => Some("A3d1"),
            PenaltyKind::PlusTwoStartPalmsNotDown => Some("A4b"),
            PenaltyKind::PlusTwoStartTouchingPuzzle => Some("A4b1"),
            PenaltyKind::PlusTwoStartAfterInspection => Some("A4d1"),
            PenaltyKind::PlusTwoStopTouchingPuzzle => Some("A6c"),
            PenaltyKind::PlusTwoStopPalmsNotDown => Some("A6d"),
            PenaltyKind::PlusTwoStopTouchedPuzzleBeforeJudgeInspected => Some("A6e"),
        }
    }

    /// DNF and DNS end the attempt without a time
    pub fn is_terminal(&self) -> bool {
        matches!(self, PenaltyKind::Dnf | PenaltyKind::Dns)
    }

    pub fn is_plus_two(&self) -> bool {
        !self.is_terminal()
    }
}

impl fmt::Display for PenaltyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One competitor attempt, before encoding or after decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptOutcome {
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub penalties: BTreeSet<PenaltyKind>,
    /// Elapsed time including any +2s. Absent for DNF/DNS and empty slots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub millis: Option<u128>,
    /// Subsecond digits the time is precise to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u8>,
}

impl AttemptOutcome {
    /// An attempt that was timed
    pub fn timed(millis: u64) -> Self {
        Self {
            millis: Some(u128::from(millis)),
            ..Self::default()
        }
    }

    /// An empty attempt slot
    pub fn no_result() -> Self {
        Self::default()
    }

    pub fn dnf() -> Self {
        Self::default().with_penalty(PenaltyKind::Dnf)
    }

    pub fn dns() -> Self {
        Self::default().with_penalty(PenaltyKind::Dns)
    }

    pub fn with_penalty(mut self, penalty: PenaltyKind) -> Self {
        self.penalties.insert(penalty);
        self
    }

    pub fn has_penalty(&self, penalty: PenaltyKind) -> bool {
        self.penalties.contains(&penalty)
    }

    pub fn is_dnf(&self) -> bool {
        self.has_penalty(PenaltyKind::Dnf)
    }

    /// DNS with no DNF also present
    pub fn is_dns(&self) -> bool {
        !self.is_dnf() && self.has_penalty(PenaltyKind::Dns)
    }

    /// No terminal penalty and no time recorded
    pub fn is_no_result(&self) -> bool {
        !self.penalties.iter().any(PenaltyKind::is_terminal) && self.millis.is_none()
    }

    /// Number of +2 penalties recorded
    pub fn plus_two_count(&self) -> usize {
        self.penalties.iter().filter(|p| p.is_plus_two()).count()
    }
}

/// Canonical signed encoding of one attempt.
///
/// `-1` is DNF, `-2` is DNS, `0` is an empty slot, and positive values are
/// format-dependent (centiseconds for timed events). Among positive values a
/// smaller value is always a better result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultValue(i64);

impl ResultValue {
    pub const DNF: ResultValue = ResultValue(DNF_VALUE);
    pub const DNS: ResultValue = ResultValue(DNS_VALUE);
    pub const NO_RESULT: ResultValue = ResultValue(NO_RESULT_VALUE);

    pub const fn new(value: i64) -> Self {
        ResultValue(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    pub fn is_dnf(self) -> bool {
        self == Self::DNF
    }

    pub fn is_dns(self) -> bool {
        self == Self::DNS
    }

    pub fn is_no_result(self) -> bool {
        self == Self::NO_RESULT
    }

    /// A positive value, i.e. an attempt that counts for ranking
    pub fn is_success(self) -> bool {
        self.0 > 0
    }

    /// Ranking comparison: any success beats a non-success, and between two
    /// successes the smaller value wins.
    pub fn is_better_than(self, other: ResultValue) -> bool {
        match (self.is_success(), other.is_success()) {
            (true, true) => self.0 < other.0,
            (true, false) => true,
            (false, _) => false,
        }
    }
}

impl From<i64> for ResultValue {
    fn from(value: i64) -> Self {
        ResultValue(value)
    }
}

impl From<ResultValue> for i64 {
    fn from(value: ResultValue) -> Self {
        value.0
    }
}

impl fmt::Display for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
