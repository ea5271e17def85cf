//! Round model

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CodeKind, RulesError};
use crate::models::event::EventCode;

/// Position of a round within an event, as coded in results exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundKindCode {
    #[serde(rename = "1")]
    First,
    #[serde(rename = "d")]
    CombinedFirst,
    #[serde(rename = "2")]
    Second,
    #[serde(rename = "e")]
    CombinedSecond,
    #[serde(rename = "3")]
    SemiFinal,
    #[serde(rename = "g")]
    CombinedThird,
    #[serde(rename = "f")]
    Final,
    #[serde(rename = "c")]
    CombinedFinal,
    #[serde(rename = "0")]
    Qualification,
    #[serde(rename = "h")]
    CombinedQualification,
    #[serde(rename = "b")]
    BFinal,
}

impl RoundKindCode {
    pub const ALL: [RoundKindCode; 11] = [
        RoundKindCode::First,
        RoundKindCode::CombinedFirst,
        RoundKindCode::Second,
        RoundKindCode::CombinedSecond,
        RoundKindCode::SemiFinal,
        RoundKindCode::CombinedThird,
        RoundKindCode::Final,
        RoundKindCode::CombinedFinal,
        RoundKindCode::Qualification,
        RoundKindCode::CombinedQualification,
        RoundKindCode::BFinal,
    ];

    pub fn code(&self) -> char {
        match self {
            RoundKindCode::First => '1',
            RoundKindCode::CombinedFirst => 'd',
            RoundKindCode::Second => '2',
            RoundKindCode::CombinedSecond => 'e',
            RoundKindCode::SemiFinal => '3',
            RoundKindCode::CombinedThird => 'g',
            RoundKindCode::Final => 'f',
            RoundKindCode::CombinedFinal => 'c',
            RoundKindCode::Qualification => '0',
            RoundKindCode::CombinedQualification => 'h',
            RoundKindCode::BFinal => 'b',
        }
    }

    pub fn from_code(code: char) -> Result<Self, RulesError> {
        RoundKindCode::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| RulesError::unknown(CodeKind::RoundKind, code))
    }
}

impl fmt::Display for RoundKindCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Catalog entry for one round kind.
///
/// A combined round folds a qualifying cutoff into the round itself.
/// Qualification rounds and B Finals are known but have no supported
/// position, so they cannot be scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundKind {
    pub code: RoundKindCode,
    pub name: &'static str,
    pub combined: bool,
    pub supported_round_index: Option<usize>,
}

impl RoundKind {
    pub fn is_supported(&self) -> bool {
        self.supported_round_index.is_some()
    }
}

/// The two round kinds that may fill one supported position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupportedRound {
    pub index: usize,
    pub uncombined: RoundKindCode,
    pub combined: RoundKindCode,
}

impl SupportedRound {
    pub fn kind(&self, combined: bool) -> RoundKindCode {
        if combined { self.combined } else { self.uncombined }
    }
}

/// Lifecycle of a round: `unstarted -> open -> closed`, never backwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundStatus {
    #[default]
    Unstarted,
    Open,
    Closed,
}

impl RoundStatus {
    /// Whether moving from `self` to `next` is a forward step
    pub fn can_transition_to(self, next: RoundStatus) -> bool {
        matches!(
            (self, next),
            (RoundStatus::Unstarted, RoundStatus::Open) | (RoundStatus::Open, RoundStatus::Closed)
        )
    }

    pub fn is_closed(self) -> bool {
        self == RoundStatus::Closed
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundStatus::Unstarted => write!(f, "unstarted"),
            RoundStatus::Open => write!(f, "open"),
            RoundStatus::Closed => write!(f, "closed"),
        }
    }
}

/// A round as stored by the persistence layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRecord {
    pub competition_id: String,
    pub event_code: EventCode,
    pub round_code: RoundKindCode,
    #[serde(default)]
    pub status: RoundStatus,
}
