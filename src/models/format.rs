//! Round formats and soft cutoff kinds

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CodeKind, RulesError};

/// Result format of a round (Bo1, Bo2, Bo3, Ao5, Mo3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatCode {
    #[serde(rename = "1")]
    BestOf1,
    #[serde(rename = "2")]
    BestOf2,
    #[serde(rename = "3")]
    BestOf3,
    #[serde(rename = "a")]
    AverageOf5,
    #[serde(rename = "m")]
    MeanOf3,
}

impl FormatCode {
    pub const ALL: [FormatCode; 5] = [
        FormatCode::BestOf1,
        FormatCode::BestOf2,
        FormatCode::BestOf3,
        FormatCode::AverageOf5,
        FormatCode::MeanOf3,
    ];

    pub fn code(&self) -> char {
        match self {
            FormatCode::BestOf1 => '1',
            FormatCode::BestOf2 => '2',
            FormatCode::BestOf3 => '3',
            FormatCode::AverageOf5 => 'a',
            FormatCode::MeanOf3 => 'm',
        }
    }

    pub fn from_code(code: char) -> Result<Self, RulesError> {
        FormatCode::ALL
            .into_iter()
            .find(|format| format.code() == code)
            .ok_or_else(|| RulesError::unknown(CodeKind::Format, code))
    }
}

impl fmt::Display for FormatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// How a soft cutoff is applied.
///
/// `Cumulative` is a time budget shared by several attempts (regulation
/// A1a2); `InN` gives the competitor N attempts to beat the cutoff time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoftCutoffKind {
    #[serde(rename = "cumulative")]
    Cumulative,
    #[serde(rename = "1")]
    In1,
    #[serde(rename = "2")]
    In2,
    #[serde(rename = "3")]
    In3,
}

impl SoftCutoffKind {
    pub const ALL: [SoftCutoffKind; 4] = [
        SoftCutoffKind::Cumulative,
        SoftCutoffKind::In1,
        SoftCutoffKind::In2,
        SoftCutoffKind::In3,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            SoftCutoffKind::Cumulative => "cumulative",
            SoftCutoffKind::In1 => "1",
            SoftCutoffKind::In2 => "2",
            SoftCutoffKind::In3 => "3",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SoftCutoffKind::Cumulative => "cumulative",
            SoftCutoffKind::In1 => "in 1",
            SoftCutoffKind::In2 => "in 2",
            SoftCutoffKind::In3 => "in 3",
        }
    }

    /// Number of attempts the cutoff applies to, `None` for cumulative
    pub fn attempts(&self) -> Option<u8> {
        match self {
            SoftCutoffKind::Cumulative => None,
            SoftCutoffKind::In1 => Some(1),
            SoftCutoffKind::In2 => Some(2),
            SoftCutoffKind::In3 => Some(3),
        }
    }
}

impl fmt::Display for SoftCutoffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SoftCutoffKind {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SoftCutoffKind::ALL
            .into_iter()
            .find(|kind| kind.code() == s)
            .ok_or_else(|| RulesError::unknown(CodeKind::SoftCutoffKind, s))
    }
}

/// Catalog entry for one round format
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundFormatDefinition {
    pub code: FormatCode,
    pub name: &'static str,
    pub short_name: &'static str,
    /// Attempts per competitor
    pub count: u8,
    /// Soft cutoff kinds usable with this format, in display order
    pub soft_cutoff_kinds: Vec<SoftCutoffKind>,
}

impl RoundFormatDefinition {
    pub fn allows_soft_cutoff(&self, kind: SoftCutoffKind) -> bool {
        self.soft_cutoff_kinds.contains(&kind)
    }
}
