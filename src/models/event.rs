//! Event model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CodeKind, RulesError};

/// Official events, keyed by their regulation short code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCode {
    #[serde(rename = "222")]
    Cube2,
    #[serde(rename = "333")]
    Cube3,
    #[serde(rename = "444")]
    Cube4,
    #[serde(rename = "555")]
    Cube5,
    #[serde(rename = "666")]
    Cube6,
    #[serde(rename = "777")]
    Cube7,
    #[serde(rename = "333bf")]
    Cube3Blindfolded,
    #[serde(rename = "333oh")]
    Cube3OneHanded,
    #[serde(rename = "333fm")]
    Cube3FewestMoves,
    #[serde(rename = "333ft")]
    Cube3WithFeet,
    #[serde(rename = "minx")]
    Megaminx,
    #[serde(rename = "pyram")]
    Pyraminx,
    #[serde(rename = "sq1")]
    Square1,
    #[serde(rename = "clock")]
    Clock,
    #[serde(rename = "skewb")]
    Skewb,
    #[serde(rename = "444bf")]
    Cube4Blindfolded,
    #[serde(rename = "555bf")]
    Cube5Blindfolded,
    #[serde(rename = "333mbf")]
    Cube3MultiBlindfolded,
}

impl EventCode {
    pub const ALL: [EventCode; 18] = [
        EventCode::Cube2,
        EventCode::Cube3,
        EventCode::Cube4,
        EventCode::Cube5,
        EventCode::Cube6,
        EventCode::Cube7,
        EventCode::Cube3Blindfolded,
        EventCode::Cube3OneHanded,
        EventCode::Cube3FewestMoves,
        EventCode::Cube3WithFeet,
        EventCode::Megaminx,
        EventCode::Pyraminx,
        EventCode::Square1,
        EventCode::Clock,
        EventCode::Skewb,
        EventCode::Cube4Blindfolded,
        EventCode::Cube5Blindfolded,
        EventCode::Cube3MultiBlindfolded,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            EventCode::Cube2 => "222",
            EventCode::Cube3 => "333",
            EventCode::Cube4 => "444",
            EventCode::Cube5 => "555",
            EventCode::Cube6 => "666",
            EventCode::Cube7 => "777",
            EventCode::Cube3Blindfolded => "333bf",
            EventCode::Cube3OneHanded => "333oh",
            EventCode::Cube3FewestMoves => "333fm",
            EventCode::Cube3WithFeet => "333ft",
            EventCode::Megaminx => "minx",
            EventCode::Pyraminx => "pyram",
            EventCode::Square1 => "sq1",
            EventCode::Clock => "clock",
            EventCode::Skewb => "skewb",
            EventCode::Cube4Blindfolded => "444bf",
            EventCode::Cube5Blindfolded => "555bf",
            EventCode::Cube3MultiBlindfolded => "333mbf",
        }
    }

    /// How positive result values of this event are to be read
    pub fn result_format(&self) -> ResultFormat {
        match self {
            EventCode::Cube3FewestMoves => ResultFormat::Number,
            EventCode::Cube3MultiBlindfolded => ResultFormat::Multi,
            _ => ResultFormat::Time,
        }
    }
}

impl fmt::Display for EventCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for EventCode {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventCode::ALL
            .into_iter()
            .find(|event| event.code() == s)
            .ok_or_else(|| RulesError::unknown(CodeKind::Event, s))
    }
}

/// Meaning of a positive result value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultFormat {
    /// Centiseconds
    Time,
    /// A raw count, currently only fewest-moves move counts
    Number,
    /// Packed solved/attempted/time for multi-blind
    Multi,
}

/// Catalog entry for one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventDefinition {
    pub code: EventCode,
    pub name: &'static str,
    pub result_format: ResultFormat,
}

impl EventDefinition {
    pub fn new(code: EventCode, name: &'static str) -> Self {
        Self {
            code,
            name,
            result_format: code.result_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_event_codes() {
        assert_eq!("333".parse::<EventCode>().unwrap(), EventCode::Cube3);
        assert_eq!("444bf".parse::<EventCode>().unwrap(), EventCode::Cube4Blindfolded);

        let err = "3x3".parse::<EventCode>().unwrap_err();
        assert_eq!(err, RulesError::unknown(CodeKind::Event, "3x3"));
    }

    #[test]
    fn test_codes_match_wire_names() {
        for event in EventCode::ALL {
            let json = serde_json::to_string(&event).unwrap();
            assert_eq!(json, format!("\"{}\"", event.code()));
        }
    }

    #[test]
    fn test_result_formats() {
        assert_eq!(EventCode::Cube3.result_format(), ResultFormat::Time);
        assert_eq!(EventCode::Cube3FewestMoves.result_format(), ResultFormat::Number);
        assert_eq!(EventCode::Cube3MultiBlindfolded.result_format(), ResultFormat::Multi);
    }
}
