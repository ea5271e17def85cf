//! Competition rules catalog
//!
//! Reference tables for events, round formats, round kinds and soft cutoff
//! kinds, plus the per-event defaults derived from the regulations. The
//! catalog is built once, checked for internal consistency, and is read-only
//! afterwards; it can be shared freely between threads.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_HARD_CUTOFF_SECONDS, LONG_BLINDFOLDED_HARD_CUTOFF_SECONDS,
    MAX_COMPETITORS_FOR_ONE_ROUND, MAX_COMPETITORS_FOR_THREE_ROUNDS,
    MAX_COMPETITORS_FOR_TWO_ROUNDS, MAX_ROUNDS_PER_EVENT,
};
use crate::error::{CodeKind, RulesError, RulesResult};
use crate::models::{
    EventCode, EventDefinition, FormatCode, RoundFormatDefinition, RoundKind, RoundKindCode,
    SoftCutoffKind, SupportedRound,
};

/// Process-wide catalog built from [`CatalogTables::standard`].
///
/// An inconsistent catalog is a programming error, so the first access
/// panics instead of letting anything run against bad reference data.
pub static CATALOG: LazyLock<RulesCatalog> = LazyLock::new(|| {
    RulesCatalog::new().expect("Competition rules catalog failed its consistency checks")
});

/// Raw reference tables, as declared
#[derive(Debug, Clone)]
pub struct CatalogTables {
    pub events: Vec<EventDefinition>,
    pub formats: Vec<RoundFormatDefinition>,
    pub round_kinds: Vec<RoundKind>,
    /// Allowed formats per event, most preferred first
    pub formats_by_event: Vec<(EventCode, Vec<FormatCode>)>,
    /// Events whose hard cutoff defaults to an hour instead of ten minutes
    pub long_hard_cutoff_events: Vec<EventCode>,
}

impl CatalogTables {
    /// The tables defined by the regulations
    pub fn standard() -> Self {
        Self {
            events: standard_events(),
            formats: standard_formats(),
            round_kinds: standard_round_kinds(),
            formats_by_event: standard_formats_by_event(),
            // https://www.worldcubeassociation.org/regulations/#A1a1
            long_hard_cutoff_events: vec![
                EventCode::Cube4Blindfolded,
                EventCode::Cube5Blindfolded,
                EventCode::Cube3MultiBlindfolded,
            ],
        }
    }
}

fn standard_events() -> Vec<EventDefinition> {
    use EventCode::*;

    [
        (Cube2, "2x2 Cube"),
        (Cube3, "Rubik's Cube"),
        (Cube4, "4x4 Cube"),
        (Cube5, "5x5 Cube"),
        (Cube6, "6x6 Cube"),
        (Cube7, "7x7 Cube"),
        (Cube3Blindfolded, "Rubik's Cube: Blindfolded"),
        (Cube3OneHanded, "Rubik's Cube: One-handed"),
        (Cube3FewestMoves, "Rubik's Cube: Fewest moves"),
        (Cube3WithFeet, "Rubik's Cube: With feet"),
        (Megaminx, "Megaminx"),
        (Pyraminx, "Pyraminx"),
        (Square1, "Square-1"),
        (Clock, "Rubik's Clock"),
        (Skewb, "Skewb"),
        (Cube4Blindfolded, "4x4 Cube: Blindfolded"),
        (Cube5Blindfolded, "5x5 Cube: Blindfolded"),
        (Cube3MultiBlindfolded, "Rubik's Cube: Multiple Blindfolded"),
    ]
    .into_iter()
    .map(|(code, name)| EventDefinition::new(code, name))
    .collect()
}

fn standard_formats() -> Vec<RoundFormatDefinition> {
    use SoftCutoffKind::*;

    vec![
        RoundFormatDefinition {
            code: FormatCode::BestOf1,
            name: "Best of 1",
            short_name: "Bo1",
            count: 1,
            soft_cutoff_kinds: vec![],
        },
        RoundFormatDefinition {
            code: FormatCode::BestOf2,
            name: "Best of 2",
            short_name: "Bo2",
            count: 2,
            soft_cutoff_kinds: vec![Cumulative, In1],
        },
        RoundFormatDefinition {
            code: FormatCode::BestOf3,
            name: "Best of 3",
            short_name: "Bo3",
            count: 3,
            soft_cutoff_kinds: vec![Cumulative, In1, In2],
        },
        RoundFormatDefinition {
            code: FormatCode::AverageOf5,
            name: "Average of 5",
            short_name: "Ao5",
            count: 5,
            soft_cutoff_kinds: vec![Cumulative, In1, In2, In3],
        },
        RoundFormatDefinition {
            code: FormatCode::MeanOf3,
            name: "Mean of 3",
            short_name: "Mo3",
            count: 3,
            soft_cutoff_kinds: vec![Cumulative, In1, In2],
        },
    ]
}

fn standard_round_kinds() -> Vec<RoundKind> {
    use RoundKindCode::*;

    let kind = |code: RoundKindCode,
                name: &'static str,
                combined: bool,
                supported_round_index: Option<usize>| RoundKind {
        code,
        name,
        combined,
        supported_round_index,
    };

    vec![
        kind(First, "First round", false, Some(0)),
        kind(CombinedFirst, "Combined First round", true, Some(0)),
        kind(Second, "Second round", false, Some(1)),
        kind(CombinedSecond, "Combined Second round", true, Some(1)),
        kind(SemiFinal, "Semi Final", false, Some(2)),
        kind(CombinedThird, "Combined Third Round", true, Some(2)),
        kind(Final, "Final", false, Some(3)),
        kind(CombinedFinal, "Combined Final", true, Some(3)),
        // Recognized, but never scheduled
        kind(Qualification, "Qualification round", false, None),
        kind(CombinedQualification, "Combined qualification", true, None),
        kind(BFinal, "B Final", false, None),
    ]
}

// https://www.worldcubeassociation.org/regulations/#9b
fn standard_formats_by_event() -> Vec<(EventCode, Vec<FormatCode>)> {
    use EventCode::*;
    use FormatCode::*;

    let mut table = Vec::new();

    // 9b1
    for event in [
        Cube3, Cube2, Cube4, Cube5, Clock, Megaminx, Pyraminx, Square1, Skewb, Cube3OneHanded,
    ] {
        table.push((event, vec![AverageOf5, BestOf3, BestOf2, BestOf1]));
    }
    // 9b2
    for event in [Cube3WithFeet, Cube3FewestMoves, Cube6, Cube7] {
        table.push((event, vec![MeanOf3, BestOf2, BestOf1]));
    }
    // 9b3
    for event in [Cube3Blindfolded, Cube4Blindfolded, Cube5Blindfolded, Cube3MultiBlindfolded] {
        table.push((event, vec![BestOf3, BestOf2, BestOf1]));
    }

    table
}

/// Read-only, code-indexed view over the reference tables
#[derive(Debug)]
pub struct RulesCatalog {
    event_order: Vec<&'static str>,
    events: HashMap<&'static str, EventDefinition>,
    formats: HashMap<char, RoundFormatDefinition>,
    round_kinds: HashMap<char, RoundKind>,
    soft_cutoff_kinds: HashMap<&'static str, SoftCutoffKind>,
    formats_by_event: HashMap<EventCode, Vec<FormatCode>>,
    hard_cutoff_seconds: HashMap<EventCode, u32>,
    supported_rounds: Vec<SupportedRound>,
}

impl RulesCatalog {
    /// Build the standard catalog
    pub fn new() -> RulesResult<Self> {
        Self::from_tables(CatalogTables::standard())
    }

    /// The process-wide catalog
    pub fn global() -> &'static RulesCatalog {
        &CATALOG
    }

    /// Index and validate a set of tables.
    ///
    /// Fails with [`RulesError::CatalogConsistencyViolation`] if codes are
    /// duplicated, if the supported round positions don't number exactly
    /// [`MAX_ROUNDS_PER_EVENT`], or if the per-event tables don't cover the
    /// declared events.
    pub fn from_tables(tables: CatalogTables) -> RulesResult<Self> {
        let mut event_order = Vec::with_capacity(tables.events.len());
        let mut events = HashMap::with_capacity(tables.events.len());
        for event in tables.events {
            let code = event.code.code();
            if events.insert(code, event).is_some() {
                return Err(violation(format!("duplicate event code {code:?}")));
            }
            event_order.push(code);
        }

        let mut formats = HashMap::with_capacity(tables.formats.len());
        for format in tables.formats {
            check_soft_cutoff_kinds(&format)?;
            let code = format.code.code();
            if formats.insert(code, format).is_some() {
                return Err(violation(format!("duplicate format code {code:?}")));
            }
        }

        let mut round_kinds = HashMap::with_capacity(tables.round_kinds.len());
        for round_kind in tables.round_kinds {
            let code = round_kind.code.code();
            if round_kinds.insert(code, round_kind).is_some() {
                return Err(violation(format!("duplicate round kind code {code:?}")));
            }
        }
        let supported_rounds = collect_supported_rounds(&round_kinds)?;

        let mut formats_by_event = HashMap::with_capacity(tables.formats_by_event.len());
        for (event, allowed) in tables.formats_by_event {
            if !events.contains_key(event.code()) {
                return Err(violation(format!(
                    "formats declared for unknown event {:?}",
                    event.code()
                )));
            }
            if allowed.is_empty() {
                return Err(violation(format!("no formats allowed for event {:?}", event.code())));
            }
            if let Some(missing) = allowed.iter().find(|f| !formats.contains_key(&f.code())) {
                return Err(violation(format!(
                    "event {:?} allows undeclared format {:?}",
                    event.code(),
                    missing.code()
                )));
            }
            if formats_by_event.insert(event, allowed).is_some() {
                return Err(violation(format!(
                    "formats declared twice for event {:?}",
                    event.code()
                )));
            }
        }
        if let Some(uncovered) = event_order
            .iter()
            .find(|code| !formats_by_event.contains_key(&events[**code].code))
        {
            return Err(violation(format!("event {uncovered:?} has no allowed formats")));
        }

        let mut hard_cutoff_seconds: HashMap<EventCode, u32> = formats_by_event
            .keys()
            .map(|event| (*event, DEFAULT_HARD_CUTOFF_SECONDS))
            .collect();
        for event in tables.long_hard_cutoff_events {
            match hard_cutoff_seconds.get_mut(&event) {
                Some(seconds) => *seconds = LONG_BLINDFOLDED_HARD_CUTOFF_SECONDS,
                None => {
                    return Err(violation(format!(
                        "hard cutoff override for unknown event {:?}",
                        event.code()
                    )));
                }
            }
        }

        let soft_cutoff_kinds = SoftCutoffKind::ALL
            .into_iter()
            .map(|kind| (kind.code(), kind))
            .collect();

        tracing::debug!(
            events = events.len(),
            formats = formats.len(),
            round_kinds = round_kinds.len(),
            supported_rounds = supported_rounds.len(),
            "Rules catalog built"
        );

        Ok(Self {
            event_order,
            events,
            formats,
            round_kinds,
            soft_cutoff_kinds,
            formats_by_event,
            hard_cutoff_seconds,
            supported_rounds,
        })
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    pub fn event_by_code(&self, code: &str) -> RulesResult<&EventDefinition> {
        self.events
            .get(code)
            .ok_or_else(|| RulesError::unknown(CodeKind::Event, code))
    }

    pub fn format_by_code(&self, code: char) -> RulesResult<&RoundFormatDefinition> {
        self.formats
            .get(&code)
            .ok_or_else(|| RulesError::unknown(CodeKind::Format, code))
    }

    pub fn round_kind_by_code(&self, code: char) -> RulesResult<&RoundKind> {
        self.round_kinds
            .get(&code)
            .ok_or_else(|| RulesError::unknown(CodeKind::RoundKind, code))
    }

    pub fn soft_cutoff_kind_by_code(&self, code: &str) -> RulesResult<SoftCutoffKind> {
        self.soft_cutoff_kinds
            .get(code)
            .copied()
            .ok_or_else(|| RulesError::unknown(CodeKind::SoftCutoffKind, code))
    }

    /// All events, in declaration order
    pub fn events(&self) -> Vec<&EventDefinition> {
        self.event_order
            .iter()
            .filter_map(|code| self.events.get(code))
            .collect()
    }

    // =========================================================================
    // Per-event rules
    // =========================================================================

    /// Formats an event may be held in, most preferred first
    pub fn allowed_formats_for_event(
        &self,
        event_code: &str,
    ) -> RulesResult<Vec<&RoundFormatDefinition>> {
        let event = self.event_by_code(event_code)?;
        let allowed = self
            .formats_by_event
            .get(&event.code)
            .ok_or_else(|| RulesError::unknown(CodeKind::Event, event_code))?;

        allowed
            .iter()
            .map(|format| self.format_by_code(format.code()))
            .collect()
    }

    /// Whether rounds of this event may have a soft cutoff (everything but FMC)
    pub fn event_allows_cutoffs(&self, event_code: &str) -> RulesResult<bool> {
        let event = self.event_by_code(event_code)?;
        Ok(event.code != EventCode::Cube3FewestMoves)
    }

    /// Time after which an attempt is stopped, unless the round overrides it
    pub fn default_hard_cutoff_seconds(&self, event_code: &str) -> RulesResult<u32> {
        let event = self.event_by_code(event_code)?;
        self.hard_cutoff_seconds
            .get(&event.code)
            .copied()
            .ok_or_else(|| RulesError::unknown(CodeKind::Event, event_code))
    }

    // =========================================================================
    // Rounds
    // =========================================================================

    /// Maximum number of rounds for an event, given its first-round size
    /// (regulation 9m). Never more than [`MAX_ROUNDS_PER_EVENT`].
    pub fn max_rounds_allowed(&self, first_round_size: u32) -> usize {
        if first_round_size <= MAX_COMPETITORS_FOR_ONE_ROUND {
            1
        } else if first_round_size <= MAX_COMPETITORS_FOR_TWO_ROUNDS {
            2
        } else if first_round_size <= MAX_COMPETITORS_FOR_THREE_ROUNDS {
            3
        } else {
            MAX_ROUNDS_PER_EVENT
        }
    }

    /// The schedulable round positions, in order
    pub fn supported_rounds(&self) -> &[SupportedRound] {
        &self.supported_rounds
    }

    /// Position of a round kind within an event.
    ///
    /// Qualification rounds and B Finals fail with
    /// [`RulesError::UnsupportedRoundKind`].
    pub fn supported_round_index(&self, code: char) -> RulesResult<usize> {
        self.round_kind_by_code(code)?
            .supported_round_index
            .ok_or(RulesError::UnsupportedRoundKind(code))
    }

    /// Round kind filling `index`, combined or not
    pub fn round_kind_for_position(&self, index: usize, combined: bool) -> Option<&RoundKind> {
        let position = self.supported_rounds.get(index)?;
        self.round_kinds.get(&position.kind(combined).code())
    }

    pub fn soft_cutoff_kinds_for_format(&self, code: char) -> RulesResult<&[SoftCutoffKind]> {
        Ok(&self.format_by_code(code)?.soft_cutoff_kinds)
    }
}

fn violation(message: String) -> RulesError {
    tracing::error!(%message, "Rules catalog is inconsistent");
    RulesError::CatalogConsistencyViolation(message)
}

/// A soft cutoff must leave at least one attempt after it: "in N" needs more
/// than N attempts and a cumulative limit needs at least two.
fn check_soft_cutoff_kinds(format: &RoundFormatDefinition) -> RulesResult<()> {
    for kind in &format.soft_cutoff_kinds {
        let fits = match kind.attempts() {
            Some(attempts) => attempts < format.count,
            None => format.count >= 2,
        };
        if !fits {
            return Err(violation(format!(
                "format {} cannot use soft cutoff {:?}",
                format.short_name,
                kind.name()
            )));
        }
    }
    Ok(())
}

fn collect_supported_rounds(
    round_kinds: &HashMap<char, RoundKind>,
) -> RulesResult<Vec<SupportedRound>> {
    let mut positions: BTreeMap<usize, (Option<RoundKindCode>, Option<RoundKindCode>)> =
        BTreeMap::new();

    for kind in round_kinds.values() {
        let Some(index) = kind.supported_round_index else {
            continue;
        };
        if index >= MAX_ROUNDS_PER_EVENT {
            return Err(violation(format!(
                "round kind {:?} has index {index}, limit is {MAX_ROUNDS_PER_EVENT}",
                kind.code.code()
            )));
        }

        let slot = positions.entry(index).or_default();
        let target = if kind.combined { &mut slot.1 } else { &mut slot.0 };
        if let Some(existing) = target.replace(kind.code) {
            return Err(violation(format!(
                "round kinds {:?} and {:?} both claim position {index}",
                existing.code(),
                kind.code.code()
            )));
        }
    }

    if positions.len() != MAX_ROUNDS_PER_EVENT {
        return Err(violation(format!(
            "expected {MAX_ROUNDS_PER_EVENT} supported round positions, found {}",
            positions.len()
        )));
    }

    positions
        .into_iter()
        .map(|(index, slot)| match slot {
            (Some(uncombined), Some(combined)) => Ok(SupportedRound {
                index,
                uncombined,
                combined,
            }),
            _ => Err(violation(format!(
                "supported round position {index} needs both a combined and an uncombined kind"
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> RulesCatalog {
        RulesCatalog::new().unwrap()
    }

    fn short_names(formats: Vec<&RoundFormatDefinition>) -> Vec<&'static str> {
        formats.into_iter().map(|f| f.short_name).collect()
    }

    #[test]
    fn test_standard_catalog_is_consistent() {
        let catalog = catalog();
        assert_eq!(catalog.events().len(), 18);
        assert_eq!(catalog.supported_rounds().len(), MAX_ROUNDS_PER_EVENT);
    }

    #[test]
    fn test_global_catalog() {
        let event = RulesCatalog::global().event_by_code("333").unwrap();
        assert_eq!(event.name, "Rubik's Cube");
    }

    #[test]
    fn test_lookups() {
        let catalog = catalog();

        assert_eq!(catalog.event_by_code("sq1").unwrap().name, "Square-1");
        assert_eq!(catalog.format_by_code('a').unwrap().count, 5);
        assert_eq!(catalog.format_by_code('m').unwrap().short_name, "Mo3");
        assert!(catalog.round_kind_by_code('c').unwrap().combined);
        assert_eq!(
            catalog.soft_cutoff_kind_by_code("cumulative").unwrap(),
            SoftCutoffKind::Cumulative
        );
    }

    #[test]
    fn test_unknown_codes() {
        let catalog = catalog();

        assert_eq!(
            catalog.event_by_code("666bf").unwrap_err(),
            RulesError::unknown(CodeKind::Event, "666bf")
        );
        assert_eq!(
            catalog.format_by_code('x').unwrap_err(),
            RulesError::unknown(CodeKind::Format, 'x')
        );
        assert_eq!(
            catalog.round_kind_by_code('z').unwrap_err(),
            RulesError::unknown(CodeKind::RoundKind, 'z')
        );
        assert_eq!(
            catalog.soft_cutoff_kind_by_code("in 1").unwrap_err(),
            RulesError::unknown(CodeKind::SoftCutoffKind, "in 1")
        );
        assert!(catalog.allowed_formats_for_event("").is_err());
        assert!(catalog.event_allows_cutoffs("nope").is_err());
        assert!(catalog.default_hard_cutoff_seconds("nope").is_err());
    }

    #[test]
    fn test_attempt_counts() {
        let catalog = catalog();
        let counts: Vec<u8> = ['1', '2', '3', 'm', 'a']
            .into_iter()
            .map(|code| catalog.format_by_code(code).unwrap().count)
            .collect();
        assert_eq!(counts, vec![1, 2, 3, 3, 5]);
    }

    #[test]
    fn test_allowed_formats_for_event() {
        let catalog = catalog();

        assert_eq!(
            short_names(catalog.allowed_formats_for_event("333").unwrap()),
            vec!["Ao5", "Bo3", "Bo2", "Bo1"]
        );
        assert_eq!(
            short_names(catalog.allowed_formats_for_event("333bf").unwrap()),
            vec!["Bo3", "Bo2", "Bo1"]
        );
        assert_eq!(
            short_names(catalog.allowed_formats_for_event("777").unwrap()),
            vec!["Mo3", "Bo2", "Bo1"]
        );
        assert_eq!(
            short_names(catalog.allowed_formats_for_event("333fm").unwrap()),
            vec!["Mo3", "Bo2", "Bo1"]
        );
    }

    #[test]
    fn test_blindfolded_events_never_average() {
        let catalog = catalog();
        for code in ["333bf", "444bf", "555bf", "333mbf"] {
            let formats = catalog.allowed_formats_for_event(code).unwrap();
            assert!(
                formats
                    .iter()
                    .all(|f| f.code != FormatCode::AverageOf5 && f.code != FormatCode::MeanOf3)
            );
        }
    }

    #[test]
    fn test_event_allows_cutoffs() {
        let catalog = catalog();
        assert!(!catalog.event_allows_cutoffs("333fm").unwrap());
        assert!(catalog.event_allows_cutoffs("333").unwrap());
        assert!(catalog.event_allows_cutoffs("333mbf").unwrap());
    }

    #[test]
    fn test_default_hard_cutoffs() {
        let catalog = catalog();
        assert_eq!(catalog.default_hard_cutoff_seconds("444bf").unwrap(), 3600);
        assert_eq!(catalog.default_hard_cutoff_seconds("555bf").unwrap(), 3600);
        assert_eq!(catalog.default_hard_cutoff_seconds("333mbf").unwrap(), 3600);
        assert_eq!(catalog.default_hard_cutoff_seconds("333").unwrap(), 600);
        assert_eq!(catalog.default_hard_cutoff_seconds("333bf").unwrap(), 600);
    }

    #[test]
    fn test_max_rounds_allowed() {
        let catalog = catalog();
        assert_eq!(catalog.max_rounds_allowed(0), 1);
        assert_eq!(catalog.max_rounds_allowed(7), 1);
        assert_eq!(catalog.max_rounds_allowed(8), 2);
        assert_eq!(catalog.max_rounds_allowed(15), 2);
        assert_eq!(catalog.max_rounds_allowed(16), 3);
        assert_eq!(catalog.max_rounds_allowed(99), 3);
        assert_eq!(catalog.max_rounds_allowed(100), 4);
        assert_eq!(catalog.max_rounds_allowed(u32::MAX), 4);
    }

    #[test]
    fn test_supported_rounds() {
        let catalog = catalog();
        let pairs: Vec<(char, char)> = catalog
            .supported_rounds()
            .iter()
            .map(|r| (r.uncombined.code(), r.combined.code()))
            .collect();
        assert_eq!(pairs, vec![('1', 'd'), ('2', 'e'), ('3', 'g'), ('f', 'c')]);

        assert_eq!(catalog.round_kind_for_position(3, false).unwrap().name, "Final");
        assert_eq!(catalog.round_kind_for_position(0, true).unwrap().code.code(), 'd');
        assert!(catalog.round_kind_for_position(4, false).is_none());
    }

    #[test]
    fn test_supported_round_index() {
        let catalog = catalog();
        assert_eq!(catalog.supported_round_index('f').unwrap(), 3);
        assert_eq!(catalog.supported_round_index('e').unwrap(), 1);

        for code in ['0', 'h', 'b'] {
            assert_eq!(
                catalog.supported_round_index(code).unwrap_err(),
                RulesError::UnsupportedRoundKind(code)
            );
        }
        assert_eq!(catalog.supported_round_index('z').unwrap_err().error_code(), "UNKNOWN_CODE");
    }

    #[test]
    fn test_soft_cutoff_kinds_for_format() {
        let catalog = catalog();
        assert!(catalog.soft_cutoff_kinds_for_format('1').unwrap().is_empty());
        assert_eq!(
            catalog.soft_cutoff_kinds_for_format('a').unwrap(),
            &SoftCutoffKind::ALL[..]
        );

        let bo3 = catalog.format_by_code('3').unwrap();
        assert!(bo3.allows_soft_cutoff(SoftCutoffKind::In2));
        assert!(!bo3.allows_soft_cutoff(SoftCutoffKind::In3));
    }

    #[test]
    fn test_soft_cutoff_kinds_grow_with_attempt_count() {
        let catalog = catalog();
        let mut formats: Vec<_> = FormatCode::ALL
            .into_iter()
            .map(|code| catalog.format_by_code(code.code()).unwrap())
            .collect();
        formats.sort_by_key(|f| f.count);

        for pair in formats.windows(2) {
            let (smaller, larger) = (&pair[0], &pair[1]);
            assert!(larger.soft_cutoff_kinds.starts_with(&smaller.soft_cutoff_kinds));
        }
    }

    #[test]
    fn test_rejects_missing_round_position() {
        let mut tables = CatalogTables::standard();
        tables
            .round_kinds
            .retain(|k| !matches!(k.code, RoundKindCode::Final | RoundKindCode::CombinedFinal));

        let err = RulesCatalog::from_tables(tables).unwrap_err();
        assert_eq!(err.error_code(), "CATALOG_CONSISTENCY_VIOLATION");
        assert!(err.to_string().contains("expected 4 supported round positions, found 3"));
    }

    #[test]
    fn test_rejects_extra_round_position() {
        let mut tables = CatalogTables::standard();
        for kind in &mut tables.round_kinds {
            if kind.code == RoundKindCode::BFinal {
                kind.supported_round_index = Some(4);
            }
        }

        let err = RulesCatalog::from_tables(tables).unwrap_err();
        assert_eq!(err.error_code(), "CATALOG_CONSISTENCY_VIOLATION");
    }

    #[test]
    fn test_rejects_half_filled_position() {
        let mut tables = CatalogTables::standard();
        tables.round_kinds.retain(|k| k.code != RoundKindCode::CombinedThird);

        let err = RulesCatalog::from_tables(tables).unwrap_err();
        assert!(err.to_string().contains("position 2"));
    }

    #[test]
    fn test_rejects_duplicate_codes() {
        let mut tables = CatalogTables::standard();
        tables.events.push(EventDefinition::new(EventCode::Cube3, "Rubik's Cube again"));

        let err = RulesCatalog::from_tables(tables).unwrap_err();
        assert!(err.to_string().contains("duplicate event code"));
    }

    #[test]
    fn test_rejects_event_without_formats() {
        let mut tables = CatalogTables::standard();
        tables.formats_by_event.retain(|(event, _)| *event != EventCode::Skewb);

        let err = RulesCatalog::from_tables(tables).unwrap_err();
        assert!(err.to_string().contains("\"skewb\" has no allowed formats"));
    }

    #[test]
    fn test_rejects_impossible_soft_cutoff() {
        let mut tables = CatalogTables::standard();
        for format in &mut tables.formats {
            if format.code == FormatCode::BestOf1 {
                format.soft_cutoff_kinds.push(SoftCutoffKind::In1);
            }
        }

        let err = RulesCatalog::from_tables(tables).unwrap_err();
        assert!(err.to_string().contains("Bo1"));
    }
}
