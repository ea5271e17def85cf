//! Round lookups keyed by regulation codes

use crate::{
    db::repositories::RoundRepository,
    error::RulesResult,
    models::{RoundKindCode, RoundRecord},
    services::rules_catalog::RulesCatalog,
};

/// Resolves raw event/round codes against the catalog before asking storage
pub struct RoundService;

impl RoundService {
    /// Find a round by competition, event code and round code.
    ///
    /// Unknown codes are an error; a well-formed key with nothing stored is
    /// `Ok(None)`.
    pub fn find_round<R: RoundRepository + ?Sized>(
        repo: &R,
        catalog: &RulesCatalog,
        competition_id: &str,
        event_code: &str,
        round_code: char,
    ) -> RulesResult<Option<RoundRecord>> {
        let event = catalog.event_by_code(event_code)?;
        let round_kind = catalog.round_kind_by_code(round_code)?;

        let round = repo.find_round(competition_id, event.code, round_kind.code);
        if round.is_none() {
            tracing::debug!(
                competition_id,
                event_code,
                %round_code,
                "Round not found"
            );
        }
        Ok(round)
    }

    /// All rounds of an event, ordered first round to final.
    ///
    /// Fails with `UnsupportedRoundKind` if storage holds a qualification
    /// round or a B Final.
    pub fn rounds_for_event<R: RoundRepository + ?Sized>(
        repo: &R,
        catalog: &RulesCatalog,
        competition_id: &str,
        event_code: &str,
    ) -> RulesResult<Vec<RoundRecord>> {
        let event = catalog.event_by_code(event_code)?;

        let mut indexed = repo
            .rounds_for_event(competition_id, event.code)
            .into_iter()
            .map(|round| -> RulesResult<_> {
                let index = catalog.supported_round_index(round.round_code.code())?;
                Ok((index, round))
            })
            .collect::<RulesResult<Vec<_>>>()?;
        indexed.sort_by_key(|(index, _)| *index);

        Ok(indexed.into_iter().map(|(_, round)| round).collect())
    }

    /// The round kind to use for position `index` of an event
    pub fn round_kind_for(
        catalog: &RulesCatalog,
        index: usize,
        combined: bool,
    ) -> Option<RoundKindCode> {
        catalog
            .round_kind_for_position(index, combined)
            .map(|kind| kind.code)
    }
}
