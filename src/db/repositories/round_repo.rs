//! Round repository

use crate::models::{EventCode, RoundKindCode, RoundRecord};

/// Read access to stored rounds.
///
/// The storage behind it is owned by the persistence layer; the rules core
/// only ever reads snapshots through this trait.
#[cfg_attr(test, mockall::automock)]
pub trait RoundRepository {
    /// Find one round of an event at a competition
    fn find_round(
        &self,
        competition_id: &str,
        event_code: EventCode,
        round_code: RoundKindCode,
    ) -> Option<RoundRecord>;

    /// All rounds of an event at a competition, in storage order
    fn rounds_for_event(&self, competition_id: &str, event_code: EventCode) -> Vec<RoundRecord>;
}

/// Repository backed by a plain vector, for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct InMemoryRoundRepository {
    rounds: Vec<RoundRecord>,
}

impl InMemoryRoundRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a round, replacing any stored round with the same key
    pub fn insert(&mut self, record: RoundRecord) {
        self.rounds.retain(|existing| {
            !(existing.competition_id == record.competition_id
                && existing.event_code == record.event_code
                && existing.round_code == record.round_code)
        });
        tracing::debug!(
            competition_id = %record.competition_id,
            event_code = %record.event_code,
            round_code = %record.round_code,
            "Storing round"
        );
        self.rounds.push(record);
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}

impl FromIterator<RoundRecord> for InMemoryRoundRepository {
    fn from_iter<I: IntoIterator<Item = RoundRecord>>(iter: I) -> Self {
        let mut repo = Self::new();
        for record in iter {
            repo.insert(record);
        }
        repo
    }
}

impl RoundRepository for InMemoryRoundRepository {
    fn find_round(
        &self,
        competition_id: &str,
        event_code: EventCode,
        round_code: RoundKindCode,
    ) -> Option<RoundRecord> {
        self.rounds
            .iter()
            .find(|round| {
                round.competition_id == competition_id
                    && round.event_code == event_code
                    && round.round_code == round_code
            })
            .cloned()
    }

    fn rounds_for_event(&self, competition_id: &str, event_code: EventCode) -> Vec<RoundRecord> {
        self.rounds
            .iter()
            .filter(|round| {
                round.competition_id == competition_id && round.event_code == event_code
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoundStatus;

    fn round(
        competition_id: &str,
        event_code: EventCode,
        round_code: RoundKindCode,
    ) -> RoundRecord {
        RoundRecord {
            competition_id: competition_id.to_string(),
            event_code,
            round_code,
            status: RoundStatus::Unstarted,
        }
    }

    #[test]
    fn test_find_round() {
        let repo: InMemoryRoundRepository = [
            round("Open2025", EventCode::Cube3, RoundKindCode::First),
            round("Open2025", EventCode::Cube3, RoundKindCode::Final),
            round("Open2025", EventCode::Cube2, RoundKindCode::CombinedFinal),
        ]
        .into_iter()
        .collect();

        let found = repo.find_round("Open2025", EventCode::Cube3, RoundKindCode::Final);
        assert_eq!(found.unwrap().round_code, RoundKindCode::Final);

        assert!(repo.find_round("Open2025", EventCode::Cube2, RoundKindCode::Final).is_none());
        assert!(repo.find_round("Other2025", EventCode::Cube3, RoundKindCode::First).is_none());
    }

    #[test]
    fn test_insert_replaces_same_key() {
        let mut repo = InMemoryRoundRepository::new();
        repo.insert(round("Open2025", EventCode::Skewb, RoundKindCode::CombinedFinal));

        let mut opened = round("Open2025", EventCode::Skewb, RoundKindCode::CombinedFinal);
        opened.status = RoundStatus::Open;
        repo.insert(opened);

        assert_eq!(repo.len(), 1);
        let stored = repo
            .find_round("Open2025", EventCode::Skewb, RoundKindCode::CombinedFinal)
            .unwrap();
        assert_eq!(stored.status, RoundStatus::Open);
    }

    #[test]
    fn test_rounds_for_event() {
        let repo: InMemoryRoundRepository = [
            round("Open2025", EventCode::Cube3, RoundKindCode::Final),
            round("Open2025", EventCode::Cube3, RoundKindCode::First),
            round("Open2025", EventCode::Pyraminx, RoundKindCode::Final),
        ]
        .into_iter()
        .collect();

        let rounds = repo.rounds_for_event("Open2025", EventCode::Cube3);
        assert_eq!(rounds.len(), 2);
        assert!(repo.rounds_for_event("Open2025", EventCode::Clock).is_empty());
    }
}
