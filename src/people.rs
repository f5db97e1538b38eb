//! Per-person health state.
//!
//! State is stored sparsely: a person with no entry is susceptible. The map
//! is rebuilt at the start of every run and is the only mutable piece of a
//! run. Transitions only move forward (susceptible to infected to
//! recovered); the mutators enforce this, so a recovered person can never
//! be re-infected.

use crate::graph::PersonId;
use crate::HashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The health of one person. Serialized lowercase, matching the CSS class
/// names a rendering layer colors nodes with.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Susceptible,
    Infected,
    Recovered,
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            HealthStatus::Susceptible => "susceptible",
            HealthStatus::Infected => "infected",
            HealthStatus::Recovered => "recovered",
        };
        write!(f, "{name}")
    }
}

/// Totals per status for a population of known size, counting people absent
/// from the state map as susceptible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StateCounts {
    pub susceptible: usize,
    pub infected: usize,
    pub recovered: usize,
}

/// Sparse map from person to status. Absence means susceptible; entries are
/// only ever added or moved forward, never removed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HealthState {
    statuses: HashMap<PersonId, HealthStatus>,
}

impl HealthState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The status of `person`; people without an entry are susceptible.
    #[must_use]
    pub fn status_of(&self, person: PersonId) -> HealthStatus {
        self.statuses
            .get(&person)
            .copied()
            .unwrap_or(HealthStatus::Susceptible)
    }

    /// Marks a susceptible person infected. Returns whether the status
    /// changed; infected and recovered people are left as they are.
    pub fn infect(&mut self, person: PersonId) -> bool {
        match self.status_of(person) {
            HealthStatus::Susceptible => {
                self.statuses.insert(person, HealthStatus::Infected);
                true
            }
            HealthStatus::Infected | HealthStatus::Recovered => false,
        }
    }

    /// Moves an infected person to recovered. Returns whether the status
    /// changed; susceptible and recovered people are left as they are.
    pub fn recover(&mut self, person: PersonId) -> bool {
        match self.status_of(person) {
            HealthStatus::Infected => {
                self.statuses.insert(person, HealthStatus::Recovered);
                true
            }
            HealthStatus::Susceptible | HealthStatus::Recovered => false,
        }
    }

    /// Number of people with an explicit (non-susceptible) entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.len() == 0
    }

    /// Totals per status for a population of `population` people.
    #[must_use]
    pub fn counts(&self, population: usize) -> StateCounts {
        let mut infected = 0;
        let mut recovered = 0;
        for status in self.statuses.values() {
            match status {
                HealthStatus::Infected => infected += 1,
                HealthStatus::Recovered => recovered += 1,
                HealthStatus::Susceptible => {}
            }
        }
        StateCounts {
            susceptible: population.saturating_sub(infected + recovered),
            infected,
            recovered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_person_is_susceptible() {
        let state = HealthState::new();
        assert!(state.is_empty());
        assert_eq!(
            state.status_of(PersonId::new(17)),
            HealthStatus::Susceptible
        );
    }

    #[test]
    fn infect_moves_susceptible_forward() {
        let mut state = HealthState::new();
        assert!(state.infect(PersonId::new(0)));
        assert_eq!(state.status_of(PersonId::new(0)), HealthStatus::Infected);
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn infect_is_idempotent() {
        let mut state = HealthState::new();
        assert!(state.infect(PersonId::new(0)));
        assert!(!state.infect(PersonId::new(0)));
        assert_eq!(state.status_of(PersonId::new(0)), HealthStatus::Infected);
    }

    #[test]
    fn recover_requires_infection_first() {
        let mut state = HealthState::new();
        assert!(!state.recover(PersonId::new(0)));
        assert_eq!(state.status_of(PersonId::new(0)), HealthStatus::Susceptible);

        state.infect(PersonId::new(0));
        assert!(state.recover(PersonId::new(0)));
        assert_eq!(state.status_of(PersonId::new(0)), HealthStatus::Recovered);
    }

    #[test]
    fn recovered_person_cannot_be_reinfected() {
        let mut state = HealthState::new();
        state.infect(PersonId::new(0));
        state.recover(PersonId::new(0));
        assert!(!state.infect(PersonId::new(0)));
        assert!(!state.recover(PersonId::new(0)));
        assert_eq!(state.status_of(PersonId::new(0)), HealthStatus::Recovered);
    }

    #[test]
    fn counts_include_implicitly_susceptible_people() {
        let mut state = HealthState::new();
        state.infect(PersonId::new(0));
        state.infect(PersonId::new(1));
        state.recover(PersonId::new(1));
        assert_eq!(
            state.counts(10),
            StateCounts {
                susceptible: 8,
                infected: 1,
                recovered: 1,
            }
        );
    }

    #[test]
    fn statuses_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&HealthStatus::Susceptible).unwrap(),
            "\"susceptible\""
        );
        assert_eq!(
            serde_json::to_string(&HealthStatus::Infected).unwrap(),
            "\"infected\""
        );
        assert_eq!(
            serde_json::to_string(&HealthStatus::Recovered).unwrap(),
            "\"recovered\""
        );
    }
}
