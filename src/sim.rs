//! The day-stepped propagation model.
//!
//! A run owns a freshly generated contact graph and the per-person health
//! state; nothing lives in ambient globals. Each day runs three phases in
//! strict order:
//!
//! 1. an infection pass that reads the state as it stood at the start of
//!    the day and collects pending infections,
//! 2. applying the pending infections all at once, so a person infected
//!    today never transmits today,
//! 3. a recovery pass over the post-infection state, so a person infected
//!    today can still recover today.

use log::{debug, info, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::ContagionError;
use crate::graph::{ContactGraph, PersonId};
use crate::params::Params;
use crate::people::{HealthState, HealthStatus, StateCounts};
use crate::random::sample_bool;

/// A reproduction factor of 10 corresponds to certain per-contact
/// transmission; the per-day, per-contact probability is `r0 / R0_SCALE`.
const R0_SCALE: f64 = 10.0;

/// One simulation run: the generated network plus the evolving state.
#[derive(Clone, Debug)]
pub struct Simulation {
    params: Params,
    graph: ContactGraph,
    state: HealthState,
}

impl Simulation {
    /// Builds a fresh run: validates `params`, generates the contact graph
    /// and seeds the initial infections by shuffling the whole population
    /// and infecting the prefix. An initial infection count larger than the
    /// population is clamped to the population.
    ///
    /// # Errors
    ///
    /// Returns [`ContagionError::InvalidArgument`] if `params` fail
    /// validation.
    pub fn new<R: Rng>(params: &Params, rng: &mut R) -> Result<Self, ContagionError> {
        params.validate()?;
        if params.isolation_rate != 0.0
            || params.vaccination_rate != 0.0
            || params.vaccine_efficacy != 0.0
        {
            warn!("isolation and vaccination inputs are accepted but have no effect on this model");
        }

        let population = params.population as usize;
        let graph = ContactGraph::generate(population, rng);
        debug!(
            "generated contact network: {} people, {} edges",
            population,
            graph.edges().len()
        );

        let mut state = HealthState::new();
        let mut people: Vec<PersonId> = graph.people().collect();
        people.shuffle(rng);
        let initial = (params.initial_infections as usize).min(population);
        for &person in &people[..initial] {
            state.infect(person);
        }
        info!("seeded {initial} of {population} people infected");

        Ok(Simulation {
            params: params.clone(),
            graph,
            state,
        })
    }

    /// Advances the run by one day.
    pub fn step_day<R: Rng>(&mut self, rng: &mut R) {
        let transmission_probability = self.params.r0 / R0_SCALE;

        // Infection pass: read-only over the day-start state. Writes are
        // deferred so nobody infected today transmits today. A contact can
        // be collected more than once; re-infecting is a no-op.
        let mut newly_infected: Vec<PersonId> = Vec::new();
        for person in self.graph.people() {
            if self.state.status_of(person) != HealthStatus::Infected {
                continue;
            }
            for &contact in self.graph.contacts_of(person) {
                if self.state.status_of(contact) == HealthStatus::Susceptible
                    && sample_bool(rng, transmission_probability)
                {
                    newly_infected.push(contact);
                }
            }
        }
        for person in newly_infected {
            self.state.infect(person);
        }

        // Recovery pass over the post-infection state: someone infected
        // today can recover the same day.
        for person in self.graph.people() {
            if self.state.status_of(person) == HealthStatus::Infected
                && sample_bool(rng, self.params.recovery_rate)
            {
                self.state.recover(person);
            }
        }
    }

    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The contact network, read-only; generated once per run.
    #[must_use]
    pub fn graph(&self) -> &ContactGraph {
        &self.graph
    }

    /// The current health state, read-only. People absent from the map are
    /// susceptible.
    #[must_use]
    pub fn state(&self) -> &HealthState {
        &self.state
    }

    #[must_use]
    pub fn counts(&self) -> StateCounts {
        self.state.counts(self.graph.population())
    }
}

/// One-shot entry point: builds a run from `params` and steps it
/// `params.days` times. The finished run exposes the final (graph, state)
/// pair for reporting or rendering.
///
/// # Errors
///
/// Returns [`ContagionError::InvalidArgument`] if `params` fail validation.
pub fn run_simulation<R: Rng>(params: &Params, rng: &mut R) -> Result<Simulation, ContagionError> {
    let mut sim = Simulation::new(params, rng)?;
    for day in 0..params.days {
        sim.step_day(rng);
        debug!("day {}: {:?}", day + 1, sim.counts());
    }
    Ok(sim)
}
