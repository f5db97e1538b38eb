//! A single-pass epidemic simulator over randomly generated contact networks
//!
//! Contagion models the spread of a disease through a population connected
//! by a random contact graph. A run proceeds in two stages:
//! * A graph generator builds a fresh contact network: one node per person
//!   and a small random number of contacts drawn for each of them.
//! * A day-stepped propagation model walks the network for a fixed number of
//!   discrete days. Each day, every infected person exposes each of their
//!   susceptible contacts once, newly infected people are recorded after the
//!   whole pass completes, and then every infected person gets an
//!   independent chance to recover.
//!
//! The model is deliberately headless: the final (graph, state) pair is
//! exposed read-only so a rendering layer can draw it, but nothing in this
//! crate depends on a display surface. All randomness flows through a
//! seedable generator supplied by the caller, so any run is reproducible
//! from its seed.

pub mod error;
pub mod graph;
pub mod log;
pub mod params;
pub mod people;
pub mod random;
pub mod report;
pub mod runner;
pub mod sim;

pub use error::ContagionError;
pub use graph::{ContactEdge, ContactGraph, PersonId};
pub use params::Params;
pub use people::{HealthState, HealthStatus, StateCounts};
pub use random::{rng_from_seed, SimRng};
pub use sim::{run_simulation, Simulation};

/// The hash map used for per-person state. The standard library map is
/// randomly seeded per process; a run must be reproducible from its seed, so
/// we use a deterministic hasher throughout.
pub type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;
