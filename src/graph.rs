//! Random contact network generation.
//!
//! A network is one node per person plus a multiset of contact edges. Each
//! edge is stored with the person who drew it as `source`, but the pair is
//! undirected in meaning: traversal resolves the far endpoint from either
//! side. There are no connectivity, symmetry or deduplication guarantees;
//! the network is whatever the draws produced.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound on the number of contact draws made per person. Each person
/// draws uniformly in `0..=MAX_CONTACT_DRAWS`; a draw that lands on the
/// person themselves is skipped without a retry, so the realized degree can
/// be lower.
pub const MAX_CONTACT_DRAWS: usize = 4;

/// A person in the population, identified by an index in
/// `0..population`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PersonId(pub(crate) usize);

impl PersonId {
    #[must_use]
    pub fn new(id: usize) -> Self {
        PersonId(id)
    }

    #[must_use]
    pub fn id(self) -> usize {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A contact between two distinct people. `source` is the person whose draw
/// produced the edge; exposure flows across the edge in both directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactEdge {
    pub source: PersonId,
    pub target: PersonId,
}

impl ContactEdge {
    /// Returns the endpoint opposite `person`, or `None` if the edge does
    /// not touch them.
    #[must_use]
    pub fn neighbor_of(&self, person: PersonId) -> Option<PersonId> {
        if self.source == person {
            Some(self.target)
        } else if self.target == person {
            Some(self.source)
        } else {
            None
        }
    }
}

/// A randomly generated contact network, immutable once generated.
#[derive(Clone, Debug, Default)]
pub struct ContactGraph {
    population: usize,
    edges: Vec<ContactEdge>,
    /// Per-person contact lists; each stored edge contributes its far
    /// endpoint to both endpoints' lists, duplicates preserved.
    adjacency: Vec<Vec<PersonId>>,
}

impl ContactGraph {
    /// Generates a fresh network for `population` people. Each person draws
    /// a uniform number of contacts in `0..=MAX_CONTACT_DRAWS`, each aimed
    /// at a uniformly random person; self-draws are skipped, not retried.
    ///
    /// A population of zero is a valid empty network. A population of one
    /// always yields zero edges, since the only possible target is the
    /// person themselves.
    pub fn generate<R: Rng>(population: usize, rng: &mut R) -> Self {
        let mut edges = Vec::new();
        for source in 0..population {
            let num_links = rng.random_range(0..=MAX_CONTACT_DRAWS);
            for _ in 0..num_links {
                let target = rng.random_range(0..population);
                if target == source {
                    continue;
                }
                edges.push(ContactEdge {
                    source: PersonId(source),
                    target: PersonId(target),
                });
            }
        }

        let mut adjacency = vec![Vec::new(); population];
        for edge in &edges {
            adjacency[edge.source.0].push(edge.target);
            adjacency[edge.target.0].push(edge.source);
        }

        ContactGraph {
            population,
            edges,
            adjacency,
        }
    }

    #[must_use]
    pub fn population(&self) -> usize {
        self.population
    }

    /// All people, in id order.
    pub fn people(&self) -> impl Iterator<Item = PersonId> {
        (0..self.population).map(PersonId)
    }

    #[must_use]
    pub fn edges(&self) -> &[ContactEdge] {
        &self.edges
    }

    /// The contacts of `person`, one entry per stored edge touching them.
    #[must_use]
    pub fn contacts_of(&self, person: PersonId) -> &[PersonId] {
        self.adjacency.get(person.0).map_or(&[], Vec::as_slice)
    }

    /// Number of stored edges touching `person`.
    #[must_use]
    pub fn degree_of(&self, person: PersonId) -> usize {
        self.contacts_of(person).len()
    }
}
