//! Persistence diagrams: pairings mapped to filtration values
//!
//! A diagram point [birth, death) records the filtration values at which
//! a feature appears and disappears; essential features die at infinity.
//! The diagram is a faithful view of a pairing: zero-persistence points
//! are kept, callers filter them via [`PersistenceInterval::persistence`]
//! when they are noise for the task at hand.

use crate::error::Result;
use crate::topology::{make_boundary_matrix, SimplicialComplex, VectorRepresentation};

use super::pairing::{calculate_persistence_pairing, PersistencePairing};
use super::reduction::StandardReduction;

/// A persistence interval [birth, death) in a fixed dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersistenceInterval {
    pub birth: f64,
    pub death: f64,
    pub dimension: usize,
}

impl PersistenceInterval {
    pub fn new(birth: f64, death: f64, dimension: usize) -> Self {
        Self {
            birth,
            death,
            dimension,
        }
    }

    /// Lifetime of the feature.
    pub fn persistence(&self) -> f64 {
        self.death - self.birth
    }

    /// Is this an essential feature (infinite persistence)?
    pub fn is_essential(&self) -> bool {
        self.death.is_infinite()
    }
}

/// Persistence diagram: collection of intervals across dimensions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistenceDiagram {
    pub intervals: Vec<PersistenceInterval>,
}

impl PersistenceDiagram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a diagram from a pairing and the complex it was computed
    /// on: indices become the filtration values of their simplices, an
    /// absent destroyer becomes death at infinity.
    pub fn from_pairing(pairing: &PersistencePairing, complex: &SimplicialComplex) -> Self {
        let intervals = pairing
            .iter()
            .map(|pair| {
                let creator = complex.at(pair.creator);
                let death = match pair.destroyer {
                    Some(destroyer) => complex.at(destroyer).data(),
                    None => f64::INFINITY,
                };
                PersistenceInterval::new(creator.data(), death, creator.dimension())
            })
            .collect();

        Self { intervals }
    }

    /// All intervals of dimension d.
    pub fn dim(&self, d: usize) -> Vec<&PersistenceInterval> {
        self.intervals.iter().filter(|i| i.dimension == d).collect()
    }

    /// Finite intervals of dimension d.
    pub fn finite_intervals(&self, d: usize) -> Vec<&PersistenceInterval> {
        self.intervals
            .iter()
            .filter(|i| i.dimension == d && !i.is_essential())
            .collect()
    }

    /// Number of essential classes in dimension d.
    pub fn betti(&self, d: usize) -> usize {
        self.intervals
            .iter()
            .filter(|i| i.dimension == d && i.is_essential())
            .count()
    }

    /// Total persistence in dimension d.
    pub fn total_persistence(&self, d: usize) -> f64 {
        self.finite_intervals(d)
            .iter()
            .map(|i| i.persistence())
            .sum()
    }

    /// Maximum persistence in dimension d.
    pub fn max_persistence(&self, d: usize) -> f64 {
        self.finite_intervals(d)
            .iter()
            .map(|i| i.persistence())
            .fold(0.0, f64::max)
    }
}

/// End-to-end persistent homology of a complex in filtration order:
/// convert, optionally dualize, reduce, pair, and assemble the diagram.
///
/// Dualization computes the same pairing through the coboundary matrix
/// and is usually faster on clique complexes; the assembled diagram is
/// identical either way.
pub fn calculate_persistence_diagram(
    complex: &SimplicialComplex,
    dualize: bool,
    include_all_unpaired_creators: bool,
) -> Result<PersistenceDiagram> {
    let matrix = make_boundary_matrix::<VectorRepresentation>(complex, None)?;
    let matrix = if dualize { matrix.dualize() } else { matrix };

    let pairing = calculate_persistence_pairing(
        &StandardReduction,
        &matrix,
        include_all_unpaired_creators,
        None,
    );

    Ok(PersistenceDiagram::from_pairing(&pairing, complex))
}
