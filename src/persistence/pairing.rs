//! Persistence pairings: reading creators and destroyers off a reduced
//! boundary matrix
//!
//! A persistence pairing is a set of index pairs (creator, destroyer)
//! plus the indices of essential creators, features that never die. The
//! extraction walks the reduced matrix once: a non-empty column destroys
//! the feature created at its low, an empty column is a candidate
//! creator.
//!
//! ## Dualization
//!
//! When the matrix is the anti-transpose of a boundary matrix, row and
//! column indices refer to reversed positions; [`dualize_pair_indices`]
//! maps a (low, column) pair back into original simplex indices. Keeping
//! that arithmetic in one pure function keeps the extraction loop and
//! the essential-creator emission from drifting apart.
//!
//! ## Creator filtering
//!
//! Columns of the top dimension can never be reduced by anything above
//! them, so each unpaired one would show up as a spurious essential
//! class. They are suppressed unless the caller asks for them, which is
//! what ordinary (non-persistent) Betti number calculations need. In a
//! dualized matrix those same simplices sit in the columns whose
//! *reported* dimension is 0, hence the asymmetric pair of conditions
//! below.

use std::collections::HashSet;

use crate::topology::{BoundaryMatrix, Representation};

use super::reduction::ReductionAlgorithm;

/// An index pair: a creator together with its destroyer, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    pub creator: usize,
    pub destroyer: Option<usize>,
}

impl Pair {
    pub fn is_essential(&self) -> bool {
        self.destroyer.is_none()
    }
}

/// A sorted collection of persistence pairs and essential creators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistencePairing {
    pairs: Vec<Pair>,
}

impl PersistencePairing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finite pair. Finite pairs always satisfy
    /// `creator < destroyer`.
    pub fn add_pair(&mut self, creator: usize, destroyer: usize) {
        debug_assert!(creator < destroyer);
        self.pairs.push(Pair {
            creator,
            destroyer: Some(destroyer),
        });
    }

    /// Record an essential creator. Duplicates are ignored.
    pub fn add_unpaired(&mut self, creator: usize) {
        let duplicate = self
            .pairs
            .iter()
            .any(|pair| pair.is_essential() && pair.creator == creator);
        if !duplicate {
            self.pairs.push(Pair {
                creator,
                destroyer: None,
            });
        }
    }

    /// Sort by (creator, destroyer), essential entries after a finite
    /// pair with the same creator.
    pub fn sort(&mut self) {
        self.pairs
            .sort_by_key(|pair| (pair.creator, pair.destroyer.unwrap_or(usize::MAX)));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pair> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn contains_pair(&self, creator: usize, destroyer: usize) -> bool {
        self.pairs.contains(&Pair {
            creator,
            destroyer: Some(destroyer),
        })
    }

    pub fn contains_unpaired(&self, creator: usize) -> bool {
        self.pairs.contains(&Pair {
            creator,
            destroyer: None,
        })
    }
}

impl<'a> IntoIterator for &'a PersistencePairing {
    type Item = &'a Pair;
    type IntoIter = std::slice::Iter<'a, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Map a (low, column) pair of a dualized matrix back to original
/// simplex indices: `(i, j)` becomes `(n-1-j, n-1-i)`. The column itself
/// is the creator and its low the destroyer after reversal, which is why
/// the roles swap as well as the indices.
pub fn dualize_pair_indices(num_columns: usize, i: usize, j: usize) -> (usize, usize) {
    (num_columns - 1 - j, num_columns - 1 - i)
}

/// Reduce a copy of `matrix` with the given strategy and read off its
/// persistence pairing.
///
/// `include_all_unpaired_creators` keeps the unpaired creators of the
/// top dimension that are otherwise suppressed (see module docs). `max`,
/// if given, truncates the considered index range: indices at or above
/// it take no part in the pairing, which is what persistent intersection
/// homology requires. An out-of-range `max` is clamped.
pub fn calculate_persistence_pairing<A, R>(
    algorithm: &A,
    matrix: &BoundaryMatrix<R>,
    include_all_unpaired_creators: bool,
    max: Option<usize>,
) -> PersistencePairing
where
    A: ReductionAlgorithm,
    R: Representation,
{
    let mut reduced = matrix.clone();
    algorithm.reduce(&mut reduced);

    let num_columns = match max {
        Some(max) => max.min(reduced.num_columns()),
        None => reduced.num_columns(),
    };

    let mut pairing = PersistencePairing::new();
    let mut creators: HashSet<usize> = HashSet::new();

    for j in 0..num_columns {
        if let Some(i) = reduced.maximum_index(j) {
            // Column j destroys the feature created at its low, so i is
            // no longer a creator.
            creators.remove(&i);

            let (u, v) = if reduced.is_dualized() {
                dualize_pair_indices(num_columns, i, j)
            } else {
                (i, j)
            };

            if max.map_or(true, |max| i < max) {
                pairing.add_pair(u, v);
            }
        } else {
            // An empty column signifies a potential feature of infinite
            // persistence; apply the creator filter.
            let relevant = if reduced.is_dualized() {
                reduced.column_dimension(j) != 0
            } else {
                reduced.column_dimension(j) != reduced.dimension()
            };

            if relevant || include_all_unpaired_creators {
                creators.insert(j);
            }
        }
    }

    for creator in creators {
        if reduced.is_dualized() {
            pairing.add_unpaired(num_columns - 1 - creator);
        } else {
            pairing.add_unpaired(creator);
        }
    }

    pairing.sort();
    pairing
}
