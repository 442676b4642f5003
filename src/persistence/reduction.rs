//! Boundary-matrix reduction strategies
//!
//! Reduction brings a boundary matrix into a form where every non-empty
//! column has a distinct "low" (maximal row index). The pairing read off
//! afterwards does not depend on which strategy produced that form, so
//! the algorithm is injected by the caller; only the post-condition is
//! part of the contract.
//!
//! ## Strategies
//!
//! - [`StandardReduction`]: columns left to right, conflicts resolved via
//!   a low-to-column hash lookup.
//! - [`TwistReduction`]: dimensions in decreasing order; once a column is
//!   paired, the column at its low is cleared instead of being reduced
//!   later, skipping work whose outcome is already known.
//!
//! ## Reference
//!
//! Edelsbrunner, Letscher, Zomorodian (2002). "Topological Persistence
//! and Simplification"; Chen, Kerber (2011). "Persistent Homology
//! Computation with a Twist".

use std::collections::HashMap;

use crate::topology::{BoundaryMatrix, Representation};

/// An in-place column-reduction strategy.
///
/// Post-condition: for any two distinct non-empty columns of the reduced
/// matrix, the maximal row indices differ.
pub trait ReductionAlgorithm {
    fn reduce<R: Representation>(&self, matrix: &mut BoundaryMatrix<R>);
}

/// Left-to-right column reduction.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardReduction;

impl ReductionAlgorithm for StandardReduction {
    fn reduce<R: Representation>(&self, matrix: &mut BoundaryMatrix<R>) {
        let mut low_to_column: HashMap<usize, usize> = HashMap::new();

        for column in 0..matrix.num_columns() {
            reduce_column(matrix, column, &low_to_column);

            if let Some(low) = matrix.maximum_index(column) {
                low_to_column.insert(low, column);
            }
        }
    }
}

/// Reduction with clearing, processing dimensions in decreasing order.
///
/// When a column of dimension d is paired, the column sitting at its low
/// (dimension d-1) is known to reduce to zero; clearing it up front makes
/// the d-1 pass cheaper. Works on dualized matrices as well, since their
/// reported column dimensions follow the same column-contains-lower-
/// dimension pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwistReduction;

impl ReductionAlgorithm for TwistReduction {
    fn reduce<R: Representation>(&self, matrix: &mut BoundaryMatrix<R>) {
        let mut low_to_column: HashMap<usize, usize> = HashMap::new();

        for dimension in (1..=matrix.dimension()).rev() {
            for column in 0..matrix.num_columns() {
                if matrix.column_dimension(column) != dimension {
                    continue;
                }

                reduce_column(matrix, column, &low_to_column);

                if let Some(low) = matrix.maximum_index(column) {
                    low_to_column.insert(low, column);
                    matrix.clear_column(low);
                }
            }
        }
    }
}

/// Add earlier columns into `column` until its low is unique or the
/// column is empty.
fn reduce_column<R: Representation>(
    matrix: &mut BoundaryMatrix<R>,
    column: usize,
    low_to_column: &HashMap<usize, usize>,
) {
    while let Some(low) = matrix.maximum_index(column) {
        match low_to_column.get(&low) {
            Some(&earlier) => matrix.add_columns(earlier, column),
            None => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{SetRepresentation, VectorRepresentation};

    /// Boundary matrix of a filled triangle in filtration order.
    fn filled_triangle<R: Representation>() -> BoundaryMatrix<R> {
        let mut m = BoundaryMatrix::new(7);
        m.set_column(0, vec![], 0);
        m.set_column(1, vec![], 0);
        m.set_column(2, vec![], 0);
        m.set_column(3, vec![0, 1], 1);
        m.set_column(4, vec![0, 2], 1);
        m.set_column(5, vec![1, 2], 1);
        m.set_column(6, vec![3, 4, 5], 2);
        m
    }

    fn lows<R: Representation>(matrix: &BoundaryMatrix<R>) -> Vec<Option<usize>> {
        (0..matrix.num_columns())
            .map(|j| matrix.maximum_index(j))
            .collect()
    }

    fn assert_lows_unique<R: Representation>(matrix: &BoundaryMatrix<R>) {
        let mut seen = std::collections::HashSet::new();
        for j in 0..matrix.num_columns() {
            if let Some(low) = matrix.maximum_index(j) {
                assert!(seen.insert(low), "duplicate low {} at column {}", low, j);
            }
        }
    }

    #[test]
    fn test_standard_reduction_post_condition() {
        let mut m: BoundaryMatrix = filled_triangle();
        StandardReduction.reduce(&mut m);

        assert_lows_unique(&m);
        // The third edge closes a cycle, so its column vanishes
        assert!(m.is_empty_column(5));
        assert_eq!(m.maximum_index(6), Some(5));
    }

    #[test]
    fn test_twist_reduction_matches_standard() {
        let mut standard: BoundaryMatrix = filled_triangle();
        StandardReduction.reduce(&mut standard);

        let mut twist: BoundaryMatrix = filled_triangle();
        TwistReduction.reduce(&mut twist);

        assert_lows_unique(&twist);
        assert_eq!(lows(&standard), lows(&twist));
    }

    #[test]
    fn test_reduction_on_set_representation() {
        let mut vector: BoundaryMatrix<VectorRepresentation> = filled_triangle();
        let mut set: BoundaryMatrix<SetRepresentation> = filled_triangle();

        StandardReduction.reduce(&mut vector);
        StandardReduction.reduce(&mut set);

        assert_eq!(lows(&vector), lows(&set));
    }

    #[test]
    fn test_reduction_on_dualized_matrix() {
        let mut m: BoundaryMatrix = filled_triangle().dualize();
        StandardReduction.reduce(&mut m);
        assert_lows_unique(&m);

        let mut t: BoundaryMatrix = filled_triangle().dualize();
        TwistReduction.reduce(&mut t);
        assert_lows_unique(&t);
        assert_eq!(lows(&m), lows(&t));
    }
}
