//! Conversion of simplicial complexes into boundary matrices
//!
//! Each simplex becomes one column holding the indices of its boundary
//! faces. Face resolution goes through the complex's hash index map, so a
//! conversion costs O(1) per face rather than a logarithmic scan. A face
//! that cannot be resolved means the complex is not closed under the
//! boundary relation, which is a fatal input error.

use crate::error::{Error, Result};

use super::boundary_matrix::{BoundaryMatrix, Representation};
use super::complex::SimplicialComplex;

/// Convert a simplicial complex into its boundary matrix.
///
/// If `max` is given, only the first `max` simplices are converted and the
/// matrix has `min(|K|, max)` columns; such truncated matrices are the
/// input for persistent intersection homology. Without `max` the matrix
/// covers the whole complex and is suitable for persistent homology.
///
/// The complex must be in filtration order (faces before cofaces); the
/// boundary matrix invariant that row indices precede their column follows
/// from that order.
pub fn make_boundary_matrix<R: Representation>(
    complex: &SimplicialComplex,
    max: Option<usize>,
) -> Result<BoundaryMatrix<R>> {
    let num_columns = match max {
        Some(max) => max.min(complex.len()),
        None => complex.len(),
    };

    let mut matrix = BoundaryMatrix::new(num_columns);

    for (j, simplex) in complex.iter().take(num_columns).enumerate() {
        let mut column = Vec::with_capacity(simplex.vertices().len());

        for face in simplex.boundary() {
            let index = complex
                .index_of(face.vertices())
                .ok_or_else(|| Error::MissingFace(face.vertices().to_vec()))?;
            column.push(index);
        }

        column.sort_unstable();
        matrix.set_column(j, column, simplex.dimension());
    }

    Ok(matrix)
}
