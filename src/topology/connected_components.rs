//! Connected components of a complex's 1-skeleton via Union-Find
//!
//! Seeds a [`UnionFind`] forest from the 0-simplices of a complex and
//! merges along its 1-simplices. For clique graphs, whose vertex
//! identifiers are indices into a source complex, the resulting roots and
//! members map components straight back to the source simplices.

use crate::error::Result;

use super::complex::SimplicialComplex;
use super::union_find::UnionFind;

/// Compute the connected components of a complex's 1-skeleton.
///
/// Every vertex of the complex must appear as a 0-simplex; an edge over a
/// vertex that does not is a contract violation reported as
/// [`crate::Error::UnknownElement`].
pub fn calculate_connected_components(complex: &SimplicialComplex) -> Result<UnionFind> {
    let mut forest = UnionFind::new(
        complex
            .simplices_of_dimension(0)
            .map(|(_, simplex)| simplex.vertices()[0]),
    );

    for (_, edge) in complex.simplices_of_dimension(1) {
        forest.union(edge.vertices()[0], edge.vertices()[1])?;
    }

    Ok(forest)
}
