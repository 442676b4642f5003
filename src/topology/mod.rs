//! Topology Module: Simplicial Complexes and Their Matrix Representations
//!
//! Implements the combinatorial side of the pipeline:
//! - simplices and filtered simplicial complexes
//! - sparse boundary matrices with pluggable column representations
//! - conversion of a complex into its boundary matrix
//! - maximal-clique enumeration (two cross-validating algorithms)
//! - clique graphs over k-simplices and their connected components
//!
//! ## Coordinate system
//!
//! The index of a simplex is its position within its complex; boundary
//! matrices, persistence pairings and clique graphs all speak in these
//! indices. Keeping a complex in filtration order (faces before cofaces)
//! makes every boundary-matrix column point strictly below its diagonal.

mod boundary_matrix;
mod clique_graph;
mod complex;
mod connected_components;
mod conversions;
mod maximal_cliques;
mod simplex;
mod union_find;

pub use boundary_matrix::{
    BoundaryMatrix, Representation, SetRepresentation, VectorRepresentation,
};
pub use clique_graph::clique_graph;
pub use complex::SimplicialComplex;
pub use connected_components::calculate_connected_components;
pub use conversions::make_boundary_matrix;
pub use maximal_cliques::{maximal_cliques_bron_kerbosch, maximal_cliques_koch};
pub use simplex::Simplex;
pub use union_find::UnionFind;
