//! # tda-persistence
//!
//! Persistent homology of filtered clique complexes.
//!
//! Given a sequence of simplices ordered by a scalar filtration value,
//! this crate determines which topological features (connected
//! components, cycles, voids, ...) are born and die as the filtration
//! grows, and which persist forever.
//!
//! ## Pipeline
//!
//! 1. **Complex construction**: from a weighted graph (1-skeleton) or a
//!    point cloud via nearest-neighbour search, expanded into a flag
//!    (Vietoris-Rips) complex with monotone weights
//!
//! 2. **Boundary matrix**: the complex converted into a sparse
//!    column-oriented matrix over Z/2Z, optionally anti-transposed for
//!    the cohomology-based computation
//!
//! 3. **Reduction**: an injected strategy brings the matrix into
//!    reduced form, where every non-empty column has a unique maximal
//!    row index
//!
//! 4. **Pairing and diagrams**: creators and destroyers read off the
//!    reduced matrix become birth/death pairs; unpaired creators become
//!    essential classes with infinite persistence
//!
//! Alongside the pipeline, the crate enumerates maximal cliques with two
//! cross-validating algorithms and extracts clique communities as
//! connected components of clique graphs.
//!
//! ## References
//!
//! - Edelsbrunner, Letscher, Zomorodian (2002). "Topological
//!   Persistence and Simplification"
//! - Chen, Kerber (2011). "Persistent Homology Computation with a Twist"
//! - Zomorodian (2010). "Fast Construction of the Vietoris-Rips Complex"
//! - Palla, Derenyi, Farkas, Vicsek (2005). "Uncovering the overlapping
//!   community structure of complex networks"

pub mod error;
pub mod geometry;
pub mod persistence;
pub mod topology;

// Re-exports from topology
pub use topology::{
    calculate_connected_components,
    clique_graph,
    make_boundary_matrix,
    maximal_cliques_bron_kerbosch,
    maximal_cliques_koch,
    BoundaryMatrix,
    Representation,
    SetRepresentation,
    Simplex,
    SimplicialComplex,
    UnionFind,
    VectorRepresentation,
};

// Re-exports from geometry
pub use geometry::{
    assign_maximum_weight,
    build_neighbourhood_graph,
    BruteForce,
    NearestNeighbours,
    RipsExpander,
    RipsExpanderTopDown,
};

// Re-exports from persistence
pub use persistence::{
    calculate_persistence_diagram,
    calculate_persistence_pairing,
    dualize_pair_indices,
    Pair,
    PersistenceDiagram,
    PersistenceInterval,
    PersistencePairing,
    ReductionAlgorithm,
    StandardReduction,
    TwistReduction,
};

// Re-exports from error
pub use error::{Error, Result};
