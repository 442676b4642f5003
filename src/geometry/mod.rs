//! Geometry Module: From Point Clouds and Graphs to Filtered Complexes
//!
//! Bridges metric data and the combinatorial pipeline:
//! - nearest-neighbour queries behind a pluggable trait
//! - neighbourhood (Vietoris-Rips) graphs at a fixed scale
//! - flag expansion of weighted 1-skeletons, bottom-up and top-down,
//!   with maximum-weight reassignment for valid filtrations

mod nearest_neighbours;
mod rips_expander;
mod rips_expander_top_down;

pub use nearest_neighbours::{build_neighbourhood_graph, BruteForce, NearestNeighbours};
pub use rips_expander::{assign_maximum_weight, RipsExpander};
pub use rips_expander_top_down::RipsExpanderTopDown;
