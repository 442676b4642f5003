//! Flag (Vietoris-Rips) expansion of a weighted 1-skeleton
//!
//! The flag complex of a graph contains a simplex for every set of
//! mutually adjacent vertices. [`RipsExpander`] builds it bottom-up:
//! starting from each vertex, cliques grow by intersecting
//! lower-neighbour lists, so every clique is generated exactly once, from
//! its largest vertex.
//!
//! Expansion itself is purely combinatorial; [`assign_maximum_weight`]
//! afterwards lifts the edge weights of the source 1-skeleton onto the
//! higher simplices, giving every simplex the maximum weight among its
//! faces. The resulting weights are monotone: no simplex is ever lighter
//! than a face of it, which is exactly what a valid filtration requires.

use std::collections::{BTreeSet, HashMap};

use crate::topology::{Simplex, SimplicialComplex};

/// Bottom-up flag-complex expansion.
#[derive(Debug, Clone, Default)]
pub struct RipsExpander;

impl RipsExpander {
    pub fn new() -> Self {
        Self
    }

    /// Expand the 1-skeleton of `complex` into its flag complex, keeping
    /// simplices up to `max_dimension`. The output is unweighted; use
    /// [`RipsExpander::assign_maximum_weight`] afterwards.
    pub fn expand(&self, complex: &SimplicialComplex, max_dimension: usize) -> SimplicialComplex {
        // Lower neighbours: vertices adjacent to u that precede u
        let mut lower: HashMap<usize, BTreeSet<usize>> = HashMap::new();
        let mut vertices: Vec<usize> = Vec::new();

        for simplex in complex {
            match simplex.dimension() {
                0 => {
                    let v = simplex.vertices()[0];
                    vertices.push(v);
                    lower.entry(v).or_default();
                }
                1 => {
                    let (u, v) = (simplex.vertices()[0], simplex.vertices()[1]);
                    lower.entry(v).or_default().insert(u);
                    lower.entry(u).or_default();
                }
                _ => {}
            }
        }

        vertices.sort_unstable();

        let mut expanded = SimplicialComplex::new();
        for &v in &vertices {
            let neighbours = lower[&v].clone();
            add_cofaces(&mut vec![v], &neighbours, &lower, max_dimension, &mut expanded);
        }

        expanded
    }

    /// See [`assign_maximum_weight`].
    pub fn assign_maximum_weight(
        &self,
        expanded: &SimplicialComplex,
        original: &SimplicialComplex,
    ) -> SimplicialComplex {
        assign_maximum_weight(expanded, original)
    }
}

/// Emit `clique` and grow it by every common lower neighbour. Vertices
/// join in decreasing order, so each clique is produced exactly once.
fn add_cofaces(
    clique: &mut Vec<usize>,
    candidates: &BTreeSet<usize>,
    lower: &HashMap<usize, BTreeSet<usize>>,
    max_dimension: usize,
    expanded: &mut SimplicialComplex,
) {
    expanded.push(Simplex::new(clique.clone(), 0.0));

    if clique.len() > max_dimension {
        return;
    }

    for &v in candidates {
        let common: BTreeSet<usize> = candidates.intersection(&lower[&v]).copied().collect();
        clique.push(v);
        add_cofaces(clique, &common, lower, max_dimension, expanded);
        clique.pop();
    }
}

/// Reassign filtration weights after expansion: vertices and edges take
/// the weight recorded for them in `original`, and every higher simplex
/// takes the maximum weight among its codimension-1 faces, computed in
/// increasing dimension order. By induction this equals the maximum
/// weight among the simplex's edges.
pub fn assign_maximum_weight(
    expanded: &SimplicialComplex,
    original: &SimplicialComplex,
) -> SimplicialComplex {
    let mut weights: HashMap<Vec<usize>, f64> = HashMap::new();

    for dimension in 0..=expanded.dimension() {
        for (_, simplex) in expanded.simplices_of_dimension(dimension) {
            let weight = if dimension <= 1 {
                original
                    .index_of(simplex.vertices())
                    .map(|index| original.at(index).data())
                    .unwrap_or_else(|| simplex.data())
            } else {
                simplex
                    .boundary()
                    .filter_map(|face| weights.get(face.vertices()).copied())
                    .fold(f64::NEG_INFINITY, f64::max)
            };

            weights.insert(simplex.vertices().to_vec(), weight);
        }
    }

    expanded
        .iter()
        .map(|simplex| {
            let weight = weights
                .get(simplex.vertices())
                .copied()
                .unwrap_or_else(|| simplex.data());
            simplex.with_data(weight)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Weighted 4-cycle with one diagonal:
    ///
    /// 3---2
    /// |  /|
    /// | / |
    /// |/  |
    /// 0---1
    fn skeleton() -> SimplicialComplex {
        SimplicialComplex::from_simplices(vec![
            Simplex::new(vec![0], 0.0),
            Simplex::new(vec![1], 0.0),
            Simplex::new(vec![2], 0.0),
            Simplex::new(vec![3], 0.0),
            Simplex::new(vec![0, 1], 1.0),
            Simplex::new(vec![1, 2], 2.0),
            Simplex::new(vec![2, 3], 3.0),
            Simplex::new(vec![0, 3], 4.0),
            Simplex::new(vec![0, 2], 5.0),
        ])
    }

    #[test]
    fn test_expansion_finds_both_triangles() {
        let k = skeleton();
        let expanded = RipsExpander::new().expand(&k, 2);

        // 4 vertices + 5 edges + 2 triangles ({0,1,2} and {0,2,3})
        assert_eq!(expanded.len(), 11);
        assert!(expanded.contains(&[0, 1, 2]));
        assert!(expanded.contains(&[0, 2, 3]));
        assert!(!expanded.contains(&[0, 1, 3]));
    }

    #[test]
    fn test_expansion_respects_max_dimension() {
        let k = skeleton();
        let expanded = RipsExpander::new().expand(&k, 1);
        assert_eq!(expanded.dimension(), 1);
        assert_eq!(expanded.len(), 9);
    }

    #[test]
    fn test_maximum_weight_assignment() {
        let k = skeleton();
        let expander = RipsExpander::new();
        let expanded = expander.assign_maximum_weight(&expander.expand(&k, 2), &k);

        let triangle = expanded.at(expanded.index_of(&[0, 1, 2]).unwrap());
        assert_eq!(triangle.data(), 5.0);
        let other = expanded.at(expanded.index_of(&[0, 2, 3]).unwrap());
        assert_eq!(other.data(), 5.0);

        // Edges keep their original weights
        let edge = expanded.at(expanded.index_of(&[2, 3]).unwrap());
        assert_eq!(edge.data(), 3.0);
    }

    #[test]
    fn test_weights_are_monotone() {
        let k = skeleton();
        let expander = RipsExpander::new();
        let expanded = expander.assign_maximum_weight(&expander.expand(&k, 3), &k);

        for simplex in &expanded {
            for face in simplex.boundary() {
                let face_weight = expanded
                    .at(expanded.index_of(face.vertices()).unwrap())
                    .data();
                assert!(simplex.data() >= face_weight);
            }
        }
    }
}
