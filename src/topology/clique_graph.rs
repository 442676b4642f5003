//! Clique graphs: adjacency of k-simplices along shared faces
//!
//! The k-clique graph of a complex K has one node per k-simplex of K and
//! an edge between two k-simplices whenever they share a (k-1)-face. Node
//! identifiers are the *indices* of the k-simplices within K, so that
//! components found on the clique graph can be mapped straight back to
//! simplices of the source complex.

use std::collections::HashMap;

use super::complex::SimplicialComplex;
use super::simplex::Simplex;

/// Build the k-clique graph of a complex.
///
/// Nodes carry the weight of their k-simplex; an edge carries the maximum
/// weight of the two simplices it connects, keeping the graph compatible
/// with the source filtration.
pub fn clique_graph(complex: &SimplicialComplex, k: usize) -> SimplicialComplex {
    let mut graph = SimplicialComplex::new();

    // (k-1)-face -> indices of the k-simplices containing it
    let mut cofaces: HashMap<Vec<usize>, Vec<usize>> = HashMap::new();

    for (index, simplex) in complex.simplices_of_dimension(k) {
        graph.push(Simplex::new(vec![index], simplex.data()));

        for face in simplex.boundary() {
            cofaces
                .entry(face.vertices().to_vec())
                .or_default()
                .push(index);
        }
    }

    for indices in cofaces.values() {
        for (a, &u) in indices.iter().enumerate() {
            for &v in &indices[a + 1..] {
                let weight = complex.at(u).data().max(complex.at(v).data());
                graph.push(Simplex::new(vec![u, v], weight));
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two triangles glued along the edge {0,1}, a third one apart.
    fn two_plus_one_triangles() -> SimplicialComplex {
        SimplicialComplex::from_simplices(vec![
            Simplex::new(vec![0], 0.0),
            Simplex::new(vec![1], 0.0),
            Simplex::new(vec![2], 0.0),
            Simplex::new(vec![3], 0.0),
            Simplex::new(vec![4], 0.0),
            Simplex::new(vec![5], 0.0),
            Simplex::new(vec![6], 0.0),
            Simplex::new(vec![0, 1], 1.0),
            Simplex::new(vec![0, 2], 1.0),
            Simplex::new(vec![1, 2], 1.0),
            Simplex::new(vec![0, 3], 2.0),
            Simplex::new(vec![1, 3], 2.0),
            Simplex::new(vec![4, 5], 1.0),
            Simplex::new(vec![4, 6], 1.0),
            Simplex::new(vec![5, 6], 1.0),
            Simplex::new(vec![0, 1, 2], 1.0),
            Simplex::new(vec![0, 1, 3], 2.0),
            Simplex::new(vec![4, 5, 6], 1.0),
        ])
    }

    #[test]
    fn test_two_clique_graph() {
        let k = two_plus_one_triangles();
        let graph = clique_graph(&k, 2);

        // Three nodes (the three triangles), one edge (shared edge {0,1})
        let nodes: Vec<_> = graph.simplices_of_dimension(0).collect();
        let edges: Vec<_> = graph.simplices_of_dimension(1).collect();
        assert_eq!(nodes.len(), 3);
        assert_eq!(edges.len(), 1);

        let (_, edge) = edges[0];
        let i = k.index_of(&[0, 1, 2]).unwrap();
        let j = k.index_of(&[0, 1, 3]).unwrap();
        assert_eq!(edge.vertices(), &[i, j]);
        // Edge weight is the maximum of the two simplex weights
        assert_eq!(edge.data(), 2.0);
    }

    #[test]
    fn test_one_clique_graph_connects_edges_at_shared_vertices() {
        let k = two_plus_one_triangles();
        let graph = clique_graph(&k, 1);

        // Eight edges in K; the {0,1,2,3} block is connected through
        // shared vertices, the {4,5,6} triangle forms its own block.
        assert_eq!(graph.simplices_of_dimension(0).count(), 8);
        assert!(graph.simplices_of_dimension(1).count() > 0);
    }
}
