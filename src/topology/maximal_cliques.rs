//! Maximal-clique enumeration on the 1-skeleton of a complex
//!
//! Two independent algorithms are provided:
//!
//! - [`maximal_cliques_bron_kerbosch`]: Bron-Kerbosch backtracking with
//!   pivot selection;
//! - [`maximal_cliques_koch`]: enumeration along a degeneracy ordering
//!   with a pivot-free backtracking core.
//!
//! Enumerating maximal cliques has no simpler ground truth, so the two
//! algorithms deliberately share no search logic; agreement between them
//! is the primary correctness check for this module.

use std::collections::{BTreeSet, HashMap};

use super::complex::SimplicialComplex;

type Adjacency = HashMap<usize, BTreeSet<usize>>;

/// Adjacency lists of the 1-skeleton. Isolated vertices (0-simplices
/// without incident edges) get empty neighbourhoods.
fn adjacency(complex: &SimplicialComplex) -> Adjacency {
    let mut adjacency: Adjacency = HashMap::new();

    for simplex in complex {
        match simplex.dimension() {
            0 => {
                adjacency.entry(simplex.vertices()[0]).or_default();
            }
            1 => {
                let (u, v) = (simplex.vertices()[0], simplex.vertices()[1]);
                adjacency.entry(u).or_default().insert(v);
                adjacency.entry(v).or_default().insert(u);
            }
            _ => {}
        }
    }

    adjacency
}

/// Enumerate all maximal cliques via Bron-Kerbosch with pivoting.
///
/// The returned cliques are vertex sets in no particular order.
pub fn maximal_cliques_bron_kerbosch(complex: &SimplicialComplex) -> Vec<BTreeSet<usize>> {
    let adjacency = adjacency(complex);
    if adjacency.is_empty() {
        return Vec::new();
    }

    let mut cliques = Vec::new();

    let candidates: BTreeSet<usize> = adjacency.keys().copied().collect();
    let mut clique = BTreeSet::new();
    extend_with_pivot(
        &mut clique,
        candidates,
        BTreeSet::new(),
        &adjacency,
        &mut cliques,
    );

    cliques
}

fn extend_with_pivot(
    clique: &mut BTreeSet<usize>,
    mut candidates: BTreeSet<usize>,
    mut excluded: BTreeSet<usize>,
    adjacency: &Adjacency,
    cliques: &mut Vec<BTreeSet<usize>>,
) {
    if candidates.is_empty() && excluded.is_empty() {
        cliques.push(clique.clone());
        return;
    }

    // Pivot: the vertex covering the most candidates. Only vertices
    // outside its neighbourhood need to be branched on.
    let pivot = candidates
        .iter()
        .chain(excluded.iter())
        .copied()
        .max_by_key(|v| candidates.intersection(&adjacency[v]).count())
        .unwrap();

    let branches: Vec<usize> = candidates.difference(&adjacency[&pivot]).copied().collect();

    for v in branches {
        let neighbours = &adjacency[&v];

        clique.insert(v);
        extend_with_pivot(
            clique,
            candidates.intersection(neighbours).copied().collect(),
            excluded.intersection(neighbours).copied().collect(),
            adjacency,
            cliques,
        );
        clique.remove(&v);

        candidates.remove(&v);
        excluded.insert(v);
    }
}

/// Enumerate all maximal cliques via Koch's degeneracy-ordering scheme.
///
/// Vertices are processed in degeneracy order; each vertex is extended
/// only with neighbours appearing later in the order, so every maximal
/// clique is reported exactly once. The backtracking core is pivot-free
/// and independent of the Bron-Kerbosch implementation.
pub fn maximal_cliques_koch(complex: &SimplicialComplex) -> Vec<BTreeSet<usize>> {
    let adjacency = adjacency(complex);
    let order = degeneracy_order(&adjacency);
    let position: HashMap<usize, usize> =
        order.iter().enumerate().map(|(i, &v)| (v, i)).collect();

    let mut cliques = Vec::new();

    for (i, &v) in order.iter().enumerate() {
        let neighbours = &adjacency[&v];
        let candidates: BTreeSet<usize> = neighbours
            .iter()
            .copied()
            .filter(|u| position[u] > i)
            .collect();
        let excluded: BTreeSet<usize> = neighbours
            .iter()
            .copied()
            .filter(|u| position[u] < i)
            .collect();

        let mut clique = BTreeSet::from([v]);
        extend_plain(&mut clique, candidates, excluded, &adjacency, &mut cliques);
    }

    cliques
}

fn extend_plain(
    clique: &mut BTreeSet<usize>,
    mut candidates: BTreeSet<usize>,
    mut excluded: BTreeSet<usize>,
    adjacency: &Adjacency,
    cliques: &mut Vec<BTreeSet<usize>>,
) {
    if candidates.is_empty() {
        if excluded.is_empty() {
            cliques.push(clique.clone());
        }
        return;
    }

    while let Some(v) = candidates.iter().next().copied() {
        candidates.remove(&v);
        let neighbours = &adjacency[&v];

        clique.insert(v);
        extend_plain(
            clique,
            candidates.intersection(neighbours).copied().collect(),
            excluded.intersection(neighbours).copied().collect(),
            adjacency,
            cliques,
        );
        clique.remove(&v);

        excluded.insert(v);
    }
}

/// Degeneracy ordering: repeatedly remove a vertex of minimum remaining
/// degree.
fn degeneracy_order(adjacency: &Adjacency) -> Vec<usize> {
    let mut degrees: HashMap<usize, usize> = adjacency
        .iter()
        .map(|(&v, neighbours)| (v, neighbours.len()))
        .collect();
    let mut queue: BTreeSet<(usize, usize)> =
        degrees.iter().map(|(&v, &d)| (d, v)).collect();

    let mut order = Vec::with_capacity(adjacency.len());
    let mut removed: BTreeSet<usize> = BTreeSet::new();

    while let Some(&(degree, v)) = queue.iter().next() {
        queue.remove(&(degree, v));
        removed.insert(v);
        order.push(v);

        for &u in &adjacency[&v] {
            if removed.contains(&u) {
                continue;
            }
            let d = degrees[&u];
            queue.remove(&(d, u));
            queue.insert((d - 1, u));
            degrees.insert(u, d - 1);
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::simplex::Simplex;

    fn complex_of(vertex_sets: &[&[usize]]) -> SimplicialComplex {
        SimplicialComplex::from_simplices(
            vertex_sets.iter().map(|vs| Simplex::from(vs.to_vec())),
        )
    }

    fn as_set(cliques: Vec<BTreeSet<usize>>) -> BTreeSet<BTreeSet<usize>> {
        cliques.into_iter().collect()
    }

    /// 2---1
    /// |  /|
    /// | / |
    /// |/  |
    /// 0---3
    fn triangles_connected() -> SimplicialComplex {
        complex_of(&[
            &[0],
            &[1],
            &[2],
            &[3],
            &[0, 1],
            &[0, 2],
            &[0, 3],
            &[1, 2],
            &[1, 3],
            &[0, 1, 2],
            &[0, 1, 3],
        ])
    }

    /// 2---1   5
    /// |  /   /|
    /// | /   / |
    /// |/   /  |
    /// 0---3---4
    fn triangles_disconnected() -> SimplicialComplex {
        complex_of(&[
            &[0],
            &[1],
            &[2],
            &[3],
            &[4],
            &[5],
            &[0, 1],
            &[0, 2],
            &[0, 3],
            &[1, 2],
            &[3, 4],
            &[3, 5],
            &[4, 5],
            &[0, 1, 2],
            &[3, 4, 5],
        ])
    }

    #[test]
    fn test_triangles_connected() {
        let k = triangles_connected();
        let bk = as_set(maximal_cliques_bron_kerbosch(&k));
        let koch = as_set(maximal_cliques_koch(&k));

        assert_eq!(bk.len(), 2);
        assert_eq!(bk, koch);
        assert!(bk.contains(&BTreeSet::from([0, 1, 2])));
        assert!(bk.contains(&BTreeSet::from([0, 1, 3])));
    }

    #[test]
    fn test_triangles_disconnected() {
        let k = triangles_disconnected();
        let bk = as_set(maximal_cliques_bron_kerbosch(&k));
        let koch = as_set(maximal_cliques_koch(&k));

        assert_eq!(bk.len(), 3);
        assert_eq!(bk, koch);
        assert!(bk.contains(&BTreeSet::from([0, 3])));
        assert!(bk.contains(&BTreeSet::from([0, 1, 2])));
        assert!(bk.contains(&BTreeSet::from([3, 4, 5])));
    }

    #[test]
    fn test_non_zero_based_indices() {
        // Same topology as the connected case, labels shifted to 1..=4
        let k = complex_of(&[
            &[1],
            &[2],
            &[3],
            &[4],
            &[1, 2],
            &[1, 3],
            &[1, 4],
            &[2, 3],
            &[2, 4],
            &[1, 2, 3],
            &[1, 2, 4],
        ]);

        let bk = as_set(maximal_cliques_bron_kerbosch(&k));
        let koch = as_set(maximal_cliques_koch(&k));

        assert_eq!(bk.len(), 2);
        assert_eq!(bk, koch);
        assert!(bk.contains(&BTreeSet::from([1, 2, 3])));
        assert!(bk.contains(&BTreeSet::from([1, 2, 4])));
    }

    #[test]
    fn test_isolated_vertex_is_a_maximal_clique() {
        let k = complex_of(&[&[0], &[1], &[2], &[0, 1]]);
        let bk = as_set(maximal_cliques_bron_kerbosch(&k));
        let koch = as_set(maximal_cliques_koch(&k));

        assert_eq!(bk, koch);
        assert!(bk.contains(&BTreeSet::from([2])));
        assert!(bk.contains(&BTreeSet::from([0, 1])));
    }

    #[test]
    fn test_algorithms_agree_on_random_graphs() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0x5eed);

        for n in [6usize, 8, 10] {
            for _ in 0..10 {
                let mut simplices: Vec<Simplex> =
                    (0..n).map(|v| Simplex::from(vec![v])).collect();
                for u in 0..n {
                    for v in u + 1..n {
                        if rng.gen_bool(0.4) {
                            simplices.push(Simplex::from(vec![u, v]));
                        }
                    }
                }
                let k = SimplicialComplex::from_simplices(simplices);

                let bk = as_set(maximal_cliques_bron_kerbosch(&k));
                let koch = as_set(maximal_cliques_koch(&k));
                assert_eq!(bk, koch);
            }
        }
    }
}
