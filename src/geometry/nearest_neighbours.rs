//! Nearest-neighbour searches and neighbourhood graphs
//!
//! [`NearestNeighbours`] is the seam between point-cloud geometry and the
//! combinatorial pipeline: anything that can answer radius and k-nearest
//! queries can feed the Rips expansion. [`BruteForce`] answers both from a
//! dense distance matrix and is exact; approximate or spatially indexed
//! implementations can be swapped in behind the same trait.

use ndarray::Array2;

use crate::topology::{Simplex, SimplicialComplex};

/// Neighbourhood queries over a fixed point set.
pub trait NearestNeighbours {
    /// Number of points.
    fn size(&self) -> usize;

    /// For every point, all other points within `radius` (inclusive),
    /// returned as parallel index and distance lists.
    fn radius_search(&self, radius: f64) -> (Vec<Vec<usize>>, Vec<Vec<f64>>);

    /// For every point, its `k` nearest other points, closest first.
    fn neighbour_search(&self, k: usize) -> (Vec<Vec<usize>>, Vec<Vec<f64>>);
}

/// Exact neighbourhood queries over a dense distance matrix.
#[derive(Debug, Clone)]
pub struct BruteForce {
    distances: Array2<f64>,
}

impl BruteForce {
    /// Build from a precomputed symmetric distance matrix.
    pub fn from_distances(distances: Array2<f64>) -> Self {
        Self { distances }
    }

    /// Build from a point cloud (rows = points), using Euclidean
    /// distances.
    pub fn from_points(points: &Array2<f64>) -> Self {
        let n = points.nrows();
        let dim = points.ncols();

        let mut distances = Array2::<f64>::zeros((n, n));
        for i in 0..n {
            for j in i + 1..n {
                let mut dist_sq = 0.0;
                for d in 0..dim {
                    let diff = points[[i, d]] - points[[j, d]];
                    dist_sq += diff * diff;
                }
                let dist = dist_sq.sqrt();
                distances[[i, j]] = dist;
                distances[[j, i]] = dist;
            }
        }

        Self { distances }
    }
}

impl NearestNeighbours for BruteForce {
    fn size(&self) -> usize {
        self.distances.nrows()
    }

    fn radius_search(&self, radius: f64) -> (Vec<Vec<usize>>, Vec<Vec<f64>>) {
        let n = self.size();
        let mut indices = vec![Vec::new(); n];
        let mut distances = vec![Vec::new(); n];

        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let d = self.distances[[i, j]];
                if d <= radius {
                    indices[i].push(j);
                    distances[i].push(d);
                }
            }
        }

        (indices, distances)
    }

    fn neighbour_search(&self, k: usize) -> (Vec<Vec<usize>>, Vec<Vec<f64>>) {
        let n = self.size();
        let mut indices = Vec::with_capacity(n);
        let mut distances = Vec::with_capacity(n);

        for i in 0..n {
            let mut neighbours: Vec<(f64, usize)> = (0..n)
                .filter(|&j| j != i)
                .map(|j| (self.distances[[i, j]], j))
                .collect();
            neighbours.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            neighbours.truncate(k);

            indices.push(neighbours.iter().map(|&(_, j)| j).collect());
            distances.push(neighbours.iter().map(|&(d, _)| d).collect());
        }

        (indices, distances)
    }
}

/// Build the neighbourhood graph at scale `radius`: one vertex per point
/// (weight 0) and one edge per point pair within `radius`, weighted by
/// distance. This 1-skeleton is the input for flag expansion.
pub fn build_neighbourhood_graph<N: NearestNeighbours>(
    nn: &N,
    radius: f64,
) -> SimplicialComplex {
    let mut complex = SimplicialComplex::new();

    for i in 0..nn.size() {
        complex.push(Simplex::new(vec![i], 0.0));
    }

    let (indices, distances) = nn.radius_search(radius);
    for (i, (neighbours, dists)) in indices.into_iter().zip(distances).enumerate() {
        for (j, d) in neighbours.into_iter().zip(dists) {
            if i < j {
                complex.push(Simplex::new(vec![i, j], d));
            }
        }
    }

    complex
}
