//! Vietoris-Rips Filtration Construction
//!
//! The Rips complex at scale ε contains a simplex for every vertex set
//! whose pairwise distances all lie at or below ε. Because every face of
//! a Rips simplex is itself a Rips simplex (the clique property), the
//! filtration is built incrementally: a (k+1)-clique is only attempted by
//! extending a k-clique with a common neighbor of strictly larger index.
//! Simplices killed by the edge-length threshold are therefore never
//! generated, and neither is any simplex above the dimension cap.
//!
//! The result is a flat arena of [`FilteredSimplex`] entries sorted by
//! `(value, dimension, lexicographic vertex order)` — a total order, so
//! the downstream reduction is deterministic regardless of how ties fall
//! in floating point.

mod simplex;

pub use simplex::FilteredSimplex;

use std::collections::HashMap;

use itertools::Itertools;
use log::debug;
use ndarray::ArrayView2;
use ordered_float::OrderedFloat;

use crate::error::{Result, RipsError};

/// A fully built, sorted Rips filtration over one distance matrix.
#[derive(Debug)]
pub struct Filtration {
    simplices: Vec<FilteredSimplex>,
    /// Sorted vertex list -> position in filtration order.
    index: HashMap<Vec<usize>, usize>,
    n_points: usize,
}

impl Filtration {
    /// Build the filtration up to `max_edge_length` and simplex dimension
    /// `max_dim`, refusing to grow past `budget` simplices.
    ///
    /// The distance matrix is assumed validated; `+inf` entries simply
    /// never produce an edge.
    pub fn build(
        distances: ArrayView2<f64>,
        max_edge_length: f64,
        max_dim: usize,
        budget: usize,
    ) -> Result<Self> {
        let n = distances.nrows();
        let within = |d: f64| d <= max_edge_length && d.is_finite();

        // Higher-index neighbor lists drive the clique expansion.
        let neighbors_above: Vec<Vec<usize>> = (0..n)
            .map(|i| {
                (i + 1..n)
                    .filter(|&j| within(distances[[i, j]]))
                    .collect()
            })
            .collect();

        let mut simplices: Vec<FilteredSimplex> = Vec::with_capacity(n);
        let check_budget = |count: usize| -> Result<()> {
            if count > budget {
                Err(RipsError::ResourceExhausted {
                    budget,
                    required: count,
                })
            } else {
                Ok(())
            }
        };

        for v in 0..n {
            simplices.push(FilteredSimplex::vertex(v));
        }
        check_budget(simplices.len())?;

        // Frontier of cliques of the current dimension, each with its
        // candidate set of common higher-index neighbors.
        let mut frontier: Vec<(Vec<usize>, f64, Vec<usize>)> = Vec::new();
        for (i, j) in (0..n).tuple_combinations() {
            let d = distances[[i, j]];
            if !within(d) {
                continue;
            }
            let cands: Vec<usize> = neighbors_above[i]
                .iter()
                .copied()
                .filter(|v| neighbors_above[j].binary_search(v).is_ok())
                .collect();
            simplices.push(FilteredSimplex {
                vertices: vec![i, j],
                value: d,
            });
            check_budget(simplices.len())?;
            frontier.push((vec![i, j], d, cands));
        }
        debug!("filtration: {} vertices, {} edges", n, frontier.len());

        for dim in 2..=max_dim {
            let mut next: Vec<(Vec<usize>, f64, Vec<usize>)> = Vec::new();
            for (verts, value, cands) in &frontier {
                for (ci, &v) in cands.iter().enumerate() {
                    // New value: farthest distance from v into the clique,
                    // or the clique's own value if that dominates.
                    let value = verts
                        .iter()
                        .map(|&u| distances[[u, v]])
                        .fold(*value, f64::max);

                    let mut extended = verts.clone();
                    extended.push(v);
                    simplices.push(FilteredSimplex {
                        vertices: extended.clone(),
                        value,
                    });
                    check_budget(simplices.len())?;

                    if dim < max_dim {
                        // Only candidates past v keep the enumeration
                        // canonical (each clique built exactly once).
                        let cands: Vec<usize> = cands[ci + 1..]
                            .iter()
                            .copied()
                            .filter(|w| neighbors_above[v].binary_search(w).is_ok())
                            .collect();
                        next.push((extended, value, cands));
                    }
                }
            }
            debug!("filtration: {} simplices of dimension {}", next.len(), dim);
            frontier = next;
        }

        simplices.sort_by(|a, b| {
            OrderedFloat(a.value)
                .cmp(&OrderedFloat(b.value))
                .then(a.vertices.len().cmp(&b.vertices.len()))
                .then(a.vertices.cmp(&b.vertices))
        });

        let index: HashMap<Vec<usize>, usize> = simplices
            .iter()
            .enumerate()
            .map(|(pos, s)| (s.vertices.clone(), pos))
            .collect();

        Ok(Self {
            simplices,
            index,
            n_points: n,
        })
    }

    pub fn len(&self) -> usize {
        self.simplices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.simplices.is_empty()
    }

    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Simplices in filtration order.
    pub fn simplices(&self) -> &[FilteredSimplex] {
        &self.simplices
    }

    /// Filtration positions of the codimension-1 faces of simplex `id`.
    ///
    /// Every face is present by the clique property, and sorted earlier
    /// by value monotonicity, so the lookups cannot miss.
    pub fn boundary(&self, id: usize) -> Vec<usize> {
        self.simplices[id]
            .faces()
            .map(|face| self.index[&face])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_triangle_filtration() {
        let dm = array![[0.0, 1.0, 2.0], [1.0, 0.0, 1.5], [2.0, 1.5, 0.0]];
        let filt = Filtration::build(dm.view(), 10.0, 2, 1_000).unwrap();

        // 3 vertices, 3 edges, 1 triangle.
        assert_eq!(filt.len(), 7);

        // Sorted by value, faces before cofaces.
        let values: Vec<f64> = filt.simplices().iter().map(|s| s.value).collect();
        for w in values.windows(2) {
            assert!(w[0] <= w[1]);
        }
        let triangle = filt.simplices().last().unwrap();
        assert_eq!(triangle.vertices, vec![0, 1, 2]);
        assert!((triangle.value - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_monotone_faces() {
        let dm = array![
            [0.0, 1.0, 0.4, 0.9],
            [1.0, 0.0, 0.7, 0.3],
            [0.4, 0.7, 0.0, 0.8],
            [0.9, 0.3, 0.8, 0.0]
        ];
        let filt = Filtration::build(dm.view(), 1.0, 3, 10_000).unwrap();
        for id in 0..filt.len() {
            let value = filt.simplices()[id].value;
            for face in filt.boundary(id) {
                assert!(filt.simplices()[face].value <= value);
            }
        }
    }

    #[test]
    fn test_threshold_excludes_edges() {
        let dm = array![[0.0, 1.0, 5.0], [1.0, 0.0, 5.0], [5.0, 5.0, 0.0]];
        let filt = Filtration::build(dm.view(), 2.0, 2, 1_000).unwrap();
        // 3 vertices plus the single short edge; no triangle.
        assert_eq!(filt.len(), 4);
    }

    #[test]
    fn test_infinity_means_no_edge() {
        let dm = array![[0.0, f64::INFINITY], [f64::INFINITY, 0.0]];
        let filt = Filtration::build(dm.view(), f64::INFINITY, 1, 1_000).unwrap();
        assert_eq!(filt.len(), 2);
    }

    #[test]
    fn test_budget_exhaustion() {
        let dm = array![[0.0, 1.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 0.0]];
        let err = Filtration::build(dm.view(), 2.0, 2, 5).unwrap_err();
        assert!(matches!(err, RipsError::ResourceExhausted { budget: 5, .. }));
    }
}
