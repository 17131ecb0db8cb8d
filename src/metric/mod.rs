//! Distance Providers: Point Clouds to Distance Matrices
//!
//! The Vietoris-Rips construction only ever sees a symmetric distance
//! matrix. This module is the seam in front of it: a [`Metric`] turns a
//! point cloud (rows of an `Array2<f64>`) into that matrix, or passes a
//! precomputed matrix through after validation. Entries of `+inf` are
//! legal and mean "no edge at any threshold".
//!
//! Custom metrics are supplied as shared closures, so geodesic or
//! graph-derived distances computed elsewhere can be plugged in without
//! the engine knowing about them.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use ndarray::{Array2, ArrayView1, ArrayView2};

use crate::error::{Result, RipsError};

/// Signature of a caller-supplied distance function.
pub type DistanceFn = dyn Fn(ArrayView1<f64>, ArrayView1<f64>) -> f64 + Send + Sync;

/// Named distance function applied to point-cloud inputs.
///
/// `Precomputed` marks the input matrix as already being a distance
/// matrix; it is validated, never recomputed.
#[derive(Clone)]
pub enum Metric {
    Euclidean,
    Manhattan,
    Chebyshev,
    Precomputed,
    Custom(Arc<DistanceFn>),
}

impl fmt::Debug for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Euclidean => f.write_str("Euclidean"),
            Metric::Manhattan => f.write_str("Manhattan"),
            Metric::Chebyshev => f.write_str("Chebyshev"),
            Metric::Precomputed => f.write_str("Precomputed"),
            Metric::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl FromStr for Metric {
    type Err = RipsError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "euclidean" => Ok(Metric::Euclidean),
            "manhattan" => Ok(Metric::Manhattan),
            "chebyshev" => Ok(Metric::Chebyshev),
            "precomputed" => Ok(Metric::Precomputed),
            other => Err(RipsError::UnsupportedMetric(other.to_string())),
        }
    }
}

impl Metric {
    /// Distance between two points under this metric.
    ///
    /// Panics on `Precomputed`, which has no pointwise form; the engine
    /// never routes point clouds through it.
    fn distance(&self, a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
        match self {
            Metric::Euclidean => a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| (x - y) * (x - y))
                .sum::<f64>()
                .sqrt(),
            Metric::Manhattan => a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum(),
            Metric::Chebyshev => a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| (x - y).abs())
                .fold(0.0, f64::max),
            Metric::Custom(f) => f(a, b),
            Metric::Precomputed => unreachable!("precomputed metric has no pointwise distance"),
        }
    }
}

/// Anything that can turn a point cloud into a distance matrix.
///
/// Separating this from the persistence computation keeps the two halves
/// independently swappable; the engine composes them explicitly.
pub trait DistanceProvider {
    fn distance_matrix(&self, points: ArrayView2<f64>) -> Result<Array2<f64>>;
}

impl DistanceProvider for Metric {
    fn distance_matrix(&self, points: ArrayView2<f64>) -> Result<Array2<f64>> {
        if matches!(self, Metric::Precomputed) {
            return Err(RipsError::InvalidInput(
                "precomputed metric requires a distance matrix, not a point cloud".into(),
            ));
        }

        let n = points.nrows();
        if n == 0 {
            return Err(RipsError::InvalidInput("empty point cloud".into()));
        }

        let mut dm = Array2::<f64>::zeros((n, n));
        for i in 0..n {
            for j in i + 1..n {
                let d = self.distance(points.row(i), points.row(j));
                if d < 0.0 || d.is_nan() {
                    return Err(RipsError::InvalidInput(format!(
                        "metric returned invalid distance {d} for pair ({i}, {j})"
                    )));
                }
                dm[[i, j]] = d;
                dm[[j, i]] = d;
            }
        }
        Ok(dm)
    }
}

/// Validate a caller-supplied distance matrix.
///
/// Checks: square shape, optional point-count match, zero diagonal,
/// non-negative entries (`+inf` allowed, NaN not), exact symmetry.
/// Matrices built from float math should be symmetrized by the caller.
pub fn validate_distance_matrix(dm: ArrayView2<f64>, expected_points: Option<usize>) -> Result<()> {
    let (rows, cols) = dm.dim();
    if rows != cols {
        return Err(RipsError::InvalidInput(format!(
            "distance matrix must be square, got {rows}x{cols}"
        )));
    }
    if rows == 0 {
        return Err(RipsError::InvalidInput("empty distance matrix".into()));
    }
    if let Some(n) = expected_points {
        if rows != n {
            return Err(RipsError::InvalidInput(format!(
                "distance matrix is {rows}x{rows} but {n} points were declared"
            )));
        }
    }

    for i in 0..rows {
        if dm[[i, i]] != 0.0 {
            return Err(RipsError::InvalidInput(format!(
                "nonzero diagonal entry {} at index {i}",
                dm[[i, i]]
            )));
        }
        for j in i + 1..rows {
            let a = dm[[i, j]];
            let b = dm[[j, i]];
            if a.is_nan() || b.is_nan() {
                return Err(RipsError::InvalidInput(format!(
                    "NaN distance at ({i}, {j})"
                )));
            }
            if a < 0.0 || b < 0.0 {
                return Err(RipsError::InvalidInput(format!(
                    "negative distance {} at ({i}, {j})",
                    a.min(b)
                )));
            }
            if a != b {
                return Err(RipsError::InvalidInput(format!(
                    "asymmetric entries at ({i}, {j}): {a} vs {b}"
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_euclidean_matrix() {
        let points = array![[0.0, 0.0], [3.0, 4.0]];
        let dm = Metric::Euclidean.distance_matrix(points.view()).unwrap();
        assert!((dm[[0, 1]] - 5.0).abs() < 1e-10);
        assert!((dm[[1, 0]] - 5.0).abs() < 1e-10);
        assert_eq!(dm[[0, 0]], 0.0);
    }

    #[test]
    fn test_manhattan_and_chebyshev() {
        let points = array![[0.0, 0.0], [1.0, 2.0]];
        let man = Metric::Manhattan.distance_matrix(points.view()).unwrap();
        let che = Metric::Chebyshev.distance_matrix(points.view()).unwrap();
        assert!((man[[0, 1]] - 3.0).abs() < 1e-10);
        assert!((che[[0, 1]] - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_metric_parsing() {
        assert!(matches!("euclidean".parse(), Ok(Metric::Euclidean)));
        assert!(matches!("precomputed".parse(), Ok(Metric::Precomputed)));
        assert!(matches!(
            "minkowski_7".parse::<Metric>(),
            Err(RipsError::UnsupportedMetric(_))
        ));
    }

    #[test]
    fn test_custom_metric() {
        let metric = Metric::Custom(Arc::new(|a: ArrayView1<f64>, b: ArrayView1<f64>| {
            (a[0] - b[0]).abs()
        }));
        let points = array![[1.0, 9.0], [4.0, -2.0]];
        let dm = metric.distance_matrix(points.view()).unwrap();
        assert!((dm[[0, 1]] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_rejects_negative() {
        let dm = array![[0.0, -1.0], [-1.0, 0.0]];
        assert!(matches!(
            validate_distance_matrix(dm.view(), None),
            Err(RipsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_rejects_asymmetric() {
        let dm = array![[0.0, 1.0], [2.0, 0.0]];
        assert!(matches!(
            validate_distance_matrix(dm.view(), None),
            Err(RipsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_allows_infinity() {
        let dm = array![[0.0, f64::INFINITY], [f64::INFINITY, 0.0]];
        assert!(validate_distance_matrix(dm.view(), None).is_ok());
    }

    #[test]
    fn test_validate_shape_mismatch() {
        let dm = array![[0.0, 1.0], [1.0, 0.0]];
        assert!(validate_distance_matrix(dm.view(), Some(3)).is_err());
    }
}
