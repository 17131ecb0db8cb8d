//! Error Taxonomy for the Persistence Engine
//!
//! All failures surface to the caller of `compute_diagram`; there is no
//! silent recovery. In batch mode one instance's failure leaves the
//! sibling computations intact.

use thiserror::Error;

/// Errors produced by distance validation, filtration construction,
/// and the persistence computation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RipsError {
    /// Malformed input: asymmetric, negative, or wrongly shaped distance
    /// matrix, or an empty point set.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Unknown metric name requested in point-cloud mode.
    #[error("unsupported metric: {0:?}")]
    UnsupportedMetric(String),

    /// Filtration construction would exceed the configured simplex budget.
    /// The caller can retry with a smaller `max_edge_length` or a lower
    /// dimension cap.
    #[error("simplex budget exhausted: {budget} allowed, at least {required} required")]
    ResourceExhausted { budget: usize, required: usize },

    /// Batch instance was never started because cancellation was requested.
    #[error("computation cancelled before start")]
    Cancelled,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RipsError>;
