//! Persistence Engine: Public Contract and Batch Mode
//!
//! The pipeline is an explicit composition of the two seams defined
//! elsewhere: a [`DistanceProvider`] turns the input into a validated
//! distance matrix, [`Filtration::build`] turns that into a sorted Rips
//! filtration, and a [`PersistenceComputer`] reduces it to a diagram.
//!
//! Each input instance is self-contained, so a batch of inputs is
//! embarrassingly parallel; `compute_batch` fans out over rayon with
//! per-instance results, and one instance's failure never aborts its
//! siblings.

use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;
use ndarray::ArrayView2;
use rayon::prelude::*;

use crate::complex::Filtration;
use crate::error::{Result, RipsError};
use crate::metric::{validate_distance_matrix, DistanceProvider, Metric};
use crate::persistence::{PersistenceComputer, PersistenceDiagram, StandardReduction};

/// One independent input instance.
#[derive(Debug, Clone, Copy)]
pub enum RipsInput<'a> {
    /// Rows are points in R^d; distances come from the configured metric.
    PointCloud(ArrayView2<'a, f64>),
    /// A precomputed symmetric non-negative distance matrix; `+inf`
    /// entries mean "no connection".
    Distances(ArrayView2<'a, f64>),
}

/// Engine configuration.
///
/// Plain struct with a permissive default; tighten `max_edge_length`,
/// the dimension set, or `max_simplices` to bound the complex.
#[derive(Debug, Clone)]
pub struct RipsConfig {
    /// Distance function for point-cloud inputs.
    pub metric: Metric,
    /// Edges longer than this never enter the filtration.
    pub max_edge_length: f64,
    /// Homology dimensions to report.
    pub homology_dimensions: Vec<usize>,
    /// Hard cap on the simplex arena; exceeding it is
    /// `RipsError::ResourceExhausted` rather than an allocator death.
    pub max_simplices: usize,
    /// Worker count for batch mode; `None` uses the global rayon pool.
    pub threads: Option<usize>,
}

impl Default for RipsConfig {
    fn default() -> Self {
        Self {
            metric: Metric::Euclidean,
            max_edge_length: f64::INFINITY,
            homology_dimensions: vec![0, 1],
            max_simplices: 2_000_000,
            threads: None,
        }
    }
}

impl RipsConfig {
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_max_edge_length(mut self, max_edge_length: f64) -> Self {
        self.max_edge_length = max_edge_length;
        self
    }

    pub fn with_dimensions(mut self, dims: &[usize]) -> Self {
        self.homology_dimensions = dims.to_vec();
        self
    }

    pub fn with_max_simplices(mut self, max_simplices: usize) -> Self {
        self.max_simplices = max_simplices;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }
}

/// Compute the persistence diagram of a single input.
///
/// Pure: identical input and configuration produce identical diagrams.
/// A requested dimension the data cannot support simply contributes no
/// pairs.
pub fn compute_diagram(input: &RipsInput, config: &RipsConfig) -> Result<PersistenceDiagram> {
    let distances = match input {
        RipsInput::PointCloud(points) => config.metric.distance_matrix(*points)?,
        RipsInput::Distances(dm) => {
            validate_distance_matrix(*dm, None)?;
            dm.to_owned()
        }
    };

    if config.homology_dimensions.is_empty() {
        return Ok(PersistenceDiagram::new());
    }
    let max_hom_dim = *config
        .homology_dimensions
        .iter()
        .max()
        .expect("dimension set is non-empty");

    // Simplices one dimension above the top homology dimension are the
    // highest that can kill anything; nothing larger is built.
    let filtration = Filtration::build(
        distances.view(),
        config.max_edge_length,
        max_hom_dim + 1,
        config.max_simplices,
    )?;
    debug!(
        "engine: {} points -> {} simplices",
        filtration.n_points(),
        filtration.len()
    );

    Ok(StandardReduction.compute(&filtration, &config.homology_dimensions))
}

/// Compute diagrams for a batch of independent inputs in parallel.
///
/// Returns one result per input, in input order.
pub fn compute_batch(
    inputs: &[RipsInput],
    config: &RipsConfig,
) -> Vec<Result<PersistenceDiagram>> {
    run_batch(inputs, config, |input| compute_diagram(input, config))
}

/// Batch computation with cooperative cancellation.
///
/// Instances not yet started when the flag is raised report
/// `RipsError::Cancelled`; instances already running finish normally.
pub fn compute_batch_with(
    inputs: &[RipsInput],
    config: &RipsConfig,
    cancel: &AtomicBool,
) -> Vec<Result<PersistenceDiagram>> {
    run_batch(inputs, config, |input| {
        if cancel.load(Ordering::Relaxed) {
            Err(RipsError::Cancelled)
        } else {
            compute_diagram(input, config)
        }
    })
}

fn run_batch<F>(inputs: &[RipsInput], config: &RipsConfig, per_input: F) -> Vec<Result<PersistenceDiagram>>
where
    F: Fn(&RipsInput) -> Result<PersistenceDiagram> + Send + Sync,
{
    match config.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .expect("failed to build worker pool")
            .install(|| inputs.par_iter().map(&per_input).collect()),
        None => inputs.par_iter().map(&per_input).collect(),
    }
}
