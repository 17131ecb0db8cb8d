//! # rips-persistence
//!
//! Vietoris-Rips persistent homology for point clouds and precomputed
//! distance matrices.
//!
//! ## Pipeline
//!
//! For a finite metric space X, the Vietoris-Rips complex VR_ε(X)
//! contains a simplex for every vertex set whose pairwise distances all
//! lie at or below ε. Sweeping ε produces a filtration; persistent
//! homology tracks the birth and death of topological features
//! (connected components, loops, voids) across it.
//!
//! 1. **Distance**: a [`Metric`] turns a point cloud into a symmetric
//!    distance matrix, or a caller-supplied matrix is validated directly
//!    (`+inf` entries mean "no connection").
//! 2. **Filtration**: incremental clique expansion up to the edge-length
//!    threshold and requested dimension, into a flat simplex arena with
//!    a deterministic total order.
//! 3. **Reduction**: the standard boundary-matrix algorithm over Z/2
//!    extracts one [`PersistencePair`] per birth/death event; classes
//!    that never die are reported with death = ∞.
//!
//! Batches of independent inputs run in parallel with per-instance
//! results; see [`compute_batch`].
//!
//! ## Example
//!
//! ```
//! use rips_persistence::{compute_diagram, RipsConfig, RipsInput};
//!
//! let mut rng = rand::rng();
//! let points = rips_persistence::sample::circle(40, 1.0, 0.0, &mut rng);
//! let config = RipsConfig::default().with_max_edge_length(10.0);
//! let diagram = compute_diagram(&RipsInput::PointCloud(points.view()), &config).unwrap();
//!
//! // The circle's loop is the dominant degree-1 feature.
//! assert!(diagram.max_persistence(1) > 0.5);
//! ```
//!
//! ## References
//!
//! - Edelsbrunner & Harer, "Computational Topology" (2010)
//! - Edelsbrunner, Letscher, Zomorodian (2002), "Topological Persistence
//!   and Simplification"

pub mod complex;
pub mod engine;
pub mod error;
pub mod features;
pub mod metric;
pub mod persistence;
pub mod sample;

// Re-exports: the public contract
pub use engine::{compute_batch, compute_batch_with, compute_diagram, RipsConfig, RipsInput};

// Re-exports: errors
pub use error::{Result, RipsError};

// Re-exports: distance providers
pub use metric::{validate_distance_matrix, DistanceProvider, Metric};

// Re-exports: filtration and diagrams
pub use complex::{FilteredSimplex, Filtration};
pub use persistence::{PersistenceComputer, PersistenceDiagram, PersistencePair, StandardReduction};

// Re-exports: diagram summaries
pub use features::{entropy_features, persistence_entropy, BettiCurve};
