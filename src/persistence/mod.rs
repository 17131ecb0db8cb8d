//! Persistent Homology: Diagrams and the Reduction That Produces Them
//!
//! - `diagram.rs`: persistence pairs and per-dimension queries.
//! - `reduction.rs`: the standard boundary-matrix reduction over Z/2,
//!   behind the [`PersistenceComputer`] seam.

mod diagram;
mod reduction;

pub use diagram::{PersistenceDiagram, PersistencePair};
pub use reduction::{PersistenceComputer, StandardReduction};
