//! Boundary-Matrix Reduction over Z/2
//!
//! The standard persistence algorithm: walk the filtration in order,
//! reduce each simplex's boundary column against previously reduced
//! columns sharing its lowest non-zero row, and read pairs off the
//! pivots. A column that reduces to zero creates a class (a birth); a
//! column with a surviving pivot kills the class created at that pivot
//! (a death). Creators left unpaired at the end are essential and die
//! at ∞.
//!
//! Coefficients are Z/2, so column addition is symmetric difference.
//!
//! Reference: Edelsbrunner, Letscher, Zomorodian (2002), "Topological
//! Persistence and Simplification".

use std::collections::{BTreeSet, HashMap, HashSet};

use log::debug;

use crate::complex::Filtration;

use super::diagram::{PersistenceDiagram, PersistencePair};

/// Computes a diagram from a built filtration. The engine composes one
/// of these behind the distance provider; alternative reduction
/// strategies slot in here.
pub trait PersistenceComputer {
    fn compute(&self, filtration: &Filtration, dimensions: &[usize]) -> PersistenceDiagram;
}

/// The standard column-clearing reduction.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardReduction;

/// Sparse Z/2 column: the set of non-zero row indices.
#[derive(Debug, Clone)]
struct SparseColumn {
    rows: BTreeSet<usize>,
}

impl SparseColumn {
    fn new() -> Self {
        Self {
            rows: BTreeSet::new(),
        }
    }

    fn is_zero(&self) -> bool {
        self.rows.is_empty()
    }

    /// Lowest non-zero entry: the maximum row index.
    fn low(&self) -> Option<usize> {
        self.rows.iter().next_back().copied()
    }

    /// Z/2 column addition, i.e. symmetric difference.
    fn add_assign(&mut self, other: &SparseColumn) {
        for &row in &other.rows {
            if !self.rows.remove(&row) {
                self.rows.insert(row);
            }
        }
    }

    fn toggle(&mut self, row: usize) {
        if !self.rows.remove(&row) {
            self.rows.insert(row);
        }
    }
}

impl PersistenceComputer for StandardReduction {
    fn compute(&self, filtration: &Filtration, dimensions: &[usize]) -> PersistenceDiagram {
        let wanted: HashSet<usize> = dimensions.iter().copied().collect();
        let simplices = filtration.simplices();
        let m = simplices.len();

        let mut columns: Vec<SparseColumn> = Vec::with_capacity(m);
        let mut low_to_col: HashMap<usize, usize> = HashMap::new();

        for id in 0..m {
            let mut column = SparseColumn::new();
            if simplices[id].dimension() > 0 {
                for face in filtration.boundary(id) {
                    column.toggle(face);
                }
            }

            while let Some(low) = column.low() {
                match low_to_col.get(&low) {
                    Some(&pivot) => column.add_assign(&columns[pivot]),
                    None => break,
                }
            }
            if let Some(low) = column.low() {
                low_to_col.insert(low, id);
            }
            columns.push(column);
        }

        let mut diagram = PersistenceDiagram::new();
        let mut paired = vec![false; m];

        for (killer, column) in columns.iter().enumerate() {
            if let Some(creator) = column.low() {
                paired[creator] = true;
                paired[killer] = true;

                let birth = simplices[creator].value;
                let death = simplices[killer].value;
                let dim = simplices[creator].dimension();
                // Zero-persistence pairs are invisible in the diagram.
                if death > birth && wanted.contains(&dim) {
                    diagram.add(PersistencePair::new(dim, birth, death));
                }
            }
        }

        for id in 0..m {
            if !paired[id] && columns[id].is_zero() {
                let dim = simplices[id].dimension();
                if wanted.contains(&dim) {
                    diagram.add(PersistencePair::new(
                        dim,
                        simplices[id].value,
                        f64::INFINITY,
                    ));
                }
            }
        }

        debug!(
            "reduction: {} simplices -> {} pairs",
            m,
            diagram.pairs.len()
        );
        diagram
    }
}
