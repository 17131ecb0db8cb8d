//! Persistence Diagrams
//!
//! A persistence pair [b, d) records a topological feature born at
//! filtration value b and killed at value d; essential features never
//! die and carry d = ∞. Long-lived pairs are robust structure, short
//! ones are noise.

/// A single (dimension, birth, death) triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersistencePair {
    pub dimension: usize,
    pub birth: f64,
    pub death: f64,
}

impl PersistencePair {
    pub fn new(dimension: usize, birth: f64, death: f64) -> Self {
        Self {
            dimension,
            birth,
            death,
        }
    }

    /// Lifetime of the feature; ∞ for essential pairs.
    pub fn persistence(&self) -> f64 {
        self.death - self.birth
    }

    pub fn is_essential(&self) -> bool {
        self.death.is_infinite()
    }
}

/// All persistence pairs of one input, across the requested dimensions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistenceDiagram {
    pub pairs: Vec<PersistencePair>,
}

impl PersistenceDiagram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, pair: PersistencePair) {
        self.pairs.push(pair);
    }

    /// All pairs of dimension d.
    pub fn dim(&self, d: usize) -> Vec<&PersistencePair> {
        self.pairs.iter().filter(|p| p.dimension == d).collect()
    }

    /// Finite pairs of dimension d.
    pub fn finite_pairs(&self, d: usize) -> Vec<&PersistencePair> {
        self.pairs
            .iter()
            .filter(|p| p.dimension == d && !p.is_essential())
            .collect()
    }

    /// Number of essential (never-dying) classes in dimension d.
    pub fn essential_count(&self, d: usize) -> usize {
        self.pairs
            .iter()
            .filter(|p| p.dimension == d && p.is_essential())
            .count()
    }

    /// Sum of finite lifetimes in dimension d.
    pub fn total_persistence(&self, d: usize) -> f64 {
        self.finite_pairs(d).iter().map(|p| p.persistence()).sum()
    }

    /// Longest finite lifetime in dimension d.
    pub fn max_persistence(&self, d: usize) -> f64 {
        self.finite_pairs(d)
            .iter()
            .map(|p| p.persistence())
            .fold(0.0, f64::max)
    }

    /// Betti number at scale epsilon: pairs of dimension d alive on
    /// [birth, death) at that scale.
    pub fn betti_at(&self, epsilon: f64, d: usize) -> usize {
        self.pairs
            .iter()
            .filter(|p| p.dimension == d && p.birth <= epsilon && epsilon < p.death)
            .count()
    }

    /// Largest finite birth or death value; the filtration range covered
    /// by the diagram. Zero for an empty diagram.
    pub fn max_finite_value(&self) -> f64 {
        self.pairs
            .iter()
            .flat_map(|p| [p.birth, p.death])
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_queries() {
        let mut pd = PersistenceDiagram::new();
        pd.add(PersistencePair::new(0, 0.0, f64::INFINITY));
        pd.add(PersistencePair::new(0, 0.0, 0.5));
        pd.add(PersistencePair::new(1, 1.0, 1.4));

        assert_eq!(pd.dim(0).len(), 2);
        assert_eq!(pd.finite_pairs(0).len(), 1);
        assert_eq!(pd.essential_count(0), 1);
        assert!((pd.total_persistence(1) - 0.4).abs() < 1e-10);
    }

    #[test]
    fn test_betti_at() {
        let mut pd = PersistenceDiagram::new();
        pd.add(PersistencePair::new(0, 0.0, f64::INFINITY));
        pd.add(PersistencePair::new(0, 0.0, 0.5));
        pd.add(PersistencePair::new(1, 1.0, 1.4));

        assert_eq!(pd.betti_at(0.2, 0), 2);
        assert_eq!(pd.betti_at(0.8, 0), 1);
        assert_eq!(pd.betti_at(1.2, 1), 1);
        assert_eq!(pd.betti_at(1.4, 1), 0); // death is exclusive
    }
}
