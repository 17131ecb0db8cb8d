//! Diagram Summaries: Persistence Entropy and Betti Curves
//!
//! The scalar features downstream consumers extract from diagrams.
//! Persistence entropy is the Shannon entropy of the normalized finite
//! lifetimes in one dimension:
//!
//!   H = -Σᵢ pᵢ ln(pᵢ),   pᵢ = lᵢ / Σⱼ lⱼ
//!
//! A diagram dominated by one long bar has entropy near 0; many bars of
//! similar length push it toward ln(count).

use crate::persistence::PersistenceDiagram;

/// Shannon entropy of normalized finite lifetimes in dimension `d`.
///
/// Essential pairs are excluded; an empty or zero-total dimension has
/// entropy 0.
pub fn persistence_entropy(pd: &PersistenceDiagram, d: usize) -> f64 {
    let lifetimes: Vec<f64> = pd
        .finite_pairs(d)
        .iter()
        .map(|p| p.persistence())
        .filter(|&l| l > 0.0)
        .collect();

    if lifetimes.is_empty() {
        return 0.0;
    }
    let total: f64 = lifetimes.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }

    let mut entropy = 0.0;
    for l in &lifetimes {
        let p = l / total;
        if p > 0.0 {
            entropy -= p * p.ln();
        }
    }
    entropy
}

/// One entropy value per requested dimension, in order. This is the
/// feature vector a classifier consumes.
pub fn entropy_features(pd: &PersistenceDiagram, dims: &[usize]) -> Vec<f64> {
    dims.iter().map(|&d| persistence_entropy(pd, d)).collect()
}

/// Betti numbers of one dimension sampled at evenly spaced scales.
#[derive(Debug, Clone)]
pub struct BettiCurve {
    pub dimension: usize,
    /// (epsilon, betti) samples across the filtration range.
    pub samples: Vec<(f64, usize)>,
}

impl BettiCurve {
    /// Sample the Betti curve over `[0, max_value]` at `n_steps + 1`
    /// evenly spaced scales, where `max_value` is the largest finite
    /// value in the diagram.
    pub fn from_diagram(pd: &PersistenceDiagram, dimension: usize, n_steps: usize) -> Self {
        let max_value = pd.max_finite_value();
        let samples = (0..=n_steps)
            .map(|step| {
                let eps = max_value * step as f64 / n_steps.max(1) as f64;
                (eps, pd.betti_at(eps, dimension))
            })
            .collect();
        Self { dimension, samples }
    }

    /// Area under the curve (trapezoidal).
    pub fn integral(&self) -> f64 {
        self.samples
            .windows(2)
            .map(|w| (w[1].0 - w[0].0) * (w[0].1 + w[1].1) as f64 / 2.0)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{PersistenceDiagram, PersistencePair};

    #[test]
    fn test_entropy_uniform_lifetimes() {
        let mut pd = PersistenceDiagram::new();
        pd.add(PersistencePair::new(0, 0.0, 1.0));
        pd.add(PersistencePair::new(0, 0.0, 1.0));
        pd.add(PersistencePair::new(0, 0.0, 1.0));

        let expected = 3.0_f64.ln();
        assert!((persistence_entropy(&pd, 0) - expected).abs() < 1e-10);
    }

    #[test]
    fn test_entropy_single_bar_is_zero() {
        let mut pd = PersistenceDiagram::new();
        pd.add(PersistencePair::new(1, 0.2, 1.7));
        assert_eq!(persistence_entropy(&pd, 1), 0.0);
    }

    #[test]
    fn test_entropy_ignores_essential_pairs() {
        let mut pd = PersistenceDiagram::new();
        pd.add(PersistencePair::new(0, 0.0, f64::INFINITY));
        assert_eq!(persistence_entropy(&pd, 0), 0.0);
    }

    #[test]
    fn test_entropy_feature_vector() {
        let mut pd = PersistenceDiagram::new();
        pd.add(PersistencePair::new(0, 0.0, 1.0));
        pd.add(PersistencePair::new(0, 0.0, 2.0));
        pd.add(PersistencePair::new(1, 1.0, 1.5));

        let features = entropy_features(&pd, &[0, 1, 2]);
        assert_eq!(features.len(), 3);
        assert!(features[0] > 0.0);
        assert_eq!(features[1], 0.0); // single bar
        assert_eq!(features[2], 0.0); // nothing in dimension 2
    }

    #[test]
    fn test_betti_curve() {
        let mut pd = PersistenceDiagram::new();
        pd.add(PersistencePair::new(0, 0.0, 2.0));
        pd.add(PersistencePair::new(0, 0.0, 1.0));

        let curve = BettiCurve::from_diagram(&pd, 0, 4);
        assert_eq!(curve.samples.len(), 5);
        assert_eq!(curve.samples[0], (0.0, 2)); // both alive at 0
        assert_eq!(curve.samples[3].1, 1); // eps = 1.5, one left
        assert!(curve.integral() > 0.0);
    }
}
