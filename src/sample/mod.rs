//! Point-Cloud Samplers
//!
//! Synthetic surfaces with known topology, used by the demo binary and
//! the scenario tests: circle (β₁ = 1), sphere (β₂ = 1), torus
//! (β₁ = 2, β₂ = 1). Points are drawn uniformly in parameter space with
//! optional isotropic Gaussian noise added in the ambient coordinates.

use std::f64::consts::TAU;

use ndarray::Array2;
use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

/// `n` points on a circle of the given radius in R^2.
pub fn circle<R: Rng>(n: usize, radius: f64, noise: f64, rng: &mut R) -> Array2<f64> {
    let mut points = Array2::<f64>::zeros((n, 2));
    for i in 0..n {
        // Regular spacing keeps the loop well formed at any sample size;
        // jitter comes from the noise parameter.
        let theta = TAU * i as f64 / n as f64;
        points[[i, 0]] = radius * theta.cos();
        points[[i, 1]] = radius * theta.sin();
    }
    add_noise(&mut points, noise, rng);
    points
}

/// `n` points on a sphere of the given radius in R^3.
pub fn sphere<R: Rng>(n: usize, radius: f64, noise: f64, rng: &mut R) -> Array2<f64> {
    let gauss = Normal::new(0.0, 1.0).unwrap();
    let mut points = Array2::<f64>::zeros((n, 3));
    for i in 0..n {
        // Normalized Gaussian vectors are uniform on the sphere.
        let (x, y, z) = loop {
            let v: [f64; 3] = [gauss.sample(rng), gauss.sample(rng), gauss.sample(rng)];
            let norm = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
            if norm > 1e-12 {
                break (v[0] / norm, v[1] / norm, v[2] / norm);
            }
        };
        points[[i, 0]] = radius * x;
        points[[i, 1]] = radius * y;
        points[[i, 2]] = radius * z;
    }
    add_noise(&mut points, noise, rng);
    points
}

/// `n` points on a torus in R^3 with the given major and minor radii.
pub fn torus<R: Rng>(n: usize, major: f64, minor: f64, noise: f64, rng: &mut R) -> Array2<f64> {
    let angle = Uniform::new(0.0, TAU).unwrap();
    let mut points = Array2::<f64>::zeros((n, 3));
    for i in 0..n {
        let u = angle.sample(rng);
        let v = angle.sample(rng);
        let ring = major + minor * v.cos();
        points[[i, 0]] = ring * u.cos();
        points[[i, 1]] = ring * u.sin();
        points[[i, 2]] = minor * v.sin();
    }
    add_noise(&mut points, noise, rng);
    points
}

fn add_noise<R: Rng>(points: &mut Array2<f64>, noise: f64, rng: &mut R) {
    if noise <= 0.0 {
        return;
    }
    let gauss = Normal::new(0.0, noise).unwrap();
    for x in points.iter_mut() {
        *x += gauss.sample(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_circle_lies_on_circle() {
        let mut rng = StdRng::seed_from_u64(1);
        let points = circle(50, 2.0, 0.0, &mut rng);
        assert_eq!(points.dim(), (50, 2));
        for row in points.rows() {
            let r = (row[0] * row[0] + row[1] * row[1]).sqrt();
            assert!((r - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sphere_radius() {
        let mut rng = StdRng::seed_from_u64(2);
        let points = sphere(50, 1.5, 0.0, &mut rng);
        for row in points.rows() {
            let r = (row[0] * row[0] + row[1] * row[1] + row[2] * row[2]).sqrt();
            assert!((r - 1.5).abs() < 1e-9);
        }
    }

    #[test]
    fn test_torus_distance_band() {
        let mut rng = StdRng::seed_from_u64(3);
        let points = torus(50, 2.0, 0.5, 0.0, &mut rng);
        for row in points.rows() {
            // Distance from the torus circle axis stays within the tube.
            let ring = (row[0] * row[0] + row[1] * row[1]).sqrt();
            let tube = ((ring - 2.0).powi(2) + row[2] * row[2]).sqrt();
            assert!((tube - 0.5).abs() < 1e-9);
        }
    }

    #[test]
    fn test_noise_perturbs() {
        let mut rng = StdRng::seed_from_u64(4);
        let clean = circle(10, 1.0, 0.0, &mut rng);
        let mut rng = StdRng::seed_from_u64(4);
        let noisy = circle(10, 1.0, 0.2, &mut rng);
        assert_ne!(clean, noisy);
    }
}
