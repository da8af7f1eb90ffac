//! One-sided Gaussian sampling kernel with adaptive radius.
//!
//! The kernel stores the centre weight at index 0 and the weight at distance
//! `i` at index `i`; the blur mirrors it to cover `[-radius, radius]`.

/// `sqrt(-2 ln 0.002)`: distance (in sigmas) where the Gaussian drops to 0.2%
/// of its peak.
pub const TAIL_SIGMAS: f64 = 3.525509352823274;

/// Lower bound on the radius limit; tighter limits skew the normalization.
pub const MIN_RADIUS_LIMIT: usize = 50;

#[derive(Clone, Debug, PartialEq)]
pub struct GaussianKernel {
    sigma: f64,
    radius_limit: usize,
    weights: Vec<f32>,
}

impl GaussianKernel {
    /// Build a kernel for `sigma`, limited to `max_radius` weights (floored to
    /// [`MIN_RADIUS_LIMIT`]).
    ///
    /// When the full tail fits, weights are normalized by their mirrored sum so
    /// that [`mass`](Self::mass) is 1. When the radius had to be cut down, the
    /// divisor is the area of the untruncated Gaussian, `sigma * sqrt(2π)`, so
    /// the truncated kernel keeps a mass slightly below 1.
    ///
    /// Panics if `sigma` is not a finite positive number.
    pub fn build(sigma: f64, max_radius: usize) -> Self {
        assert!(
            sigma.is_finite() && sigma > 0.0,
            "gaussian kernel requires a positive sigma, got {sigma}"
        );
        let radius_limit = max_radius.max(MIN_RADIUS_LIMIT);
        let len = ((sigma * TAIL_SIGMAS).ceil() as usize)
            .saturating_add(1)
            .min(radius_limit);

        let inv_sigma = 1.0 / sigma;
        let raw: Vec<f64> = (0..len)
            .map(|i| {
                let t = i as f64 * inv_sigma;
                (-0.5 * t * t).exp()
            })
            .collect();

        let divisor = if len < radius_limit {
            raw[0] + 2.0 * raw[1..].iter().sum::<f64>()
        } else {
            sigma * (2.0 * std::f64::consts::PI).sqrt()
        };

        Self {
            sigma,
            radius_limit,
            weights: raw.iter().map(|&k| (k / divisor) as f32).collect(),
        }
    }

    /// Weights indexed by distance from the centre.
    #[inline]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Largest offset sampled on either side of the centre.
    #[inline]
    pub fn radius(&self) -> usize {
        self.weights.len() - 1
    }

    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Radius limit after flooring to [`MIN_RADIUS_LIMIT`].
    #[inline]
    pub fn radius_limit(&self) -> usize {
        self.radius_limit
    }

    /// True when the theoretical radius was cut down to the limit.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.weights.len() >= self.radius_limit
    }

    /// Total weight over the mirrored support: `k[0] + 2 Σ k[i]`.
    pub fn mass(&self) -> f64 {
        let tail: f64 = self.weights[1..].iter().map(|&k| k as f64).sum();
        self.weights[0] as f64 + 2.0 * tail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_sigma_kernel_has_expected_length_and_unit_mass() {
        let k = GaussianKernel::build(1.8, 50);
        assert_eq!(k.weights().len(), 8);
        assert_eq!(k.radius(), 7);
        assert!(!k.is_truncated());
        assert!((k.mass() - 1.0).abs() < 1e-5, "mass={}", k.mass());
    }

    #[test]
    fn weights_are_non_negative_and_non_increasing() {
        for &sigma in &[0.1, 0.5, 1.0, 3.3, 9.0, 14.0, 40.0] {
            let k = GaussianKernel::build(sigma, 64);
            let w = k.weights();
            assert!(w.iter().all(|&v| v >= 0.0), "negative weight for sigma={sigma}");
            for pair in w.windows(2) {
                assert!(
                    pair[1] <= pair[0],
                    "kernel not monotone for sigma={sigma}: {:?}",
                    pair
                );
            }
        }
    }

    #[test]
    fn clamped_kernel_keeps_mass_below_one() {
        // Theoretical length ceil(30 * 3.5255) + 1 = 107 exceeds the floor of 50.
        let k = GaussianKernel::build(30.0, 10);
        assert_eq!(k.radius_limit(), MIN_RADIUS_LIMIT);
        assert_eq!(k.weights().len(), MIN_RADIUS_LIMIT);
        assert!(k.is_truncated());
        let mass = k.mass();
        assert!(mass < 1.0, "truncated mass should stay under 1, got {mass}");
        assert!(mass > 0.85, "truncated mass unexpectedly small: {mass}");
    }

    #[test]
    fn radius_limit_is_floored() {
        let k = GaussianKernel::build(2.0, 4);
        assert_eq!(k.radius_limit(), 50);
        assert_eq!(k.weights().len(), 9);
    }

    #[test]
    #[should_panic(expected = "positive sigma")]
    fn rejects_non_positive_sigma() {
        let _ = GaussianKernel::build(0.0, 50);
    }
}
