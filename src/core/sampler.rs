use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Normal};

use crate::prelude::*;

/// Source of the synthetic draws.
pub trait Sampler {
    /// Draw `n` independent values from `N(mean, std_dev²)`.
    fn sample_normal(&mut self, mean: f64, std_dev: f64, n: usize) -> Result<Vec<f64>>;
}

/// [`Sampler`] backed by a [`rand`] generator.
pub struct RngSampler<R>(R);

impl RngSampler<StdRng> {
    /// Unseeded generator, results vary from run to run.
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    /// Reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Sampler for RngSampler<R> {
    fn sample_normal(&mut self, mean: f64, std_dev: f64, n: usize) -> Result<Vec<f64>> {
        ensure!(std_dev >= 0.0, "standard deviation must be non-negative, got {std_dev}");
        let distribution = Normal::new(mean, std_dev)
            .with_context(|| format!("invalid normal distribution: N({mean}, {std_dev}²)"))?;
        Ok(distribution.sample_iter(&mut self.0).take(n).collect())
    }
}
