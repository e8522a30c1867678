use std::collections::BTreeMap;

use average::{Mean, Variance};
use bon::Builder;
use ordered_float::OrderedFloat;

use crate::{
    core::{Outlook, Percentile, Sampler},
    prelude::*,
};

/// Monte Carlo estimator over a single historical column.
#[must_use]
#[derive(Copy, Clone, Debug, Builder)]
pub struct Estimator {
    /// Synthetic draw size.
    #[builder(default = 1000)]
    pub n_simulations: usize,
}

impl Default for Estimator {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationResult {
    /// Mean of the synthetic draw.
    pub point_estimate: f64,

    /// Band percentages, `0..=100` each. The bands overlap and do not have to sum up to 100.
    pub probabilities: BTreeMap<Outlook, f64>,

    pub percentiles: BTreeMap<Percentile, f64>,
}

impl SimulationResult {
    /// «No usable result».
    pub const fn empty() -> Self {
        Self { point_estimate: 0.0, probabilities: BTreeMap::new(), percentiles: BTreeMap::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty() && self.percentiles.is_empty()
    }
}

impl Estimator {
    /// Draw the synthetic sample set from the normal distribution fitted to `samples`
    /// and summarize it.
    ///
    /// Never fails: any failure is logged and folded into [`SimulationResult::empty`].
    #[instrument(skip_all, fields(n_samples = samples.len(), n_simulations = self.n_simulations))]
    pub fn estimate<S: Sampler + ?Sized>(
        &self,
        samples: &[f64],
        sampler: &mut S,
    ) -> SimulationResult {
        match self.try_estimate(samples, sampler) {
            Ok(result) => result,
            Err(error) => {
                warn!("falling back to the empty result: {error:#}");
                SimulationResult::empty()
            }
        }
    }

    fn try_estimate<S: Sampler + ?Sized>(
        &self,
        samples: &[f64],
        sampler: &mut S,
    ) -> Result<SimulationResult> {
        let moments: Variance = samples.iter().copied().collect();
        ensure!(!moments.is_empty(), "no samples");
        let mean = moments.mean();
        let std_dev = moments.population_variance().sqrt();
        ensure!(
            mean.is_finite() && std_dev.is_finite(),
            "non-finite moments: mean = {mean}, standard deviation = {std_dev}",
        );
        debug!(mean, std_dev, "fitted");

        let mut draw = sampler.sample_normal(mean, std_dev, self.n_simulations)?;
        ensure!(!draw.is_empty(), "empty synthetic draw");

        let point_estimate = draw.iter().copied().collect::<Mean>().mean();

        #[allow(clippy::cast_precision_loss)]
        let n_draws = draw.len() as f64;
        let probabilities = Outlook::ALL
            .into_iter()
            .map(|outlook| {
                #[allow(clippy::cast_precision_loss)]
                let n_hits = draw
                    .iter()
                    .filter(|value| outlook.contains(**value, mean, std_dev))
                    .count() as f64;
                (outlook, 100.0 * n_hits / n_draws)
            })
            .collect();

        draw.sort_unstable_by_key(|value| OrderedFloat(*value));
        let percentiles = Percentile::ALL
            .into_iter()
            .filter_map(|percentile| Some((percentile, percentile.of_sorted(&draw)?)))
            .collect();

        Ok(SimulationResult { point_estimate, probabilities, percentiles })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use itertools::Itertools;

    use super::*;
    use crate::core::RngSampler;

    const SAMPLES: [f64; 5] = [10.0, 20.0, 30.0, 40.0, 50.0];

    /// Replays the same draw regardless of the requested distribution.
    struct ReplaySampler(Vec<f64>);

    impl Sampler for ReplaySampler {
        fn sample_normal(&mut self, _mean: f64, _std_dev: f64, n: usize) -> Result<Vec<f64>> {
            Ok(self.0.iter().copied().cycle().take(n).collect())
        }
    }

    struct FailingSampler;

    impl Sampler for FailingSampler {
        fn sample_normal(&mut self, _mean: f64, _std_dev: f64, _n: usize) -> Result<Vec<f64>> {
            bail!("out of entropy")
        }
    }

    fn large_estimator() -> Estimator {
        Estimator::builder().n_simulations(100_000).build()
    }

    #[test]
    fn default_draw_size() {
        assert_eq!(Estimator::default().n_simulations, 1000);
    }

    #[test]
    fn empty_samples() {
        let result = Estimator::default().estimate(&[], &mut RngSampler::seeded(42));
        assert_eq!(result, SimulationResult::empty());
        assert!(result.is_empty());
        assert_abs_diff_eq!(result.point_estimate, 0.0);
    }

    #[test]
    fn non_finite_samples() {
        let result = Estimator::default().estimate(&[1.0, f64::NAN], &mut RngSampler::seeded(42));
        assert!(result.is_empty());
    }

    #[test]
    fn zero_simulations() {
        let estimator = Estimator::builder().n_simulations(0).build();
        assert!(estimator.estimate(&SAMPLES, &mut RngSampler::seeded(42)).is_empty());
    }

    #[test]
    fn sampler_failure() {
        assert!(Estimator::default().estimate(&SAMPLES, &mut FailingSampler).is_empty());
    }

    #[test]
    fn bands_use_historical_moments() {
        // Historical mean is 30, population standard deviation is √200 ≈ 14.14.
        let mut sampler = ReplaySampler(vec![0.0, 20.0, 30.0, 40.0, 110.0]);
        let result = Estimator::builder().n_simulations(5).build().estimate(&SAMPLES, &mut sampler);

        // The draw mean is 40, but the bands are still measured against 30.
        assert_abs_diff_eq!(result.point_estimate, 40.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.probabilities[&Outlook::Increase], 40.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.probabilities[&Outlook::Decrease], 40.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.probabilities[&Outlook::Stable], 60.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.percentiles[&Percentile::P50], 30.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.percentiles[&Percentile::P90], 82.0, epsilon = 1e-9);
    }

    #[test]
    fn single_sample_is_fully_stable() {
        let result = Estimator::default().estimate(&[5.0], &mut RngSampler::seeded(42));
        assert_abs_diff_eq!(result.point_estimate, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.probabilities[&Outlook::Increase], 0.0);
        assert_abs_diff_eq!(result.probabilities[&Outlook::Decrease], 0.0);
        assert_abs_diff_eq!(result.probabilities[&Outlook::Stable], 100.0);
    }

    #[test]
    fn percentiles_are_non_decreasing() {
        let inputs: [&[f64]; 4] =
            [&SAMPLES, &[1.0], &[-5.0, 5.0], &[1e6, 3e6, 2e6, 7.5e5, 1.25e6]];
        for (seed, samples) in inputs.into_iter().enumerate() {
            let result = Estimator::default().estimate(samples, &mut RngSampler::seeded(seed as u64));
            let values = Percentile::ALL.map(|percentile| result.percentiles[&percentile]);
            assert!(
                values.iter().tuple_windows().all(|(left, right)| left <= right),
                "{values:?}",
            );
        }
    }

    #[test]
    fn increase_and_decrease_are_bounded() {
        for seed in 0..10 {
            let result = Estimator::default().estimate(&SAMPLES, &mut RngSampler::seeded(seed));
            let increase = result.probabilities[&Outlook::Increase];
            let decrease = result.probabilities[&Outlook::Decrease];
            let stable = result.probabilities[&Outlook::Stable];
            assert!((0.0..=100.0).contains(&increase));
            assert!((0.0..=100.0).contains(&decrease));
            assert!((0.0..=100.0).contains(&stable));
            assert!(increase + decrease <= 100.0 + 1e-9);
        }
    }

    #[test]
    fn seeded_is_reproducible() {
        let left = Estimator::default().estimate(&SAMPLES, &mut RngSampler::seeded(1337));
        let right = Estimator::default().estimate(&SAMPLES, &mut RngSampler::seeded(1337));
        assert_eq!(left.point_estimate.to_bits(), right.point_estimate.to_bits());
        assert_eq!(left, right);
    }

    #[test]
    fn large_draw_scenario() {
        let result = large_estimator().estimate(&SAMPLES, &mut RngSampler::seeded(42));
        assert_abs_diff_eq!(result.point_estimate, 30.0, epsilon = 1.0);
        assert_abs_diff_eq!(result.probabilities[&Outlook::Stable], 68.27, epsilon = 5.0);
        assert_abs_diff_eq!(result.probabilities[&Outlook::Increase], 50.0, epsilon = 5.0);
        assert_abs_diff_eq!(result.percentiles[&Percentile::P50], 30.0, epsilon = 1.0);
    }

    #[test]
    fn large_draw_unseeded() {
        let result = large_estimator().estimate(&SAMPLES, &mut RngSampler::from_entropy());
        assert_abs_diff_eq!(result.probabilities[&Outlook::Stable], 68.27, epsilon = 5.0);
    }
}
