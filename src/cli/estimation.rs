use clap::Parser;
use rand::rngs::StdRng;

use crate::core::{Estimator, RngSampler};

#[derive(Copy, Clone, Parser)]
pub struct EstimationArgs {
    /// Number of synthetic values to draw per forecast.
    #[clap(long = "n-simulations", default_value = "1000")]
    pub n_simulations: usize,

    /// Random seed, makes every forecast reproducible.
    #[clap(long)]
    pub seed: Option<u64>,
}

impl EstimationArgs {
    pub fn estimator(self) -> Estimator {
        Estimator::builder().n_simulations(self.n_simulations).build()
    }

    pub fn sampler(self) -> RngSampler<StdRng> {
        self.seed.map_or_else(RngSampler::from_entropy, RngSampler::seeded)
    }
}
