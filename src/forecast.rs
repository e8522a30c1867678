use crate::{
    core::{Estimator, Sampler, SimulationResult},
    dataset::Dataset,
    prelude::*,
};

/// Estimate for the requested year.
///
/// Note that the year is only echoed back: the estimate is fitted to the whole historical column
/// and is the same for any year. The bands are also measured against the historical mean rather
/// than the synthetic one. Both are most likely unintended, but kept as is until the forecasting
/// rules are agreed upon.
#[must_use]
#[derive(Clone, Debug)]
pub struct Forecast {
    pub year: i64,
    pub result: SimulationResult,
}

impl Forecast {
    #[instrument(skip_all, fields(year = year, column = column))]
    pub fn run<S: Sampler + ?Sized>(
        dataset: &Dataset,
        column: &str,
        year: i64,
        estimator: &Estimator,
        sampler: &mut S,
    ) -> Self {
        let result = match dataset.column(column) {
            Ok(samples) => estimator.estimate(&samples, sampler),
            Err(error) => {
                warn!("failed to read the samples: {error:#}");
                SimulationResult::empty()
            }
        };
        info!(result.point_estimate, is_empty = result.is_empty(), "done");
        Self { year, result }
    }
}
