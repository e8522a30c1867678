use clap::Parser;

use crate::{
    cli::{DatasetArgs, EstimationArgs},
    fmt::FormattedAmount,
    forecast::Forecast,
    prelude::*,
    tables::{build_percentiles_table, build_probabilities_table},
};

#[derive(Parser)]
pub struct ForecastArgs {
    /// Target year. It is echoed back and does not affect the estimate.
    #[clap(long)]
    year: i64,

    #[clap(flatten)]
    dataset: DatasetArgs,

    #[clap(flatten)]
    estimation: EstimationArgs,
}

impl ForecastArgs {
    pub fn run(self) -> Result {
        let dataset = self.dataset.load().context("the dataset is unavailable")?;
        let forecast = Forecast::run(
            &dataset,
            &self.dataset.column,
            self.year,
            &self.estimation.estimator(),
            &mut self.estimation.sampler(),
        );
        if forecast.result.is_empty() {
            println!("No usable result for {}.", forecast.year);
            return Ok(());
        }
        println!(
            "Estimated waste amount for {}: {}",
            forecast.year,
            FormattedAmount(forecast.result.point_estimate),
        );
        println!("{}", build_probabilities_table(&forecast.result));
        println!("{}", build_percentiles_table(&forecast.result));
        Ok(())
    }
}
