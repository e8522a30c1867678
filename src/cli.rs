mod dataset;
mod estimation;
mod forecast;
mod serve;
mod show;

use clap::{Parser, Subcommand};

pub use self::{dataset::DatasetArgs, estimation::EstimationArgs, serve::ServeArgs};
use crate::{
    cli::{forecast::ForecastArgs, show::ShowArgs},
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Serve the dataset and the forecast form over HTTP.
    Serve(ServeArgs),

    /// Print the dataset.
    Show(ShowArgs),

    /// Run a single forecast and print the result.
    Forecast(ForecastArgs),
}

impl Command {
    pub async fn run(self) -> Result {
        match self {
            Self::Serve(args) => args.run().await,
            Self::Show(args) => args.run(),
            Self::Forecast(args) => args.run(),
        }
    }
}
