use clap::Parser;

use crate::{
    cli::{DatasetArgs, EstimationArgs},
    prelude::*,
    server,
};

#[derive(Parser)]
pub struct ServeArgs {
    #[clap(long, default_value = "0.0.0.0:5000", env = "BIND_ADDRESS")]
    pub bind_address: String,

    #[clap(flatten)]
    pub dataset: DatasetArgs,

    #[clap(flatten)]
    pub estimation: EstimationArgs,
}

impl ServeArgs {
    pub async fn run(self) -> Result {
        server::serve(&self.bind_address, server::AppState::new(self.dataset, self.estimation)).await
    }
}
