use clap::Parser;

use crate::{cli::DatasetArgs, prelude::*, tables::build_dataset_table};

#[derive(Parser)]
pub struct ShowArgs {
    #[clap(flatten)]
    dataset: DatasetArgs,
}

impl ShowArgs {
    pub fn run(self) -> Result {
        let dataset = self.dataset.load().context("the dataset is unavailable")?;
        println!("{}", build_dataset_table(&dataset, &self.dataset.column));
        Ok(())
    }
}
