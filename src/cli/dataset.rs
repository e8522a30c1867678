use std::path::PathBuf;

use clap::Parser;

use crate::dataset::{DataUnavailable, Dataset};

#[derive(Clone, Parser)]
pub struct DatasetArgs {
    /// CSV file with the historical waste handling data.
    #[clap(long = "dataset-path", default_value = "jumlah_capaian_penanganan_sampah.csv")]
    pub path: PathBuf,

    /// Numeric column with the waste amount.
    #[clap(long = "dataset-column", default_value = "jumlah_sampah")]
    pub column: String,
}

impl DatasetArgs {
    /// Load the dataset afresh.
    pub fn load(&self) -> Result<Dataset, DataUnavailable> {
        Dataset::load(&self.path)
    }
}
