use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
};

use csv::StringRecord;

use crate::prelude::*;

/// Reasons for the dataset to be unavailable.
#[derive(Debug, thiserror::Error)]
pub enum DataUnavailable {
    #[error("failed to read `{}`", path.display())]
    Read {
        path: PathBuf,

        #[source]
        source: csv::Error,
    },

    #[error("`{}` contains no rows", path.display())]
    Empty { path: PathBuf },
}

/// In-memory tabular dataset. Cells are kept verbatim.
#[must_use]
#[derive(Clone, Debug)]
pub struct Dataset {
    headers: StringRecord,
    records: Vec<StringRecord>,
}

impl Dataset {
    /// Read the CSV file at `path`.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, DataUnavailable> {
        let dataset = File::open(path)
            .map_err(csv::Error::from)
            .and_then(Self::from_reader)
            .map_err(|source| DataUnavailable::Read { path: path.to_path_buf(), source })?;
        if dataset.is_empty() {
            return Err(DataUnavailable::Empty { path: path.to_path_buf() });
        }
        info!(n_rows = dataset.len(), n_columns = dataset.headers.len(), "loaded");
        Ok(dataset)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, csv::Error> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let headers = reader.headers()?.clone();
        let records = reader.records().collect::<Result<_, _>>()?;
        Ok(Self { headers, records })
    }

    pub const fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn records(&self) -> &[StringRecord] {
        &self.records
    }

    pub const fn len(&self) -> usize {
        self.records.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Parse the numeric column with the specified header.
    pub fn column(&self, name: &str) -> Result<Vec<f64>> {
        let index = self
            .headers
            .iter()
            .position(|header| header == name)
            .with_context(|| format!("no `{name}` column"))?;
        self.records
            .iter()
            .enumerate()
            .map(|(row, record)| {
                let cell = record.get(index).unwrap_or_default().trim();
                cell.parse::<f64>()
                    .with_context(|| format!("row #{}: `{cell}` is not a number", row + 1))
            })
            .collect()
    }
}
