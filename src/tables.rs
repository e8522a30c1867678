use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::SimulationResult,
    dataset::Dataset,
    fmt::{FormattedAmount, FormattedPercentage},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

pub fn build_dataset_table(dataset: &Dataset, numeric_column: &str) -> Table {
    let mut table = new_table();
    table.set_header(dataset.headers().iter().map(|header| {
        let cell = Cell::new(header).add_attribute(Attribute::Bold);
        if header == numeric_column { cell.fg(Color::Cyan) } else { cell }
    }));
    for record in dataset.records() {
        table.add_row(record.iter().zip(dataset.headers()).map(|(value, header)| {
            if header == numeric_column {
                Cell::new(value).set_alignment(CellAlignment::Right).fg(Color::Cyan)
            } else {
                Cell::new(value)
            }
        }));
    }
    table
}

pub fn build_probabilities_table(result: &SimulationResult) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Outlook", "Probability"]);
    for (outlook, probability) in &result.probabilities {
        table.add_row(vec![
            Cell::new(outlook).fg(outlook.color()),
            Cell::new(FormattedPercentage(*probability)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_percentiles_table(result: &SimulationResult) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Percentile"),
        Cell::new("Value").set_alignment(CellAlignment::Right),
    ]);
    for (percentile, value) in &result.percentiles {
        table.add_row(vec![
            Cell::new(percentile).add_attribute(Attribute::Dim),
            Cell::new(FormattedAmount(*value)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{Estimator, RngSampler},
        prelude::*,
    };

    #[test]
    fn dataset_table_ok() -> Result {
        let dataset = Dataset::from_reader("tahun,jumlah_sampah\n2020,10\n2021,20\n".as_bytes())?;
        let table = build_dataset_table(&dataset, "jumlah_sampah");
        assert_eq!(table.row_count(), 2);
        Ok(())
    }

    #[test]
    fn result_tables_ok() {
        let result = Estimator::default().estimate(&[10.0, 20.0, 30.0], &mut RngSampler::seeded(1));
        assert_eq!(build_probabilities_table(&result).row_count(), 3);
        assert_eq!(build_percentiles_table(&result).row_count(), 5);
    }
}
