//! HTML pages.

use std::fmt::{Display, Formatter};

use crate::{
    dataset::Dataset,
    fmt::{Escaped, FormattedAmount, FormattedPercentage},
    forecast::Forecast,
};

/// Returned verbatim by every page when the dataset cannot be loaded.
pub const DATA_UNAVAILABLE: &str = "<h1>CSV data is empty or not found.</h1>";

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css">
"#;

/// Dataset table followed by the prediction form.
pub struct IndexPage<'a>(pub &'a Dataset);

impl Display for IndexPage<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(HEAD)?;
        writeln!(f, "<title>Waste handling</title>\n</head>\n<body>\n<div class=\"container\">")?;
        writeln!(f, "<h1>Waste handling</h1>")?;
        writeln!(f, "{}", DatasetTable(self.0))?;
        writeln!(f, "<h2>Forecast</h2>")?;
        writeln!(f, r#"<form action="/predict" method="post" class="row g-2">"#)?;
        writeln!(f, r#"<div class="col-auto"><label for="year" class="col-form-label">Year</label></div>"#)?;
        writeln!(
            f,
            r#"<div class="col-auto"><input type="number" id="year" name="year" class="form-control" required></div>"#
        )?;
        writeln!(f, r#"<div class="col-auto"><button type="submit" class="btn btn-primary">Predict</button></div>"#)?;
        writeln!(f, "</form>\n</div>\n</body>\n</html>")
    }
}

/// Whole dataset as an HTML table, without the row index.
pub struct DatasetTable<'a>(pub &'a Dataset);

impl Display for DatasetTable<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, r#"<table border="1" class="dataframe table table-striped">"#)?;
        writeln!(f, "<thead>\n<tr style=\"text-align: right;\">")?;
        for header in self.0.headers() {
            writeln!(f, "<th>{}</th>", Escaped(header))?;
        }
        writeln!(f, "</tr>\n</thead>\n<tbody>")?;
        for record in self.0.records() {
            f.write_str("<tr>")?;
            for cell in record {
                write!(f, "<td>{}</td>", Escaped(cell))?;
            }
            writeln!(f, "</tr>")?;
        }
        write!(f, "</tbody>\n</table>")
    }
}

pub struct PredictionPage<'a>(pub &'a Forecast);

impl Display for PredictionPage<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Forecast { year, result } = self.0;

        f.write_str(HEAD)?;
        writeln!(f, "<title>Forecast for {year}</title>\n</head>\n<body>\n<div class=\"container\">")?;
        writeln!(f, "<h1>Forecast for {year}</h1>")?;

        if result.is_empty() {
            writeln!(f, "<p>No usable result: the waste amount column could not be simulated.</p>")?;
        } else {
            writeln!(
                f,
                r#"<p>Estimated waste amount: <strong>{}</strong></p>"#,
                FormattedAmount(result.point_estimate),
            )?;
            writeln!(f, "<h2>Probabilities</h2>\n<ul>")?;
            for (outlook, probability) in &result.probabilities {
                writeln!(f, "<li>{outlook}: {}</li>", FormattedPercentage(*probability))?;
            }
            writeln!(f, "</ul>\n<h2>Percentiles</h2>\n<ul>")?;
            for (percentile, value) in &result.percentiles {
                writeln!(f, "<li>{percentile}: {}</li>", FormattedAmount(*value))?;
            }
            writeln!(f, "</ul>")?;
        }

        writeln!(f, r#"<a href="/" class="btn btn-secondary">Back</a>"#)?;
        writeln!(f, "</div>\n</body>\n</html>")
    }
}
