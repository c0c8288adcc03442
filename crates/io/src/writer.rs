//! Writing date-indexed series to CSV.

use std::path::Path;

use spei_table::Series;
use tracing::info;

use crate::error::IoError;
use crate::labels::AreaLabels;

/// Writes `series` as `Date,<area>...` with one row per date.
///
/// Dates are written as `YYYY-MM-01` and missing values as empty cells.
/// When `labels` is given, area columns are headed by display names instead
/// of identifiers.
///
/// # Errors
///
/// Returns [`IoError::Csv`] if the file cannot be created or written.
pub fn write_series(
    path: impl AsRef<Path>,
    series: &Series,
    labels: Option<&AreaLabels>,
) -> Result<(), IoError> {
    let path = path.as_ref();
    let csv_error = |e: csv::Error| IoError::Csv {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;

    let mut header = Vec::with_capacity(series.schema().len() + 1);
    header.push("Date".to_string());
    for area in series.schema().areas() {
        let name = match labels {
            Some(l) => l.display_name(area),
            None => area.as_str(),
        };
        header.push(name.to_string());
    }
    writer.write_record(&header).map_err(csv_error)?;

    let mut record = Vec::with_capacity(header.len());
    for (r, date) in series.dates().iter().enumerate() {
        record.clear();
        record.push(date.to_string());
        for c in 0..series.schema().len() {
            record.push(series.value(r, c).map(|v| v.to_string()).unwrap_or_default());
        }
        writer.write_record(&record).map_err(csv_error)?;
    }
    writer.flush().map_err(|e| IoError::Csv {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    info!(
        path = %path.display(),
        rows = series.n_rows(),
        areas = series.schema().len(),
        "series written"
    );
    Ok(())
}
