//! Reading observation tables from two-header CSV files.

use std::path::{Path, PathBuf};

use csv::StringRecord;
use spei_calendar::YearMonth;
use spei_table::{AreaId, AreaSchema, ObservationRow, ObservationTable};
use tracing::{debug, info};

use crate::error::IoError;
use crate::labels::AreaLabels;

/// Leading columns before the area values: year, month, status.
const LEADING: usize = 3;

/// An observation table with the display names read from its header.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationData {
    /// Monthly rows, sorted by date.
    pub table: ObservationTable,
    /// Display name per area identifier.
    pub labels: AreaLabels,
}

fn csv_error(path: &Path) -> impl Fn(csv::Error) -> IoError + '_ {
    move |e| IoError::Csv {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}

fn malformed(path: &Path, reason: impl Into<String>) -> IoError {
    IoError::MalformedHeader {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}

/// Parses a value cell. Empty, `NA` and `NaN` cells are missing, as are
/// values that parse to a non-finite number.
pub(crate) fn parse_value(cell: &str) -> Result<Option<f64>, ()> {
    if cell.is_empty() || cell.eq_ignore_ascii_case("na") || cell.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    let v: f64 = cell.parse().map_err(|_| ())?;
    Ok(v.is_finite().then_some(v))
}

/// Reads a monthly observation table.
///
/// The file has two header lines followed by data rows:
///
/// ```text
/// Year,Month,Status,Trent at Colwick,Tyne at Bywell
/// ,,,28001,23001
/// 1961,1,E,84.2,101.7
/// ```
///
/// The first line holds display names, the second the area identifiers; the
/// first three cells of both are ignored. Data rows are `year, month, status`
/// followed by one value per area.
///
/// # Errors
///
/// - [`IoError::FileNotFound`] if `path` does not exist.
/// - [`IoError::MalformedHeader`] if either header line is missing, has no
///   area columns, or has a blank or duplicated identifier.
/// - [`IoError::RowWidth`] / [`IoError::InvalidCell`] for bad data rows.
/// - [`IoError::Table`] for duplicate dates.
pub fn read_observations(path: impl AsRef<Path>) -> Result<ObservationData, IoError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: PathBuf::from(path),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_error(path))?;
    let mut records = reader.records();

    let names = records
        .next()
        .ok_or_else(|| malformed(path, "file is empty"))?
        .map_err(csv_error(path))?;
    let ids = records
        .next()
        .ok_or_else(|| malformed(path, "missing identifier line"))?
        .map_err(csv_error(path))?;

    if names.len() <= LEADING {
        return Err(malformed(path, "no area columns"));
    }
    if ids.len() != names.len() {
        return Err(malformed(
            path,
            format!(
                "identifier line has {} cells, name line has {}",
                ids.len(),
                names.len()
            ),
        ));
    }

    let areas: Vec<AreaId> = ids.iter().skip(LEADING).map(AreaId::new).collect();
    if let Some(pos) = areas.iter().position(|a| a.as_str().is_empty()) {
        return Err(malformed(
            path,
            format!("blank identifier in column {}", pos + LEADING + 1),
        ));
    }
    let labels: AreaLabels = areas
        .iter()
        .cloned()
        .zip(names.iter().skip(LEADING).map(str::to_string))
        .collect();
    let schema = AreaSchema::new(areas).map_err(|e| malformed(path, e.to_string()))?;

    let width = names.len();
    let mut rows = Vec::new();
    for result in records {
        let record = result.map_err(csv_error(path))?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        rows.push(parse_row(&record, &schema, width)?);
    }

    let table = ObservationTable::new(schema, rows)?;
    if let Some((first, last)) = table.date_range() {
        info!(
            path = %path.display(),
            areas = table.schema().len(),
            rows = table.len(),
            %first,
            %last,
            "observations read"
        );
    } else {
        debug!(path = %path.display(), "observation file has no data rows");
    }
    Ok(ObservationData { table, labels })
}

fn parse_row(
    record: &StringRecord,
    schema: &AreaSchema,
    width: usize,
) -> Result<ObservationRow, IoError> {
    let line = line_of(record);
    if record.len() != width {
        return Err(IoError::RowWidth {
            line,
            expected: width,
            got: record.len(),
        });
    }
    let invalid = |column: &str, value: &str| IoError::InvalidCell {
        line,
        column: column.to_string(),
        value: value.to_string(),
    };

    let year_cell = &record[0];
    let month_cell = &record[1];
    let year: i32 = year_cell.parse().map_err(|_| invalid("Year", year_cell))?;
    let date = month_cell
        .parse::<u8>()
        .ok()
        .and_then(|m| YearMonth::new(year, m).ok())
        .ok_or_else(|| invalid("Month", month_cell))?;

    let values = schema
        .areas()
        .iter()
        .zip(record.iter().skip(LEADING))
        .map(|(area, cell)| parse_value(cell).map_err(|()| invalid(area.as_str(), cell)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ObservationRow::new(date, &record[2], values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_value_missing_markers() {
        assert_eq!(parse_value(""), Ok(None));
        assert_eq!(parse_value("NA"), Ok(None));
        assert_eq!(parse_value("nan"), Ok(None));
        assert_eq!(parse_value("NaN"), Ok(None));
        assert_eq!(parse_value("inf"), Ok(None));
    }

    #[test]
    fn parse_value_numbers() {
        assert_eq!(parse_value("12.5"), Ok(Some(12.5)));
        assert_eq!(parse_value("-3"), Ok(Some(-3.0)));
        assert_eq!(parse_value("1e2"), Ok(Some(100.0)));
    }

    #[test]
    fn parse_value_garbage() {
        assert_eq!(parse_value("abc"), Err(()));
        assert_eq!(parse_value("1,2"), Err(()));
    }
}
