//! Monthly observation rows as read from a source dataset.

use spei_calendar::YearMonth;

use crate::area::{AreaId, AreaSchema};
use crate::error::TableError;

/// One monthly observation row.
///
/// `values` are positional: `values[i]` belongs to the `i`-th area of the
/// owning table's schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationRow {
    date: YearMonth,
    status: String,
    values: Vec<Option<f64>>,
}

impl ObservationRow {
    /// Creates a row. Non-finite values are stored as missing.
    pub fn new(date: YearMonth, status: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.filter(|x| x.is_finite()))
            .collect();
        Self {
            date,
            status: status.into(),
            values,
        }
    }

    /// Year and month of the observation.
    pub fn date(&self) -> YearMonth {
        self.date
    }

    /// Year of the observation.
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Month of the observation (1..=12).
    pub fn month(&self) -> u8 {
        self.date.month()
    }

    /// Provider status flag, carried through unchanged.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Per-area values in schema order.
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }
}

/// Monthly observations for a fixed set of areas.
///
/// Rows are held sorted by date with unique `(year, month)` pairs, whatever
/// order they were supplied in.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationTable {
    schema: AreaSchema,
    rows: Vec<ObservationRow>,
}

impl ObservationTable {
    /// Creates a table after validating row widths and date uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::RowWidth`] if a row does not carry exactly one
    /// value per area, or [`TableError::DuplicateDate`] if two rows share a
    /// date.
    pub fn new(schema: AreaSchema, mut rows: Vec<ObservationRow>) -> Result<Self, TableError> {
        for row in &rows {
            if row.values.len() != schema.len() {
                return Err(TableError::RowWidth {
                    date: row.date,
                    expected: schema.len(),
                    got: row.values.len(),
                });
            }
        }

        rows.sort_by_key(|r| r.date);
        if let Some(w) = rows.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(TableError::DuplicateDate { date: w[0].date });
        }

        Ok(Self { schema, rows })
    }

    /// The area columns.
    pub fn schema(&self) -> &AreaSchema {
        &self.schema
    }

    /// All rows, sorted by date.
    pub fn rows(&self) -> &[ObservationRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First and last dates, or `None` for an empty table.
    pub fn date_range(&self) -> Option<(YearMonth, YearMonth)> {
        Some((self.rows.first()?.date, self.rows.last()?.date))
    }

    /// Rows whose date lies in `start..=end`.
    pub fn rows_between(&self, start: YearMonth, end: YearMonth) -> &[ObservationRow] {
        let lo = self.rows.partition_point(|r| r.date < start);
        let hi = self.rows.partition_point(|r| r.date <= end);
        if lo >= hi { &[] } else { &self.rows[lo..hi] }
    }

    /// Projects the table onto `schema`, which must be a subset of this
    /// table's areas. Column order follows `schema`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ShapeMismatch`] if `schema` names an area this
    /// table does not have.
    pub fn select(&self, schema: &AreaSchema) -> Result<ObservationTable, TableError> {
        let indices = column_indices(&self.schema, schema)?;
        let rows = self
            .rows
            .iter()
            .map(|r| ObservationRow {
                date: r.date,
                status: r.status.clone(),
                values: indices.iter().map(|&i| r.values[i]).collect(),
            })
            .collect();
        Ok(ObservationTable {
            schema: schema.clone(),
            rows,
        })
    }
}

/// Maps every area of `target` to its column index in `source`.
pub(crate) fn column_indices(
    source: &AreaSchema,
    target: &AreaSchema,
) -> Result<Vec<usize>, TableError> {
    target
        .areas()
        .iter()
        .map(|a: &AreaId| {
            source.position(a).ok_or_else(|| TableError::ShapeMismatch {
                reason: format!("area '{a}' is not a column of the source"),
            })
        })
        .collect()
}
