//! Date-indexed, column-major area series.

use std::collections::HashMap;

use spei_calendar::YearMonth;

use crate::area::{AreaId, AreaSchema};
use crate::error::TableError;
use crate::observation::column_indices;

/// A date-indexed table with one column per area.
///
/// Storage is column-major because every consumer (differencing, fitting)
/// works on whole area columns. `columns[c][r]` is the value of area `c` at
/// `dates[r]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    schema: AreaSchema,
    dates: Vec<YearMonth>,
    columns: Vec<Vec<Option<f64>>>,
}

impl Series {
    /// Creates a series after validating its shape.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ShapeMismatch`] if the column count differs from
    /// the schema or any column length differs from the date index.
    pub fn new(
        schema: AreaSchema,
        dates: Vec<YearMonth>,
        columns: Vec<Vec<Option<f64>>>,
    ) -> Result<Self, TableError> {
        if columns.len() != schema.len() {
            return Err(TableError::ShapeMismatch {
                reason: format!(
                    "{} columns for a schema of {} areas",
                    columns.len(),
                    schema.len()
                ),
            });
        }
        if let Some((c, col)) = columns
            .iter()
            .enumerate()
            .find(|(_, col)| col.len() != dates.len())
        {
            return Err(TableError::ShapeMismatch {
                reason: format!(
                    "column {c} has {} rows, index has {}",
                    col.len(),
                    dates.len()
                ),
            });
        }
        Ok(Self {
            schema,
            dates,
            columns,
        })
    }

    /// An empty series over `schema`.
    pub fn empty(schema: AreaSchema) -> Self {
        let columns = vec![Vec::new(); schema.len()];
        Self {
            schema,
            dates: Vec::new(),
            columns,
        }
    }

    /// The area columns.
    pub fn schema(&self) -> &AreaSchema {
        &self.schema
    }

    /// Area identifiers in column order.
    pub fn areas(&self) -> &[AreaId] {
        self.schema.areas()
    }

    /// The date index.
    pub fn dates(&self) -> &[YearMonth] {
        &self.dates
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.dates.len()
    }

    /// Returns `true` if the series has no rows.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// All columns in schema order.
    pub fn columns(&self) -> &[Vec<Option<f64>>] {
        &self.columns
    }

    /// Column `c`.
    ///
    /// # Panics
    ///
    /// Panics if `c` is out of bounds.
    pub fn column(&self, c: usize) -> &[Option<f64>] {
        &self.columns[c]
    }

    /// Column for `area`, if present.
    pub fn column_by_id(&self, area: &AreaId) -> Option<&[Option<f64>]> {
        self.schema.position(area).map(|c| self.columns[c].as_slice())
    }

    /// Value at row `r` of column `c`.
    pub fn value(&self, r: usize, c: usize) -> Option<f64> {
        self.columns.get(c).and_then(|col| col.get(r).copied().flatten())
    }

    /// Projects onto `schema`, a subset of this series' areas.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ShapeMismatch`] if `schema` names an unknown area.
    pub fn select(&self, schema: &AreaSchema) -> Result<Series, TableError> {
        let indices = column_indices(&self.schema, schema)?;
        Ok(Series {
            schema: schema.clone(),
            dates: self.dates.clone(),
            columns: indices.iter().map(|&i| self.columns[i].clone()).collect(),
        })
    }

    /// Re-indexes onto `dates`. Dates absent from this series get missing
    /// values in every column.
    pub fn reindex(&self, dates: &[YearMonth]) -> Series {
        let lookup: HashMap<YearMonth, usize> = self
            .dates
            .iter()
            .enumerate()
            .map(|(r, &d)| (d, r))
            .collect();
        let rows: Vec<Option<usize>> = dates.iter().map(|d| lookup.get(d).copied()).collect();
        let columns = self
            .columns
            .iter()
            .map(|col| rows.iter().map(|r| r.and_then(|r| col[r])).collect())
            .collect();
        Series {
            schema: self.schema.clone(),
            dates: dates.to_vec(),
            columns,
        }
    }

    /// Applies `f` to every present value.
    pub fn map_values<F>(&self, f: F) -> Series
    where
        F: Fn(f64) -> f64,
    {
        let columns = self
            .columns
            .iter()
            .map(|col| col.iter().map(|v| v.map(&f)).collect())
            .collect();
        Series {
            schema: self.schema.clone(),
            dates: self.dates.clone(),
            columns,
        }
    }

    /// Stacks `parts` vertically, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::SchemaMismatch`] if the parts do not all share
    /// one schema.
    pub fn concat(parts: Vec<Series>) -> Result<Series, TableError> {
        let mut iter = parts.into_iter();
        let Some(mut out) = iter.next() else {
            return Ok(Series::empty(AreaSchema::default()));
        };
        for part in iter {
            if part.schema != out.schema {
                return Err(TableError::SchemaMismatch);
            }
            out.dates.extend(part.dates);
            for (dst, src) in out.columns.iter_mut().zip(part.columns) {
                dst.extend(src);
            }
        }
        Ok(out)
    }

    /// Reorders rows by ascending date. Rows with equal dates keep their
    /// relative order.
    pub fn sort_by_date(self) -> Series {
        let mut order: Vec<usize> = (0..self.dates.len()).collect();
        order.sort_by_key(|&r| self.dates[r]);
        let dates = order.iter().map(|&r| self.dates[r]).collect();
        let columns = self
            .columns
            .iter()
            .map(|col| order.iter().map(|&r| col[r]).collect())
            .collect();
        Series {
            schema: self.schema,
            dates,
            columns,
        }
    }

    /// Consumes the series, returning `(schema, dates, columns)`.
    pub fn into_parts(self) -> (AreaSchema, Vec<YearMonth>, Vec<Vec<Option<f64>>>) {
        (self.schema, self.dates, self.columns)
    }
}
