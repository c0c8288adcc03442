//! Error types for the spei-table crate.

use spei_calendar::YearMonth;

use crate::area::AreaId;

/// Error type for all fallible operations in the spei-table crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    /// Returned when an area identifier appears more than once in a schema.
    #[error("duplicate area identifier '{area}'")]
    DuplicateArea {
        /// The repeated identifier.
        area: AreaId,
    },

    /// Returned when two observation rows share the same year and month.
    #[error("duplicate observation for {date}")]
    DuplicateDate {
        /// The repeated date.
        date: YearMonth,
    },

    /// Returned when an observation row does not have one value per area.
    #[error("row for {date} has {got} values, schema has {expected} areas")]
    RowWidth {
        /// Date of the offending row.
        date: YearMonth,
        /// Number of areas in the schema.
        expected: usize,
        /// Number of values in the row.
        got: usize,
    },

    /// Returned when series columns do not match the schema or date index.
    #[error("series shape mismatch: {reason}")]
    ShapeMismatch {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when series being concatenated have different areas.
    #[error("cannot concatenate series with different area schemas")]
    SchemaMismatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_duplicate_area() {
        let e = TableError::DuplicateArea {
            area: AreaId::new("28001"),
        };
        assert_eq!(e.to_string(), "duplicate area identifier '28001'");
    }

    #[test]
    fn error_duplicate_date() {
        let e = TableError::DuplicateDate {
            date: YearMonth::new(1961, 4).unwrap(),
        };
        assert_eq!(e.to_string(), "duplicate observation for 1961-04-01");
    }

    #[test]
    fn error_row_width() {
        let e = TableError::RowWidth {
            date: YearMonth::new(2000, 1).unwrap(),
            expected: 3,
            got: 2,
        };
        assert_eq!(
            e.to_string(),
            "row for 2000-01-01 has 2 values, schema has 3 areas"
        );
    }

    #[test]
    fn error_shape_mismatch() {
        let e = TableError::ShapeMismatch {
            reason: "column 1 has 4 rows, index has 5".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "series shape mismatch: column 1 has 4 rows, index has 5"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<TableError>();
    }
}
