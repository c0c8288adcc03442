//! Error types for spei-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the spei-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the csv crate or the filesystem.
    #[error("csv error in {}: {reason}", path.display())]
    Csv {
        /// File being read or written.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when the two header lines are missing or inconsistent.
    #[error("malformed header in {}: {reason}", path.display())]
    MalformedHeader {
        /// File being read.
        path: PathBuf,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a data cell cannot be parsed.
    #[error("invalid {column} value '{value}' on line {line}")]
    InvalidCell {
        /// 1-based line number in the file.
        line: u64,
        /// Column header of the offending cell.
        column: String,
        /// Raw cell text.
        value: String,
    },

    /// Returned when a data row has the wrong number of cells.
    #[error("line {line}: expected {expected} cells, got {got}")]
    RowWidth {
        /// 1-based line number in the file.
        line: u64,
        /// Cells in the header.
        expected: usize,
        /// Cells in the row.
        got: usize,
    },

    /// Wraps an error originating from the spei-table crate.
    #[error("table error: {reason}")]
    Table {
        /// Description of the underlying table failure.
        reason: String,
    },
}

impl From<spei_table::TableError> for IoError {
    fn from(e: spei_table::TableError) -> Self {
        IoError::Table {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/missing.csv");
    }

    #[test]
    fn display_csv() {
        let err = IoError::Csv {
            path: PathBuf::from("rain.csv"),
            reason: "unequal lengths".to_string(),
        };
        assert_eq!(err.to_string(), "csv error in rain.csv: unequal lengths");
    }

    #[test]
    fn display_malformed_header() {
        let err = IoError::MalformedHeader {
            path: PathBuf::from("pet.csv"),
            reason: "missing identifier row".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed header in pet.csv: missing identifier row"
        );
    }

    #[test]
    fn display_invalid_cell() {
        let err = IoError::InvalidCell {
            line: 7,
            column: "Month".to_string(),
            value: "13".to_string(),
        };
        assert_eq!(err.to_string(), "invalid Month value '13' on line 7");
    }

    #[test]
    fn display_row_width() {
        let err = IoError::RowWidth {
            line: 4,
            expected: 5,
            got: 3,
        };
        assert_eq!(err.to_string(), "line 4: expected 5 cells, got 3");
    }

    #[test]
    fn from_table_error() {
        let err: IoError = spei_table::TableError::SchemaMismatch.into();
        assert!(matches!(err, IoError::Table { .. }));
        assert!(err.to_string().starts_with("table error"));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<IoError>();
    }
}
