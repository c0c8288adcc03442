//! Error types for the spei-aggregate crate.

/// Error type for all fallible operations in the spei-aggregate crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AggregateError {
    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a calendar month is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month value.
        month: u8,
    },

    /// Wraps a table construction failure.
    #[error("table error: {reason}")]
    Table {
        /// Description of the underlying failure.
        reason: String,
    },
}

impl From<spei_table::TableError> for AggregateError {
    fn from(e: spei_table::TableError) -> Self {
        AggregateError::Table {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_config() {
        let e = AggregateError::InvalidConfig {
            reason: "end_year 1960 is before start_year 1961".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "invalid configuration: end_year 1960 is before start_year 1961"
        );
    }

    #[test]
    fn error_invalid_month() {
        let e = AggregateError::InvalidMonth { month: 0 };
        assert_eq!(e.to_string(), "invalid month: 0 (must be 1..=12)");
    }

    #[test]
    fn from_table_error() {
        let e: AggregateError = spei_table::TableError::SchemaMismatch.into();
        assert!(matches!(e, AggregateError::Table { .. }));
        assert!(e.to_string().starts_with("table error:"));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<AggregateError>();
    }
}
