//! Error types for the spei-calendar crate.

/// Error type for all fallible operations in the spei-calendar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a date string cannot be parsed.
    #[error("invalid date '{input}': expected YYYY-MM or YYYY-MM-DD")]
    InvalidFormat {
        /// The text that failed to parse.
        input: String,
    },
}
