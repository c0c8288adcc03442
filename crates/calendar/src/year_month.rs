//! Year-month date type.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;

/// A calendar month with year context.
///
/// Ordering is chronological: `(year, month)` compared lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u8,
}

impl YearMonth {
    /// Creates a new `YearMonth`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
    pub fn new(year: i32, month: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        Ok(Self { year, month })
    }

    /// Builds a `YearMonth` from a month count since January of year 0.
    pub fn from_ordinal(ordinal: i64) -> Self {
        let year = ordinal.div_euclid(12) as i32;
        let month = (ordinal.rem_euclid(12) + 1) as u8;
        Self { year, month }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Number of months since January of year 0.
    pub fn ordinal(self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month - 1)
    }

    /// Returns the month `n` months earlier.
    pub fn months_before(self, n: u32) -> Self {
        Self::from_ordinal(self.ordinal() - i64::from(n))
    }

    /// Returns the month `n` months later.
    pub fn months_after(self, n: u32) -> Self {
        Self::from_ordinal(self.ordinal() + i64::from(n))
    }

    /// Returns the following month.
    pub fn next(self) -> Self {
        self.months_after(1)
    }

    /// Signed number of months from `self` to `other`.
    pub fn months_until(self, other: Self) -> i64 {
        other.ordinal() - self.ordinal()
    }
}

impl fmt::Display for YearMonth {
    /// Renders as the first day of the month, `YYYY-MM-01`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-01", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = CalendarError;

    /// Parses `YYYY-MM` or `YYYY-MM-DD`. The day component is discarded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidFormat {
            input: s.to_string(),
        };
        let mut parts = s.trim().split('-');
        let year: i32 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let month: u8 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        if let Some(day) = parts.next() {
            match day.parse::<u8>() {
                Ok(d) if (1..=31).contains(&d) => {}
                _ => return Err(invalid()),
            }
        }
        if parts.next().is_some() {
            return Err(invalid());
        }
        Self::new(year, month)
    }
}
