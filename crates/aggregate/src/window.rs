//! Per-calendar-month accumulation windows.

use spei_calendar::YearMonth;

use crate::error::AggregateError;

/// An inclusive accumulation window `start..=end` at month granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateWindow {
    start: YearMonth,
    end: YearMonth,
}

impl DateWindow {
    /// Creates a window, returning `None` if `start > end`.
    pub fn new(start: YearMonth, end: YearMonth) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// First month of the window.
    pub fn start(self) -> YearMonth {
        self.start
    }

    /// Last month of the window; aggregated rows are dated here.
    pub fn end(self) -> YearMonth {
        self.end
    }

    /// Number of months covered.
    pub fn n_months(self) -> u32 {
        (self.start.months_until(self.end) + 1) as u32
    }

    /// Returns `true` if `date` lies inside the window.
    pub fn contains(self, date: YearMonth) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Builds one window per year in `start_year..=end_year`, in increasing year
/// order. Each window ends at `(year, month)` and starts `length - 1` months
/// earlier.
///
/// # Errors
///
/// Returns [`AggregateError::InvalidConfig`] if `end_year < start_year` or
/// `length < 1`, and [`AggregateError::InvalidMonth`] if `month` is outside
/// 1..=12.
pub fn generate_windows(
    start_year: i32,
    end_year: i32,
    month: u8,
    length: u32,
) -> Result<Vec<DateWindow>, AggregateError> {
    if end_year < start_year {
        return Err(AggregateError::InvalidConfig {
            reason: format!("end_year {end_year} is before start_year {start_year}"),
        });
    }
    if length < 1 {
        return Err(AggregateError::InvalidConfig {
            reason: "window length must be at least 1 month".to_string(),
        });
    }
    if !(1..=12).contains(&month) {
        return Err(AggregateError::InvalidMonth { month });
    }

    let windows = (start_year..=end_year)
        .map(|year| {
            let end = YearMonth::from_ordinal(i64::from(year) * 12 + i64::from(month - 1));
            DateWindow {
                start: end.months_before(length - 1),
                end,
            }
        })
        .collect();
    Ok(windows)
}
