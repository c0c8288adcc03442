//! Consecutive month sequences.

use crate::year_month::YearMonth;

/// Generates `n_months` consecutive months starting at `start`.
///
/// Year boundaries are handled automatically (December wraps to January of
/// the following year).
///
/// # Example
///
/// ```
/// use spei_calendar::{YearMonth, month_sequence};
///
/// let start = YearMonth::new(2000, 11).unwrap();
/// let months = month_sequence(start, 3);
/// assert_eq!(months[2], YearMonth::new(2001, 1).unwrap());
/// ```
pub fn month_sequence(start: YearMonth, n_months: usize) -> Vec<YearMonth> {
    let mut months = Vec::with_capacity(n_months);
    if n_months == 0 {
        return months;
    }
    months.push(start);
    let mut current = start;
    for _ in 1..n_months {
        current = current.next();
        months.push(current);
    }
    months
}
