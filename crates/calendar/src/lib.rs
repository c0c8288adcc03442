//! # spei-calendar
//!
//! Month-granular date arithmetic. Monthly climate records carry no day
//! component, so every date here is a `(year, month)` pair rendered as the
//! first day of that month.
//!
//! ## Quick Start
//!
//! ```
//! use spei_calendar::{YearMonth, month_sequence};
//!
//! let end = YearMonth::new(2000, 2).unwrap();
//! let start = end.months_before(2); // Dec 1999
//! assert_eq!(start, YearMonth::new(1999, 12).unwrap());
//!
//! let months = month_sequence(start, 3);
//! assert_eq!(months.last(), Some(&end));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `year_month` | Year-month date type |
//! | `sequence` | Consecutive month sequences |
//! | `error` | Error types |

mod error;
mod sequence;
mod year_month;

pub use error::CalendarError;
pub use sequence::month_sequence;
pub use year_month::YearMonth;
