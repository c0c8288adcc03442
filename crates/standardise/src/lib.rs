//! # spei-standardise
//!
//! Fits a three-parameter generalised-logistic (GLO) distribution to each
//! area column of a calendar-month water-balance series and maps every
//! observation to a standardised score.
//!
//! - [`GloParams`]: the distribution in Hosking's parameterisation.
//! - [`fit_glo`]: L-moment estimates, optionally refined by maximum
//!   likelihood (Nelder–Mead).
//! - [`standardise_month`]: per-column fit and score for one month, with
//!   per-column failures reported instead of aborting.
//! - [`combine`]: merges the twelve months into one date-sorted table.
//!
//! # Example
//!
//! ```
//! use spei_calendar::YearMonth;
//! use spei_standardise::{StandardiseConfig, standardise_month};
//! use spei_table::{AreaId, AreaSchema, Series};
//!
//! let schema = AreaSchema::new(vec![AreaId::new("A")]).unwrap();
//! let dates: Vec<YearMonth> = (2000..2010)
//!     .map(|y| YearMonth::new(y, 3).unwrap())
//!     .collect();
//! let column = vec![2.0, 5.0, 1.0, 7.0, 3.0, 4.0, 9.0, 6.0, 0.5, 8.0]
//!     .into_iter()
//!     .map(Some)
//!     .collect();
//! let series = Series::new(schema, dates, vec![column]).unwrap();
//!
//! let month = standardise_month(&series, 3, &StandardiseConfig::new()).unwrap();
//! assert!(month.failures().is_empty());
//! assert_eq!(month.scores().n_rows(), 10);
//! ```

mod config;
mod error;
mod fit;
mod glo;
mod standardise;
mod transform;

pub use config::{FitMethod, StandardiseConfig, Transform};
pub use error::{FitError, FitFailure, StandardiseError};
pub use fit::{GloFit, MIN_FIT_SAMPLES, fit_glo};
pub use glo::GloParams;
pub use standardise::{ColumnFit, StandardisedMonth, combine, standardise_month};
pub use transform::{PROB_CLAMP, score};
