//! Rolling accumulation windows for the SPEI pipeline.
//!
//! For a calendar month `m` and an accumulation period of `L` months, each
//! year of the historical record contributes one window ending at `m` and
//! starting `L - 1` months earlier. Every area column is averaged over each
//! window, ignoring missing values.
//!
//! # Pipeline
//!
//! 1. **Windows**: [`generate_windows`] builds one [`DateWindow`] per year
//! 2. **Aggregate**: [`aggregate_windows`] averages table rows inside each window
//!
//! [`aggregate_month`] runs both steps from an [`AggregateConfig`].
//!
//! # Quick Start
//!
//! ```
//! use spei_aggregate::{AccumulationPeriod, AggregateConfig, HistoricalPeriod, aggregate_month};
//! use spei_calendar::YearMonth;
//! use spei_table::{AreaId, AreaSchema, ObservationRow, ObservationTable};
//!
//! let schema = AreaSchema::new(vec![AreaId::new("28001")]).unwrap();
//! let rows = (1..=12)
//!     .map(|m| ObservationRow::new(YearMonth::new(2000, m).unwrap(), "", vec![Some(m as f64)]))
//!     .collect();
//! let table = ObservationTable::new(schema, rows).unwrap();
//!
//! let config = AggregateConfig::new()
//!     .with_period(HistoricalPeriod::new(2000, 2000).unwrap())
//!     .with_accumulation(AccumulationPeriod::new(3).unwrap());
//! let june = aggregate_month(&table, &config, 6).unwrap();
//! assert_eq!(june.value(0, 0), Some(5.0)); // mean of Apr, May, Jun
//! ```

mod config;
mod error;
mod rolling;
mod window;

pub use config::{AccumulationPeriod, AggregateConfig, HistoricalPeriod};
pub use error::AggregateError;
pub use rolling::{aggregate_month, aggregate_windows};
pub use window::{DateWindow, generate_windows};
