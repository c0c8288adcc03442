//! # spei-table
//!
//! Tabular data model shared by every SPEI stage.
//!
//! - [`ObservationTable`]: monthly source rows of `(year, month, status,
//!   value per area)` as read from a rainfall or PET file.
//! - [`Series`]: a date-indexed, column-major table with one column per
//!   area. Aggregated, water-balance and standardised series all use it.
//!
//! Areas are addressed through an [`AreaSchema`] resolved once, so joining two
//! datasets is a typed operation on [`AreaId`] rather than a header lookup.
//! Missing values are `None` everywhere.

mod area;
mod error;
mod observation;
mod series;

pub use area::{AreaId, AreaSchema};
pub use error::TableError;
pub use observation::{ObservationRow, ObservationTable};
pub use series::Series;
