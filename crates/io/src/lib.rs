//! # spei-io
//!
//! CSV boundary for the SPEI workspace.
//!
//! - [`read_observations`]: monthly rainfall or PET with a two-line header
//!   (display names, then area identifiers) into an
//!   [`ObservationTable`](spei_table::ObservationTable) plus [`AreaLabels`].
//! - [`write_series`]: a date-indexed [`Series`](spei_table::Series) out as
//!   `Date,<area>...`.
//!
//! Empty, `NA`, `NaN` and non-finite cells are read as missing; missing
//! values are written as empty cells.

mod error;
mod labels;
mod reader;
mod writer;

pub use error::IoError;
pub use labels::AreaLabels;
pub use reader::{ObservationData, read_observations};
pub use writer::write_series;
