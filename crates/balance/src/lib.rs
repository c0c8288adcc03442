//! Water balance from aggregated rainfall and PET series.
//!
//! 1. [`align`] puts a rainfall and a PET series for the same calendar month
//!    onto the areas they share and the union of their dates.
//! 2. [`water_balance`] subtracts PET from rainfall cell by cell. A missing
//!    operand gives a missing balance.

mod align;
mod difference;

pub use align::{AlignedPair, AlignmentReport, align};
pub use difference::water_balance;
