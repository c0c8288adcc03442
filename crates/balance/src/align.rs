//! Alignment of rainfall and PET series on areas and dates.

use std::collections::BTreeSet;

use tracing::warn;

use spei_calendar::YearMonth;
use spei_table::{AreaId, Series};

/// Areas dropped during alignment because only one input had them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignmentReport {
    rainfall_only: Vec<AreaId>,
    pet_only: Vec<AreaId>,
}

impl AlignmentReport {
    /// Areas present in rainfall but not PET.
    pub fn rainfall_only(&self) -> &[AreaId] {
        &self.rainfall_only
    }

    /// Areas present in PET but not rainfall.
    pub fn pet_only(&self) -> &[AreaId] {
        &self.pet_only
    }

    /// Returns `true` if no area was dropped.
    pub fn is_clean(&self) -> bool {
        self.rainfall_only.is_empty() && self.pet_only.is_empty()
    }
}

/// Rainfall and PET series sharing one schema and one date index.
///
/// Only [`align`] builds this type, so the two halves always match.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedPair {
    rainfall: Series,
    pet: Series,
    report: AlignmentReport,
}

impl AlignedPair {
    /// Aligned rainfall series.
    pub fn rainfall(&self) -> &Series {
        &self.rainfall
    }

    /// Aligned PET series.
    pub fn pet(&self) -> &Series {
        &self.pet
    }

    /// Areas dropped while aligning.
    pub fn report(&self) -> &AlignmentReport {
        &self.report
    }

    /// Consumes the pair, returning `(rainfall, pet)`.
    pub fn into_parts(self) -> (Series, Series) {
        (self.rainfall, self.pet)
    }
}

/// Aligns `rainfall` and `pet` for one calendar month.
///
/// Columns are restricted to the areas both series share, in rainfall column
/// order; areas unique to one side are dropped, reported and logged. Both
/// series are re-indexed onto the sorted union of their dates, with missing
/// values where a date exists on one side only.
pub fn align(rainfall: &Series, pet: &Series) -> AlignedPair {
    let common = rainfall.schema().intersection(pet.schema());
    let report = AlignmentReport {
        rainfall_only: rainfall.schema().difference(pet.schema()),
        pet_only: pet.schema().difference(rainfall.schema()),
    };
    if !report.is_clean() {
        warn!(
            rainfall_only = ?report.rainfall_only,
            pet_only = ?report.pet_only,
            "dropping areas missing from one input"
        );
    }

    let dates: Vec<YearMonth> = rainfall
        .dates()
        .iter()
        .chain(pet.dates())
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let project = |s: &Series| {
        s.select(&common)
            .expect("intersection areas exist in both inputs")
            .reindex(&dates)
    };

    AlignedPair {
        rainfall: project(rainfall),
        pet: project(pet),
        report,
    }
}
