//! The four pipeline stages. Each stage is only reachable by consuming the
//! one before it.

use rayon::prelude::*;
use spei_aggregate::aggregate_month;
use spei_balance::{AlignmentReport, align, water_balance};
use spei_standardise::{FitFailure, StandardisedMonth, combine, standardise_month};
use spei_table::{AreaId, ObservationTable, Series};
use tracing::{debug_span, info, info_span, warn};

use crate::config::PipelineConfig;
use crate::error::PipelineError;

const MONTHS: [u8; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

/// Runs `f` for every calendar month, in parallel when requested. Results
/// are returned in month order either way.
fn for_each_month<T, F>(parallel: bool, f: F) -> Result<Vec<T>, PipelineError>
where
    T: Send,
    F: Fn(u8) -> Result<T, PipelineError> + Sync + Send,
{
    if parallel {
        MONTHS.par_iter().map(|&m| f(m)).collect()
    } else {
        MONTHS.iter().map(|&m| f(m)).collect()
    }
}

/// Rainfall and PET tables projected onto their common areas.
#[derive(Debug, Clone)]
pub struct Imported {
    rainfall: ObservationTable,
    pet: ObservationTable,
    rainfall_only: Vec<AreaId>,
    pet_only: Vec<AreaId>,
    config: PipelineConfig,
}

impl Imported {
    /// Validates `config` and restricts both tables to the areas they share.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::Config`] if `config` is invalid.
    /// - [`PipelineError::NoCommonAreas`] if the tables share no area.
    pub fn new(
        rainfall: ObservationTable,
        pet: ObservationTable,
        config: PipelineConfig,
    ) -> Result<Self, PipelineError> {
        config.validate()?;

        let common = rainfall.schema().intersection(pet.schema());
        if common.is_empty() {
            return Err(PipelineError::NoCommonAreas);
        }
        let rainfall_only = rainfall.schema().difference(&common);
        let pet_only = pet.schema().difference(&common);
        if !rainfall_only.is_empty() || !pet_only.is_empty() {
            warn!(
                rainfall_only = ?rainfall_only,
                pet_only = ?pet_only,
                "dropping areas not present in both inputs"
            );
        }
        info!(
            areas = common.len(),
            rainfall_rows = rainfall.len(),
            pet_rows = pet.len(),
            "inputs imported"
        );

        Ok(Self {
            rainfall: rainfall.select(&common)?,
            pet: pet.select(&common)?,
            rainfall_only,
            pet_only,
            config,
        })
    }

    /// Rainfall table restricted to the common areas.
    pub fn rainfall(&self) -> &ObservationTable {
        &self.rainfall
    }

    /// PET table restricted to the common areas.
    pub fn pet(&self) -> &ObservationTable {
        &self.pet
    }

    /// Areas dropped because only the rainfall table had them.
    pub fn rainfall_only(&self) -> &[AreaId] {
        &self.rainfall_only
    }

    /// Areas dropped because only the PET table had them.
    pub fn pet_only(&self) -> &[AreaId] {
        &self.pet_only
    }

    /// Aggregates both tables for each calendar month.
    pub fn aggregate(self) -> Result<Aggregated, PipelineError> {
        let _stage = info_span!("aggregate").entered();
        let config = self.config.aggregate();
        let months = for_each_month(self.config.parallel(), |month| {
            let _m = debug_span!("month", month).entered();
            let to_err = |source| PipelineError::Aggregate { month, source };
            let rainfall = aggregate_month(&self.rainfall, config, month).map_err(to_err)?;
            let pet = aggregate_month(&self.pet, config, month).map_err(to_err)?;
            Ok(MonthPair { rainfall, pet })
        })?;
        info!(
            accumulation = config.accumulation().months(),
            start_year = config.period().start_year(),
            end_year = config.period().end_year(),
            "aggregation complete"
        );
        Ok(Aggregated {
            months,
            config: self.config,
        })
    }
}

/// Aggregated rainfall and PET for one calendar month.
#[derive(Debug, Clone)]
pub struct MonthPair {
    /// Aggregated rainfall.
    pub rainfall: Series,
    /// Aggregated PET.
    pub pet: Series,
}

/// Twelve aggregated (rainfall, PET) pairs, January first.
#[derive(Debug, Clone)]
pub struct Aggregated {
    months: Vec<MonthPair>,
    config: PipelineConfig,
}

impl Aggregated {
    /// Aggregated pairs in month order.
    pub fn months(&self) -> &[MonthPair] {
        &self.months
    }

    /// Aligns each month's pair and computes rainfall − PET.
    pub fn balance(self) -> Balanced {
        let _stage = info_span!("balance").entered();
        let balanced: Vec<(Series, AlignmentReport)> = if self.config.parallel() {
            self.months.par_iter().map(balance_pair).collect()
        } else {
            self.months.iter().map(balance_pair).collect()
        };
        let (balances, reports) = balanced.into_iter().unzip();
        Balanced {
            balances,
            reports,
            config: self.config,
        }
    }
}

fn balance_pair(pair: &MonthPair) -> (Series, AlignmentReport) {
    let aligned = align(&pair.rainfall, &pair.pet);
    let balance = water_balance(&aligned);
    (balance, aligned.report().clone())
}

/// Twelve water-balance series, January first.
#[derive(Debug, Clone)]
pub struct Balanced {
    balances: Vec<Series>,
    reports: Vec<AlignmentReport>,
    config: PipelineConfig,
}

impl Balanced {
    /// Water-balance series in month order.
    pub fn balances(&self) -> &[Series] {
        &self.balances
    }

    /// Alignment reports in month order.
    pub fn reports(&self) -> &[AlignmentReport] {
        &self.reports
    }

    /// Fits and scores each month, then combines them into one table.
    pub fn standardise(self) -> Result<Standardised, PipelineError> {
        let _stage = info_span!("standardise").entered();
        let config = self.config.standardise();
        let balances = &self.balances;
        let months = for_each_month(self.config.parallel(), |month| {
            let _m = debug_span!("month", month).entered();
            standardise_month(&balances[usize::from(month) - 1], month, config)
                .map_err(|source| PipelineError::Standardise { month, source })
        })?;

        let n_failures: usize = months.iter().map(|m| m.failures().len()).sum();
        let spei = combine(months.clone())
            .map_err(|source| PipelineError::Standardise { month: 0, source })?;
        info!(
            rows = spei.n_rows(),
            areas = spei.schema().len(),
            failed_fits = n_failures,
            "standardisation complete"
        );
        Ok(Standardised { spei, months })
    }
}

/// The combined SPEI table with the per-month fits behind it.
#[derive(Debug, Clone)]
pub struct Standardised {
    spei: Series,
    months: Vec<StandardisedMonth>,
}

impl Standardised {
    /// SPEI scores for every month, sorted by date.
    pub fn spei(&self) -> &Series {
        &self.spei
    }

    /// Per-month results, January first.
    pub fn months(&self) -> &[StandardisedMonth] {
        &self.months
    }

    /// All column fit failures, in month order.
    pub fn failures(&self) -> impl Iterator<Item = &FitFailure> {
        self.months.iter().flat_map(|m| m.failures())
    }

    /// Consumes the result, returning the SPEI table.
    pub fn into_spei(self) -> Series {
        self.spei
    }
}

/// Runs every stage on `rainfall` and `pet`.
///
/// # Errors
///
/// Returns the first [`PipelineError`] raised by any stage. Column fit
/// failures are not errors; see [`Standardised::failures`].
pub fn run(
    rainfall: ObservationTable,
    pet: ObservationTable,
    config: PipelineConfig,
) -> Result<Standardised, PipelineError> {
    let _run = info_span!("spei").entered();
    Imported::new(rainfall, pet, config)?
        .aggregate()?
        .balance()
        .standardise()
}
