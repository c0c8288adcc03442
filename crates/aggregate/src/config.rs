//! Accumulation and historical-period configuration.

use crate::error::AggregateError;

/// Accumulation lengths accepted by [`AccumulationPeriod::new`], in months.
pub const ALLOWED_ACCUMULATION_MONTHS: [u32; 7] = [1, 3, 6, 12, 18, 24, 36];

/// Number of consecutive months averaged into one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccumulationPeriod(u32);

impl AccumulationPeriod {
    /// Creates an accumulation period.
    ///
    /// # Errors
    ///
    /// Returns [`AggregateError::InvalidConfig`] unless `months` is one of
    /// 1, 3, 6, 12, 18, 24 or 36.
    pub fn new(months: u32) -> Result<Self, AggregateError> {
        if ALLOWED_ACCUMULATION_MONTHS.contains(&months) {
            Ok(Self(months))
        } else {
            Err(AggregateError::InvalidConfig {
                reason: format!(
                    "accumulation_period must be one of {ALLOWED_ACCUMULATION_MONTHS:?}, got {months}"
                ),
            })
        }
    }

    /// Length in months.
    pub fn months(self) -> u32 {
        self.0
    }
}

impl Default for AccumulationPeriod {
    fn default() -> Self {
        Self(1)
    }
}

/// Inclusive range of years making up the historical record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HistoricalPeriod {
    start_year: i32,
    end_year: i32,
}

impl HistoricalPeriod {
    /// Creates a historical period.
    ///
    /// # Errors
    ///
    /// Returns [`AggregateError::InvalidConfig`] if `end_year < start_year`.
    pub fn new(start_year: i32, end_year: i32) -> Result<Self, AggregateError> {
        if end_year < start_year {
            return Err(AggregateError::InvalidConfig {
                reason: format!("end_year {end_year} is before start_year {start_year}"),
            });
        }
        Ok(Self {
            start_year,
            end_year,
        })
    }

    /// First year (inclusive).
    pub fn start_year(self) -> i32 {
        self.start_year
    }

    /// Last year (inclusive).
    pub fn end_year(self) -> i32 {
        self.end_year
    }

    /// Number of years covered.
    pub fn n_years(self) -> usize {
        (self.end_year - self.start_year + 1) as usize
    }
}

impl Default for HistoricalPeriod {
    /// 1961 to 2022, the span of the gridded rainfall and PET products.
    fn default() -> Self {
        Self {
            start_year: 1961,
            end_year: 2022,
        }
    }
}

/// Configuration for window generation and aggregation.
///
/// # Example
///
/// ```
/// use spei_aggregate::{AccumulationPeriod, AggregateConfig, HistoricalPeriod};
///
/// let config = AggregateConfig::new()
///     .with_period(HistoricalPeriod::new(1971, 2000).unwrap())
///     .with_accumulation(AccumulationPeriod::new(12).unwrap());
/// assert_eq!(config.accumulation().months(), 12);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AggregateConfig {
    period: HistoricalPeriod,
    accumulation: AccumulationPeriod,
}

impl AggregateConfig {
    /// Creates a configuration with defaults: 1961–2022, 1-month accumulation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the historical period.
    pub fn with_period(mut self, period: HistoricalPeriod) -> Self {
        self.period = period;
        self
    }

    /// Sets the accumulation period.
    pub fn with_accumulation(mut self, accumulation: AccumulationPeriod) -> Self {
        self.accumulation = accumulation;
        self
    }

    /// Returns the historical period.
    pub fn period(&self) -> HistoricalPeriod {
        self.period
    }

    /// Returns the accumulation period.
    pub fn accumulation(&self) -> AccumulationPeriod {
        self.accumulation
    }

    /// Re-checks the invariants of the contained values.
    pub fn validate(&self) -> Result<(), AggregateError> {
        HistoricalPeriod::new(self.period.start_year, self.period.end_year)?;
        AccumulationPeriod::new(self.accumulation.0)?;
        Ok(())
    }
}
