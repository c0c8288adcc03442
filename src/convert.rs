//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use spei_aggregate::{AccumulationPeriod, AggregateConfig, HistoricalPeriod};
use spei_pipeline::PipelineConfig;
use spei_standardise::{FitMethod, StandardiseConfig, Transform};
use spei_table::Series;

use crate::config::{FitToml, PeriodToml, SpeiConfig};

/// Parses a fitting method name into the corresponding enum variant.
pub fn parse_fit_method(s: &str) -> Result<FitMethod> {
    match s.to_lowercase().as_str() {
        "mle" | "maximum-likelihood" => Ok(FitMethod::MaximumLikelihood),
        "lmoments" | "l-moments" => Ok(FitMethod::LMoments),
        other => bail!("unknown fit method: {other:?}"),
    }
}

/// Parses a score transform name into the corresponding enum variant.
pub fn parse_transform(s: &str) -> Result<Transform> {
    match s.to_lowercase().as_str() {
        "probability" => Ok(Transform::Probability),
        "location-scale" | "linear" => Ok(Transform::LocationScale),
        other => bail!("unknown transform: {other:?}"),
    }
}

/// Builds an [`AggregateConfig`], with `accumulation` overriding the file.
pub fn build_aggregate_config(
    period: &PeriodToml,
    accumulation: Option<u32>,
) -> Result<AggregateConfig> {
    let months = accumulation.unwrap_or(period.accumulation_period);
    let historical = HistoricalPeriod::new(period.start_year, period.end_year)
        .context("invalid [period] years")?;
    let accumulation =
        AccumulationPeriod::new(months).context("invalid accumulation period")?;
    Ok(AggregateConfig::new()
        .with_period(historical)
        .with_accumulation(accumulation))
}

/// Builds a [`StandardiseConfig`] from the `[fit]` section.
pub fn build_standardise_config(fit: &FitToml) -> Result<StandardiseConfig> {
    let cfg = StandardiseConfig::new()
        .with_fit_method(parse_fit_method(&fit.method)?)
        .with_transform(parse_transform(&fit.transform)?)
        .with_max_iters(fit.max_iters)
        .with_min_mle_samples(fit.min_mle_samples)
        .with_sd_tolerance(fit.sd_tolerance);
    cfg.validate().context("invalid [fit] settings")?;
    Ok(cfg)
}

/// Builds the full [`PipelineConfig`].
pub fn build_pipeline_config(
    config: &SpeiConfig,
    accumulation: Option<u32>,
) -> Result<PipelineConfig> {
    Ok(PipelineConfig::new()
        .with_aggregate(build_aggregate_config(&config.period, accumulation)?)
        .with_standardise(build_standardise_config(&config.fit)?)
        .with_parallel(config.parallel))
}

/// Checks the `[output] clamp` bound.
pub fn parse_clamp(clamp: Option<f64>) -> Result<Option<f64>> {
    match clamp {
        Some(c) if !c.is_finite() || c <= 0.0 => {
            bail!("[output] clamp must be finite and > 0, got {c}")
        }
        other => Ok(other),
    }
}

/// Truncates every score to `[-bound, bound]`; missing stays missing.
pub fn clamp_scores(series: &Series, bound: f64) -> Series {
    series.map_values(|v| v.clamp(-bound, bound))
}

#[cfg(test)]
mod tests {
    use super::*;
    use spei_calendar::YearMonth;
    use spei_table::{AreaId, AreaSchema};

    #[test]
    fn fit_method_names() {
        assert_eq!(parse_fit_method("MLE").unwrap(), FitMethod::MaximumLikelihood);
        assert_eq!(parse_fit_method("l-moments").unwrap(), FitMethod::LMoments);
        assert!(parse_fit_method("bayes").is_err());
    }

    #[test]
    fn transform_names() {
        assert_eq!(parse_transform("probability").unwrap(), Transform::Probability);
        assert_eq!(parse_transform("linear").unwrap(), Transform::LocationScale);
        assert!(parse_transform("cdf").is_err());
    }

    #[test]
    fn accumulation_override_wins() {
        let period = PeriodToml::default();
        let cfg = build_aggregate_config(&period, Some(6)).unwrap();
        assert_eq!(cfg.accumulation().months(), 6);
        assert_eq!(cfg.period().start_year(), 1961);
    }

    #[test]
    fn accumulation_outside_allowed_set() {
        let period = PeriodToml::default();
        assert!(build_aggregate_config(&period, Some(5)).is_err());
    }

    #[test]
    fn reversed_period_rejected() {
        let period = PeriodToml {
            start_year: 2000,
            end_year: 1990,
            accumulation_period: 1,
        };
        assert!(build_aggregate_config(&period, None).is_err());
    }

    #[test]
    fn pipeline_from_defaults() {
        let cfg = build_pipeline_config(&SpeiConfig::default(), None).unwrap();
        assert_eq!(cfg.standardise(), &StandardiseConfig::new());
        assert_eq!(cfg.aggregate(), &AggregateConfig::new());
    }

    #[test]
    fn clamp_validation() {
        assert_eq!(parse_clamp(None).unwrap(), None);
        assert_eq!(parse_clamp(Some(3.0)).unwrap(), Some(3.0));
        assert!(parse_clamp(Some(0.0)).is_err());
        assert!(parse_clamp(Some(f64::NAN)).is_err());
    }

    #[test]
    fn clamp_truncates_symmetrically() {
        let schema = AreaSchema::new(vec![AreaId::new("A")]).unwrap();
        let dates = vec![
            YearMonth::new(2000, 1).unwrap(),
            YearMonth::new(2000, 2).unwrap(),
            YearMonth::new(2000, 3).unwrap(),
            YearMonth::new(2000, 4).unwrap(),
        ];
        let series =
            Series::new(schema, dates, vec![vec![Some(-5.0), Some(1.5), None, Some(4.0)]])
                .unwrap();
        let out = clamp_scores(&series, 3.0);
        assert_eq!(out.column(0), &[Some(-3.0), Some(1.5), None, Some(3.0)]);
    }
}
