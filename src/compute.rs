//! Compute command: rainfall and PET CSVs in, SPEI CSV out.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span, warn};

use spei_io::{read_observations, write_series};
use spei_pipeline::run as run_pipeline;

use crate::cli::ComputeArgs;
use crate::config::SpeiConfig;
use crate::convert;

/// Run the SPEI computation.
pub fn run(args: ComputeArgs) -> Result<()> {
    let _cmd = info_span!("compute").entered();

    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config: {}", args.config.display()))?;
    let config: SpeiConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    let base = args.config.parent().unwrap_or(Path::new(""));
    execute(&config, base, args.output, args.accumulation)
}

/// Resolves a configured path relative to the config file's directory.
fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn execute(
    config: &SpeiConfig,
    base: &Path,
    output: Option<PathBuf>,
    accumulation: Option<u32>,
) -> Result<()> {
    // Step 1: Resolve paths
    let rainfall_path = config
        .io
        .rainfall
        .as_ref()
        .map(|p| resolve(base, p))
        .ok_or_else(|| anyhow!("no rainfall path: set [io].rainfall in config"))?;
    let pet_path = config
        .io
        .pet
        .as_ref()
        .map(|p| resolve(base, p))
        .ok_or_else(|| anyhow!("no PET path: set [io].pet in config"))?;
    let output = output
        .or_else(|| config.io.output.as_ref().map(|p| resolve(base, p)))
        .ok_or_else(|| anyhow!("no output path: set [io].output in config or use --output"))?;

    // Step 2: Build configs from TOML
    let pipeline_cfg = convert::build_pipeline_config(config, accumulation)?;
    let clamp = convert::parse_clamp(config.output.clamp)?;

    // Step 3: Read inputs
    let rainfall = read_observations(&rainfall_path)
        .with_context(|| format!("failed to read rainfall: {}", rainfall_path.display()))?;
    let pet = read_observations(&pet_path)
        .with_context(|| format!("failed to read PET: {}", pet_path.display()))?;

    // Step 4: Run the pipeline
    let labels = rainfall.labels;
    let result = run_pipeline(rainfall.table, pet.table, pipeline_cfg)
        .context("SPEI computation failed")?;

    let n_failures = result.failures().count();
    if n_failures > 0 {
        warn!(
            n_failures,
            "some area/month columns could not be fitted and are left missing"
        );
    }

    // Step 5: Post-process and write
    let mut spei = result.into_spei();
    if let Some(bound) = clamp {
        spei = convert::clamp_scores(&spei, bound);
    }
    let labels = config.output.relabel.then_some(&labels);
    write_series(&output, &spei, labels)
        .with_context(|| format!("failed to write output: {}", output.display()))?;

    info!(
        path = %output.display(),
        rows = spei.n_rows(),
        areas = spei.schema().len(),
        "SPEI written"
    );
    Ok(())
}
