use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// SPEI calculator for hydrometric areas.
#[derive(Parser)]
#[command(
    name = "spei",
    version,
    about = "Standardised Precipitation-Evapotranspiration Index calculator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute SPEI scores from rainfall and PET files.
    Compute(ComputeArgs),
}

/// Arguments for the `compute` subcommand.
#[derive(clap::Args)]
pub struct ComputeArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "spei.toml")]
    pub config: PathBuf,

    /// Override output CSV path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override accumulation period (months) from config.
    #[arg(short, long)]
    pub accumulation: Option<u32>,
}
