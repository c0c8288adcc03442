use tracing_subscriber::EnvFilter;

/// All workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &[
    "spei",
    "spei_aggregate",
    "spei_balance",
    "spei_calendar",
    "spei_io",
    "spei_pipeline",
    "spei_standardise",
    "spei_stats",
    "spei_table",
];

/// Filter directive for every workspace crate at the level implied by
/// `verbosity`.
///
/// Mapping:
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
fn default_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize tracing based on CLI verbosity level.
///
/// `RUST_LOG` env var overrides the CLI flag if set.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_levels() {
        assert!(default_filter(0).starts_with("spei=warn,"));
        assert!(default_filter(1).contains("spei_pipeline=info"));
        assert!(default_filter(2).contains("spei_standardise=debug"));
        assert!(default_filter(7).ends_with("spei_table=trace"));
    }
}
