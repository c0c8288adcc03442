//! Window means over an observation table.

use tracing::debug;

use spei_stats::mean_present;
use spei_table::{ObservationTable, Series};

use crate::config::AggregateConfig;
use crate::error::AggregateError;
use crate::window::{DateWindow, generate_windows};

/// Averages every area column of `table` over each window.
///
/// Rows dated inside a window contribute their present values; missing
/// values are skipped. A window with no present value for an area yields
/// missing for that area. Output rows are dated at each window's end, in
/// window order. Year, month and status bookkeeping is dropped.
pub fn aggregate_windows(table: &ObservationTable, windows: &[DateWindow]) -> Series {
    let n_areas = table.schema().len();
    let mut columns: Vec<Vec<Option<f64>>> = vec![Vec::with_capacity(windows.len()); n_areas];

    for window in windows {
        let rows = table.rows_between(window.start(), window.end());
        for (c, column) in columns.iter_mut().enumerate() {
            column.push(mean_present(rows.iter().map(|r| r.values()[c])));
        }
    }

    let dates = windows.iter().map(|w| w.end()).collect();
    Series::new(table.schema().clone(), dates, columns)
        .expect("one column per area and one value per window by construction")
}

/// Builds the calendar-month series for `month`: one window per year of the
/// configured period, averaged over the configured accumulation length.
///
/// # Errors
///
/// Returns [`AggregateError`] if the configuration is invalid or `month` is
/// outside 1..=12.
pub fn aggregate_month(
    table: &ObservationTable,
    config: &AggregateConfig,
    month: u8,
) -> Result<Series, AggregateError> {
    config.validate()?;
    let period = config.period();
    let windows = generate_windows(
        period.start_year(),
        period.end_year(),
        month,
        config.accumulation().months(),
    )?;

    let series = aggregate_windows(table, &windows);

    let n_empty = (0..series.n_rows())
        .filter(|&r| series.columns().iter().all(|col| col[r].is_none()))
        .count();
    if n_empty > 0 {
        debug!(
            month,
            n_empty,
            n_windows = windows.len(),
            "windows without any observations"
        );
    }

    Ok(series)
}
