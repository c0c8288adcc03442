use spei_aggregate::{
    AccumulationPeriod, AggregateConfig, HistoricalPeriod, aggregate_month, aggregate_windows,
    generate_windows,
};
use spei_calendar::YearMonth;
use spei_table::{AreaId, AreaSchema, ObservationRow, ObservationTable};

fn ym(y: i32, m: u8) -> YearMonth {
    YearMonth::new(y, m).unwrap()
}

/// Monthly rows for `years`, two areas, with a value pattern that makes
/// summation order matter for floating point.
fn rows(years: std::ops::RangeInclusive<i32>) -> Vec<ObservationRow> {
    years
        .flat_map(|y| {
            (1..=12u8).map(move |m| {
                let base = f64::from(y - 1900) * 0.1 + f64::from(m) / 7.0;
                ObservationRow::new(ym(y, m), "", vec![Some(base), Some(1.0 / base)])
            })
        })
        .collect()
}

fn schema() -> AreaSchema {
    AreaSchema::new(vec![AreaId::new("A"), AreaId::new("B")]).unwrap()
}

#[test]
fn june_three_month_windows() {
    let windows = generate_windows(2000, 2003, 6, 3).unwrap();
    assert_eq!(windows.len(), 4);
    for (i, w) in windows.iter().enumerate() {
        assert_eq!(w.end(), ym(2000 + i as i32, 6));
        assert_eq!(w.start(), ym(2000 + i as i32, 4));
        assert_eq!(w.start().months_until(w.end()), 2);
    }
}

#[test]
fn windows_cover_every_calendar_month() {
    for month in 1..=12u8 {
        let windows = generate_windows(1961, 2022, month, 24).unwrap();
        assert_eq!(windows.len(), 62);
        assert!(windows.windows(2).all(|p| p[0].end() < p[1].end()));
        assert!(windows.iter().all(|w| w.n_months() == 24));
    }
}

#[test]
fn result_independent_of_source_row_order() {
    let forward = ObservationTable::new(schema(), rows(1990..=1999)).unwrap();
    let mut reversed_rows = rows(1990..=1999);
    reversed_rows.reverse();
    let reversed = ObservationTable::new(schema(), reversed_rows).unwrap();

    let cfg = AggregateConfig::new()
        .with_period(HistoricalPeriod::new(1991, 1999).unwrap())
        .with_accumulation(AccumulationPeriod::new(12).unwrap());
    for month in 1..=12u8 {
        let a = aggregate_month(&forward, &cfg, month).unwrap();
        let b = aggregate_month(&reversed, &cfg, month).unwrap();
        assert_eq!(a, b, "month {month}");
    }
}

#[test]
fn early_windows_partially_covered() {
    // Record starts in 2000-01; a 6-month window ending 2000-02 sees two rows.
    let table = ObservationTable::new(schema(), rows(2000..=2001)).unwrap();
    let windows = generate_windows(2000, 2000, 2, 6).unwrap();
    let series = aggregate_windows(&table, &windows);
    let jan = table.rows()[0].values()[0].unwrap();
    let feb = table.rows()[1].values()[0].unwrap();
    assert_eq!(series.value(0, 0), Some((jan + feb) / 2.0));
}

#[test]
fn windows_before_record_are_missing() {
    let table = ObservationTable::new(schema(), rows(2000..=2001)).unwrap();
    let windows = generate_windows(1998, 1999, 6, 1).unwrap();
    let series = aggregate_windows(&table, &windows);
    assert_eq!(series.n_rows(), 2);
    assert!(series.columns().iter().flatten().all(|v| v.is_none()));
}
