//! Integration tests: reading observation files and writing series.

use std::fs;
use std::path::Path;

use approx::assert_relative_eq;
use spei_calendar::YearMonth;
use spei_io::{AreaLabels, IoError, read_observations, write_series};
use spei_table::{AreaId, AreaSchema, Series};

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

const RAINFALL: &str = "\
Year,Month,Status,Trent at Colwick,Tyne at Bywell
,,,28001,23001
1961,2,E,70.5,NA
1961,1,E,84.25,101.7
1961,3,P,,NaN
";

#[test]
fn reads_two_line_header_and_values() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write(dir.path(), "rain.csv", RAINFALL);

    let data = read_observations(&path).expect("read succeeds");
    let table = &data.table;
    assert_eq!(
        table.schema().areas(),
        &[AreaId::new("28001"), AreaId::new("23001")]
    );
    assert_eq!(table.len(), 3);

    // Rows are sorted by date regardless of file order.
    let jan = &table.rows()[0];
    assert_eq!(jan.date(), YearMonth::new(1961, 1).unwrap());
    assert_eq!(jan.status(), "E");
    assert_relative_eq!(jan.values()[0].unwrap(), 84.25);
    assert_relative_eq!(jan.values()[1].unwrap(), 101.7);

    let feb = &table.rows()[1];
    assert_eq!(feb.values()[1], None);
    let mar = &table.rows()[2];
    assert_eq!(mar.status(), "P");
    assert_eq!(mar.values(), &[None, None]);

    assert_eq!(
        data.labels.get(&AreaId::new("28001")),
        Some("Trent at Colwick")
    );
    assert_eq!(data.labels.len(), 2);
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let err = read_observations(dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, IoError::FileNotFound { .. }));
}

#[test]
fn header_without_identifier_line() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write(dir.path(), "bad.csv", "Year,Month,Status,A\n");
    let err = read_observations(&path).unwrap_err();
    assert!(matches!(err, IoError::MalformedHeader { .. }), "{err}");
}

#[test]
fn header_without_areas() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write(dir.path(), "bad.csv", "Year,Month,Status\n,,\n1961,1,E\n");
    let err = read_observations(&path).unwrap_err();
    assert!(matches!(err, IoError::MalformedHeader { .. }), "{err}");
}

#[test]
fn duplicate_identifier_is_malformed() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write(dir.path(), "dup.csv", "Year,Month,Status,a,b\n,,,X,X\n");
    let err = read_observations(&path).unwrap_err();
    assert!(matches!(err, IoError::MalformedHeader { .. }), "{err}");
}

#[test]
fn invalid_month_reports_line() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write(
        dir.path(),
        "bad.csv",
        "Year,Month,Status,A\n,,,1\n2000,1,E,3.0\n2000,13,E,4.0\n",
    );
    match read_observations(&path).unwrap_err() {
        IoError::InvalidCell { line, column, value } => {
            assert_eq!(line, 4);
            assert_eq!(column, "Month");
            assert_eq!(value, "13");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn invalid_value_names_area() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write(
        dir.path(),
        "bad.csv",
        "Year,Month,Status,A,B\n,,,a1,b1\n2000,1,E,3.0,oops\n",
    );
    match read_observations(&path).unwrap_err() {
        IoError::InvalidCell { column, .. } => assert_eq!(column, "b1"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn short_row_is_rejected() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write(
        dir.path(),
        "bad.csv",
        "Year,Month,Status,A,B\n,,,a,b\n2000,1,E,3.0\n",
    );
    let err = read_observations(&path).unwrap_err();
    assert!(
        matches!(
            err,
            IoError::RowWidth {
                expected: 5,
                got: 4,
                ..
            }
        ),
        "{err}"
    );
}

#[test]
fn duplicate_date_is_a_table_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write(
        dir.path(),
        "dup.csv",
        "Year,Month,Status,A\n,,,a\n2000,1,E,1\n2000,1,E,2\n",
    );
    let err = read_observations(&path).unwrap_err();
    assert!(matches!(err, IoError::Table { .. }), "{err}");
}

fn sample_series() -> Series {
    let schema = AreaSchema::new(vec![AreaId::new("28001"), AreaId::new("23001")]).unwrap();
    let dates = vec![
        YearMonth::new(1999, 12).unwrap(),
        YearMonth::new(2000, 1).unwrap(),
    ];
    let columns = vec![vec![Some(-1.25), Some(0.5)], vec![None, Some(2.0)]];
    Series::new(schema, dates, columns).unwrap()
}

#[test]
fn writes_dates_and_empty_missing_cells() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("spei.csv");
    write_series(&path, &sample_series(), None).expect("write succeeds");

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Date,28001,23001");
    assert_eq!(lines[1], "1999-12-01,-1.25,");
    assert_eq!(lines[2], "2000-01-01,0.5,2");
    assert_eq!(lines.len(), 3);
}

#[test]
fn writes_display_names_when_labelled() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("spei.csv");
    let mut labels = AreaLabels::new();
    labels.insert(AreaId::new("28001"), "Trent at Colwick");

    write_series(&path, &sample_series(), Some(&labels)).expect("write succeeds");
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().next(), Some("Date,Trent at Colwick,23001"));
}

#[test]
fn write_into_missing_directory_fails() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("no/such/dir/spei.csv");
    let err = write_series(&path, &sample_series(), None).unwrap_err();
    assert!(matches!(err, IoError::Csv { .. }));
}
