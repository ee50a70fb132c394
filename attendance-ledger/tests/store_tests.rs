//! CsvTable integration tests — bootstrap, append, rescan

use std::fs;

use tempfile::TempDir;

use attendance_ledger::config::AttendanceConfig;
use attendance_ledger::schema;
use attendance_ledger::store::{CsvTable, Row, TableStore};
use attendance_ledger::AttendanceError;

const ATTENDANCE_HEADER: &str = "username,email,role,location,timestamp\n";

fn row(fields: &[&str]) -> Row {
    fields.iter().map(|f| f.to_string()).collect()
}

fn write_roster(dir: &TempDir, contents: &str) {
    fs::write(dir.path().join("users.csv"), contents).unwrap();
}

#[test]
fn test_logs_bootstrapped_with_exact_header() {
    let dir = TempDir::new().unwrap();
    let config = AttendanceConfig::new(dir.path());

    let registered = CsvTable::open(&config, schema::registered_table()).unwrap();
    let validated = CsvTable::open(&config, schema::validated_table()).unwrap();

    assert_eq!(fs::read_to_string(registered.path()).unwrap(), ATTENDANCE_HEADER);
    assert_eq!(fs::read_to_string(validated.path()).unwrap(), ATTENDANCE_HEADER);
    assert!(registered.read_all().unwrap().is_empty());
}

#[test]
fn test_empty_log_file_gets_header() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("validated.csv"), "").unwrap();

    let table = CsvTable::open(&AttendanceConfig::new(dir.path()), schema::validated_table()).unwrap();
    assert_eq!(fs::read_to_string(table.path()).unwrap(), ATTENDANCE_HEADER);
}

#[test]
fn test_existing_log_is_not_rewritten() {
    let dir = TempDir::new().unwrap();
    let contents = format!("{ATTENDANCE_HEADER}alice,a@x.com,AI Developer,NYC,2026-01-01 09:00:00\n");
    fs::write(dir.path().join("registered.csv"), &contents).unwrap();

    let table = CsvTable::open(&AttendanceConfig::new(dir.path()), schema::registered_table()).unwrap();
    assert!(!table.ensure_header().unwrap());
    assert_eq!(fs::read_to_string(table.path()).unwrap(), contents);
    assert_eq!(table.read_all().unwrap().len(), 1);
}

#[test]
fn test_missing_roster_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = CsvTable::open(&AttendanceConfig::new(dir.path()), schema::roster_table()).unwrap_err();
    assert!(matches!(err, AttendanceError::TableNotFound { .. }));
    assert!(!dir.path().join("users.csv").exists());
}

#[test]
fn test_append_grows_by_one_and_keeps_prior_rows() {
    let dir = TempDir::new().unwrap();
    let table = CsvTable::open(&AttendanceConfig::new(dir.path()), schema::validated_table()).unwrap();

    table
        .append(row(&["alice", "a@x.com", "AI Developer", "NYC", "2026-01-01 09:00:00"]))
        .unwrap();
    let before = table.read_all().unwrap();

    table
        .append(row(&["bob", "b@x.com", "AI Developer", "LA", "2026-01-01 09:05:00"]))
        .unwrap();
    let after = table.read_all().unwrap();

    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after[..before.len()], before[..]);
    assert_eq!(after[1], row(&["bob", "b@x.com", "AI Developer", "LA", "2026-01-01 09:05:00"]));
}

#[test]
fn test_fields_with_commas_and_quotes_survive() {
    let dir = TempDir::new().unwrap();
    let table = CsvTable::open(&AttendanceConfig::new(dir.path()), schema::registered_table()).unwrap();

    let tricky = row(&[
        "o\"brien",
        "ob@x.com",
        "AI Developer",
        "New York, NY",
        "2026-01-01 09:00:00",
    ]);
    table.append(tricky.clone()).unwrap();

    assert_eq!(table.read_all().unwrap(), vec![tricky]);
}

#[test]
fn test_append_after_file_without_trailing_newline() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("validated.csv"),
        ATTENDANCE_HEADER.trim_end(),
    )
    .unwrap();

    let table = CsvTable::open(&AttendanceConfig::new(dir.path()), schema::validated_table()).unwrap();
    table
        .append(row(&["alice", "a@x.com", "AI Developer", "NYC", "2026-01-01 09:00:00"]))
        .unwrap();

    let rows = table.read_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "alice");
}

#[test]
fn test_roster_columns_located_by_name() {
    let dir = TempDir::new().unwrap();
    write_roster(
        &dir,
        "role,team,email,username\nTech Lead,core,t@x.com,tom\nAI Developer,ml,a@x.com,alice\n",
    );

    let roster = CsvTable::open(&AttendanceConfig::new(dir.path()), schema::roster_table()).unwrap();
    let rows = roster.read_all().unwrap();

    assert_eq!(
        rows,
        vec![
            row(&["tom", "t@x.com", "Tech Lead"]),
            row(&["alice", "a@x.com", "AI Developer"]),
        ]
    );
}

#[test]
fn test_roster_missing_column() {
    let dir = TempDir::new().unwrap();
    write_roster(&dir, "username,email\nalice,a@x.com\n");

    let roster = CsvTable::open(&AttendanceConfig::new(dir.path()), schema::roster_table()).unwrap();
    let err = roster.read_all().unwrap_err();
    assert!(matches!(
        err,
        AttendanceError::MissingColumn { ref column, .. } if column == "role"
    ));
}

#[test]
fn test_rescan_sees_external_writes() {
    let dir = TempDir::new().unwrap();
    write_roster(&dir, "username,email,role\nalice,a@x.com,AI Developer\n");
    let roster = CsvTable::open(&AttendanceConfig::new(dir.path()), schema::roster_table()).unwrap();
    assert_eq!(roster.read_all().unwrap().len(), 1);

    write_roster(
        &dir,
        "username,email,role\nalice,a@x.com,AI Developer\nbob,b@x.com,Admin\n",
    );
    assert_eq!(roster.read_all().unwrap().len(), 2);
}

#[test]
fn test_append_follows_existing_header_order() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("registered.csv"),
        "email,username,role,location,timestamp\na@x.com,alice,AI Developer,NYC,2026-01-01 09:00:00\n",
    )
    .unwrap();

    let table = CsvTable::open(&AttendanceConfig::new(dir.path()), schema::registered_table()).unwrap();
    let bob = row(&["bob", "b@x.com", "AI Developer", "NYC", "2026-01-01 09:05:00"]);
    table.append(bob.clone()).unwrap();

    let rows = table.read_all().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], bob);

    let contents = fs::read_to_string(table.path()).unwrap();
    assert!(contents.ends_with("b@x.com,bob,AI Developer,NYC,2026-01-01 09:05:00\n"));
}

#[test]
fn test_append_leaves_extra_columns_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("validated.csv"),
        "username,note,email,role,location,timestamp\n",
    )
    .unwrap();

    let table = CsvTable::open(&AttendanceConfig::new(dir.path()), schema::validated_table()).unwrap();
    let alice = row(&["alice", "a@x.com", "AI Developer", "NYC", "2026-01-01 09:00:00"]);
    table.append(alice.clone()).unwrap();

    assert_eq!(table.read_all().unwrap(), vec![alice]);
}

#[test]
fn test_append_rejects_header_missing_a_column() {
    let dir = TempDir::new().unwrap();
    let contents = "username,email,role,location\n";
    fs::write(dir.path().join("validated.csv"), contents).unwrap();

    let table = CsvTable::open(&AttendanceConfig::new(dir.path()), schema::validated_table()).unwrap();
    let err = table
        .append(row(&["alice", "a@x.com", "AI Developer", "NYC", "2026-01-01 09:00:00"]))
        .unwrap_err();

    assert!(matches!(
        err,
        AttendanceError::MissingColumn { ref column, .. } if column == "timestamp"
    ));
    assert_eq!(fs::read_to_string(table.path()).unwrap(), contents);
}

#[test]
fn test_blank_log_file_gets_header() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("validated.csv"), "\n  \n").unwrap();

    let table = CsvTable::open(&AttendanceConfig::new(dir.path()), schema::validated_table()).unwrap();
    assert_eq!(fs::read_to_string(table.path()).unwrap(), ATTENDANCE_HEADER);
    assert!(table.read_all().unwrap().is_empty());

    let bob = row(&["bob", "b@x.com", "AI Developer", "NYC", "2026-01-01 09:05:00"]);
    table.append(bob.clone()).unwrap();
    assert_eq!(table.read_all().unwrap(), vec![bob]);
}
