//! Admin attendance report rendered as a polars table

use polars::prelude::*;

use crate::error::Result;
use crate::ledger::AttendanceRecord;
use crate::schema;

fn column<'a>(
    records: &'a [AttendanceRecord],
    field: fn(&AttendanceRecord) -> &str,
) -> Vec<&'a str> {
    records.iter().map(field).collect()
}

/// Build a frame with the attendance columns, one row per record
pub fn to_frame(records: &[AttendanceRecord]) -> Result<DataFrame> {
    let fields = [
        column(records, |r| r.username.as_str()),
        column(records, |r| r.email.as_str()),
        column(records, |r| r.role.as_str()),
        column(records, |r| r.location.as_str()),
        column(records, |r| r.timestamp.as_str()),
    ];

    let columns = schema::ATTENDANCE_COLUMNS
        .iter()
        .zip(fields)
        .map(|(name, values)| Column::new((*name).into(), values))
        .collect();

    Ok(DataFrame::new(columns)?)
}

/// Render records as a table; the header is printed even with no rows
pub fn render(records: &[AttendanceRecord]) -> Result<String> {
    Ok(to_frame(records)?.to_string())
}
