//! RegistrationLog / ValidationLog — typed views over append-only tables

use std::sync::Arc;

use tracing::info;

use crate::error::Result;
use crate::store::TableStore;

use super::types::AttendanceRecord;

/// Shared append/scan logic for both logs
#[derive(Clone)]
struct AttendanceLog {
    table: Arc<dyn TableStore>,
}

impl AttendanceLog {
    fn append(&self, record: &AttendanceRecord) -> Result<()> {
        self.table.append(record.clone().into_row())?;
        info!(
            table = self.table.name(),
            username = %record.username,
            role = %record.role,
            location = %record.location,
            "Attendance row appended"
        );
        Ok(())
    }

    fn records(&self) -> Result<Vec<AttendanceRecord>> {
        let name = self.table.name().to_string();
        self.table
            .read_all()?
            .into_iter()
            .map(|row| AttendanceRecord::from_row(&name, row))
            .collect()
    }
}

/// Recorded intents to attend, written by AI Developers
#[derive(Clone)]
pub struct RegistrationLog {
    log: AttendanceLog,
}

impl RegistrationLog {
    pub fn new(table: Arc<dyn TableStore>) -> Self {
        Self {
            log: AttendanceLog { table },
        }
    }

    /// Append one registration; duplicates are kept
    pub fn append(&self, record: &AttendanceRecord) -> Result<()> {
        self.log.append(record)
    }

    /// Every registration in insertion order
    pub fn records(&self) -> Result<Vec<AttendanceRecord>> {
        self.log.records()
    }
}

/// Confirmed attendance, written only after a Tech Lead's scan is authorized
#[derive(Clone)]
pub struct ValidationLog {
    log: AttendanceLog,
}

impl ValidationLog {
    pub fn new(table: Arc<dyn TableStore>) -> Self {
        Self {
            log: AttendanceLog { table },
        }
    }

    /// Append one validation; duplicates are kept
    pub fn append(&self, record: &AttendanceRecord) -> Result<()> {
        self.log.append(record)
    }

    /// Every validation in insertion order
    pub fn records(&self) -> Result<Vec<AttendanceRecord>> {
        self.log.records()
    }

    /// Validations at exactly `location`, in insertion order
    pub fn filter_by_location(&self, location: &str) -> Result<Vec<AttendanceRecord>> {
        Ok(self
            .records()?
            .into_iter()
            .filter(|record| record.location == location)
            .collect())
    }
}
