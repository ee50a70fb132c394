//! Ledger module — append-only registration and validation logs
//!
//! Rows are only ever appended: nothing here updates or removes a record,
//! and repeated submissions produce repeated rows.

pub mod types;
pub mod log;

pub use log::{RegistrationLog, ValidationLog};
pub use types::{local_timestamp, AttendanceRecord};
