//! Outcome — how a session ended
//!
//! Rejections are outcomes rather than errors: they are shown to the user,
//! write nothing, and end the run.

use crate::ledger::AttendanceRecord;
use crate::policy::Denial;
use crate::roster::Role;
use crate::token::DecodeError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Username/email pair not on the roster
    InvalidCredentials,
    /// AI Developer answered anything but "yes"
    Declined,
    /// Registration written; `token` is to be handed to a Tech Lead
    Registered {
        token: String,
        record: AttendanceRecord,
    },
    /// Validation written
    Validated(AttendanceRecord),
    /// Scan rejected by the authorization rule
    Denied(Denial),
    /// Pasted token could not be decoded
    DecodeFailed(DecodeError),
    /// Validated attendance at one location, insertion order
    ///
    /// `table` is `records` rendered for display.
    Report {
        location: String,
        records: Vec<AttendanceRecord>,
        table: String,
    },
    /// Logged-in role has no path
    NoPermissions(Role),
}

impl Outcome {
    /// Whether this run appended a row to one of the logs
    pub fn wrote_record(&self) -> bool {
        matches!(self, Self::Registered { .. } | Self::Validated(_))
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => f.write_str("Invalid username or email."),
            Self::Declined => f.write_str("Not attending offline; nothing registered."),
            Self::Registered { token, record } => write!(
                f,
                "QR Code (share this with Tech Lead for scanning):\n{token}\n\n\
                 Registered {} for {} at {}",
                record.username, record.location, record.timestamp
            ),
            Self::Validated(record) => write!(
                f,
                "Attendance validated for {} at {} ({})",
                record.username, record.location, record.timestamp
            ),
            Self::Denied(denial) => write!(f, "Warning: {denial}"),
            Self::DecodeFailed(err) => write!(f, "Failed to decode QR: {err}"),
            Self::Report {
                location, table, ..
            } => write!(f, "Validated Attendance for {location}:\n\n{table}"),
            Self::NoPermissions(role) => {
                write!(f, "Unknown role or no permissions assigned ({role}).")
            }
        }
    }
}
