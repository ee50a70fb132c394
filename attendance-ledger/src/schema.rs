//! Column layouts for the three ledger tables
//!
//! The roster is provisioned externally; the two attendance logs are
//! created with [`ATTENDANCE_COLUMNS`] as their header when absent.

// ─── Table Names (constants) ───

pub const TABLE_ROSTER: &str = "roster";
pub const TABLE_REGISTERED: &str = "registered";
pub const TABLE_VALIDATED: &str = "validated";

// ─── Columns ───

/// Roster columns: `username,email,role`
pub const ROSTER_COLUMNS: &[&str] = &["username", "email", "role"];

/// Registration / validation columns: `username,email,role,location,timestamp`
pub const ATTENDANCE_COLUMNS: &[&str] = &["username", "email", "role", "location", "timestamp"];

/// Timestamp layout written into attendance rows (local time)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Table definition bundle for store initialization
#[derive(Debug, Clone, Copy)]
pub struct TableDefinition {
    pub name: &'static str,
    pub columns: &'static [&'static str],
    /// Whether the table is created with its header when the file is absent
    pub bootstrap: bool,
}

pub fn roster_table() -> TableDefinition {
    TableDefinition {
        name: TABLE_ROSTER,
        columns: ROSTER_COLUMNS,
        bootstrap: false,
    }
}

pub fn registered_table() -> TableDefinition {
    TableDefinition {
        name: TABLE_REGISTERED,
        columns: ATTENDANCE_COLUMNS,
        bootstrap: true,
    }
}

pub fn validated_table() -> TableDefinition {
    TableDefinition {
        name: TABLE_VALIDATED,
        columns: ATTENDANCE_COLUMNS,
        bootstrap: true,
    }
}

/// Get all table definitions for ledger initialization
pub fn all_tables() -> Vec<TableDefinition> {
    vec![roster_table(), registered_table(), validated_table()]
}
