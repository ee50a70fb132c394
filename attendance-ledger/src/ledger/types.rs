//! Ledger domain types — AttendanceRecord and timestamps

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::{AttendanceError, Result};
use crate::roster::{Role, UserRecord};
use crate::schema;
use crate::store::Row;

/// Current local time in the ledger's `YYYY-MM-DD HH:MM:SS` layout
pub fn local_timestamp() -> String {
    Local::now().format(schema::TIMESTAMP_FORMAT).to_string()
}

/// Attendance record — one row of the registration or validation log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub username: String,
    pub email: String,
    pub role: Role,
    pub location: String,
    pub timestamp: String,
}

impl AttendanceRecord {
    /// Record for `user` at `location`, stamped with `timestamp`
    pub fn for_user(user: &UserRecord, location: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            location: location.into(),
            timestamp: timestamp.into(),
        }
    }

    pub(crate) fn from_row(table: &str, row: Row) -> Result<Self> {
        let [username, email, role, location, timestamp]: [String; 5] =
            row.try_into().map_err(|row: Row| AttendanceError::RowWidth {
                table: table.to_string(),
                expected: schema::ATTENDANCE_COLUMNS.len(),
                actual: row.len(),
            })?;
        Ok(Self {
            username,
            email,
            role: Role::from(role),
            location,
            timestamp,
        })
    }

    pub fn into_row(self) -> Row {
        vec![
            self.username,
            self.email,
            self.role.into(),
            self.location,
            self.timestamp,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_timestamp_layout() {
        let ts = local_timestamp();
        assert_eq!(ts.len(), 19);
        assert!(NaiveDateTime::parse_from_str(&ts, schema::TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_row_column_order() {
        let user = UserRecord::new("alice", "a@x.com", Role::AiDeveloper);
        let row = AttendanceRecord::for_user(&user, "NYC", "2026-03-01 10:00:00").into_row();
        assert_eq!(
            row,
            vec!["alice", "a@x.com", "AI Developer", "NYC", "2026-03-01 10:00:00"]
        );
    }
}
