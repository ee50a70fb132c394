//! Configuration for the attendance ledger

use std::path::{Path, PathBuf};

use crate::schema;

/// Environment variable naming the directory that holds the tables
pub const DATA_DIR_ENV: &str = "ATTENDANCE_DATA_DIR";

/// Ledger configuration
#[derive(Debug, Clone)]
pub struct AttendanceConfig {
    /// Directory holding all three CSV tables
    pub base_path: PathBuf,

    /// Roster file name (provisioned externally, read-only)
    pub roster_file: String,

    /// Registration log file name
    pub registered_file: String,

    /// Validation log file name
    pub validated_file: String,
}

impl AttendanceConfig {
    /// Create config with the default file names
    ///
    /// # Arguments
    /// * `base_path` - Directory for the CSV tables.
    ///   Layout:
    ///   ```text
    ///   base_path/
    ///   ├── users.csv        (roster: username,email,role)
    ///   ├── registered.csv   (registration log)
    ///   └── validated.csv    (validation log)
    ///   ```
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            roster_file: "users.csv".to_string(),
            registered_file: "registered.csv".to_string(),
            validated_file: "validated.csv".to_string(),
        }
    }

    /// Config rooted at `$ATTENDANCE_DATA_DIR`, or the working directory
    pub fn from_env() -> Self {
        let base = std::env::var(DATA_DIR_ENV).unwrap_or_else(|_| ".".to_string());
        Self::new(base)
    }

    /// Override the roster file name
    pub fn with_roster_file(mut self, file: impl Into<String>) -> Self {
        self.roster_file = file.into();
        self
    }

    /// Override the registration log file name
    pub fn with_registered_file(mut self, file: impl Into<String>) -> Self {
        self.registered_file = file.into();
        self
    }

    /// Override the validation log file name
    pub fn with_validated_file(mut self, file: impl Into<String>) -> Self {
        self.validated_file = file.into();
        self
    }

    /// Get the file path backing a table
    pub fn table_path(&self, table_name: &str) -> PathBuf {
        let file = match table_name {
            schema::TABLE_ROSTER => self.roster_file.clone(),
            schema::TABLE_REGISTERED => self.registered_file.clone(),
            schema::TABLE_VALIDATED => self.validated_file.clone(),
            other => format!("{other}.csv"),
        };
        self.base_path.join(file)
    }
}
