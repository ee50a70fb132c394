//! AttendanceDesk — the roster, both logs, and the operations over them
//!
//! # Usage
//!
//! ```rust,no_run
//! use attendance_ledger::{AttendanceConfig, AttendanceDesk, Credentials};
//!
//! fn main() -> attendance_ledger::Result<()> {
//!     let desk = AttendanceDesk::open(&AttendanceConfig::new("/data/attendance"))?;
//!
//!     // AI Developer registers and receives a token
//!     let dev = desk.login(&Credentials::new("alice", "a@x.com"))?.expect("on roster");
//!     println!("{}", desk.register(&dev, "NYC")?);
//!
//!     // Tech Lead pastes the token
//!     let lead = desk.login(&Credentials::new("tom", "t@x.com"))?.expect("on roster");
//!     let outcome = desk.validate(&lead, "YWxpY2V8YUB4LmNvbQ==", "NYC")?;
//!     println!("{outcome}");
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::AttendanceConfig;
use crate::error::Result;
use crate::ledger::{local_timestamp, AttendanceRecord, RegistrationLog, ValidationLog};
use crate::outcome::Outcome;
use crate::policy;
use crate::report;
use crate::roster::{Credentials, Roster, UserRecord};
use crate::schema;
use crate::store::{CsvTable, TableStore};
use crate::token;

/// Source of `YYYY-MM-DD HH:MM:SS` timestamps for new rows
pub type Clock = fn() -> String;

pub struct AttendanceDesk {
    roster: Roster,
    registrations: RegistrationLog,
    validations: ValidationLog,
    clock: Clock,
}

impl AttendanceDesk {
    /// Open the CSV tables under `config.base_path`
    ///
    /// The roster must exist; both logs are created with their header if
    /// absent.
    pub fn open(config: &AttendanceConfig) -> Result<Self> {
        let roster = CsvTable::open(config, schema::roster_table())?;
        let registered = CsvTable::open(config, schema::registered_table())?;
        let validated = CsvTable::open(config, schema::validated_table())?;

        info!(path = %config.base_path.display(), "Attendance ledger opened");
        Ok(Self::new(
            Arc::new(roster),
            Arc::new(registered),
            Arc::new(validated),
        ))
    }

    /// Build a desk over arbitrary table backends
    pub fn new(
        roster: Arc<dyn TableStore>,
        registered: Arc<dyn TableStore>,
        validated: Arc<dyn TableStore>,
    ) -> Self {
        Self {
            roster: Roster::new(roster),
            registrations: RegistrationLog::new(registered),
            validations: ValidationLog::new(validated),
            clock: local_timestamp,
        }
    }

    /// Override the timestamp source
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn registrations(&self) -> &RegistrationLog {
        &self.registrations
    }

    pub fn validations(&self) -> &ValidationLog {
        &self.validations
    }

    /// Authenticate by exact roster match
    pub fn login(&self, credentials: &Credentials) -> Result<Option<UserRecord>> {
        let user = self.roster.lookup(credentials)?;
        match &user {
            Some(user) => info!(username = %user.username, role = %user.role, "Login successful"),
            None => warn!(username = %credentials.username, "Login failed: not on roster"),
        }
        Ok(user)
    }

    /// Issue a token for `user` and record the intent to attend at `location`
    pub fn register(&self, user: &UserRecord, location: &str) -> Result<Outcome> {
        let token = token::encode(&user.username, &user.email);
        let record = AttendanceRecord::for_user(user, location, (self.clock)());
        self.registrations.append(&record)?;
        Ok(Outcome::Registered { token, record })
    }

    /// Decode a pasted token, authorize the scan, and record the validation
    ///
    /// The written row carries the subject's identity and role together with
    /// the scanner's `location`.
    pub fn validate(&self, scanner: &UserRecord, pasted: &str, location: &str) -> Result<Outcome> {
        let subject = match token::decode(pasted) {
            Ok(subject) => subject,
            Err(err) => {
                warn!(scanner = %scanner.username, error = %err, "Token decode failed");
                return Ok(Outcome::DecodeFailed(err));
            }
        };

        let subject_role = self.roster.role_of(&subject)?;
        let role = match policy::authorize(&scanner.role, subject_role.as_ref()) {
            Ok(role) => role.clone(),
            Err(denial) => {
                warn!(
                    scanner = %scanner.username,
                    subject = %subject.username,
                    "Scan denied: {denial}"
                );
                return Ok(Outcome::Denied(denial));
            }
        };

        let record = AttendanceRecord {
            username: subject.username,
            email: subject.email,
            role,
            location: location.to_string(),
            timestamp: (self.clock)(),
        };
        self.validations.append(&record)?;
        Ok(Outcome::Validated(record))
    }

    /// Validated attendance at exactly `location`
    pub fn attendance_at(&self, location: &str) -> Result<Outcome> {
        let records = self.validations.filter_by_location(location)?;
        let table = report::render(&records)?;
        info!(location, rows = records.len(), "Attendance report");
        Ok(Outcome::Report {
            location: location.to_string(),
            records,
            table,
        })
    }
}
