//! Roster — exact (username, email) lookup over the roster table
//!
//! Each query rescans the backing table. When the roster holds duplicate
//! rows for the same pair, the first one in table order wins.

use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::store::TableStore;

use super::types::*;

/// Read-only view over the roster table
#[derive(Clone)]
pub struct Roster {
    table: Arc<dyn TableStore>,
}

impl Roster {
    pub fn new(table: Arc<dyn TableStore>) -> Self {
        Self { table }
    }

    /// All roster entries in table order
    pub fn users(&self) -> Result<Vec<UserRecord>> {
        self.table
            .read_all()?
            .into_iter()
            .map(UserRecord::from_row)
            .collect()
    }

    /// Find the first user matching both username and email exactly
    pub fn lookup(&self, credentials: &Credentials) -> Result<Option<UserRecord>> {
        for row in self.table.read_all()? {
            let user = UserRecord::from_row(row)?;
            if user.matches(credentials) {
                debug!(username = %user.username, role = %user.role, "Roster match");
                return Ok(Some(user));
            }
        }
        debug!(username = %credentials.username, "No roster match");
        Ok(None)
    }

    /// Role of the user matching `credentials`, if any
    pub fn role_of(&self, credentials: &Credentials) -> Result<Option<Role>> {
        Ok(self.lookup(credentials)?.map(|user| user.role))
    }
}
