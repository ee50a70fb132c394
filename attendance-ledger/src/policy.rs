//! Scan authorization
//!
//! A scan validates attendance only when a Tech Lead scans an AI Developer.
//! Every other pairing, including a subject missing from the roster, is
//! denied without retry.

use serde::{Deserialize, Serialize};

use crate::roster::Role;

/// A rejected scan, naming the scanner's role and the subject's role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Denial {
    pub scanner: Role,
    /// `None` when the decoded identity is not on the roster
    pub subject: Option<Role>,
}

impl std::fmt::Display for Denial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.subject {
            Some(subject) => write!(f, "{} is not authorized to scan {}", self.scanner, subject),
            None => write!(f, "{} is not authorized to scan unknown", self.scanner),
        }
    }
}

/// Decide whether `scanner` may validate a subject holding `subject`
///
/// Returns the subject's role when the scan is allowed.
pub fn authorize<'a>(scanner: &Role, subject: Option<&'a Role>) -> Result<&'a Role, Denial> {
    match subject {
        Some(role) if *scanner == Role::TechLead && *role == Role::AiDeveloper => Ok(role),
        _ => Err(Denial {
            scanner: scanner.clone(),
            subject: subject.cloned(),
        }),
    }
}
