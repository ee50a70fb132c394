//! Roster module — read-only directory of known users and their roles
//!
//! The roster table is provisioned externally and never written here.

pub mod types;
pub mod store;

pub use store::Roster;
pub use types::{Credentials, Role, UserRecord};
