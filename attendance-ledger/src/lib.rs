//! # Attendance Ledger
//!
//! Offline attendance tracking over three flat CSV tables: a roster of
//! known users, a registration log, and a validation log.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │              Session (prompts)            │
//! ├───────────────────────────────────────────┤
//! │              AttendanceDesk               │
//! │   login · register · validate · report    │
//! ├──────────┬──────────┬─────────┬───────────┤
//! │  Roster  │  Token   │ Policy  │  Ledger   │
//! │ (lookup) │ (base64) │ (scan)  │ (reg/val) │
//! ├──────────┴──────────┴─────────┴───────────┤
//! │        TableStore (CSV via polars)        │
//! └───────────────────────────────────────────┘
//! ```
//!
//! ## Flow
//!
//! - **AI Developer**: logs in, confirms attendance, receives a token, and a
//!   registration row is appended.
//! - **Tech Lead**: pastes a token; if it decodes to an AI Developer on the
//!   roster, a validation row is appended.
//! - **Admin**: lists validation rows for one location.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use attendance_ledger::{AttendanceConfig, AttendanceDesk, ScriptedPrompter, Session};
//!
//! fn main() -> attendance_ledger::Result<()> {
//!     let desk = AttendanceDesk::open(&AttendanceConfig::new("/data/attendance"))?;
//!
//!     let mut answers = ScriptedPrompter::new(["alice", "a@x.com", "NYC", "yes"]);
//!     let outcome = Session::new(&desk).run(&mut answers)?;
//!     println!("{outcome}");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod desk;
pub mod error;
pub mod ledger;
pub mod outcome;
pub mod policy;
pub mod report;
pub mod roster;
pub mod schema;
pub mod session;
pub mod store;
pub mod token;

// Re-exports for convenience
pub use config::AttendanceConfig;
pub use desk::AttendanceDesk;
pub use error::{AttendanceError, Result};
pub use ledger::{AttendanceRecord, RegistrationLog, ValidationLog};
pub use outcome::Outcome;
pub use policy::{authorize, Denial};
pub use roster::{Credentials, Role, Roster, UserRecord};
pub use session::{Prompter, ScriptedPrompter, Session};
pub use token::DecodeError;
