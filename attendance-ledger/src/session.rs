//! Session — one pass through login and the role-specific path
//!
//! ```text
//! Start ─▶ LoggedIn(role) ─┬─▶ Register  (AI Developer)
//!                          ├─▶ Validate  (Tech Lead)
//!                          ├─▶ Admin     (Admin)
//!                          └─▶ Rejected  (any other role)
//! ```
//!
//! Answers come from a [`Prompter`], so the same flow runs against a
//! terminal or a scripted list of answers. Every answer is trimmed.

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::desk::AttendanceDesk;
use crate::error::{AttendanceError, Result};
use crate::outcome::Outcome;
use crate::roster::{Credentials, Role, UserRecord};

// ─── Prompts ───

pub const PROMPT_USERNAME: &str = "Enter username: ";
pub const PROMPT_EMAIL: &str = "Enter email: ";
pub const PROMPT_LOCATION: &str = "Enter your location: ";
pub const PROMPT_ATTENDING: &str = "Will you attend offline? (yes/no): ";
pub const PROMPT_TOKEN: &str = "Paste the Base64 QR string from AI Developer: ";
pub const PROMPT_REPORT_LOCATION: &str = "Enter location to view attendance: ";

/// Source of answers to the session's questions
pub trait Prompter {
    /// Ask one question and return the raw answer
    fn ask(&mut self, prompt: &str) -> Result<String>;
}

/// Prompter answering from a fixed list, in order
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Prompts asked so far
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Answers not consumed by the session
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.asked.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| AttendanceError::InputClosed(prompt.trim().to_string()))
    }
}

/// Role-specific branch taken after login
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Path {
    Register,
    Validate,
    Admin,
    Rejected,
}

impl Path {
    pub fn for_role(role: &Role) -> Self {
        match role {
            Role::AiDeveloper => Self::Register,
            Role::TechLead => Self::Validate,
            Role::Admin => Self::Admin,
            Role::Other(_) => Self::Rejected,
        }
    }
}

/// A single run against an [`AttendanceDesk`]
pub struct Session<'a> {
    desk: &'a AttendanceDesk,
}

impl<'a> Session<'a> {
    pub fn new(desk: &'a AttendanceDesk) -> Self {
        Self { desk }
    }

    /// Log in, dispatch on role, and return how the run ended
    pub fn run(&self, prompter: &mut dyn Prompter) -> Result<Outcome> {
        let username = ask(prompter, PROMPT_USERNAME)?;
        let email = ask(prompter, PROMPT_EMAIL)?;

        let Some(user) = self.desk.login(&Credentials::new(username, email))? else {
            return Ok(Outcome::InvalidCredentials);
        };

        let path = Path::for_role(&user.role);
        debug!(username = %user.username, ?path, "Session dispatched");

        match path {
            Path::Register => self.register(&user, prompter),
            Path::Validate => self.validate(&user, prompter),
            Path::Admin => {
                let location = ask(prompter, PROMPT_REPORT_LOCATION)?;
                self.desk.attendance_at(&location)
            }
            Path::Rejected => {
                info!(username = %user.username, role = %user.role, "No permissions for role");
                Ok(Outcome::NoPermissions(user.role))
            }
        }
    }

    fn register(&self, user: &UserRecord, prompter: &mut dyn Prompter) -> Result<Outcome> {
        let location = ask(prompter, PROMPT_LOCATION)?;
        let attending = ask(prompter, PROMPT_ATTENDING)?.to_lowercase();

        if attending != "yes" {
            info!(username = %user.username, "Attendance declined");
            return Ok(Outcome::Declined);
        }
        self.desk.register(user, &location)
    }

    fn validate(&self, scanner: &UserRecord, prompter: &mut dyn Prompter) -> Result<Outcome> {
        let location = ask(prompter, PROMPT_LOCATION)?;
        let token = ask(prompter, PROMPT_TOKEN)?;
        self.desk.validate(scanner, &token, &location)
    }
}

fn ask(prompter: &mut dyn Prompter, prompt: &str) -> Result<String> {
    Ok(prompter.ask(prompt)?.trim().to_string())
}
