//! Roster domain types — Role, Credentials, UserRecord

use serde::{Deserialize, Serialize};

use crate::error::{AttendanceError, Result};
use crate::schema;
use crate::store::Row;

/// Roster roles, matched by exact (case-sensitive) string
///
/// Any unrecognized role string is kept verbatim in [`Role::Other`] and
/// grants no permissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    AiDeveloper,
    TechLead,
    Admin,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Self::AiDeveloper => "AI Developer",
            Self::TechLead => "Tech Lead",
            Self::Admin => "Admin",
            Self::Other(s) => s,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "AI Developer" => Self::AiDeveloper,
            "Tech Lead" => Self::TechLead,
            "Admin" => Self::Admin,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match Self::parse(&s) {
            Self::Other(_) => Self::Other(s),
            known => known,
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Login identity: the (username, email) pair carried by a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub email: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }
}

/// User record — one roster row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl UserRecord {
    pub fn new(username: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            role,
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.email.clone())
    }

    pub fn matches(&self, credentials: &Credentials) -> bool {
        self.username == credentials.username && self.email == credentials.email
    }

    pub(crate) fn from_row(row: Row) -> Result<Self> {
        let [username, email, role]: [String; 3] =
            row.try_into().map_err(|row: Row| AttendanceError::RowWidth {
                table: schema::TABLE_ROSTER.to_string(),
                expected: schema::ROSTER_COLUMNS.len(),
                actual: row.len(),
            })?;
        Ok(Self {
            username,
            email,
            role: Role::from(role),
        })
    }

    pub fn into_row(self) -> Row {
        vec![self.username, self.email, self.role.into()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_exact_match() {
        assert_eq!(Role::parse("AI Developer"), Role::AiDeveloper);
        assert_eq!(Role::parse("Tech Lead"), Role::TechLead);
        assert_eq!(Role::parse("Admin"), Role::Admin);
        assert_eq!(Role::parse("tech lead"), Role::Other("tech lead".into()));
        assert_eq!(Role::parse(""), Role::Other(String::new()));
    }

    #[test]
    fn test_role_display_keeps_other_verbatim() {
        assert_eq!(Role::TechLead.to_string(), "Tech Lead");
        assert_eq!(Role::parse("Intern").to_string(), "Intern");
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&Role::AiDeveloper).unwrap();
        assert_eq!(json, "\"AI Developer\"");
        let parsed: Role = serde_json::from_str("\"Designer\"").unwrap();
        assert_eq!(parsed, Role::Other("Designer".into()));
    }

    #[test]
    fn test_user_row_conversion() {
        let user = UserRecord::new("alice", "a@x.com", Role::AiDeveloper);
        let row = user.clone().into_row();
        assert_eq!(row, vec!["alice", "a@x.com", "AI Developer"]);
        assert_eq!(UserRecord::from_row(row).unwrap(), user);
        assert!(UserRecord::from_row(vec!["alice".into()]).is_err());
    }
}
