//! Who is using the tool. Handed to whatever needs it instead of being read
//! from ambient storage.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calendar::Perspective;
use crate::errors::ScheduleError;
use crate::models::user::Participant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Interviewer,
    Candidate,
}

impl FromStr for Role {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "interviewer" => Ok(Role::Interviewer),
            "candidate" => Ok(Role::Candidate),
            other => Err(ScheduleError::Config(format!(
                "unknown role '{other}', expected interviewer or candidate"
            ))),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Interviewer => f.write_str("interviewer"),
            Role::Candidate => f.write_str("candidate"),
        }
    }
}

impl From<Role> for Perspective {
    fn from(role: Role) -> Self {
        match role {
            Role::Interviewer => Perspective::Interviewer,
            Role::Candidate => Perspective::Candidate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl UserProfile {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    pub fn participant(&self) -> Participant {
        Participant {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<UserProfile>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user: UserProfile) -> Self {
        Self { user: Some(user) }
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// The current user, provided they act in `role`.
    pub fn require(&self, role: Role) -> Result<&UserProfile, ScheduleError> {
        match &self.user {
            Some(user) if user.role == role => Ok(user),
            Some(user) => Err(ScheduleError::Authorization(format!(
                "{} is signed in as {}, this needs the {role} role",
                user.name, user.role
            ))),
            None => Err(ScheduleError::Authorization(format!(
                "no user configured, this needs the {role} role"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ada() -> UserProfile {
        UserProfile {
            id: 3,
            name: "Ada King Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::Interviewer,
        }
    }

    #[rstest]
    #[case("interviewer", Role::Interviewer)]
    #[case(" Candidate ", Role::Candidate)]
    fn parses_roles(#[case] input: &str, #[case] expected: Role) {
        assert_eq!(input.parse::<Role>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_role() {
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn require_checks_role() {
        let session = Session::signed_in(ada());

        assert_eq!(session.require(Role::Interviewer).unwrap().first_name(), "Ada");
        assert!(session.require(Role::Candidate).is_err());
        assert!(Session::anonymous().require(Role::Interviewer).is_err());
    }

    #[test]
    fn participant_copies_name_and_email() {
        let participant = ada().participant();

        assert_eq!(participant.name, "Ada King Lovelace");
        assert_eq!(participant.email, "ada@example.com");
    }
}
