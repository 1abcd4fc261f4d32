use serde::{Deserialize, Serialize};

/// Someone who publishes availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interviewer {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Someone who books one of the published slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Name and email as the backend expects them when referring to a user it
/// has already registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub email: String,
}

impl From<&Interviewer> for Participant {
    fn from(interviewer: &Interviewer) -> Self {
        Self {
            name: interviewer.name.clone(),
            email: interviewer.email.clone(),
        }
    }
}
