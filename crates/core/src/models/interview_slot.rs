use serde::{Deserialize, Serialize};

use super::user::{Candidate, Interviewer, Participant};
use crate::slots::Slot;

/// A slot as stored by the booking backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewSlot {
    pub id: i64,
    pub time: Slot,
    #[serde(default)]
    pub interviewer: Option<Interviewer>,
    #[serde(default)]
    pub candidate: Option<Candidate>,
}

impl InterviewSlot {
    pub fn is_available(&self) -> bool {
        self.candidate.is_none()
    }
}

/// Body of the request that publishes one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSlotRequest {
    pub time: Slot,
    pub interviewer: Participant,
}
