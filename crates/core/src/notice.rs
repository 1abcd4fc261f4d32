//! Short-lived messages shown to the user after an action.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ScheduleError;
use crate::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Info,
    Warning,
    Success,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Error => "error",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Success => "success",
        };
        f.write_str(label)
    }
}

/// The remote operation a failure came from; each has its own wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateSlots,
    AssignSlot,
    FindSlotByTime,
    ListAvailable,
    InterviewerSlots,
    CandidateSlot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn slots_created() -> Self {
        Self::success("Slots created!")
    }

    pub fn slot_assigned() -> Self {
        Self::success("Slot Assigned")
    }

    /// Words a failed `operation` for `user_name`.
    pub fn for_failure(operation: Operation, error: &ScheduleError, user_name: &str) -> Self {
        use Operation::*;
        use Severity::{Error, Info};

        if let ScheduleError::Validation(validation) = error {
            return Self::from(*validation);
        }
        if let ScheduleError::NoResponse(_) = error {
            return Self::new("No server response", Error);
        }

        let status = error.status();
        match (operation, status) {
            (CreateSlots | AssignSlot, Some(400)) => Self::new("Bad inputs!", Error),
            (CreateSlots, Some(404)) => {
                Self::new("Creating slots is only available for Interviewers", Error)
            }
            (CreateSlots, Some(409)) => Self::new("Slot already exists", Error),
            (CreateSlots, _) => Self::new("Unable to create Slots", Error),

            (AssignSlot, Some(404)) => Self::new("Couldn't find Slot's Interviewer", Error),
            (AssignSlot, Some(409)) => Self::new("Slot is already assigned", Error),
            (AssignSlot, _) => Self::new("Unable to Assign Slot", Error),

            (FindSlotByTime, Some(404)) => Self::new("Select an Available Interview Slot!", Error),
            (FindSlotByTime, _) => Self::new("Unable to create Slots", Error),

            (ListAvailable, Some(404)) => {
                Self::new(format!("{user_name} is not an Interviewer"), Error)
            }
            (InterviewerSlots, Some(404)) => {
                Self::new(format!("{user_name} is not an Interviewer!"), Info)
            }
            (ListAvailable | InterviewerSlots, _) => {
                Self::new("Unable to get Your Interview Slots", Info)
            }

            (CandidateSlot, Some(404)) => Self::new("You have no Slot assigned", Info),
            (CandidateSlot, _) => Self::new("Unable to get Your Interview Slot", Info),
        }
    }
}

impl From<ValidationError> for Notice {
    fn from(error: ValidationError) -> Self {
        Self::new(error.to_string(), error.severity())
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Operation::CreateSlots, 400, "Bad inputs!")]
    #[case(Operation::CreateSlots, 404, "Creating slots is only available for Interviewers")]
    #[case(Operation::CreateSlots, 409, "Slot already exists")]
    #[case(Operation::CreateSlots, 500, "Unable to create Slots")]
    #[case(Operation::AssignSlot, 400, "Bad inputs!")]
    #[case(Operation::AssignSlot, 404, "Couldn't find Slot's Interviewer")]
    #[case(Operation::AssignSlot, 409, "Slot is already assigned")]
    #[case(Operation::AssignSlot, 503, "Unable to Assign Slot")]
    #[case(Operation::FindSlotByTime, 404, "Select an Available Interview Slot!")]
    #[case(Operation::FindSlotByTime, 409, "Unable to create Slots")]
    fn error_notices_by_status(
        #[case] operation: Operation,
        #[case] status: u16,
        #[case] expected: &str,
    ) {
        let error = ScheduleError::from_status(status, "backend says no");
        let notice = Notice::for_failure(operation, &error, "Ada Lovelace");

        assert_eq!(notice, Notice::new(expected, Severity::Error));
    }

    #[rstest]
    #[case(Operation::InterviewerSlots, 404, "Ada Lovelace is not an Interviewer!")]
    #[case(Operation::InterviewerSlots, 500, "Unable to get Your Interview Slots")]
    #[case(Operation::ListAvailable, 500, "Unable to get Your Interview Slots")]
    #[case(Operation::CandidateSlot, 404, "You have no Slot assigned")]
    #[case(Operation::CandidateSlot, 400, "Unable to get Your Interview Slot")]
    fn informational_notices_by_status(
        #[case] operation: Operation,
        #[case] status: u16,
        #[case] expected: &str,
    ) {
        let error = ScheduleError::from_status(status, "");
        let notice = Notice::for_failure(operation, &error, "Ada Lovelace");

        assert_eq!(notice, Notice::new(expected, Severity::Info));
    }

    #[test]
    fn listing_as_non_interviewer_is_an_error() {
        let error = ScheduleError::NotFound("no such interviewer".into());
        let notice = Notice::for_failure(Operation::ListAvailable, &error, "Grace");

        assert_eq!(notice, Notice::new("Grace is not an Interviewer", Severity::Error));
    }

    #[test]
    fn transport_failure_is_not_a_status() {
        let error = ScheduleError::NoResponse("connection refused".into());

        assert_eq!(error.status(), None);
        for operation in [Operation::CreateSlots, Operation::CandidateSlot] {
            assert_eq!(
                Notice::for_failure(operation, &error, "x"),
                Notice::new("No server response", Severity::Error)
            );
        }
    }

    #[test]
    fn validation_errors_keep_their_own_wording() {
        let error = ScheduleError::from(ValidationError::HoursOutOfOrder);
        let notice = Notice::for_failure(Operation::CreateSlots, &error, "x");

        assert_eq!(notice.severity, Severity::Warning);
        assert_eq!(notice.to_string(), "[warning] Can't start at an hour earlier than/equal to the end hour!");
    }

    #[test]
    fn missing_fields_notice() {
        assert_eq!(
            Notice::from(ValidationError::MissingFields),
            Notice::new("Please fill all the fields", Severity::Error)
        );
    }
}
