use thiserror::Error;

use crate::validation::ValidationError;

/// Everything that can go wrong between a filled-in form and a booked slot.
///
/// The time arithmetic in [`crate::slots`] never produces one of these; they
/// come from input parsing, form validation and the remote booking API.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus { status: u16, message: String },

    /// The request never produced an HTTP status (refused, timed out, DNS...).
    #[error("No server response: {0}")]
    NoResponse(String),

    #[error("Invalid date or time: {0}")]
    TimeParse(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ScheduleError {
    /// Classifies a non-success HTTP status returned by the booking API.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            400 => ScheduleError::BadRequest(message),
            404 => ScheduleError::NotFound(message),
            409 => ScheduleError::Conflict(message),
            _ => ScheduleError::UnexpectedStatus { status, message },
        }
    }

    /// The HTTP status behind this error, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ScheduleError::BadRequest(_) => Some(400),
            ScheduleError::NotFound(_) => Some(404),
            ScheduleError::Conflict(_) => Some(409),
            ScheduleError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
