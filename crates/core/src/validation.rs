//! Form checks that gate slot generation.
//!
//! [`crate::slots`] trusts its input; these forms are where an unfilled
//! field, a reversed range or a half-past hour gets turned away.

use chrono::{DateTime, TimeZone, Timelike};
use thiserror::Error;

use crate::notice::Severity;
use crate::slots::{CalendarDay, Slot, SlotRange, canonicalize, combine_day_and_hour, expand_range};

/// Why a form was rejected. The display text is shown to the user as is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill all the fields")]
    MissingFields,

    #[error("Can't start at an hour earlier than/equal to the end hour!")]
    HoursOutOfOrder,

    #[error("Only o'clock sharp hours!")]
    NotOnTheHour,
}

impl ValidationError {
    pub fn severity(&self) -> Severity {
        match self {
            ValidationError::HoursOutOfOrder => Severity::Warning,
            ValidationError::MissingFields | ValidationError::NotOnTheHour => Severity::Error,
        }
    }
}

/// An interviewer's availability as entered, fields possibly blank.
#[derive(Debug, Clone)]
pub struct AvailabilityForm<Tz: TimeZone> {
    pub day: Option<CalendarDay<Tz>>,
    pub start_hour: Option<DateTime<Tz>>,
    pub end_hour: Option<DateTime<Tz>>,
}

impl<Tz: TimeZone> AvailabilityForm<Tz> {
    /// Checks presence, then ordering, then that both hours are sharp.
    pub fn validate(self) -> Result<Availability<Tz>, ValidationError> {
        let (Some(day), Some(start_hour), Some(end_hour)) = (self.day, self.start_hour, self.end_hour)
        else {
            return Err(ValidationError::MissingFields);
        };

        if start_hour.time() >= end_hour.time() {
            return Err(ValidationError::HoursOutOfOrder);
        }
        if start_hour.minute() != 0 || end_hour.minute() != 0 {
            return Err(ValidationError::NotOnTheHour);
        }

        Ok(Availability {
            day,
            start_hour,
            end_hour,
        })
    }
}

/// Availability that passed [`AvailabilityForm::validate`].
#[derive(Debug, Clone)]
pub struct Availability<Tz: TimeZone> {
    day: CalendarDay<Tz>,
    start_hour: DateTime<Tz>,
    end_hour: DateTime<Tz>,
}

impl<Tz: TimeZone> Availability<Tz> {
    pub fn day(&self) -> &CalendarDay<Tz> {
        &self.day
    }

    pub fn start_hour(&self) -> &DateTime<Tz> {
        &self.start_hour
    }

    pub fn end_hour(&self) -> &DateTime<Tz> {
        &self.end_hour
    }

    pub fn slots(&self) -> SlotRange {
        expand_range(self.day.as_datetime(), &self.start_hour, &self.end_hour)
    }
}

/// A candidate's pick of a single hour.
#[derive(Debug, Clone)]
pub struct ClaimForm<Tz: TimeZone> {
    pub day: Option<CalendarDay<Tz>>,
    pub hour: Option<DateTime<Tz>>,
}

impl<Tz: TimeZone> ClaimForm<Tz> {
    pub fn validate(self) -> Result<Slot, ValidationError> {
        let (Some(day), Some(hour)) = (self.day, self.hour) else {
            return Err(ValidationError::MissingFields);
        };
        if hour.minute() != 0 {
            return Err(ValidationError::NotOnTheHour);
        }

        Ok(canonicalize(&combine_day_and_hour(day.as_datetime(), &hour)))
    }
}
