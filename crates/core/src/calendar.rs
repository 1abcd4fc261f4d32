//! Week-calendar entries derived from booked and open slots.

use serde::{Deserialize, Serialize};

use crate::models::interview_slot::InterviewSlot;
use crate::slots::{Slot, shift_by_hours, to_json_time};

/// Whose calendar an entry is drawn on; decides whose name goes in the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perspective {
    Interviewer,
    Candidate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    pub start_date: String,
    pub end_date: String,
    pub title: String,
}

impl CalendarEntry {
    /// One-hour entry for `slot`, titled after the other party if there is one.
    pub fn from_slot(slot: &InterviewSlot, perspective: Perspective) -> Self {
        let counterpart = match perspective {
            Perspective::Interviewer => slot.candidate.as_ref().map(|c| c.name.as_str()),
            Perspective::Candidate => slot.interviewer.as_ref().map(|i| i.name.as_str()),
        };

        Self {
            title: counterpart
                .map(|name| format!("Interview with {name}"))
                .unwrap_or_default(),
            ..Self::open(&slot.time)
        }
    }

    /// Untitled entry for a slot nobody has booked, or that is not stored yet.
    pub fn open(slot: &Slot) -> Self {
        Self {
            start_date: slot.to_string(),
            end_date: to_json_time(&shift_by_hours(&slot.start(), 1)),
            title: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::{Candidate, Interviewer};
    use fake::Fake;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::Name;
    use pretty_assertions::assert_eq;

    fn slot(candidate: Option<Candidate>) -> InterviewSlot {
        InterviewSlot {
            id: 7,
            time: Slot::parse("2024-03-11T09:00:00").unwrap(),
            interviewer: Some(Interviewer {
                id: 1,
                name: "Grace Hopper".to_string(),
                email: SafeEmail().fake(),
            }),
            candidate,
        }
    }

    #[test]
    fn open_slot_has_empty_title() {
        let entry = CalendarEntry::from_slot(&slot(None), Perspective::Interviewer);

        assert_eq!(
            entry,
            CalendarEntry {
                start_date: "2024-03-11T09:00:00Z".to_string(),
                end_date: "2024-03-11T10:00:00.000Z".to_string(),
                title: String::new(),
            }
        );
    }

    #[test]
    fn open_entry_matches_unbooked_slot() {
        let unbooked = slot(None);

        assert_eq!(
            CalendarEntry::open(&unbooked.time),
            CalendarEntry::from_slot(&unbooked, Perspective::Candidate)
        );
    }

    #[test]
    fn title_names_the_other_party() {
        let name: String = Name().fake();
        let booked = slot(Some(Candidate {
            id: 2,
            name: name.clone(),
            email: SafeEmail().fake(),
        }));

        let for_interviewer = CalendarEntry::from_slot(&booked, Perspective::Interviewer);
        let for_candidate = CalendarEntry::from_slot(&booked, Perspective::Candidate);

        assert_eq!(for_interviewer.title, format!("Interview with {name}"));
        assert_eq!(for_candidate.title, "Interview with Grace Hopper");
    }

    #[test]
    fn serializes_with_scheduler_field_names() {
        let entry = CalendarEntry::from_slot(&slot(None), Perspective::Candidate);
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["startDate"], "2024-03-11T09:00:00Z");
        assert_eq!(json["endDate"], "2024-03-11T10:00:00.000Z");
        assert_eq!(json["title"], "Interview with Grace Hopper");
    }
}
