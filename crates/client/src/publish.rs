use chrono::TimeZone;
use slotbook_core::{
    errors::ScheduleError,
    models::{
        interview_slot::{CreateSlotRequest, InterviewSlot},
        user::Participant,
    },
    notice::{Notice, Operation},
    slots::Slot,
    validation::Availability,
};
use tracing::{info, warn};

use crate::client::BookingClient;

/// Outcome of publishing a range: every slot lands in exactly one list.
#[derive(Debug, Default)]
pub struct PublishReport {
    pub created: Vec<InterviewSlot>,
    pub failed: Vec<(Slot, ScheduleError)>,
}

impl PublishReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// One notice per failed slot, then a success notice if anything was
    /// created.
    pub fn notices(&self, user_name: &str) -> Vec<Notice> {
        let mut notices: Vec<Notice> = self
            .failed
            .iter()
            .map(|(_, error)| Notice::for_failure(Operation::CreateSlots, error, user_name))
            .collect();
        if !self.created.is_empty() {
            notices.push(Notice::slots_created());
        }
        notices
    }
}

impl BookingClient {
    /// Creates one slot per hour of `availability` on behalf of `interviewer`.
    ///
    /// Slots are sent one after another; a rejected slot is recorded and the
    /// rest are still attempted.
    pub async fn publish_availability<Tz: TimeZone>(
        &self,
        availability: &Availability<Tz>,
        interviewer: &Participant,
    ) -> PublishReport {
        let slots = availability.slots();
        info!(
            count = slots.len(),
            day = %availability.day().date(),
            interviewer = %interviewer.email,
            "publishing availability"
        );

        let mut report = PublishReport::default();
        for slot in slots {
            let request = CreateSlotRequest {
                time: slot,
                interviewer: interviewer.clone(),
            };
            match self.create_slot(&request).await {
                Ok(created) => report.created.push(created),
                Err(error) => {
                    warn!(%slot, %error, "slot was not created");
                    report.failed.push((slot, error));
                }
            }
        }

        info!(
            created = report.created.len(),
            failed = report.failed.len(),
            "availability published"
        );
        report
    }
}
