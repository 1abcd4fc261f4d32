use std::time::Duration;

use reqwest::StatusCode;
use slotbook_core::{
    errors::{ScheduleError, ScheduleResult},
    models::interview_slot::{CreateSlotRequest, InterviewSlot},
    notice::Operation,
    slots::Slot,
};
use tracing::{debug, info};

use crate::response::{OperationError, expect_status, read_json, read_optional_json, transport_error};

/// Client for the booking API rooted at `base_url`
/// (for example `http://localhost:8080/api/scheduler`).
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct BookingClient {
    http: reqwest::Client,
    base_url: String,
}

impl BookingClient {
    /// Builds a client whose requests give up after `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ScheduleResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ScheduleError::Internal(Box::new(e)))?;

        Ok(Self::with_http(http, base_url))
    }

    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Publishes one slot. The backend answers 201 on success, 400 for a
    /// malformed or past time, 404 when the interviewer is unknown and 409
    /// when the slot already exists.
    pub async fn create_slot(&self, request: &CreateSlotRequest) -> ScheduleResult<InterviewSlot> {
        debug!(time = %request.time, interviewer = %request.interviewer.email, "creating slot");

        let response = self
            .http
            .post(self.url("/interviewslot"))
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        read_json(expect_status(response, StatusCode::CREATED).await?).await
    }

    /// Every slot no candidate has claimed yet.
    pub async fn available_slots(&self) -> ScheduleResult<Vec<InterviewSlot>> {
        debug!("listing available slots");

        let response = self
            .http
            .get(self.url("/interviewslot/available"))
            .send()
            .await
            .map_err(transport_error)?;

        let slots = read_optional_json(expect_status(response, StatusCode::OK).await?).await?;
        Ok(slots.unwrap_or_default())
    }

    /// The open slot starting at `slot`, if the backend has one.
    pub async fn available_slot_by_time(&self, slot: &Slot) -> ScheduleResult<InterviewSlot> {
        debug!(%slot, "looking up open slot");

        let response = self
            .http
            .get(self.url("/interviewslot/availablebytime"))
            .query(&[("time", slot.to_string())])
            .send()
            .await
            .map_err(transport_error)?;

        read_json(expect_status(response, StatusCode::OK).await?).await
    }

    /// Books slot `slot_id` for candidate `candidate_id`.
    pub async fn assign_slot(&self, slot_id: i64, candidate_id: i64) -> ScheduleResult<InterviewSlot> {
        debug!(slot_id, candidate_id, "assigning slot");

        let response = self
            .http
            .put(self.url("/interviewslot"))
            .query(&[("slotId", slot_id), ("candidateId", candidate_id)])
            .send()
            .await
            .map_err(transport_error)?;

        read_json(expect_status(response, StatusCode::OK).await?).await
    }

    /// Finds the open slot at `slot` and books it for `candidate_id`.
    pub async fn claim_slot(&self, slot: &Slot, candidate_id: i64) -> Result<InterviewSlot, OperationError> {
        let open = self
            .available_slot_by_time(slot)
            .await
            .map_err(|e| OperationError::new(Operation::FindSlotByTime, e))?;

        let booked = self
            .assign_slot(open.id, candidate_id)
            .await
            .map_err(|e| OperationError::new(Operation::AssignSlot, e))?;

        info!(%slot, slot_id = booked.id, candidate_id, "slot claimed");
        Ok(booked)
    }

    /// Slots published by interviewer `interviewer_id`, booked or not.
    pub async fn interviewer_slots(&self, interviewer_id: i64) -> ScheduleResult<Vec<InterviewSlot>> {
        debug!(interviewer_id, "listing interviewer slots");

        let response = self
            .http
            .get(self.url(&format!("/interviewer/interviewslot/{interviewer_id}")))
            .send()
            .await
            .map_err(transport_error)?;

        let slots = read_optional_json(expect_status(response, StatusCode::OK).await?).await?;
        Ok(slots.unwrap_or_default())
    }

    /// The slot booked by candidate `candidate_id`, or `None` if they have
    /// not claimed one.
    pub async fn candidate_slot(&self, candidate_id: i64) -> ScheduleResult<Option<InterviewSlot>> {
        debug!(candidate_id, "fetching candidate slot");

        let response = self
            .http
            .get(self.url(&format!("/candidate/interviewslot/{candidate_id}")))
            .send()
            .await
            .map_err(transport_error)?;

        read_optional_json(expect_status(response, StatusCode::OK).await?).await
    }
}
