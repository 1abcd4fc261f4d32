//! # Response Classification
//!
//! The booking API answers with bare status codes and usually an empty body,
//! so the status is what distinguishes "bad input" from "already taken".
//! A request that never got a status at all is kept apart from every status
//! so it can be reported as an unreachable server.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use slotbook_core::errors::{ScheduleError, ScheduleResult};
use slotbook_core::notice::{Notice, Operation};
use thiserror::Error;
use tracing::warn;

/// A failure tagged with the operation that produced it, so the right
/// wording can be picked for the user.
#[derive(Error, Debug)]
#[error("{operation:?} failed: {error}")]
pub struct OperationError {
    pub operation: Operation,
    #[source]
    pub error: ScheduleError,
}

impl OperationError {
    pub fn new(operation: Operation, error: ScheduleError) -> Self {
        Self { operation, error }
    }

    pub fn notice(&self, user_name: &str) -> Notice {
        Notice::for_failure(self.operation, &self.error, user_name)
    }
}

/// Converts a `reqwest` failure that happened before a status arrived.
pub(crate) fn transport_error(err: reqwest::Error) -> ScheduleError {
    warn!(error = %err, "booking API unreachable");
    ScheduleError::NoResponse(err.to_string())
}

/// Passes `response` through if it carries `expected`, otherwise drains the
/// body into the matching error.
pub(crate) async fn expect_status(
    response: Response,
    expected: StatusCode,
) -> ScheduleResult<Response> {
    let status = response.status();
    if status == expected {
        return Ok(response);
    }

    let url = response.url().clone();
    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => {
            warn!(%status, %url, error = %err, "could not read rejection body");
            String::new()
        }
    };
    let message = if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("no reason given")
            .to_string()
    } else {
        body
    };

    warn!(%status, %url, expected = %expected, "booking API rejected request");
    Err(ScheduleError::from_status(status.as_u16(), message))
}

/// Reads a JSON body. An empty body or a literal `null` yields `None`.
pub(crate) async fn read_optional_json<T: DeserializeOwned>(
    response: Response,
) -> ScheduleResult<Option<T>> {
    let body = response.text().await.map_err(transport_error)?;
    let body = body.trim();
    if body.is_empty() || body == "null" {
        return Ok(None);
    }
    serde_json::from_str(body)
        .map(Some)
        .map_err(|e| ScheduleError::Internal(Box::new(e)))
}

/// Reads a JSON body that must be present. A success status with nothing
/// in the body is reported under that status, not as a missing resource.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> ScheduleResult<T> {
    let status = response.status();
    let url = response.url().to_string();
    read_optional_json(response)
        .await?
        .ok_or_else(|| ScheduleError::UnexpectedStatus {
            status: status.as_u16(),
            message: format!("empty response body from {url}"),
        })
}
