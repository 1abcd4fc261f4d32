//! # SlotBook Client
//!
//! Typed async access to the remote booking API that stores interview slots.
//! The backend owns persistence and conflict detection; this crate only
//! shapes requests and classifies the answers.
//!
//! ## Layout
//!
//! - **client**: [`BookingClient`] with one method per endpoint
//! - **publish**: turning validated availability into created slots
//! - **response**: mapping HTTP statuses and transport failures to
//!   [`slotbook_core::errors::ScheduleError`]

/// Endpoint wrappers
pub mod client;
/// Bulk slot creation from an availability range
pub mod publish;
/// Status and transport error classification
pub mod response;

pub use client::BookingClient;
pub use publish::PublishReport;
pub use response::OperationError;
