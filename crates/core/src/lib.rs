//! # SlotBook Core
//!
//! Domain types and pure time arithmetic for the interview slot booking tool.
//!
//! - **slots**: turning a day and an hour range into canonical hourly slots
//! - **clock**: injectable time source used wherever "now" matters
//! - **validation**: form checks that must pass before slots are generated
//! - **models**: wire types exchanged with the booking backend
//! - **calendar**, **board**, **session**: explicit view state
//! - **notice**, **errors**: failure taxonomy and user-facing messages

pub mod board;
pub mod calendar;
pub mod clock;
pub mod errors;
pub mod models;
pub mod notice;
pub mod session;
pub mod slots;
pub mod validation;
