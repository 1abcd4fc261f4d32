pub mod interview_slot;
pub mod user;
