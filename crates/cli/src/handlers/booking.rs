use eyre::{Result, eyre};
use slotbook_core::{
    board::{BoardAction, SlotBoard},
    calendar::{CalendarEntry, Perspective},
    clock::Clock,
    notice::{Notice, Operation},
    session::Role,
    validation::ClaimForm,
};
use tracing::info;

use crate::commands::ClaimArgs;
use crate::handlers::{HandlerContext, Outcome};

/// Handle the `available` command
pub async fn handle_available<C: Clock>(ctx: &HandlerContext<C>) -> Result<Outcome> {
    let user_name = ctx.session.user().map(|u| u.name.as_str()).unwrap_or_default();

    match ctx.client.available_slots().await {
        Ok(slots) => Ok(Outcome::loaded(&slots, Perspective::Candidate)),
        Err(error) => Ok(Outcome::failure(Operation::ListAvailable, &error, user_name)),
    }
}

/// Handle the `claim` command for the configured candidate.
pub async fn handle_claim<C: Clock>(ctx: &HandlerContext<C>, args: &ClaimArgs) -> Result<Outcome> {
    let user = ctx.session.require(Role::Candidate)?;
    let form = ClaimForm {
        day: ctx.parse_day(args.day.as_deref(), "--day")?,
        hour: ctx.parse_hour(args.hour.as_deref(), "--hour")?,
    };
    let slot = match form.validate() {
        Ok(slot) => slot,
        Err(error) => return Ok(Outcome::notice(error.into())),
    };

    match ctx.client.claim_slot(&slot, user.id).await {
        Ok(booked) => {
            info!(%slot, slot_id = booked.id, "claimed slot");
            Ok(Outcome {
                notices: vec![Notice::slot_assigned()],
                slots: [booked.time].into_iter().collect(),
                board: SlotBoard::new().apply(BoardAction::Append(CalendarEntry::from_slot(
                    &booked,
                    Perspective::Candidate,
                ))),
            })
        }
        Err(error) => {
            let notice = error.notice(&user.name);
            Ok(Outcome {
                board: SlotBoard::new().apply(BoardAction::Failed(notice.message.clone())),
                ..Outcome::notice(notice)
            })
        }
    }
}

/// Handle the `mine` command: published slots for an interviewer, the booked
/// slot for a candidate.
pub async fn handle_mine<C: Clock>(ctx: &HandlerContext<C>) -> Result<Outcome> {
    let user = ctx
        .session
        .user()
        .ok_or_else(|| eyre!("No user configured, set the SLOTBOOK_USER_* variables"))?;

    let outcome = match user.role {
        Role::Interviewer => match ctx.client.interviewer_slots(user.id).await {
            Ok(slots) => Outcome::loaded(&slots, Perspective::Interviewer),
            Err(error) => Outcome::failure(Operation::InterviewerSlots, &error, &user.name),
        },
        Role::Candidate => match ctx.client.candidate_slot(user.id).await {
            Ok(slot) => Outcome::loaded(&Vec::from_iter(slot), Perspective::Candidate),
            Err(error) => Outcome::failure(Operation::CandidateSlot, &error, &user.name),
        },
    };
    Ok(outcome)
}
