use chrono_tz::Tz;
use eyre::Result;
use slotbook_core::{
    board::{BoardAction, SlotBoard},
    calendar::{CalendarEntry, Perspective},
    clock::Clock,
    session::Role,
    validation::{Availability, AvailabilityForm},
};
use tracing::info;

use crate::commands::RangeArgs;
use crate::handlers::{HandlerContext, Outcome};

/// Handle the `expand` command. Nothing is sent to the backend.
pub fn handle_expand<C: Clock>(ctx: &HandlerContext<C>, args: &RangeArgs) -> Result<Outcome> {
    let availability = match validated(ctx, args)? {
        Ok(availability) => availability,
        Err(outcome) => return Ok(outcome),
    };

    let slots = availability.slots();
    let board = slots.iter().fold(SlotBoard::new(), |board, slot| {
        board.apply(BoardAction::Append(CalendarEntry::open(slot)))
    });
    info!(count = slots.len(), day = %availability.day().date(), "expanded availability");

    Ok(Outcome {
        notices: Vec::new(),
        slots,
        board,
    })
}

/// Handle the `publish` command for the configured interviewer.
pub async fn handle_publish<C: Clock>(ctx: &HandlerContext<C>, args: &RangeArgs) -> Result<Outcome> {
    let user = ctx.session.require(Role::Interviewer)?;
    let availability = match validated(ctx, args)? {
        Ok(availability) => availability,
        Err(outcome) => return Ok(outcome),
    };

    let report = ctx
        .client
        .publish_availability(&availability, &user.participant())
        .await;

    let board = report.created.iter().fold(SlotBoard::new(), |board, slot| {
        board.apply(BoardAction::Append(CalendarEntry::from_slot(
            slot,
            Perspective::Interviewer,
        )))
    });

    Ok(Outcome {
        notices: report.notices(&user.name),
        slots: report.created.iter().map(|slot| slot.time).collect(),
        board,
    })
}

/// Parses the range flags and runs the form checks. A rejected form comes
/// back as the outcome to show; unparseable input is an error.
fn validated<C: Clock>(
    ctx: &HandlerContext<C>,
    args: &RangeArgs,
) -> Result<Result<Availability<Tz>, Outcome>> {
    let form = AvailabilityForm {
        day: ctx.parse_day(args.day.as_deref(), "--day")?,
        start_hour: ctx.parse_hour(args.from.as_deref(), "--from")?,
        end_hour: ctx.parse_hour(args.to.as_deref(), "--to")?,
    };

    Ok(form.validate().map_err(|error| Outcome::notice(error.into())))
}
