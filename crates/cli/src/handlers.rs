use std::fmt::Write as _;

use chrono::DateTime;
use chrono_tz::Tz;
use eyre::{Result, WrapErr};
use serde::Serialize;
use slotbook_client::BookingClient;
use slotbook_core::{
    board::{BoardAction, SlotBoard},
    calendar::{CalendarEntry, Perspective},
    clock::{Clock, SystemClock},
    errors::ScheduleError,
    models::interview_slot::InterviewSlot,
    notice::{Notice, Operation, Severity},
    session::Session,
    slots::{CalendarDay, SlotRange, SlotTimeNormalizer},
};
use tracing::debug;

use crate::commands::{Command, OutputFormat};
use crate::config::CliConfig;

pub mod availability;
pub mod booking;

/// Everything a command handler needs, built once per invocation.
pub struct HandlerContext<C: Clock = SystemClock> {
    pub config: CliConfig,
    pub client: BookingClient,
    pub normalizer: SlotTimeNormalizer<Tz, C>,
    pub session: Session,
}

impl HandlerContext<SystemClock> {
    pub fn new(config: CliConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> HandlerContext<C> {
    /// Builds a context whose "now" comes from `clock`.
    pub fn with_clock(config: CliConfig, clock: C) -> Result<Self> {
        let client = BookingClient::new(config.api_url.clone(), config.timeout())
            .wrap_err("Failed to build booking API client")?;

        Ok(Self {
            normalizer: SlotTimeNormalizer::new(config.zone, clock),
            session: config.session(),
            client,
            config,
        })
    }

    fn parse_day(&self, value: Option<&str>, flag: &str) -> Result<Option<CalendarDay<Tz>>> {
        value
            .map(|s| self.normalizer.parse_day(s))
            .transpose()
            .wrap_err_with(|| format!("Invalid {flag}"))
    }

    fn parse_hour(&self, value: Option<&str>, flag: &str) -> Result<Option<DateTime<Tz>>> {
        value
            .map(|s| self.normalizer.parse_hour(s))
            .transpose()
            .wrap_err_with(|| format!("Invalid {flag}"))
    }
}

/// What a command produced: messages for the user, the slots involved and
/// the calendar board after the command's actions were applied.
#[derive(Debug, Default, Serialize)]
pub struct Outcome {
    pub notices: Vec<Notice>,
    pub slots: SlotRange,
    pub board: SlotBoard,
}

impl Outcome {
    pub fn notice(notice: Notice) -> Self {
        Self {
            notices: vec![notice],
            ..Self::default()
        }
    }

    /// Board loaded with `slots` as seen from `perspective`.
    pub fn loaded(slots: &[InterviewSlot], perspective: Perspective) -> Self {
        let entries = slots
            .iter()
            .map(|slot| CalendarEntry::from_slot(slot, perspective))
            .collect();

        Self {
            notices: Vec::new(),
            slots: slots.iter().map(|slot| slot.time).collect(),
            board: SlotBoard::new().apply(BoardAction::Loaded(entries)),
        }
    }

    /// A failed remote call, worded for `user_name`.
    pub fn failure(operation: Operation, error: &ScheduleError, user_name: &str) -> Self {
        let notice = Notice::for_failure(operation, error, user_name);
        Self {
            board: SlotBoard::new().apply(BoardAction::Failed(notice.message.clone())),
            notices: vec![notice],
            slots: SlotRange::default(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.notices.iter().any(|n| n.severity == Severity::Error)
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).wrap_err("Failed to serialize output")
            }
            OutputFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        let mut out = String::new();
        for notice in &self.notices {
            let _ = writeln!(out, "{notice}");
        }
        for entry in self.board.entries() {
            let line = format!("{}  {}  {}", entry.start_date, entry.end_date, entry.title);
            let _ = writeln!(out, "{}", line.trim_end());
        }
        if self.board.is_initially_loaded && self.board.entries().is_empty() {
            out.push_str("No slots\n");
        }
        out
    }
}

/// Runs `command` against `ctx`.
pub async fn handle_command<C: Clock>(ctx: &HandlerContext<C>, command: &Command) -> Result<Outcome> {
    debug!(?command, zone = %ctx.config.zone, "handling command");

    match command {
        Command::Expand(args) => availability::handle_expand(ctx, args),
        Command::Publish(args) => availability::handle_publish(ctx, args).await,
        Command::Available => booking::handle_available(ctx).await,
        Command::Claim(args) => booking::handle_claim(ctx, args).await,
        Command::Mine => booking::handle_mine(ctx).await,
    }
}
