use clap::{Args, Parser, Subcommand, ValueEnum};

/// Publish and book one-hour interview slots.
///
/// Days are `YYYY-MM-DD` and hours `HH:MM`, both read in the configured
/// timezone.
#[derive(Debug, Parser)]
#[command(name = "slotbook", version, about)]
pub struct Cli {
    /// How results are printed
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the slots an availability range would create, without sending anything
    Expand(RangeArgs),
    /// Create one slot per hour of an availability range (interviewers)
    Publish(RangeArgs),
    /// List slots nobody has booked yet
    Available,
    /// Book the open slot at a given day and hour (candidates)
    Claim(ClaimArgs),
    /// List your own slots
    Mine,
}

/// An availability range. Fields are optional so a blank one is reported
/// like any other invalid input.
#[derive(Debug, Clone, Default, Args)]
pub struct RangeArgs {
    /// Day the range is on
    #[arg(long)]
    pub day: Option<String>,

    /// First hour, inclusive
    #[arg(long)]
    pub from: Option<String>,

    /// Last hour, exclusive
    #[arg(long)]
    pub to: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ClaimArgs {
    #[arg(long)]
    pub day: Option<String>,

    /// Start of the slot to book
    #[arg(long)]
    pub hour: Option<String>,
}
