use clap::{Args, Subcommand};

use crate::cli::subcommands::RegionCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Select, show, or clear the working region.
    Region {
        #[command(subcommand)]
        action: RegionCommands,
    },
    /// Log a new activity in the selected region.
    Add(TicketArgs),
    /// Edit an activity by ID.
    Edit(EditArgs),
    /// Delete an activity by ID.
    Delete(DeleteArgs),
    /// List activities in the selected region.
    List(ListArgs),
    /// Earlier activities for a partner, with an auto-fill suggestion.
    History(HistoryArgs),
    /// Generate an AI summary of the visible activities.
    Report(ReportArgs),
    /// Export activities to CSV, or show per-region counts.
    Export(ExportArgs),
    /// Discussion areas, regions, connect types, and statuses.
    Catalog,
}

/// Ticket fields accepted by `act add` and `act edit`.
#[derive(Clone, Debug, Default, Args)]
pub struct TicketArgs {
    /// Connect date, YYYY-MM-DD (default: today).
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub partner_id: Option<String>,
    #[arg(long)]
    pub partner_name: Option<String>,
    /// Region (default: the selected region).
    #[arg(long)]
    pub region: Option<String>,
    /// Type of connect: email, meeting, phone-call.
    #[arg(long = "type", value_name = "TYPE")]
    pub connect_type: Option<String>,
    /// Discussion area (see `act catalog`).
    #[arg(long)]
    pub area: Option<String>,
    /// Discussion sub-area; must belong to the area.
    #[arg(long)]
    pub sub_area: Option<String>,
    /// Action taken.
    #[arg(long)]
    pub action: Option<String>,
    /// Status: partner, internal, resolved.
    #[arg(long)]
    pub status: Option<String>,
}

/// Arguments for `act edit`.
#[derive(Clone, Debug, Args)]
pub struct EditArgs {
    pub id: String,
    #[command(flatten)]
    pub fields: TicketArgs,
}

/// Arguments for `act delete`.
#[derive(Clone, Debug, Args)]
pub struct DeleteArgs {
    pub id: String,
}

/// Arguments for `act list`.
#[derive(Clone, Debug, Default, Args)]
pub struct ListArgs {
    /// Status filter: all, partner, internal, resolved.
    #[arg(long)]
    pub status: Option<String>,
    /// Case-insensitive text search over partner, action, and area fields.
    #[arg(long)]
    pub search: Option<String>,
}

/// Arguments for `act history`.
#[derive(Clone, Debug, Args)]
#[command(group(
    clap::ArgGroup::new("identity")
        .required(true)
        .multiple(true)
        .args(["partner_id", "partner_name"])
))]
pub struct HistoryArgs {
    #[arg(long)]
    pub partner_id: Option<String>,
    #[arg(long)]
    pub partner_name: Option<String>,
    /// Ticket ID to leave out (the one being edited).
    #[arg(long)]
    pub exclude: Option<String>,
}

/// Arguments for `act report`.
#[derive(Clone, Debug, Default, Args)]
pub struct ReportArgs {
    /// Status filter: all, partner, internal, resolved.
    #[arg(long)]
    pub status: Option<String>,
    /// Text search, as for `act list`.
    #[arg(long)]
    pub search: Option<String>,
}

/// Arguments for `act export`.
#[derive(Clone, Debug, Default, Args)]
pub struct ExportArgs {
    /// Region to include; repeat for several.
    #[arg(long = "region", value_name = "REGION", conflicts_with = "all")]
    pub regions: Vec<String>,
    /// Include every region.
    #[arg(long)]
    pub all: bool,
    /// Directory the CSV file is written to.
    #[arg(long, default_value = ".")]
    pub out: String,
    /// Print activity counts per region instead of exporting.
    #[arg(long, conflicts_with_all = ["regions", "all"])]
    pub counts: bool,
}
