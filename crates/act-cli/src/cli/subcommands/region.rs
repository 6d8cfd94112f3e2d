use clap::Subcommand;

/// Working-region commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RegionCommands {
    /// Select the region new activities are logged in and lists are scoped to.
    Set {
        /// Region name or slug (e.g. "EMEA", "asia-pacific").
        region: String,
    },
    /// Show the selected region.
    Show,
    /// Clear the selected region. Activities are kept.
    Clear,
}
