use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Region { action } => commands::region::handle(&action, ctx, flags),
        Commands::Add(args) => commands::add::handle(&args, ctx, flags),
        Commands::Edit(args) => commands::edit::handle(&args, ctx, flags),
        Commands::Delete(args) => commands::delete::handle(&args, ctx, flags),
        Commands::List(args) => commands::list::handle(&args, ctx, flags),
        Commands::History(args) => commands::history::handle(&args, ctx, flags),
        Commands::Report(args) => commands::report::handle(&args, ctx, flags).await,
        Commands::Export(args) => commands::export::handle(&args, ctx, flags),
        Commands::Catalog => commands::catalog::handle(flags),
    }
}
