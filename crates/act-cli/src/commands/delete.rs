use act_core::entities::Ticket;
use act_store::{KeyValueStore, TicketStore};

use crate::cli::{DeleteArgs, GlobalFlags, OutputFormat};
use crate::commands::shared::session::require_region;
use crate::context::AppContext;
use crate::output::{notice, output};

/// Handle `act delete`.
pub fn handle(args: &DeleteArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let removed = delete_ticket(&mut ctx.store, &args.id)?;
    if flags.format == OutputFormat::Table {
        return notice(&format!("Deleted activity {}", removed.id), flags.format);
    }
    output(&removed, flags.format)
}

pub fn delete_ticket<S: KeyValueStore>(
    store: &mut TicketStore<S>,
    id: &str,
) -> anyhow::Result<Ticket> {
    require_region(store)?;
    let removed = store.delete_ticket(id)?;
    tracing::info!(id = %removed.id, "activity deleted");
    Ok(removed)
}
