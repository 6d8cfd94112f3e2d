use act_core::entities::Ticket;
use act_core::filter::{TicketQuery, filter_tickets};
use act_store::{KeyValueStore, TicketStore};

use crate::cli::{GlobalFlags, ListArgs};
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::commands::shared::parse::parse_status_filter;
use crate::commands::shared::session::require_region;
use crate::context::AppContext;
use crate::output::output_tickets;

/// Handle `act list`.
pub fn handle(args: &ListArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tickets = ctx.store.tickets()?;
    let mut visible = visible_tickets(
        &ctx.store,
        &tickets,
        args.status.as_deref(),
        args.search.as_deref(),
    )?;
    apply_limit(
        &mut visible,
        effective_limit(flags.limit, ctx.config.general.default_limit),
    );
    output_tickets(&visible, flags.format)
}

/// The visible-list query for the selected region.
pub fn visible_query<S: KeyValueStore>(
    store: &TicketStore<S>,
    status: Option<&str>,
    search: Option<&str>,
) -> anyhow::Result<TicketQuery> {
    let region = require_region(store)?;
    Ok(TicketQuery::for_region(region)
        .with_status(parse_status_filter(status)?)
        .with_search(search.unwrap_or_default()))
}

/// Visible tickets for the selected region under `status` and `search`.
pub fn visible_tickets<'a, S: KeyValueStore>(
    store: &TicketStore<S>,
    tickets: &'a [Ticket],
    status: Option<&str>,
    search: Option<&str>,
) -> anyhow::Result<Vec<&'a Ticket>> {
    let query = visible_query(store, status, search)?;
    let visible = filter_tickets(tickets, &query);
    tracing::debug!(region = %query.region, visible = visible.len(), "filtered activities");
    Ok(visible)
}
