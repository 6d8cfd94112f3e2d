use act_core::draft::TicketDraft;
use act_core::ids::ticket_id_at;
use act_store::{KeyValueStore, TicketStore};
use chrono::{DateTime, Local, Utc};

use crate::cli::{GlobalFlags, TicketArgs};
use crate::commands::shared::draft::apply_args;
use crate::commands::shared::saved::{SavedTicket, output_saved};
use crate::commands::shared::session::require_region;
use crate::context::AppContext;

/// Handle `act add`.
pub fn handle(args: &TicketArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let saved = add_ticket(&mut ctx.store, args, Local::now())?;
    output_saved(&saved, flags.format)
}

/// Build a ticket from the draft defaults plus `args`, auto-fill the partner
/// identity, validate, and prepend it to the collection.
pub fn add_ticket<S: KeyValueStore>(
    store: &mut TicketStore<S>,
    args: &TicketArgs,
    now: DateTime<Local>,
) -> anyhow::Result<SavedTicket> {
    let region = require_region(store)?;
    let tickets = store.tickets()?;

    let mut draft = TicketDraft::new(region, now.date_naive());
    apply_args(&mut draft, args)?;
    let autofill = draft.apply_autofill(&tickets);

    let ticket = draft.into_ticket(ticket_id_at(now.with_timezone(&Utc), &tickets))?;
    let outcome = store.save_ticket(ticket.clone())?;
    tracing::info!(id = %ticket.id, region = %ticket.region, "activity created");

    Ok(SavedTicket {
        outcome,
        autofill,
        ticket,
    })
}
