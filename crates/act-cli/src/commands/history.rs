use act_core::entities::Ticket;
use act_core::partner::{self, Autofill};
use serde::Serialize;

use crate::cli::{GlobalFlags, HistoryArgs, OutputFormat};
use crate::commands::shared::session::require_region;
use crate::context::AppContext;
use crate::output::{output, output_tickets};

#[derive(Debug, Serialize)]
pub struct HistoryResponse<'a> {
    pub autofill: Option<Autofill>,
    pub history: Vec<&'a Ticket>,
}

/// Handle `act history`.
///
/// History spans every region, not only the selected one.
pub fn handle(args: &HistoryArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_region(&ctx.store)?;
    let tickets = ctx.store.tickets()?;
    let lookup = partner::lookup(
        args.partner_id.as_deref().unwrap_or_default(),
        args.partner_name.as_deref().unwrap_or_default(),
        args.exclude.as_deref(),
        &tickets,
    );

    if flags.format != OutputFormat::Table {
        return output(
            &HistoryResponse {
                autofill: lookup.autofill,
                history: lookup.history,
            },
            flags.format,
        );
    }

    match &lookup.autofill {
        Some(Autofill::PartnerName(name)) => println!("Partner name: {name}"),
        Some(Autofill::PartnerId(id)) => println!("Partner ID: {id}"),
        None => {}
    }
    if lookup.history.is_empty() {
        println!("No earlier activities for this partner.");
        return Ok(());
    }
    output_tickets(&lookup.history, flags.format)
}
