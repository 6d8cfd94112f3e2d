use act_core::collection::{self, SaveOutcome};
use act_core::draft::TicketDraft;
use act_core::errors::CoreError;
use act_store::{KeyValueStore, TicketStore};

use crate::cli::{EditArgs, GlobalFlags};
use crate::commands::shared::draft::apply_args;
use crate::commands::shared::saved::{SavedTicket, output_saved};
use crate::commands::shared::session::require_region;
use crate::context::AppContext;

/// Handle `act edit`.
pub fn handle(args: &EditArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let saved = edit_ticket(&mut ctx.store, args)?;
    output_saved(&saved, flags.format)
}

/// Apply `args` over the stored ticket and replace it in place.
///
/// Only the given fields change; the ID and any unknown stored keys are kept.
pub fn edit_ticket<S: KeyValueStore>(
    store: &mut TicketStore<S>,
    args: &EditArgs,
) -> anyhow::Result<SavedTicket> {
    require_region(store)?;
    let tickets = store.tickets()?;
    let existing = collection::find(&tickets, &args.id).ok_or_else(|| CoreError::NotFound {
        id: args.id.clone(),
    })?;

    let mut draft = TicketDraft::from_ticket(existing);
    apply_args(&mut draft, &args.fields)?;
    let autofill = draft.apply_autofill(&tickets);

    let ticket = draft.into_ticket(existing.id.clone())?;
    store.update_ticket(ticket.clone())?;
    tracing::info!(id = %ticket.id, "activity updated");

    Ok(SavedTicket {
        outcome: SaveOutcome::Updated,
        autofill,
        ticket,
    })
}

#[cfg(test)]
mod tests {
    use act_core::entities::Ticket;
    use act_core::enums::{ConnectType, Region, TicketStatus};
    use act_store::MemoryKvStore;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::cli::TicketArgs;
    use crate::test_support::ticket;

    fn stored(id: &str) -> Ticket {
        let mut extra = serde_json::Map::new();
        extra.insert("followUp".into(), json!(true));
        Ticket {
            partner_id: "P-1".into(),
            type_of_connect: ConnectType::Meeting,
            discussion_area: "Network Issues".into(),
            discussion_sub_area: "Slow Wi-Fi".into(),
            current_status: TicketStatus::PendingPartnerAction,
            extra,
            ..ticket(id, Region::Emea)
        }
    }

    fn store_with(tickets: &[Ticket]) -> TicketStore<MemoryKvStore> {
        crate::test_support::store_with(Some(Region::Emea), tickets)
    }

    fn edit(id: &str, fields: TicketArgs) -> EditArgs {
        EditArgs {
            id: id.into(),
            fields,
        }
    }

    #[test]
    fn only_given_fields_change() {
        let mut store = store_with(&[stored("1"), stored("2")]);
        let args = edit(
            "2",
            TicketArgs {
                status: Some("resolved".into()),
                ..TicketArgs::default()
            },
        );
        let saved = edit_ticket(&mut store, &args).unwrap();

        let expected = Ticket {
            current_status: TicketStatus::Resolved,
            ..stored("2")
        };
        assert_eq!(saved.ticket, expected);
        assert_eq!(store.tickets().unwrap(), vec![stored("1"), expected]);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut store = store_with(&[stored("1")]);
        let err = edit_ticket(&mut store, &edit("404", TicketArgs::default())).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CoreError>(),
            Some(&CoreError::NotFound { id: "404".into() })
        );
    }

    #[test]
    fn stored_sub_area_outside_catalog_is_kept_on_save() {
        let legacy = Ticket {
            discussion_sub_area: "Fax machine".into(),
            ..stored("1")
        };
        let mut store = store_with(&[legacy.clone()]);
        let args = edit(
            "1",
            TicketArgs {
                action: Some("Follow-up".into()),
                ..TicketArgs::default()
            },
        );
        edit_ticket(&mut store, &args).unwrap();
        let expected = Ticket {
            action_taken: "Follow-up".into(),
            ..legacy
        };
        assert_eq!(store.tickets().unwrap(), vec![expected]);
    }
}
