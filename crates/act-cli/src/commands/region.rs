use act_core::enums::Region;
use act_core::filter::tickets_for_region;
use act_store::{KeyValueStore, TicketStore};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RegionCommands;
use crate::commands::shared::parse::parse_region;
use crate::context::AppContext;
use crate::output::output;

/// The working region and how many activities it holds.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RegionStatus {
    pub region: Option<Region>,
    pub activities: usize,
}

/// Handle `act region`.
pub fn handle(
    action: &RegionCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = match action {
        RegionCommands::Set { region } => set(&mut ctx.store, region)?,
        RegionCommands::Show => show(&ctx.store)?,
        RegionCommands::Clear => clear(&mut ctx.store)?,
    };
    output(&status, flags.format)
}

pub fn set<S: KeyValueStore>(store: &mut TicketStore<S>, raw: &str) -> anyhow::Result<RegionStatus> {
    let region = parse_region(raw)?;
    store.set_region(&region)?;
    tracing::info!(%region, "region selected");
    show(store)
}

pub fn show<S: KeyValueStore>(store: &TicketStore<S>) -> anyhow::Result<RegionStatus> {
    let snapshot = store.load()?;
    let activities = snapshot
        .region
        .as_ref()
        .map_or(0, |region| tickets_for_region(&snapshot.tickets, region).len());
    Ok(RegionStatus {
        region: snapshot.region,
        activities,
    })
}

/// Forget the selected region. Stored activities are untouched.
pub fn clear<S: KeyValueStore>(store: &mut TicketStore<S>) -> anyhow::Result<RegionStatus> {
    store.clear_region()?;
    show(store)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{store_with, ticket};

    #[test]
    fn set_then_show_counts_region_tickets() {
        let mut store = store_with(None, &[ticket("1", Region::Emea), ticket("2", Region::Americas)]);

        let status = set(&mut store, "emea").unwrap();
        assert_eq!(
            status,
            RegionStatus {
                region: Some(Region::Emea),
                activities: 1
            }
        );
    }

    #[test]
    fn invalid_region_is_not_stored() {
        let mut store = store_with(None, &[]);
        assert!(set(&mut store, "Middle and Easter Europe").is_err());
        assert_eq!(show(&store).unwrap().region, None);
    }

    #[test]
    fn clear_keeps_tickets() {
        let mut store = store_with(Some(Region::Emea), &[ticket("1", Region::Emea)]);

        let status = clear(&mut store).unwrap();
        assert_eq!(status.region, None);
        assert_eq!(store.tickets().unwrap().len(), 1);
    }
}
