use act_core::catalog::{DISCUSSION_AREAS, DiscussionArea};
use act_core::enums::{ConnectType, Region, TicketStatus};
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub regions: Vec<String>,
    pub connect_types: Vec<&'static str>,
    pub statuses: Vec<&'static str>,
    pub discussion_areas: &'static [DiscussionArea],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AreaRow {
    area: &'static str,
    sub_areas: String,
}

#[must_use]
pub fn catalog() -> Catalog {
    Catalog {
        regions: Region::ALL.iter().map(ToString::to_string).collect(),
        connect_types: ConnectType::ALL.iter().map(|kind| kind.as_str()).collect(),
        statuses: TicketStatus::ALL.iter().map(|status| status.as_str()).collect(),
        discussion_areas: DISCUSSION_AREAS,
    }
}

/// Handle `act catalog`. Needs neither config nor store.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let catalog = catalog();
    if flags.format != OutputFormat::Table {
        return output(&catalog, flags.format);
    }

    println!("Regions: {}", catalog.regions.join(", "));
    println!("Types of connect: {}", catalog.connect_types.join(", "));
    println!("Statuses: {}", catalog.statuses.join(", "));
    println!();
    let rows = catalog
        .discussion_areas
        .iter()
        .map(|area| AreaRow {
            area: area.name,
            sub_areas: area.sub_areas.join("; "),
        })
        .collect::<Vec<_>>();
    output(&rows, flags.format)
}
