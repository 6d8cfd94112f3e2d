use act_core::catalog;
use act_core::draft::TicketDraft;

use crate::cli::TicketArgs;
use crate::commands::shared::parse::{parse_connect_type, parse_region, parse_status};

/// Copy the fields given on the command line onto `draft`.
///
/// Area and sub-area names are matched case-insensitively and stored in
/// their catalog spelling. A new area without a sub-area gets that area's
/// first sub-area.
pub fn apply_args(draft: &mut TicketDraft, args: &TicketArgs) -> anyhow::Result<()> {
    if let Some(date) = &args.date {
        draft.connect_date = date.trim().to_string();
    }
    if let Some(partner_id) = &args.partner_id {
        draft.partner_id = partner_id.trim().to_string();
    }
    if let Some(partner_name) = &args.partner_name {
        draft.partner_name = partner_name.trim().to_string();
    }
    if let Some(region) = &args.region {
        draft.region = parse_region(region)?;
    }
    if let Some(kind) = &args.connect_type {
        draft.type_of_connect = parse_connect_type(kind)?;
    }
    if let Some(raw) = &args.area {
        let area = catalog::find_area(raw).ok_or_else(|| {
            let names = catalog::DISCUSSION_AREAS
                .iter()
                .map(|area| area.name)
                .collect::<Vec<_>>()
                .join(", ");
            anyhow::anyhow!("unknown discussion area '{raw}': expected one of {names}")
        })?;
        draft.set_discussion_area(area.name);
    }
    if let Some(raw) = &args.sub_area {
        let area = catalog::area(&draft.discussion_area).ok_or_else(|| {
            anyhow::anyhow!(
                "discussion area '{}' has no sub-areas; pass --area as well",
                draft.discussion_area
            )
        })?;
        let sub_area = area.find_sub_area(raw).ok_or_else(|| {
            anyhow::anyhow!(
                "sub-area '{raw}' does not belong to '{}': expected one of {}",
                area.name,
                area.sub_areas.join(", ")
            )
        })?;
        draft.discussion_sub_area = sub_area.to_string();
    }
    if let Some(action) = &args.action {
        draft.action_taken = action.trim().to_string();
    }
    if let Some(status) = &args.status {
        draft.current_status = parse_status(status)?;
    }
    Ok(())
}
