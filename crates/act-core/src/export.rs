//! CSV export of tickets selected by region.
//!
//! Output is a fixed nine-column table. A field is wrapped in double quotes
//! (with inner quotes doubled) only when it contains a comma, a double
//! quote, or a line break; every other field is written verbatim. Rows are
//! joined with `\n` and follow the input order.

use std::borrow::Cow;

use serde::Serialize;

use crate::entities::Ticket;
use crate::enums::Region;

/// Header row, in column order.
pub const CSV_HEADERS: [&str; 9] = [
    "Connect Date",
    "Partner ID",
    "Partner Name",
    "Region",
    "Type of Connect",
    "Discussion Area",
    "Discussion Sub-Area",
    "Action Taken",
    "Current Status",
];

/// A finished CSV artifact ready to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CsvExport {
    /// Suggested file name, `activity-report-<scope>.csv`.
    pub filename: String,
    pub content: String,
    /// Number of data rows (header excluded).
    pub rows: usize,
}

/// Ticket count for one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionCount {
    pub region: Region,
    pub count: usize,
}

/// Quote `field` if it contains a comma, double quote, or line break.
#[must_use]
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn ticket_row(ticket: &Ticket) -> String {
    let fields = [
        ticket.connect_date.as_str(),
        ticket.partner_id.as_str(),
        ticket.partner_name.as_str(),
        ticket.region.as_str(),
        ticket.type_of_connect.as_str(),
        ticket.discussion_area.as_str(),
        ticket.discussion_sub_area.as_str(),
        ticket.action_taken.as_str(),
        ticket.current_status.as_str(),
    ];
    fields.map(escape_field).join(",")
}

/// Render the header plus one row per ticket.
#[must_use]
pub fn to_csv<'a, I>(tickets: I) -> String
where
    I: IntoIterator<Item = &'a Ticket>,
{
    let mut lines = vec![CSV_HEADERS.join(",")];
    lines.extend(tickets.into_iter().map(ticket_row));
    lines.join("\n")
}

/// File name for an export covering `regions`.
///
/// `all-regions` when every current region is selected, `multiple-regions`
/// for any other selection of two or more, otherwise the single region's
/// name lowercased with whitespace runs replaced by hyphens.
#[must_use]
pub fn export_filename(regions: &[Region]) -> String {
    let selected = dedup(regions);
    let scope = if Region::ALL.iter().all(|region| selected.contains(&region)) {
        "all-regions".to_string()
    } else if selected.len() > 1 {
        "multiple-regions".to_string()
    } else {
        selected
            .first()
            .map_or_else(|| "report".to_string(), |region| region.slug())
    };
    format!("activity-report-{scope}.csv")
}

fn dedup(regions: &[Region]) -> Vec<&Region> {
    let mut unique: Vec<&Region> = Vec::with_capacity(regions.len());
    for region in regions {
        if !unique.contains(&region) {
            unique.push(region);
        }
    }
    unique
}

/// Export every ticket whose region is in `regions`.
///
/// Returns `None` when nothing is selected or no ticket matches; callers
/// report that to the user instead of writing an empty file.
#[must_use]
pub fn export_regions(tickets: &[Ticket], regions: &[Region]) -> Option<CsvExport> {
    let selected: Vec<&Ticket> = tickets
        .iter()
        .filter(|ticket| regions.contains(&ticket.region))
        .collect();
    if selected.is_empty() {
        return None;
    }

    Some(CsvExport {
        filename: export_filename(regions),
        rows: selected.len(),
        content: to_csv(selected),
    })
}

/// Ticket count per current region, zero counts included, in display order.
#[must_use]
pub fn region_counts(tickets: &[Ticket]) -> Vec<RegionCount> {
    Region::ALL
        .into_iter()
        .map(|region| {
            let count = tickets.iter().filter(|ticket| ticket.region == region).count();
            RegionCount { region, count }
        })
        .collect()
}
