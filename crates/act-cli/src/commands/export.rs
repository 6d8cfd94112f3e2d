use std::path::{Path, PathBuf};

use act_core::enums::Region;
use act_core::export::{RegionCount, export_regions, region_counts};
use act_store::{KeyValueStore, TicketStore};
use anyhow::Context;
use serde::Serialize;

use crate::cli::{ExportArgs, GlobalFlags, OutputFormat};
use crate::commands::shared::parse::parse_region;
use crate::commands::shared::session::require_region;
use crate::context::AppContext;
use crate::output::{notice, output};

pub const EMPTY_SELECTION_MESSAGE: &str = "Select at least one region to export (--region or --all).";
pub const EMPTY_EXPORT_MESSAGE: &str = "No activities to download for the selected region(s).";

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RegionCounts {
    pub regions: Vec<RegionCount>,
    pub total: usize,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ExportOutcome {
    Written { path: PathBuf, rows: usize },
    Empty,
}

/// Handle `act export`.
pub fn handle(args: &ExportArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if args.counts {
        let counts = counts(&ctx.store)?;
        if flags.format != OutputFormat::Table {
            return output(&counts, flags.format);
        }
        let mut rows = counts
            .regions
            .iter()
            .map(|entry| CountRow {
                region: entry.region.to_string(),
                activities: entry.count,
            })
            .collect::<Vec<_>>();
        rows.push(CountRow {
            region: "Total".to_string(),
            activities: counts.total,
        });
        return output(&rows, flags.format);
    }

    let regions = selected_regions(args)?;
    if regions.is_empty() {
        return notice(EMPTY_SELECTION_MESSAGE, flags.format);
    }

    match export_to(&ctx.store, &regions, Path::new(&args.out))? {
        ExportOutcome::Empty => notice(EMPTY_EXPORT_MESSAGE, flags.format),
        ExportOutcome::Written { path, rows } if flags.format == OutputFormat::Table => notice(
            &format!("Wrote {rows} activities to {}", path.display()),
            flags.format,
        ),
        written => output(&written, flags.format),
    }
}

#[derive(Serialize)]
struct CountRow {
    region: String,
    activities: usize,
}

fn selected_regions(args: &ExportArgs) -> anyhow::Result<Vec<Region>> {
    if args.all {
        return Ok(Region::ALL.to_vec());
    }
    args.regions.iter().map(|raw| parse_region(raw)).collect()
}

/// Activity count per region over the whole collection.
pub fn counts<S: KeyValueStore>(store: &TicketStore<S>) -> anyhow::Result<RegionCounts> {
    require_region(store)?;
    let regions = region_counts(&store.tickets()?);
    let total = regions.iter().map(|entry| entry.count).sum();
    Ok(RegionCounts { regions, total })
}

/// Write the CSV for `regions` into `dir`. Nothing is written when no
/// activity matches.
pub fn export_to<S: KeyValueStore>(
    store: &TicketStore<S>,
    regions: &[Region],
    dir: &Path,
) -> anyhow::Result<ExportOutcome> {
    require_region(store)?;
    let tickets = store.tickets()?;
    let Some(export) = export_regions(&tickets, regions) else {
        return Ok(ExportOutcome::Empty);
    };

    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create export directory {}", dir.display()))?;
    let path = dir.join(&export.filename);
    std::fs::write(&path, &export.content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = export.rows, "csv exported");

    Ok(ExportOutcome::Written {
        path,
        rows: export.rows,
    })
}
