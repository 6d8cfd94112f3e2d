use act_core::entities::Ticket;
use act_report::{GeminiClient, ReportError, ReportRequester, ReportSlot, ReportState, TextGenerator};

use crate::cli::{GlobalFlags, ReportArgs};
use crate::commands::list::visible_tickets;
use crate::context::AppContext;
use crate::output::{notice, output_text};
use crate::progress::Spinner;

pub const EMPTY_VIEW_MESSAGE: &str =
    "Cannot generate a report with no activities. Please add some activities or adjust your filters.";

/// Handle `act report`: summarize the visible activities of the selected
/// region.
pub async fn handle(args: &ReportArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tickets = ctx.store.tickets()?;
    let visible = visible_tickets(
        &ctx.store,
        &tickets,
        args.status.as_deref(),
        args.search.as_deref(),
    )?;
    if visible.is_empty() {
        return notice(EMPTY_VIEW_MESSAGE, flags.format);
    }

    let spinner = Spinner::start("Generating report");
    let state = match GeminiClient::from_config(&ctx.config.report) {
        Ok(client) => run_report(&ReportRequester::new(client), &visible).await,
        Err(error) => {
            tracing::error!(%error, "report client unavailable");
            ReportState::Failed(ReportError::GenerationFailed(error).to_string())
        }
    };

    match state {
        ReportState::Ready(text) => {
            spinner.succeed();
            output_text("report", &text, flags.format)
        }
        ReportState::Failed(message) => {
            spinner.fail("report failed");
            anyhow::bail!(message)
        }
        ReportState::Idle | ReportState::Loading => {
            spinner.succeed();
            anyhow::bail!("report request did not complete")
        }
    }
}

/// One request through the report slot, returning the state it settles in.
pub async fn run_report<G: TextGenerator>(
    requester: &ReportRequester<G>,
    visible: &[&Ticket],
) -> ReportState {
    let mut slot = ReportSlot::new();
    let token = slot.begin();
    let result = requester.generate_report(visible).await;
    slot.resolve(token, result);
    slot.state().clone()
}
