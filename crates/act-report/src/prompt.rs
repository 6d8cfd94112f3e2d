//! Deterministic prompt construction.

use std::borrow::Borrow;

use act_core::entities::Ticket;

/// Returned instead of calling the service when there is nothing to report.
pub const NO_ACTIVITY_MESSAGE: &str = "No activities to report.";

const INSTRUCTIONS: &str = "\
As an expert analyst, generate a concise and professional summary report for a management team based on the following daily activity logs.
The report should be structured with the following sections:
1.  **Overall Summary:** A brief, high-level overview of the day's activities.
2.  **Key Accomplishments:** Highlight completed tasks, resolved issues, and major progress points.
3.  **Items in Progress:** List tasks that are currently open or pending and require further action.
4.  **Action Items for Management (if any):** Clearly state any points that require management's attention or decision.

Use clear headings, bullet points, and a professional tone.

Here are the activity logs:
";

/// One ticket as a bullet block.
#[must_use]
pub fn format_ticket_block(ticket: &Ticket) -> String {
    format!(
        "- Date: {}\n- Partner: {} ({})\n- Region: {}\n- Status: {}\n- Area: {} -> {}\n- Action Taken: {}",
        ticket.connect_date,
        ticket.partner_name,
        ticket.partner_id,
        ticket.region,
        ticket.current_status,
        ticket.discussion_area,
        ticket.discussion_sub_area,
        ticket.action_taken,
    )
}

/// Full prompt: fixed instructions followed by one block per ticket, in
/// input order, separated by blank lines.
#[must_use]
pub fn build_prompt<T: Borrow<Ticket>>(tickets: &[T]) -> String {
    let blocks: Vec<String> = tickets
        .iter()
        .map(|ticket| format_ticket_block(ticket.borrow()))
        .collect();
    format!("{INSTRUCTIONS}{}\n", blocks.join("\n\n"))
}
