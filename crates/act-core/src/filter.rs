//! Filter/search engine for the visible ticket list.
//!
//! The visible list is a pure function of the stored collection and three
//! inputs: the active region, a status filter, and free-text search. Each
//! input is an independent predicate, so the order they are applied in does
//! not matter, and the output keeps the collection's order (newest first).

use crate::entities::Ticket;
use crate::enums::{Region, StatusFilter};

/// Inputs that select the visible tickets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketQuery {
    pub region: Region,
    pub status: StatusFilter,
    pub search: String,
}

impl TicketQuery {
    /// Every ticket in `region`, no status or search restriction.
    #[must_use]
    pub fn for_region(region: Region) -> Self {
        Self {
            region,
            status: StatusFilter::All,
            search: String::new(),
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Whether `ticket` passes all three predicates.
    #[must_use]
    pub fn matches(&self, ticket: &Ticket) -> bool {
        in_region(ticket, &self.region)
            && self.status.allows(ticket.current_status)
            && matches_search(ticket, &self.search)
    }
}

/// Region is a view filter: the collection holds every region's tickets.
#[must_use]
pub fn in_region(ticket: &Ticket, region: &Region) -> bool {
    &ticket.region == region
}

/// Case-insensitive substring match over partner name, partner ID, action
/// taken, discussion area, and discussion sub-area. Blank search matches
/// everything.
#[must_use]
pub fn matches_search(ticket: &Ticket, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [
        &ticket.partner_name,
        &ticket.partner_id,
        &ticket.action_taken,
        &ticket.discussion_area,
        &ticket.discussion_sub_area,
    ]
    .into_iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Tickets visible under `query`, in collection order.
#[must_use]
pub fn filter_tickets<'a>(tickets: &'a [Ticket], query: &TicketQuery) -> Vec<&'a Ticket> {
    tickets.iter().filter(|ticket| query.matches(ticket)).collect()
}

/// Tickets belonging to `region`, ignoring status and search.
#[must_use]
pub fn tickets_for_region<'a>(tickets: &'a [Ticket], region: &Region) -> Vec<&'a Ticket> {
    tickets
        .iter()
        .filter(|ticket| in_region(ticket, region))
        .collect()
}
