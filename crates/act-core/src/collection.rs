//! Mutations of the in-memory ticket collection.
//!
//! The collection is kept newest first: new tickets are prepended, edits
//! replace in place. Callers persist the whole collection after each call.

use serde::Serialize;

use crate::entities::Ticket;
use crate::errors::CoreError;

/// What [`save`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveOutcome {
    Created,
    Updated,
}

/// Find a ticket by ID.
#[must_use]
pub fn find<'a>(tickets: &'a [Ticket], id: &str) -> Option<&'a Ticket> {
    tickets.iter().find(|ticket| ticket.id == id)
}

/// Insert `ticket`, replacing the ticket with the same ID if there is one.
pub fn save(tickets: &mut Vec<Ticket>, ticket: Ticket) -> SaveOutcome {
    if let Some(slot) = tickets.iter_mut().find(|existing| existing.id == ticket.id) {
        *slot = ticket;
        SaveOutcome::Updated
    } else {
        tickets.insert(0, ticket);
        SaveOutcome::Created
    }
}

/// Replace the ticket with `ticket.id`, returning the previous version.
///
/// # Errors
///
/// [`CoreError::NotFound`] if no ticket has that ID.
pub fn replace(tickets: &mut [Ticket], ticket: Ticket) -> Result<Ticket, CoreError> {
    let slot = tickets
        .iter_mut()
        .find(|existing| existing.id == ticket.id)
        .ok_or_else(|| CoreError::NotFound {
            id: ticket.id.clone(),
        })?;
    Ok(std::mem::replace(slot, ticket))
}

/// Remove the ticket with `id`.
///
/// # Errors
///
/// [`CoreError::NotFound`] if no ticket has that ID.
pub fn remove(tickets: &mut Vec<Ticket>, id: &str) -> Result<Ticket, CoreError> {
    let index = tickets
        .iter()
        .position(|ticket| ticket.id == id)
        .ok_or_else(|| CoreError::NotFound { id: id.to_string() })?;
    Ok(tickets.remove(index))
}
