//! Ticket ID generation.
//!
//! A ticket ID is its creation time in Unix milliseconds, rendered as a
//! decimal string. Two saves within the same millisecond would collide, so
//! the candidate is bumped until it is unused in the collection.

use chrono::{DateTime, Utc};

use crate::entities::Ticket;

/// ID for a ticket created at `now`, unique within `existing`.
#[must_use]
pub fn ticket_id_at(now: DateTime<Utc>, existing: &[Ticket]) -> String {
    let mut candidate = now.timestamp_millis();
    loop {
        let id = candidate.to_string();
        if !existing.iter().any(|ticket| ticket.id == id) {
            return id;
        }
        candidate += 1;
    }
}
