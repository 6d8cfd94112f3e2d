//! Ticket collection and selected region on top of a [`KeyValueStore`].

use act_core::collection::{self, SaveOutcome};
use act_core::entities::Ticket;
use act_core::enums::Region;
use act_core::migration::normalize_values;
use serde::Serialize;
use serde_json::Value;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// Key holding the selected region's display name.
pub const REGION_KEY: &str = "region";
/// Key holding the ticket collection (JSON array, newest first).
pub const TICKETS_KEY: &str = "tickets";

/// Everything persisted, as loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub region: Option<Region>,
    pub tickets: Vec<Ticket>,
}

/// Typed access to the persisted tickets and region.
///
/// Every mutation writes the full collection back.
#[derive(Debug)]
pub struct TicketStore<S> {
    kv: S,
}

impl<S: KeyValueStore> TicketStore<S> {
    pub const fn new(kv: S) -> Self {
        Self { kv }
    }

    /// Release the underlying key-value store.
    pub fn into_inner(self) -> S {
        self.kv
    }

    /// Load the selected region and the migrated collection.
    ///
    /// # Errors
    ///
    /// Only backend read failures; bad stored values are recovered.
    pub fn load(&self) -> Result<Snapshot, StoreError> {
        Ok(Snapshot {
            region: self.selected_region()?,
            tickets: self.tickets()?,
        })
    }

    /// The stored collection after legacy migration.
    ///
    /// A missing value is an empty collection. Each object in the stored
    /// array becomes one ticket; other elements are logged and dropped. A
    /// value that is not an array at all is logged and treated as empty; the
    /// next write replaces it.
    ///
    /// # Errors
    ///
    /// Only backend read failures.
    pub fn tickets(&self) -> Result<Vec<Ticket>, StoreError> {
        let Some(raw) = self.kv.get(TICKETS_KEY)? else {
            return Ok(Vec::new());
        };
        let Value::Array(values) = raw else {
            tracing::warn!("stored tickets are not an array; starting with an empty collection");
            return Ok(Vec::new());
        };
        let normalized = normalize_values(values);
        if normalized.skipped > 0 {
            tracing::warn!(
                skipped = normalized.skipped,
                "dropped stored ticket entries that are not records"
            );
        }
        if normalized.repaired > 0 {
            tracing::debug!(
                repaired = normalized.repaired,
                total = normalized.tickets.len(),
                "migrated legacy ticket records"
            );
        }
        Ok(normalized.tickets)
    }

    /// The selected region, if one is stored and it is a current region.
    ///
    /// # Errors
    ///
    /// Only backend read failures.
    pub fn selected_region(&self) -> Result<Option<Region>, StoreError> {
        let Some(raw) = self.kv.get(REGION_KEY)? else {
            return Ok(None);
        };
        let region = match raw {
            Value::String(name) => Region::from(name),
            other => {
                tracing::warn!(value = %other, "stored region is not a string; ignoring it");
                return Ok(None);
            }
        };
        if region.is_known() {
            Ok(Some(region))
        } else {
            tracing::warn!(region = %region, "stored region is not recognized; ignoring it");
            Ok(None)
        }
    }

    /// Persist the selected region.
    ///
    /// # Errors
    ///
    /// Backend write failures.
    pub fn set_region(&mut self, region: &Region) -> Result<(), StoreError> {
        self.kv
            .set(REGION_KEY, Value::String(region.as_str().to_string()))
    }

    /// Forget the selected region. Tickets are kept.
    ///
    /// # Errors
    ///
    /// Backend write failures.
    pub fn clear_region(&mut self) -> Result<(), StoreError> {
        self.kv.remove(REGION_KEY)
    }

    /// Replace the whole stored collection.
    ///
    /// # Errors
    ///
    /// Serialization or backend write failures.
    pub fn save_tickets(&mut self, tickets: &[Ticket]) -> Result<(), StoreError> {
        let value = serde_json::to_value(tickets)?;
        self.kv.set(TICKETS_KEY, value)?;
        tracing::debug!(count = tickets.len(), "tickets saved");
        Ok(())
    }

    /// Insert or replace `ticket` by ID, then persist.
    ///
    /// # Errors
    ///
    /// Serialization or backend failures.
    pub fn save_ticket(&mut self, ticket: Ticket) -> Result<SaveOutcome, StoreError> {
        let mut tickets = self.tickets()?;
        let outcome = collection::save(&mut tickets, ticket);
        self.save_tickets(&tickets)?;
        Ok(outcome)
    }

    /// Replace an existing ticket, returning the previous version.
    ///
    /// # Errors
    ///
    /// [`StoreError::Core`] with `NotFound` for an unknown ID, otherwise
    /// serialization or backend failures.
    pub fn update_ticket(&mut self, ticket: Ticket) -> Result<Ticket, StoreError> {
        let mut tickets = self.tickets()?;
        let previous = collection::replace(&mut tickets, ticket)?;
        self.save_tickets(&tickets)?;
        Ok(previous)
    }

    /// Delete a ticket by ID, returning it.
    ///
    /// # Errors
    ///
    /// [`StoreError::Core`] with `NotFound` for an unknown ID, otherwise
    /// serialization or backend failures.
    pub fn delete_ticket(&mut self, id: &str) -> Result<Ticket, StoreError> {
        let mut tickets = self.tickets()?;
        let removed = collection::remove(&mut tickets, id)?;
        self.save_tickets(&tickets)?;
        Ok(removed)
    }
}
