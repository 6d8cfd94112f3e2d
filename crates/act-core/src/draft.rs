//! Ticket drafts: defaults for new tickets and validation on save.
//!
//! Validation happens here and only here. Tickets loaded from storage are
//! never re-validated. Area and sub-area are not cross-checked on save: the
//! sub-area choices are limited when a value is picked, so a stored ticket
//! may keep a sub-area outside its area's list through any number of edits.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::catalog;
use crate::entities::{Ticket, parse_connect_date};
use crate::enums::{ConnectType, Region, TicketStatus};
use crate::errors::CoreError;
use crate::partner::{self, Autofill};

/// Editable ticket fields, before an ID is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDraft {
    pub connect_date: String,
    pub partner_id: String,
    pub partner_name: String,
    pub region: Region,
    pub type_of_connect: ConnectType,
    pub discussion_area: String,
    pub discussion_sub_area: String,
    pub action_taken: String,
    pub current_status: TicketStatus,
    pub extra: Map<String, Value>,
}

impl TicketDraft {
    /// Draft for a new ticket in `region`, dated `today`.
    #[must_use]
    pub fn new(region: Region, today: NaiveDate) -> Self {
        let area = catalog::default_area();
        Self {
            connect_date: today.format("%Y-%m-%d").to_string(),
            partner_id: String::new(),
            partner_name: String::new(),
            region,
            type_of_connect: ConnectType::default(),
            discussion_area: area.name.to_string(),
            discussion_sub_area: area.sub_areas.first().copied().unwrap_or_default().to_string(),
            action_taken: String::new(),
            current_status: TicketStatus::default(),
            extra: Map::new(),
        }
    }

    /// Draft prefilled from an existing ticket, for editing.
    #[must_use]
    pub fn from_ticket(ticket: &Ticket) -> Self {
        Self {
            connect_date: ticket.connect_date.clone(),
            partner_id: ticket.partner_id.clone(),
            partner_name: ticket.partner_name.clone(),
            region: ticket.region.clone(),
            type_of_connect: ticket.type_of_connect,
            discussion_area: ticket.discussion_area.clone(),
            discussion_sub_area: ticket.discussion_sub_area.clone(),
            action_taken: ticket.action_taken.clone(),
            current_status: ticket.current_status,
            extra: ticket.extra.clone(),
        }
    }

    /// Change the discussion area. Choosing a different area resets the
    /// sub-area to that area's first entry.
    pub fn set_discussion_area(&mut self, area: &str) {
        if self.discussion_area != area {
            self.discussion_area = area.to_string();
            self.discussion_sub_area = catalog::default_sub_area(area)
                .unwrap_or_default()
                .to_string();
        }
    }

    /// Fill the missing identity field from earlier tickets, if possible.
    /// Returns what was filled.
    pub fn apply_autofill(&mut self, tickets: &[Ticket]) -> Option<Autofill> {
        let fill = partner::autofill(&self.partner_id, &self.partner_name, tickets)?;
        match &fill {
            Autofill::PartnerName(name) => self.partner_name.clone_from(name),
            Autofill::PartnerId(id) => self.partner_id.clone_from(id),
        }
        Some(fill)
    }

    /// Check the rules enforced when a ticket is saved.
    ///
    /// # Errors
    ///
    /// [`CoreError::MissingField`] for a blank partner name or action taken,
    /// [`CoreError::Validation`] for a bad date or an unknown region.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.partner_name.trim().is_empty() {
            return Err(CoreError::MissingField {
                field: "partnerName",
            });
        }
        if self.action_taken.trim().is_empty() {
            return Err(CoreError::MissingField {
                field: "actionTaken",
            });
        }
        if parse_connect_date(&self.connect_date).is_none() {
            return Err(CoreError::Validation(format!(
                "connect date '{}' is not a YYYY-MM-DD date",
                self.connect_date
            )));
        }
        if !self.region.is_known() {
            return Err(CoreError::Validation(format!(
                "unknown region '{}'",
                self.region
            )));
        }
        Ok(())
    }

    /// Validate and turn the draft into a ticket with `id`.
    ///
    /// # Errors
    ///
    /// See [`TicketDraft::validate`].
    pub fn into_ticket(self, id: impl Into<String>) -> Result<Ticket, CoreError> {
        self.validate()?;
        Ok(Ticket {
            id: id.into(),
            connect_date: self.connect_date,
            partner_id: self.partner_id,
            partner_name: self.partner_name,
            region: self.region,
            type_of_connect: self.type_of_connect,
            discussion_area: self.discussion_area,
            discussion_sub_area: self.discussion_sub_area,
            action_taken: self.action_taken,
            current_status: self.current_status,
            extra: self.extra,
        })
    }
}
