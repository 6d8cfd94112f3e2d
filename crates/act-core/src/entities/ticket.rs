use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enums::{ConnectType, Region, TicketStatus};

/// A logged partner interaction.
///
/// Serialized with camelCase keys, which is the layout of the persisted
/// `tickets` collection. Keys this struct does not know about are kept in
/// `extra` and written back unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Creation timestamp in milliseconds, as a string.
    pub id: String,
    /// ISO 8601 calendar date (`YYYY-MM-DD`).
    pub connect_date: String,
    #[serde(default)]
    pub partner_id: String,
    #[serde(default)]
    pub partner_name: String,
    #[schemars(with = "String")]
    pub region: Region,
    pub type_of_connect: ConnectType,
    #[serde(default)]
    pub discussion_area: String,
    #[serde(default)]
    pub discussion_sub_area: String,
    #[serde(default)]
    pub action_taken: String,
    pub current_status: TicketStatus,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Ticket {
    /// Parsed connect date. `None` when the stored string is not a
    /// calendar date (or a timestamp starting with one).
    #[must_use]
    pub fn connect_date(&self) -> Option<NaiveDate> {
        parse_connect_date(&self.connect_date)
    }
}

/// Parse `YYYY-MM-DD`, also accepting a full RFC 3339 timestamp.
#[must_use]
pub fn parse_connect_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        chrono::DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|timestamp| timestamp.date_naive())
    })
}
