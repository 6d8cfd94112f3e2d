//! Migration of previously persisted ticket records.
//!
//! Older releases stored statuses (`Pending`, `Open`, `Closed`) and a region
//! spelling (`Middle and Easter Europe`) that are no longer valid. A stored
//! collection is first read as [`LegacyTicket`] records, whose fields are all
//! loosely typed and optional, and then normalized into current [`Ticket`]s.
//!
//! Normalization is pure and total: every stored object yields exactly one
//! ticket, in the same order, and fields the rules do not touch (including
//! unknown keys) pass through unchanged. Only a payload that is not an array
//! is unreadable; see `act-store` for the recovery path.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::entities::Ticket;
use crate::enums::{ConnectType, Region, TicketStatus};

/// Misspelled region name written by older releases.
pub const LEGACY_REGION_TYPO: &str = "Middle and Easter Europe";

/// Status assigned to records whose stored status is not recognized.
pub const FALLBACK_STATUS: TicketStatus = TicketStatus::PendingInternalAction;

/// A ticket record as found in storage, from any prior release.
///
/// Every field may be absent. Scalar fields accept numbers and booleans as
/// text; `currentStatus` keeps whatever JSON value was stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LegacyTicket {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub connect_date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub partner_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub partner_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub region: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub type_of_connect: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub discussion_area: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub discussion_sub_area: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub action_taken: String,
    #[serde(default)]
    pub current_status: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Strings pass through, numbers and booleans become their text, anything
/// else (null, arrays, objects) reads as empty.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

impl From<Ticket> for LegacyTicket {
    fn from(ticket: Ticket) -> Self {
        Self {
            id: ticket.id,
            connect_date: ticket.connect_date,
            partner_id: ticket.partner_id,
            partner_name: ticket.partner_name,
            region: ticket.region.into(),
            type_of_connect: ticket.type_of_connect.as_str().to_string(),
            discussion_area: ticket.discussion_area,
            discussion_sub_area: ticket.discussion_sub_area,
            action_taken: ticket.action_taken,
            current_status: Value::String(ticket.current_status.as_str().to_string()),
            extra: ticket.extra,
        }
    }
}

/// Result of normalizing a stored collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalized {
    pub tickets: Vec<Ticket>,
    /// Number of records at least one rule had to repair.
    pub repaired: usize,
    /// Array elements dropped because they were not objects.
    pub skipped: usize,
}

/// Map a stored status to a current one.
///
/// Current statuses are kept. `Pending` and `Open` become
/// `Pending (Internal Action)`, `Closed` becomes `Resolved`, and anything
/// else (including a missing or non-string value) falls back to
/// `Pending (Internal Action)`.
#[must_use]
pub fn normalize_status(raw: &Value) -> TicketStatus {
    let Some(raw) = raw.as_str() else {
        return FALLBACK_STATUS;
    };
    if let Some(status) = TicketStatus::from_stored(raw) {
        return status;
    }
    match raw {
        "Pending" | "Open" => TicketStatus::PendingInternalAction,
        "Closed" => TicketStatus::Resolved,
        _ => FALLBACK_STATUS,
    }
}

/// Fix the one known region misspelling. Every other value, recognized or
/// not, is returned as is.
#[must_use]
pub fn normalize_region(region: Region) -> Region {
    match region {
        Region::Unrecognized(raw) if raw == LEGACY_REGION_TYPO => Region::MiddleAndEasternEurope,
        other => other,
    }
}

fn stored_connect_type(raw: &str) -> Option<ConnectType> {
    ConnectType::ALL.into_iter().find(|kind| kind.as_str() == raw)
}

/// Map a stored connect type to a current one.
///
/// Exact names are kept, other spellings of a current type (`"phone call"`)
/// are matched loosely, and anything else becomes the form default.
#[must_use]
pub fn normalize_connect_type(raw: &str) -> ConnectType {
    stored_connect_type(raw)
        .or_else(|| ConnectType::parse(raw))
        .unwrap_or_default()
}

/// Whether any normalization rule applies to `record`.
#[must_use]
pub fn needs_repair(record: &LegacyTicket) -> bool {
    let status_ok = record
        .current_status
        .as_str()
        .and_then(TicketStatus::from_stored)
        .is_some();
    let type_ok = stored_connect_type(&record.type_of_connect).is_some();
    !status_ok || !type_ok || record.region == LEGACY_REGION_TYPO
}

/// Normalize one record into a current ticket.
#[must_use]
pub fn normalize(record: LegacyTicket) -> Ticket {
    Ticket {
        current_status: normalize_status(&record.current_status),
        type_of_connect: normalize_connect_type(&record.type_of_connect),
        region: normalize_region(Region::from(record.region)),
        id: record.id,
        connect_date: record.connect_date,
        partner_id: record.partner_id,
        partner_name: record.partner_name,
        discussion_area: record.discussion_area,
        discussion_sub_area: record.discussion_sub_area,
        action_taken: record.action_taken,
        extra: record.extra,
    }
}

/// Normalize a whole collection, preserving length and order.
#[must_use]
pub fn normalize_all(records: Vec<LegacyTicket>) -> Normalized {
    let repaired = records.iter().filter(|record| needs_repair(record)).count();
    let tickets = records.into_iter().map(normalize).collect();
    Normalized {
        tickets,
        repaired,
        skipped: 0,
    }
}

/// Normalize the elements of a stored `tickets` array.
///
/// Objects always read as records. Other elements (numbers, strings, null)
/// carry no ticket and are counted in [`Normalized::skipped`].
#[must_use]
pub fn normalize_values(values: Vec<Value>) -> Normalized {
    let total = values.len();
    let records: Vec<LegacyTicket> = values
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect();
    let skipped = total - records.len();
    Normalized {
        skipped,
        ..normalize_all(records)
    }
}

/// Parse a stored `tickets` payload and normalize it.
///
/// # Errors
///
/// Returns the parse error if `raw` is not a JSON array. Individual elements
/// never fail the parse.
pub fn parse_stored(raw: &str) -> Result<Normalized, serde_json::Error> {
    let values: Vec<Value> = serde_json::from_str(raw)?;
    Ok(normalize_values(values))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::test_support::ticket;

    fn legacy(status: Value, region: &str) -> LegacyTicket {
        let mut record = LegacyTicket::from(ticket("1"));
        record.current_status = status;
        record.region = region.to_string();
        record
    }

    #[test]
    fn legacy_statuses_map_to_documented_targets() {
        let cases = [
            ("Pending", TicketStatus::PendingInternalAction),
            ("Open", TicketStatus::PendingInternalAction),
            ("Closed", TicketStatus::Resolved),
            ("In Review", TicketStatus::PendingInternalAction),
            ("", TicketStatus::PendingInternalAction),
            ("resolved", TicketStatus::PendingInternalAction),
        ];
        for (raw, expected) in cases {
            assert_eq!(normalize_status(&json!(raw)), expected, "status {raw:?}");
        }
    }

    #[test]
    fn current_statuses_are_kept() {
        for status in TicketStatus::ALL {
            assert_eq!(normalize_status(&json!(status.as_str())), status);
        }
    }

    #[test]
    fn missing_or_non_string_status_falls_back() {
        assert_eq!(normalize_status(&Value::Null), FALLBACK_STATUS);
        assert_eq!(normalize_status(&json!(3)), FALLBACK_STATUS);
    }

    #[test]
    fn region_typo_is_fixed_and_others_untouched() {
        assert_eq!(
            normalize_region(Region::from(LEGACY_REGION_TYPO.to_string())),
            Region::MiddleAndEasternEurope
        );
        assert_eq!(
            normalize_region(Region::from("Antarctica".to_string())),
            Region::Unrecognized("Antarctica".to_string())
        );
        assert_eq!(
            normalize_region(Region::from("middle and easter europe".to_string())),
            Region::Unrecognized("middle and easter europe".to_string())
        );
        assert_eq!(normalize_region(Region::Emea), Region::Emea);
    }

    #[test]
    fn rules_apply_independently() {
        let fixed = normalize(legacy(json!("Closed"), LEGACY_REGION_TYPO));
        assert_eq!(fixed.current_status, TicketStatus::Resolved);
        assert_eq!(fixed.region, Region::MiddleAndEasternEurope);

        let status_only = normalize(legacy(json!("Open"), "EMEA"));
        assert_eq!(status_only.current_status, TicketStatus::PendingInternalAction);
        assert_eq!(status_only.region, Region::Emea);
    }

    #[test]
    fn record_without_applicable_rule_is_field_equal() {
        let original = ticket("42");
        let record = LegacyTicket::from(original.clone());
        assert!(!needs_repair(&record));
        assert_eq!(normalize(record), original);
    }

    #[test]
    fn migrating_twice_equals_migrating_once() {
        let records = vec![
            legacy(json!("Pending"), "Americas"),
            legacy(json!("Closed"), LEGACY_REGION_TYPO),
            legacy(json!("Resolved"), "Asia Pacific"),
            legacy(json!("weird"), "Atlantis"),
        ];
        let once = normalize_all(records).tickets;
        let twice = normalize_all(once.iter().cloned().map(LegacyTicket::from).collect()).tickets;
        assert_eq!(twice, once);
    }

    #[test]
    fn normalize_all_preserves_length_order_and_counts_repairs() {
        let mut first = legacy(json!("Open"), "Americas");
        first.id = "a".into();
        let mut second = legacy(json!("Resolved"), "EMEA");
        second.id = "b".into();
        let mut third = legacy(json!("Resolved"), LEGACY_REGION_TYPO);
        third.id = "c".into();

        let normalized = normalize_all(vec![first, second, third]);
        let ids: Vec<&str> = normalized.tickets.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(normalized.repaired, 2);
    }

    #[test]
    fn parse_stored_keeps_unknown_fields() {
        let raw = json!([{
            "id": "1",
            "connectDate": "2023-05-01",
            "partnerName": "Acme",
            "region": LEGACY_REGION_TYPO,
            "typeOfConnect": "Phone call",
            "actionTaken": "Sent quote",
            "currentStatus": "Closed",
            "legacyNote": "kept"
        }])
        .to_string();

        let normalized = parse_stored(&raw).unwrap();
        let ticket = &normalized.tickets[0];
        assert_eq!(ticket.current_status, TicketStatus::Resolved);
        assert_eq!(ticket.region, Region::MiddleAndEasternEurope);
        assert_eq!(ticket.extra.get("legacyNote"), Some(&json!("kept")));
        assert!(!ticket.extra.contains_key("currentStatus"));
    }

    #[test]
    fn unknown_connect_type_falls_back_to_default() {
        assert_eq!(normalize_connect_type("Meeting"), ConnectType::Meeting);
        assert_eq!(normalize_connect_type("phone call"), ConnectType::PhoneCall);
        assert_eq!(normalize_connect_type("Video call"), ConnectType::Email);
        assert_eq!(normalize_connect_type(""), ConnectType::Email);

        let mut record = LegacyTicket::from(ticket("1"));
        record.type_of_connect = "Video call".into();
        assert!(needs_repair(&record));
        assert_eq!(normalize(record).type_of_connect, ConnectType::Email);
    }

    #[test]
    fn sparse_and_oddly_typed_records_still_normalize() {
        let raw = json!([
            { "id": "1", "partnerName": "Acme", "typeOfConnect": "Video call" },
            { "id": 7, "partnerId": 1234, "region": "EMEA", "connectDate": null },
            42,
            { "id": "3", "connectDate": "2024-03-01", "region": "Americas",
              "typeOfConnect": "Email", "currentStatus": "Resolved" }
        ])
        .to_string();

        let normalized = parse_stored(&raw).unwrap();
        let ids: Vec<&str> = normalized.tickets.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "7", "3"]);
        assert_eq!(normalized.skipped, 1);
        assert_eq!(normalized.repaired, 2);

        let first = &normalized.tickets[0];
        assert_eq!(first.connect_date, "");
        assert_eq!(first.region, Region::Unrecognized(String::new()));
        assert_eq!(first.type_of_connect, ConnectType::Email);
        assert_eq!(first.current_status, FALLBACK_STATUS);

        let second = &normalized.tickets[1];
        assert_eq!(second.partner_id, "1234");
        assert_eq!(second.region, Region::Emea);
    }

    #[test]
    fn parse_stored_rejects_non_array_payload() {
        assert!(parse_stored("{\"not\": \"an array\"}").is_err());
        assert!(parse_stored("not json").is_err());
    }
}
