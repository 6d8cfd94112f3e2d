//! Partner history lookup and identity auto-fill.
//!
//! While a ticket is being entered, the partner ID and partner name are
//! matched against the stored collection to
//! - fill in whichever identity field is missing, and
//! - list earlier tickets for the same partner, most recent first.
//!
//! Matching trims and case-folds both sides. Several partners may share a
//! name; the first match in collection order wins and no ambiguity is
//! reported.

use std::cmp::Reverse;

use serde::Serialize;

use crate::entities::Ticket;

/// A value to copy into the identity field the user left empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum Autofill {
    PartnerName(String),
    PartnerId(String),
}

/// Auto-fill suggestion plus partner history for one identity input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartnerLookup<'a> {
    pub autofill: Option<Autofill>,
    pub history: Vec<&'a Ticket>,
}

fn fold(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Suggest the missing half of a partner identity.
///
/// Only fires when exactly one of `partner_id` / `partner_name` is non-blank
/// and some ticket matches it; the first matching ticket supplies the value.
#[must_use]
pub fn autofill(partner_id: &str, partner_name: &str, tickets: &[Ticket]) -> Option<Autofill> {
    let id = fold(partner_id);
    let name = fold(partner_name);

    match (id.is_empty(), name.is_empty()) {
        (false, true) => tickets
            .iter()
            .find(|ticket| fold(&ticket.partner_id) == id)
            .map(|ticket| Autofill::PartnerName(ticket.partner_name.clone())),
        (true, false) => tickets
            .iter()
            .find(|ticket| fold(&ticket.partner_name) == name)
            .map(|ticket| Autofill::PartnerId(ticket.partner_id.clone())),
        _ => None,
    }
}

/// Earlier tickets for the partner identified by `partner_id`, or by
/// `partner_name` when the ID is blank.
///
/// The ticket being edited (`editing_id`) is excluded. Results are sorted by
/// connect date, newest first; ties and unparseable dates keep collection
/// order, with unparseable dates after all dated tickets.
#[must_use]
pub fn history<'a>(
    partner_id: &str,
    partner_name: &str,
    editing_id: Option<&str>,
    tickets: &'a [Ticket],
) -> Vec<&'a Ticket> {
    let id = fold(partner_id);
    let name = fold(partner_name);
    if id.is_empty() && name.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<&Ticket> = tickets
        .iter()
        .filter(|ticket| editing_id != Some(ticket.id.as_str()))
        .filter(|ticket| {
            if id.is_empty() {
                fold(&ticket.partner_name) == name
            } else {
                fold(&ticket.partner_id) == id
            }
        })
        .collect();

    // sort_by_key is stable
    matches.sort_by_key(|ticket| Reverse(ticket.connect_date()));
    matches
}

/// Run both rules for the current form input.
#[must_use]
pub fn lookup<'a>(
    partner_id: &str,
    partner_name: &str,
    editing_id: Option<&str>,
    tickets: &'a [Ticket],
) -> PartnerLookup<'a> {
    PartnerLookup {
        autofill: autofill(partner_id, partner_name, tickets),
        history: history(partner_id, partner_name, editing_id, tickets),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::partner_ticket;

    fn ids<'a>(tickets: &[&'a Ticket]) -> Vec<&'a str> {
        tickets.iter().map(|ticket| ticket.id.as_str()).collect()
    }

    fn collection() -> Vec<Ticket> {
        vec![
            partner_ticket("1", "P-100", "Acme Corp", "2024-02-01"),
            partner_ticket("2", "P-200", "Globex", "2024-03-15"),
            partner_ticket("3", "p-100 ", "ACME CORP", "2024-04-10"),
            partner_ticket("4", "P-300", "Acme Corp", "2024-01-20"),
        ]
    }

    #[test]
    fn id_fills_missing_name() {
        let tickets = collection();
        assert_eq!(
            autofill(" P-200 ", "", &tickets),
            Some(Autofill::PartnerName("Globex".into()))
        );
    }

    #[test]
    fn name_fills_missing_id_with_first_match() {
        let tickets = collection();
        // "Acme Corp" belongs to P-100 and P-300; the first in order wins.
        assert_eq!(
            autofill("", "acme corp", &tickets),
            Some(Autofill::PartnerId("P-100".into()))
        );
    }

    #[test]
    fn no_autofill_when_both_or_neither_present() {
        let tickets = collection();
        assert_eq!(autofill("P-200", "Someone", &tickets), None);
        assert_eq!(autofill("", "  ", &tickets), None);
    }

    #[test]
    fn no_autofill_without_a_match() {
        let tickets = collection();
        assert_eq!(autofill("P-999", "", &tickets), None);
        assert_eq!(autofill("", "Initech", &tickets), None);
        assert_eq!(autofill("P-100", "", &[]), None);
    }

    #[test]
    fn history_by_id_is_newest_first() {
        let tickets = collection();
        let found = history("P-100", "", None, &tickets);
        assert_eq!(ids(&found), vec!["3", "1"]);
    }

    #[test]
    fn history_prefers_id_over_name() {
        let tickets = collection();
        let found = history("P-300", "Acme Corp", None, &tickets);
        assert_eq!(ids(&found), vec!["4"]);
    }

    #[test]
    fn history_by_name_when_id_blank() {
        let tickets = collection();
        let found = history("", "acme corp", None, &tickets);
        assert_eq!(ids(&found), vec!["3", "1", "4"]);
    }

    #[test]
    fn history_excludes_ticket_being_edited() {
        let tickets = collection();
        let found = history("P-100", "", Some("3"), &tickets);
        assert_eq!(ids(&found), vec!["1"]);
    }

    #[test]
    fn history_ties_keep_collection_order() {
        let tickets = vec![
            partner_ticket("a", "P-1", "Same", "2024-05-05"),
            partner_ticket("b", "P-1", "Same", "2024-05-05"),
            partner_ticket("c", "P-1", "Same", "2024-06-01"),
            partner_ticket("d", "P-1", "Same", "2024-05-05"),
        ];
        let found = history("P-1", "", None, &tickets);
        assert_eq!(ids(&found), vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn history_puts_undated_tickets_last() {
        let tickets = vec![
            partner_ticket("a", "P-1", "Same", "someday"),
            partner_ticket("b", "P-1", "Same", "2024-05-05"),
        ];
        let found = history("P-1", "", None, &tickets);
        assert_eq!(ids(&found), vec!["b", "a"]);
    }

    #[test]
    fn blank_identity_has_no_history() {
        let tickets = collection();
        assert!(history("", " ", None, &tickets).is_empty());
    }

    #[test]
    fn lookup_combines_both_rules() {
        let tickets = collection();
        let result = lookup("P-200", "", None, &tickets);
        assert_eq!(result.autofill, Some(Autofill::PartnerName("Globex".into())));
        assert_eq!(ids(&result.history), vec!["2"]);
    }
}
