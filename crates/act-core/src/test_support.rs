//! Ticket builders shared by unit tests.

use crate::entities::Ticket;
use crate::enums::{ConnectType, Region, TicketStatus};

pub fn ticket(id: &str) -> Ticket {
    Ticket {
        id: id.to_string(),
        connect_date: "2024-01-01".into(),
        partner_id: String::new(),
        partner_name: "Acme".into(),
        region: Region::Americas,
        type_of_connect: ConnectType::Email,
        discussion_area: "Hardware Support".into(),
        discussion_sub_area: "Printer problems".into(),
        action_taken: "Called partner".into(),
        current_status: TicketStatus::PendingInternalAction,
        extra: serde_json::Map::new(),
    }
}

pub fn partner_ticket(id: &str, partner_id: &str, partner_name: &str, date: &str) -> Ticket {
    Ticket {
        partner_id: partner_id.to_string(),
        partner_name: partner_name.to_string(),
        connect_date: date.to_string(),
        ..ticket(id)
    }
}
