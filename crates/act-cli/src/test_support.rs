//! Fixtures for command tests.

use act_core::entities::Ticket;
use act_core::enums::{ConnectType, Region, TicketStatus};
use act_store::{MemoryKvStore, TicketStore};

pub fn ticket(id: &str, region: Region) -> Ticket {
    Ticket {
        id: id.to_string(),
        connect_date: "2024-01-01".into(),
        partner_id: String::new(),
        partner_name: "Acme".into(),
        region,
        type_of_connect: ConnectType::Email,
        discussion_area: "General Inquiry".into(),
        discussion_sub_area: "Other".into(),
        action_taken: "Called partner".into(),
        current_status: TicketStatus::PendingInternalAction,
        extra: serde_json::Map::new(),
    }
}

/// In-memory store with `region` selected and `tickets` saved.
pub fn store_with(region: Option<Region>, tickets: &[Ticket]) -> TicketStore<MemoryKvStore> {
    let mut store = TicketStore::new(MemoryKvStore::new());
    if let Some(region) = region {
        store.set_region(&region).unwrap();
    }
    store.save_tickets(tickets).unwrap();
    store
}
