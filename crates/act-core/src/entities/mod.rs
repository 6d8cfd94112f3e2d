//! Entity structs for the activity tracker.
//!
//! Entities derive `Serialize`, `Deserialize`, and `JsonSchema` so the
//! persisted collection can be round-tripped and schema-checked.

mod ticket;

pub use ticket::{Ticket, parse_connect_date};
