use act_core::collection::SaveOutcome;
use act_core::entities::Ticket;
use act_core::partner::Autofill;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::output::{output, output_tickets};

/// Result of `act add` / `act edit`.
#[derive(Debug, Serialize)]
pub struct SavedTicket {
    pub outcome: SaveOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autofill: Option<Autofill>,
    pub ticket: Ticket,
}

impl SavedTicket {
    fn headline(&self) -> String {
        let verb = match self.outcome {
            SaveOutcome::Created => "Created",
            SaveOutcome::Updated => "Updated",
        };
        let mut line = format!("{verb} activity {}", self.ticket.id);
        match &self.autofill {
            Some(Autofill::PartnerName(name)) => {
                line.push_str(&format!(" (partner name filled in: {name})"));
            }
            Some(Autofill::PartnerId(id)) => {
                line.push_str(&format!(" (partner ID filled in: {id})"));
            }
            None => {}
        }
        line
    }
}

pub fn output_saved(saved: &SavedTicket, format: OutputFormat) -> anyhow::Result<()> {
    if format != OutputFormat::Table {
        return output(saved, format);
    }
    println!("{}", saved.headline());
    output_tickets(&[&saved.ticket], format)
}
