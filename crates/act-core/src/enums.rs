//! Region, connect type, and status enums for tickets.
//!
//! Persisted values use the human-readable display strings (`"Asia Pacific"`,
//! `"Phone call"`, `"Pending (Partner Action)"`), because that is the shape
//! of every stored ticket collection. CLI input additionally accepts
//! kebab-case slugs via the `parse` helpers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowercase a value and collapse whitespace runs into single hyphens.
#[must_use]
pub fn slugify(value: &str) -> String {
    value
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// Sales region a ticket belongs to.
///
/// Stored collections may contain region strings from older releases. Those
/// are kept verbatim in [`Region::Unrecognized`] rather than rejected, so a
/// load never drops a record because of its region.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Region {
    Americas,
    AsiaPacific,
    Emea,
    MiddleAndEasternEurope,
    Unrecognized(String),
}

impl Region {
    /// The four current regions, in display order.
    pub const ALL: [Self; 4] = [
        Self::Americas,
        Self::AsiaPacific,
        Self::Emea,
        Self::MiddleAndEasternEurope,
    ];

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Americas => "Americas",
            Self::AsiaPacific => "Asia Pacific",
            Self::Emea => "EMEA",
            Self::MiddleAndEasternEurope => "Middle and Eastern Europe",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Whether this is one of the four current regions.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    /// Lowercased, hyphen-separated form (`"asia-pacific"`).
    #[must_use]
    pub fn slug(&self) -> String {
        slugify(self.as_str())
    }

    /// Parse user input into a current region.
    ///
    /// Accepts the display name or the slug, case-insensitively. Returns
    /// `None` for anything else; user input never produces `Unrecognized`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let wanted = slugify(raw);
        Self::ALL.into_iter().find(|region| region.slug() == wanted)
    }
}

impl From<String> for Region {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Americas" => Self::Americas,
            "Asia Pacific" => Self::AsiaPacific,
            "EMEA" => Self::Emea,
            "Middle and Eastern Europe" => Self::MiddleAndEasternEurope,
            _ => Self::Unrecognized(raw),
        }
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        match region {
            Region::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ConnectType
// ---------------------------------------------------------------------------

/// How the partner interaction took place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ConnectType {
    #[default]
    Email,
    Meeting,
    #[serde(rename = "Phone call")]
    PhoneCall,
}

impl ConnectType {
    pub const ALL: [Self; 3] = [Self::Email, Self::Meeting, Self::PhoneCall];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Meeting => "Meeting",
            Self::PhoneCall => "Phone call",
        }
    }

    /// Parse the display name or slug (`"phone-call"`), case-insensitively.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let wanted = slugify(raw);
        Self::ALL
            .into_iter()
            .find(|kind| slugify(kind.as_str()) == wanted)
    }
}

impl fmt::Display for ConnectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TicketStatus
// ---------------------------------------------------------------------------

/// Current status of a ticket.
///
/// ```text
/// Pending (Partner Action) ⇄ Pending (Internal Action) → Resolved
/// ```
///
/// Transitions are not enforced; any status may be saved over any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum TicketStatus {
    #[serde(rename = "Pending (Partner Action)")]
    PendingPartnerAction,
    #[default]
    #[serde(rename = "Pending (Internal Action)")]
    PendingInternalAction,
    Resolved,
}

impl TicketStatus {
    pub const ALL: [Self; 3] = [
        Self::PendingPartnerAction,
        Self::PendingInternalAction,
        Self::Resolved,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PendingPartnerAction => "Pending (Partner Action)",
            Self::PendingInternalAction => "Pending (Internal Action)",
            Self::Resolved => "Resolved",
        }
    }

    /// Exact match against the persisted display strings.
    #[must_use]
    pub fn from_stored(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == raw)
    }

    /// Parse user input: the display name (any case) or one of the short
    /// forms `partner`, `internal`, `resolved` and their `pending-` variants.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let wanted = raw.trim().to_lowercase();
        if let Some(status) = Self::ALL
            .into_iter()
            .find(|status| status.as_str().to_lowercase() == wanted)
        {
            return Some(status);
        }
        match wanted.replace('_', "-").as_str() {
            "partner" | "pending-partner" | "pending-partner-action" => {
                Some(Self::PendingPartnerAction)
            }
            "internal" | "pending-internal" | "pending-internal-action" => {
                Some(Self::PendingInternalAction)
            }
            "resolved" => Some(Self::Resolved),
            _ => None,
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// StatusFilter
// ---------------------------------------------------------------------------

/// Status restriction for the visible ticket list. `All` is the sentinel
/// that keeps every status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TicketStatus),
}

impl StatusFilter {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        TicketStatus::parse(raw).map(Self::Only)
    }

    #[must_use]
    pub fn allows(self, status: TicketStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(status) => status.fmt(f),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
