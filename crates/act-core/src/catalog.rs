//! Discussion area catalog.
//!
//! Every ticket names a discussion area and a sub-area drawn from the list
//! for that area. Membership is checked when a ticket is saved, not when a
//! stored collection is loaded.

use serde::Serialize;

pub const HARDWARE: &str = "Hardware Support";
pub const SOFTWARE: &str = "Software Support";
pub const ACCOUNT: &str = "Account Management";
pub const NETWORK: &str = "Network Issues";
pub const GENERAL: &str = "General Inquiry";

/// A discussion area and its allowed sub-areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiscussionArea {
    pub name: &'static str,
    pub sub_areas: &'static [&'static str],
}

/// All discussion areas, in display order. The first entry is the default
/// for new tickets.
pub const DISCUSSION_AREAS: &[DiscussionArea] = &[
    DiscussionArea {
        name: HARDWARE,
        sub_areas: &[
            "Desktop/Laptop issues",
            "Peripheral issues (mouse, keyboard)",
            "Printer problems",
            "Mobile device support",
            "Other",
        ],
    },
    DiscussionArea {
        name: SOFTWARE,
        sub_areas: &[
            "Application error/crash",
            "Installation/Update request",
            "Feature request",
            "OS issues (Windows, macOS)",
            "Other",
        ],
    },
    DiscussionArea {
        name: ACCOUNT,
        sub_areas: &[
            "Password reset",
            "New account creation",
            "Permission change",
            "Account deletion",
            "Other",
        ],
    },
    DiscussionArea {
        name: NETWORK,
        sub_areas: &[
            "No internet connection",
            "Slow Wi-Fi",
            "VPN access problem",
            "Firewall request",
            "Other",
        ],
    },
    DiscussionArea {
        name: GENERAL,
        sub_areas: &[
            "How-to question",
            "Policy clarification",
            "Status update request",
            "Other",
        ],
    },
];

/// Look up an area by exact name.
#[must_use]
pub fn area(name: &str) -> Option<&'static DiscussionArea> {
    DISCUSSION_AREAS.iter().find(|area| area.name == name)
}

/// Look up an area by name, ignoring case and surrounding whitespace.
/// Returns the canonical catalog entry.
#[must_use]
pub fn find_area(raw: &str) -> Option<&'static DiscussionArea> {
    let wanted = raw.trim();
    DISCUSSION_AREAS
        .iter()
        .find(|area| area.name.eq_ignore_ascii_case(wanted))
}

/// Sub-areas for `area`; empty for names outside the catalog.
#[must_use]
pub fn sub_areas(area_name: &str) -> &'static [&'static str] {
    area(area_name).map_or(&[], |area| area.sub_areas)
}

/// The sub-area preselected when `area_name` is chosen.
#[must_use]
pub fn default_sub_area(area_name: &str) -> Option<&'static str> {
    sub_areas(area_name).first().copied()
}

/// The area preselected for new tickets.
#[must_use]
pub const fn default_area() -> &'static DiscussionArea {
    &DISCUSSION_AREAS[0]
}

impl DiscussionArea {
    /// Canonical spelling of `raw` if it is one of this area's sub-areas
    /// (case-insensitive).
    #[must_use]
    pub fn find_sub_area(&self, raw: &str) -> Option<&'static str> {
        let wanted = raw.trim();
        self.sub_areas
            .iter()
            .copied()
            .find(|sub| sub.eq_ignore_ascii_case(wanted))
    }
}
