use act_core::enums::{ConnectType, Region, StatusFilter, TicketStatus};

fn choices<T: ToString>(values: impl IntoIterator<Item = T>) -> String {
    values
        .into_iter()
        .map(|value| format!("'{}'", value.to_string()))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn parse_region(raw: &str) -> anyhow::Result<Region> {
    Region::parse(raw).ok_or_else(|| {
        anyhow::anyhow!("invalid region '{raw}': expected one of {}", choices(Region::ALL))
    })
}

pub fn parse_status(raw: &str) -> anyhow::Result<TicketStatus> {
    TicketStatus::parse(raw).ok_or_else(|| {
        anyhow::anyhow!(
            "invalid status '{raw}': expected one of {} (or partner, internal, resolved)",
            choices(TicketStatus::ALL)
        )
    })
}

/// Status filter; absent means every status.
pub fn parse_status_filter(raw: Option<&str>) -> anyhow::Result<StatusFilter> {
    let Some(raw) = raw else {
        return Ok(StatusFilter::All);
    };
    StatusFilter::parse(raw).ok_or_else(|| {
        anyhow::anyhow!(
            "invalid status filter '{raw}': expected 'all' or one of {}",
            choices(TicketStatus::ALL)
        )
    })
}

pub fn parse_connect_type(raw: &str) -> anyhow::Result<ConnectType> {
    ConnectType::parse(raw).ok_or_else(|| {
        anyhow::anyhow!(
            "invalid type of connect '{raw}': expected one of {}",
            choices(ConnectType::ALL)
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_region_slug() {
        assert_eq!(parse_region("asia-pacific").unwrap(), Region::AsiaPacific);
    }

    #[test]
    fn region_error_lists_choices() {
        let err = parse_region("Atlantis").unwrap_err().to_string();
        assert!(err.contains("invalid region 'Atlantis'"));
        assert!(err.contains("'Middle and Eastern Europe'"));
    }

    #[test]
    fn status_filter_defaults_to_all() {
        assert_eq!(parse_status_filter(None).unwrap(), StatusFilter::All);
        assert_eq!(
            parse_status_filter(Some("internal")).unwrap(),
            StatusFilter::Only(TicketStatus::PendingInternalAction)
        );
        assert!(parse_status_filter(Some("closed")).is_err());
    }

    #[test]
    fn connect_type_error_lists_choices() {
        let err = parse_connect_type("fax").unwrap_err().to_string();
        assert!(err.contains("'Phone call'"));
        assert_eq!(parse_connect_type("phone-call").unwrap(), ConnectType::PhoneCall);
    }

    #[test]
    fn status_accepts_short_form() {
        assert_eq!(parse_status("partner").unwrap(), TicketStatus::PendingPartnerAction);
        assert!(parse_status("done").is_err());
    }
}
