//! Single report slot: at most one report is shown, and only the result of
//! the most recent request may fill it.

use serde::Serialize;

use crate::error::ReportError;

/// What the report view currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "text", rename_all = "snake_case")]
pub enum ReportState {
    #[default]
    Idle,
    Loading,
    Ready(String),
    Failed(String),
}

/// Identifies one report request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportToken(u64);

#[derive(Debug, Default)]
pub struct ReportSlot {
    state: ReportState,
    latest: u64,
}

impl ReportSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request. Any earlier request still in flight is superseded.
    pub fn begin(&mut self) -> ReportToken {
        self.latest += 1;
        self.state = ReportState::Loading;
        ReportToken(self.latest)
    }

    /// Apply a finished request. Returns `false` and leaves the slot alone
    /// when `token` is not the latest one issued.
    pub fn resolve(&mut self, token: ReportToken, result: Result<String, ReportError>) -> bool {
        if token.0 != self.latest {
            tracing::debug!(token = token.0, latest = self.latest, "dropping stale report result");
            return false;
        }
        self.state = match result {
            Ok(text) => ReportState::Ready(text),
            Err(error) => ReportState::Failed(error.to_string()),
        };
        true
    }

    #[must_use]
    pub const fn state(&self) -> &ReportState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::GenerationError;

    #[test]
    fn begin_enters_loading() {
        let mut slot = ReportSlot::new();
        assert_eq!(slot.state(), &ReportState::Idle);
        slot.begin();
        assert_eq!(slot.state(), &ReportState::Loading);
    }

    #[test]
    fn latest_request_wins() {
        let mut slot = ReportSlot::new();
        let first = slot.begin();
        let second = slot.begin();

        assert!(slot.resolve(second, Ok("second".into())));
        assert!(!slot.resolve(first, Ok("first".into())));
        assert_eq!(slot.state(), &ReportState::Ready("second".into()));
    }

    #[test]
    fn stale_result_does_not_end_loading() {
        let mut slot = ReportSlot::new();
        let first = slot.begin();
        let _second = slot.begin();
        assert!(!slot.resolve(first, Ok("old".into())));
        assert_eq!(slot.state(), &ReportState::Loading);
    }

    #[test]
    fn failure_shows_generic_message() {
        let mut slot = ReportSlot::new();
        let token = slot.begin();
        slot.resolve(
            token,
            Err(ReportError::GenerationFailed(GenerationError::EmptyResponse)),
        );
        assert_eq!(
            slot.state(),
            &ReportState::Failed(
                "Failed to generate report. Please check your API key and try again.".into()
            )
        );
    }
}
