//! Report requester: empty-set short circuit, prompt, one generation call.

use std::borrow::Borrow;

use act_core::entities::Ticket;

use crate::error::ReportError;
use crate::generator::TextGenerator;
use crate::prompt::{NO_ACTIVITY_MESSAGE, build_prompt};

/// Produces management summaries through a [`TextGenerator`].
#[derive(Debug, Clone)]
pub struct ReportRequester<G> {
    generator: G,
}

impl<G: TextGenerator> ReportRequester<G> {
    pub const fn new(generator: G) -> Self {
        Self { generator }
    }

    #[must_use]
    pub const fn generator(&self) -> &G {
        &self.generator
    }

    /// Summarize `tickets`.
    ///
    /// An empty set returns [`NO_ACTIVITY_MESSAGE`] without calling the
    /// generator. Otherwise the generated text is returned unchanged.
    ///
    /// # Errors
    ///
    /// [`ReportError::GenerationFailed`] for any generator failure. There is
    /// no retry.
    pub async fn generate_report<T: Borrow<Ticket>>(&self, tickets: &[T]) -> Result<String, ReportError> {
        if tickets.is_empty() {
            return Ok(NO_ACTIVITY_MESSAGE.to_string());
        }

        let prompt = build_prompt(tickets);
        self.generator.generate(&prompt).await.map_err(|error| {
            tracing::error!(%error, tickets = tickets.len(), "report generation failed");
            ReportError::GenerationFailed(error)
        })
    }
}
