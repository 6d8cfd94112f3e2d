//! # act-report
//!
//! Management summaries of activity tickets, written by a text-generation
//! service.
//!
//! - [`prompt`]: the fixed instruction template and per-ticket blocks
//! - [`TextGenerator`]: the external collaborator, implemented over HTTP by
//!   [`GeminiClient`]
//! - [`ReportRequester`]: skips the service for an empty set and collapses
//!   every failure into [`ReportError::GenerationFailed`]
//! - [`ReportSlot`]: the single report view, where the latest request wins

mod error;
mod gemini;
mod generator;
mod http;
pub mod prompt;
mod requester;
mod slot;

pub use error::{GenerationError, ReportError};
pub use gemini::GeminiClient;
pub use generator::TextGenerator;
pub use prompt::{NO_ACTIVITY_MESSAGE, build_prompt};
pub use requester::ReportRequester;
pub use slot::{ReportSlot, ReportState, ReportToken};
