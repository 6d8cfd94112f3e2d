//! Report error types.

use thiserror::Error;

/// Failures from a text-generation backend.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body.
        message: String,
    },

    /// The service returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The response carried no generated text.
    #[error("the service returned no text")]
    EmptyResponse,

    /// No API key is configured.
    #[error("no API key configured (set ACTIVITY_REPORT__API_KEY)")]
    NotConfigured,
}

/// The single failure a report caller sees.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to generate report. Please check your API key and try again.")]
    GenerationFailed(#[source] GenerationError),
}
