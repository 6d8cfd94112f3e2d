//! Text-generation service used for AI reports.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default model name.
fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

/// Default API base URL.
fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReportConfig {
    /// API key sent as `x-goog-api-key`.
    #[serde(default)]
    pub api_key: String,

    /// Model used for `generateContent`.
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL, without a trailing slash.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Whole-request timeout, in seconds. Must be non-zero.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ReportConfig {
    /// Check if an API key is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
