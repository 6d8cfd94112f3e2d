//! The text-generation collaborator.

use async_trait::async_trait;

use crate::error::GenerationError;

/// Anything that turns a prompt into generated text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for `prompt`. Called once per report, never retried.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
