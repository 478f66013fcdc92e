//! Deterministic placeholder provider for debug and test runs

use async_trait::async_trait;

use super::AiProvider;
use crate::core::AiError;

/// Answers every question with a canned response embedding the question.
///
/// No I/O and no credentials; selected when debug mode is on or no API
/// key is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderProvider;

#[async_trait]
impl AiProvider for PlaceholderProvider {
    async fn complete(&self, prompt: &str) -> Result<String, AiError> {
        Ok(format!(
            "This is a placeholder answer to your question: {prompt}"
        ))
    }
}
