//! AI provider abstraction
//!
//! [`AiProvider`] is the capability the AI endpoint consumes: one prompt
//! in, one answer out. Two implementations exist — an OpenAI-compatible
//! network provider and a deterministic placeholder — and the choice is
//! made once at startup from configuration, never at the call site.

pub mod openai;
pub mod placeholder;

pub use openai::OpenAiProvider;
pub use placeholder::PlaceholderProvider;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::config::AppConfig;
use crate::core::AiError;

/// Capability for answering free-text questions
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Send `prompt` to the provider and return its text answer.
    async fn complete(&self, prompt: &str) -> Result<String, AiError>;
}

/// Select the provider implementation for this process.
///
/// Debug mode selects the placeholder, as does a missing API key (the
/// network provider could only ever fail without one). Handlers receive
/// the result as `Arc<dyn AiProvider>` and never learn which one it is.
pub fn provider_from_config(config: &AppConfig) -> Result<Arc<dyn AiProvider>, AiError> {
    match &config.openai_api_key {
        Some(key) if !config.debug => {
            info!(model = %config.openai_model, "using OpenAI-compatible AI provider");
            Ok(Arc::new(OpenAiProvider::new(
                config.openai_api_url.clone(),
                config.openai_model.clone(),
                key.clone(),
            )?))
        }
        _ => {
            info!("using placeholder AI provider");
            Ok(Arc::new(PlaceholderProvider))
        }
    }
}
