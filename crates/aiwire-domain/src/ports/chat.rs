//! Chat Client Port

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{ChatCompletion, ChatMessage};

/// Conversational Generation Interface
///
/// Defines the business contract for providers that turn a conversation
/// into a model completion, from hosted OpenAI deployments to self-hosted
/// inference endpoints. Implementations own their transport and
/// authentication; consumers only see messages in and a completion out.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Generate a completion for the given conversation
    async fn complete(&self, messages: &[ChatMessage]) -> Result<ChatCompletion>;

    /// Convenience wrapper for a single user prompt (default implementation provided)
    async fn generate(&self, prompt: &str) -> Result<ChatCompletion> {
        self.complete(&[ChatMessage::user(prompt)]).await
    }

    /// Get the name/identifier of this provider implementation
    ///
    /// # Returns
    /// A string identifier for the provider (e.g., "openai", "huggingface")
    fn provider_name(&self) -> &str;

    /// Model identifier this client is bound to
    fn model(&self) -> &str;
}
