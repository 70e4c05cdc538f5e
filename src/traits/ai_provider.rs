use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;

/// A hosted model that turns one prompt into one text completion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Sends `prompt` once. `Ok(None)` means the service answered without any text.
    async fn generate(&self, prompt: &str) -> Result<Option<String>, AiProviderError>;

    fn model(&self) -> String;
}
