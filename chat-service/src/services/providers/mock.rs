//! Mock provider implementation for testing.

use super::{ChatProvider, GenerationParams, ProviderError, PromptMessage};
use async_trait::async_trait;

/// Mock chat provider for testing.
///
/// The reply embeds the prompt message count so tests can observe how much
/// history was replayed. Constructed disabled, every call fails, which
/// stands in for an upstream outage.
pub struct MockChatProvider {
    enabled: bool,
}

impl MockChatProvider {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn complete(
        &self,
        messages: &[PromptMessage],
        _params: &GenerationParams,
    ) -> Result<String, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotConfigured(
                "Mock chat provider not enabled".to_string(),
            ));
        }

        // Simulate some processing
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        let last = messages
            .last()
            .map(|m| m.content.as_str())
            .unwrap_or_default();

        Ok(format!(
            "Mock reply [{} prompt messages] to: {}",
            messages.len(),
            last
        ))
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.enabled {
            Ok(())
        } else {
            Err(ProviderError::NotConfigured(
                "Mock chat provider not enabled".to_string(),
            ))
        }
    }
}
