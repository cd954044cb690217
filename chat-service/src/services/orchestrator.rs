//! Chat orchestration: prompt assembly, provider invocation, history update.

use crate::models::{Role, Turn};
use crate::services::providers::{ChatProvider, GenerationParams, MessageRole, PromptMessage};
use crate::services::session::SessionStore;
use service_core::error::AppError;
use std::sync::Arc;

/// Session id used when the caller supplies none, so unauthenticated and
/// test callers share one default conversation.
pub const DEFAULT_SESSION_ID: &str = "demo-session-user-1";

/// Placeholder standing in for knowledge-base retrieval; no retrieval is
/// performed.
const RETRIEVED_CONTEXT: &str =
    "No specific knowledge base documents found. Rely on internal diagnostics.";

/// Drives one request/response cycle: resolve the session, replay its
/// history into the prompt, call the provider, record the exchange.
pub struct ChatOrchestrator {
    store: Arc<dyn SessionStore>,
    provider: Arc<dyn ChatProvider>,
    system_prompt: String,
    params: GenerationParams,
}

impl ChatOrchestrator {
    pub fn new(
        store: Arc<dyn SessionStore>,
        provider: Arc<dyn ChatProvider>,
        system_prompt: String,
        params: GenerationParams,
    ) -> Self {
        Self {
            store,
            provider,
            system_prompt,
            params,
        }
    }

    /// Forward one user message to the model and record the exchange.
    ///
    /// History is mutated only after a successful completion: a failed
    /// provider call must not leave an unanswered user turn behind.
    pub async fn respond(
        &self,
        session_id: Option<&str>,
        user_message: &str,
    ) -> Result<String, AppError> {
        if user_message.is_empty() {
            return Err(AppError::BadRequest(anyhow::anyhow!("Message is required")));
        }

        let session_id = match session_id {
            Some(id) if !id.is_empty() => id,
            _ => DEFAULT_SESSION_ID,
        };

        let history = self.store.get_or_create(session_id);

        // Snapshot under the lock, release it for the network call. Two
        // concurrent requests on one session can both snapshot before either
        // appends; the resulting turn order is undefined. Known race,
        // accepted for a low-concurrency single-user chat.
        let prior: Vec<Turn> = history.lock().await.clone();

        let mut messages = Vec::with_capacity(prior.len() + 2);
        messages.push(PromptMessage::system(format!(
            "{}\n\nRelevant Context from Knowledge Base: {}",
            self.system_prompt, RETRIEVED_CONTEXT
        )));
        for turn in &prior {
            let role = match turn.role {
                Role::User => MessageRole::User,
                Role::Assistant => MessageRole::Assistant,
            };
            messages.push(PromptMessage {
                role,
                content: turn.content.clone(),
            });
        }
        messages.push(PromptMessage::user(user_message));

        let reply = self
            .provider
            .complete(&messages, &self.params)
            .await
            .map_err(|e| {
                tracing::error!(session_id = %session_id, error = %e, "Chat completion failed");
                AppError::UpstreamError(e.to_string())
            })?;

        let mut turns = history.lock().await;
        turns.push(Turn::new(Role::User, user_message));
        turns.push(Turn::new(Role::Assistant, reply.clone()));

        tracing::debug!(
            session_id = %session_id,
            history_len = turns.len(),
            "Recorded chat exchange"
        );

        Ok(reply)
    }
}
