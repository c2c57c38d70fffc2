use crate::services::conversation::{ConversationStore, GENERIC_ERROR};
use crate::traits::chat_api::ChatApi;
use std::sync::Arc;
use tracing::{error, info};

/// Terminal state of one submission: `Idle -> Sending -> {Succeeded, Failed}
/// -> Idle`. `Rejected` means `Sending` was never entered (blank text, or a
/// request already in flight).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected,
    Succeeded,
    Failed,
}

/// Owns the conversation store and drives the exchange loop with the
/// completion service. `submit` is the single caller site of the network
/// operation; a request cannot be cancelled once sent.
pub struct ChatSession {
    chat_api: Arc<dyn ChatApi>,
    store: ConversationStore,
}

impl ChatSession {
    pub fn new(chat_api: Arc<dyn ChatApi>) -> Self {
        Self {
            chat_api,
            store: ConversationStore::new(),
        }
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ConversationStore {
        &mut self.store
    }

    /// Submits one user turn. Appends it, replays the whole conversation to
    /// the service, and folds the outcome back into the store. Failures are
    /// absorbed here: the error's description lands in the banner and the
    /// apology turn keeps the transcript consistent.
    pub async fn submit(&mut self, text: &str) -> SubmitOutcome {
        if !self.store.append_user_message(text) {
            return SubmitOutcome::Rejected;
        }
        match self.chat_api.request_completion(self.store.messages()).await {
            Ok(reply) => {
                info!(turns = self.store.messages().len(), "session: reply received");
                self.store.append_assistant_message(reply);
                SubmitOutcome::Succeeded
            }
            Err(e) => {
                let description = e.to_string();
                let description = if description.trim().is_empty() {
                    GENERIC_ERROR.to_string()
                } else {
                    description
                };
                error!(error = %description, "session: completion failed");
                self.store.record_failure(description);
                SubmitOutcome::Failed
            }
        }
    }
}
