use crate::models::types::Message;
use tracing::debug;

/// Assistant turn appended when a submission fails, so the transcript stays
/// consistent even though no real continuation arrived.
pub const APOLOGY_REPLY: &str =
    "Sorry, there was an error processing your request. Please try again.";

/// Shown in the error banner when a failure carries no description.
pub const GENERIC_ERROR: &str = "An unexpected error occurred";

/// Holds the ordered conversation plus the transient session flags: the
/// input draft, the loading flag gating submissions, and the last error.
///
/// Messages are append-only; everything else resets with the process.
#[derive(Debug, Clone, Default)]
pub struct ConversationStore {
    messages: Vec<Message>,
    draft: String,
    loading: bool,
    last_error: Option<String>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn set_draft(&mut self, text: &str) {
        self.draft = text.to_string();
    }

    /// Appends a user turn and enters the loading state: clears the draft
    /// and the last error. Returns `false` without touching any state when
    /// the trimmed text is empty or another request is already in flight.
    pub fn append_user_message(&mut self, text: &str) -> bool {
        if self.loading || text.trim().is_empty() {
            return false;
        }
        self.messages.push(Message::user(text));
        self.draft.clear();
        self.loading = true;
        self.last_error = None;
        debug!(turns = self.messages.len(), "conversation: user turn appended");
        true
    }

    /// Appends an assistant turn and leaves the loading state.
    pub fn append_assistant_message(&mut self, text: impl Into<String>) {
        self.messages.push(Message::assistant(text));
        self.loading = false;
    }

    /// Records a failed submission: sets the error banner text, appends the
    /// fixed apology turn, and leaves the loading state.
    pub fn record_failure(&mut self, error_text: impl Into<String>) {
        self.last_error = Some(error_text.into());
        self.messages.push(Message::assistant(APOLOGY_REPLY));
        self.loading = false;
    }
}
