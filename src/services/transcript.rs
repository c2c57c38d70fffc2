use crate::models::types::Role;
use crate::services::conversation::ConversationStore;
use crate::services::settings::API_KEY_VAR;
use bon::Builder;

/// Renders the conversation as a fixed-width transcript: user turns
/// right-aligned, assistant turns left-aligned, a centered "Thinking..."
/// line while a request is in flight, and an error banner when the last
/// submission failed.
#[derive(Builder)]
pub struct TranscriptView {
    #[builder(default = 80)]
    width: usize,
}

impl TranscriptView {
    pub fn render(&self, store: &ConversationStore) -> String {
        let mut out = String::new();
        if let Some(err) = store.last_error() {
            out.push_str(&self.error_banner(err));
            out.push('\n');
        }
        for message in store.messages() {
            for line in wrap(&message.content, self.width) {
                match message.role {
                    Role::User => out.push_str(format!("{:>1$}", line, self.width).trim_end()),
                    Role::Assistant => out.push_str(&line),
                }
                out.push('\n');
            }
            out.push('\n');
        }
        if store.is_loading() {
            out.push_str(&self.thinking_line());
            out.push('\n');
        }
        out
    }

    pub fn thinking_line(&self) -> String {
        format!("{:^1$}", "Thinking...", self.width)
            .trim_end()
            .to_string()
    }

    pub fn error_banner(&self, description: &str) -> String {
        let rule = "-".repeat(self.width);
        let mut out = String::new();
        out.push_str(&rule);
        out.push_str("\nError\n");
        for line in wrap(description, self.width) {
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str(&rule);
        out
    }
}

/// Shown instead of the chat UI when the credential is absent at startup.
pub fn config_error_screen() -> String {
    format!(
        "Configuration Error\n\n\
         OpenAI API key is missing. Please add your API key to the .env file:\n\n\
         \x20   {}=your_api_key_here",
        API_KEY_VAR
    )
}

/// Char-safe wrapping so multi-byte text is never split inside a code point.
fn wrap(text: &str, max: usize) -> Vec<String> {
    let max = max.max(1);
    let mut lines = Vec::new();
    for raw in text.split('\n') {
        if raw.is_empty() {
            lines.push(String::new());
            continue;
        }
        let chars: Vec<char> = raw.chars().collect();
        for chunk in chars.chunks(max) {
            lines.push(chunk.iter().collect());
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wrap_is_char_safe() {
        assert_eq!(wrap("привет мир", 6), vec!["привет", " мир"]);
        assert_eq!(wrap("ab\ncd", 10), vec!["ab", "cd"]);
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn user_turns_are_right_aligned() {
        let mut store = ConversationStore::new();
        assert!(store.append_user_message("hi"));
        store.append_assistant_message("hello");
        let view = TranscriptView::builder().width(10).build();
        let rendered = view.render(&store);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "        hi");
        assert_eq!(lines[2], "hello");
    }

    #[test]
    fn thinking_indicator_appears_while_loading() {
        let mut store = ConversationStore::new();
        assert!(store.append_user_message("hi"));
        let view = TranscriptView::builder().width(20).build();
        let rendered = view.render(&store);
        assert!(rendered.contains("Thinking..."));
        store.append_assistant_message("hello");
        let rendered = view.render(&store);
        assert!(!rendered.contains("Thinking..."));
    }

    #[test]
    fn error_banner_carries_the_description() {
        let mut store = ConversationStore::new();
        assert!(store.append_user_message("hi"));
        store.record_failure("network down");
        let view = TranscriptView::builder().build();
        let rendered = view.render(&store);
        assert!(rendered.contains("Error"));
        assert!(rendered.contains("network down"));
    }

    #[test]
    fn config_error_screen_names_the_variable() {
        let screen = config_error_screen();
        assert!(screen.contains("Configuration Error"));
        assert!(screen.contains(API_KEY_VAR));
    }
}
