//! Conversation store: transcript, pending input, and loading indicator.

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// State for the chat panel.
///
/// `messages` is append-only. `pending` counts dispatches whose reply has not
/// been appended yet; the panel shows its typing indicator while it is non-zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pending: usize,
}

impl ChatState {
    /// Append a user message unless `text` is blank after trimming.
    ///
    /// The stored content is the text as typed. Clears the input buffer on
    /// success and returns whether anything was appended.
    pub fn append_user_message(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.messages.push(ChatMessage::user(text));
        self.input.clear();
        true
    }

    pub fn append_assistant_message(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(text));
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.pending > 0
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending
    }

    pub(crate) fn begin_request(&mut self) {
        self.pending = self.pending.saturating_add(1);
    }

    pub(crate) fn finish_request(&mut self) {
        self.pending = self.pending.saturating_sub(1);
    }

    #[must_use]
    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
