//! Chat assistant conversation state.
//!
//! DESIGN
//! ======
//! Messages keep the interpreted reply (`ChatContent`) rather than raw text
//! so the view can match on it directly. Prior turns are converted back to
//! plain text when sent as request history.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::chat::{ChatContent, ChatReply, ChatTurn, SourceLink};

pub const GREETING: &str = "Hello! I'm a factual AI assistant. Ask me anything about this portfolio.";
pub const CONNECTION_FAILURE: &str = "Sorry, I'm having trouble connecting right now.";

const GREETING_ID: &str = "greeting";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single conversation entry.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: ChatContent,
    pub sources: Vec<SourceLink>,
}

impl ChatMessage {
    fn new(role: ChatRole, content: ChatContent, sources: Vec<SourceLink>) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), role, content, sources }
    }

    /// Plain-text form for request history. Errors and the greeting are
    /// not part of the conversation.
    fn as_turn(&self) -> Option<ChatTurn> {
        if self.id == GREETING_ID {
            return None;
        }
        let content = match &self.content {
            ChatContent::Text(text) => text.clone(),
            ChatContent::Cards(cards) => serde_json::to_string(cards).ok()?,
            ChatContent::Error(_) => return None,
        };
        Some(ChatTurn { role: self.role.as_str().to_owned(), content })
    }
}

/// State for the floating chat assistant.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
    pub open: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage {
                id: GREETING_ID.to_owned(),
                role: ChatRole::Assistant,
                content: ChatContent::Text(GREETING.to_owned()),
                sources: Vec::new(),
            }],
            loading: false,
            open: false,
        }
    }
}

impl ChatState {
    /// Record a question and mark the assistant busy.
    ///
    /// Returns the trimmed question and the history preceding it, or `None`
    /// when the input is blank or a reply is still pending.
    pub fn ask(&mut self, input: &str) -> Option<(String, Vec<ChatTurn>)> {
        let question = input.trim();
        if question.is_empty() || self.loading {
            return None;
        }
        let history = self.history();
        self.messages
            .push(ChatMessage::new(ChatRole::User, ChatContent::Text(question.to_owned()), Vec::new()));
        self.loading = true;
        Some((question.to_owned(), history))
    }

    pub fn receive(&mut self, reply: ChatReply) {
        self.messages
            .push(ChatMessage::new(ChatRole::Assistant, reply.content, reply.sources));
        self.loading = false;
    }

    /// Record a failed request. The apology is kept out of history.
    pub fn fail(&mut self) {
        self.messages.push(ChatMessage::new(
            ChatRole::Assistant,
            ChatContent::Error(CONNECTION_FAILURE.to_owned()),
            Vec::new(),
        ));
        self.loading = false;
    }

    #[must_use]
    pub fn history(&self) -> Vec<ChatTurn> {
        self.messages.iter().filter_map(ChatMessage::as_turn).collect()
    }
}
