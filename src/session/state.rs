//! Session state types

use crate::languages;
use serde::Serialize;
use std::fmt;

/// Minimum length (in UTF-16 code units) of English text offered for summarization
pub const SUMMARIZE_MIN_CHARS: usize = 150;

/// Unique, creation-ordered message identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    User,
    /// Reserved for system-authored messages; never created
    #[allow(dead_code)]
    System,
}

/// A submitted piece of text and its enrichments
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub kind: MessageKind,
    pub detected_language: String,
    pub created_at: String,
    pub translation: Option<String>,
    pub summary: Option<String>,
}

impl Message {
    /// Summaries are offered for English text longer than [`SUMMARIZE_MIN_CHARS`]
    pub fn can_summarize(&self) -> bool {
        self.detected_language == "English"
            && self.text.encode_utf16().count() > SUMMARIZE_MIN_CHARS
    }

    /// Language code to translate from
    pub fn source_language(&self) -> &'static str {
        languages::source_code_for(&self.detected_language)
    }
}

/// Conversation state for one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub messages: Vec<Message>,
    pub pending_request: bool,
    pub last_error: Option<String>,
    /// Index of the message whose translate menu is expanded
    pub open_action_menu: Option<usize>,
    /// Input buffer
    pub draft: String,
    next_id: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub(super) fn message_mut(&mut self, id: MessageId) -> Option<&mut Message> {
        self.messages.iter_mut().find(|m| m.id == id)
    }

    /// Allocate the next message id
    pub(super) fn allocate_id(&mut self) -> MessageId {
        self.next_id += 1;
        MessageId(self.next_id)
    }

    /// Begin a capability call
    pub(super) fn start_request(&mut self) {
        self.pending_request = true;
        self.last_error = None;
    }
}
