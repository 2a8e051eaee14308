//! API request and response types

use crate::languages::Language;
use crate::session::{Message, SessionState};
use serde::{Deserialize, Serialize};

/// Request to replace the input buffer
#[derive(Debug, Deserialize)]
pub struct DraftRequest {
    pub text: String,
}

/// Request to submit text; the current draft is used when `text` is absent
#[derive(Debug, Default, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Request to translate a message
#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub target_language: String,
}

/// A message as the view renders it
#[derive(Debug, Clone, Serialize)]
pub struct MessageView {
    #[serde(flatten)]
    pub message: Message,
    /// Whether the Summarize control should be shown
    pub can_summarize: bool,
}

/// Full session snapshot
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub messages: Vec<MessageView>,
    pub pending_request: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
    pub open_action_menu: Option<usize>,
    pub draft: String,
}

impl From<SessionState> for SessionResponse {
    fn from(state: SessionState) -> Self {
        Self {
            messages: state
                .messages
                .into_iter()
                .map(|message| MessageView {
                    can_summarize: message.can_summarize(),
                    message,
                })
                .collect(),
            pending_request: state.pending_request,
            last_error: state.last_error,
            open_action_menu: state.open_action_menu,
            draft: state.draft,
        }
    }
}

/// Translation targets offered to the user
#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub languages: Vec<Language>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
