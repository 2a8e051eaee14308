//! Effects produced by state transitions

use super::state::MessageId;

/// Capability calls to run after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    DetectLanguage {
        text: String,
    },
    Translate {
        message_id: MessageId,
        text: String,
        source_language: String,
        target_language: String,
    },
    Summarize {
        message_id: MessageId,
        text: String,
    },
}
