//! Events that can occur in a session

use super::state::MessageId;
use crate::capability::CapabilityError;

/// Events that trigger state transitions
#[derive(Debug, Clone)]
pub enum Event {
    // User events
    DraftChanged {
        text: String,
    },
    Submit {
        text: String,
    },
    TranslateRequested {
        message_id: MessageId,
        target_language: String,
    },
    SummaryRequested {
        message_id: MessageId,
    },
    ActionMenuToggled {
        index: usize,
    },

    // Capability completions
    LanguageDetected {
        text: String,
        result: Result<String, CapabilityError>,
        /// Display-formatted creation time
        created_at: String,
    },
    TranslationFinished {
        message_id: MessageId,
        result: Result<String, CapabilityError>,
    },
    SummaryFinished {
        message_id: MessageId,
        result: Result<String, CapabilityError>,
    },
}

impl Event {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Event::DraftChanged { .. } => "draft_changed",
            Event::Submit { .. } => "submit",
            Event::TranslateRequested { .. } => "translate_requested",
            Event::SummaryRequested { .. } => "summary_requested",
            Event::ActionMenuToggled { .. } => "action_menu_toggled",
            Event::LanguageDetected { .. } => "language_detected",
            Event::TranslationFinished { .. } => "translation_finished",
            Event::SummaryFinished { .. } => "summary_finished",
        }
    }
}
