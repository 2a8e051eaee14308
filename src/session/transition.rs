//! Pure state transition function
//!
//! Given the same state and event, a transition always makes the same
//! changes and requests the same effects. Capability calls happen outside,
//! in the store, and come back as completion events.

use super::state::{Message, MessageKind, SessionState};
use super::{Effect, Event};

pub const EMPTY_INPUT_ERROR: &str = "Please enter some text.";
pub const DEVICE_HINT: &str =
    "The built-in AI is not available on your browser or your device does not support it!";
pub const TRANSLATE_FAILED_PREFIX: &str = "Failed to translate.";

/// Effects requested by a transition
#[derive(Debug, Default)]
pub struct TransitionResult {
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Apply `event` to `state`
pub fn transition(state: &mut SessionState, event: Event) -> TransitionResult {
    match event {
        // ============================================================
        // User actions
        // ============================================================
        Event::DraftChanged { text } => {
            state.draft = text;
            TransitionResult::new()
        }

        Event::Submit { text } => {
            if text.trim().is_empty() {
                state.last_error = Some(EMPTY_INPUT_ERROR.to_string());
                return TransitionResult::new();
            }
            state.start_request();
            TransitionResult::new().with_effect(Effect::DetectLanguage { text })
        }

        Event::TranslateRequested {
            message_id,
            target_language,
        } => {
            let Some(message) = state.message(message_id) else {
                return TransitionResult::new();
            };
            let effect = Effect::Translate {
                message_id,
                text: message.text.clone(),
                source_language: message.source_language().to_string(),
                target_language,
            };
            state.start_request();
            TransitionResult::new().with_effect(effect)
        }

        Event::SummaryRequested { message_id } => {
            let Some(message) = state.message(message_id) else {
                return TransitionResult::new();
            };
            let effect = Effect::Summarize {
                message_id,
                text: message.text.clone(),
            };
            state.start_request();
            TransitionResult::new().with_effect(effect)
        }

        Event::ActionMenuToggled { index } => {
            state.open_action_menu = if state.open_action_menu == Some(index) {
                None
            } else {
                Some(index)
            };
            TransitionResult::new()
        }

        // ============================================================
        // Capability completions
        // ============================================================
        Event::LanguageDetected {
            text,
            result,
            created_at,
        } => {
            match result {
                Ok(detected_language) => {
                    let id = state.allocate_id();
                    state.messages.push(Message {
                        id,
                        text,
                        kind: MessageKind::User,
                        detected_language,
                        created_at,
                        translation: None,
                        summary: None,
                    });
                    state.draft.clear();
                }
                Err(e) => {
                    // Draft is kept so the user can retry
                    let reason = e.message.trim_end_matches('.');
                    state.last_error = Some(format!("{reason}. {DEVICE_HINT}"));
                }
            }
            state.pending_request = false;
            TransitionResult::new()
        }

        Event::TranslationFinished { message_id, result } => {
            match result {
                Ok(translation) => {
                    if let Some(message) = state.message_mut(message_id) {
                        message.translation = Some(translation);
                    }
                }
                Err(e) => {
                    state.last_error = Some(format!("{TRANSLATE_FAILED_PREFIX} {e}"));
                }
            }
            state.open_action_menu = None;
            state.pending_request = false;
            TransitionResult::new()
        }

        Event::SummaryFinished { message_id, result } => {
            match result {
                Ok(summary) => {
                    if let Some(message) = state.message_mut(message_id) {
                        message.summary = Some(summary);
                    }
                }
                Err(e) => {
                    state.last_error = Some(e.message);
                }
            }
            state.pending_request = false;
            TransitionResult::new()
        }
    }
}
