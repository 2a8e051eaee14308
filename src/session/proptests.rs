//! Property-based tests for the session state machine
//!
//! These tests drive random event sequences through `transition` and check
//! the invariants that must hold after every step.

use super::state::SessionState;
use super::transition::transition;
use super::*;
use crate::capability::CapabilityError;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[ \t\n]{1,4}",
        "[a-zA-Z ]{1,40}",
    ]
}

fn arb_result() -> impl Strategy<Value = Result<String, CapabilityError>> {
    prop_oneof![
        "[a-zA-Z]{1,12}".prop_map(Ok::<String, CapabilityError>),
        "[a-z ]{1,20}".prop_map(|m| Err(CapabilityError::host(m))),
    ]
}

fn arb_language() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("English".to_string()),
        Just("French".to_string()),
        Just("de".to_string()),
    ]
}

fn arb_message_id() -> impl Strategy<Value = MessageId> {
    (0u64..6).prop_map(MessageId)
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        arb_text().prop_map(|text| Event::DraftChanged { text }),
        arb_text().prop_map(|text| Event::Submit { text }),
        (arb_message_id(), "(en|es|fr|ru)").prop_map(|(message_id, target_language)| {
            Event::TranslateRequested {
                message_id,
                target_language,
            }
        }),
        arb_message_id().prop_map(|message_id| Event::SummaryRequested { message_id }),
        (0usize..5).prop_map(|index| Event::ActionMenuToggled { index }),
        (arb_text(), arb_language(), any::<bool>()).prop_map(|(text, language, ok)| {
            Event::LanguageDetected {
                text,
                result: if ok {
                    Ok(language)
                } else {
                    Err(CapabilityError::missing("model missing"))
                },
                created_at: "12:00:00 PM".to_string(),
            }
        }),
        (arb_message_id(), arb_result())
            .prop_map(|(message_id, result)| Event::TranslationFinished { message_id, result }),
        (arb_message_id(), arb_result())
            .prop_map(|(message_id, result)| Event::SummaryFinished { message_id, result }),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_messages_are_append_only_and_enrichments_never_cleared(
        events in prop::collection::vec(arb_event(), 1..60)
    ) {
        let mut state = SessionState::new();
        for event in events {
            let before = state.clone();
            transition(&mut state, event);

            prop_assert!(state.messages.len() >= before.messages.len());
            for (old, new) in before.messages.iter().zip(&state.messages) {
                prop_assert_eq!(old.id, new.id);
                prop_assert_eq!(&old.text, &new.text);
                prop_assert_eq!(&old.detected_language, &new.detected_language);
                if old.translation.is_some() {
                    prop_assert!(new.translation.is_some());
                }
                if old.summary.is_some() {
                    prop_assert!(new.summary.is_some());
                }
            }
        }
    }

    #[test]
    fn prop_ids_strictly_increase(events in prop::collection::vec(arb_event(), 1..60)) {
        let mut state = SessionState::new();
        for event in events {
            transition(&mut state, event);
        }
        for pair in state.messages.windows(2) {
            prop_assert!(pair[0].id < pair[1].id);
        }
    }

    #[test]
    fn prop_blank_submit_never_appends(
        events in prop::collection::vec(arb_event(), 0..30),
        blank in "[ \t\n]{0,4}"
    ) {
        let mut state = SessionState::new();
        for event in events {
            transition(&mut state, event);
        }
        let count = state.messages.len();
        let result = transition(&mut state, Event::Submit { text: blank });

        prop_assert!(result.effects.is_empty());
        prop_assert_eq!(state.messages.len(), count);
        prop_assert!(state.last_error.is_some());
    }

    #[test]
    fn prop_every_completion_settles_pending(
        events in prop::collection::vec(arb_event(), 0..30),
        completion in arb_event().prop_filter("completion events only", |e| matches!(
            e,
            Event::LanguageDetected { .. }
                | Event::TranslationFinished { .. }
                | Event::SummaryFinished { .. }
        ))
    ) {
        let mut state = SessionState::new();
        for event in events {
            transition(&mut state, event);
        }
        transition(&mut state, completion);
        prop_assert!(!state.pending_request);
    }

    #[test]
    fn prop_requests_start_work_only_for_known_messages(
        events in prop::collection::vec(arb_event(), 0..30),
        message_id in arb_message_id()
    ) {
        let mut state = SessionState::new();
        for event in events {
            transition(&mut state, event);
        }
        let known = state.message(message_id).is_some();
        let before = state.clone();
        let result = transition(&mut state, Event::SummaryRequested { message_id });

        if known {
            prop_assert_eq!(result.effects.len(), 1);
            prop_assert!(state.pending_request);
            prop_assert!(state.last_error.is_none());
        } else {
            prop_assert!(result.effects.is_empty());
            prop_assert_eq!(state, before);
        }
    }

    #[test]
    fn prop_last_completion_wins(
        outputs in prop::collection::vec("[a-z]{1,8}", 1..6)
    ) {
        let mut state = SessionState::new();
        transition(&mut state, Event::LanguageDetected {
            text: "Hello".to_string(),
            result: Ok("English".to_string()),
            created_at: "8:00:00 AM".to_string(),
        });
        let id = state.messages[0].id;

        // Issue every request before any completes
        for _ in &outputs {
            transition(&mut state, Event::TranslateRequested {
                message_id: id,
                target_language: "es".to_string(),
            });
        }
        for output in &outputs {
            transition(&mut state, Event::TranslationFinished {
                message_id: id,
                result: Ok(output.clone()),
            });
        }
        prop_assert_eq!(state.messages[0].translation.as_ref(), outputs.last());
    }
}
