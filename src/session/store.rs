//! Session store
//!
//! Owns the session state, runs the effects a transition asks for against
//! the gateway, and feeds each completion back in as an event.

use super::transition::transition;
use super::{Effect, Event, MessageId, SessionState};
use crate::capability::Gateway;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::broadcast;

/// Display format for message creation times
const CREATED_AT_FORMAT: &str = "%-I:%M:%S %p";

/// Single-session conversation store.
///
/// The state lock is only held while a transition runs, never across a
/// gateway call, so several requests may be in flight at once. The store
/// does not refuse work while `pending_request` is set; completions are
/// applied in the order they arrive.
///
/// Effects run on a spawned task, so a caller that stops waiting (an HTTP
/// client disconnecting) does not abandon the request halfway.
pub struct SessionStore<G: Gateway> {
    state: Mutex<SessionState>,
    gateway: G,
    updates: broadcast::Sender<SessionState>,
}

impl<G: Gateway + 'static> SessionStore<G> {
    pub fn new(gateway: G) -> Self {
        let (updates, _) = broadcast::channel(64);
        Self {
            state: Mutex::new(SessionState::new()),
            gateway,
            updates,
        }
    }

    /// Current state
    pub fn snapshot(&self) -> SessionState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Receive a snapshot after every state change
    pub fn subscribe(&self) -> broadcast::Receiver<SessionState> {
        self.updates.subscribe()
    }

    pub fn set_draft(&self, text: impl Into<String>) {
        self.apply(Event::DraftChanged { text: text.into() });
    }

    pub async fn submit(self: &Arc<Self>, raw_text: &str) {
        self.dispatch(Event::Submit {
            text: raw_text.to_string(),
        })
        .await;
    }

    /// Submit whatever is in the input buffer
    pub async fn submit_draft(self: &Arc<Self>) {
        let draft = self.snapshot().draft;
        self.submit(&draft).await;
    }

    pub async fn request_translation(
        self: &Arc<Self>,
        message_id: MessageId,
        target_language: &str,
    ) {
        self.dispatch(Event::TranslateRequested {
            message_id,
            target_language: target_language.to_string(),
        })
        .await;
    }

    pub async fn request_summary(self: &Arc<Self>, message_id: MessageId) {
        self.dispatch(Event::SummaryRequested { message_id }).await;
    }

    pub fn toggle_action_menu(&self, message_index: usize) {
        self.apply(Event::ActionMenuToggled {
            index: message_index,
        });
    }

    /// Apply an event and wait until the session settles
    async fn dispatch(self: &Arc<Self>, event: Event) {
        let store = Arc::clone(self);
        let handle = tokio::spawn(async move { store.run(event).await });
        if let Err(e) = handle.await {
            tracing::error!(error = %e, "Session effect task failed");
        }
    }

    /// Apply an event and run effects until the session settles
    async fn run(&self, event: Event) {
        let mut effects: VecDeque<Effect> = self.apply(event).into();
        while let Some(effect) = effects.pop_front() {
            let completion = self.execute_effect(effect).await;
            effects.extend(self.apply(completion));
        }
    }

    fn apply(&self, event: Event) -> Vec<Effect> {
        let name = event.name();
        let (result, snapshot) = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            let result = transition(&mut state, event);
            (result, state.clone())
        };

        tracing::debug!(
            event = name,
            messages = snapshot.messages.len(),
            pending = snapshot.pending_request,
            effects = result.effects.len(),
            "Applied session event"
        );
        if let Some(error) = &snapshot.last_error {
            tracing::debug!(event = name, error = %error, "Session error set");
        }

        // No subscribers is fine
        let _ = self.updates.send(snapshot);
        result.effects
    }

    async fn execute_effect(&self, effect: Effect) -> Event {
        match effect {
            Effect::DetectLanguage { text } => {
                let result = self.gateway.detect(&text).await;
                Event::LanguageDetected {
                    text,
                    result,
                    created_at: chrono::Local::now().format(CREATED_AT_FORMAT).to_string(),
                }
            }
            Effect::Translate {
                message_id,
                text,
                source_language,
                target_language,
            } => {
                let result = self
                    .gateway
                    .translate(&text, &source_language, &target_language)
                    .await;
                Event::TranslationFinished { message_id, result }
            }
            Effect::Summarize { message_id, text } => {
                let result = self.gateway.summarize(&text).await;
                Event::SummaryFinished { message_id, result }
            }
        }
    }
}
