//! Conversation session state machine
//!
//! Implements the Elm Architecture pattern: user actions and capability
//! completions are events, a pure transition updates the state, and the
//! store executes the resulting effects.

mod effect;
mod event;
mod state;
mod store;
mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::Event;
pub use state::{Message, MessageId, SessionState};
pub use store::SessionStore;
