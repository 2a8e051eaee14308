//! HTTP API for the text processor
//!
//! The view drives the session through these endpoints and follows its
//! changes over SSE.

mod handlers;
mod sse;
mod types;

pub use handlers::create_router;

use crate::capability::Gateway;
use crate::session::SessionStore;
use std::sync::Arc;

/// Store type shared with the handlers
pub type SharedStore = SessionStore<Arc<dyn Gateway>>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SharedStore>,
}

impl AppState {
    pub fn new(store: Arc<SharedStore>) -> Self {
        Self { store }
    }
}
