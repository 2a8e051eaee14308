//! Server-Sent Events support

use super::types::SessionResponse;
use crate::session::SessionState;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::Stream;
use std::convert::Infallible;
use std::time::Duration;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

/// Convert the session broadcast into an SSE stream
pub fn sse_stream(
    init: SessionState,
    updates: tokio::sync::broadcast::Receiver<SessionState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    // Start with the current snapshot, then every change
    let init = futures::stream::once(async move { Ok(snapshot_event("init", init)) });

    let changes = BroadcastStream::new(updates).filter_map(|result| match result {
        Ok(state) => Some(Ok(snapshot_event("session", state))),
        Err(_) => None, // Skip lagged snapshots; the next one is complete anyway
    });

    Sse::new(init.chain(changes)).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("ping"),
    )
}

fn snapshot_event(event_type: &str, state: SessionState) -> Event {
    let data = serde_json::to_string(&SessionResponse::from(state))
        .unwrap_or_else(|_| "{}".to_string());
    Event::default().event(event_type).data(data)
}
