//! HTTP request handlers

use super::sse::sse_stream;
use super::types::{
    DraftRequest, ErrorResponse, LanguagesResponse, SessionResponse, SubmitRequest,
    TranslateRequest,
};
use super::AppState;
use crate::languages;
use crate::session::MessageId;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Session snapshot and live updates
        .route("/api/session", get(get_session))
        .route("/api/session/stream", get(stream_session))
        // Input
        .route("/api/session/draft", put(set_draft))
        .route("/api/session/submit", post(submit))
        // Per-message actions
        .route("/api/messages/:id/translate", post(translate_message))
        .route("/api/messages/:id/summarize", post(summarize_message))
        .route("/api/menu/:index/toggle", post(toggle_menu))
        // Static data
        .route("/api/languages", get(list_languages))
        // Version
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Session
// ============================================================

fn snapshot(state: &AppState) -> Json<SessionResponse> {
    Json(state.store.snapshot().into())
}

async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    snapshot(&state)
}

async fn stream_session(State(state): State<AppState>) -> impl IntoResponse {
    // Subscribe before taking the snapshot so no change falls in between
    let updates = state.store.subscribe();
    sse_stream(state.store.snapshot(), updates)
}

// ============================================================
// Input
// ============================================================

async fn set_draft(
    State(state): State<AppState>,
    Json(req): Json<DraftRequest>,
) -> Json<SessionResponse> {
    state.store.set_draft(req.text);
    snapshot(&state)
}

async fn submit(
    State(state): State<AppState>,
    Json(req): Json<SubmitRequest>,
) -> Json<SessionResponse> {
    match req.text {
        Some(text) => state.store.submit(&text).await,
        None => state.store.submit_draft().await,
    }
    snapshot(&state)
}

// ============================================================
// Per-message actions
// ============================================================

async fn translate_message(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<TranslateRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    if !languages::is_translation_target(&req.target_language) {
        return Err(AppError::BadRequest(format!(
            "Unsupported translation target: {}",
            req.target_language
        )));
    }

    state
        .store
        .request_translation(MessageId(id), &req.target_language)
        .await;
    Ok(snapshot(&state))
}

async fn summarize_message(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Json<SessionResponse> {
    state.store.request_summary(MessageId(id)).await;
    snapshot(&state)
}

async fn toggle_menu(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Json<SessionResponse> {
    state.store.toggle_action_menu(index);
    snapshot(&state)
}

// ============================================================
// Static data
// ============================================================

async fn list_languages() -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        languages: languages::translation_targets().to_vec(),
    })
}

async fn get_version() -> &'static str {
    concat!("text-processor ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
