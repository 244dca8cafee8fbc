use super::state::AppState;
use crate::error::SessionError;
use crate::session::{MinutesSession, Participant, DEFAULT_SYSTEM_PROMPT};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AddParticipantRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub role: String,

    #[serde(default)]
    pub remark: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateMinutesRequest {
    /// Pasted transcript text
    #[serde(default)]
    pub transcript: String,

    /// Edited system prompt; the session's current prompt when omitted
    pub system_prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DefaultsResponse {
    pub system_prompt: String,
    pub model: String,
    pub participants: Vec<Participant>,
    pub notices: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn session_not_found(session_id: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("Session {} not found", session_id),
        }),
    )
        .into_response()
}

fn session_error(err: SessionError) -> Response {
    let status = if err.is_warning() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::BAD_GATEWAY
    };

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /defaults
/// Values the form starts with
pub async fn get_defaults(State(state): State<AppState>) -> impl IntoResponse {
    Json(DefaultsResponse {
        system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        model: state.model.clone(),
        participants: state.initial_participants.as_ref().clone(),
        notices: state.notices.as_ref().clone(),
    })
}

/// POST /sessions
/// Start a new user session
pub async fn create_session(State(state): State<AppState>) -> impl IntoResponse {
    let session_id = format!("session-{}", uuid::Uuid::new_v4());
    let session = MinutesSession::new(
        session_id.clone(),
        state.initial_participants.as_ref().clone(),
    );
    let view = session.view(&state.notices);

    {
        let mut sessions = state.sessions.write().await;
        sessions.insert(session_id.clone(), Arc::new(Mutex::new(session)));
    }

    info!("Session created: {}", session_id);

    (StatusCode::CREATED, Json(view)).into_response()
}

/// GET /sessions/:session_id
/// Current state of a session
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    match state.session(&session_id).await {
        Some(session) => {
            let session = session.lock().await;
            (StatusCode::OK, Json(session.view(&state.notices))).into_response()
        }
        None => session_not_found(&session_id),
    }
}

/// DELETE /sessions/:session_id
/// Discard a session and everything it holds
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let removed = {
        let mut sessions = state.sessions.write().await;
        sessions.remove(&session_id)
    };

    match removed {
        Some(_) => {
            info!("Session discarded: {}", session_id);
            StatusCode::NO_CONTENT.into_response()
        }
        None => {
            warn!("Session {} not found", session_id);
            session_not_found(&session_id)
        }
    }
}

/// POST /sessions/:session_id/participants
/// Add a participant from the sidebar form
pub async fn add_participant(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<AddParticipantRequest>,
) -> impl IntoResponse {
    let Some(session) = state.session(&session_id).await else {
        return session_not_found(&session_id);
    };

    let mut session = session.lock().await;
    if let Err(e) = session.add_participant(&req.name, &req.role, &req.remark) {
        return session_error(e);
    }

    (StatusCode::OK, Json(session.view(&state.notices))).into_response()
}

/// POST /sessions/:session_id/minutes
/// Generate minutes for the pasted transcript
pub async fn generate_minutes(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<GenerateMinutesRequest>,
) -> impl IntoResponse {
    let Some(session) = state.session(&session_id).await else {
        return session_not_found(&session_id);
    };

    // Held across the service call: one action per session at a time
    let mut session = session.lock().await;

    let system_prompt = req
        .system_prompt
        .unwrap_or_else(|| session.system_prompt().to_string());

    let outcome = session
        .generate_minutes(
            state.generator.as_ref(),
            &state.model,
            &system_prompt,
            &req.transcript,
        )
        .await
        .map(|_| ());

    match outcome {
        Ok(()) => (StatusCode::OK, Json(session.view(&state.notices))).into_response(),
        Err(e) => {
            if !e.is_warning() {
                error!("Session {}: {}", session_id, e);
            }
            session_error(e)
        }
    }
}

/// GET /sessions/:session_id/minutes
/// Raw Markdown minutes for copy-out
pub async fn get_minutes_markdown(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let Some(session) = state.session(&session_id).await else {
        return session_not_found(&session_id);
    };

    let session = session.lock().await;
    match session.minutes() {
        Some(minutes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
            minutes.to_string(),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Session {} has no minutes", session_id),
            }),
        )
            .into_response(),
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
