use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use std::time::Duration;

use crate::api::state::AppState;
use crate::error::{AppError, Result};
use crate::models::{
    CaptureResponse, GenericResponse, KeyActionDraft, StartKeyCaptureRequest,
    StartPointerCaptureRequest,
};
use crate::recording::{Capture, CaptureSession, KeyCapture, PointerCapture};

/// Start a capture, ending any capture still running
fn spawn_capture(state: &AppState, capture: Capture) -> CaptureResponse {
    let replaced = state.captures.len();
    // Dropping a session aborts its polling task
    state.captures.clear();
    if replaced > 0 {
        tracing::info!("Replaced {} unfinished capture session(s)", replaced);
    }

    let session = CaptureSession::spawn(
        capture,
        Arc::clone(&state.probe),
        Duration::from_millis(state.config.capture_poll_ms.max(1)),
    );

    let response = CaptureResponse {
        session_id: session.id.clone(),
        capture: session.snapshot(),
    };
    state.captures.insert(session.id.clone(), session);
    response
}

/// Follow the pointer: CTRL sets the start point, SHIFT the end point
pub async fn start_pointer_capture(
    State(state): State<Arc<AppState>>,
    Json(request): Json<StartPointerCaptureRequest>,
) -> Json<CaptureResponse> {
    let draft = request.draft.unwrap_or_default();
    Json(spawn_capture(&state, Capture::Pointer(PointerCapture::new(draft))))
}

/// Collect pressed keys into a key / shortcut form
pub async fn start_key_capture(
    State(state): State<Arc<AppState>>,
    Json(request): Json<StartKeyCaptureRequest>,
) -> Result<Json<CaptureResponse>> {
    let mut draft = KeyActionDraft {
        keys: request.keys,
        ..KeyActionDraft::default()
    };
    if let Some(duration_ms) = request.duration_ms {
        if duration_ms < 0 {
            return Err(AppError::ValidationError(format!(
                "Hold duration must not be negative (got {} ms)",
                duration_ms
            )));
        }
        draft.duration_ms = duration_ms;
    }

    Ok(Json(spawn_capture(
        &state,
        Capture::Keys(KeyCapture::new(draft)),
    )))
}

pub async fn get_capture(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<Json<CaptureResponse>> {
    let session = state
        .captures
        .get(&session_id)
        .ok_or_else(|| AppError::NotFound(format!("Capture session {}", session_id)))?;

    Ok(Json(CaptureResponse {
        session_id: session_id.clone(),
        capture: session.snapshot(),
    }))
}

/// Forget keys captured so far and keep capturing
pub async fn clear_capture(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<Json<GenericResponse>> {
    let session = state
        .captures
        .get(&session_id)
        .ok_or_else(|| AppError::NotFound(format!("Capture session {}", session_id)))?;
    session.clear();

    Ok(Json(GenericResponse {
        status: "cleared".to_string(),
    }))
}

pub async fn stop_capture(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<Json<CaptureResponse>> {
    let (_, session) = state
        .captures
        .remove(&session_id)
        .ok_or_else(|| AppError::NotFound(format!("Capture session {}", session_id)))?;

    Ok(Json(CaptureResponse {
        session_id,
        capture: session.stop(),
    }))
}
