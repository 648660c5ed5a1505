use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::error::{AppError, Result};
use crate::models::{GenericResponse, PlaybackSession, StartPlaybackRequest, StartPlaybackResponse};
use crate::replay::PlaybackOptions;

/// Start playing the current macro on the background worker
pub async fn start_playback(
    State(state): State<Arc<AppState>>,
    Json(request): Json<StartPlaybackRequest>,
) -> Result<Json<StartPlaybackResponse>> {
    let loops = request
        .loops
        .unwrap_or_else(|| i64::from(state.config.default_loops));
    let delay_ms = request
        .delay_ms
        .unwrap_or_else(|| i64::try_from(state.config.default_delay_ms).unwrap_or(i64::MAX));
    let options = PlaybackOptions::new(loops, delay_ms)?;

    // Playback reads a snapshot; edits made meanwhile apply to the next run
    let snapshot = state.editor.read().await.clone();
    let session = state.player.start(snapshot, options)?;

    Ok(Json(StartPlaybackResponse {
        session_id: session.id,
        status: session.status.as_str().to_string(),
    }))
}

pub async fn stop_playback(State(state): State<Arc<AppState>>) -> Json<GenericResponse> {
    let status = if state.player.stop() {
        "stopping"
    } else {
        "idle"
    };

    Json(GenericResponse {
        status: status.to_string(),
    })
}

pub async fn get_playback_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PlaybackSession>> {
    state
        .player
        .session()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No playback has been started".to_string()))
}
