use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::models::LogsResponse;

/// Activity log, oldest line first
pub async fn get_logs(State(state): State<Arc<AppState>>) -> Json<LogsResponse> {
    Json(LogsResponse {
        lines: state.logs(),
    })
}
