use axum::{
    http::{HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::{actions, capture, health, logs, playback};
use super::state::AppState;
use super::websocket::ws_handler;

pub fn create_router(state: Arc<AppState>) -> Router {
    // SECURITY: Restrict CORS to localhost only - sidecar should only be accessed locally
    let origins = [
        "http://localhost:1420",
        "http://localhost:5173",
        "http://127.0.0.1:1420",
        "http://127.0.0.1:5173",
    ]
    .into_iter()
    .map(HeaderValue::from_static)
    .collect::<Vec<_>>();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Action list editing
        .route(
            "/actions",
            get(actions::list_actions).delete(actions::clear_actions),
        )
        .route("/actions/mouse", post(actions::add_mouse_action))
        .route("/actions/key", post(actions::add_key_action))
        .route("/actions/move", post(actions::move_action))
        .route(
            "/actions/:index",
            get(actions::get_action).delete(actions::delete_action),
        )
        .route("/actions/:index/mouse", put(actions::update_mouse_action))
        .route("/actions/:index/key", put(actions::update_key_action))
        // Whole-macro import/export
        .route(
            "/macro",
            get(actions::export_macro).put(actions::import_macro),
        )
        // Playback endpoints
        .route("/playback/start", post(playback::start_playback))
        .route("/playback/stop", post(playback::stop_playback))
        .route("/playback/status", get(playback::get_playback_status))
        // Capture endpoints
        .route("/capture/pointer", post(capture::start_pointer_capture))
        .route("/capture/keys", post(capture::start_key_capture))
        .route("/capture/:session_id", get(capture::get_capture))
        .route("/capture/:session_id/clear", post(capture::clear_capture))
        .route("/capture/:session_id/stop", post(capture::stop_capture))
        // Activity log
        .route("/logs", get(logs::get_logs))
        // WebSocket
        .route("/ws/:client_id", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
