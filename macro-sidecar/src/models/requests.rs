use serde::Deserialize;

use super::action::Action;
use super::draft::MouseActionDraft;
use crate::desktop::KeyCode;

/// Reorder request, indices are 0-based
#[derive(Debug, Deserialize)]
pub struct MoveActionRequest {
    pub from: usize,
    pub to: usize,
}

/// Start playback; missing fields fall back to the configured defaults
#[derive(Debug, Deserialize, Default)]
pub struct StartPlaybackRequest {
    pub loops: Option<i64>,
    pub delay_ms: Option<i64>,
}

/// Replace the whole macro with imported actions
#[derive(Debug, Deserialize)]
pub struct ImportMacroRequest {
    pub actions: Vec<Action>,
}

/// Start a pointer capture, optionally seeded with an existing form
#[derive(Debug, Deserialize, Default)]
pub struct StartPointerCaptureRequest {
    #[serde(default)]
    pub draft: Option<MouseActionDraft>,
}

/// Start a key capture, optionally seeded with already captured keys
#[derive(Debug, Deserialize, Default)]
pub struct StartKeyCaptureRequest {
    #[serde(default)]
    pub keys: Vec<KeyCode>,
    pub duration_ms: Option<i64>,
}
