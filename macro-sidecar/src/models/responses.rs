use serde::Serialize;

use super::action::Action;
use super::draft::{KeyActionDraft, MouseActionDraft};
use crate::recording::CaptureSnapshot;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub input_listener: bool,
    pub websocket_clients: usize,
}

/// One row of the action list
#[derive(Debug, Serialize)]
pub struct ActionRow {
    pub index: usize,
    pub id: String,
    #[serde(rename = "type")]
    pub type_label: String,
    pub details: String,
    pub duration: String,
}

impl ActionRow {
    pub fn new(index: usize, action: &Action) -> Self {
        Self {
            index,
            id: action.id.clone(),
            type_label: action.type_label().to_string(),
            details: action.describe(),
            duration: format!("{}ms", action.hold_ms),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ActionListResponse {
    pub actions: Vec<ActionRow>,
}

/// Result of an add or edit
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub index: usize,
    pub action: Action,
}

/// An action with the edit form matching its kind
#[derive(Debug, Serialize)]
pub struct ActionDetailResponse {
    pub index: usize,
    pub action: Action,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mouse_draft: Option<MouseActionDraft>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_draft: Option<KeyActionDraft>,
}

#[derive(Debug, Serialize)]
pub struct MacroResponse {
    pub actions: Vec<Action>,
}

#[derive(Debug, Serialize)]
pub struct StartPlaybackResponse {
    pub session_id: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct CaptureResponse {
    pub session_id: String,
    pub capture: CaptureSnapshot,
}

#[derive(Debug, Serialize)]
pub struct LogsResponse {
    pub lines: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct GenericResponse {
    pub status: String,
}
