//! Action list editing: add, edit, delete, reorder, clear, import/export.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::error::Result;
use crate::models::{
    Action, ActionDetailResponse, ActionListResponse, ActionResponse, ActionRow, GenericResponse,
    ImportMacroRequest, KeyActionDraft, Macro, MacroResponse, MouseActionDraft, MoveActionRequest,
};

/// List every action as a display row
pub async fn list_actions(State(state): State<Arc<AppState>>) -> Json<ActionListResponse> {
    let editor = state.editor.read().await;
    let actions = editor
        .iter()
        .enumerate()
        .map(|(index, action)| ActionRow::new(index, action))
        .collect();

    Json(ActionListResponse { actions })
}

/// One action plus the form prefilled for editing it
pub async fn get_action(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
) -> Result<Json<ActionDetailResponse>> {
    let editor = state.editor.read().await;
    let action = editor.get(index)?.clone();

    Ok(Json(ActionDetailResponse {
        index,
        mouse_draft: MouseActionDraft::from_action(&action),
        key_draft: KeyActionDraft::from_action(&action),
        action,
    }))
}

pub async fn add_mouse_action(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<MouseActionDraft>,
) -> Result<Json<ActionResponse>> {
    let (kind, hold_ms) = draft.into_kind()?;
    let action = Action::new(kind, hold_ms);

    let index = state.editor.write().await.push(action.clone());
    state.log(format!("Added: Mouse {}", action.describe()));

    Ok(Json(ActionResponse { index, action }))
}

pub async fn add_key_action(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<KeyActionDraft>,
) -> Result<Json<ActionResponse>> {
    let (kind, hold_ms) = draft.into_kind()?;
    let action = Action::new(kind, hold_ms);

    let index = state.editor.write().await.push(action.clone());
    state.log(format!("Added: {} for {}ms", action.describe(), hold_ms));

    Ok(Json(ActionResponse { index, action }))
}

pub async fn update_mouse_action(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
    Json(draft): Json<MouseActionDraft>,
) -> Result<Json<ActionResponse>> {
    let (kind, hold_ms) = draft.into_kind()?;

    let action = state
        .editor
        .write()
        .await
        .replace(index, kind, hold_ms)?
        .clone();
    state.log(format!("Edited: Mouse {}", action.describe()));

    Ok(Json(ActionResponse { index, action }))
}

pub async fn update_key_action(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
    Json(draft): Json<KeyActionDraft>,
) -> Result<Json<ActionResponse>> {
    let (kind, hold_ms) = draft.into_kind()?;

    let action = state
        .editor
        .write()
        .await
        .replace(index, kind, hold_ms)?
        .clone();
    state.log(format!("Edited: {} for {}ms", action.describe(), hold_ms));

    Ok(Json(ActionResponse { index, action }))
}

pub async fn delete_action(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
) -> Result<Json<Action>> {
    let removed = state.editor.write().await.remove(index)?;
    state.log(format!("Deleted action {}", index + 1));

    Ok(Json(removed))
}

/// Drag-and-drop reorder
pub async fn move_action(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MoveActionRequest>,
) -> Result<Json<ActionListResponse>> {
    let mut editor = state.editor.write().await;
    editor.move_action(request.from, request.to)?;

    if request.from != request.to {
        state.log(format!(
            "Moved action from {} to {}",
            request.from + 1,
            request.to + 1
        ));
    }

    let actions = editor
        .iter()
        .enumerate()
        .map(|(index, action)| ActionRow::new(index, action))
        .collect();
    Ok(Json(ActionListResponse { actions }))
}

/// Remove every action and reset the activity log
pub async fn clear_actions(State(state): State<Arc<AppState>>) -> Json<GenericResponse> {
    state.editor.write().await.clear();
    state.clear_logs();
    state.log("Actions cleared.");

    Json(GenericResponse {
        status: "cleared".to_string(),
    })
}

pub async fn export_macro(State(state): State<Arc<AppState>>) -> Json<MacroResponse> {
    let editor = state.editor.read().await;
    Json(MacroResponse {
        actions: editor.actions().to_vec(),
    })
}

/// Replace the whole macro with a previously exported one
pub async fn import_macro(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ImportMacroRequest>,
) -> Result<Json<MacroResponse>> {
    let imported = Macro::from_actions(request.actions)?;
    let actions = imported.actions().to_vec();

    *state.editor.write().await = imported;
    state.log(format!("Imported {} actions", actions.len()));

    Ok(Json(MacroResponse { actions }))
}
