use serde::{Deserialize, Serialize};

use crate::desktop::{KeyCode, MouseButton};

/// What an action does when it is replayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionKind {
    MouseClick {
        x: i32,
        y: i32,
        button: MouseButton,
    },
    MouseDrag {
        start_x: i32,
        start_y: i32,
        end_x: i32,
        end_y: i32,
        button: MouseButton,
    },
    /// Wheel delta, ±120 per notch, positive scrolls up
    MouseScroll { delta: i32 },
    KeyPress { key: KeyCode },
    /// Keys are pressed in order and released in reverse
    KeyShortcut { keys: Vec<KeyCode> },
}

impl ActionKind {
    /// Column label for the action list
    pub fn type_label(&self) -> &'static str {
        match self {
            ActionKind::MouseClick { .. }
            | ActionKind::MouseDrag { .. }
            | ActionKind::MouseScroll { .. } => "MOUSE",
            ActionKind::KeyPress { .. } => "KEY",
            ActionKind::KeyShortcut { .. } => "SHORTCUT",
        }
    }

    /// Whether playback waits the inter-action delay after this action.
    /// Drags and scrolls run straight into the next action.
    pub fn waits_after(&self) -> bool {
        !matches!(
            self,
            ActionKind::MouseDrag { .. } | ActionKind::MouseScroll { .. }
        )
    }

    /// One-line description, e.g. `Click Left at (10, 20)`
    pub fn describe(&self) -> String {
        match self {
            ActionKind::MouseClick { x, y, button } => {
                format!("Click {} at ({}, {})", button, x, y)
            }
            ActionKind::MouseDrag {
                start_x,
                start_y,
                end_x,
                end_y,
                button,
            } => format!(
                "Drag {} ({},{}) -> ({},{})",
                button, start_x, start_y, end_x, end_y
            ),
            ActionKind::MouseScroll { delta } => format!("Scroll {}", delta),
            ActionKind::KeyPress { key } => format!("Press {}", key),
            ActionKind::KeyShortcut { keys } => format!("Shortcut {}", join_keys(keys)),
        }
    }
}

/// Join key names with ` + `
pub fn join_keys(keys: &[KeyCode]) -> String {
    keys.iter()
        .map(|k| k.name())
        .collect::<Vec<_>>()
        .join(" + ")
}

/// One recorded input-simulation step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub id: String,
    #[serde(flatten)]
    pub kind: ActionKind,
    /// How long buttons or keys stay down
    #[serde(default)]
    pub hold_ms: u64,
}

impl Action {
    pub fn new(kind: ActionKind, hold_ms: u64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            hold_ms,
        }
    }

    pub fn describe(&self) -> String {
        self.kind.describe()
    }

    pub fn type_label(&self) -> &'static str {
        self.kind.type_label()
    }
}
