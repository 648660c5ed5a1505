//! Editor forms that become actions once validated.

use serde::{Deserialize, Serialize};

use super::action::{join_keys, Action, ActionKind};
use super::macro_list::MacroError;
use crate::desktop::{KeyCode, MouseButton};

/// Button selector of the mouse form; `scroll` turns the form into a wheel action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseChoice {
    Left,
    Right,
    Middle,
    Scroll,
}

impl MouseChoice {
    fn button(self) -> Option<MouseButton> {
        match self {
            MouseChoice::Left => Some(MouseButton::Left),
            MouseChoice::Right => Some(MouseButton::Right),
            MouseChoice::Middle => Some(MouseButton::Middle),
            MouseChoice::Scroll => None,
        }
    }
}

fn default_scroll_amount() -> i32 {
    120
}

fn default_duration_ms() -> i64 {
    100
}

fn default_choice() -> MouseChoice {
    MouseChoice::Left
}

/// Fields of the mouse action form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MouseActionDraft {
    #[serde(default = "default_choice")]
    pub button: MouseChoice,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    #[serde(default)]
    pub end_x: i32,
    #[serde(default)]
    pub end_y: i32,
    #[serde(default)]
    pub drag: bool,
    #[serde(default = "default_scroll_amount")]
    pub scroll_amount: i32,
    #[serde(default = "default_duration_ms")]
    pub duration_ms: i64,
}

impl Default for MouseActionDraft {
    fn default() -> Self {
        Self {
            button: default_choice(),
            x: 0,
            y: 0,
            end_x: 0,
            end_y: 0,
            drag: false,
            scroll_amount: default_scroll_amount(),
            duration_ms: default_duration_ms(),
        }
    }
}

impl MouseActionDraft {
    /// Validate the form and build the action kind and hold duration
    pub fn into_kind(&self) -> Result<(ActionKind, u64), MacroError> {
        let hold_ms = checked_duration(self.duration_ms)?;

        let kind = match self.button.button() {
            None => ActionKind::MouseScroll {
                delta: self.scroll_amount,
            },
            Some(button) if self.drag => ActionKind::MouseDrag {
                start_x: self.x,
                start_y: self.y,
                end_x: self.end_x,
                end_y: self.end_y,
                button,
            },
            Some(button) => ActionKind::MouseClick {
                x: self.x,
                y: self.y,
                button,
            },
        };

        Ok((kind, hold_ms))
    }

    /// Prefill the form from an existing action, as the edit dialog does
    pub fn from_action(action: &Action) -> Option<Self> {
        let base = Self {
            duration_ms: action.hold_ms as i64,
            ..Self::default()
        };

        let draft = match &action.kind {
            ActionKind::MouseClick { x, y, button } => Self {
                button: choice_for(*button),
                x: *x,
                y: *y,
                ..base
            },
            ActionKind::MouseDrag {
                start_x,
                start_y,
                end_x,
                end_y,
                button,
            } => Self {
                button: choice_for(*button),
                x: *start_x,
                y: *start_y,
                end_x: *end_x,
                end_y: *end_y,
                drag: true,
                ..base
            },
            ActionKind::MouseScroll { delta } => Self {
                button: MouseChoice::Scroll,
                scroll_amount: *delta,
                ..base
            },
            ActionKind::KeyPress { .. } | ActionKind::KeyShortcut { .. } => return None,
        };

        Some(draft)
    }
}

fn choice_for(button: MouseButton) -> MouseChoice {
    match button {
        MouseButton::Left => MouseChoice::Left,
        MouseButton::Right => MouseChoice::Right,
        MouseButton::Middle => MouseChoice::Middle,
    }
}

/// Fields of the key / shortcut form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyActionDraft {
    #[serde(default)]
    pub keys: Vec<KeyCode>,
    #[serde(default = "default_duration_ms")]
    pub duration_ms: i64,
}

impl Default for KeyActionDraft {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            duration_ms: default_duration_ms(),
        }
    }
}

impl KeyActionDraft {
    /// One key becomes a key press, several become a shortcut
    pub fn into_kind(&self) -> Result<(ActionKind, u64), MacroError> {
        let hold_ms = checked_duration(self.duration_ms)?;

        let kind = match self.keys.as_slice() {
            [] => return Err(MacroError::Validation("No keys captured.".to_string())),
            [key] => ActionKind::KeyPress { key: *key },
            keys => ActionKind::KeyShortcut {
                keys: keys.to_vec(),
            },
        };

        Ok((kind, hold_ms))
    }

    pub fn from_action(action: &Action) -> Option<Self> {
        let keys = match &action.kind {
            ActionKind::KeyPress { key } => vec![*key],
            ActionKind::KeyShortcut { keys } => keys.clone(),
            _ => return None,
        };

        Some(Self {
            keys,
            duration_ms: action.hold_ms as i64,
        })
    }

    /// `CTRL + C` style text for the capture box
    pub fn display(&self) -> String {
        if self.keys.is_empty() {
            "Click to set keys...".to_string()
        } else {
            join_keys(&self.keys)
        }
    }
}

fn checked_duration(duration_ms: i64) -> Result<u64, MacroError> {
    u64::try_from(duration_ms).map_err(|_| {
        MacroError::Validation(format!(
            "Hold duration must not be negative (got {} ms)",
            duration_ms
        ))
    })
}
