use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::action::{Action, ActionKind};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MacroError {
    #[error("Action index {index} out of bounds (macro has {len} actions)")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("{0}")]
    Validation(String),
}

/// The ordered action list owned by the editor session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macro {
    #[serde(default)]
    actions: Vec<Action>,
}

impl Macro {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a macro from imported actions, rejecting invalid ones
    pub fn from_actions(actions: Vec<Action>) -> Result<Self, MacroError> {
        let list = Self { actions };
        list.validate()?;
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }

    fn check_index(&self, index: usize) -> Result<(), MacroError> {
        if index < self.actions.len() {
            Ok(())
        } else {
            Err(MacroError::IndexOutOfBounds {
                index,
                len: self.actions.len(),
            })
        }
    }

    pub fn get(&self, index: usize) -> Result<&Action, MacroError> {
        self.check_index(index)?;
        Ok(&self.actions[index])
    }

    /// Append an action and return its index
    pub fn push(&mut self, action: Action) -> usize {
        self.actions.push(action);
        self.actions.len() - 1
    }

    /// Edit an action in place; the id survives the edit
    pub fn replace(
        &mut self,
        index: usize,
        kind: ActionKind,
        hold_ms: u64,
    ) -> Result<&Action, MacroError> {
        self.check_index(index)?;
        let action = &mut self.actions[index];
        action.kind = kind;
        action.hold_ms = hold_ms;
        Ok(action)
    }

    pub fn remove(&mut self, index: usize) -> Result<Action, MacroError> {
        self.check_index(index)?;
        Ok(self.actions.remove(index))
    }

    /// Take the action at `from` out of the list and insert it at `to`
    pub fn move_action(&mut self, from: usize, to: usize) -> Result<(), MacroError> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from != to {
            let action = self.actions.remove(from);
            self.actions.insert(to, action);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }

    pub fn validate(&self) -> Result<(), MacroError> {
        for (index, action) in self.actions.iter().enumerate() {
            if let ActionKind::KeyShortcut { keys } = &action.kind {
                if keys.is_empty() {
                    return Err(MacroError::Validation(format!(
                        "Action {} is a shortcut without keys",
                        index + 1
                    )));
                }
            }
        }
        Ok(())
    }
}
