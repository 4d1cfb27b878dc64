use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::action::{Action, UnknownAction};

/// Errors from parsing a `key=action` binding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    #[error("binding '{0}' must look like key=action")]
    MissingSeparator(String),
    #[error("binding key must be a single character, got '{0}'")]
    BadKey(String),
    #[error(transparent)]
    UnknownAction(#[from] UnknownAction),
}

/// Key → action table.
///
/// BTreeMap keeps serialization order stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBindings {
    keys: BTreeMap<char, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let keys = [
            ('w', Action::MoveForward),
            ('s', Action::MoveBackward),
            ('a', Action::StrafeLeft),
            ('d', Action::StrafeRight),
            ('q', Action::TurnLeft),
            ('e', Action::TurnRight),
            ('p', Action::PlaceBlock),
            ('r', Action::RemoveBlock),
            ('u', Action::Undo),
            ('y', Action::Redo),
        ]
        .into_iter()
        .collect();
        Self { keys }
    }
}

impl KeyBindings {
    /// A table with nothing bound.
    pub fn empty() -> Self {
        Self {
            keys: BTreeMap::new(),
        }
    }

    /// Bind `key`, returning the action it replaced.
    pub fn bind(&mut self, key: char, action: Action) -> Option<Action> {
        self.keys.insert(key, action)
    }

    pub fn unbind(&mut self, key: char) -> Option<Action> {
        self.keys.remove(&key)
    }

    /// Action for `key`; `Noop` when unbound.
    pub fn action_for(&self, key: char) -> Action {
        self.keys.get(&key).copied().unwrap_or(Action::Noop)
    }

    /// Map every non-whitespace character of `script` to an action.
    pub fn parse_script(&self, script: &str) -> Vec<Action> {
        script
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| {
                let action = self.action_for(c);
                if action == Action::Noop {
                    tracing::debug!(key = %c, "unbound key");
                }
                action
            })
            .collect()
    }

    /// Apply a `key=action` override such as `x=place_block`.
    pub fn apply_override(&mut self, spec: &str) -> Result<(), BindingError> {
        let (key, name) = spec
            .split_once('=')
            .ok_or_else(|| BindingError::MissingSeparator(spec.to_string()))?;
        let mut chars = key.trim().chars();
        let (Some(k), None) = (chars.next(), chars.next()) else {
            return Err(BindingError::BadKey(key.to_string()));
        };
        let action = name.trim().parse::<Action>()?;
        self.bind(k, action);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, Action)> + '_ {
        self.keys.iter().map(|(k, a)| (*k, *a))
    }
}
