use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A high-level action produced by the input layer.
///
/// The session consumes actions, never raw input events, so any input
/// source (keyboard, scripted replay) drives the same logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Step along the heading.
    MoveForward,
    /// Step against the heading.
    MoveBackward,
    StrafeLeft,
    StrafeRight,
    /// Pan yaw counter-clockwise.
    TurnLeft,
    /// Pan yaw clockwise.
    TurnRight,
    /// Place a block on the facing cell.
    PlaceBlock,
    /// Remove the block on the facing cell.
    RemoveBlock,
    /// Undo the last block edit.
    Undo,
    /// Redo the last undone edit.
    Redo,
    /// No-op (used for keys that haven't been bound).
    Noop,
}

impl Action {
    pub const ALL: [Action; 11] = [
        Action::MoveForward,
        Action::MoveBackward,
        Action::StrafeLeft,
        Action::StrafeRight,
        Action::TurnLeft,
        Action::TurnRight,
        Action::PlaceBlock,
        Action::RemoveBlock,
        Action::Undo,
        Action::Redo,
        Action::Noop,
    ];

    /// Snake-case name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            Action::MoveForward => "move_forward",
            Action::MoveBackward => "move_backward",
            Action::StrafeLeft => "strafe_left",
            Action::StrafeRight => "strafe_right",
            Action::TurnLeft => "turn_left",
            Action::TurnRight => "turn_right",
            Action::PlaceBlock => "place_block",
            Action::RemoveBlock => "remove_block",
            Action::Undo => "undo",
            Action::Redo => "redo",
            Action::Noop => "noop",
        }
    }

    /// Whether the action edits the grid.
    pub fn is_edit(self) -> bool {
        matches!(
            self,
            Action::PlaceBlock | Action::RemoveBlock | Action::Undo | Action::Redo
        )
    }
}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

/// Returned when an action name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action '{0}'")]
pub struct UnknownAction(pub String);
