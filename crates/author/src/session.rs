use glam::Vec2;
use mazewalk_common::CellCoord;
use mazewalk_input::Action;
use mazewalk_kernel::maze::plaza_center;
use mazewalk_kernel::{GridEvent, MazeConfig, MazeError, MazeGenerator, VoxelGrid, Walker};
use serde::{Deserialize, Serialize};

use crate::editor::{BlockEdit, EditError, Editor};

/// Tuning for how actions move the walker and reach the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Distance covered by one move action.
    pub move_step: f32,
    /// Degrees turned by one turn action.
    pub turn_step: f32,
    /// Distance to the cell targeted by place/remove.
    pub reach: f32,
    /// Block movement into solid cells.
    pub collide: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            move_step: 0.2,
            turn_step: 5.0,
            reach: 1.0,
            collide: false,
        }
    }
}

/// Result of applying one action.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Moved { position: Vec2 },
    /// Movement stopped by a solid cell (collision enabled).
    Blocked,
    Turned { yaw_degrees: f32 },
    Edited(BlockEdit),
    /// A place/remove that did not apply; the grid is unchanged.
    Rejected(EditError),
    Undone,
    Redone,
    /// Nothing to do (unbound key, empty undo/redo stack).
    Idle,
}

/// Host-owned state for one maze walk: grid, walker and edit history.
///
/// The session owns the grid's change log. Each edit action drains it, so
/// a host redraws from [`last_changes`](Self::last_changes) instead of the
/// whole grid.
#[derive(Debug)]
pub struct Session {
    pub config: SessionConfig,
    grid: VoxelGrid,
    walker: Walker,
    editor: Editor,
    changes: Vec<GridEvent>,
}

impl Session {
    /// Start a session on an existing grid with the walker at its centre.
    pub fn new(grid: VoxelGrid, config: SessionConfig) -> Self {
        let walker = Walker::at_cell(plaza_center(grid.size()), grid.size());
        Self::with_walker(grid, walker, config)
    }

    pub fn with_walker(mut grid: VoxelGrid, walker: Walker, config: SessionConfig) -> Self {
        grid.drain_events();
        Self {
            config,
            grid,
            walker,
            editor: Editor::new(),
            changes: Vec::new(),
        }
    }

    /// Generate a maze from `maze` and start a session on it.
    pub fn generate(maze: &MazeConfig, config: SessionConfig) -> Result<Self, MazeError> {
        Ok(Self::new(MazeGenerator::from_config(maze)?, config))
    }

    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    pub fn walker(&self) -> &Walker {
        &self.walker
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Cells changed by the most recent action.
    pub fn last_changes(&self) -> &[GridEvent] {
        &self.changes
    }

    /// Cell targeted by place/remove.
    pub fn facing_cell(&self) -> CellCoord {
        self.walker.facing_cell(self.grid.size(), self.config.reach)
    }

    /// Apply one action to the session.
    pub fn apply(&mut self, action: Action) -> Outcome {
        let outcome = match action {
            Action::MoveForward => self.step(self.walker.forward()),
            Action::MoveBackward => self.step(-self.walker.forward()),
            Action::StrafeLeft => self.step(-self.walker.right()),
            Action::StrafeRight => self.step(self.walker.right()),
            Action::TurnLeft => self.turn(self.config.turn_step),
            Action::TurnRight => self.turn(-self.config.turn_step),
            Action::PlaceBlock => {
                let target = self.facing_cell();
                edit_outcome(self.editor.place(&mut self.grid, target))
            }
            Action::RemoveBlock => {
                let target = self.facing_cell();
                edit_outcome(self.editor.remove(&mut self.grid, target))
            }
            Action::Undo => {
                if self.editor.undo(&mut self.grid) {
                    Outcome::Undone
                } else {
                    Outcome::Idle
                }
            }
            Action::Redo => {
                if self.editor.redo(&mut self.grid) {
                    Outcome::Redone
                } else {
                    Outcome::Idle
                }
            }
            Action::Noop => Outcome::Idle,
        };
        self.changes = if action.is_edit() {
            self.grid.drain_events()
        } else {
            Vec::new()
        };
        tracing::trace!(?action, ?outcome, changed = self.changes.len(), "applied action");
        outcome
    }

    /// Apply a sequence of actions, returning each outcome.
    pub fn run<I: IntoIterator<Item = Action>>(&mut self, actions: I) -> Vec<Outcome> {
        actions.into_iter().map(|a| self.apply(a)).collect()
    }

    fn step(&mut self, direction: Vec2) -> Outcome {
        let delta = direction * self.config.move_step;
        if self.config.collide {
            if !self.walker.try_move(&self.grid, delta) {
                return Outcome::Blocked;
            }
        } else {
            self.walker.position += delta;
        }
        Outcome::Moved {
            position: self.walker.position,
        }
    }

    fn turn(&mut self, degrees: f32) -> Outcome {
        self.walker.pan(degrees);
        Outcome::Turned {
            yaw_degrees: self.walker.yaw_degrees,
        }
    }
}

fn edit_outcome(result: Result<BlockEdit, EditError>) -> Outcome {
    match result {
        Ok(edit) => Outcome::Edited(edit),
        Err(err) => {
            tracing::debug!(%err, "edit rejected");
            Outcome::Rejected(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazewalk_common::Cell;
    use mazewalk_kernel::GridError;

    fn corridor_session(config: SessionConfig) -> Session {
        // 5x5: open middle row, walker at (2,2) facing -z toward (1,2).
        let mut grid = VoxelGrid::filled(5, Cell::Wall);
        for col in 1..=3 {
            grid.set(CellCoord::new(2, col), Cell::Empty);
        }
        Session::new(grid, config)
    }

    #[test]
    fn starts_at_grid_centre() {
        let s = corridor_session(SessionConfig::default());
        assert_eq!(s.walker().cell(5), CellCoord::new(2, 2));
        assert_eq!(s.facing_cell(), CellCoord::new(1, 2));
    }

    #[test]
    fn remove_then_place_on_facing_cell() {
        let mut s = corridor_session(SessionConfig::default());
        let target = CellCoord::new(1, 2);

        let removed = s.apply(Action::RemoveBlock);
        assert!(matches!(removed, Outcome::Edited(BlockEdit { old: Cell::Wall, .. })));
        assert_eq!(s.grid().get(target), Some(Cell::Empty));

        s.apply(Action::PlaceBlock);
        assert_eq!(s.grid().get(target), Some(Cell::Placed));
        assert_eq!(s.editor().undo_count(), 2);
    }

    #[test]
    fn place_on_wall_is_rejected_without_change() {
        let mut s = corridor_session(SessionConfig::default());
        let before = s.grid().clone();
        let outcome = s.apply(Action::PlaceBlock);
        assert!(matches!(
            outcome,
            Outcome::Rejected(EditError::Grid(GridError::NotEmpty { .. }))
        ));
        assert_eq!(s.grid(), &before);
    }

    #[test]
    fn facing_outside_grid_is_rejected() {
        let grid = VoxelGrid::filled(3, Cell::Empty);
        let walker = Walker::at_cell(CellCoord::new(0, 1), 3);
        let mut s = Session::with_walker(grid, walker, SessionConfig::default());
        assert_eq!(s.facing_cell(), CellCoord::new(-1, 1));
        assert!(matches!(
            s.apply(Action::PlaceBlock),
            Outcome::Rejected(EditError::Grid(GridError::OutOfBounds { .. }))
        ));
    }

    #[test]
    fn undo_redo_through_actions() {
        let mut s = corridor_session(SessionConfig::default());
        s.apply(Action::RemoveBlock);
        assert_eq!(s.apply(Action::Undo), Outcome::Undone);
        assert_eq!(s.grid().get(CellCoord::new(1, 2)), Some(Cell::Wall));
        assert_eq!(s.apply(Action::Redo), Outcome::Redone);
        assert_eq!(s.grid().get(CellCoord::new(1, 2)), Some(Cell::Empty));
        assert_eq!(s.apply(Action::Redo), Outcome::Idle);
    }

    #[test]
    fn edits_report_their_changes() {
        let mut s = corridor_session(SessionConfig::default());
        let target = CellCoord::new(1, 2);
        assert!(s.last_changes().is_empty());

        s.apply(Action::RemoveBlock);
        assert_eq!(
            s.last_changes(),
            &[GridEvent::CellChanged {
                coord: target,
                old: Cell::Wall,
                new: Cell::Empty
            }]
        );
        assert!(s.grid().events().is_empty());

        s.apply(Action::Undo);
        assert_eq!(
            s.last_changes(),
            &[GridEvent::CellChanged {
                coord: target,
                old: Cell::Empty,
                new: Cell::Wall
            }]
        );

        s.apply(Action::TurnLeft);
        assert!(s.last_changes().is_empty());
        // A rejected edit changes nothing.
        s.apply(Action::RemoveBlock);
        s.apply(Action::RemoveBlock);
        assert!(s.last_changes().is_empty());
    }

    #[test]
    fn change_log_stays_empty_over_long_runs() {
        let mut s = corridor_session(SessionConfig::default());
        for _ in 0..500 {
            s.run([Action::RemoveBlock, Action::PlaceBlock, Action::Undo, Action::Undo]);
        }
        assert!(s.grid().events().is_empty());
        assert_eq!(s.last_changes().len(), 1);
        assert_eq!(s.grid().get(CellCoord::new(1, 2)), Some(Cell::Wall));
    }

    #[test]
    fn turning_changes_target() {
        let mut s = corridor_session(SessionConfig {
            turn_step: 90.0,
            ..SessionConfig::default()
        });
        s.apply(Action::TurnLeft);
        assert_eq!(s.facing_cell(), CellCoord::new(2, 1));
        s.apply(Action::TurnRight);
        s.apply(Action::TurnRight);
        assert_eq!(s.facing_cell(), CellCoord::new(2, 3));
    }

    #[test]
    fn walls_do_not_stop_walker_by_default() {
        let mut s = corridor_session(SessionConfig {
            move_step: 1.0,
            ..SessionConfig::default()
        });
        assert!(matches!(s.apply(Action::MoveForward), Outcome::Moved { .. }));
        assert_eq!(s.walker().cell(5), CellCoord::new(1, 2));
    }

    #[test]
    fn collision_blocks_walls_but_not_corridor() {
        let mut s = corridor_session(SessionConfig {
            move_step: 1.0,
            collide: true,
            ..SessionConfig::default()
        });
        assert_eq!(s.apply(Action::MoveForward), Outcome::Blocked);
        assert_eq!(s.walker().cell(5), CellCoord::new(2, 2));
        assert!(matches!(s.apply(Action::StrafeRight), Outcome::Moved { .. }));
        assert_eq!(s.walker().cell(5), CellCoord::new(2, 3));
        assert_eq!(s.apply(Action::StrafeRight), Outcome::Blocked);
    }

    #[test]
    fn run_applies_in_order() {
        let mut s = corridor_session(SessionConfig::default());
        let outcomes = s.run([Action::RemoveBlock, Action::Noop, Action::Undo]);
        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[1], Outcome::Idle);
        assert_eq!(s.grid().get(CellCoord::new(1, 2)), Some(Cell::Wall));
    }

    #[test]
    fn generate_builds_plaza_session() {
        let maze = MazeConfig {
            size: 15,
            seed: 3,
            ..MazeConfig::default()
        };
        let s = Session::generate(&maze, SessionConfig::default()).unwrap();
        assert_eq!(s.grid().size(), 15);
        assert_eq!(s.grid().get(s.walker().cell(15)), Some(Cell::Empty));
        assert_eq!(s.grid().get(s.facing_cell()), Some(Cell::Empty));
    }

    #[test]
    fn config_yaml_overrides_defaults() {
        let c: SessionConfig = serde_yaml::from_str("collide: true\nreach: 2.0\n").unwrap();
        assert!(c.collide);
        assert_eq!(c.reach, 2.0);
        assert_eq!(c.move_step, 0.2);
    }
}
