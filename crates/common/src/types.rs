use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a single grid cell.
///
/// `Placed` blocks render with their own texture but are otherwise treated
/// like `Wall` for collision and placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Impassable solid block.
    #[default]
    Wall,
    /// Passable floor.
    Empty,
    /// Block placed by the player at runtime.
    Placed,
}

impl Cell {
    /// Whether the cell blocks movement.
    pub fn is_solid(self) -> bool {
        matches!(self, Cell::Wall | Cell::Placed)
    }

    /// Stable byte tag used for hashing.
    pub fn tag(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Wall => 1,
            Cell::Placed => 2,
        }
    }
}

/// A grid coordinate. Row follows the world z axis, column the world x axis.
///
/// Components are signed because derived coordinates (e.g. the cell a viewer
/// faces) can land outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    pub row: i32,
    pub col: i32,
}

impl CellCoord {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Map a continuous (x, z) point onto the grid of the given size, centred
    /// on the world origin.
    pub fn from_world(point: glam::Vec2, grid_size: usize) -> Self {
        let half = grid_size as f32 / 2.0;
        Self {
            row: (point.y + half).floor() as i32,
            col: (point.x + half).floor() as i32,
        }
    }

    /// The coordinate shifted by `(d_row, d_col)`.
    pub fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// The four axis-aligned neighbours.
    pub fn neighbors(self) -> [CellCoord; 4] {
        [
            self.offset(-1, 0),
            self.offset(1, 0),
            self.offset(0, -1),
            self.offset(0, 1),
        ]
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
