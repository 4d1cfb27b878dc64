use mazewalk_common::{Cell, CellCoord};

/// Errors from maze generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    #[error("maze size must be odd and at least 3, got {size}")]
    InvalidSize { size: usize },
}

/// Errors from the strict grid edit operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("cell {coord} is outside a {size}x{size} grid")]
    OutOfBounds { coord: CellCoord, size: usize },
    #[error("cell {coord} is not empty (found {found:?})")]
    NotEmpty { coord: CellCoord, found: Cell },
    #[error("cell {coord} has no block to remove")]
    NotSolid { coord: CellCoord },
    #[error("a {size}x{size} grid needs {size}² cells, got {cells}")]
    Malformed { size: usize, cells: usize },
}
