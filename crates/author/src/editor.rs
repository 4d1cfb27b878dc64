use mazewalk_common::{Cell, CellCoord};
use mazewalk_kernel::{GridError, VoxelGrid};

/// A single block change that can be applied to the grid and reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockEdit {
    pub coord: CellCoord,
    pub old: Cell,
    pub new: Cell,
}

impl BlockEdit {
    /// Produce the inverse edit (for undo).
    pub fn inverse(&self) -> Self {
        Self {
            coord: self.coord,
            old: self.new,
            new: self.old,
        }
    }

    fn apply(&self, grid: &mut VoxelGrid) {
        grid.set(self.coord, self.new);
    }
}

/// Errors from edit operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Block editor with undo/redo.
///
/// Every successful place or remove is pushed to the undo stack; a new edit
/// clears the redo stack.
#[derive(Debug, Default)]
pub struct Editor {
    undo_stack: Vec<BlockEdit>,
    redo_stack: Vec<BlockEdit>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a block on an empty cell and push to undo stack.
    pub fn place(&mut self, grid: &mut VoxelGrid, coord: CellCoord) -> Result<BlockEdit, EditError> {
        let old = grid.try_place(coord)?;
        Ok(self.record(BlockEdit {
            coord,
            old,
            new: Cell::Placed,
        }))
    }

    /// Remove a wall or placed block and push to undo stack.
    pub fn remove(&mut self, grid: &mut VoxelGrid, coord: CellCoord) -> Result<BlockEdit, EditError> {
        let old = grid.try_remove(coord)?;
        Ok(self.record(BlockEdit {
            coord,
            old,
            new: Cell::Empty,
        }))
    }

    fn record(&mut self, edit: BlockEdit) -> BlockEdit {
        self.undo_stack.push(edit);
        self.redo_stack.clear();
        edit
    }

    /// Undo the last edit. Returns true if an edit was undone.
    pub fn undo(&mut self, grid: &mut VoxelGrid) -> bool {
        let Some(edit) = self.undo_stack.pop() else {
            return false;
        };
        edit.inverse().apply(grid);
        self.redo_stack.push(edit);
        true
    }

    /// Redo the last undone edit. Returns true if an edit was redone.
    pub fn redo(&mut self, grid: &mut VoxelGrid) -> bool {
        let Some(edit) = self.redo_stack.pop() else {
            return false;
        };
        edit.apply(grid);
        self.undo_stack.push(edit);
        true
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
