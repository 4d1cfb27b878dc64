use mazewalk_common::{Cell, CellCoord};
use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// A record produced by every mutation to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridEvent {
    /// A cell changed state.
    CellChanged {
        coord: CellCoord,
        old: Cell,
        new: Cell,
    },
}

/// Square grid of cell states, stored row-major.
///
/// The size is fixed at construction. Lenient edits (`place`, `remove`) are
/// silent no-ops when they do not apply; the `try_*` variants report why.
/// Deserialized documents are checked for a square cell count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "GridRepr")]
pub struct VoxelGrid {
    size: usize,
    cells: Vec<Cell>,
    /// Append-only log of cell changes.
    #[serde(skip)]
    event_log: Vec<GridEvent>,
}

impl PartialEq for VoxelGrid {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.cells == other.cells
    }
}

impl Eq for VoxelGrid {}

/// Unchecked wire form of [`VoxelGrid`].
#[derive(Deserialize)]
struct GridRepr {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<GridRepr> for VoxelGrid {
    type Error = GridError;

    fn try_from(raw: GridRepr) -> Result<Self, Self::Error> {
        if raw.size.checked_mul(raw.size) != Some(raw.cells.len()) {
            return Err(GridError::Malformed {
                size: raw.size,
                cells: raw.cells.len(),
            });
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
            event_log: Vec::new(),
        })
    }
}

impl VoxelGrid {
    /// Create a `size × size` grid with every cell set to `fill`.
    pub fn filled(size: usize, fill: Cell) -> Self {
        Self {
            size,
            cells: vec![fill; size * size],
            event_log: Vec::new(),
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, coord: CellCoord) -> bool {
        self.index(coord).is_some()
    }

    fn index(&self, coord: CellCoord) -> Option<usize> {
        let n = self.size as i32;
        if coord.row < 0 || coord.col < 0 || coord.row >= n || coord.col >= n {
            return None;
        }
        Some(coord.row as usize * self.size + coord.col as usize)
    }

    /// Cell state at `coord`, or `None` outside the grid.
    pub fn get(&self, coord: CellCoord) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Whether `coord` blocks movement. Cells outside the grid are solid.
    pub fn is_solid(&self, coord: CellCoord) -> bool {
        self.get(coord).is_none_or(Cell::is_solid)
    }

    /// Overwrite a cell unconditionally. Returns the previous state, or
    /// `None` when `coord` is outside the grid.
    pub fn set(&mut self, coord: CellCoord, new: Cell) -> Option<Cell> {
        let i = self.index(coord)?;
        let old = self.cells[i];
        if old != new {
            self.cells[i] = new;
            self.event_log
                .push(GridEvent::CellChanged { coord, old, new });
        }
        Some(old)
    }

    /// Turn an empty cell into a placed block. Returns whether the grid
    /// changed; anything else is a no-op.
    pub fn place(&mut self, coord: CellCoord) -> bool {
        self.try_place(coord).is_ok()
    }

    /// Clear a wall or placed block. Returns whether the grid changed;
    /// anything else is a no-op.
    pub fn remove(&mut self, coord: CellCoord) -> bool {
        self.try_remove(coord).is_ok()
    }

    /// Strict form of [`place`](Self::place). On success returns the prior
    /// state, which is always `Cell::Empty`.
    pub fn try_place(&mut self, coord: CellCoord) -> Result<Cell, GridError> {
        match self.get(coord) {
            None => Err(GridError::OutOfBounds {
                coord,
                size: self.size,
            }),
            Some(Cell::Empty) => {
                self.set(coord, Cell::Placed);
                tracing::debug!(row = coord.row, col = coord.col, "placed block");
                Ok(Cell::Empty)
            }
            Some(found) => Err(GridError::NotEmpty { coord, found }),
        }
    }

    /// Strict form of [`remove`](Self::remove). On success returns the
    /// removed state (`Wall` or `Placed`).
    pub fn try_remove(&mut self, coord: CellCoord) -> Result<Cell, GridError> {
        match self.get(coord) {
            None => Err(GridError::OutOfBounds {
                coord,
                size: self.size,
            }),
            Some(Cell::Empty) => Err(GridError::NotSolid { coord }),
            Some(old) => {
                self.set(coord, Cell::Empty);
                tracing::debug!(row = coord.row, col = coord.col, ?old, "removed block");
                Ok(old)
            }
        }
    }

    /// Number of cells in the given state.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellCoord, Cell)> + '_ {
        let n = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| (CellCoord::new((i / n) as i32, (i % n) as i32), *c))
    }

    /// Coordinates of the outer ring, each visited once.
    pub fn border(&self) -> impl Iterator<Item = CellCoord> + '_ {
        let last = self.size as i32 - 1;
        self.iter()
            .map(|(c, _)| c)
            .filter(move |c| c.row == 0 || c.col == 0 || c.row == last || c.col == last)
    }

    /// Read-only access to the event log.
    pub fn events(&self) -> &[GridEvent] {
        &self.event_log
    }

    /// Drain and return the event log.
    pub fn drain_events(&mut self) -> Vec<GridEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Deterministic FNV-1a hash over the size and cell states.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325;
        let mut mix = |bytes: &[u8]| {
            for &b in bytes {
                h ^= b as u64;
                h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        mix(&(self.size as u64).to_le_bytes());
        for cell in &self.cells {
            mix(&[cell.tag()]);
        }
        h
    }
}
