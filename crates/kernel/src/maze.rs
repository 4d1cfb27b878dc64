use mazewalk_common::{Cell, CellCoord};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::MazeError;
use crate::grid::VoxelGrid;

/// Carve offsets, visited in this order when collecting candidates.
const STEPS: [(i32, i32); 4] = [(2, 0), (-2, 0), (0, 2), (0, -2)];

/// How `clear_region` treats the outer wall ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearMode {
    /// Keep the region inside the interior so the outer ring stays intact.
    #[default]
    Clamped,
    /// Clear the full square, punching through the outer ring if it reaches.
    Unclamped,
}

/// Maze generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Side length; odd and at least 3.
    pub size: usize,
    /// Seed for the deterministic random source.
    pub seed: u64,
    /// Radius of the central plaza, or `None` to skip it.
    pub plaza_radius: Option<usize>,
    /// Whether the plaza may cut through the outer wall ring.
    pub clear_mode: ClearMode,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            size: 31,
            seed: 0,
            plaza_radius: Some(3),
            clear_mode: ClearMode::Clamped,
        }
    }
}

/// Recursive-backtracker maze generator.
pub struct MazeGenerator;

impl MazeGenerator {
    /// Carve a perfect maze into an all-wall `size × size` grid.
    ///
    /// The walk starts at (1,1) and moves in steps of two, so every interior
    /// cell with odd coordinates ends up open and connected to every other by
    /// exactly one path. Identical random sources give identical grids.
    pub fn generate<R: Rng>(size: usize, rng: &mut R) -> Result<VoxelGrid, MazeError> {
        if size < 3 || size % 2 == 0 {
            return Err(MazeError::InvalidSize { size });
        }
        let _span = tracing::info_span!("maze_generate", size).entered();

        let mut grid = VoxelGrid::filled(size, Cell::Wall);
        let interior = 1..size as i32 - 1;
        let start = CellCoord::new(1, 1);
        grid.set(start, Cell::Empty);

        let mut stack = vec![start];
        let mut candidates = Vec::with_capacity(STEPS.len());
        let mut carved = 1usize;

        while let Some(&cursor) = stack.last() {
            candidates.clear();
            candidates.extend(STEPS.iter().filter_map(|&(dx, dy)| {
                let target = cursor.offset(dy, dx);
                let inside = interior.contains(&target.row) && interior.contains(&target.col);
                (inside && grid.get(target) == Some(Cell::Wall))
                    .then(|| (target, cursor.offset(dy / 2, dx / 2)))
            }));

            if candidates.is_empty() {
                stack.pop();
                continue;
            }

            let (target, between) = candidates[rng.gen_range(0..candidates.len())];
            grid.set(between, Cell::Empty);
            grid.set(target, Cell::Empty);
            stack.push(target);
            carved += 1;
        }

        // The carve is a single snapshot; only later edits are worth logging.
        grid.drain_events();
        tracing::debug!(size, carved, "maze carved");
        Ok(grid)
    }

    /// Generate from a config: seeded ChaCha source, then the optional plaza
    /// around the grid centre.
    pub fn from_config(config: &MazeConfig) -> Result<VoxelGrid, MazeError> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut grid = Self::generate(config.size, &mut rng)?;
        if let Some(radius) = config.plaza_radius {
            Self::clear_region(&mut grid, plaza_center(config.size), radius, config.clear_mode);
        }
        grid.drain_events();
        Ok(grid)
    }

    /// Set every cell in the inclusive square `center ± radius` to empty.
    ///
    /// Cells outside the grid are ignored in both modes. `Clamped` further
    /// restricts the square to the interior so the outer ring survives.
    pub fn clear_region(grid: &mut VoxelGrid, center: CellCoord, radius: usize, mode: ClearMode) {
        // Any radius past i32::MAX already covers the whole grid.
        let r = i32::try_from(radius).unwrap_or(i32::MAX);
        let (lo, hi) = match mode {
            ClearMode::Clamped => (1, grid.size() as i32 - 2),
            ClearMode::Unclamped => (0, grid.size() as i32 - 1),
        };
        let rows = center.row.saturating_sub(r).max(lo)..=center.row.saturating_add(r).min(hi);
        let cols = center.col.saturating_sub(r).max(lo)..=center.col.saturating_add(r).min(hi);

        let mut cleared = 0usize;
        for row in rows {
            for col in cols.clone() {
                if grid.set(CellCoord::new(row, col), Cell::Empty) != Some(Cell::Empty) {
                    cleared += 1;
                }
            }
        }
        tracing::debug!(
            row = center.row,
            col = center.col,
            radius,
            ?mode,
            cleared,
            "cleared region"
        );
    }
}

/// Centre cell of a grid of the given size.
pub fn plaza_center(size: usize) -> CellCoord {
    let c = (size / 2) as i32;
    CellCoord::new(c, c)
}
