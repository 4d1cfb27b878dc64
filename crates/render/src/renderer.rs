use mazewalk_common::Cell;
use mazewalk_kernel::{VoxelGrid, Walker};

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads the grid and the walker pose, then produces output.
/// It never mutates the grid.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&self, grid: &VoxelGrid, walker: Option<&Walker>) -> Self::Output;
}

/// Top-down text map of the grid.
///
/// `#` wall, `+` placed block, `.` floor, `@` walker. Rows run along +z.
#[derive(Debug, Default)]
pub struct AsciiRenderer {
    /// Print a summary line before the map.
    pub header: bool,
}

impl AsciiRenderer {
    pub fn new() -> Self {
        Self { header: true }
    }

    /// Map only, no header.
    pub fn bare() -> Self {
        Self { header: false }
    }

    fn glyph(cell: Cell) -> char {
        match cell {
            Cell::Wall => '#',
            Cell::Placed => '+',
            Cell::Empty => '.',
        }
    }
}

impl Renderer for AsciiRenderer {
    type Output = String;

    fn render(&self, grid: &VoxelGrid, walker: Option<&Walker>) -> String {
        let n = grid.size();
        let mut out = String::with_capacity((n + 1) * n + 80);
        let walker_cell = walker.map(|w| w.cell(n));

        if self.header {
            out.push_str(&format!(
                "=== Maze {n}x{n} (walls={}, placed={}, open={}) ===\n",
                grid.count(Cell::Wall),
                grid.count(Cell::Placed),
                grid.count(Cell::Empty)
            ));
            if let (Some(w), Some(c)) = (walker, walker_cell) {
                out.push_str(&format!(
                    "Walker: pos=({:.2}, {:.2}) yaw={:.0} cell=({}, {})\n",
                    w.position.x, w.position.y, w.yaw_degrees, c.row, c.col
                ));
            }
        }

        for (coord, cell) in grid.iter() {
            if Some(coord) == walker_cell {
                out.push('@');
            } else {
                out.push(Self::glyph(cell));
            }
            if coord.col as usize == n - 1 {
                out.push('\n');
            }
        }
        out
    }
}
