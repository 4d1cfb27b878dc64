//! Connectivity analysis over the open (non-solid) cells of a grid.

use crate::grid::VoxelGrid;

/// Number of 4-connected components formed by open cells.
pub fn open_components(grid: &VoxelGrid) -> usize {
    let n = grid.size();
    let mut seen = vec![false; n * n];
    let mut stack = Vec::new();
    let mut components = 0;

    for (start, cell) in grid.iter() {
        let idx = start.row as usize * n + start.col as usize;
        if cell.is_solid() || seen[idx] {
            continue;
        }
        components += 1;
        seen[idx] = true;
        stack.push(start);
        while let Some(c) = stack.pop() {
            for next in c.neighbors() {
                if grid.is_solid(next) {
                    continue;
                }
                let i = next.row as usize * n + next.col as usize;
                if !seen[i] {
                    seen[i] = true;
                    stack.push(next);
                }
            }
        }
    }
    components
}

/// Number of adjacent open-cell pairs, each pair counted once.
pub fn open_edges(grid: &VoxelGrid) -> usize {
    grid.iter()
        .filter(|(_, cell)| !cell.is_solid())
        .map(|(c, _)| {
            [c.offset(0, 1), c.offset(1, 0)]
                .into_iter()
                .filter(|n| !grid.is_solid(*n))
                .count()
        })
        .sum()
}

/// Whether the open cells form a tree: one component, no loops.
pub fn is_perfect(grid: &VoxelGrid) -> bool {
    let open = grid.iter().filter(|(_, c)| !c.is_solid()).count();
    open > 0 && open_components(grid) == 1 && open_edges(grid) == open - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazewalk_common::{Cell, CellCoord};

    fn grid_from(rows: &[&str]) -> VoxelGrid {
        let mut g = VoxelGrid::filled(rows.len(), Cell::Wall);
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                if ch == '.' {
                    g.set(CellCoord::new(r as i32, c as i32), Cell::Empty);
                }
            }
        }
        g
    }

    #[test]
    fn corridor_is_perfect() {
        let g = grid_from(&["#####", "#...#", "###.#", "#...#", "#####"]);
        assert_eq!(open_components(&g), 1);
        assert_eq!(open_edges(&g), 6);
        assert!(is_perfect(&g));
    }

    #[test]
    fn open_square_has_a_loop() {
        let g = grid_from(&["####", "#..#", "#..#", "####"]);
        assert_eq!(open_components(&g), 1);
        assert_eq!(open_edges(&g), 4);
        assert!(!is_perfect(&g));
    }

    #[test]
    fn split_regions_are_counted() {
        let g = grid_from(&["#####", "#.#.#", "#####", "#.#.#", "#####"]);
        assert_eq!(open_components(&g), 4);
        assert!(!is_perfect(&g));
    }

    #[test]
    fn placed_blocks_split_paths() {
        let mut g = grid_from(&["#####", "#...#", "#####", "#####", "#####"]);
        g.place(CellCoord::new(1, 2));
        assert_eq!(open_components(&g), 2);
    }

    #[test]
    fn solid_grid_is_not_perfect() {
        let g = VoxelGrid::filled(3, Cell::Wall);
        assert_eq!(open_components(&g), 0);
        assert!(!is_perfect(&g));
    }
}
