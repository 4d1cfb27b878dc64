use glam::Vec2;
use mazewalk_common::CellCoord;
use serde::{Deserialize, Serialize};

use crate::facing::{facing_cell, heading};
use crate::grid::VoxelGrid;

/// First-person viewer pose on the floor plane.
///
/// `position` holds world (x, z). Yaw is in degrees, 0 facing -z; positive
/// yaw turns left.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Walker {
    pub position: Vec2,
    pub yaw_degrees: f32,
}

impl Walker {
    pub fn new(position: Vec2, yaw_degrees: f32) -> Self {
        Self {
            position,
            yaw_degrees,
        }
    }

    /// Place the walker at the centre of `cell` on a grid of `grid_size`.
    pub fn at_cell(cell: CellCoord, grid_size: usize) -> Self {
        let half = grid_size as f32 / 2.0;
        Self::new(
            Vec2::new(cell.col as f32 - half + 0.5, cell.row as f32 - half + 0.5),
            0.0,
        )
    }

    pub fn forward(&self) -> Vec2 {
        heading(self.yaw_degrees)
    }

    pub fn right(&self) -> Vec2 {
        let yaw = self.yaw_degrees.to_radians();
        Vec2::new(yaw.cos(), -yaw.sin())
    }

    pub fn move_forward(&mut self, dist: f32) {
        self.position += self.forward() * dist;
    }

    pub fn move_backward(&mut self, dist: f32) {
        self.position -= self.forward() * dist;
    }

    pub fn move_left(&mut self, dist: f32) {
        self.position -= self.right() * dist;
    }

    pub fn move_right(&mut self, dist: f32) {
        self.position += self.right() * dist;
    }

    /// Turn by `degrees`; positive turns left. Yaw is kept in `[0, 360)`.
    pub fn pan(&mut self, degrees: f32) {
        self.yaw_degrees = (self.yaw_degrees + degrees).rem_euclid(360.0);
    }

    /// Cell currently occupied on a grid of `grid_size`.
    pub fn cell(&self, grid_size: usize) -> CellCoord {
        CellCoord::from_world(self.position, grid_size)
    }

    /// Cell `reach` units ahead.
    pub fn facing_cell(&self, grid_size: usize, reach: f32) -> CellCoord {
        facing_cell(self.position, self.yaw_degrees, grid_size, reach)
    }

    /// Move by `delta` unless the destination cell is solid. Returns whether
    /// the walker moved.
    pub fn try_move(&mut self, grid: &VoxelGrid, delta: Vec2) -> bool {
        let dest = self.position + delta;
        if grid.is_solid(CellCoord::from_world(dest, grid.size())) {
            tracing::trace!(x = dest.x, z = dest.y, "move blocked");
            return false;
        }
        self.position = dest;
        true
    }
}
