use glam::Vec2;
use mazewalk_common::CellCoord;

/// Unit heading in the (x, z) plane. Yaw 0 faces -z; positive yaw turns
/// toward -x.
pub fn heading(yaw_degrees: f32) -> Vec2 {
    let yaw = yaw_degrees.to_radians();
    Vec2::new(-yaw.sin(), -yaw.cos())
}

/// The cell `reach` units ahead of a viewer at `position` (x, z).
///
/// The grid is centred on the world origin. The result is not bounds
/// checked; callers validate it against the grid before indexing.
pub fn facing_cell(position: Vec2, yaw_degrees: f32, grid_size: usize, reach: f32) -> CellCoord {
    let target = position + heading(yaw_degrees) * reach;
    CellCoord::from_world(target, grid_size)
}
