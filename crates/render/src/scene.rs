use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use mazewalk_common::Cell;
use mazewalk_kernel::VoxelGrid;

/// Texture slot a block is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockTexture {
    Wall,
    Placed,
}

impl BlockTexture {
    /// Sampler slot index used by the shader.
    pub fn slot(self) -> u32 {
        match self {
            BlockTexture::Wall => 1,
            BlockTexture::Placed => 2,
        }
    }
}

/// World placement of the maze blocks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLayout {
    pub block_size: f32,
    pub floor_y: f32,
    pub floor_thickness: f32,
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self {
            block_size: 1.0,
            floor_y: -1.2,
            floor_thickness: 0.01,
        }
    }
}

impl SceneLayout {
    /// Y of the floor's top face; blocks sit on it.
    pub fn floor_top(&self) -> f32 {
        self.floor_y + self.floor_thickness / 2.0
    }
}

/// One unit cube to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockInstance {
    /// Centre of the cube in world space.
    pub position: Vec3,
    pub texture: BlockTexture,
}

/// GPU-ready instance layout.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct InstanceRaw {
    pub position: [f32; 3],
    pub texture_slot: u32,
}

impl From<&BlockInstance> for InstanceRaw {
    fn from(b: &BlockInstance) -> Self {
        Self {
            position: b.position.to_array(),
            texture_slot: b.texture.slot(),
        }
    }
}

impl InstanceRaw {
    /// Pack instances into the byte buffer uploaded to the GPU.
    pub fn pack(instances: &[BlockInstance]) -> Vec<u8> {
        let raw: Vec<InstanceRaw> = instances.iter().map(InstanceRaw::from).collect();
        bytemuck::cast_slice(&raw).to_vec()
    }
}

/// One instance per wall or placed cell, in row-major order.
pub fn build_instances(grid: &VoxelGrid, layout: &SceneLayout) -> Vec<BlockInstance> {
    let half = grid.size() as f32 / 2.0;
    let y = layout.floor_top() + layout.block_size / 2.0;
    let instances: Vec<BlockInstance> = grid
        .iter()
        .filter_map(|(coord, cell)| {
            let texture = match cell {
                Cell::Wall => BlockTexture::Wall,
                Cell::Placed => BlockTexture::Placed,
                Cell::Empty => return None,
            };
            let position = Vec3::new(
                (coord.col as f32 - half + 0.5) * layout.block_size,
                y,
                (coord.row as f32 - half + 0.5) * layout.block_size,
            );
            Some(BlockInstance { position, texture })
        })
        .collect();
    tracing::trace!(count = instances.len(), "built block instances");
    instances
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazewalk_common::CellCoord;

    #[test]
    fn one_instance_per_solid_cell() {
        let mut grid = VoxelGrid::filled(3, Cell::Wall);
        grid.remove(CellCoord::new(1, 1));
        grid.place(CellCoord::new(1, 1));
        grid.remove(CellCoord::new(0, 0));

        let instances = build_instances(&grid, &SceneLayout::default());
        assert_eq!(instances.len(), 8);
        assert_eq!(
            instances
                .iter()
                .filter(|b| b.texture == BlockTexture::Placed)
                .count(),
            1
        );
    }

    #[test]
    fn blocks_are_centred_on_cells() {
        let grid = VoxelGrid::filled(4, Cell::Wall);
        let layout = SceneLayout::default();
        let instances = build_instances(&grid, &layout);

        let first = instances[0];
        assert!((first.position.x - -1.5).abs() < 1e-6);
        assert!((first.position.z - -1.5).abs() < 1e-6);
        assert!((first.position.y - (layout.floor_top() + 0.5)).abs() < 1e-6);

        // Row 0, column 3 → x grows with column.
        assert!((instances[3].position.x - 1.5).abs() < 1e-6);
        assert!((instances[3].position.z - -1.5).abs() < 1e-6);
    }

    #[test]
    fn empty_grid_has_no_instances() {
        let grid = VoxelGrid::filled(5, Cell::Empty);
        assert!(build_instances(&grid, &SceneLayout::default()).is_empty());
    }

    #[test]
    fn texture_slots() {
        assert_eq!(BlockTexture::Wall.slot(), 1);
        assert_eq!(BlockTexture::Placed.slot(), 2);
    }

    #[test]
    fn pack_produces_sixteen_bytes_per_instance() {
        let grid = VoxelGrid::filled(3, Cell::Wall);
        let instances = build_instances(&grid, &SceneLayout::default());
        let bytes = InstanceRaw::pack(&instances);
        assert_eq!(bytes.len(), instances.len() * 16);
        let first: InstanceRaw = bytemuck::pod_read_unaligned(&bytes[..16]);
        assert_eq!(first.texture_slot, 1);
        assert_eq!(first.position, instances[0].position.to_array());
    }
}
