//! Maze Kernel: authoritative grid state, maze generation, walker pose.
//!
//! # Invariants
//! - The grid is square and its size is fixed at construction.
//! - After generation the outer ring is wall and (1,1) is open.
//! - All cell mutations flow through explicit `VoxelGrid` operations.
//! - Generation is pure with respect to the injected random source.

pub mod error;
pub mod facing;
pub mod grid;
pub mod maze;
pub mod topology;
pub mod walker;

pub use error::{GridError, MazeError};
pub use facing::facing_cell;
pub use grid::{GridEvent, VoxelGrid};
pub use maze::{ClearMode, MazeConfig, MazeGenerator};
pub use walker::Walker;
