//! Rendering Adapter: renderer-agnostic views of the maze.
//!
//! # Invariants
//! - Renderers never mutate the grid.
//! - Render state derives from grid state and the walker pose.
//!
//! A GPU backend consumes `build_instances` and `WalkerCamera`; the
//! `AsciiRenderer` covers CLI output and tests.

mod camera;
mod renderer;
mod scene;

pub use camera::WalkerCamera;
pub use renderer::{AsciiRenderer, Renderer};
pub use scene::{BlockInstance, BlockTexture, InstanceRaw, SceneLayout, build_instances};
