//! Shared types used by every mazewalk crate.

mod types;

pub use types::{Cell, CellCoord};
