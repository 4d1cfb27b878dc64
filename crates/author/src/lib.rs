//! Block Authoring: undoable edits and the host session state.
//!
//! # Invariants
//! - Every block edit is reversible.
//! - Edits only touch the grid through `VoxelGrid` operations.
//! - The session is the single owner of grid, walker and edit history.

pub mod editor;
pub mod session;

pub use editor::{BlockEdit, EditError, Editor};
pub use session::{Outcome, Session, SessionConfig};
