//! Input: keys mapped to the shared action set.
//!
//! # Invariants
//! - The session consumes actions, never raw key events.
//! - Unbound keys map to `Action::Noop`.

pub mod action;
pub mod bindings;

pub use action::Action;
pub use bindings::{BindingError, KeyBindings};
