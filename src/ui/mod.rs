//! Terminal presentation layer
//!
//! Strictly a collaborator of the simulation: `input` turns key events into
//! the logical held-state flags the update step consumes, `screen` draws
//! read-only snapshots. Nothing in here mutates simulation state.

pub mod input;
pub mod screen;

pub use input::InputTracker;
pub use screen::Screen;
