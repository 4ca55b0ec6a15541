//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Per-frame timestep only
//! - Stable iteration order (catalog order for platforms and obstacles)
//! - No rendering, network, or platform dependencies
//!
//! The renderer gets read-only snapshots; nothing outside this module mutates
//! simulation state.

pub mod level;
pub mod player;
pub mod rect;
pub mod session;
pub mod tick;

pub use level::{Level, Obstacle, Platform, SurfaceKind};
pub use player::{Facing, PlayerState};
pub use rect::Rect;
pub use session::{GameSession, GameStatus};
pub use tick::{StatusEvent, TickInput, advance, camera_x};
