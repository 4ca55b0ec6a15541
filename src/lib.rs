//! Homebound - a side-scrolling platformer through the rooms of a house
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game session)
//! - `catalog`: Remote character catalog client
//! - `ui`: Terminal rendering and input mapping

pub mod catalog;
pub mod sim;
pub mod ui;

pub use catalog::{CharacterCatalog, CharacterRecord};

/// Game tuning constants
pub mod consts {
    /// Downward acceleration applied every frame (pixels/frame²)
    pub const GRAVITY: f32 = 0.8;
    /// Vertical velocity set on jump (negative = upward)
    pub const JUMP_FORCE: f32 = -16.0;
    /// Horizontal speed while a move key is held (pixels/frame)
    pub const MOVE_SPEED: f32 = 6.0;
    /// Per-frame horizontal damping when no move key is held
    pub const FRICTION: f32 = 0.85;

    /// Health at spawn and the clamp ceiling
    pub const MAX_HEALTH: i32 = 100;
    /// Falling past this y kills the player instantly
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Player bounding box
    pub const PLAYER_WIDTH: f32 = 64.0;
    pub const PLAYER_HEIGHT: f32 = 64.0;
    /// Spawn point, shared by every level
    pub const SPAWN_X: f32 = 100.0;
    pub const SPAWN_Y: f32 = 400.0;

    /// Extra depth below a platform top that still counts as a landing.
    /// Lets a fast-falling player overshoot the top edge in one frame.
    pub const LANDING_BAND: f32 = 20.0;
    /// Bouncy platforms relaunch at JUMP_FORCE * this
    pub const BOUNCE_FACTOR: f32 = 1.5;
    /// Slippery platforms multiply vx by this on contact
    pub const SLIP_ACCEL: f32 = 1.05;

    /// Knockback speed when the player was standing still on impact
    pub const KNOCKBACK_SPEED: f32 = 10.0;
    /// Small upward kick on taking damage
    pub const HURT_LIFT: f32 = -5.0;
    /// Invulnerability window after taking damage (wall-clock)
    pub const HURT_WINDOW_MS: f64 = 500.0;
}
