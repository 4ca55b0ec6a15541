//! Player state
//!
//! The player is an immutable value: `advance` consumes the previous frame's
//! state and returns a fresh one, so there is exactly one writer per tick and
//! renderers can hold snapshots without seeing partial writes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Which way the sprite faces (flips rendering, picks knockback direction)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

/// Complete per-frame player state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Top-left corner of the bounding box (world pixels)
    pub pos: Vec2,
    /// Velocity in pixels per frame
    pub vel: Vec2,
    /// Bounding box size, fixed for the life of the state
    pub size: Vec2,
    /// Current health, kept within 0..=MAX_HEALTH
    pub health: i32,
    /// True from jump until the next landing zeroes vertical velocity
    pub airborne: bool,
    /// Damage is suppressed while the frame timestamp is before this.
    /// A timestamp instead of a deferred callback keeps the invulnerability
    /// window deterministic and replayable.
    pub hurt_until_ms: f64,
    pub facing: Facing,
}

impl PlayerState {
    /// Fresh state at the level spawn point, used on game start, next level,
    /// and retry
    pub fn spawn() -> Self {
        Self {
            pos: Vec2::new(SPAWN_X, SPAWN_Y),
            vel: Vec2::ZERO,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            health: MAX_HEALTH,
            airborne: false,
            hurt_until_ms: 0.0,
            facing: Facing::Right,
        }
    }

    /// Bounding box at the current position
    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Whether the invulnerability window is still open at `now_ms`
    pub fn is_hurt(&self, now_ms: f64) -> bool {
        now_ms < self.hurt_until_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_defaults() {
        let p = PlayerState::spawn();
        assert_eq!(p.health, MAX_HEALTH);
        assert_eq!(p.pos, Vec2::new(SPAWN_X, SPAWN_Y));
        assert_eq!(p.vel, Vec2::ZERO);
        assert!(!p.airborne);
        assert!(!p.is_hurt(0.0));
        assert_eq!(p.facing, Facing::Right);
    }

    #[test]
    fn test_hurt_window_expires() {
        let mut p = PlayerState::spawn();
        p.hurt_until_ms = 500.0;
        assert!(p.is_hurt(499.9));
        assert!(!p.is_hurt(500.0));
    }
}
