//! Per-frame update step
//!
//! `advance` is a pure function: previous player state, the current level,
//! and the frame's input snapshot go in; the next player state and an
//! optional status event come out. No hidden mutable context, which keeps
//! every frame unit-testable and replayable.
//!
//! Integration is explicit Euler at one step per animation frame with no
//! delta normalization; the game is frame-rate dependent on purpose.

use serde::{Deserialize, Serialize};

use super::level::{Level, SurfaceKind};
use super::player::{Facing, PlayerState};
use crate::consts::*;

/// Input snapshot for a single frame
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TickInput {
    /// Move-left action held
    pub left: bool,
    /// Move-right action held
    pub right: bool,
    /// Jump action held
    pub jump: bool,
    /// Wall-clock timestamp of this frame in milliseconds. Drives the
    /// invulnerability window; tests pass explicit values.
    pub now_ms: f64,
}

/// Transition request emitted by the update step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusEvent {
    /// Player box overlapped the level goal
    LevelComplete,
    /// Health reached zero
    GameOver,
}

/// Advance the player by one frame.
///
/// Step order matters: it defines the tie-break for simultaneous collisions.
/// In particular the death check runs last, so a fall-death on the same frame
/// as a goal touch wins over the level-complete event.
pub fn advance(prev: &PlayerState, level: &Level, input: &TickInput) -> (PlayerState, Option<StatusEvent>) {
    let mut p = prev.clone();

    // 1. Horizontal intent. Left wins over right when both are held.
    if input.left {
        p.vel.x = -MOVE_SPEED;
        p.facing = Facing::Left;
    } else if input.right {
        p.vel.x = MOVE_SPEED;
        p.facing = Facing::Right;
    } else {
        // Exponential decay, never an instant stop
        p.vel.x *= FRICTION;
    }

    // 2. Jump intent, only from the ground
    if input.jump && !p.airborne {
        p.vel.y = JUMP_FORCE;
        p.airborne = true;
    }

    // 3. Integrate. Gravity is unconditional; landing re-zeroes vy below.
    p.vel.y += GRAVITY;
    p.pos += p.vel;

    // 4. Platform resolution, in catalog order. A landing only counts while
    // moving downward (or resting) and while the bottom edge sits inside the
    // platform's top band; the band extends LANDING_BAND below the surface so
    // a fast fall can't tunnel through in one step. Later platforms may
    // override an earlier platform's surface effect within the same frame.
    for plat in &level.platforms {
        let bottom = p.pos.y + p.size.y;
        let horizontal = p.pos.x + p.size.x > plat.rect.left() && p.pos.x < plat.rect.right();
        let in_band = bottom > plat.rect.top() && bottom < plat.rect.bottom() + LANDING_BAND;
        if horizontal && in_band && p.vel.y >= 0.0 {
            p.pos.y = plat.rect.top() - p.size.y;
            p.vel.y = 0.0;
            p.airborne = false;

            match plat.surface {
                SurfaceKind::Bouncy => {
                    // Immediate relaunch, not a resting state
                    p.vel.y = JUMP_FORCE * BOUNCE_FACTOR;
                    p.airborne = true;
                }
                SurfaceKind::Slippery => {
                    p.vel.x *= SLIP_ACCEL;
                }
                SurfaceKind::Normal => {}
            }
        }
    }

    // 5. Obstacle resolution. First hit outside the invulnerability window
    // applies damage and knockback and opens the window; hits inside it are
    // suppressed. Re-overlap after the window closes damages again.
    for obs in &level.obstacles {
        if p.bounds().overlaps(&obs.rect) && !p.is_hurt(input.now_ms) {
            p.health -= obs.damage;
            p.hurt_until_ms = input.now_ms + HURT_WINDOW_MS;

            // Knockback: reverse and double the current speed, or a fixed
            // kick away from the facing direction when standing still
            let repulse = -p.vel.x * 2.0;
            p.vel.x = if repulse != 0.0 {
                repulse
            } else {
                match p.facing {
                    Facing::Left => KNOCKBACK_SPEED,
                    Facing::Right => -KNOCKBACK_SPEED,
                }
            };
            p.vel.y = HURT_LIFT;
        }
    }

    // 6. Boundary clamp and fall death
    p.pos.x = p.pos.x.clamp(0.0, level.width - p.size.x);
    if p.pos.y > WORLD_HEIGHT {
        p.health = 0;
    }

    // 7. Goal check
    let mut event = None;
    if p.bounds().overlaps(&level.goal) {
        event = Some(StatusEvent::LevelComplete);
    }

    // 8. Death check, last so it overrides a same-frame goal touch
    if p.health <= 0 {
        p.health = 0;
        event = Some(StatusEvent::GameOver);
    }
    p.health = p.health.min(MAX_HEALTH);

    (p, event)
}

/// Horizontal camera offset for a viewport of the given width. Derived from
/// the player position every frame, never stored as independent state.
pub fn camera_x(player_x: f32, level_width: f32, viewport_w: f32) -> f32 {
    let target = player_x - viewport_w / 3.0;
    target.min(level_width - viewport_w).max(0.0)
}
