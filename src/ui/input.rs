//! Key events to logical held-state flags
//!
//! The update step wants "is this action held right now", but terminals only
//! deliver key-down (plus auto-repeat) reliably. Each press arms a short hold
//! counter per action that decays once per frame; auto-repeat keeps it
//! topped up while the key stays down. Arrows and WASD/space feed the same
//! flags, so two physical sources can drive one logical action.

use crossterm::event::KeyCode;

use crate::sim::TickInput;

/// Frames an action stays held after its last key event (~130ms at 60Hz,
/// comfortably above typical terminal auto-repeat intervals)
const HOLD_FRAMES: u8 = 8;

/// Tracks logical held-state for the three movement actions
#[derive(Debug, Default)]
pub struct InputTracker {
    left: u8,
    right: u8,
    jump: u8,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key event. Unrecognized keys are ignored.
    pub fn key_down(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('a') => self.left = HOLD_FRAMES,
            KeyCode::Right | KeyCode::Char('d') => self.right = HOLD_FRAMES,
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char(' ') => self.jump = HOLD_FRAMES,
            _ => {}
        }
    }

    /// Snapshot the current flags for one frame, then age the counters
    pub fn frame_input(&mut self, now_ms: f64) -> TickInput {
        let input = TickInput {
            left: self.left > 0,
            right: self.right > 0,
            jump: self.jump > 0,
            now_ms,
        };
        self.left = self.left.saturating_sub(1);
        self.right = self.right.saturating_sub(1);
        self.jump = self.jump.saturating_sub(1);
        input
    }

    /// Drop all held state (used when leaving the Playing screen)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_holds_then_decays() {
        let mut tracker = InputTracker::new();
        tracker.key_down(KeyCode::Left);

        for i in 0..HOLD_FRAMES {
            let input = tracker.frame_input(i as f64 * 16.0);
            assert!(input.left, "released too early at frame {i}");
            assert!(!input.right);
        }
        let input = tracker.frame_input(0.0);
        assert!(!input.left);
    }

    #[test]
    fn test_two_sources_one_flag() {
        let mut tracker = InputTracker::new();
        tracker.key_down(KeyCode::Char('w'));
        assert!(tracker.frame_input(0.0).jump);

        tracker.clear();
        tracker.key_down(KeyCode::Char(' '));
        assert!(tracker.frame_input(0.0).jump);
    }

    #[test]
    fn test_clear_releases_everything() {
        let mut tracker = InputTracker::new();
        tracker.key_down(KeyCode::Left);
        tracker.key_down(KeyCode::Up);
        tracker.clear();
        let input = tracker.frame_input(0.0);
        assert!(!input.left && !input.jump);
    }
}
