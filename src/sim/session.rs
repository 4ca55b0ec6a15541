//! Game session state machine
//!
//! Owns the active screen, the level index, and the player state. Status
//! transitions are the only way the screen changes, and the physics step only
//! runs while `Playing` — actions arriving in any other status are ignored,
//! so no stray damage or transition events can leak out of a paused frame.

use serde::{Deserialize, Serialize};

use super::level::{self, Level};
use super::player::PlayerState;
use super::tick::{self, StatusEvent, TickInput};
use crate::catalog::CharacterRecord;

/// Which screen is active. Exactly one at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    StartMenu,
    SelectingCharacter,
    Playing,
    GameOver,
    LevelComplete,
    Winner,
}

/// A full game session: status, level progress, and the live player state
#[derive(Debug, Clone)]
pub struct GameSession {
    status: GameStatus,
    level_index: usize,
    player: PlayerState,
    character: Option<CharacterRecord>,
    levels: Vec<Level>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            status: GameStatus::StartMenu,
            level_index: 0,
            player: PlayerState::spawn(),
            character: None,
            levels: level::all(),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    /// The level currently selected by index
    pub fn level(&self) -> &Level {
        &self.levels[self.level_index]
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Read-only snapshot for the renderer
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn character(&self) -> Option<&CharacterRecord> {
        self.character.as_ref()
    }

    /// Camera offset for the given viewport width, derived from the player
    pub fn camera_x(&self, viewport_w: f32) -> f32 {
        tick::camera_x(self.player.pos.x, self.level().width, viewport_w)
    }

    /// StartMenu -> SelectingCharacter, once the catalog has something to show
    pub fn open_character_select(&mut self) {
        if self.status == GameStatus::StartMenu {
            self.status = GameStatus::SelectingCharacter;
        }
    }

    /// Start a run with the chosen character: level 0, fresh spawn
    pub fn start(&mut self, character: CharacterRecord) {
        if !matches!(
            self.status,
            GameStatus::StartMenu | GameStatus::SelectingCharacter
        ) {
            return;
        }
        log::info!("starting run as {}", character.name);
        self.character = Some(character);
        self.level_index = 0;
        self.player = PlayerState::spawn();
        self.status = GameStatus::Playing;
    }

    /// Advance one frame. Runs the physics step only while Playing and
    /// applies whatever transition it emits.
    pub fn frame(&mut self, input: &TickInput) {
        if self.status != GameStatus::Playing {
            return;
        }
        let (next, event) = tick::advance(&self.player, self.level(), input);
        self.player = next;
        match event {
            Some(StatusEvent::LevelComplete) => {
                log::info!("level {} complete", self.level().id);
                self.status = GameStatus::LevelComplete;
            }
            Some(StatusEvent::GameOver) => {
                log::info!("game over on level {}", self.level().id);
                self.status = GameStatus::GameOver;
            }
            None => {}
        }
    }

    /// LevelComplete -> Playing on the next level, or Winner after the last.
    /// Winner leaves the level index untouched.
    pub fn next_level(&mut self) {
        if self.status != GameStatus::LevelComplete {
            return;
        }
        if self.level_index + 1 < self.levels.len() {
            self.level_index += 1;
            self.player = PlayerState::spawn();
            self.status = GameStatus::Playing;
        } else {
            self.status = GameStatus::Winner;
        }
    }

    /// GameOver -> Playing on the same level with a fresh spawn
    pub fn retry(&mut self) {
        if self.status != GameStatus::GameOver {
            return;
        }
        self.player = PlayerState::spawn();
        self.status = GameStatus::Playing;
    }

    /// Back to the start menu from any terminal screen, discarding progress
    pub fn to_menu(&mut self) {
        if matches!(
            self.status,
            GameStatus::GameOver | GameStatus::LevelComplete | GameStatus::Winner
        ) {
            self.status = GameStatus::StartMenu;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn test_character() -> CharacterRecord {
        CharacterRecord {
            id: 25,
            name: "Pikachu".to_string(),
            sprite: "https://example.test/pikachu.gif".to_string(),
        }
    }

    fn playing_session() -> GameSession {
        let mut session = GameSession::new();
        session.start(test_character());
        session
    }

    fn frame_at(now_ms: f64) -> TickInput {
        TickInput {
            now_ms,
            ..Default::default()
        }
    }

    #[test]
    fn test_start_resets_run() {
        let mut session = GameSession::new();
        assert_eq!(session.status(), GameStatus::StartMenu);

        session.open_character_select();
        assert_eq!(session.status(), GameStatus::SelectingCharacter);

        session.start(test_character());
        assert_eq!(session.status(), GameStatus::Playing);
        assert_eq!(session.level_index(), 0);
        assert_eq!(session.player().health, MAX_HEALTH);
        assert_eq!(session.camera_x(900.0), 0.0);
    }

    #[test]
    fn test_frame_inert_outside_playing() {
        let mut session = GameSession::new();
        let before = session.player().clone();
        for i in 0..10 {
            session.frame(&frame_at(i as f64 * 16.0));
        }
        assert_eq!(session.status(), GameStatus::StartMenu);
        assert_eq!(*session.player(), before);
    }

    fn run_until_transition(session: &mut GameSession, limit: usize) {
        let mut now = 0.0;
        for _ in 0..limit {
            session.frame(&frame_at(now));
            now += 16.0;
            if session.status() != GameStatus::Playing {
                return;
            }
        }
        panic!("no transition within {limit} frames");
    }

    #[test]
    fn test_goal_transition_fires_once() {
        let mut session = playing_session();
        // Teleport next to the goal and let the sim carry the player in
        let goal = session.level().goal;
        session.player.pos.x = goal.left() - 40.0;
        session.player.pos.y = goal.top();

        run_until_transition(&mut session, 60);
        assert_eq!(session.status(), GameStatus::LevelComplete);

        // Sitting in the goal box afterwards must not re-fire anything
        let snapshot = session.player().clone();
        session.frame(&frame_at(10_000.0));
        assert_eq!(session.status(), GameStatus::LevelComplete);
        assert_eq!(*session.player(), snapshot);
    }

    #[test]
    fn test_fall_to_game_over() {
        let mut session = playing_session();
        // Walk off the world: drop the player below every platform
        session.player.pos.y = WORLD_HEIGHT + 1.0;

        session.frame(&frame_at(0.0));
        assert_eq!(session.status(), GameStatus::GameOver);
        assert_eq!(session.player().health, 0);
    }

    #[test]
    fn test_retry_keeps_level_index() {
        let mut session = playing_session();
        session.level_index = 2;
        session.player.pos.y = WORLD_HEIGHT + 1.0;
        session.frame(&frame_at(0.0));
        assert_eq!(session.status(), GameStatus::GameOver);

        session.retry();
        assert_eq!(session.status(), GameStatus::Playing);
        assert_eq!(session.level_index(), 2);
        assert_eq!(session.player().health, MAX_HEALTH);
        assert_eq!(session.player().pos.x, SPAWN_X);
    }

    #[test]
    fn test_next_level_advances() {
        let mut session = playing_session();
        session.status = GameStatus::LevelComplete;

        session.next_level();
        assert_eq!(session.status(), GameStatus::Playing);
        assert_eq!(session.level_index(), 1);
        assert_eq!(session.player().health, MAX_HEALTH);
    }

    #[test]
    fn test_winner_on_last_level() {
        let mut session = playing_session();
        let last = session.levels().len() - 1;
        session.level_index = last;
        session.status = GameStatus::LevelComplete;

        session.next_level();
        assert_eq!(session.status(), GameStatus::Winner);
        assert_eq!(session.level_index(), last);
    }

    #[test]
    fn test_menu_discards_progress() {
        let mut session = playing_session();
        session.level_index = 3;
        session.status = GameStatus::Winner;

        session.to_menu();
        assert_eq!(session.status(), GameStatus::StartMenu);

        // A new run starts over from level 0
        session.start(test_character());
        assert_eq!(session.level_index(), 0);
    }

    #[test]
    fn test_actions_ignored_in_wrong_status() {
        let mut session = playing_session();
        session.next_level();
        session.retry();
        session.to_menu();
        session.open_character_select();
        assert_eq!(session.status(), GameStatus::Playing);
        assert_eq!(session.level_index(), 0);
    }
}
