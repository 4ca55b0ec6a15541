//! Homebound entry point
//!
//! Sets up logging, fetches the character roster, then runs the terminal
//! frame loop at roughly 60 Hz. Catalog lookups only happen from the menu
//! screens, so network latency never stalls a physics frame.

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use homebound::catalog::{CharacterCatalog, CharacterRecord};
use homebound::sim::{GameSession, GameStatus};
use homebound::ui::{InputTracker, Screen};

/// Target frame duration (~60 FPS)
const FRAME: Duration = Duration::from_millis(16);

fn main() -> io::Result<()> {
    env_logger::init();
    let runtime = tokio::runtime::Runtime::new()?;

    let catalog = CharacterCatalog::new();
    log::info!("fetching character roster...");
    let roster = runtime.block_on(catalog.list_defaults());
    log::info!("{} characters available", roster.len());

    terminal::enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
    let result = run(&runtime, &catalog, roster);
    execute!(io::stdout(), cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(
    runtime: &tokio::runtime::Runtime,
    catalog: &CharacterCatalog,
    roster: Vec<CharacterRecord>,
) -> io::Result<()> {
    let mut session = GameSession::new();
    let mut screen = Screen::new()?;
    let mut tracker = InputTracker::new();
    let mut selected = 0usize;
    let mut search: Option<String> = None;
    let start = Instant::now();

    loop {
        let frame_start = Instant::now();

        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => match session.status() {
                    GameStatus::StartMenu | GameStatus::SelectingCharacter => {
                        if search.is_some() {
                            match key.code {
                                KeyCode::Esc => search = None,
                                KeyCode::Enter => {
                                    let query = search.take().unwrap_or_default();
                                    if !query.is_empty() {
                                        // Blocking here is fine: nothing ticks in the menu
                                        if let Some(record) =
                                            runtime.block_on(catalog.search(&query))
                                        {
                                            tracker.clear();
                                            session.start(record);
                                        }
                                    }
                                }
                                KeyCode::Backspace => {
                                    if let Some(buffer) = search.as_mut() {
                                        buffer.pop();
                                    }
                                }
                                KeyCode::Char(c) => {
                                    if let Some(buffer) = search.as_mut() {
                                        buffer.push(c);
                                    }
                                }
                                _ => {}
                            }
                        } else {
                            match key.code {
                                KeyCode::Char('q') => return Ok(()),
                                KeyCode::Char('/') => search = Some(String::new()),
                                KeyCode::Up => {
                                    session.open_character_select();
                                    selected = selected.saturating_sub(1);
                                }
                                KeyCode::Down => {
                                    session.open_character_select();
                                    if selected + 1 < roster.len() {
                                        selected += 1;
                                    }
                                }
                                KeyCode::Enter => {
                                    if let Some(record) = roster.get(selected) {
                                        tracker.clear();
                                        session.start(record.clone());
                                    }
                                }
                                _ => {}
                            }
                        }
                    }
                    GameStatus::Playing => match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        code => tracker.key_down(code),
                    },
                    GameStatus::GameOver => match key.code {
                        KeyCode::Char('r') => {
                            tracker.clear();
                            session.retry();
                        }
                        KeyCode::Char('m') => session.to_menu(),
                        KeyCode::Char('q') => return Ok(()),
                        _ => {}
                    },
                    GameStatus::LevelComplete => match key.code {
                        KeyCode::Char('n') => {
                            tracker.clear();
                            session.next_level();
                        }
                        KeyCode::Char('m') => session.to_menu(),
                        KeyCode::Char('q') => return Ok(()),
                        _ => {}
                    },
                    GameStatus::Winner => match key.code {
                        KeyCode::Char('m') => session.to_menu(),
                        KeyCode::Char('q') => return Ok(()),
                        _ => {}
                    },
                },
                Event::Resize(cols, rows) => screen.resize(cols, rows),
                _ => {}
            }
        }

        let now_ms = start.elapsed().as_secs_f64() * 1000.0;
        match session.status() {
            GameStatus::Playing => {
                let input = tracker.frame_input(now_ms);
                session.frame(&input);
                screen.draw_playing(&session, now_ms)?;
            }
            GameStatus::StartMenu | GameStatus::SelectingCharacter => {
                screen.draw_menu(&roster, selected, search.as_deref())?;
            }
            status => {
                // Terminal screens keep the last world frame underneath
                screen.draw_playing(&session, now_ms)?;
                screen.draw_overlay(status, session.level().name)?;
            }
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}
