//! Terminal renderer
//!
//! Maps world pixels onto terminal cells and draws one frame from read-only
//! snapshots of the session. The world is 600px tall; a cell covers
//! PX_PER_COL x PX_PER_ROW pixels, so the viewport width in world pixels
//! follows from the terminal width.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};

use crate::consts::MAX_HEALTH;
use crate::sim::{GameSession, GameStatus, SurfaceKind};
use crate::CharacterRecord;

/// World pixels per terminal column
const PX_PER_COL: f32 = 12.0;
/// World pixels per terminal row
const PX_PER_ROW: f32 = 20.0;

pub struct Screen {
    out: Stdout,
    cols: u16,
    rows: u16,
}

impl Screen {
    pub fn new() -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Self {
            out: io::stdout(),
            cols,
            rows,
        })
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    /// Viewport width in world pixels, for the camera derivation
    pub fn viewport_width(&self) -> f32 {
        self.cols as f32 * PX_PER_COL
    }

    /// Draw the Playing screen: world strip, then the HUD on top
    pub fn draw_playing(&mut self, session: &GameSession, now_ms: f64) -> io::Result<()> {
        let camera = session.camera_x(self.viewport_width());
        let level = session.level();
        let bg = hex_color(level.background[0]).unwrap_or(Color::Black);

        queue!(self.out, SetBackgroundColor(bg), Clear(ClearType::All))?;

        for plat in &level.platforms {
            let color = match plat.surface {
                SurfaceKind::Normal => Color::DarkGrey,
                SurfaceKind::Bouncy => Color::Magenta,
                SurfaceKind::Slippery => Color::Cyan,
            };
            self.fill_rect(
                plat.rect.left() - camera,
                plat.rect.top(),
                plat.rect.size.x,
                plat.rect.size.y,
                color,
                '=',
            )?;
        }

        for obs in &level.obstacles {
            let glyph = obs.label.chars().next().unwrap_or('!');
            self.fill_rect(
                obs.rect.left() - camera,
                obs.rect.top(),
                obs.rect.size.x,
                obs.rect.size.y,
                Color::Red,
                glyph,
            )?;
        }

        let goal = level.goal;
        self.fill_rect(
            goal.left() - camera,
            goal.top(),
            goal.size.x,
            goal.size.y,
            Color::Yellow,
            '⚑',
        )?;

        let player = session.player();
        let player_color = if player.is_hurt(now_ms) {
            Color::DarkRed
        } else {
            Color::White
        };
        self.fill_rect(
            player.pos.x - camera,
            player.pos.y,
            player.size.x,
            player.size.y,
            player_color,
            '@',
        )?;

        self.draw_hud(session)?;
        self.out.flush()
    }

    fn draw_hud(&mut self, session: &GameSession) -> io::Result<()> {
        let player = session.player();
        let level = session.level();

        // Health bar, 20 cells wide
        let filled = ((player.health.max(0) * 20) / MAX_HEALTH) as usize;
        let bar: String = "█".repeat(filled) + &"░".repeat(20 - filled);
        queue!(
            self.out,
            MoveTo(1, 0),
            SetBackgroundColor(Color::Black),
            SetForegroundColor(Color::Green),
            Print(format!("HP {bar} {:>3}", player.health)),
        )?;

        let runner = session
            .character()
            .map(|c| c.name.as_str())
            .unwrap_or("???");
        let title = format!("{} - Level {}: {}", runner, level.id, level.name);
        let col = self.cols.saturating_sub(title.len() as u16 + 1);
        queue!(
            self.out,
            MoveTo(col, 0),
            SetForegroundColor(Color::White),
            Print(title),
            ResetColor,
        )?;
        Ok(())
    }

    /// Fill a world-space rectangle (already camera-shifted) with a glyph
    fn fill_rect(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
        glyph: char,
    ) -> io::Result<()> {
        let col0 = (x / PX_PER_COL).floor().max(0.0) as i32;
        let col1 = ((x + w) / PX_PER_COL).ceil() as i32;
        let row0 = (y / PX_PER_ROW).floor().max(0.0) as i32;
        let row1 = ((y + h) / PX_PER_ROW).ceil() as i32;

        queue!(self.out, SetForegroundColor(color))?;
        for row in row0..row1 {
            if row < 0 || row >= self.rows as i32 {
                continue;
            }
            for col in col0..col1 {
                if col < 0 || col >= self.cols as i32 {
                    continue;
                }
                queue!(
                    self.out,
                    MoveTo(col as u16, row as u16),
                    Print(glyph),
                )?;
            }
        }
        Ok(())
    }

    /// Start menu / character select: roster, search box, key help
    pub fn draw_menu(
        &mut self,
        roster: &[CharacterRecord],
        selected: usize,
        search: Option<&str>,
    ) -> io::Result<()> {
        queue!(
            self.out,
            SetBackgroundColor(Color::Black),
            Clear(ClearType::All),
            MoveTo(2, 1),
            SetForegroundColor(Color::Yellow),
            Print("HOMEBOUND"),
            MoveTo(2, 2),
            SetForegroundColor(Color::Grey),
            Print("pick your runner"),
        )?;

        if roster.is_empty() {
            queue!(
                self.out,
                MoveTo(4, 4),
                SetForegroundColor(Color::DarkGrey),
                Print("(catalog unavailable - search by name below)"),
            )?;
        }
        for (i, record) in roster.iter().enumerate() {
            let marker = if i == selected { "▶" } else { " " };
            let color = if i == selected {
                Color::White
            } else {
                Color::Grey
            };
            queue!(
                self.out,
                MoveTo(4, 4 + i as u16),
                SetForegroundColor(color),
                Print(format!("{marker} {:>3}  {}", record.id, record.name)),
            )?;
        }

        let help_row = 5 + roster.len() as u16;
        match search {
            Some(buffer) => queue!(
                self.out,
                MoveTo(2, help_row),
                SetForegroundColor(Color::Cyan),
                Print(format!("search: {buffer}_  (enter: go, esc: cancel)")),
            )?,
            None => queue!(
                self.out,
                MoveTo(2, help_row),
                SetForegroundColor(Color::DarkGrey),
                Print("↑/↓ select  enter start  / search  q quit"),
            )?,
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    /// Full-screen overlay for the terminal statuses
    pub fn draw_overlay(&mut self, status: GameStatus, level_name: &str) -> io::Result<()> {
        let (headline, help) = match status {
            GameStatus::GameOver => ("GAME OVER", "r retry  m menu  q quit"),
            GameStatus::LevelComplete => ("LEVEL COMPLETE!", "n next level  m menu  q quit"),
            GameStatus::Winner => ("YOU MADE IT HOME!", "m menu  q quit"),
            _ => return Ok(()),
        };
        let row = self.rows / 2;
        let col = self.cols.saturating_sub(headline.len() as u16) / 2;
        queue!(
            self.out,
            MoveTo(col, row),
            SetBackgroundColor(Color::Black),
            SetForegroundColor(Color::Yellow),
            Print(headline),
            MoveTo(self.cols.saturating_sub(level_name.len() as u16) / 2, row + 1),
            SetForegroundColor(Color::Grey),
            Print(level_name),
            MoveTo(self.cols.saturating_sub(help.len() as u16) / 2, row + 2),
            SetForegroundColor(Color::DarkGrey),
            Print(help),
            ResetColor,
        )?;
        self.out.flush()
    }
}

/// Parse a `#rrggbb` hex color
fn hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb { r, g, b })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert_eq!(
            hex_color("#ff9a9e"),
            Some(Color::Rgb {
                r: 0xff,
                g: 0x9a,
                b: 0x9e
            })
        );
        assert_eq!(hex_color("ff9a9e"), None);
        assert_eq!(hex_color("#zzzzzz"), None);
    }
}
