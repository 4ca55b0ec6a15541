//! Level catalog
//!
//! Five fixed levels, one per room of the house. Levels are immutable data:
//! the simulation never mutates them, it only reads geometry in catalog
//! order.

use serde::Serialize;

use super::rect::Rect;

/// Behavior modifier applied when the player lands on a platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SurfaceKind {
    #[default]
    Normal,
    /// Relaunches the player upward on contact
    Bouncy,
    /// Reduced friction, slight acceleration while sliding across
    Slippery,
}

/// A static platform the player can land on
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Platform {
    pub rect: Rect,
    pub surface: SurfaceKind,
}

impl Platform {
    const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            surface: SurfaceKind::Normal,
        }
    }

    const fn with_surface(x: f32, y: f32, width: f32, height: f32, surface: SurfaceKind) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            surface,
        }
    }
}

/// A static hazard that damages the player on contact
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Obstacle {
    pub rect: Rect,
    pub damage: i32,
    pub label: &'static str,
}

impl Obstacle {
    const fn new(x: f32, y: f32, width: f32, height: f32, damage: i32, label: &'static str) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            damage,
            label,
        }
    }
}

/// An immutable level definition, selected by index from the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Level {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub theme: &'static str,
    /// Background gradient stops as hex colors, top then bottom
    pub background: [&'static str; 2],
    /// World width in pixels; the camera and the player are clamped to it
    pub width: f32,
    pub platforms: Vec<Platform>,
    pub obstacles: Vec<Obstacle>,
    pub goal: Rect,
}

/// The full ordered level catalog
pub fn all() -> Vec<Level> {
    vec![
        Level {
            id: 1,
            name: "The Kitchen",
            description: "Watch out for the knives and the fire!",
            theme: "kitchen",
            background: ["#ff9a9e", "#fad0c4"],
            width: 3000.0,
            platforms: vec![
                Platform::new(0.0, 550.0, 600.0, 50.0),
                Platform::new(700.0, 450.0, 200.0, 30.0),
                Platform::new(1000.0, 350.0, 300.0, 30.0),
                Platform::new(1400.0, 450.0, 200.0, 30.0),
                Platform::new(1700.0, 300.0, 400.0, 30.0),
                Platform::new(2200.0, 450.0, 300.0, 30.0),
                Platform::new(2600.0, 550.0, 400.0, 50.0),
            ],
            obstacles: vec![
                Obstacle::new(800.0, 560.0, 50.0, 40.0, 20, "🔥"),
                Obstacle::new(1100.0, 310.0, 40.0, 40.0, 15, "🔪"),
                Obstacle::new(1800.0, 260.0, 40.0, 40.0, 15, "🔪"),
                Obstacle::new(2300.0, 410.0, 50.0, 40.0, 25, "🧯"),
            ],
            goal: Rect::new(2800.0, 450.0, 60.0, 100.0),
        },
        Level {
            id: 2,
            name: "The Bathroom",
            description: "Slippery floors and bubbles everywhere!",
            theme: "bathroom",
            background: ["#a1c4fd", "#c2e9fb"],
            width: 3000.0,
            platforms: vec![
                Platform::new(0.0, 550.0, 500.0, 50.0),
                Platform::with_surface(600.0, 400.0, 250.0, 30.0, SurfaceKind::Slippery),
                Platform::new(950.0, 300.0, 200.0, 30.0),
                Platform::with_surface(1250.0, 450.0, 300.0, 30.0, SurfaceKind::Slippery),
                Platform::new(1650.0, 350.0, 250.0, 30.0),
                Platform::new(2000.0, 450.0, 200.0, 30.0),
                Platform::new(2400.0, 550.0, 600.0, 50.0),
            ],
            obstacles: vec![
                Obstacle::new(700.0, 360.0, 40.0, 40.0, 10, "🧼"),
                Obstacle::new(1000.0, 260.0, 40.0, 40.0, 10, "🧼"),
                Obstacle::new(1400.0, 410.0, 60.0, 60.0, 15, "🫧"),
                Obstacle::new(1750.0, 310.0, 60.0, 60.0, 15, "🫧"),
            ],
            goal: Rect::new(2850.0, 450.0, 60.0, 100.0),
        },
        Level {
            id: 3,
            name: "The Bedroom",
            description: "Beware of the flying pillows!",
            theme: "bedroom",
            background: ["#667eea", "#764ba2"],
            width: 3500.0,
            platforms: vec![
                Platform::new(0.0, 550.0, 400.0, 50.0),
                Platform::new(500.0, 400.0, 300.0, 40.0),
                Platform::with_surface(900.0, 300.0, 300.0, 40.0, SurfaceKind::Bouncy),
                Platform::new(1300.0, 450.0, 300.0, 40.0),
                Platform::with_surface(1700.0, 350.0, 400.0, 40.0, SurfaceKind::Bouncy),
                Platform::new(2200.0, 450.0, 300.0, 40.0),
                Platform::new(2700.0, 300.0, 300.0, 40.0),
                Platform::new(3100.0, 550.0, 400.0, 50.0),
            ],
            obstacles: vec![
                Obstacle::new(600.0, 350.0, 50.0, 50.0, 15, "🧸"),
                Obstacle::new(1400.0, 400.0, 50.0, 50.0, 15, "☁️"),
                Obstacle::new(2300.0, 400.0, 50.0, 50.0, 15, "☁️"),
                Obstacle::new(2800.0, 250.0, 50.0, 50.0, 15, "🧸"),
            ],
            goal: Rect::new(3350.0, 450.0, 60.0, 100.0),
        },
        Level {
            id: 4,
            name: "The Living Room",
            description: "Dodge the toys and jump over the furniture.",
            theme: "livingroom",
            background: ["#f6d365", "#fda085"],
            width: 3500.0,
            platforms: vec![
                Platform::new(0.0, 550.0, 400.0, 50.0),
                Platform::new(500.0, 450.0, 400.0, 30.0),
                Platform::new(1000.0, 350.0, 400.0, 30.0),
                Platform::new(1500.0, 450.0, 400.0, 30.0),
                Platform::new(2000.0, 350.0, 400.0, 30.0),
                Platform::new(2500.0, 450.0, 400.0, 30.0),
                Platform::new(3100.0, 550.0, 400.0, 50.0),
            ],
            obstacles: vec![
                Obstacle::new(700.0, 400.0, 40.0, 40.0, 20, "🕹️"),
                Obstacle::new(1200.0, 300.0, 40.0, 40.0, 20, "🚂"),
                Obstacle::new(1700.0, 400.0, 40.0, 40.0, 20, "🕹️"),
                Obstacle::new(2200.0, 300.0, 40.0, 40.0, 20, "🚂"),
            ],
            goal: Rect::new(3300.0, 450.0, 60.0, 100.0),
        },
        Level {
            id: 5,
            name: "The Garden",
            description: "The final stretch! Dodge the rocks and reach the end.",
            theme: "garden",
            background: ["#d4fc79", "#96e6a1"],
            width: 4000.0,
            platforms: vec![
                Platform::new(0.0, 550.0, 500.0, 50.0),
                Platform::new(600.0, 400.0, 300.0, 30.0),
                Platform::new(1000.0, 300.0, 300.0, 30.0),
                Platform::new(1400.0, 450.0, 300.0, 30.0),
                Platform::new(1800.0, 350.0, 300.0, 30.0),
                Platform::new(2200.0, 450.0, 300.0, 30.0),
                Platform::new(2600.0, 300.0, 300.0, 30.0),
                Platform::new(3000.0, 400.0, 300.0, 30.0),
                Platform::new(3500.0, 550.0, 500.0, 50.0),
            ],
            obstacles: vec![
                Obstacle::new(700.0, 350.0, 50.0, 50.0, 30, "🪨"),
                Obstacle::new(1100.0, 250.0, 50.0, 50.0, 30, "🌿"),
                Obstacle::new(1500.0, 400.0, 50.0, 50.0, 30, "🪨"),
                Obstacle::new(1900.0, 300.0, 50.0, 50.0, 30, "🌿"),
                Obstacle::new(2700.0, 250.0, 50.0, 50.0, 30, "🪨"),
            ],
            goal: Rect::new(3800.0, 450.0, 60.0, 100.0),
        },
    ]
}
