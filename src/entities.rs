/// All game entity types — pure data, no logic.

use crate::config::GameConfig;

// ── Colours ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Fixed palette obstacle colours are drawn from.
pub const OBSTACLE_PALETTE: [Rgba; 5] = [
    Rgba::opaque(0, 0, 255),   // blue
    Rgba::opaque(255, 0, 255), // magenta
    Rgba::opaque(0, 255, 255), // cyan
    Rgba::opaque(255, 200, 0), // orange
    Rgba::opaque(0, 255, 0),   // green
];

pub const PLAYER_COLOR: Rgba = Rgba::opaque(255, 0, 0);

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in world pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Strict overlap: rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerCar {
    /// Left edge; always within the paved road.
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub speed: i32,
}

impl PlayerCar {
    pub fn bounds(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObstacleKind {
    Sedan,
    Truck,
    Sport,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [
        ObstacleKind::Sedan,
        ObstacleKind::Truck,
        ObstacleKind::Sport,
    ];

    /// `(width, height)` in world pixels.
    pub fn dimensions(self) -> (i32, i32) {
        match self {
            ObstacleKind::Sedan => (50, 80),
            ObstacleKind::Truck => (60, 100),
            ObstacleKind::Sport => (45, 70),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub lane: u32,
    pub x: i32,
    pub y: i32,
    pub kind: ObstacleKind,
    pub color: Rgba,
}

impl Obstacle {
    pub fn bounds(&self) -> Rect {
        let (width, height) = self.kind.dimensions();
        Rect {
            x: self.x,
            y: self.y,
            width,
            height,
        }
    }
}

// ── Explosion ─────────────────────────────────────────────────────────────────

/// One explosion fragment.  Positions are floats so gravity stays smooth.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    /// Remaining ticks; the particle is dropped once this reaches zero.
    pub life: i32,
    pub color: Rgba,
}

/// The single active burst, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Explosion {
    pub particles: Vec<Particle>,
    /// Ticks until the whole burst is retired.
    pub timer: u32,
}

impl Explosion {
    pub fn is_finished(&self) -> bool {
        self.timer == 0
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Session {
    Running,
    /// Gameplay frozen while the burst plays out.
    Exploding,
    GameOver,
}

/// Per-tick movement flags from the input layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub config: GameConfig,
    pub player: PlayerCar,
    pub obstacles: Vec<Obstacle>,
    pub explosion: Explosion,
    pub score: u32,
    /// Best score of this process; survives restarts.
    pub high_score: u32,
    /// Set when the last round strictly beat the previous high score.
    pub new_high_score: bool,
    /// Pixels obstacles advance per tick.
    pub speed: i32,
    pub session: Session,
    /// Ticks since the session started.
    pub frame: u64,
}

// ── Render snapshot ───────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct ObstacleView {
    pub bounds: Rect,
    pub kind: ObstacleKind,
    pub color: Rgba,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleView {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: Rgba,
    /// Fade factor in `[0, 1]`.
    pub alpha: f64,
}

/// Read-only view handed to a renderer after each tick.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSnapshot {
    pub screen_width: i32,
    pub screen_height: i32,
    pub road_left: i32,
    pub road_right: i32,
    pub lane_count: u32,
    pub player: Rect,
    pub obstacles: Vec<ObstacleView>,
    pub particles: Vec<ParticleView>,
    pub score: u32,
    pub high_score: u32,
    pub new_high_score: bool,
    pub speed: i32,
    /// `speed / max_speed`, for the speedometer bar.
    pub speed_fraction: f64,
    /// 0..=5 stars shown on the game-over screen.
    pub stars: u32,
    pub session: Session,
    pub frame: u64,
}
