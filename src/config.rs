/// Tuning parameters for the simulation.
///
/// Every field has a default matching the stock game; a JSON file may
/// override any subset of them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ── Stock tuning ─────────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;
pub const ROAD_WIDTH: i32 = 400;
pub const LANE_COUNT: u32 = 4;

pub const PLAYER_Y: i32 = 450;
pub const PLAYER_WIDTH: i32 = 50;
pub const PLAYER_HEIGHT: i32 = 80;
pub const PLAYER_SPEED: i32 = 8;
pub const PLAYER_START_LANE: u32 = 1;

pub const INITIAL_SPEED: i32 = 5;
pub const MAX_SPEED: i32 = 15;
/// Score interval at which the speed step function is re-evaluated.
pub const SPEED_STEP_SCORE: u32 = 500;
pub const EXIT_REWARD: u32 = 10;

/// Spawn chance per tick is `1 / (SPAWN_BASE - 2 * speed)`.
pub const SPAWN_BASE: i32 = 60;
pub const SPAWN_Y: i32 = -100;

pub const PARTICLE_COUNT: usize = 100;
pub const EXPLOSION_DURATION: u32 = 60;
pub const GRAVITY: f64 = 0.1;
pub const SHRINK_FACTOR: f64 = 0.97;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: i32,
    pub screen_height: i32,
    pub road_width: i32,
    pub lane_count: u32,
    pub player_y: i32,
    pub player_width: i32,
    pub player_height: i32,
    pub player_speed: i32,
    pub player_start_lane: u32,
    pub initial_speed: i32,
    pub max_speed: i32,
    pub speed_step_score: u32,
    pub exit_reward: u32,
    pub spawn_base: i32,
    pub spawn_y: i32,
    pub particle_count: usize,
    pub explosion_duration: u32,
    pub gravity: f64,
    pub shrink_factor: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            road_width: ROAD_WIDTH,
            lane_count: LANE_COUNT,
            player_y: PLAYER_Y,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_speed: PLAYER_SPEED,
            player_start_lane: PLAYER_START_LANE,
            initial_speed: INITIAL_SPEED,
            max_speed: MAX_SPEED,
            speed_step_score: SPEED_STEP_SCORE,
            exit_reward: EXIT_REWARD,
            spawn_base: SPAWN_BASE,
            spawn_y: SPAWN_Y,
            particle_count: PARTICLE_COUNT,
            explosion_duration: EXPLOSION_DURATION,
            gravity: GRAVITY,
            shrink_factor: SHRINK_FACTOR,
        }
    }
}

impl GameConfig {
    /// Left edge of the paved road.
    pub fn road_left(&self) -> i32 {
        (self.screen_width - self.road_width) / 2
    }

    /// Right edge of the paved road (exclusive).
    pub fn road_right(&self) -> i32 {
        self.road_left() + self.road_width
    }

    pub fn lane_width(&self) -> i32 {
        self.road_width / self.lane_count.max(1) as i32
    }

    /// Parse a (possibly partial) JSON object and validate the result.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject tunings that would break the simulation's arithmetic bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid {
                field,
                reason: reason.into(),
            })
        }

        if self.screen_width <= 0 || self.screen_height <= 0 {
            return invalid("screen_width", "screen dimensions must be positive");
        }
        if self.lane_count == 0 {
            return invalid("lane_count", "at least one lane is required");
        }
        if self.road_width <= 0 || self.road_width > self.screen_width {
            return invalid(
                "road_width",
                format!("must be within 1..={}", self.screen_width),
            );
        }
        if self.player_width <= 0 || self.player_width > self.lane_width() {
            return invalid(
                "player_width",
                format!("car must fit in a {}-wide lane", self.lane_width()),
            );
        }
        if self.player_start_lane >= self.lane_count {
            return invalid("player_start_lane", "lane index out of range");
        }
        if self.initial_speed <= 0 || self.max_speed < self.initial_speed {
            return invalid("max_speed", "need 0 < initial_speed <= max_speed");
        }
        if self.spawn_base - 2 * self.max_speed <= 0 {
            return invalid(
                "spawn_base",
                format!(
                    "spawn denominator {} - 2 * {} must stay positive",
                    self.spawn_base, self.max_speed
                ),
            );
        }
        if self.speed_step_score == 0 {
            return invalid("speed_step_score", "must be positive");
        }
        if self.explosion_duration == 0 {
            return invalid("explosion_duration", "must be positive");
        }
        if !(self.shrink_factor > 0.0 && self.shrink_factor <= 1.0) {
            return invalid("shrink_factor", "must be within (0, 1]");
        }
        Ok(())
    }
}
