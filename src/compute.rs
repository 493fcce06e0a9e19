/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, a random source) and returns a brand-new
/// `GameState`.  Side effects are limited to the injected random source and
/// log output.

use crate::config::GameConfig;
use crate::entities::{
    GameState, Obstacle, ObstacleKind, ObstacleView, ParticleView, PlayerCar, RenderSnapshot,
    Session, TickInput, OBSTACLE_PALETTE,
};
use crate::explosion::{advance_explosion, create_explosion, particle_alpha};
use crate::random::RandomSource;

/// Score per star on the game-over screen.
const SCORE_PER_STAR: u32 = 1000;
const MAX_STARS: u32 = 5;

// ── Lanes ────────────────────────────────────────────────────────────────────

/// Horizontal centre of `lane`.
pub fn lane_center(config: &GameConfig, lane: u32) -> i32 {
    let lane_width = config.lane_width();
    config.road_left() + lane as i32 * lane_width + lane_width / 2
}

/// Left edge of an obstacle placed in `lane`.
pub fn lane_x(config: &GameConfig, lane: u32) -> i32 {
    lane_center(config, lane) - ObstacleKind::Sedan.dimensions().0 / 2
}

fn player_bounds_x(config: &GameConfig) -> (i32, i32) {
    (config.road_left(), config.road_right() - config.player_width)
}

// ── Difficulty ───────────────────────────────────────────────────────────────

/// Speed step function: one extra pixel per tick every `speed_step_score`
/// points, saturating at `max_speed`.
pub fn speed_for_score(config: &GameConfig, score: u32) -> i32 {
    let steps = (score / config.speed_step_score) as i32;
    (config.initial_speed + steps).min(config.max_speed)
}

/// Denominator of the per-tick spawn chance; never below 1.
pub fn spawn_denominator(config: &GameConfig, speed: i32) -> u32 {
    (config.spawn_base - 2 * speed).max(1) as u32
}

pub fn star_rating(score: u32) -> u32 {
    (score / SCORE_PER_STAR).min(MAX_STARS)
}

pub fn speed_fraction(state: &GameState) -> f64 {
    (state.speed as f64 / state.config.max_speed as f64).clamp(0.0, 1.0)
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh running session, carrying over the process high score.
///
/// `config` must already pass `GameConfig::validate`; the difficulty step
/// divides by `speed_step_score`.
pub fn init_state(config: GameConfig, high_score: u32) -> GameState {
    debug_assert!(config.validate().is_ok(), "unvalidated config: {:?}", config);
    let player = PlayerCar {
        x: lane_center(&config, config.player_start_lane) - config.player_width / 2,
        y: config.player_y,
        width: config.player_width,
        height: config.player_height,
        speed: config.player_speed,
    };
    GameState {
        config,
        player,
        obstacles: Vec::new(),
        explosion: Default::default(),
        score: 0,
        high_score,
        new_high_score: false,
        speed: config.initial_speed,
        session: Session::Running,
        frame: 0,
    }
}

/// Start over after a game over.  Returns `None` while a round is still in
/// progress (running or exploding): restart is silently ignored there.
pub fn restart(state: &GameState) -> Option<GameState> {
    if state.session != Session::GameOver {
        return None;
    }
    log::info!("Restarting (high score {})", state.high_score);
    Some(init_state(state.config, state.high_score))
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn move_player_left(state: &GameState) -> GameState {
    let (min_x, _) = player_bounds_x(&state.config);
    let new_x = (state.player.x - state.player.speed).max(min_x);
    GameState {
        player: PlayerCar {
            x: new_x,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

pub fn move_player_right(state: &GameState) -> GameState {
    let (_, max_x) = player_bounds_x(&state.config);
    let new_x = (state.player.x + state.player.speed).min(max_x);
    GameState {
        player: PlayerCar {
            x: new_x,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

/// Add one obstacle above the visible area in `lane`.  Kind and colour are
/// drawn from `rng`, in that order.
pub fn spawn_obstacle(state: &GameState, lane: u32, rng: &mut impl RandomSource) -> GameState {
    let kind = ObstacleKind::ALL[rng.next_below(ObstacleKind::ALL.len() as u32) as usize];
    let color = OBSTACLE_PALETTE[rng.next_below(OBSTACLE_PALETTE.len() as u32) as usize];
    let obstacle = Obstacle {
        lane,
        x: lane_x(&state.config, lane),
        y: state.config.spawn_y,
        kind,
        color,
    };
    log::trace!("Spawned {:?} in lane {}", obstacle.kind, lane);

    let mut obstacles = state.obstacles.clone();
    obstacles.push(obstacle);
    GameState {
        obstacles,
        ..state.clone()
    }
}

/// Index of the first obstacle (in list order) overlapping the player.
pub fn find_collision(state: &GameState) -> Option<usize> {
    let player = state.player.bounds();
    state
        .obstacles
        .iter()
        .position(|o| player.intersects(&o.bounds()))
}

/// Freeze the round and start the burst centred on `(x, y)`.
pub fn trigger_explosion(
    state: &GameState,
    x: f64,
    y: f64,
    rng: &mut impl RandomSource,
) -> GameState {
    let explosion = create_explosion(&state.config, x, y, rng);
    let new_high_score = state.score > state.high_score;
    let high_score = if new_high_score {
        log::info!("New high score: {}", state.score);
        state.score
    } else {
        state.high_score
    };
    GameState {
        explosion,
        high_score,
        new_high_score,
        session: Session::Exploding,
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure — randomness is injected) ───────────────────

/// Advance the simulation by one tick.
pub fn tick(state: &GameState, input: &TickInput, rng: &mut impl RandomSource) -> GameState {
    let next = match state.session {
        Session::Running => tick_running(state, input, rng),
        Session::Exploding => tick_exploding(state),
        Session::GameOver => return state.clone(),
    };
    GameState {
        frame: state.frame + 1,
        ..next
    }
}

fn tick_running(state: &GameState, input: &TickInput, rng: &mut impl RandomSource) -> GameState {
    let config = &state.config;

    // ── 1. Player movement ───────────────────────────────────────────────────
    let mut next = state.clone();
    if input.move_left {
        next = move_player_left(&next);
    }
    if input.move_right {
        next = move_player_right(&next);
    }

    // ── 2. Advance obstacles; exits are scored ───────────────────────────────
    let before = next.obstacles.len();
    let obstacles: Vec<Obstacle> = next
        .obstacles
        .iter()
        .map(|o| Obstacle {
            y: o.y + next.speed,
            ..o.clone()
        })
        .filter(|o| o.y <= config.screen_height)
        .collect();
    let exited = (before - obstacles.len()) as u32;
    next.obstacles = obstacles;
    next.score += exited * config.exit_reward;

    // ── 3. Spawn ─────────────────────────────────────────────────────────────
    if rng.next_below(spawn_denominator(config, next.speed)) == 0 {
        let lane = rng.next_below(config.lane_count);
        next = spawn_obstacle(&next, lane, rng);
    }

    // ── 4. Collision ─────────────────────────────────────────────────────────
    if let Some(index) = find_collision(&next) {
        let (cx, cy) = next.player.bounds().center();
        log::info!(
            "Crashed into {:?} in lane {} with score {}",
            next.obstacles[index].kind,
            next.obstacles[index].lane,
            next.score
        );
        return trigger_explosion(&next, cx as f64, cy as f64, rng);
    }

    // ── 5. Difficulty ────────────────────────────────────────────────────────
    if next.score > 0 && next.score % config.speed_step_score == 0 {
        let speed = speed_for_score(config, next.score);
        if speed != next.speed {
            log::debug!("Speed {} -> {} at score {}", next.speed, speed, next.score);
        }
        next.speed = speed;
    }

    next
}

fn tick_exploding(state: &GameState) -> GameState {
    let explosion = advance_explosion(&state.config, &state.explosion);
    let session = if explosion.is_finished() {
        log::debug!("Explosion finished, final score {}", state.score);
        Session::GameOver
    } else {
        Session::Exploding
    };
    GameState {
        explosion,
        session,
        ..state.clone()
    }
}

// ── Render snapshot ──────────────────────────────────────────────────────────

pub fn snapshot(state: &GameState) -> RenderSnapshot {
    let config = &state.config;
    RenderSnapshot {
        screen_width: config.screen_width,
        screen_height: config.screen_height,
        road_left: config.road_left(),
        road_right: config.road_right(),
        lane_count: config.lane_count,
        player: state.player.bounds(),
        obstacles: state
            .obstacles
            .iter()
            .map(|o| ObstacleView {
                bounds: o.bounds(),
                kind: o.kind,
                color: o.color,
            })
            .collect(),
        particles: state
            .explosion
            .particles
            .iter()
            .map(|p| ParticleView {
                x: p.x,
                y: p.y,
                size: p.size,
                color: p.color,
                alpha: particle_alpha(config, p),
            })
            .collect(),
        score: state.score,
        high_score: state.high_score,
        new_high_score: state.new_high_score,
        speed: state.speed,
        speed_fraction: speed_fraction(state),
        stars: star_rating(state.score),
        session: state.session,
        frame: state.frame,
    }
}
