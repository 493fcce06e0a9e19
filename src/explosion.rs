/// Explosion particle sub-engine.
///
/// Runs only while the session is `Exploding`.  The burst has a fixed
/// lifetime (`explosion_duration` ticks) independent of how long the
/// individual particles survive.

use crate::config::GameConfig;
use crate::entities::{Explosion, Particle, Rgba};
use crate::random::RandomSource;

/// Spread of the initial velocity on each axis.
const VELOCITY_SPREAD: f64 = 8.0;
const MIN_SIZE: f64 = 5.0;
const SIZE_RANGE: f64 = 15.0;
const MIN_LIFE: i32 = 30;
const LIFE_RANGE: u32 = 40;

fn new_particle(x: f64, y: f64, rng: &mut impl RandomSource) -> Particle {
    let vx = (rng.next_unit() - 0.5) * VELOCITY_SPREAD;
    let vy = (rng.next_unit() - 0.5) * VELOCITY_SPREAD;
    let size = rng.next_unit() * SIZE_RANGE + MIN_SIZE;
    let life = MIN_LIFE + rng.next_below(LIFE_RANGE) as i32;
    let color = Rgba {
        r: 255,
        g: (100 + rng.next_below(155)) as u8,
        b: rng.next_below(100) as u8,
        a: (55 + rng.next_below(200)) as u8,
    };
    Particle {
        x,
        y,
        vx,
        vy,
        size,
        life,
        color,
    }
}

/// Create a full burst centred on `(x, y)`.
pub fn create_explosion(
    config: &GameConfig,
    x: f64,
    y: f64,
    rng: &mut impl RandomSource,
) -> Explosion {
    let particles = (0..config.particle_count)
        .map(|_| new_particle(x, y, rng))
        .collect();
    Explosion {
        particles,
        timer: config.explosion_duration,
    }
}

/// Advance every particle by one tick and count the burst timer down.
///
/// Once the timer hits zero, survivors are discarded together.
pub fn advance_particles(
    config: &GameConfig,
    particles: &[Particle],
    timer: u32,
) -> (Vec<Particle>, u32) {
    let timer = timer.saturating_sub(1);
    if timer == 0 {
        return (Vec::new(), 0);
    }

    let particles = particles
        .iter()
        .map(|p| Particle {
            x: p.x + p.vx,
            y: p.y + p.vy,
            vy: p.vy + config.gravity,
            life: p.life - 1,
            size: p.size * config.shrink_factor,
            ..p.clone()
        })
        .filter(|p| p.life > 0)
        .collect();

    (particles, timer)
}

pub fn advance_explosion(config: &GameConfig, explosion: &Explosion) -> Explosion {
    let (particles, timer) = advance_particles(config, &explosion.particles, explosion.timer);
    Explosion { particles, timer }
}

/// Render fade for a particle: remaining life over the burst duration.
pub fn particle_alpha(config: &GameConfig, particle: &Particle) -> f64 {
    (particle.life as f64 / config.explosion_duration as f64).clamp(0.0, 1.0)
}
