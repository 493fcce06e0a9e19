use highway_dodge::config::GameConfig;
use highway_dodge::entities::*;
use highway_dodge::explosion::*;
use highway_dodge::random::{GameRng, RandomSource};

fn particle(life: i32) -> Particle {
    Particle {
        x: 10.0,
        y: 20.0,
        vx: 2.0,
        vy: -1.0,
        size: 10.0,
        life,
        color: Rgba { r: 255, g: 150, b: 50, a: 200 },
    }
}

/// Draws the upper bound of every range, to pin particle attributes.
struct Max;

impl RandomSource for Max {
    fn next_below(&mut self, bound: u32) -> u32 {
        bound - 1
    }

    fn next_unit(&mut self) -> f64 {
        0.999
    }
}

// ── create_explosion ──────────────────────────────────────────────────────────

#[test]
fn burst_has_100_particles_and_60_tick_timer() {
    let e = create_explosion(&GameConfig::default(), 190.0, 490.0, &mut GameRng::from_seed(5));
    assert_eq!(e.particles.len(), 100);
    assert_eq!(e.timer, 60);
    assert!(!e.is_finished());
    for p in &e.particles {
        assert_eq!((p.x, p.y), (190.0, 490.0));
    }
}

#[test]
fn particle_attributes_within_ranges() {
    let e = create_explosion(&GameConfig::default(), 0.0, 0.0, &mut GameRng::from_seed(17));
    for p in &e.particles {
        assert!(p.vx >= -4.0 && p.vx < 4.0);
        assert!(p.vy >= -4.0 && p.vy < 4.0);
        assert!(p.size >= 5.0 && p.size < 20.0);
        assert!((30..70).contains(&p.life));
        assert_eq!(p.color.r, 255);
        assert!(p.color.g >= 100);
        assert!(p.color.b < 100);
        assert!(p.color.a >= 55);
    }
}

#[test]
fn particle_attributes_at_upper_bounds() {
    let e = create_explosion(&GameConfig::default(), 0.0, 0.0, &mut Max);
    let p = &e.particles[0];
    assert_eq!(p.life, 69);
    assert_eq!(p.color, Rgba { r: 255, g: 254, b: 99, a: 254 });
}

// ── advance_particles ─────────────────────────────────────────────────────────

#[test]
fn particle_integrates_gravity_life_and_shrink() {
    let config = GameConfig::default();
    let (ps, timer) = advance_particles(&config, &[particle(10)], 60);
    assert_eq!(timer, 59);
    let p = &ps[0];
    assert_eq!(p.x, 12.0);
    assert_eq!(p.y, 19.0);
    assert!((p.vy - -0.9).abs() < 1e-12);
    assert_eq!(p.vx, 2.0);
    assert_eq!(p.life, 9);
    assert!((p.size - 9.7).abs() < 1e-12);
}

#[test]
fn gravity_applies_after_position_update() {
    let config = GameConfig::default();
    let (ps, _) = advance_particles(&config, &[particle(10)], 60);
    let (ps, _) = advance_particles(&config, &ps, 59);
    // second step moves by the already-accelerated velocity
    assert!((ps[0].y - (19.0 - 0.9)).abs() < 1e-12);
}

#[test]
fn dead_particles_are_removed() {
    let config = GameConfig::default();
    let (ps, _) = advance_particles(&config, &[particle(1), particle(2), particle(0)], 60);
    assert_eq!(ps.len(), 1);
    assert_eq!(ps[0].life, 1);
}

#[test]
fn timer_expiry_discards_survivors() {
    let config = GameConfig::default();
    let (ps, timer) = advance_particles(&config, &[particle(50)], 1);
    assert_eq!(timer, 0);
    assert!(ps.is_empty());
}

#[test]
fn timer_saturates_at_zero() {
    let config = GameConfig::default();
    let (_, timer) = advance_particles(&config, &[], 0);
    assert_eq!(timer, 0);
}

#[test]
fn burst_is_empty_after_full_duration() {
    let config = GameConfig::default();
    let mut e = create_explosion(&config, 190.0, 490.0, &mut GameRng::from_seed(1));
    for _ in 0..59 {
        e = advance_explosion(&config, &e);
        assert!(!e.is_finished());
    }
    e = advance_explosion(&config, &e);
    assert!(e.is_finished());
    assert!(e.particles.is_empty());
}

// ── particle_alpha ────────────────────────────────────────────────────────────

#[test]
fn alpha_is_life_over_duration_clamped() {
    let config = GameConfig::default();
    assert_eq!(particle_alpha(&config, &particle(60)), 1.0);
    assert_eq!(particle_alpha(&config, &particle(69)), 1.0);
    assert!((particle_alpha(&config, &particle(15)) - 0.25).abs() < 1e-12);
    assert_eq!(particle_alpha(&config, &particle(-3)), 0.0);
}
