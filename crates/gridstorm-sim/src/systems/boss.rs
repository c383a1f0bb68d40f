//! Boss state machine: entry descent, pursuit, phase transitions, attack
//! selection, named abilities, and minion/projectile upkeep.
//!
//! Phase transitions are driven by health-ratio thresholds and are
//! monotonic; each fires exactly once. Damage routing lives in the combat
//! resolver — the machine only moves, attacks, and counts its timers.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gridstorm_core::constants::*;
use gridstorm_core::entities::{Boss, Projectile};
use gridstorm_core::enums::{BossPattern, BossPhase, ProjectileKind, ProjectileSide};
use gridstorm_core::events::SimulationEvent;
use gridstorm_core::types::{Position, Rgb, Velocity};

use super::enemy;
use crate::spawn;

/// Advance the boss by one tick.
pub fn run(
    boss: &mut Boss,
    player_center: Position,
    scale: f64,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<SimulationEvent>,
) {
    match boss.pattern {
        BossPattern::Entering => {
            boss.position.y += BOSS_ENTRY_SPEED * scale;
            if boss.position.y > BOSS_ACTIVE_Y {
                boss.pattern = BossPattern::Active;
                boss.attack_timer = BOSS_FIRST_ATTACK_TICKS;
            }
        }
        BossPattern::Active => {
            // Critically damped pursuit of the player's column.
            let dx = player_center.x - boss.position.x;
            boss.position.x += dx * BOSS_PURSUIT_FACTOR * scale;

            advance_phase(boss, rng, events);

            boss.laser_beam.tick(scale);
            boss.spawn_minions.tick(scale);
            boss.shield_wall.tick(scale);
            boss.time_slow.tick(scale);

            boss.attack_timer -= scale;
            if boss.attack_timer <= 0.0 {
                select_attack(boss, rng);
                boss.attack_timer = rng.gen_range(BOSS_ATTACK_MIN..BOSS_ATTACK_MAX);
            }

            let mut offspring = Vec::new();
            for minion in boss.minions.iter_mut() {
                enemy::update_enemy(minion, player_center, scale, rng, &mut offspring);
            }
            boss.minions.append(&mut offspring);
        }
        BossPattern::Defeated => {}
    }

    if boss.invulnerable {
        boss.invulnerable_timer -= scale;
        if boss.invulnerable_timer <= 0.0 {
            boss.invulnerable = false;
        }
    }

    for projectile in &mut boss.projectiles {
        projectile.position.x += projectile.velocity.x * scale;
        projectile.position.y += projectile.velocity.y * scale;
    }
}

/// Fire the pending health-threshold transition, if any. One per tick
/// keeps the sequence One -> Two -> Three monotonic even under burst
/// damage.
fn advance_phase(boss: &mut Boss, rng: &mut ChaCha8Rng, events: &mut Vec<SimulationEvent>) {
    let ratio = boss.health_ratio();
    if ratio < BOSS_PHASE2_RATIO && boss.phase == BossPhase::One {
        boss.phase = BossPhase::Two;
        events.push(SimulationEvent::BossPhaseChanged {
            old: BossPhase::One,
            new: BossPhase::Two,
        });
        shield_wall(boss);
    } else if ratio < BOSS_PHASE3_RATIO && boss.phase == BossPhase::Two {
        boss.phase = BossPhase::Three;
        events.push(SimulationEvent::BossPhaseChanged {
            old: BossPhase::Two,
            new: BossPhase::Three,
        });
        time_slow_burst(boss, rng);
    }
}

/// Pick an attack for the current phase.
fn select_attack(boss: &mut Boss, rng: &mut ChaCha8Rng) {
    match boss.phase {
        BossPhase::One => circular_burst(boss, rng),
        BossPhase::Two => {
            if rng.gen_bool(0.5) {
                laser_beam(boss);
            } else {
                minion_wave(boss, rng);
            }
        }
        BossPhase::Three => match rng.gen_range(0..3) {
            0 => circular_burst(boss, rng),
            1 => laser_beam(boss),
            _ => minion_wave(boss, rng),
        },
    }
}

/// Evenly spaced ring of bullets with small angular jitter.
fn circular_burst(boss: &mut Boss, rng: &mut ChaCha8Rng) {
    let center = boss.center();
    let step = 360.0 / BOSS_BURST_COUNT as f64;
    let color = boss.color;
    for i in 0..BOSS_BURST_COUNT {
        let deg = i as f64 * step + rng.gen_range(-BOSS_BURST_JITTER_DEG..BOSS_BURST_JITTER_DEG);
        let rad = deg.to_radians();
        boss.projectiles.push(bolt(
            center,
            Velocity::new(rad.cos() * BOSS_BURST_SPEED, rad.sin() * BOSS_BURST_SPEED),
            BOSS_BULLET_DAMAGE,
            8.0,
            color,
            ProjectileKind::Standard,
        ));
    }
}

/// Stationary laser column below the boss. No-op while on cooldown.
fn laser_beam(boss: &mut Boss) {
    if !boss.laser_beam.ready() {
        return;
    }
    boss.laser_beam.trigger();

    let x = boss.position.x + boss.size / 2.0;
    let top = boss.position.y + boss.size;
    for i in 0..BOSS_LASER_SEGMENTS {
        let size = (20.0 - i as f64 * 0.3).max(2.0);
        boss.projectiles.push(bolt(
            Position::new(x, top + i as f64 * BOSS_LASER_SPACING),
            Velocity::new(0.0, 0.0),
            BOSS_LASER_DAMAGE,
            size,
            COLOR_RED,
            ProjectileKind::Laser,
        ));
    }
}

/// Spawn a wave of Virus minions. No-op while on cooldown.
fn minion_wave(boss: &mut Boss, rng: &mut ChaCha8Rng) {
    if !boss.spawn_minions.ready() {
        return;
    }
    boss.spawn_minions.trigger();

    let position = boss.position;
    let size = boss.size;
    for _ in 0..BOSS_MINION_COUNT {
        boss.minions.push(spawn::boss_minion(position, size, rng));
    }
}

/// Phase-two burst: stationary shield rings plus an invulnerability
/// window. No-op while on cooldown.
fn shield_wall(boss: &mut Boss) {
    if !boss.shield_wall.ready() {
        return;
    }
    boss.shield_wall.trigger();

    boss.invulnerable = true;
    boss.invulnerable_timer = BOSS_PHASE2_INVULN_TICKS;

    let center = boss.center();
    let spoke_step = 360.0 / BOSS_SHIELD_SPOKES as f64;
    for spoke in 0..BOSS_SHIELD_SPOKES {
        let rad = (spoke as f64 * spoke_step).to_radians();
        for ring in 0..BOSS_SHIELD_RINGS {
            let distance = boss.size / 2.0 + ring as f64 * BOSS_SHIELD_RING_SPACING;
            boss.projectiles.push(bolt(
                Position::new(
                    center.x + rad.cos() * distance,
                    center.y + rad.sin() * distance,
                ),
                Velocity::new(0.0, 0.0),
                BOSS_BULLET_DAMAGE,
                10.0,
                COLOR_CYAN,
                ProjectileKind::ShieldRing,
            ));
        }
    }
}

/// Phase-three burst: slow outward-drifting rings plus an invulnerability
/// window. No-op while on cooldown.
fn time_slow_burst(boss: &mut Boss, rng: &mut ChaCha8Rng) {
    if !boss.time_slow.ready() {
        return;
    }
    boss.time_slow.trigger();

    boss.invulnerable = true;
    boss.invulnerable_timer = BOSS_PHASE3_INVULN_TICKS;

    let center = boss.center();
    for _ in 0..BOSS_TIME_SLOW_RINGS {
        let angle = rng.gen_range(0.0..std::f64::consts::TAU);
        let radius = rng.gen_range(boss.size / 2.0..boss.size * 2.0);
        boss.projectiles.push(bolt(
            Position::new(
                center.x + angle.cos() * radius,
                center.y + angle.sin() * radius,
            ),
            Velocity::new(
                angle.cos() * BOSS_TIME_SLOW_DRIFT,
                angle.sin() * BOSS_TIME_SLOW_DRIFT,
            ),
            BOSS_BULLET_DAMAGE,
            15.0,
            COLOR_PURPLE,
            ProjectileKind::TimeSlowRing,
        ));
    }
}

fn bolt(
    position: Position,
    velocity: Velocity,
    damage: f64,
    size: f64,
    color: Rgb,
    kind: ProjectileKind,
) -> Projectile {
    Projectile {
        position,
        velocity,
        side: ProjectileSide::Boss,
        damage,
        color,
        size,
        pierce: 0,
        pierced: 0,
        kind,
        consumed: false,
    }
}
