//! Entity spawn factories.
//!
//! Builds enemies from the ai crate's stat profiles, pickups with uniform
//! random kinds, and bosses scaled by wave tier. All randomness comes from
//! the engine's seeded rng handle.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gridstorm_ai::fsm;
use gridstorm_ai::profiles::{aggro_range, initial_ability, profile_for};
use gridstorm_core::constants::*;
use gridstorm_core::entities::{AbilityTimer, Boss, Enemy, PowerUpPickup};
use gridstorm_core::enums::{BossPattern, BossPhase, EnemyKind, PowerUpKind};
use gridstorm_core::types::Position;

const BOSS_NAMES: [&str; 4] = ["SENTINEL", "ARCHITECT", "OVERSEER", "WARDEN"];

/// Spawn an enemy just above the arena at a random column.
pub fn enemy(kind: EnemyKind, level: u32, rng: &mut ChaCha8Rng) -> Enemy {
    let profile = profile_for(kind, level);
    let position = Position::new(
        rng.gen_range(0.0..(ARENA_WIDTH - profile.size).max(1.0)),
        rng.gen_range(-100.0..-40.0),
    );

    Enemy {
        kind,
        level,
        position,
        size: profile.size,
        speed: profile.speed,
        health: profile.max_health,
        max_health: profile.max_health,
        value: profile.value,
        shoot_chance: profile.shoot_chance,
        color: profile.color,
        ability: initial_ability(kind),
        aggro_range: aggro_range(level),
        patrol_target: fsm::roll_patrol_target(profile.size, rng),
        shoot_timer: rng.gen_range(ENEMY_SHOOT_ARM_MIN..ENEMY_SHOOT_ARM_MAX),
        projectiles: Vec::new(),
        dead: false,
    }
}

/// Spawn one of the two Virus children of a dead parent: one level lower,
/// at half their max health, scattered around the death position.
pub fn split_virus(parent: &Enemy, rng: &mut ChaCha8Rng) -> Enemy {
    let mut child = enemy(EnemyKind::Virus, parent.level - 1, rng);
    child.position = Position::new(
        parent.position.x + rng.gen_range(-20.0..20.0),
        parent.position.y + parent.size,
    );
    child.health = child.max_health / 2.0;
    child
}

/// Spawn a Worm's minion next to its parent.
pub fn worm_offspring(parent: &Enemy, rng: &mut ChaCha8Rng) -> Enemy {
    let level = parent.level.saturating_sub(1).max(1);
    let mut minion = enemy(EnemyKind::Basic, level, rng);
    minion.position = Position::new(
        parent.position.x + rng.gen_range(-20.0..20.0),
        parent.position.y + parent.size,
    );
    minion
}

/// Spawn a boss-owned minion below the boss body.
pub fn boss_minion(boss_position: Position, boss_size: f64, rng: &mut ChaCha8Rng) -> Enemy {
    let mut minion = enemy(EnemyKind::Virus, 1, rng);
    minion.position = Position::new(
        boss_position.x + boss_size / 2.0 + rng.gen_range(-BOSS_MINION_SCATTER..BOSS_MINION_SCATTER),
        boss_position.y + boss_size,
    );
    minion
}

/// Spawn the boss for a completed wave. Tier scales size and health.
pub fn boss(wave: u32, rng: &mut ChaCha8Rng) -> Boss {
    let tier = wave / BOSS_WAVE_INTERVAL;
    let size = BOSS_BASE_SIZE + tier as f64 * BOSS_SIZE_PER_TIER;
    let health = BOSS_BASE_HEALTH + tier as f64 * BOSS_HEALTH_PER_TIER;
    let name = BOSS_NAMES[rng.gen_range(0..BOSS_NAMES.len())].to_string();
    let color = [COLOR_RED, COLOR_PURPLE, COLOR_ORANGE][rng.gen_range(0..3)];

    Boss {
        wave_tier: tier,
        name,
        position: Position::new((ARENA_WIDTH - size) / 2.0, -200.0),
        size,
        health,
        max_health: health,
        pattern: BossPattern::Entering,
        phase: BossPhase::One,
        attack_timer: 0.0,
        invulnerable: false,
        invulnerable_timer: 0.0,
        color,
        laser_beam: AbilityTimer::new(BOSS_LASER_COOLDOWN),
        spawn_minions: AbilityTimer::new(BOSS_MINIONS_COOLDOWN),
        shield_wall: AbilityTimer::new(BOSS_SHIELD_WALL_COOLDOWN),
        time_slow: AbilityTimer::new(BOSS_TIME_SLOW_COOLDOWN),
        minions: Vec::new(),
        projectiles: Vec::new(),
    }
}

/// Spawn a pickup of a uniformly random kind.
pub fn pickup(position: Position, rng: &mut ChaCha8Rng) -> PowerUpPickup {
    let kind = PowerUpKind::ALL[rng.gen_range(0..PowerUpKind::ALL.len())];
    pickup_of(kind, position)
}

/// Spawn a pickup of a specific kind.
pub fn pickup_of(kind: PowerUpKind, position: Position) -> PowerUpPickup {
    PowerUpPickup {
        position,
        kind,
        fall_speed: PICKUP_FALL_SPEED,
        lifetime: PICKUP_LIFETIME_TICKS,
        collected: false,
    }
}

/// Drop position for the wave-completion reward pickup.
pub fn wave_drop_position(rng: &mut ChaCha8Rng) -> Position {
    Position::new(
        rng.gen_range(100.0..ARENA_WIDTH - 100.0),
        rng.gen_range(50.0..200.0),
    )
}
