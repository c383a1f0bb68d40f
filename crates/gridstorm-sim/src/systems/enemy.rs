//! Enemy system: FSM movement, kind abilities, shooting, projectile flight.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gridstorm_ai::fsm::{self, EnemyContext};
use gridstorm_core::constants::*;
use gridstorm_core::entities::{Enemy, EnemyAbility, Projectile};
use gridstorm_core::enums::{EnemyKind, ProjectileKind, ProjectileSide};
use gridstorm_core::types::{Position, Rgb, Velocity};

use crate::spawn;

/// Advance all mundane enemies by one tick. Worm offspring spawned this
/// frame join the collection afterwards, never mid-iteration.
pub fn run(
    enemies: &mut Vec<Enemy>,
    player_center: Position,
    scale: f64,
    rng: &mut ChaCha8Rng,
) {
    let mut offspring = Vec::new();
    for enemy in enemies.iter_mut() {
        update_enemy(enemy, player_center, scale, rng, &mut offspring);
    }
    enemies.append(&mut offspring);
}

/// Advance a single enemy. Shared with the boss system for its minions.
pub(crate) fn update_enemy(
    enemy: &mut Enemy,
    player_center: Position,
    scale: f64,
    rng: &mut ChaCha8Rng,
    offspring: &mut Vec<Enemy>,
) {
    if enemy.dead {
        return;
    }

    // Movement.
    let ctx = EnemyContext {
        position: enemy.position,
        size: enemy.size,
        speed: enemy.speed,
        aggro_range: enemy.aggro_range,
        patrol_target: enemy.patrol_target,
        player_center,
    };
    let update = fsm::evaluate(&ctx, scale, rng);
    enemy.position = update.new_position;
    if let Some(target) = update.new_patrol_target {
        enemy.patrol_target = target;
    }

    update_ability(enemy, scale, rng, offspring);

    // Shooting: one chance roll per timer expiry.
    enemy.shoot_timer -= scale;
    if enemy.shoot_timer <= 0.0 {
        if rng.gen_bool(enemy.shoot_chance) {
            fire(enemy);
        }
        enemy.shoot_timer = rng.gen_range(ENEMY_SHOOT_REARM_MIN..ENEMY_SHOOT_REARM_MAX);
    }

    for projectile in &mut enemy.projectiles {
        projectile.position.x += projectile.velocity.x * scale;
        projectile.position.y += projectile.velocity.y * scale;
    }
}

/// Tick the kind ability, if any.
fn update_ability(
    enemy: &mut Enemy,
    scale: f64,
    rng: &mut ChaCha8Rng,
    offspring: &mut Vec<Enemy>,
) {
    let size = enemy.size;
    let low_health = enemy.health < enemy.max_health * WORM_SPAWN_HEALTH_RATIO;
    let mut worm_spawns = false;

    match &mut enemy.ability {
        Some(EnemyAbility::Teleport { cooldown }) => {
            *cooldown -= scale;
            if *cooldown <= 0.0 {
                enemy.position = Position::new(
                    rng.gen_range(0.0..(ARENA_WIDTH - size).max(1.0)),
                    rng.gen_range(0.0..ARENA_HEIGHT / 2.0),
                );
                *cooldown = GLITCH_TELEPORT_COOLDOWN;
            }
        }
        Some(EnemyAbility::Stealth { timer }) => {
            *timer -= scale;
            if *timer <= 0.0 {
                *timer = rng.gen_range(TROJAN_STEALTH_MIN..TROJAN_STEALTH_MAX);
            }
        }
        Some(EnemyAbility::SpawnTimer { cooldown }) => {
            // The timer idles at zero until the health gate opens.
            if *cooldown > 0.0 {
                *cooldown -= scale;
            } else if low_health {
                *cooldown = WORM_SPAWN_COOLDOWN;
                worm_spawns = true;
            }
        }
        Some(EnemyAbility::Shield { .. }) | None => {}
    }

    if worm_spawns {
        for _ in 0..WORM_SPAWN_COUNT {
            offspring.push(spawn::worm_offspring(enemy, rng));
        }
    }
}

/// Fire: a Virus sprays a five-shot fan, every other kind drops a single
/// straight bullet.
fn fire(enemy: &mut Enemy) {
    let damage = ENEMY_BULLET_DAMAGE_PER_LEVEL * enemy.level as f64;
    let color = enemy.color;
    let origin = Position::new(
        enemy.position.x + enemy.size / 2.0,
        enemy.position.y + enemy.size,
    );

    if enemy.kind == EnemyKind::Virus {
        for step in -2i32..=2 {
            let rad = (step as f64 * 15.0).to_radians();
            let velocity = Velocity::new(rad.sin() * 2.0, rad.cos() * 4.0);
            enemy
                .projectiles
                .push(bullet(origin, velocity, damage, 4.0, color));
        }
    } else {
        let velocity = Velocity::new(0.0, ENEMY_BULLET_SPEED);
        enemy
            .projectiles
            .push(bullet(origin, velocity, damage, 6.0, color));
    }
}

fn bullet(
    position: Position,
    velocity: Velocity,
    damage: f64,
    size: f64,
    color: Rgb,
) -> Projectile {
    Projectile {
        position,
        velocity,
        side: ProjectileSide::Enemy,
        damage,
        color,
        size,
        pierce: 0,
        pierced: 0,
        kind: ProjectileKind::Standard,
        consumed: false,
    }
}
