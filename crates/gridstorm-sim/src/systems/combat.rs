//! Combat resolver: collision detection and the damage / scoring / combo /
//! death-spawn pipeline.
//!
//! Runs once per frame in a strict phase order:
//!   1. player projectiles vs enemies (boss minions included),
//!   2. player projectiles vs the boss,
//!   3. hostile projectiles vs the player,
//!   4. enemy bodies vs the player,
//!   5. pickup proximity collection.
//! Phases only mark entities dead/consumed/collected; the registry sweep
//! performs every removal afterwards.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gridstorm_core::constants::*;
use gridstorm_core::entities::{
    Boss, DamageResult, Enemy, EnemyAbility, Player, PowerUpPickup, Projectile, WaveState,
};
use gridstorm_core::enums::{BossPattern, DirectorPhase, EnemyKind, PowerUpKind};
use gridstorm_core::events::SimulationEvent;
use gridstorm_core::types::{Position, Rgb};

use crate::dilation::TimeDilation;
use crate::registry::EntityRegistry;
use crate::spawn;

use super::powerups;

/// Resolve one frame of combat.
pub fn run(
    registry: &mut EntityRegistry,
    wave: &mut WaveState,
    dilation: &mut TimeDilation,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<SimulationEvent>,
) {
    // Death-triggered spawns are buffered and joined after all phases, so
    // no phase ever iterates a collection it is growing.
    let mut hatched: Vec<Enemy> = Vec::new();
    let mut drops: Vec<PowerUpPickup> = Vec::new();

    // --- 1 + 2: player projectiles vs enemies, then the boss ---
    // A projectile checks mundane enemies and boss minions first; only one
    // that survives (pierce budget permitting) can go on to hit the boss.
    let mut shots = std::mem::take(&mut registry.player.projectiles);
    for shot in &mut shots {
        if shot.consumed {
            continue;
        }

        resolve_shot(
            shot,
            &mut registry.enemies,
            &mut registry.player,
            rng,
            events,
            &mut hatched,
            &mut drops,
        );

        if let Some(boss) = registry.boss.as_mut() {
            if !shot.consumed {
                resolve_shot(
                    shot,
                    &mut boss.minions,
                    &mut registry.player,
                    rng,
                    events,
                    &mut hatched,
                    &mut drops,
                );
            }

            if !shot.consumed
                && boss.pattern != BossPattern::Defeated
                && !boss.invulnerable
                && point_in_square(shot.position, boss.position, boss.size)
            {
                let mut damage = shot.damage;
                if rng.gen_bool(registry.player.critical_chance) {
                    damage *= 2.0;
                }
                boss.health = (boss.health - damage).max(0.0);
                registry.player.stats.shots_hit += 1;
                registry.player.add_combo();
                events.push(explosion(shot.position, shot.color, 20));
                register_hit(shot);

                if boss.health <= 0.0 {
                    resolve_boss_death(
                        boss,
                        wave,
                        &mut registry.player,
                        rng,
                        events,
                        &mut drops,
                    );
                }
            }
        }
    }
    registry.player.projectiles = shots;

    // --- 3: hostile projectiles vs the player ---
    for enemy in &mut registry.enemies {
        hostile_volley(&mut enemy.projectiles, &mut registry.player, events);
    }
    if let Some(boss) = registry.boss.as_mut() {
        for minion in &mut boss.minions {
            hostile_volley(&mut minion.projectiles, &mut registry.player, events);
        }
        hostile_volley(&mut boss.projectiles, &mut registry.player, events);
    }

    // --- 4: enemy bodies vs the player ---
    for enemy in &mut registry.enemies {
        body_collision(
            enemy,
            ENEMY_CONTACT_DAMAGE_PER_LEVEL,
            &mut registry.player,
            rng,
            events,
            &mut hatched,
            &mut drops,
        );
    }
    if let Some(boss) = registry.boss.as_mut() {
        for minion in &mut boss.minions {
            body_collision(
                minion,
                MINION_CONTACT_DAMAGE_PER_LEVEL,
                &mut registry.player,
                rng,
                events,
                &mut hatched,
                &mut drops,
            );
        }
    }

    // --- 5: pickup proximity collection ---
    let center = registry.player.center();
    for pickup in &mut registry.pickups {
        if pickup.collected {
            continue;
        }
        let reach = (PLAYER_WIDTH / 2.0 + PICKUP_SIZE).max(registry.player.auto_collect_radius);
        if pickup.position.distance_to(&center) < reach {
            pickup.collected = true;
            collect_pickup(
                pickup.kind,
                pickup.position,
                &mut registry.player,
                dilation,
                events,
            );
        }
    }

    registry.enemies.append(&mut hatched);
    registry.pickups.append(&mut drops);
}

/// Walk one player projectile through an enemy collection, spending its
/// pierce budget: a budget of `p` is consumed once its hit count exceeds
/// `p`, so it damages at most `p + 1` targets.
fn resolve_shot(
    shot: &mut Projectile,
    enemies: &mut [Enemy],
    player: &mut Player,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<SimulationEvent>,
    hatched: &mut Vec<Enemy>,
    drops: &mut Vec<PowerUpPickup>,
) {
    for enemy in enemies.iter_mut() {
        if shot.consumed {
            break;
        }
        if enemy.dead || !point_in_square(shot.position, enemy.position, enemy.size) {
            continue;
        }

        let mut damage = shot.damage;
        if rng.gen_bool(player.critical_chance) {
            damage *= 2.0;
        }

        let center = enemy.center();
        let mut shield_absorbed = false;
        if let Some(EnemyAbility::Shield { hit_points, .. }) = &mut enemy.ability {
            // A Firewall's shield soaks whole hits until it breaks.
            if *hit_points > 0.0 {
                *hit_points = (*hit_points - damage).max(0.0);
                shield_absorbed = true;
                if *hit_points <= 0.0 {
                    events.push(explosion(center, COLOR_CYAN, 20));
                }
            }
        }
        if !shield_absorbed {
            enemy.health = (enemy.health - damage).max(0.0);
        }

        player.stats.shots_hit += 1;
        player.add_combo();
        events.push(explosion(shot.position, shot.color, 20));

        if enemy.health <= 0.0 {
            resolve_enemy_death(enemy, player, rng, events, hatched, drops);
        }

        register_hit(shot);
    }
}

/// Spend one hit from a projectile's pierce budget.
fn register_hit(shot: &mut Projectile) {
    if shot.pierce > 0 {
        shot.pierced += 1;
        if shot.pierced > shot.pierce {
            shot.consumed = true;
        }
    } else {
        shot.consumed = true;
    }
}

/// Hostile projectiles vs the player. Special boss projectiles (laser,
/// shield ring, time-slow ring) survive the impact; ordinary bullets are
/// consumed whether or not the player's invulnerability swallowed the hit.
fn hostile_volley(
    projectiles: &mut [Projectile],
    player: &mut Player,
    events: &mut Vec<SimulationEvent>,
) {
    for projectile in projectiles.iter_mut() {
        if projectile.consumed || !point_in_player(projectile.position, player) {
            continue;
        }

        hit_player(player, projectile.damage, events);
        events.push(explosion(projectile.position, projectile.color, 10));
        if !projectile.kind.survives_impact() {
            projectile.consumed = true;
        }
    }
}

/// Body contact: the player takes level-scaled damage, the rammer takes a
/// fixed amount, and a rammer that dies goes through the normal kill path.
fn body_collision(
    enemy: &mut Enemy,
    damage_per_level: f64,
    player: &mut Player,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<SimulationEvent>,
    hatched: &mut Vec<Enemy>,
    drops: &mut Vec<PowerUpPickup>,
) {
    if enemy.dead || !overlaps_player(enemy, player) {
        return;
    }

    hit_player(player, damage_per_level * enemy.level as f64, events);
    enemy.health = (enemy.health - ENEMY_RAM_SELF_DAMAGE).max(0.0);
    if enemy.health <= 0.0 {
        resolve_enemy_death(enemy, player, rng, events, hatched, drops);
    }
}

/// The single enemy kill path, whatever the cause of death: score, combo-
/// aware award, split, drop chance, events.
fn resolve_enemy_death(
    enemy: &mut Enemy,
    player: &mut Player,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<SimulationEvent>,
    hatched: &mut Vec<Enemy>,
    drops: &mut Vec<PowerUpPickup>,
) {
    enemy.dead = true;
    let awarded = player.add_score(enemy.value);
    player.stats.enemies_killed += 1;

    let center = enemy.center();
    events.push(SimulationEvent::EnemyKilled {
        kind: enemy.kind,
        level: enemy.level,
        position: center,
        score_awarded: awarded,
    });
    events.push(explosion(center, enemy.color, 30));

    if enemy.kind == EnemyKind::Virus && enemy.level > 1 {
        for _ in 0..2 {
            hatched.push(spawn::split_virus(enemy, rng));
        }
    }

    if rng.gen_bool(ENEMY_KILL_DROP_CHANCE) {
        drops.push(spawn::pickup(center, rng));
    }
}

/// Boss kill: score, explosion, pickup shower, wave advance, interlude.
fn resolve_boss_death(
    boss: &mut Boss,
    wave: &mut WaveState,
    player: &mut Player,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<SimulationEvent>,
    drops: &mut Vec<PowerUpPickup>,
) {
    boss.pattern = BossPattern::Defeated;
    let awarded = player.add_score(BOSS_KILL_SCORE * boss.wave_tier as u64);
    player.stats.bosses_defeated += 1;

    let center = boss.center();
    events.push(explosion(center, COLOR_CYAN, 100));
    events.push(SimulationEvent::BossDefeated {
        score_awarded: awarded,
    });

    for _ in 0..BOSS_DROP_COUNT {
        let position = Position::new(
            center.x + rng.gen_range(-BOSS_DROP_SCATTER..BOSS_DROP_SCATTER),
            center.y + rng.gen_range(-BOSS_DROP_SCATTER..BOSS_DROP_SCATTER),
        );
        drops.push(spawn::pickup(position, rng));
    }

    wave.wave += 1;
    wave.enemies_spawned = 0;
    wave.spawn_timer = BOSS_INTERLUDE_TICKS;
    wave.director = DirectorPhase::Interlude;
}

/// Collection: flat score and counter regardless of kind, then the effect.
fn collect_pickup(
    kind: PowerUpKind,
    position: Position,
    player: &mut Player,
    dilation: &mut TimeDilation,
    events: &mut Vec<SimulationEvent>,
) {
    powerups::apply(kind, player, dilation);
    player.stats.powerups_collected += 1;
    player.add_score(PICKUP_SCORE);
    events.push(SimulationEvent::PowerupCollected { kind });
    events.push(explosion(position, powerups::pickup_color(kind), 15));
}

/// Route damage into the player and report it, unless an invulnerability
/// window swallowed it.
fn hit_player(player: &mut Player, amount: f64, events: &mut Vec<SimulationEvent>) {
    match player.take_damage(amount) {
        DamageResult::Ignored => {}
        DamageResult::Taken { fatal } => {
            events.push(SimulationEvent::PlayerDamaged { amount, fatal });
        }
    }
}

// --- Geometry ---

fn point_in_square(point: Position, corner: Position, size: f64) -> bool {
    point.x > corner.x
        && point.x < corner.x + size
        && point.y > corner.y
        && point.y < corner.y + size
}

fn point_in_player(point: Position, player: &Player) -> bool {
    point.x > player.position.x
        && point.x < player.position.x + PLAYER_WIDTH
        && point.y > player.position.y
        && point.y < player.position.y + PLAYER_HEIGHT
}

fn overlaps_player(enemy: &Enemy, player: &Player) -> bool {
    player.position.x < enemy.position.x + enemy.size
        && player.position.x + PLAYER_WIDTH > enemy.position.x
        && player.position.y < enemy.position.y + enemy.size
        && player.position.y + PLAYER_HEIGHT > enemy.position.y
}

fn explosion(position: Position, color: Rgb, intensity: u32) -> SimulationEvent {
    SimulationEvent::ExplosionRequested {
        position,
        color,
        intensity,
    }
}
