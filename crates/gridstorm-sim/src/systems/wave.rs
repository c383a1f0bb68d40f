//! Wave director: spawn pacing, kind unlocks, completion, boss handoff.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gridstorm_core::constants::*;
use gridstorm_core::entities::WaveState;
use gridstorm_core::enums::{DirectorPhase, EnemyKind};
use gridstorm_core::events::SimulationEvent;

use crate::registry::EntityRegistry;
use crate::spawn;

/// Advance the director by one tick.
pub fn run(
    wave: &mut WaveState,
    registry: &mut EntityRegistry,
    scale: f64,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<SimulationEvent>,
) {
    match wave.director {
        // The boss machine owns the arena; nothing to pace here. The
        // combat resolver moves the director back to Interlude on the
        // boss's death.
        DirectorPhase::BossActive => {}

        DirectorPhase::Interlude => {
            wave.spawn_timer -= scale;
            if wave.spawn_timer <= 0.0 {
                wave.director = DirectorPhase::Spawning;
            }
        }

        DirectorPhase::Spawning => {
            wave.spawn_timer -= scale;
            if wave.spawn_timer <= 0.0 && wave.enemies_spawned < wave.spawn_budget() {
                let kind = pick_kind(wave.wave, rng);
                let level = (1 + (wave.wave - 1) / 2).min(ENEMY_LEVEL_CAP);
                registry.spawn_enemy(spawn::enemy(kind, level, rng));
                wave.enemies_spawned += 1;
                wave.spawn_timer = (SPAWN_INTERVAL_BASE
                    - wave.wave as f64 * SPAWN_INTERVAL_STEP)
                    .max(SPAWN_INTERVAL_MIN);
            }

            let budget_met = wave.enemies_spawned >= wave.spawn_budget();
            if budget_met && registry.enemies.is_empty() {
                complete_wave(wave, registry, rng, events);
            }
        }
    }
}

/// A wave is complete: its budget was spawned and the field is clear.
fn complete_wave(
    wave: &mut WaveState,
    registry: &mut EntityRegistry,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<SimulationEvent>,
) {
    events.push(SimulationEvent::WaveCompleted {
        wave_number: wave.wave,
    });
    registry.player.stats.waves_completed += 1;

    if wave.wave % BOSS_WAVE_INTERVAL == 0 {
        // Boss handoff: suspend mundane spawning entirely.
        registry.enemies.clear();
        wave.enemies_spawned = wave.spawn_budget();
        let boss = spawn::boss(wave.wave, rng);
        events.push(SimulationEvent::BossSpawned {
            wave_tier: boss.wave_tier,
        });
        registry.boss = Some(boss);
        wave.director = DirectorPhase::BossActive;
    } else {
        registry.player.add_score(WAVE_CLEAR_SCORE * wave.wave as u64);
        if rng.gen_bool(WAVE_CLEAR_DROP_CHANCE) {
            let position = spawn::wave_drop_position(rng);
            registry.spawn_pickup(spawn::pickup(position, rng));
        }
        wave.wave += 1;
        wave.enemies_spawned = 0;
        wave.spawn_timer = WAVE_INTERLUDE_TICKS;
        wave.director = DirectorPhase::Interlude;
    }
}

/// The candidate kind set grows with the wave number; the pick is uniform
/// over the unlocked set.
fn pick_kind(wave: u32, rng: &mut ChaCha8Rng) -> EnemyKind {
    let mut kinds = vec![EnemyKind::Basic];
    if wave >= 2 {
        kinds.push(EnemyKind::Hacker);
        kinds.push(EnemyKind::Glitch);
    }
    if wave >= 3 {
        kinds.push(EnemyKind::Firewall);
    }
    if wave >= 4 {
        kinds.push(EnemyKind::Virus);
    }
    if wave >= 5 {
        kinds.push(EnemyKind::Worm);
    }
    if wave >= 6 {
        kinds.push(EnemyKind::Trojan);
    }
    kinds[rng.gen_range(0..kinds.len())]
}
