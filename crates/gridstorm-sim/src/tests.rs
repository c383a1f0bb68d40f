//! Tests for the simulation engine: determinism, the combat pipeline,
//! wave/boss flow, power-ups, time dilation, upgrades and missions.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gridstorm_core::constants::*;
use gridstorm_core::entities::{Enemy, EnemyAbility, Projectile, WaveState};
use gridstorm_core::enums::*;
use gridstorm_core::events::SimulationEvent;
use gridstorm_core::input::InputSnapshot;
use gridstorm_core::types::{Position, Velocity};

use crate::dilation::TimeDilation;
use crate::engine::{SimConfig, SimulationEngine};
use crate::missions::MissionSystem;
use crate::registry::EntityRegistry;
use crate::spawn;
use crate::systems::{boss as boss_sys, combat, player as player_sys, powerups, wave as wave_sys};
use crate::upgrades::UpgradeSystem;

fn test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(7)
}

/// Deterministic input pattern derived from the tick index.
fn scripted_input(tick: u64) -> InputSnapshot {
    InputSnapshot {
        move_x: match tick / 40 % 3 {
            0 => -1,
            1 => 0,
            _ => 1,
        },
        move_y: if tick / 60 % 2 == 0 { 0 } else { 1 },
        fire: tick % 3 != 0,
    }
}

fn player_shot(position: Position, pierce: u32) -> Projectile {
    Projectile {
        position,
        velocity: Velocity::new(0.0, -PLAYER_BULLET_SPEED),
        side: ProjectileSide::Player,
        damage: PLAYER_BULLET_DAMAGE,
        color: COLOR_GREEN,
        size: 4.0,
        pierce,
        pierced: 0,
        kind: ProjectileKind::Standard,
        consumed: false,
    }
}

fn enemy_at(kind: EnemyKind, level: u32, position: Position, rng: &mut ChaCha8Rng) -> Enemy {
    let mut enemy = spawn::enemy(kind, level, rng);
    enemy.position = position;
    enemy
}

/// Run the combat resolver against a bare registry.
fn resolve(registry: &mut EntityRegistry, rng: &mut ChaCha8Rng) -> Vec<SimulationEvent> {
    let mut wave = WaveState::new();
    let mut dilation = TimeDilation::new();
    let mut events = Vec::new();
    combat::run(registry, &mut wave, &mut dilation, rng, &mut events);
    events
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = SimulationEngine::new(SimConfig { seed: 12345 });
    let mut engine_b = SimulationEngine::new(SimConfig { seed: 12345 });

    for tick in 0..300 {
        let input = scripted_input(tick);
        let snap_a = engine_a.tick(&input);
        let snap_b = engine_b.tick(&input);

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "snapshots diverged with the same seed");
    }
}

#[test]
fn test_determinism_different_seeds_diverge() {
    let mut engine_a = SimulationEngine::new(SimConfig { seed: 111 });
    let mut engine_b = SimulationEngine::new(SimConfig { seed: 222 });

    let mut diverged = false;
    for tick in 0..600 {
        let input = scripted_input(tick);
        let json_a = serde_json::to_string(&engine_a.tick(&input)).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick(&input)).unwrap();
        if json_a != json_b {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "different seeds should produce divergent runs");
}

// ---- Tick timing ----

#[test]
fn test_tick_timing_60_ticks_one_second() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    for _ in 0..60 {
        engine.tick(&InputSnapshot::idle());
    }

    assert_eq!(engine.time().tick, 60);
    assert!((engine.time().elapsed_secs - 1.0).abs() < 1e-10);
}

// ---- Game over ----

#[test]
fn test_game_over_fires_once_then_ticks_are_pure_idle() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.tick(&InputSnapshot::idle());

    engine.registry_mut().player.health = 0.0;
    let snap = engine.tick(&InputSnapshot::idle());

    assert_eq!(engine.phase(), GamePhase::GameOver);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, SimulationEvent::GameOver { .. })));

    let tick_before = engine.time().tick;
    let idle = engine.tick(&InputSnapshot::idle());
    assert_eq!(engine.time().tick, tick_before, "idle tick must not advance time");
    assert!(idle.events.is_empty(), "idle tick must emit nothing");
}

// ---- Pierce ----

#[test]
fn test_pierce_one_hits_two_targets_then_is_consumed() {
    let mut rng = test_rng();
    let mut registry = EntityRegistry::new();
    let spot = Position::new(200.0, 200.0);
    for _ in 0..3 {
        let mut enemy = enemy_at(EnemyKind::Worm, 1, spot, &mut rng);
        enemy.health = 1000.0;
        enemy.max_health = 1000.0;
        registry.enemies.push(enemy);
    }
    registry
        .player
        .projectiles
        .push(player_shot(Position::new(210.0, 210.0), 1));

    resolve(&mut registry, &mut rng);

    let damaged = registry
        .enemies
        .iter()
        .filter(|e| e.health < e.max_health)
        .count();
    assert_eq!(damaged, 2, "a pierce-1 projectile damages exactly two targets");
    assert!(registry.player.projectiles[0].consumed);
}

#[test]
fn test_pierce_zero_consumed_on_first_hit() {
    let mut rng = test_rng();
    let mut registry = EntityRegistry::new();
    let spot = Position::new(200.0, 200.0);
    for _ in 0..2 {
        let mut enemy = enemy_at(EnemyKind::Worm, 1, spot, &mut rng);
        enemy.health = 1000.0;
        enemy.max_health = 1000.0;
        registry.enemies.push(enemy);
    }
    registry
        .player
        .projectiles
        .push(player_shot(Position::new(210.0, 210.0), 0));

    resolve(&mut registry, &mut rng);

    let damaged = registry
        .enemies
        .iter()
        .filter(|e| e.health < e.max_health)
        .count();
    assert_eq!(damaged, 1);
    assert!(registry.player.projectiles[0].consumed);
}

// ---- Firewall shield ----

#[test]
fn test_firewall_shield_depletes_before_health() {
    let mut rng = test_rng();
    let mut registry = EntityRegistry::new();
    let enemy = enemy_at(EnemyKind::Firewall, 1, Position::new(200.0, 200.0), &mut rng);
    let full_health = enemy.health;
    registry.enemies.push(enemy);

    // Two 10-damage hits break the 20-point shield without touching health.
    for _ in 0..2 {
        registry
            .player
            .projectiles
            .push(player_shot(Position::new(215.0, 215.0), 0));
        resolve(&mut registry, &mut rng);
        registry.remove_dead(&mut Vec::new());
    }

    let enemy = &registry.enemies[0];
    assert_eq!(enemy.health, full_health, "shield soaked both hits");
    assert!(matches!(
        enemy.ability,
        Some(EnemyAbility::Shield { hit_points, .. }) if hit_points == 0.0
    ));

    // The third hit reaches health.
    registry
        .player
        .projectiles
        .push(player_shot(Position::new(215.0, 215.0), 0));
    let mut rng2 = test_rng();
    resolve(&mut registry, &mut rng2);
    assert!(registry.enemies[0].health < full_health);
}

// ---- Virus split ----

#[test]
fn test_virus_split_spawns_two_lower_level_children_at_half_health() {
    let mut rng = test_rng();
    let mut registry = EntityRegistry::new();
    let mut virus = enemy_at(EnemyKind::Virus, 3, Position::new(300.0, 300.0), &mut rng);
    virus.health = 1.0;
    registry.enemies.push(virus);
    registry
        .player
        .projectiles
        .push(player_shot(Position::new(305.0, 305.0), 0));

    let events = resolve(&mut registry, &mut rng);
    registry.remove_dead(&mut Vec::new());

    let children: Vec<_> = registry
        .enemies
        .iter()
        .filter(|e| e.kind == EnemyKind::Virus)
        .collect();
    assert_eq!(children.len(), 2, "a level-3 Virus splits into exactly two");
    for child in children {
        assert_eq!(child.level, 2);
        assert_eq!(child.health, child.max_health / 2.0);
    }
    assert!(events
        .iter()
        .any(|e| matches!(e, SimulationEvent::EnemyKilled { kind: EnemyKind::Virus, level: 3, .. })));
}

#[test]
fn test_level_one_virus_does_not_split() {
    let mut rng = test_rng();
    let mut registry = EntityRegistry::new();
    let mut virus = enemy_at(EnemyKind::Virus, 1, Position::new(300.0, 300.0), &mut rng);
    virus.health = 1.0;
    registry.enemies.push(virus);
    registry
        .player
        .projectiles
        .push(player_shot(Position::new(305.0, 305.0), 0));

    resolve(&mut registry, &mut rng);
    registry.remove_dead(&mut Vec::new());

    assert!(registry.enemies.is_empty());
}

// ---- Wave director ----

#[test]
fn test_wave_completion_requires_budget_and_empty_field() {
    let mut rng = test_rng();
    let mut registry = EntityRegistry::new();
    let mut wave = WaveState::new();
    let mut events = Vec::new();

    wave.enemies_spawned = wave.spawn_budget();
    registry
        .enemies
        .push(enemy_at(EnemyKind::Basic, 1, Position::new(100.0, 100.0), &mut rng));

    wave_sys::run(&mut wave, &mut registry, 1.0, &mut rng, &mut events);
    assert_eq!(wave.wave, 1, "a live enemy blocks completion");

    registry.enemies.clear();
    wave_sys::run(&mut wave, &mut registry, 1.0, &mut rng, &mut events);
    assert_eq!(wave.wave, 2);
    assert_eq!(wave.director, DirectorPhase::Interlude);
    assert_eq!(wave.enemies_spawned, 0);
    assert!(events
        .iter()
        .any(|e| matches!(e, SimulationEvent::WaveCompleted { wave_number: 1 })));
}

#[test]
fn test_wave_five_completion_hands_off_to_the_boss() {
    let mut rng = test_rng();
    let mut registry = EntityRegistry::new();
    let mut wave = WaveState::new();
    let mut events = Vec::new();

    wave.wave = 5;
    wave.enemies_spawned = wave.spawn_budget();

    wave_sys::run(&mut wave, &mut registry, 1.0, &mut rng, &mut events);

    assert_eq!(wave.director, DirectorPhase::BossActive);
    assert_eq!(wave.wave, 5, "the wave counter advances only on boss death");
    let boss = registry.boss.as_ref().expect("boss should spawn");
    assert_eq!(boss.wave_tier, 1);
    assert_eq!(boss.pattern, BossPattern::Entering);
    assert!(events
        .iter()
        .any(|e| matches!(e, SimulationEvent::BossSpawned { wave_tier: 1 })));
}

#[test]
fn test_early_waves_spawn_only_basic_enemies() {
    let mut engine = SimulationEngine::new(SimConfig { seed: 9 });
    for _ in 0..200 {
        engine.tick(&InputSnapshot::idle());
    }

    let registry = engine.registry();
    assert!(!registry.enemies.is_empty(), "wave 1 should have spawned");
    for enemy in &registry.enemies {
        assert_eq!(enemy.kind, EnemyKind::Basic, "only Basic unlocks at wave 1");
        assert_eq!(enemy.level, 1);
    }
}

// ---- Boss state machine ----

#[test]
fn test_boss_enters_then_activates() {
    let mut rng = test_rng();
    let mut boss = spawn::boss(5, &mut rng);
    let mut events = Vec::new();

    let mut ticks = 0;
    while boss.pattern == BossPattern::Entering && ticks < 1000 {
        boss_sys::run(&mut boss, Position::new(700.0, 800.0), 1.0, &mut rng, &mut events);
        ticks += 1;
    }

    assert_eq!(boss.pattern, BossPattern::Active);
    assert!(boss.position.y > BOSS_ACTIVE_Y);
    assert_eq!(boss.attack_timer, BOSS_FIRST_ATTACK_TICKS);
}

#[test]
fn test_boss_phase_transitions_fire_exactly_once_and_are_monotonic() {
    let mut rng = test_rng();
    let mut boss = spawn::boss(5, &mut rng);
    boss.pattern = BossPattern::Active;
    boss.position = Position::new(600.0, 150.0);
    let player = Position::new(700.0, 800.0);

    // Drop below the phase-2 threshold.
    boss.health = boss.max_health * 0.60;
    let mut events = Vec::new();
    boss_sys::run(&mut boss, player, 1.0, &mut rng, &mut events);

    assert_eq!(boss.phase, BossPhase::Two);
    assert!(boss.invulnerable, "phase 2 grants an invulnerability window");
    assert!(
        boss.projectiles
            .iter()
            .any(|p| p.kind == ProjectileKind::ShieldRing),
        "phase 2 bursts a shield wall"
    );
    let transitions = events
        .iter()
        .filter(|e| matches!(e, SimulationEvent::BossPhaseChanged { .. }))
        .count();
    assert_eq!(transitions, 1);

    // Same health ratio: no re-fire.
    let mut events = Vec::new();
    boss_sys::run(&mut boss, player, 1.0, &mut rng, &mut events);
    assert!(!events
        .iter()
        .any(|e| matches!(e, SimulationEvent::BossPhaseChanged { .. })));

    // Drop below the phase-3 threshold.
    boss.health = boss.max_health * 0.30;
    let mut events = Vec::new();
    boss_sys::run(&mut boss, player, 1.0, &mut rng, &mut events);

    assert_eq!(boss.phase, BossPhase::Three);
    assert!(
        boss.projectiles
            .iter()
            .any(|p| p.kind == ProjectileKind::TimeSlowRing),
        "phase 3 bursts time-slow rings"
    );
    assert!(events.iter().any(|e| matches!(
        e,
        SimulationEvent::BossPhaseChanged {
            old: BossPhase::Two,
            new: BossPhase::Three
        }
    )));
}

#[test]
fn test_invulnerable_boss_ignores_shots() {
    let mut rng = test_rng();
    let mut registry = EntityRegistry::new();
    let mut wave = WaveState::new();
    let mut boss = spawn::boss(5, &mut rng);
    boss.pattern = BossPattern::Active;
    boss.position = Position::new(600.0, 150.0);
    boss.invulnerable = true;
    let full = boss.health;
    registry.boss = Some(boss);

    registry
        .player
        .projectiles
        .push(player_shot(Position::new(650.0, 200.0), 0));
    let mut dilation = TimeDilation::new();
    let mut events = Vec::new();
    combat::run(&mut registry, &mut wave, &mut dilation, &mut rng, &mut events);

    let boss = registry.boss.as_ref().unwrap();
    assert_eq!(boss.health, full);
    assert!(
        !registry.player.projectiles[0].consumed,
        "a shot passing an invulnerable boss is not spent"
    );
}

#[test]
fn test_boss_death_advances_the_wave_and_showers_pickups() {
    let mut rng = test_rng();
    let mut registry = EntityRegistry::new();
    let mut wave = WaveState::new();
    wave.wave = 5;
    wave.director = DirectorPhase::BossActive;

    let mut boss = spawn::boss(5, &mut rng);
    boss.pattern = BossPattern::Active;
    boss.position = Position::new(600.0, 150.0);
    boss.health = 5.0;
    registry.boss = Some(boss);

    registry
        .player
        .projectiles
        .push(player_shot(Position::new(650.0, 200.0), 0));
    let mut dilation = TimeDilation::new();
    let mut events = Vec::new();
    combat::run(&mut registry, &mut wave, &mut dilation, &mut rng, &mut events);

    assert!(events
        .iter()
        .any(|e| matches!(e, SimulationEvent::BossDefeated { .. })));
    assert_eq!(registry.pickups.len() as u32, BOSS_DROP_COUNT);
    assert_eq!(wave.wave, 6);
    assert_eq!(wave.director, DirectorPhase::Interlude);
    assert_eq!(wave.spawn_timer, BOSS_INTERLUDE_TICKS);
    assert!(registry.player.score >= BOSS_KILL_SCORE);
    assert_eq!(registry.player.stats.bosses_defeated, 1);

    registry.remove_dead(&mut events);
    assert!(registry.boss.is_none(), "the sweep clears a defeated boss");
}

#[test]
fn test_special_boss_projectiles_survive_impact() {
    let mut rng = test_rng();
    let mut registry = EntityRegistry::new();
    let player_center = registry.player.center();

    let mut boss = spawn::boss(5, &mut rng);
    boss.pattern = BossPattern::Active;
    boss.projectiles.push(Projectile {
        position: player_center,
        velocity: Velocity::new(0.0, 0.0),
        side: ProjectileSide::Boss,
        damage: BOSS_BULLET_DAMAGE,
        color: COLOR_CYAN,
        size: 10.0,
        pierce: 0,
        pierced: 0,
        kind: ProjectileKind::ShieldRing,
        consumed: false,
    });
    registry.boss = Some(boss);

    let events = resolve(&mut registry, &mut rng);

    let boss = registry.boss.as_ref().unwrap();
    assert!(!boss.projectiles[0].consumed, "shield rings persist through hits");
    assert!(events
        .iter()
        .any(|e| matches!(e, SimulationEvent::PlayerDamaged { .. })));
}

// ---- Player firing ----

#[test]
fn test_quantum_fires_five_shots_in_a_symmetric_fan() {
    let mut player = gridstorm_core::entities::Player::new();
    player.effects.insert(PowerUpKind::Quantum, 500.0);

    player_sys::run(
        &mut player,
        &InputSnapshot {
            move_x: 0,
            move_y: 0,
            fire: true,
        },
        1.0,
    );

    assert_eq!(player.projectiles.len(), 5);
    let center_x = player.position.x + PLAYER_WIDTH / 2.0;
    let mean: f64 = player
        .projectiles
        .iter()
        .map(|p| p.position.x)
        .sum::<f64>()
        / 5.0;
    assert!((mean - center_x).abs() < 1e-9, "fan is symmetric about center");
    assert_eq!(player.stats.shots_fired, 5);
}

#[test]
fn test_rapid_fire_fans_three_and_quantum_takes_precedence() {
    let mut player = gridstorm_core::entities::Player::new();
    player.effects.insert(PowerUpKind::RapidFire, 600.0);
    assert_eq!(powerups::shot_fan(&player), 3);

    player.effects.insert(PowerUpKind::Quantum, 500.0);
    assert_eq!(powerups::shot_fan(&player), 5);
}

#[test]
fn test_fire_cooldown_blocks_the_next_volley() {
    let mut player = gridstorm_core::entities::Player::new();
    let input = InputSnapshot {
        move_x: 0,
        move_y: 0,
        fire: true,
    };

    player_sys::run(&mut player, &input, 1.0);
    assert_eq!(player.projectiles.len(), 1);

    player_sys::run(&mut player, &input, 1.0);
    assert_eq!(player.projectiles.len(), 1, "cooldown still running");
}

// ---- Combo decay ----

#[test]
fn test_combo_resets_only_after_the_full_decay_window() {
    let mut player = gridstorm_core::entities::Player::new();
    player.add_combo();

    for _ in 0..(COMBO_DECAY_TICKS as u32 - 1) {
        player_sys::run(&mut player, &InputSnapshot::idle(), 1.0);
    }
    assert_eq!(player.combo, 1, "one tick early the combo survives");

    player_sys::run(&mut player, &InputSnapshot::idle(), 1.0);
    assert_eq!(player.combo, 0);
}

#[test]
fn test_combo_decay_ignores_time_dilation() {
    let mut player = gridstorm_core::entities::Player::new();
    player.add_combo();

    for _ in 0..(COMBO_DECAY_TICKS as u32) {
        player_sys::run(&mut player, &InputSnapshot::idle(), 0.3);
    }
    assert_eq!(player.combo, 0, "the decay window counts real ticks");
}

// ---- Time dilation ----

#[test]
fn test_time_dilation_activate_is_refused_on_cooldown_without_mutation() {
    let mut dilation = TimeDilation::new();
    assert!(dilation.activate(300.0, 0.3));
    assert!((dilation.current_scale() - 0.3).abs() < 1e-12);

    let before = dilation.clone();
    assert!(!dilation.activate(300.0, 0.3));
    assert_eq!(dilation, before, "a refused activation never mutates state");
}

#[test]
fn test_time_dilation_expires_then_cooldown_gates_reactivation() {
    let mut dilation = TimeDilation::new();
    dilation.activate(300.0, 0.3);

    for _ in 0..300 {
        dilation.tick();
    }
    assert!((dilation.current_scale() - 1.0).abs() < 1e-12, "slow motion ended");
    assert!(!dilation.activate(300.0, 0.3), "cooldown still running");

    for _ in 0..600 {
        dilation.tick();
    }
    assert!(dilation.activate(300.0, 0.3), "cooldown elapsed");
}

#[test]
fn test_time_slow_pickup_engages_dilation() {
    let mut rng = test_rng();
    let mut registry = EntityRegistry::new();
    let mut wave = WaveState::new();
    let mut dilation = TimeDilation::new();
    let mut events = Vec::new();

    let center = registry.player.center();
    registry
        .pickups
        .push(spawn::pickup_of(PowerUpKind::TimeSlow, center));

    combat::run(&mut registry, &mut wave, &mut dilation, &mut rng, &mut events);

    assert!((dilation.current_scale() - TIME_SLOW_FACTOR).abs() < 1e-12);
    assert!(registry.player.effect_active(PowerUpKind::TimeSlow));
    assert_eq!(registry.player.stats.powerups_collected, 1);
    assert_eq!(registry.player.score, PICKUP_SCORE);
    assert!(events
        .iter()
        .any(|e| matches!(e, SimulationEvent::PowerupCollected { kind: PowerUpKind::TimeSlow })));
}

// ---- Power-up effects ----

#[test]
fn test_effect_durations_extend_but_never_stack() {
    let mut player = gridstorm_core::entities::Player::new();
    let mut dilation = TimeDilation::new();

    powerups::apply(PowerUpKind::RapidFire, &mut player, &mut dilation);
    assert_eq!(player.effects[&PowerUpKind::RapidFire], RAPID_FIRE_DURATION);

    // A second collection while half the window remains extends back to
    // the full duration, not to 1.5 windows.
    player.effects.insert(PowerUpKind::RapidFire, RAPID_FIRE_DURATION / 2.0);
    powerups::apply(PowerUpKind::RapidFire, &mut player, &mut dilation);
    assert_eq!(player.effects[&PowerUpKind::RapidFire], RAPID_FIRE_DURATION);
}

#[test]
fn test_health_pickup_heals_clamped_to_max() {
    let mut player = gridstorm_core::entities::Player::new();
    let mut dilation = TimeDilation::new();
    player.health = 90.0;

    powerups::apply(PowerUpKind::Health, &mut player, &mut dilation);

    assert_eq!(player.health, player.max_health);
    assert!(!player.effect_active(PowerUpKind::Health), "no timer for Health");
}

#[test]
fn test_nano_bots_heal_passively_while_active() {
    let mut player = gridstorm_core::entities::Player::new();
    player.health = 50.0;
    player.effects.insert(PowerUpKind::NanoBots, 10.0);

    for _ in 0..10 {
        powerups::age_effects(&mut player, 1.0);
    }

    assert_eq!(player.health, 60.0);
    assert!(!player.effect_active(PowerUpKind::NanoBots), "window expired");
}

// ---- Registry sweep ----

#[test]
fn test_fallen_enemy_damages_player_and_is_removed() {
    let mut rng = test_rng();
    let mut registry = EntityRegistry::new();
    let mut enemy = enemy_at(
        EnemyKind::Basic,
        2,
        Position::new(300.0, ARENA_HEIGHT + OFFSCREEN_MARGIN + 10.0),
        &mut rng,
    );
    enemy.level = 2;
    registry.enemies.push(enemy);

    let mut events = Vec::new();
    registry.remove_dead(&mut events);

    assert!(registry.enemies.is_empty());
    assert_eq!(
        registry.player.health,
        PLAYER_BASE_MAX_HEALTH - ENEMY_FALLEN_DAMAGE_PER_LEVEL * 2.0
    );
    assert!(events
        .iter()
        .any(|e| matches!(e, SimulationEvent::PlayerDamaged { fatal: false, .. })));
}

#[test]
fn test_sweep_drops_consumed_projectiles_and_expired_pickups() {
    let mut rng = test_rng();
    let mut registry = EntityRegistry::new();

    let mut spent = player_shot(Position::new(100.0, 100.0), 0);
    spent.consumed = true;
    registry.player.projectiles.push(spent);
    registry
        .player
        .projectiles
        .push(player_shot(Position::new(100.0, -20.0), 0));

    let mut stale = spawn::pickup(Position::new(100.0, 100.0), &mut rng);
    stale.lifetime = 0.0;
    registry.pickups.push(stale);

    registry.remove_dead(&mut Vec::new());

    assert!(registry.player.projectiles.is_empty());
    assert!(registry.pickups.is_empty());
}

// ---- Upgrades ----

#[test]
fn test_upgrade_purchase_refused_without_points() {
    let mut upgrades = UpgradeSystem::new();
    let mut player = gridstorm_core::entities::Player::new();

    assert!(!upgrades.purchase(&mut player, UpgradeKind::Damage));
    assert_eq!(player.damage_multiplier, 1.0);
}

#[test]
fn test_upgrade_purchase_applies_effect_and_costs_grow() {
    let mut upgrades = UpgradeSystem::new();
    let mut player = gridstorm_core::entities::Player::new();
    upgrades.award(1000);

    assert_eq!(upgrades.cost(UpgradeKind::Damage), Some(100));
    assert!(upgrades.purchase(&mut player, UpgradeKind::Damage));
    assert!((player.damage_multiplier - 1.2).abs() < 1e-12);
    assert_eq!(upgrades.cost(UpgradeKind::Damage), Some(150));
    assert_eq!(upgrades.skill_points, 900);
}

#[test]
fn test_upgrade_refused_at_level_cap() {
    let mut upgrades = UpgradeSystem::new();
    let mut player = gridstorm_core::entities::Player::new();
    upgrades.award(1_000_000);

    for _ in 0..2 {
        assert!(upgrades.purchase(&mut player, UpgradeKind::AutoCollect));
    }
    assert!(!upgrades.purchase(&mut player, UpgradeKind::AutoCollect));
    assert_eq!(player.auto_collect_radius, 100.0);
    assert_eq!(upgrades.cost(UpgradeKind::AutoCollect), None);
}

// ---- Missions ----

#[test]
fn test_missions_complete_once_and_pay_skill_points() {
    let mut rng = test_rng();
    let mut missions = MissionSystem::new(&mut rng);
    let mut upgrades = UpgradeSystem::new();
    let mut events = Vec::new();

    // Satisfies every goal in the catalog, so completion order cannot
    // depend on which replacements get drawn.
    let stats = gridstorm_core::entities::RunStats {
        enemies_killed: 10,
        powerups_collected: 5,
        waves_completed: 5,
        bosses_defeated: 1,
        shots_fired: 100,
        shots_hit: 90,
        highest_combo: 20,
        ..Default::default()
    };

    for _ in 0..6 {
        missions.update(&stats, &mut upgrades, &mut events, &mut rng);
    }

    let completed = events
        .iter()
        .filter(|e| matches!(e, SimulationEvent::MissionCompleted { .. }))
        .count();
    assert_eq!(completed, 6, "the whole catalog completes exactly once");
    assert_eq!(upgrades.skill_points, 500 + 300 + 1000 + 2000 + 1500 + 800);
    assert_eq!(missions.active_count(), 0, "the pool is exhausted");

    // Nothing left to pay out.
    let before = upgrades.skill_points;
    missions.update(&stats, &mut upgrades, &mut events, &mut rng);
    assert_eq!(upgrades.skill_points, before);
}

// ---- Invariants under load ----

#[test]
fn test_resources_never_negative_over_a_long_run() {
    let mut engine = SimulationEngine::new(SimConfig { seed: 31337 });

    for tick in 0..2000 {
        let snap = engine.tick(&scripted_input(tick));

        assert!(snap.player.health >= 0.0);
        assert!(snap.player.shield >= 0.0);
        for enemy in &snap.enemies {
            assert!(enemy.health_ratio >= 0.0);
            if let Some(ratio) = enemy.shield_ratio {
                assert!(ratio >= 0.0);
            }
        }
        if let Some(boss) = &snap.boss {
            assert!(boss.health_ratio >= 0.0);
        }

        if engine.phase() == GamePhase::GameOver {
            break;
        }
    }
}
