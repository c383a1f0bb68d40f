//! Snapshot builder: the read-only state handed to collaborators each tick.

use gridstorm_core::constants::COMBO_DECAY_TICKS;
use gridstorm_core::entities::{Enemy, EnemyAbility, Player, Projectile, WaveState};
use gridstorm_core::enums::GamePhase;
use gridstorm_core::events::SimulationEvent;
use gridstorm_core::state::{
    BossView, EffectView, EnemyView, GameSnapshot, PickupView, PlayerView, ProjectileView,
};
use gridstorm_core::types::SimTime;

use crate::missions::MissionSystem;
use crate::registry::EntityRegistry;

/// Assemble the complete visible state plus this tick's event stream.
#[allow(clippy::too_many_arguments)]
pub fn build(
    registry: &EntityRegistry,
    wave: &WaveState,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    missions: &MissionSystem,
    skill_points: u32,
    events: Vec<SimulationEvent>,
) -> GameSnapshot {
    let mut enemies: Vec<EnemyView> = registry
        .enemies
        .iter()
        .map(|e| enemy_view(e, false))
        .collect();

    let mut projectiles: Vec<ProjectileView> = registry
        .player
        .projectiles
        .iter()
        .map(projectile_view)
        .collect();
    for enemy in &registry.enemies {
        projectiles.extend(enemy.projectiles.iter().map(projectile_view));
    }

    let boss = registry.boss.as_ref().map(|b| {
        enemies.extend(b.minions.iter().map(|m| enemy_view(m, true)));
        for minion in &b.minions {
            projectiles.extend(minion.projectiles.iter().map(projectile_view));
        }
        projectiles.extend(b.projectiles.iter().map(projectile_view));

        BossView {
            name: b.name.clone(),
            wave_tier: b.wave_tier,
            position: b.position,
            size: b.size,
            health_ratio: b.health_ratio(),
            phase: b.phase,
            invulnerable: b.invulnerable,
            color: b.color,
        }
    });

    let pickups = registry
        .pickups
        .iter()
        .map(|p| PickupView {
            position: p.position,
            kind: p.kind,
            remaining_lifetime: p.lifetime,
        })
        .collect();

    GameSnapshot {
        time,
        phase,
        wave: wave.wave,
        director: wave.director,
        time_scale,
        player: player_view(&registry.player),
        enemies,
        boss,
        projectiles,
        pickups,
        missions: missions.views(),
        skill_points,
        stats: registry.player.stats,
        events,
    }
}

fn player_view(player: &Player) -> PlayerView {
    PlayerView {
        position: player.position,
        health: player.health,
        max_health: player.max_health,
        shield: player.shield,
        max_shield: player.max_shield,
        score: player.score,
        combo: player.combo,
        combo_window: (player.combo_timer / COMBO_DECAY_TICKS).clamp(0.0, 1.0),
        invulnerable: player.invulnerable_timer > 0.0,
        active_effects: player
            .effects
            .iter()
            .map(|(&kind, &remaining)| EffectView {
                kind,
                remaining_ticks: remaining,
            })
            .collect(),
    }
}

fn enemy_view(enemy: &Enemy, boss_minion: bool) -> EnemyView {
    let shield_ratio = match &enemy.ability {
        Some(EnemyAbility::Shield {
            hit_points,
            max_hit_points,
        }) if *max_hit_points > 0.0 => Some(hit_points / max_hit_points),
        _ => None,
    };

    EnemyView {
        kind: enemy.kind,
        level: enemy.level,
        position: enemy.position,
        size: enemy.size,
        health_ratio: enemy.health_ratio(),
        color: enemy.color,
        stealthed: enemy.stealthed(),
        shield_ratio,
        boss_minion,
    }
}

fn projectile_view(projectile: &Projectile) -> ProjectileView {
    ProjectileView {
        position: projectile.position,
        size: projectile.size,
        color: projectile.color,
        kind: projectile.kind,
        side: projectile.side,
    }
}
