//! Entity registry: the single owner of the mutable entity collections.
//!
//! Projectiles live with the entity that fired them; a boss exclusively
//! owns its minions and projectiles. Resolution phases only mark entities
//! dead/consumed/collected — `remove_dead` is the one place removal
//! happens, once per frame, so no phase ever invalidates another's
//! iteration.

use serde::{Deserialize, Serialize};

use gridstorm_core::constants::*;
use gridstorm_core::entities::{Boss, DamageResult, Enemy, Player, PowerUpPickup, Projectile};
use gridstorm_core::enums::BossPattern;
use gridstorm_core::events::SimulationEvent;
use gridstorm_core::types::Position;

/// Owns the player, mundane enemies, the optional boss, and pickups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityRegistry {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub boss: Option<Boss>,
    pub pickups: Vec<PowerUpPickup>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self {
            player: Player::new(),
            enemies: Vec::new(),
            boss: None,
            pickups: Vec::new(),
        }
    }

    pub fn spawn_enemy(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    pub fn spawn_pickup(&mut self, pickup: PowerUpPickup) {
        self.pickups.push(pickup);
    }

    /// The per-frame sweep. Removes everything the resolution phases
    /// marked, plus entities whose lifetime ended off-arena. An enemy that
    /// fell past the bottom edge inflicts contact damage on the player
    /// before it is dropped.
    pub fn remove_dead(&mut self, events: &mut Vec<SimulationEvent>) {
        self.player
            .projectiles
            .retain(|p| !p.consumed && p.position.y > -10.0);

        let player = &mut self.player;
        self.enemies.retain(|enemy| {
            if enemy.dead {
                return false;
            }
            if enemy.position.y > ARENA_HEIGHT + OFFSCREEN_MARGIN {
                let amount = ENEMY_FALLEN_DAMAGE_PER_LEVEL * enemy.level as f64;
                if let DamageResult::Taken { fatal } = player.take_damage(amount) {
                    events.push(SimulationEvent::PlayerDamaged { amount, fatal });
                }
                return false;
            }
            true
        });

        for enemy in &mut self.enemies {
            sweep_projectiles(&mut enemy.projectiles);
        }

        self.pickups.retain(|p| {
            !p.collected && p.lifetime > 0.0 && p.position.y < ARENA_HEIGHT + 20.0
        });

        if let Some(boss) = &mut self.boss {
            boss.minions.retain(|m| !m.dead);
            for minion in &mut boss.minions {
                sweep_projectiles(&mut minion.projectiles);
            }
            sweep_projectiles(&mut boss.projectiles);
        }
        if self
            .boss
            .as_ref()
            .is_some_and(|b| b.pattern == BossPattern::Defeated)
        {
            self.boss = None;
        }
    }
}

/// Drop consumed projectiles and those past the arena margin.
fn sweep_projectiles(projectiles: &mut Vec<Projectile>) {
    projectiles.retain(|p| !p.consumed && in_bounds(p.position));
}

fn in_bounds(p: Position) -> bool {
    p.x > -OFFSCREEN_MARGIN
        && p.x < ARENA_WIDTH + OFFSCREEN_MARGIN
        && p.y > -OFFSCREEN_MARGIN
        && p.y < ARENA_HEIGHT + OFFSCREEN_MARGIN
}
