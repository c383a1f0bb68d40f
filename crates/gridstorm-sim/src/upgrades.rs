//! Between-wave upgrade purchases.
//!
//! Skill points come from missions; purchases follow the no-exception
//! contract: a call that cannot proceed returns false and changes nothing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use gridstorm_core::entities::Player;
use gridstorm_core::enums::UpgradeKind;

/// Cost growth per level.
const COST_MULTIPLIER: f64 = 1.5;

/// One purchasable track.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UpgradeTrack {
    pub level: u32,
    pub max_level: u32,
    pub base_cost: u32,
}

/// All upgrade tracks plus the skill-point balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeSystem {
    pub skill_points: u32,
    tracks: BTreeMap<UpgradeKind, UpgradeTrack>,
}

impl Default for UpgradeSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl UpgradeSystem {
    pub fn new() -> Self {
        let mut tracks = BTreeMap::new();
        let mut add = |kind, base_cost, max_level| {
            tracks.insert(
                kind,
                UpgradeTrack {
                    level: 0,
                    max_level,
                    base_cost,
                },
            );
        };
        add(UpgradeKind::Damage, 100, 5);
        add(UpgradeKind::FireRate, 150, 5);
        add(UpgradeKind::Health, 200, 5);
        add(UpgradeKind::Speed, 80, 5);
        add(UpgradeKind::ShieldRegen, 300, 3);
        add(UpgradeKind::CriticalChance, 250, 5);
        add(UpgradeKind::BulletPierce, 400, 3);
        add(UpgradeKind::AutoCollect, 350, 2);

        Self {
            skill_points: 0,
            tracks,
        }
    }

    /// Credit mission rewards.
    pub fn award(&mut self, points: u32) {
        self.skill_points += points;
    }

    pub fn level(&self, kind: UpgradeKind) -> u32 {
        self.tracks[&kind].level
    }

    /// Cost of the next level, or None at the cap.
    pub fn cost(&self, kind: UpgradeKind) -> Option<u32> {
        let track = &self.tracks[&kind];
        if track.level >= track.max_level {
            return None;
        }
        Some((track.base_cost as f64 * COST_MULTIPLIER.powi(track.level as i32)) as u32)
    }

    /// Buy the next level of a track and apply its effect to the player.
    /// Returns false (and changes nothing) at the level cap or when skill
    /// points are insufficient.
    pub fn purchase(&mut self, player: &mut Player, kind: UpgradeKind) -> bool {
        let track = match self.tracks.get_mut(&kind) {
            Some(track) => track,
            None => return false,
        };
        if track.level >= track.max_level {
            return false;
        }

        let cost = (track.base_cost as f64 * COST_MULTIPLIER.powi(track.level as i32)) as u32;
        if self.skill_points < cost {
            return false;
        }

        self.skill_points -= cost;
        track.level += 1;
        apply_effect(player, kind, track.level);
        true
    }
}

/// Recompute the player stat a track controls from its new level.
fn apply_effect(player: &mut Player, kind: UpgradeKind, level: u32) {
    let l = level as f64;
    match kind {
        UpgradeKind::Damage => player.damage_multiplier = 1.0 + l * 0.2,
        UpgradeKind::FireRate => {
            player.fire_cooldown_base = (20.0 - l * 2.0).max(5.0);
        }
        UpgradeKind::Health => {
            player.max_health = 100.0 + l * 20.0;
            player.health = player.health.min(player.max_health);
        }
        UpgradeKind::Speed => player.speed = 5.0 + l * 0.5,
        UpgradeKind::ShieldRegen => player.shield_regen_rate = l * 0.01,
        UpgradeKind::CriticalChance => player.critical_chance = l * 0.05,
        UpgradeKind::BulletPierce => player.bullet_pierce = level,
        UpgradeKind::AutoCollect => player.auto_collect_radius = l * 50.0,
    }
}
