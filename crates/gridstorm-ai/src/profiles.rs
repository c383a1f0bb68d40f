//! Per-kind enemy stat profiles.
//!
//! Every stat is a linear function of the enemy level. The tables are the
//! single source of truth for enemy tuning; spawn factories and tests both
//! read them from here.

use gridstorm_core::constants::*;
use gridstorm_core::entities::EnemyAbility;
use gridstorm_core::enums::EnemyKind;
use gridstorm_core::types::Rgb;

/// Stat block for one enemy kind at one level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    /// Bounding-box edge length (pixels).
    pub size: f64,
    /// Movement speed (pixels per tick).
    pub speed: f64,
    /// Maximum health.
    pub max_health: f64,
    /// Base score value on death.
    pub value: u64,
    /// Chance to fire when the shoot timer expires.
    pub shoot_chance: f64,
    pub color: Rgb,
}

/// Compute the stat block for a kind at a level.
pub fn profile_for(kind: EnemyKind, level: u32) -> EnemyProfile {
    let l = level as f64;
    match kind {
        EnemyKind::Basic => EnemyProfile {
            size: 20.0 + l * 5.0,
            speed: 1.0 + l * 0.3,
            max_health: 20.0 + l * 10.0,
            value: 10 * level as u64,
            shoot_chance: 0.10,
            color: COLOR_RED,
        },
        EnemyKind::Hacker => EnemyProfile {
            size: 25.0 + l * 4.0,
            speed: 0.8 + l * 0.2,
            max_health: 30.0 + l * 15.0,
            value: 15 * level as u64,
            shoot_chance: 0.15,
            color: COLOR_PURPLE,
        },
        EnemyKind::Glitch => EnemyProfile {
            size: 18.0 + l * 3.0,
            speed: 1.5 + l * 0.4,
            max_health: 15.0 + l * 8.0,
            value: 12 * level as u64,
            shoot_chance: 0.05,
            color: COLOR_CYAN,
        },
        EnemyKind::Firewall => EnemyProfile {
            size: 30.0 + l * 6.0,
            speed: 0.5 + l * 0.1,
            max_health: 50.0 + l * 25.0,
            value: 20 * level as u64,
            shoot_chance: 0.20,
            color: COLOR_BLUE,
        },
        EnemyKind::Virus => EnemyProfile {
            size: 15.0 + l * 2.0,
            speed: 2.0 + l * 0.5,
            max_health: 10.0 + l * 5.0,
            value: 8 * level as u64,
            shoot_chance: 0.30,
            color: COLOR_ORANGE,
        },
        EnemyKind::Worm => EnemyProfile {
            size: 40.0 + l * 8.0,
            speed: 0.3 + l * 0.05,
            max_health: 100.0 + l * 50.0,
            value: 30 * level as u64,
            shoot_chance: 0.25,
            color: COLOR_BROWN,
        },
        EnemyKind::Trojan => EnemyProfile {
            size: 22.0 + l * 4.0,
            speed: 0.9 + l * 0.2,
            max_health: 25.0 + l * 12.0,
            value: 18 * level as u64,
            shoot_chance: 0.18,
            color: COLOR_PINK,
        },
    }
}

/// Initial ability state for a kind. The Virus split is death-triggered
/// and carries no state; Basic and Hacker have none.
pub fn initial_ability(kind: EnemyKind) -> Option<EnemyAbility> {
    match kind {
        EnemyKind::Glitch => Some(EnemyAbility::Teleport {
            cooldown: GLITCH_TELEPORT_COOLDOWN,
        }),
        EnemyKind::Firewall => Some(EnemyAbility::Shield {
            hit_points: FIREWALL_SHIELD_HP,
            max_hit_points: FIREWALL_SHIELD_HP,
        }),
        EnemyKind::Trojan => Some(EnemyAbility::Stealth { timer: 0.0 }),
        EnemyKind::Worm => Some(EnemyAbility::SpawnTimer {
            cooldown: WORM_SPAWN_COOLDOWN,
        }),
        EnemyKind::Basic | EnemyKind::Hacker | EnemyKind::Virus => None,
    }
}

/// Aggro range: the distance at which a kind switches from patrol to attack.
pub fn aggro_range(level: u32) -> f64 {
    300.0 + level as f64 * 50.0
}
