//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Enemy kind. Per-kind stats are functions of the enemy level;
/// see the profile tables in the ai crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Baseline grunt with no ability.
    Basic,
    /// Tough mid-tier shooter.
    Hacker,
    /// Fast and fragile; teleports on a cooldown.
    Glitch,
    /// Slow tank with shield hit points that deplete before health.
    Firewall,
    /// Swarmer; splits into two lower-level copies on death.
    Virus,
    /// Heavy; spawns minions while below half health.
    Worm,
    /// Flickers in and out of stealth on a timer.
    Trojan,
}

/// Power-up kind. Health is instantaneous; every other kind runs a timer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum PowerUpKind {
    Health,
    RapidFire,
    Shield,
    DoublePoints,
    TimeSlow,
    MatrixVision,
    NanoBots,
    Quantum,
}

impl PowerUpKind {
    /// All kinds, for uniform random drops.
    pub const ALL: [PowerUpKind; 8] = [
        PowerUpKind::Health,
        PowerUpKind::RapidFire,
        PowerUpKind::Shield,
        PowerUpKind::DoublePoints,
        PowerUpKind::TimeSlow,
        PowerUpKind::MatrixVision,
        PowerUpKind::NanoBots,
        PowerUpKind::Quantum,
    ];

    /// Effect duration in ticks. Zero means the effect is applied instantly.
    pub fn duration_ticks(self) -> f64 {
        match self {
            PowerUpKind::Health => 0.0,
            PowerUpKind::RapidFire => RAPID_FIRE_DURATION,
            PowerUpKind::Shield => SHIELD_WINDOW_DURATION,
            PowerUpKind::DoublePoints => DOUBLE_POINTS_DURATION,
            PowerUpKind::TimeSlow => TIME_SLOW_DURATION,
            PowerUpKind::MatrixVision => MATRIX_VISION_DURATION,
            PowerUpKind::NanoBots => NANO_BOTS_DURATION,
            PowerUpKind::Quantum => QUANTUM_DURATION,
        }
    }
}

/// Which side fired a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileSide {
    Player,
    Enemy,
    Boss,
}

/// Projectile behavior selector. Every projectile has the same shape;
/// the kind selects interpretation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Ordinary bullet, consumed on impact (pierce budget permitting).
    #[default]
    Standard,
    /// Boss laser segment. Never consumed by collision.
    Laser,
    /// Boss shield-wall ring. Never consumed by collision.
    ShieldRing,
    /// Boss time-slow ring. Never consumed by collision.
    TimeSlowRing,
}

impl ProjectileKind {
    /// Special projectiles persist through collisions for their natural
    /// lifetime (off-arena, or the boss being cleared).
    pub fn survives_impact(self) -> bool {
        !matches!(self, ProjectileKind::Standard)
    }
}

/// Boss behavior tier, driven by health-ratio thresholds.
/// Monotonically non-decreasing over a boss's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BossPhase {
    One,
    Two,
    Three,
}

/// Boss lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossPattern {
    /// Descending into the arena.
    Entering,
    /// Fighting; attack selection depends on the phase.
    Active,
    /// Dead, awaiting removal by the registry sweep.
    Defeated,
}

/// Wave director state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectorPhase {
    /// Feeding the current wave's spawn budget.
    #[default]
    Spawning,
    /// Between waves; the spawn timer counts down the rest period.
    Interlude,
    /// A boss owns the arena; mundane spawning is suspended.
    BossActive,
}

/// Top-level game phase. There is no internal pause state — the caller
/// pauses the simulation by withholding ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Running,
    GameOver,
}

/// Purchasable upgrade track.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum UpgradeKind {
    Damage,
    FireRate,
    Health,
    Speed,
    ShieldRegen,
    CriticalChance,
    BulletPierce,
    AutoCollect,
}

/// What a mission measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionGoal {
    EnemiesKilled,
    PowerupsCollected,
    WavesSurvived,
    BossesDefeated,
    AccuracyPercent,
    ComboReached,
}
