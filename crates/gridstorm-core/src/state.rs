//! Game state snapshot — the complete visible state handed to the
//! presentation layer after each tick.

use serde::{Deserialize, Serialize};

use crate::entities::RunStats;
use crate::enums::*;
use crate::events::SimulationEvent;
use crate::types::{Position, Rgb, SimTime};

/// Complete read-only state built after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub wave: u32,
    pub director: DirectorPhase,
    pub time_scale: f64,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub boss: Option<BossView>,
    pub projectiles: Vec<ProjectileView>,
    pub pickups: Vec<PickupView>,
    pub missions: Vec<MissionView>,
    pub skill_points: u32,
    pub stats: RunStats,
    /// This tick's ordered event stream.
    pub events: Vec<SimulationEvent>,
}

/// Player resource bars and status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub health: f64,
    pub max_health: f64,
    pub shield: f64,
    pub max_shield: f64,
    pub score: u64,
    pub combo: u32,
    /// Fraction of the combo decay window remaining, in [0, 1].
    pub combo_window: f64,
    pub invulnerable: bool,
    /// Active timed effects with remaining ticks.
    pub active_effects: Vec<EffectView>,
}

/// One active power-up effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectView {
    pub kind: PowerUpKind,
    pub remaining_ticks: f64,
}

/// A live enemy on the field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub kind: EnemyKind,
    pub level: u32,
    pub position: Position,
    pub size: f64,
    pub health_ratio: f64,
    pub color: Rgb,
    /// Trojan flicker state.
    pub stealthed: bool,
    /// Firewall shield fraction, when the kind carries one.
    pub shield_ratio: Option<f64>,
    /// True for boss-owned minions.
    pub boss_minion: bool,
}

/// The boss header bar and body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossView {
    pub name: String,
    pub wave_tier: u32,
    pub position: Position,
    pub size: f64,
    pub health_ratio: f64,
    pub phase: BossPhase,
    pub invulnerable: bool,
    pub color: Rgb,
}

/// A projectile in flight, any side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub size: f64,
    pub color: Rgb,
    pub kind: ProjectileKind,
    pub side: ProjectileSide,
}

/// A falling pickup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupView {
    pub position: Position,
    pub kind: PowerUpKind,
    pub remaining_lifetime: f64,
}

/// An active mission and its progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionView {
    pub name: String,
    pub goal: MissionGoal,
    pub target: u32,
    pub progress: u32,
    pub reward: u32,
}
