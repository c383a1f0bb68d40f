//! Events emitted by the simulation for presentation and persistence
//! collaborators. Ordered within a tick; drained into each snapshot.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Position, Rgb};

/// One simulation event. Collaborators consume these to drive particles,
/// audio, cutscene cues and high-score persistence; the core never depends
/// on their handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimulationEvent {
    /// An enemy (or boss minion) died and was scored.
    EnemyKilled {
        kind: EnemyKind,
        level: u32,
        position: Position,
        score_awarded: u64,
    },
    /// A boss took the arena; mundane spawning is suspended.
    BossSpawned { wave_tier: u32 },
    /// Boss crossed a health threshold. Fires exactly once per transition.
    BossPhaseChanged { old: BossPhase, new: BossPhase },
    /// Boss died.
    BossDefeated { score_awarded: u64 },
    /// The player collected a pickup.
    PowerupCollected { kind: PowerUpKind },
    /// A wave's budget was spawned and cleared.
    WaveCompleted { wave_number: u32 },
    /// Damage landed on the player (shield or health).
    PlayerDamaged { amount: f64, fatal: bool },
    /// Terminal transition. Not an error; the run is simply over.
    GameOver {
        final_score: u64,
        wave_reached: u32,
        accuracy: f64,
    },
    /// A mission hit its target and paid out skill points.
    MissionCompleted { name: String, reward: u32 },
    /// Request for the (external) particle system.
    ExplosionRequested {
        position: Position,
        color: Rgb,
        intensity: u32,
    },
}
