//! Mission tracking.
//!
//! Two missions are active at a run's start; progress is recomputed from
//! the run statistics each frame, and a completed mission pays its reward
//! into the upgrade skill-point balance and draws a replacement.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use serde::{Deserialize, Serialize};

use gridstorm_core::entities::RunStats;
use gridstorm_core::enums::MissionGoal;
use gridstorm_core::events::SimulationEvent;
use gridstorm_core::state::MissionView;

use crate::upgrades::UpgradeSystem;

/// Most missions active at once.
const MAX_ACTIVE_MISSIONS: usize = 3;

/// One mission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mission {
    pub name: String,
    pub goal: MissionGoal,
    pub target: u32,
    pub reward: u32,
    pub progress: u32,
}

impl Mission {
    fn new(name: &str, goal: MissionGoal, target: u32, reward: u32) -> Self {
        Self {
            name: name.to_string(),
            goal,
            target,
            reward,
            progress: 0,
        }
    }
}

/// The mission catalog and the run's active slice of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionSystem {
    active: Vec<Mission>,
    pool: Vec<Mission>,
}

fn catalog() -> Vec<Mission> {
    vec![
        Mission::new("First Blood", MissionGoal::EnemiesKilled, 10, 500),
        Mission::new("Power Collector", MissionGoal::PowerupsCollected, 5, 300),
        Mission::new("Survivor", MissionGoal::WavesSurvived, 5, 1000),
        Mission::new("Boss Slayer", MissionGoal::BossesDefeated, 1, 2000),
        Mission::new("Perfect Accuracy", MissionGoal::AccuracyPercent, 80, 1500),
        Mission::new("Combo Master", MissionGoal::ComboReached, 10, 800),
    ]
}

impl MissionSystem {
    /// Draw two distinct starting missions from the first four entries.
    pub fn new(rng: &mut ChaCha8Rng) -> Self {
        let mut pool = catalog();

        let first = rng.gen_range(0..4);
        let mut second = rng.gen_range(0..3);
        if second >= first {
            second += 1;
        }
        let (hi, lo) = (first.max(second), first.min(second));
        let active = vec![pool.remove(hi), pool.remove(lo)];

        Self { active, pool }
    }

    /// Recompute progress and resolve completions.
    pub fn update(
        &mut self,
        stats: &RunStats,
        upgrades: &mut UpgradeSystem,
        events: &mut Vec<SimulationEvent>,
        rng: &mut ChaCha8Rng,
    ) {
        for mission in &mut self.active {
            mission.progress = measure(mission.goal, stats);
        }

        let mut i = 0;
        while i < self.active.len() {
            if self.active[i].progress < self.active[i].target {
                i += 1;
                continue;
            }

            let mission = self.active.remove(i);
            upgrades.award(mission.reward);
            events.push(SimulationEvent::MissionCompleted {
                name: mission.name.clone(),
                reward: mission.reward,
            });

            if self.active.len() < MAX_ACTIVE_MISSIONS && !self.pool.is_empty() {
                let next = rng.gen_range(0..self.pool.len());
                self.active.push(self.pool.remove(next));
            }
        }
    }

    pub fn views(&self) -> Vec<MissionView> {
        self.active
            .iter()
            .map(|m| MissionView {
                name: m.name.clone(),
                goal: m.goal,
                target: m.target,
                progress: m.progress,
                reward: m.reward,
            })
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

/// Read the figure a goal measures out of the run statistics.
fn measure(goal: MissionGoal, stats: &RunStats) -> u32 {
    match goal {
        MissionGoal::EnemiesKilled => stats.enemies_killed,
        MissionGoal::PowerupsCollected => stats.powerups_collected,
        MissionGoal::WavesSurvived => stats.waves_completed,
        MissionGoal::BossesDefeated => stats.bosses_defeated,
        MissionGoal::AccuracyPercent => (stats.accuracy() * 100.0) as u32,
        MissionGoal::ComboReached => stats.highest_combo,
    }
}
