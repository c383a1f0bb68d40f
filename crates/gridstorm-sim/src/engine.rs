//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the entity registry and all simulation state,
//! consumes one `InputSnapshot` per tick, runs the systems in a fixed
//! order, and produces a `GameSnapshot` carrying the tick's event stream.
//! Completely headless, enabling deterministic testing: the same seed and
//! input sequence reproduce the same snapshot stream byte for byte.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gridstorm_core::entities::WaveState;
use gridstorm_core::enums::{GamePhase, UpgradeKind};
use gridstorm_core::events::SimulationEvent;
use gridstorm_core::input::InputSnapshot;
use gridstorm_core::state::GameSnapshot;
use gridstorm_core::types::SimTime;

use crate::dilation::TimeDilation;
use crate::missions::MissionSystem;
use crate::registry::EntityRegistry;
use crate::systems;
use crate::upgrades::UpgradeSystem;

/// Configuration for starting a new run.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the registry and all sim state.
pub struct SimulationEngine {
    registry: EntityRegistry,
    wave: WaveState,
    time: SimTime,
    phase: GamePhase,
    dilation: TimeDilation,
    upgrades: UpgradeSystem,
    missions: MissionSystem,
    rng: ChaCha8Rng,
    events: Vec<SimulationEvent>,
}

impl SimulationEngine {
    /// Create a new engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let missions = MissionSystem::new(&mut rng);

        Self {
            registry: EntityRegistry::new(),
            wave: WaveState::new(),
            time: SimTime::default(),
            phase: GamePhase::Running,
            dilation: TimeDilation::new(),
            upgrades: UpgradeSystem::new(),
            missions,
            rng,
            events: Vec::new(),
        }
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot. After game over, ticking is a pure idle: state is
    /// untouched and the event stream is empty.
    pub fn tick(&mut self, input: &InputSnapshot) -> GameSnapshot {
        if self.phase == GamePhase::GameOver {
            return self.snapshot(Vec::new());
        }

        // 1. Time dilation yields this frame's scale.
        self.dilation.tick();
        let scale = self.dilation.current_scale();

        // 2. Power-up effect timers age.
        systems::powerups::age_effects(&mut self.registry.player, scale);

        // 3. Wave director spawns/advances, or defers to the boss.
        systems::wave::run(
            &mut self.wave,
            &mut self.registry,
            scale,
            &mut self.rng,
            &mut self.events,
        );

        // 4. Entities advance their own motion and AI.
        systems::player::run(&mut self.registry.player, input, scale);
        let player_center = self.registry.player.center();
        systems::enemy::run(
            &mut self.registry.enemies,
            player_center,
            scale,
            &mut self.rng,
        );
        if let Some(boss) = self.registry.boss.as_mut() {
            systems::boss::run(boss, player_center, scale, &mut self.rng, &mut self.events);
        }
        systems::powerups::update_pickups(&mut self.registry.pickups, scale);

        // 5. Combat resolution marks the dead and consumed.
        systems::combat::run(
            &mut self.registry,
            &mut self.wave,
            &mut self.dilation,
            &mut self.rng,
            &mut self.events,
        );

        // 6. Registry sweep performs all removals.
        self.registry.remove_dead(&mut self.events);

        // 7. Mission progress.
        let stats = self.registry.player.stats;
        self.missions
            .update(&stats, &mut self.upgrades, &mut self.events, &mut self.rng);

        // Terminal transition.
        if self.registry.player.health <= 0.0 {
            self.phase = GamePhase::GameOver;
            self.events.push(SimulationEvent::GameOver {
                final_score: self.registry.player.score,
                wave_reached: self.wave.wave,
                accuracy: stats.accuracy(),
            });
        }

        self.time.advance();
        let events = std::mem::take(&mut self.events);
        self.snapshot(events)
    }

    /// Buy an upgrade level. Follows the no-exception contract: false when
    /// skill points are insufficient or the track is maxed.
    pub fn purchase_upgrade(&mut self, kind: UpgradeKind) -> bool {
        self.upgrades.purchase(&mut self.registry.player, kind)
    }

    pub fn upgrade_level(&self, kind: UpgradeKind) -> u32 {
        self.upgrades.level(kind)
    }

    pub fn upgrade_cost(&self, kind: UpgradeKind) -> Option<u32> {
        self.upgrades.cost(kind)
    }

    pub fn skill_points(&self) -> u32 {
        self.upgrades.skill_points
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn wave_number(&self) -> u32 {
        self.wave.wave
    }

    pub fn score(&self) -> u64 {
        self.registry.player.score
    }

    fn snapshot(&self, events: Vec<SimulationEvent>) -> GameSnapshot {
        systems::snapshot::build(
            &self.registry,
            &self.wave,
            self.time,
            self.phase,
            self.dilation.current_scale(),
            &self.missions,
            self.upgrades.skill_points,
            events,
        )
    }

    // --- Test access ---

    #[cfg(test)]
    pub(crate) fn registry_mut(&mut self) -> &mut EntityRegistry {
        &mut self.registry
    }

    #[cfg(test)]
    pub(crate) fn registry(&self) -> &EntityRegistry {
        &self.registry
    }
}
