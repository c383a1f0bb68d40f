//! Entity data for the arena simulation.
//!
//! Entities are plain data owned by exactly one collection: the registry
//! owns the player, mundane enemies and pickups; projectiles live with the
//! entity that fired them; a boss owns its own minions and projectiles.
//! Frame logic lives in the sim crate's systems, not here — the only methods
//! on entities are intrinsic state transitions that clamp at the write site.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;
use crate::types::{Position, Rgb, Velocity};

/// Outcome of routing damage into the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageResult {
    /// Swallowed by an active invulnerability window. No state changed.
    Ignored,
    /// Damage landed (on shield, health, or both).
    Taken { fatal: bool },
}

/// Per-run statistics, fed to missions and the game-over report.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RunStats {
    pub enemies_killed: u32,
    pub powerups_collected: u32,
    pub waves_completed: u32,
    pub shots_fired: u32,
    pub shots_hit: u32,
    pub damage_taken: f64,
    pub bosses_defeated: u32,
    pub highest_combo: u32,
    pub play_time_ticks: u64,
}

impl RunStats {
    /// Hit ratio in [0, 1]. Zero shots counts as zero accuracy.
    pub fn accuracy(&self) -> f64 {
        self.shots_hit as f64 / self.shots_fired.max(1) as f64
    }
}

/// The player craft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: Position,
    pub health: f64,
    pub max_health: f64,
    pub shield: f64,
    pub max_shield: f64,
    pub score: u64,
    pub combo: u32,
    /// Real-tick countdown; combo resets to 0 when it expires.
    pub combo_timer: f64,
    pub invulnerable_timer: f64,
    pub fire_cooldown: f64,

    // --- Weapon / craft modifiers (upgrade-driven) ---
    pub speed: f64,
    pub fire_cooldown_base: f64,
    pub damage_multiplier: f64,
    pub critical_chance: f64,
    pub bullet_pierce: u32,
    pub auto_collect_radius: f64,
    pub shield_regen_rate: f64,

    /// Remaining duration per active power-up effect (ticks).
    /// BTreeMap for deterministic iteration order.
    pub effects: BTreeMap<PowerUpKind, f64>,
    /// Bullets in flight, owned exclusively by the player.
    pub projectiles: Vec<Projectile>,
    pub stats: RunStats,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            position: Position::new(
                ARENA_WIDTH / 2.0,
                ARENA_HEIGHT - 100.0,
            ),
            health: PLAYER_BASE_MAX_HEALTH,
            max_health: PLAYER_BASE_MAX_HEALTH,
            shield: 0.0,
            max_shield: PLAYER_MAX_SHIELD,
            score: 0,
            combo: 0,
            combo_timer: 0.0,
            invulnerable_timer: 0.0,
            fire_cooldown: 0.0,
            speed: PLAYER_BASE_SPEED,
            fire_cooldown_base: PLAYER_BASE_FIRE_COOLDOWN,
            damage_multiplier: 1.0,
            critical_chance: 0.0,
            bullet_pierce: 0,
            auto_collect_radius: 0.0,
            shield_regen_rate: 0.0,
            effects: BTreeMap::new(),
            projectiles: Vec::new(),
            stats: RunStats::default(),
        }
    }

    /// Center of the craft's bounding box.
    pub fn center(&self) -> Position {
        Position::new(
            self.position.x + PLAYER_WIDTH / 2.0,
            self.position.y + PLAYER_HEIGHT / 2.0,
        )
    }

    /// Whether a timed power-up effect is currently active.
    pub fn effect_active(&self, kind: PowerUpKind) -> bool {
        self.effects.get(&kind).copied().unwrap_or(0.0) > 0.0
    }

    /// Route incoming damage: shield absorbs first, the remainder reaches
    /// health and grants a brief invulnerability window. A hit landing
    /// entirely on the shield grants no window.
    pub fn take_damage(&mut self, amount: f64) -> DamageResult {
        if self.invulnerable_timer > 0.0 {
            return DamageResult::Ignored;
        }

        let absorbed = self.shield.min(amount);
        self.shield -= absorbed;

        let remainder = amount - absorbed;
        if remainder > 0.0 {
            self.health = (self.health - remainder).max(0.0);
            self.invulnerable_timer = PLAYER_HIT_INVULN_TICKS;
        }

        self.stats.damage_taken += amount;
        DamageResult::Taken {
            fatal: self.health <= 0.0,
        }
    }

    /// Add score through the combined multiplier: 2x while DoublePoints is
    /// active, scaled further by the combo once it exceeds the threshold.
    /// Returns the amount actually added (truncated to an integer).
    pub fn add_score(&mut self, base: u64) -> u64 {
        let mut multiplier = 1.0;
        if self.effect_active(PowerUpKind::DoublePoints) {
            multiplier *= 2.0;
        }
        if self.combo > COMBO_MULTIPLIER_THRESHOLD {
            multiplier *= 1.0
                + (self.combo - COMBO_MULTIPLIER_THRESHOLD) as f64 * COMBO_MULTIPLIER_STEP;
        }

        let added = (base as f64 * multiplier) as u64;
        self.score += added;
        added
    }

    /// Register a successful hit: bump the combo and re-arm its decay timer.
    pub fn add_combo(&mut self) {
        self.combo += 1;
        self.combo_timer = COMBO_DECAY_TICKS;
        if self.combo > self.stats.highest_combo {
            self.stats.highest_combo = self.combo;
        }
    }

    /// Heal, clamped to max health.
    pub fn heal(&mut self, amount: f64) {
        self.health = (self.health + amount).min(self.max_health);
    }
}

/// Kind-specific ability state carried by some enemies.
/// The Virus split is death-triggered and needs no state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EnemyAbility {
    /// Glitch: relocate when the cooldown expires.
    Teleport { cooldown: f64 },
    /// Firewall: shield hit points that deplete before health.
    Shield { hit_points: f64, max_hit_points: f64 },
    /// Trojan: stealth flicker cycle.
    Stealth { timer: f64 },
    /// Worm: minion spawn timer, gated on low health.
    SpawnTimer { cooldown: f64 },
}

/// A mundane enemy or a boss-owned minion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub level: u32,
    pub position: Position,
    pub size: f64,
    pub speed: f64,
    pub health: f64,
    pub max_health: f64,
    /// Base score value awarded on death.
    pub value: u64,
    /// Chance to fire when the shoot timer expires.
    pub shoot_chance: f64,
    pub color: Rgb,
    pub ability: Option<EnemyAbility>,
    /// Distance at which the enemy switches from patrol to attack.
    pub aggro_range: f64,
    /// Current patrol destination (top third of the arena).
    pub patrol_target: Position,
    pub shoot_timer: f64,
    /// Bullets in flight, owned exclusively by this enemy.
    pub projectiles: Vec<Projectile>,
    /// Marked by the combat resolver; removed by the registry sweep.
    pub dead: bool,
}

impl Enemy {
    pub fn center(&self) -> Position {
        Position::new(
            self.position.x + self.size / 2.0,
            self.position.y + self.size / 2.0,
        )
    }

    pub fn health_ratio(&self) -> f64 {
        if self.max_health > 0.0 {
            self.health / self.max_health
        } else {
            0.0
        }
    }

    /// Whether a Trojan is currently in the hidden half of its flicker cycle.
    pub fn stealthed(&self) -> bool {
        match self.ability {
            Some(EnemyAbility::Stealth { timer }) => (timer / 10.0) as i64 % 2 == 0,
            _ => false,
        }
    }
}

/// A named boss ability with an independent cooldown.
/// Triggering while the cooldown runs is a no-op.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AbilityTimer {
    pub cooldown: f64,
    pub max_cooldown: f64,
}

impl AbilityTimer {
    pub fn new(max_cooldown: f64) -> Self {
        Self {
            cooldown: 0.0,
            max_cooldown,
        }
    }

    pub fn ready(&self) -> bool {
        self.cooldown <= 0.0
    }

    /// Start the cooldown running.
    pub fn trigger(&mut self) {
        self.cooldown = self.max_cooldown;
    }

    pub fn tick(&mut self, scale: f64) {
        if self.cooldown > 0.0 {
            self.cooldown -= scale;
        }
    }
}

/// The boss. Exclusively owns its minions and projectiles; the mundane
/// enemy collection never aliases them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub wave_tier: u32,
    pub name: String,
    pub position: Position,
    pub size: f64,
    pub health: f64,
    pub max_health: f64,
    pub pattern: BossPattern,
    pub phase: BossPhase,
    pub attack_timer: f64,
    pub invulnerable: bool,
    pub invulnerable_timer: f64,
    pub color: Rgb,

    // --- Named abilities ---
    pub laser_beam: AbilityTimer,
    pub spawn_minions: AbilityTimer,
    pub shield_wall: AbilityTimer,
    pub time_slow: AbilityTimer,

    pub minions: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
}

impl Boss {
    pub fn center(&self) -> Position {
        Position::new(
            self.position.x + self.size / 2.0,
            self.position.y + self.size / 2.0,
        )
    }

    pub fn health_ratio(&self) -> f64 {
        if self.max_health > 0.0 {
            self.health / self.max_health
        } else {
            0.0
        }
    }
}

/// A projectile. Fixed shape for every side; `kind` selects interpretation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub position: Position,
    pub velocity: Velocity,
    pub side: ProjectileSide,
    pub damage: f64,
    pub color: Rgb,
    pub size: f64,
    /// Remaining pierce budget: a budget of `p` allows `p + 1` hits.
    pub pierce: u32,
    /// Hits landed so far.
    pub pierced: u32,
    pub kind: ProjectileKind,
    /// Marked by the combat resolver; removed by the registry sweep.
    pub consumed: bool,
}

/// A falling power-up pickup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUpPickup {
    pub position: Position,
    pub kind: PowerUpKind,
    pub fall_speed: f64,
    pub lifetime: f64,
    /// Marked by the combat resolver; removed by the registry sweep.
    pub collected: bool,
}

/// Wave director state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WaveState {
    pub wave: u32,
    pub enemies_spawned: u32,
    pub spawn_timer: f64,
    pub director: DirectorPhase,
}

impl Default for WaveState {
    fn default() -> Self {
        Self::new()
    }
}

impl WaveState {
    pub fn new() -> Self {
        Self {
            wave: 1,
            enemies_spawned: 0,
            spawn_timer: 0.0,
            director: DirectorPhase::Spawning,
        }
    }

    /// Spawn budget for the current wave.
    pub fn spawn_budget(&self) -> u32 {
        self.wave * ENEMIES_PER_WAVE
    }
}
