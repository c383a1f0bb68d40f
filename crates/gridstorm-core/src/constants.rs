//! Simulation constants and tuning parameters.

use crate::types::Rgb;

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

// --- Arena ---

/// Arena width in pixels.
pub const ARENA_WIDTH: f64 = 1400.0;

/// Arena height in pixels.
pub const ARENA_HEIGHT: f64 = 900.0;

/// Margin beyond the arena edge at which projectiles are discarded.
pub const OFFSCREEN_MARGIN: f64 = 50.0;

// --- Player ---

/// Player craft width (pixels).
pub const PLAYER_WIDTH: f64 = 40.0;

/// Player craft height (pixels).
pub const PLAYER_HEIGHT: f64 = 60.0;

/// Base movement speed (pixels per tick).
pub const PLAYER_BASE_SPEED: f64 = 5.0;

/// Base maximum health.
pub const PLAYER_BASE_MAX_HEALTH: f64 = 100.0;

/// Maximum shield points.
pub const PLAYER_MAX_SHIELD: f64 = 50.0;

/// Base ticks between shots.
pub const PLAYER_BASE_FIRE_COOLDOWN: f64 = 20.0;

/// Player bullet speed (pixels per tick, straight up).
pub const PLAYER_BULLET_SPEED: f64 = 10.0;

/// Base player bullet damage before the damage multiplier.
pub const PLAYER_BULLET_DAMAGE: f64 = 10.0;

/// Invulnerability window granted when a hit reaches health (ticks).
pub const PLAYER_HIT_INVULN_TICKS: f64 = 30.0;

// --- Combo ---

/// Ticks without a hit before the combo resets. Counts real ticks,
/// unscaled by time dilation.
pub const COMBO_DECAY_TICKS: f64 = 180.0;

/// Combo count above which the score multiplier starts growing.
pub const COMBO_MULTIPLIER_THRESHOLD: u32 = 5;

/// Multiplier growth per combo step above the threshold.
pub const COMBO_MULTIPLIER_STEP: f64 = 0.1;

// --- Waves ---

/// Spawn budget multiplier: wave `n` spawns `n * ENEMIES_PER_WAVE` enemies.
pub const ENEMIES_PER_WAVE: u32 = 8;

/// Base spawn interval at wave 1 (ticks).
pub const SPAWN_INTERVAL_BASE: f64 = 60.0;

/// Spawn interval reduction per wave (ticks).
pub const SPAWN_INTERVAL_STEP: f64 = 3.0;

/// Spawn interval floor (ticks).
pub const SPAWN_INTERVAL_MIN: f64 = 10.0;

/// Interlude between mundane waves (ticks).
pub const WAVE_INTERLUDE_TICKS: f64 = 120.0;

/// Interlude after a boss is defeated (ticks).
pub const BOSS_INTERLUDE_TICKS: f64 = 180.0;

/// Score awarded per completed mundane wave, multiplied by the wave number.
pub const WAVE_CLEAR_SCORE: u64 = 1000;

/// Chance of a pickup drop on mundane wave completion.
pub const WAVE_CLEAR_DROP_CHANCE: f64 = 0.5;

/// Every Nth wave hands off to the boss instead of advancing.
pub const BOSS_WAVE_INTERVAL: u32 = 5;

/// Enemy level cap.
pub const ENEMY_LEVEL_CAP: u32 = 5;

// --- Enemies ---

/// Enemy bullet speed (pixels per tick, straight down).
pub const ENEMY_BULLET_SPEED: f64 = 3.0;

/// Contact damage taken by an enemy that rams the player.
pub const ENEMY_RAM_SELF_DAMAGE: f64 = 10.0;

/// Player damage per level from an enemy bullet.
pub const ENEMY_BULLET_DAMAGE_PER_LEVEL: f64 = 3.0;

/// Player damage per level from an enemy body collision.
pub const ENEMY_CONTACT_DAMAGE_PER_LEVEL: f64 = 5.0;

/// Player damage per level from an enemy that falls past the bottom edge.
/// A separate rule from body collision, even though the formula matches.
pub const ENEMY_FALLEN_DAMAGE_PER_LEVEL: f64 = 5.0;

/// Chance of a pickup drop on enemy death.
pub const ENEMY_KILL_DROP_CHANCE: f64 = 0.25;

/// Glitch teleport cooldown (ticks).
pub const GLITCH_TELEPORT_COOLDOWN: f64 = 180.0;

/// Worm minion-spawn cooldown (ticks).
pub const WORM_SPAWN_COOLDOWN: f64 = 300.0;

/// Worm only spawns minions below this health ratio.
pub const WORM_SPAWN_HEALTH_RATIO: f64 = 0.5;

/// Number of minions a Worm spawns per trigger.
pub const WORM_SPAWN_COUNT: u32 = 2;

/// Firewall shield hit points.
pub const FIREWALL_SHIELD_HP: f64 = 20.0;

/// Trojan stealth cycle bounds (ticks).
pub const TROJAN_STEALTH_MIN: f64 = 120.0;
pub const TROJAN_STEALTH_MAX: f64 = 300.0;

/// Enemy shoot timer bounds: initial arm and re-arm after firing (ticks).
pub const ENEMY_SHOOT_ARM_MIN: f64 = 60.0;
pub const ENEMY_SHOOT_ARM_MAX: f64 = 180.0;
pub const ENEMY_SHOOT_REARM_MIN: f64 = 90.0;
pub const ENEMY_SHOOT_REARM_MAX: f64 = 240.0;

// --- Boss ---

/// Boss size at tier 0 plus growth per tier (pixels).
pub const BOSS_BASE_SIZE: f64 = 150.0;
pub const BOSS_SIZE_PER_TIER: f64 = 20.0;

/// Boss health at tier 0 plus growth per tier.
pub const BOSS_BASE_HEALTH: f64 = 1000.0;
pub const BOSS_HEALTH_PER_TIER: f64 = 500.0;

/// Descent speed while entering (pixels per tick).
pub const BOSS_ENTRY_SPEED: f64 = 1.0;

/// Y coordinate at which the boss stops entering and becomes active.
pub const BOSS_ACTIVE_Y: f64 = 100.0;

/// Fraction of the x distance to the player closed per tick.
pub const BOSS_PURSUIT_FACTOR: f64 = 0.02;

/// Health ratios that trigger phase transitions.
pub const BOSS_PHASE2_RATIO: f64 = 0.66;
pub const BOSS_PHASE3_RATIO: f64 = 0.33;

/// Invulnerability windows granted on phase transitions (ticks).
pub const BOSS_PHASE2_INVULN_TICKS: f64 = 180.0;
pub const BOSS_PHASE3_INVULN_TICKS: f64 = 120.0;

/// Attack timer re-arm bounds (ticks).
pub const BOSS_ATTACK_MIN: f64 = 30.0;
pub const BOSS_ATTACK_MAX: f64 = 90.0;

/// Attack timer set when the boss finishes entering (ticks).
pub const BOSS_FIRST_ATTACK_TICKS: f64 = 60.0;

/// Ability cooldowns (ticks).
pub const BOSS_LASER_COOLDOWN: f64 = 300.0;
pub const BOSS_MINIONS_COOLDOWN: f64 = 450.0;
pub const BOSS_SHIELD_WALL_COOLDOWN: f64 = 600.0;
pub const BOSS_TIME_SLOW_COOLDOWN: f64 = 900.0;

/// Circular burst: bullet count, speed, angular jitter (degrees).
pub const BOSS_BURST_COUNT: u32 = 24;
pub const BOSS_BURST_SPEED: f64 = 4.0;
pub const BOSS_BURST_JITTER_DEG: f64 = 5.0;

/// Laser beam: stationary segment count and vertical spacing.
pub const BOSS_LASER_SEGMENTS: u32 = 50;
pub const BOSS_LASER_SPACING: f64 = 10.0;

/// Minions spawned per ability trigger.
pub const BOSS_MINION_COUNT: u32 = 3;

/// Horizontal scatter of spawned minions (pixels).
pub const BOSS_MINION_SCATTER: f64 = 100.0;

/// Shield wall: spoke count, rings per spoke, and ring spacing (pixels).
pub const BOSS_SHIELD_SPOKES: u32 = 8;
pub const BOSS_SHIELD_RINGS: u32 = 5;
pub const BOSS_SHIELD_RING_SPACING: f64 = 20.0;

/// Time-slow burst: drifting ring count and drift speed.
pub const BOSS_TIME_SLOW_RINGS: u32 = 20;
pub const BOSS_TIME_SLOW_DRIFT: f64 = 0.5;

/// Boss bullet damage: laser segments and everything else.
pub const BOSS_LASER_DAMAGE: f64 = 20.0;
pub const BOSS_BULLET_DAMAGE: f64 = 10.0;

/// Player damage per level from a boss minion body collision.
pub const MINION_CONTACT_DAMAGE_PER_LEVEL: f64 = 8.0;

/// Score for defeating a boss, multiplied by its wave tier.
pub const BOSS_KILL_SCORE: u64 = 5000;

/// Pickups dropped around a defeated boss.
pub const BOSS_DROP_COUNT: u32 = 5;

/// Scatter radius of boss pickup drops (pixels).
pub const BOSS_DROP_SCATTER: f64 = 50.0;

// --- Power-ups ---

/// Pickup radius (pixels).
pub const PICKUP_SIZE: f64 = 15.0;

/// Pickup fall speed (pixels per tick).
pub const PICKUP_FALL_SPEED: f64 = 2.0;

/// Pickup lifetime before it despawns uncollected (ticks).
pub const PICKUP_LIFETIME_TICKS: f64 = 600.0;

/// Flat score awarded per collection, regardless of kind.
pub const PICKUP_SCORE: u64 = 100;

/// Health restored by an instantaneous Health pickup.
pub const HEALTH_PICKUP_HEAL: f64 = 30.0;

/// NanoBots passive heal per tick while active.
pub const NANO_BOTS_HEAL_PER_TICK: f64 = 1.0;

/// Effect durations by kind (ticks). Health is instantaneous.
pub const RAPID_FIRE_DURATION: f64 = 600.0;
pub const SHIELD_WINDOW_DURATION: f64 = 900.0;
pub const DOUBLE_POINTS_DURATION: f64 = 600.0;
pub const TIME_SLOW_DURATION: f64 = 300.0;
pub const MATRIX_VISION_DURATION: f64 = 450.0;
pub const NANO_BOTS_DURATION: f64 = 750.0;
pub const QUANTUM_DURATION: f64 = 500.0;

/// Shot fan sizes while RapidFire / Quantum are active.
pub const RAPID_FIRE_SHOTS: u32 = 3;
pub const QUANTUM_SHOTS: u32 = 5;

/// Horizontal spacing between fanned shots (pixels).
pub const SHOT_FAN_SPACING: f64 = 10.0;

// --- Time dilation ---

/// Slow-motion factor applied by the TimeSlow effect.
pub const TIME_SLOW_FACTOR: f64 = 0.3;

/// Cooldown before time dilation can activate again (ticks).
pub const TIME_DILATION_COOLDOWN: f64 = 900.0;

// --- Palette ---

pub const COLOR_GREEN: Rgb = Rgb::new(0, 255, 0);
pub const COLOR_CYAN: Rgb = Rgb::new(0, 255, 255);
pub const COLOR_BLUE: Rgb = Rgb::new(100, 150, 255);
pub const COLOR_RED: Rgb = Rgb::new(255, 50, 50);
pub const COLOR_PURPLE: Rgb = Rgb::new(180, 0, 255);
pub const COLOR_ORANGE: Rgb = Rgb::new(255, 165, 0);
pub const COLOR_PINK: Rgb = Rgb::new(255, 105, 180);
pub const COLOR_BROWN: Rgb = Rgb::new(139, 69, 19);
pub const COLOR_YELLOW: Rgb = Rgb::new(255, 255, 0);
pub const COLOR_WHITE: Rgb = Rgb::new(255, 255, 255);
