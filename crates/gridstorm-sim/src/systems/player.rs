//! Player system: movement, personal timers, and firing.

use gridstorm_core::constants::*;
use gridstorm_core::entities::{Player, Projectile};
use gridstorm_core::enums::{PowerUpKind, ProjectileKind, ProjectileSide};
use gridstorm_core::input::InputSnapshot;
use gridstorm_core::types::{Position, Velocity};

use super::powerups;

/// Advance the player by one tick.
pub fn run(player: &mut Player, input: &InputSnapshot, scale: f64) {
    // Movement, clamped to the arena.
    let dx = input.move_x.clamp(-1, 1) as f64;
    let dy = input.move_y.clamp(-1, 1) as f64;
    player.position.x =
        (player.position.x + dx * player.speed * scale).clamp(0.0, ARENA_WIDTH - PLAYER_WIDTH);
    player.position.y =
        (player.position.y + dy * player.speed * scale).clamp(0.0, ARENA_HEIGHT - PLAYER_HEIGHT);

    // Scaled timers.
    if player.fire_cooldown > 0.0 {
        player.fire_cooldown -= scale;
    }
    if player.invulnerable_timer > 0.0 {
        player.invulnerable_timer -= scale;
    }

    // Combo decay counts real ticks, unscaled by dilation.
    if player.combo_timer > 0.0 {
        player.combo_timer -= 1.0;
        if player.combo_timer <= 0.0 {
            player.combo = 0;
        }
    }

    // Shield regeneration.
    if player.shield < player.max_shield {
        player.shield =
            (player.shield + player.shield_regen_rate * scale).min(player.max_shield);
    }

    if input.fire && player.fire_cooldown <= 0.0 {
        fire(player);
    }

    for projectile in &mut player.projectiles {
        projectile.position.x += projectile.velocity.x * scale;
        projectile.position.y += projectile.velocity.y * scale;
    }

    player.stats.play_time_ticks += 1;
}

/// Fire one volley: a single bullet, or a symmetric fan while RapidFire or
/// Quantum is active (Quantum wins).
fn fire(player: &mut Player) {
    let count = powerups::shot_fan(player);
    let color = if player.effect_active(PowerUpKind::Quantum) {
        COLOR_PURPLE
    } else if player.effect_active(PowerUpKind::RapidFire) {
        COLOR_CYAN
    } else {
        COLOR_GREEN
    };

    for i in 0..count {
        let offset = (i as f64 - (count as f64 - 1.0) / 2.0) * SHOT_FAN_SPACING;
        player.projectiles.push(Projectile {
            position: Position::new(
                player.position.x + PLAYER_WIDTH / 2.0 + offset,
                player.position.y,
            ),
            velocity: Velocity::new(0.0, -PLAYER_BULLET_SPEED),
            side: ProjectileSide::Player,
            damage: PLAYER_BULLET_DAMAGE * player.damage_multiplier,
            color,
            size: 4.0,
            pierce: player.bullet_pierce,
            pierced: 0,
            kind: ProjectileKind::Standard,
            consumed: false,
        });
    }

    player.stats.shots_fired += count;
    player.fire_cooldown = player.fire_cooldown_base;
}
