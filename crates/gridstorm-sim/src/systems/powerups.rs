//! Power-up effect system: timer aging, effect application, pickup flight.

use gridstorm_core::constants::*;
use gridstorm_core::entities::{Player, PowerUpPickup};
use gridstorm_core::enums::PowerUpKind;
use gridstorm_core::types::Rgb;

use crate::dilation::TimeDilation;

/// Age every active effect by the current time scale. NanoBots heal
/// passively here, so their total healing tracks the effect duration
/// regardless of dilation.
pub fn age_effects(player: &mut Player, scale: f64) {
    if player.effect_active(PowerUpKind::NanoBots) {
        player.heal(NANO_BOTS_HEAL_PER_TICK * scale);
    }

    for remaining in player.effects.values_mut() {
        *remaining -= scale;
    }
    player.effects.retain(|_, remaining| *remaining > 0.0);
}

/// Apply a collected pickup. Instantaneous kinds mutate the player now;
/// durable kinds extend their timer to the longer of current and new —
/// durations never stack additively.
pub fn apply(kind: PowerUpKind, player: &mut Player, dilation: &mut TimeDilation) {
    match kind {
        PowerUpKind::Health => player.heal(HEALTH_PICKUP_HEAL),
        PowerUpKind::TimeSlow => {
            extend(player, kind);
            // Refused while the dilation cooldown runs; the effect timer
            // still tracks the window for the snapshot.
            dilation.activate(TIME_SLOW_DURATION, TIME_SLOW_FACTOR);
        }
        _ => extend(player, kind),
    }
}

fn extend(player: &mut Player, kind: PowerUpKind) {
    let duration = kind.duration_ticks();
    let remaining = player.effects.entry(kind).or_insert(0.0);
    *remaining = remaining.max(duration);
}

/// Bullets per volley: Quantum beats RapidFire beats the single shot.
pub fn shot_fan(player: &Player) -> u32 {
    if player.effect_active(PowerUpKind::Quantum) {
        QUANTUM_SHOTS
    } else if player.effect_active(PowerUpKind::RapidFire) {
        RAPID_FIRE_SHOTS
    } else {
        1
    }
}

/// Advance falling pickups and their lifetimes.
pub fn update_pickups(pickups: &mut [PowerUpPickup], scale: f64) {
    for pickup in pickups {
        pickup.position.y += pickup.fall_speed * scale;
        pickup.lifetime -= scale;
    }
}

/// Palette color for a pickup kind, carried on collection explosions.
pub fn pickup_color(kind: PowerUpKind) -> Rgb {
    match kind {
        PowerUpKind::Health => COLOR_GREEN,
        PowerUpKind::RapidFire => COLOR_YELLOW,
        PowerUpKind::Shield => COLOR_CYAN,
        PowerUpKind::DoublePoints => COLOR_PURPLE,
        PowerUpKind::TimeSlow => COLOR_BLUE,
        PowerUpKind::MatrixVision => COLOR_WHITE,
        PowerUpKind::NanoBots => COLOR_ORANGE,
        PowerUpKind::Quantum => COLOR_PINK,
    }
}
