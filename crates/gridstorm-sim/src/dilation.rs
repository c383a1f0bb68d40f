//! Global time dilation.
//!
//! Every other subsystem multiplies its per-frame deltas (movement,
//! cooldowns, timers) by `current_scale()`. Collision geometry is evaluated
//! at the post-scaled positions, so slow motion changes apparent speed,
//! never collision precision. The dilation's own counters run in real ticks.

use serde::{Deserialize, Serialize};

use gridstorm_core::constants::TIME_DILATION_COOLDOWN;

/// Controller for the global time-scale factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeDilation {
    pub active: bool,
    pub factor: f64,
    pub remaining: f64,
    pub cooldown: f64,
}

impl Default for TimeDilation {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeDilation {
    pub fn new() -> Self {
        Self {
            active: false,
            factor: 1.0,
            remaining: 0.0,
            cooldown: 0.0,
        }
    }

    /// Engage slow motion. Refused (state untouched, returns false) while
    /// the cooldown is running.
    pub fn activate(&mut self, duration: f64, factor: f64) -> bool {
        if self.cooldown > 0.0 {
            return false;
        }

        self.active = true;
        self.factor = factor;
        self.remaining = duration;
        self.cooldown = TIME_DILATION_COOLDOWN;
        true
    }

    /// Advance by one real tick, deactivating when the duration runs out.
    pub fn tick(&mut self) {
        if self.active {
            self.remaining -= 1.0;
            if self.remaining <= 0.0 {
                self.active = false;
            }
        }
        if self.cooldown > 0.0 {
            self.cooldown -= 1.0;
        }
    }

    /// The scale applied to this frame's deltas.
    pub fn current_scale(&self) -> f64 {
        if self.active {
            self.factor
        } else {
            1.0
        }
    }
}
