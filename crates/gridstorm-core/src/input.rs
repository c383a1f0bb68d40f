//! Per-tick input consumed by the simulation.
//!
//! Raw device polling is an external collaborator; the core only sees
//! this snapshot, once per tick.

use serde::{Deserialize, Serialize};

/// Movement intent and fire intent for a single tick.
/// Move components are clamped to {-1, 0, 1} by the player system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub move_x: i8,
    pub move_y: i8,
    pub fire: bool,
}

impl InputSnapshot {
    pub fn idle() -> Self {
        Self::default()
    }
}
