//! GRIDSTORM simulation engine.
//!
//! `SimulationEngine` owns the entity registry and runs all per-frame
//! systems in a fixed order, producing a `GameSnapshot` and an ordered
//! event stream each tick. Completely headless (no rendering or audio
//! dependency), enabling deterministic testing.

pub mod dilation;
pub mod engine;
pub mod missions;
pub mod registry;
pub mod spawn;
pub mod systems;
pub mod upgrades;

#[cfg(test)]
mod tests;
