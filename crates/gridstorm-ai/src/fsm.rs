//! Enemy movement finite state machine.
//!
//! Two states: patrol (drift between random waypoints in the upper third of
//! the arena at half speed) and attack (chase the player at full speed once
//! inside aggro range). Pure evaluation on plain data; the rng is only
//! touched when a patrol waypoint is re-rolled.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gridstorm_core::constants::{ARENA_HEIGHT, ARENA_WIDTH};
use gridstorm_core::types::Position;

/// Distance to a waypoint below which it counts as reached.
const WAYPOINT_EPSILON: f64 = 10.0;

/// Patrol speed as a fraction of full speed.
const PATROL_SPEED_FACTOR: f64 = 0.5;

/// Movement state for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiState {
    Patrol,
    Attack,
}

/// Input to the movement FSM for a single enemy.
pub struct EnemyContext {
    pub position: Position,
    pub size: f64,
    pub speed: f64,
    pub aggro_range: f64,
    pub patrol_target: Position,
    pub player_center: Position,
}

/// Output from the movement FSM.
pub struct EnemyUpdate {
    pub new_position: Position,
    /// Set when the patrol waypoint was reached and re-rolled.
    pub new_patrol_target: Option<Position>,
    pub state: AiState,
}

/// Roll a patrol waypoint in the upper third of the arena.
pub fn roll_patrol_target(size: f64, rng: &mut ChaCha8Rng) -> Position {
    Position::new(
        rng.gen_range(0.0..(ARENA_WIDTH - size).max(1.0)),
        rng.gen_range(0.0..ARENA_HEIGHT / 3.0),
    )
}

/// Evaluate the FSM for one enemy and one tick.
pub fn evaluate(ctx: &EnemyContext, scale: f64, rng: &mut ChaCha8Rng) -> EnemyUpdate {
    let center = Position::new(
        ctx.position.x + ctx.size / 2.0,
        ctx.position.y + ctx.size / 2.0,
    );

    if center.distance_to(&ctx.player_center) < ctx.aggro_range {
        // Attack: close on the player at full speed.
        let new_position = step_toward(
            ctx.position,
            center,
            ctx.player_center,
            ctx.speed * scale,
        );
        return EnemyUpdate {
            new_position,
            new_patrol_target: None,
            state: AiState::Attack,
        };
    }

    // Patrol: drift toward the waypoint, re-rolling it once reached.
    let mut target = ctx.patrol_target;
    let mut new_patrol_target = None;
    if (ctx.position.x - target.x).abs() < WAYPOINT_EPSILON
        && (ctx.position.y - target.y).abs() < WAYPOINT_EPSILON
    {
        target = roll_patrol_target(ctx.size, rng);
        new_patrol_target = Some(target);
    }

    let new_position = step_toward(
        ctx.position,
        ctx.position,
        target,
        ctx.speed * PATROL_SPEED_FACTOR * scale,
    );
    EnemyUpdate {
        new_position,
        new_patrol_target,
        state: AiState::Patrol,
    }
}

/// Move `position` by `step` pixels along the direction from `from` to `to`.
fn step_toward(position: Position, from: Position, to: Position, step: f64) -> Position {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let dist = (dx * dx + dy * dy).sqrt().max(1.0);
    Position::new(
        position.x + dx / dist * step,
        position.y + dy / dist * step,
    )
}
