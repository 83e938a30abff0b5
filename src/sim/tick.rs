//! Fixed-step simulation tick
//!
//! Advances every live projectile, integrate-then-resolve, in creation
//! order. One call per frame at the nominal 60 Hz step (`dt` = 1.0).
//! Projectiles never interact with each other, only with the grid.

use glam::Vec2;

use super::collision::resolve_grid_collision;
use super::state::GameState;

/// Input events gathered since the previous tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pointer pressed at this position.
    pub drag_start: Option<Vec2>,
    /// Pointer moved to this position while held.
    pub drag_move: Option<Vec2>,
    /// Pointer released at this position.
    pub drag_release: Option<Vec2>,
}

/// Advance the session by one step of `dt` ticks.
///
/// Clears and refills `state.events`; the render layer reads them after
/// the tick, before presenting the frame.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    if let Some(at) = input.drag_start {
        state.on_drag_start(at);
    }
    if let Some(at) = input.drag_move {
        state.on_drag_move(at);
    }
    if let Some(at) = input.drag_release {
        state.on_drag_release(at);
    }

    let bounds = state.bounds;
    let cell_size = state.cell_size;
    for projectile in &mut state.projectiles {
        projectile.integrate(bounds, dt);
        if projectile.profile.collides_with_grid {
            if let Some(event) = resolve_grid_collision(projectile, &mut state.grid, cell_size) {
                state.events.push(event);
            }
        }
    }
}
