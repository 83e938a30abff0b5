//! Angry Cubes - a slingshot physics arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid model, projectile physics, collision)
//! - `editor`: Level editor model (brush painting onto a grid)
//! - `maps`: Named map persistence (JSON matrix files)

pub mod editor;
pub mod maps;
pub mod sim;

pub use editor::Editor;
pub use maps::MapStore;
pub use sim::{BlockType, GameState, Grid};

use glam::Vec2;

/// Game configuration constants
///
/// Kinematic values are in the game's native units: pixels per tick and
/// px/tick² at the nominal 60 Hz step.
pub mod consts {
    /// Nominal simulation rate (steps per second)
    pub const TICK_RATE: f32 = 60.0;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_RATE;

    /// World dimensions in pixels
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;
    /// Edge length of one grid cell
    pub const CELL_SIZE: f32 = 40.0;

    /// Edge length of a projectile's square bounding box
    pub const PROJECTILE_SIZE: f32 = 20.0;

    /// Downward acceleration, px/tick²
    pub const GRAVITY: f32 = 0.5;
    /// Per-step velocity retention for the free-flight profile
    pub const DRAG: f32 = 0.99;

    /// Drag-to-velocity divisor for grid levels
    pub const LAUNCH_SCALE: f32 = 10.0;
    /// Drag-to-velocity divisor for the free-flight profile
    pub const FREE_FLIGHT_LAUNCH_SCALE: f32 = 5.0;

    /// Velocity retained after destroying a breakable block
    pub const BREAK_SLOWDOWN: f32 = 0.7;
    /// Velocity retained along the resolved axis of a solid bounce
    pub const SOLID_RESTITUTION: f32 = 0.8;
    /// Floor-bounce energy retention for grid-colliding projectiles
    pub const FLOOR_RESTITUTION: f32 = 0.5;
}

/// Grid cell (row, col) containing a world-space point.
///
/// Points left of or above the grid origin yield negative indices, which
/// fall outside any grid.
#[inline]
pub fn cell_at(point: Vec2, cell_size: f32) -> (i32, i32) {
    (
        (point.y / cell_size).floor() as i32,
        (point.x / cell_size).floor() as i32,
    )
}
