//! Game session state
//!
//! Owns everything the simulation mutates: the grid, the live-projectile
//! collection and the drag gesture. Built from a raw level matrix; the
//! anchor point and world bounds are derived once at load and stay fixed.

use glam::Vec2;

use crate::consts;

use super::collision::GameEvent;
use super::grid::{BlockType, Grid, LevelError};
use super::launch::{DragGesture, compute_launch_velocity};
use super::projectile::{PhysicsProfile, Projectile, WorldBounds};

/// Complete state of one play session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub grid: Grid,
    /// World-space center of the first slingshot cell; fixed at load time.
    pub anchor: Vec2,
    pub bounds: WorldBounds,
    pub cell_size: f32,
    /// Live projectiles in creation order.
    ///
    /// Bodies are never despawned, so a long session grows this without
    /// bound. Hosts that care should cap how many shots they allow.
    pub projectiles: Vec<Projectile>,
    pub gesture: DragGesture,
    /// Profile applied to newly launched projectiles.
    pub profile: PhysicsProfile,
    /// Drag-to-velocity divisor for launches.
    pub launch_scale: f32,
    /// Events recorded during the most recent tick, for the render layer.
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Build a session from a raw level matrix with the stock tuning.
    ///
    /// Fails with [`LevelError::NoAnchorFound`] if the level has no
    /// slingshot cell; gameplay cannot start without a launch origin.
    pub fn load_level(matrix: &[Vec<u8>]) -> Result<Self, LevelError> {
        let grid = Grid::from_matrix(matrix)?;
        Self::from_grid(grid)
    }

    /// Build a session from an already-validated grid with the stock tuning.
    pub fn from_grid(grid: Grid) -> Result<Self, LevelError> {
        Self::from_grid_with(
            grid,
            consts::CELL_SIZE,
            PhysicsProfile::DEMOLITION,
            consts::LAUNCH_SCALE,
        )
    }

    /// [`GameState::from_grid`] with explicit cell size, physics profile
    /// and launch scale.
    pub fn from_grid_with(
        grid: Grid,
        cell_size: f32,
        profile: PhysicsProfile,
        launch_scale: f32,
    ) -> Result<Self, LevelError> {
        let (row, col) = grid
            .find_first_slingshot()
            .ok_or(LevelError::NoAnchorFound)?;
        let anchor = grid.cell_center(row, col, cell_size);
        let bounds = WorldBounds::new(
            grid.cols() as f32 * cell_size,
            grid.rows() as f32 * cell_size,
        );
        Ok(Self {
            grid,
            anchor,
            bounds,
            cell_size,
            projectiles: Vec::new(),
            gesture: DragGesture::default(),
            profile,
            launch_scale,
            events: Vec::new(),
        })
    }

    /// Pointer pressed: start aiming a shot.
    pub fn on_drag_start(&mut self, at: Vec2) {
        self.gesture.begin(at);
    }

    /// Pointer moved while aiming.
    pub fn on_drag_move(&mut self, at: Vec2) {
        self.gesture.track(at);
    }

    /// Pointer released: spawn a projectile centered on the anchor with
    /// the velocity derived from the drag. Velocity is fixed for the
    /// projectile's lifetime; later ticks only integrate and resolve.
    ///
    /// Returns the spawned projectile, or `None` if no drag was active.
    pub fn on_drag_release(&mut self, at: Vec2) -> Option<&Projectile> {
        let release = self.gesture.release(at)?;
        let size = consts::PROJECTILE_SIZE;
        let mut projectile =
            Projectile::new(self.anchor - Vec2::splat(size / 2.0), size, self.profile);
        projectile.vel = compute_launch_velocity(self.anchor, release, self.launch_scale);
        projectile.launched = true;
        self.projectiles.push(projectile);
        self.events.push(GameEvent::Launched);
        self.projectiles.last()
    }

    /// Breakable blocks still standing.
    pub fn breakables_left(&self) -> usize {
        self.grid.count(BlockType::Breakable)
    }
}
