//! Projectile physics body
//!
//! One struct covers every projectile variant in the game; a
//! [`PhysicsProfile`] selects gravity, drag and boundary behavior, so the
//! resting cube and the block-smashing cube are the same code path with
//! different knobs.

use glam::Vec2;

use crate::consts::{DRAG, FLOOR_RESTITUTION, GRAVITY};

/// Tuning knobs for a projectile variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsProfile {
    /// Downward acceleration, px/tick²
    pub gravity: f32,
    /// Per-step velocity retention factor, in (0, 1]
    pub drag: f32,
    /// Reflect off the side walls. When off, the horizontal axis is left
    /// unhandled and the body may exit the playfield sideways.
    pub wall_bounce: bool,
    /// Energy retained on a floor/ceiling bounce. 0.0 selects the
    /// absorbing floor: position clamps and vertical velocity zeroes.
    pub floor_restitution: f32,
    /// Whether the grid collision resolver runs for this projectile
    pub collides_with_grid: bool,
}

impl PhysicsProfile {
    /// Plain cube: falls and comes to rest on the floor, ignores blocks.
    pub const SIMPLE: Self = Self {
        gravity: GRAVITY,
        drag: 1.0,
        wall_bounce: false,
        floor_restitution: 0.0,
        collides_with_grid: false,
    };

    /// Free flight: drag plus fully elastic wall and floor bounces.
    pub const FREE_FLIGHT: Self = Self {
        gravity: GRAVITY,
        drag: DRAG,
        wall_bounce: true,
        floor_restitution: 1.0,
        collides_with_grid: false,
    };

    /// Demolition cube: bounces off walls, keeps half its energy on the
    /// floor, and interacts with grid blocks.
    pub const DEMOLITION: Self = Self {
        gravity: GRAVITY,
        drag: 1.0,
        wall_bounce: true,
        floor_restitution: FLOOR_RESTITUTION,
        collides_with_grid: true,
    };
}

/// Playfield rectangle; doubles as the wall-bounce boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A single physics body launched from the slingshot.
///
/// `pos` is the top-left corner of the square bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Edge length of the bounding square
    pub size: f32,
    /// A body still resting in the sling does not integrate.
    pub launched: bool,
    pub profile: PhysicsProfile,
}

impl Projectile {
    /// A body at rest, waiting to be launched.
    pub fn new(pos: Vec2, size: f32, profile: PhysicsProfile) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            launched: false,
            profile,
        }
    }

    /// Bounding-box center.
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    /// Advance one integration step of `dt` ticks.
    ///
    /// Gravity, then drag, then the position update, then boundary
    /// handling. Never fails: out-of-range positions are corrected with
    /// unconditional clamps. Drag is a per-step factor and assumes the
    /// fixed step.
    pub fn integrate(&mut self, bounds: WorldBounds, dt: f32) {
        if !self.launched {
            return;
        }

        self.vel.y += self.profile.gravity * dt;
        self.vel *= self.profile.drag;
        self.pos += self.vel * dt;

        let max_x = bounds.width - self.size;
        let max_y = bounds.height - self.size;

        if self.profile.wall_bounce && (self.pos.x < 0.0 || self.pos.x > max_x) {
            self.vel.x = -self.vel.x;
            self.pos.x = self.pos.x.clamp(0.0, max_x);
        }

        if self.profile.floor_restitution > 0.0 {
            if self.pos.y < 0.0 || self.pos.y > max_y {
                self.vel.y = -self.vel.y * self.profile.floor_restitution;
                self.pos.y = self.pos.y.clamp(0.0, max_y);
            }
        } else if self.pos.y > max_y {
            // Absorbing floor: come to rest instead of bouncing
            self.pos.y = max_y;
            self.vel.y = 0.0;
        }
    }
}
