//! Grid collision resolution
//!
//! Maps a projectile's occupying cell to a block and applies the
//! block-specific response: breakables are removed and damp the
//! projectile, solids push it out along the axis of least penetration and
//! reflect it.
//!
//! The check is discrete: it samples the cell under the projectile once
//! per tick and does not sweep the path between ticks, so a fast enough
//! projectile can tunnel through a one-cell-thick wall. Known limitation.

use glam::Vec2;

use crate::cell_at;
use crate::consts::{BREAK_SLOWDOWN, SOLID_RESTITUTION};

use super::grid::{BlockType, Grid};
use super::projectile::Projectile;

/// Something the simulation did that the render layer may want to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A projectile left the sling.
    Launched,
    /// A breakable block was destroyed.
    BlockBroken { row: usize, col: usize },
    /// A projectile bounced off a solid block.
    SolidBounce { row: usize, col: usize },
}

/// Resolve the projectile's contact with the grid for this tick.
///
/// The occupying cell is derived from the bounding box's top-left corner.
/// Cells outside the grid are a no-op: the projectile ranges over the
/// whole playfield and regularly sits past the grid's edge.
pub fn resolve_grid_collision(
    projectile: &mut Projectile,
    grid: &mut Grid,
    cell_size: f32,
) -> Option<GameEvent> {
    let (row, col) = cell_at(projectile.pos, cell_size);
    if row < 0 || col < 0 {
        return None;
    }
    let (row, col) = (row as usize, col as usize);

    match grid.block_at(row, col)? {
        BlockType::Empty | BlockType::Slingshot => None,
        BlockType::Breakable => {
            // One contact removes the block for good; there is no
            // partial-damage state.
            grid.set_block(row, col, BlockType::Empty);
            projectile.vel *= BREAK_SLOWDOWN;
            Some(GameEvent::BlockBroken { row, col })
        }
        BlockType::Solid => {
            bounce_off_cell(projectile, row, col, cell_size);
            Some(GameEvent::SolidBounce { row, col })
        }
    }
}

/// Axis-separated rectangle response against one solid cell.
///
/// Resolves along the axis of minimum penetration (horizontal only when
/// strictly smaller), snaps the projectile flush with the block edge and
/// reflects that velocity component away from the block center, scaled by
/// the restitution factor.
fn bounce_off_cell(projectile: &mut Projectile, row: usize, col: usize, cell_size: f32) {
    let block_min = Vec2::new(col as f32 * cell_size, row as f32 * cell_size);
    let block_max = block_min + Vec2::splat(cell_size);
    let block_center = block_min + Vec2::splat(cell_size / 2.0);

    let proj_min = projectile.pos;
    let proj_max = proj_min + Vec2::splat(projectile.size);

    let overlap_x = (block_max.x - proj_min.x).min(proj_max.x - block_min.x);
    let overlap_y = (block_max.y - proj_min.y).min(proj_max.y - block_min.y);

    let center = projectile.center();

    if overlap_x < overlap_y {
        let speed = projectile.vel.x.abs() * SOLID_RESTITUTION;
        if center.x < block_center.x {
            projectile.pos.x = block_min.x - projectile.size;
            projectile.vel.x = -speed;
        } else {
            projectile.pos.x = block_max.x;
            projectile.vel.x = speed;
        }
    } else {
        let speed = projectile.vel.y.abs() * SOLID_RESTITUTION;
        if center.y < block_center.y {
            projectile.pos.y = block_min.y - projectile.size;
            projectile.vel.y = -speed;
        } else {
            projectile.pos.y = block_max.y;
            projectile.vel.y = speed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::projectile::PhysicsProfile;

    const CELL: f32 = 40.0;

    fn grid_with(row: usize, col: usize, kind: BlockType) -> Grid {
        let mut grid = Grid::new(3, 3);
        grid.set_block(row, col, kind);
        grid
    }

    fn projectile_at(pos: Vec2, vel: Vec2) -> Projectile {
        let mut p = Projectile::new(pos, 20.0, PhysicsProfile::DEMOLITION);
        p.vel = vel;
        p.launched = true;
        p
    }

    fn overlaps_cell(p: &Projectile, row: usize, col: usize) -> bool {
        let min = Vec2::new(col as f32 * CELL, row as f32 * CELL);
        let max = min + Vec2::splat(CELL);
        p.pos.x < max.x
            && p.pos.x + p.size > min.x
            && p.pos.y < max.y
            && p.pos.y + p.size > min.y
    }

    #[test]
    fn test_breakable_is_removed_and_damps_velocity() {
        let mut grid = grid_with(1, 1, BlockType::Breakable);
        let mut p = projectile_at(Vec2::new(45.0, 50.0), Vec2::new(10.0, -4.0));

        let event = resolve_grid_collision(&mut p, &mut grid, CELL);
        assert_eq!(event, Some(GameEvent::BlockBroken { row: 1, col: 1 }));
        assert_eq!(grid.block_at(1, 1), Some(BlockType::Empty));
        assert!((p.vel.x - 7.0).abs() < 1e-6);
        assert!((p.vel.y + 2.8).abs() < 1e-6);
    }

    #[test]
    fn test_breaking_is_idempotent() {
        let mut grid = grid_with(1, 1, BlockType::Breakable);
        let mut p = projectile_at(Vec2::new(45.0, 50.0), Vec2::new(10.0, 0.0));

        assert!(resolve_grid_collision(&mut p, &mut grid, CELL).is_some());
        let vel_after_break = p.vel;

        // Still in the now-empty cell: no further effect
        assert_eq!(resolve_grid_collision(&mut p, &mut grid, CELL), None);
        assert_eq!(p.vel, vel_after_break);
        assert_eq!(grid.block_at(1, 1), Some(BlockType::Empty));
    }

    #[test]
    fn test_solid_bounce_horizontal() {
        let mut grid = grid_with(1, 1, BlockType::Solid);
        // Shallow horizontal penetration, deep vertical one
        let mut p = projectile_at(Vec2::new(41.0, 50.0), Vec2::new(10.0, 3.0));

        let event = resolve_grid_collision(&mut p, &mut grid, CELL);
        assert_eq!(event, Some(GameEvent::SolidBounce { row: 1, col: 1 }));
        // Pushed out to the left, velocity reflected and scaled
        assert_eq!(p.pos.x, 40.0 - p.size);
        assert!((p.vel.x + 8.0).abs() < 1e-6);
        assert_eq!(p.vel.y, 3.0);
        assert!(!overlaps_cell(&p, 1, 1));
    }

    #[test]
    fn test_solid_bounce_vertical() {
        let mut grid = grid_with(1, 1, BlockType::Solid);
        let mut p = projectile_at(Vec2::new(50.0, 41.0), Vec2::new(3.0, 10.0));

        let event = resolve_grid_collision(&mut p, &mut grid, CELL);
        assert_eq!(event, Some(GameEvent::SolidBounce { row: 1, col: 1 }));
        assert_eq!(p.pos.y, 40.0 - p.size);
        assert!((p.vel.y + 8.0).abs() < 1e-6);
        assert_eq!(p.vel.x, 3.0);
        assert!(!overlaps_cell(&p, 1, 1));
    }

    #[test]
    fn test_equal_overlap_resolves_vertically() {
        let mut grid = grid_with(1, 1, BlockType::Solid);
        let mut p = projectile_at(Vec2::new(41.0, 41.0), Vec2::new(5.0, 5.0));

        resolve_grid_collision(&mut p, &mut grid, CELL);
        // Tie-break goes to the vertical axis
        assert_eq!(p.pos.y, 40.0 - p.size);
        assert_eq!(p.pos.x, 41.0);
        assert!(p.vel.y < 0.0);
    }

    #[test]
    fn test_bounce_away_from_block_center_on_far_side() {
        let mut grid = grid_with(1, 1, BlockType::Solid);
        // Top-left corner just inside the cell's right edge
        let mut p = projectile_at(Vec2::new(79.0, 50.0), Vec2::new(-10.0, 2.0));

        resolve_grid_collision(&mut p, &mut grid, CELL);
        // Pushed out to the right, moving right
        assert_eq!(p.pos.x, 80.0);
        assert!((p.vel.x - 8.0).abs() < 1e-6);
        assert!(!overlaps_cell(&p, 1, 1));
    }

    #[test]
    fn test_cell_outside_grid_is_no_op() {
        let mut grid = Grid::new(2, 2);
        let mut p = projectile_at(Vec2::new(300.0, 300.0), Vec2::new(5.0, 5.0));
        assert_eq!(resolve_grid_collision(&mut p, &mut grid, CELL), None);

        p.pos = Vec2::new(-30.0, 10.0);
        assert_eq!(resolve_grid_collision(&mut p, &mut grid, CELL), None);
        assert_eq!(p.vel, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_empty_and_slingshot_have_no_effect() {
        let mut grid = grid_with(1, 1, BlockType::Slingshot);
        let mut p = projectile_at(Vec2::new(45.0, 50.0), Vec2::new(10.0, 0.0));
        assert_eq!(resolve_grid_collision(&mut p, &mut grid, CELL), None);
        assert_eq!(p.vel, Vec2::new(10.0, 0.0));
        assert_eq!(grid.block_at(1, 1), Some(BlockType::Slingshot));
    }
}
