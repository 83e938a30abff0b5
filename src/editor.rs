//! Level editor model
//!
//! The host UI feeds pointer and key events; this model keeps the grid
//! being edited and the active brush. Left click paints the brush, right
//! click erases, number keys pick the brush — all expressed here as plain
//! method calls so the model stays free of any windowing mechanism.
//! Persistence goes through [`crate::maps::MapStore`].

use glam::Vec2;

use crate::cell_at;
use crate::consts::{CELL_SIZE, WORLD_HEIGHT, WORLD_WIDTH};
use crate::sim::{BlockType, Grid};

/// An in-progress level edit.
#[derive(Debug, Clone)]
pub struct Editor {
    grid: Grid,
    brush: BlockType,
}

impl Editor {
    /// Empty editor sized to the stock world (15×20 cells at 40 px).
    pub fn new() -> Self {
        let rows = (WORLD_HEIGHT / CELL_SIZE) as usize;
        let cols = (WORLD_WIDTH / CELL_SIZE) as usize;
        Self::with_grid(Grid::new(rows, cols))
    }

    /// Resume editing an existing level.
    pub fn with_grid(grid: Grid) -> Self {
        Self {
            grid,
            brush: BlockType::Slingshot,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn brush(&self) -> BlockType {
        self.brush
    }

    /// Pick the block type painted by subsequent clicks.
    pub fn select_brush(&mut self, kind: BlockType) {
        self.brush = kind;
    }

    /// Paint the brush into a cell. Returns `false` out of bounds.
    pub fn paint_cell(&mut self, row: usize, col: usize) -> bool {
        self.grid.set_block(row, col, self.brush)
    }

    /// Clear a cell back to empty. Returns `false` out of bounds.
    pub fn erase_cell(&mut self, row: usize, col: usize) -> bool {
        self.grid.set_block(row, col, BlockType::Empty)
    }

    /// Paint the cell under a world-space point (pointer position).
    pub fn paint_at(&mut self, point: Vec2) -> bool {
        match cell_index(point) {
            Some((row, col)) => self.paint_cell(row, col),
            None => false,
        }
    }

    /// Erase the cell under a world-space point.
    pub fn erase_at(&mut self, point: Vec2) -> bool {
        match cell_index(point) {
            Some((row, col)) => self.erase_cell(row, col),
            None => false,
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

fn cell_index(point: Vec2) -> Option<(usize, usize)> {
    let (row, col) = cell_at(point, CELL_SIZE);
    if row < 0 || col < 0 {
        None
    } else {
        Some((row as usize, col as usize))
    }
}
