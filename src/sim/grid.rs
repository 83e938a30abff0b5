//! Grid level model
//!
//! A level is a fixed-size row-major array of block types. Every collision
//! query reads it; the editor and breakable-block destruction are the only
//! writers. Dimensions are set at construction and never change.

use std::fmt;

use glam::Vec2;

/// Content of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockType {
    #[default]
    Empty,
    /// Spawn anchor for launched projectiles
    Slingshot,
    /// Destroyed by the first projectile contact
    Breakable,
    /// Indestructible, reflects projectiles
    Solid,
}

impl BlockType {
    /// Decode a persisted integer code. Raw codes appear only at this
    /// conversion boundary.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(BlockType::Empty),
            1 => Some(BlockType::Slingshot),
            2 => Some(BlockType::Breakable),
            3 => Some(BlockType::Solid),
            _ => None,
        }
    }

    /// Integer code used in map files.
    pub fn code(self) -> u8 {
        match self {
            BlockType::Empty => 0,
            BlockType::Slingshot => 1,
            BlockType::Breakable => 2,
            BlockType::Solid => 3,
        }
    }
}

/// Why a level failed to load. Load failures are total: the grid is never
/// partially constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelError {
    /// The matrix has no rows or no columns
    EmptyGrid,
    /// A row's length differs from the first row's
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A cell holds an integer outside the block-type codes
    UnknownBlockCode { row: usize, col: usize, code: u8 },
    /// The level has no slingshot cell, so there is nowhere to launch from
    NoAnchorFound,
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::EmptyGrid => write!(f, "level has no cells"),
            LevelError::RaggedRows {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            LevelError::UnknownBlockCode { row, col, code } => {
                write!(f, "unknown block code {code} at ({row}, {col})")
            }
            LevelError::NoAnchorFound => write!(f, "level has no slingshot cell"),
        }
    }
}

impl std::error::Error for LevelError {}

/// Row-major grid of block types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<BlockType>,
}

impl Grid {
    /// An empty grid of the given dimensions.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be nonzero");
        Self {
            rows,
            cols,
            cells: vec![BlockType::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Block at (row, col), or `None` outside `[0, rows) × [0, cols)`.
    ///
    /// Out-of-bounds reads are an expected part of simulation (projectiles
    /// range over the whole playfield), so this never panics.
    pub fn block_at(&self, row: usize, col: usize) -> Option<BlockType> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Overwrite the block at (row, col). Returns `false` out of bounds.
    pub fn set_block(&mut self, row: usize, col: usize, kind: BlockType) -> bool {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col] = kind;
            true
        } else {
            false
        }
    }

    /// First slingshot cell in row-major scan order, if any.
    pub fn find_first_slingshot(&self) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|&b| b == BlockType::Slingshot)
            .map(|i| (i / self.cols, i % self.cols))
    }

    /// World-space center of a cell.
    pub fn cell_center(&self, row: usize, col: usize, cell_size: f32) -> Vec2 {
        Vec2::new(
            col as f32 * cell_size + cell_size / 2.0,
            row as f32 * cell_size + cell_size / 2.0,
        )
    }

    /// Number of cells holding `kind`.
    pub fn count(&self, kind: BlockType) -> usize {
        self.cells.iter().filter(|&&b| b == kind).count()
    }

    /// Build a grid from the raw level matrix.
    ///
    /// Rejects empty or ragged matrices and unknown block codes; nothing
    /// is kept from a rejected matrix.
    pub fn from_matrix(matrix: &[Vec<u8>]) -> Result<Self, LevelError> {
        let rows = matrix.len();
        let cols = matrix.first().map(Vec::len).unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(LevelError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in matrix.iter().enumerate() {
            if line.len() != cols {
                return Err(LevelError::RaggedRows {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
            for (col, &code) in line.iter().enumerate() {
                let block = BlockType::from_code(code)
                    .ok_or(LevelError::UnknownBlockCode { row, col, code })?;
                cells.push(block);
            }
        }

        Ok(Self { rows, cols, cells })
    }

    /// Serialize back to the level matrix format.
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|b| b.code()).collect())
            .collect()
    }
}
