//! Board dimensions and the grid → screen projection.
//!
//! Row 0 is the bottom edge of the board, so pressing Up (row + 1) moves the
//! cursor up the screen. Renderers must place cells with [`BoardGeometry::project`]
//! to keep that symmetry.
//!
//! Both sides are bounded by [`BoardGeometry::MAX_SIDE`], which keeps every
//! `u32 -> i32` cast below lossless.
use game_protocol::{BoardSize, PositionDto};

/// Screen-space placement of a cell: `x` grows rightwards, `y` downwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardGeometry {
    pub rows: u32,
    pub cols: u32,
}

impl BoardGeometry {
    /// Largest accepted side length.
    pub const MAX_SIDE: u32 = 256;

    /// Builds a geometry, forcing each side into `1..=MAX_SIDE`.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows: rows.clamp(1, Self::MAX_SIDE),
            cols: cols.clamp(1, Self::MAX_SIDE),
        }
    }

    /// Geometry for a server-announced size, or `None` when a side exceeds
    /// [`Self::MAX_SIDE`].
    pub fn from_size(size: BoardSize) -> Option<Self> {
        if size.rows > Self::MAX_SIDE || size.cols > Self::MAX_SIDE {
            return None;
        }
        Some(Self::new(size.rows, size.cols))
    }

    pub fn project(&self, position: PositionDto) -> Placement {
        Placement {
            x: position.col,
            y: self.rows as i32 - 1 - position.row,
        }
    }

    pub fn unproject(&self, placement: Placement) -> PositionDto {
        PositionDto::new(self.rows as i32 - 1 - placement.y, placement.x)
    }

    pub fn contains(&self, position: PositionDto) -> bool {
        (0..self.rows as i32).contains(&position.row) && (0..self.cols as i32).contains(&position.col)
    }

    pub fn clamp(&self, position: PositionDto) -> PositionDto {
        PositionDto::new(
            position.row.clamp(0, self.rows as i32 - 1),
            position.col.clamp(0, self.cols as i32 - 1),
        )
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::new(8, 8)
    }
}
