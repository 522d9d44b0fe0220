//! 2D rectangular grid with 4-connected neighbourhood (W/E/N/S).

use crate::error::SpaceError;
use smallvec::SmallVec;
use veer_core::{Cell, Direction};

/// A `width × height` grid with 4-connected neighbourhood.
///
/// Each cell has coordinate `(x, y)` where `0 <= x < width` and
/// `0 <= y < height`. Neighbours are the four cardinal directions,
/// enumerated in [`Direction::ALL`] order. Border cells have fewer
/// neighbours (corners 2, edges 3). Distance is Manhattan (L1).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridGeometry {
    width: u32,
    height: u32,
}

impl GridGeometry {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a new grid with `width * height` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use veer_core::Cell;
    /// use veer_space::GridGeometry;
    ///
    /// let grid = GridGeometry::new(16, 16).unwrap();
    /// assert_eq!(grid.cell_count(), 256);
    ///
    /// // Corner cell (0, 0) only has 2 neighbours.
    /// assert_eq!(grid.neighbours(Cell::new(0, 0)).len(), 2);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self, SpaceError> {
        if width == 0 || height == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if width > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Returns `true` if `cell` lies inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as u32) < self.width && (cell.y as u32) < self.height
    }

    /// Row-major rank of `cell`, or `None` if out of bounds.
    pub fn rank(&self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        Some(cell.y as usize * self.width as usize + cell.x as usize)
    }

    /// Inverse of [`rank`](Self::rank).
    pub fn cell_at(&self, rank: usize) -> Option<Cell> {
        if rank >= self.cell_count() {
            return None;
        }
        let w = self.width as usize;
        Some(Cell::new((rank % w) as i32, (rank / w) as i32))
    }

    /// Like [`rank`](Self::rank) but returns a descriptive error.
    pub fn check(&self, cell: Cell) -> Result<usize, SpaceError> {
        self.rank(cell).ok_or_else(|| SpaceError::CellOutOfBounds {
            cell,
            bounds: format!("[0, {}) x [0, {})", self.width, self.height),
        })
    }

    /// In-bounds 4-connected neighbours of `cell`, paired with the
    /// direction of the step that reaches them.
    pub fn neighbours(&self, cell: Cell) -> SmallVec<[(Direction, Cell); 4]> {
        let mut out = SmallVec::new();
        for dir in Direction::ALL {
            let next = cell.step(dir);
            if self.contains(next) {
                out.push((dir, next));
            }
        }
        out
    }

    /// Manhattan (L1) distance, the 4-connected geodesic.
    pub fn distance(&self, a: Cell, b: Cell) -> u32 {
        a.manhattan(b)
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let (w, h) = (self.width as i32, self.height as i32);
        (0..h).flat_map(move |y| (0..w).map(move |x| Cell::new(x, y)))
    }
}
