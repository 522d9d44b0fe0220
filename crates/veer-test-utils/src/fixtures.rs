//! Reusable grid fixtures.
//!
//! - [`open_grid`] has no obstacles.
//! - [`wall_grid`] splits the grid with a full-height wall.
//! - [`gap_wall_grid`] is the same wall with a single opening.

use veer_core::Cell;
use veer_space::{GridGeometry, Occupancy};

/// An obstacle-free `width × height` grid.
///
/// # Panics
///
/// Panics if either dimension is zero.
pub fn open_grid(width: u32, height: u32) -> Occupancy {
    Occupancy::open(geometry(width, height))
}

/// Every cell of column `wall_x`.
pub fn wall_cells(wall_x: i32, height: u32) -> Vec<Cell> {
    (0..height as i32).map(|y| Cell::new(wall_x, y)).collect()
}

/// A grid whose column `wall_x` is fully blocked.
pub fn wall_grid(width: u32, height: u32, wall_x: i32) -> Occupancy {
    Occupancy::new(geometry(width, height), wall_cells(wall_x, height))
}

/// Column `wall_x` blocked everywhere except row `gap_y`.
pub fn gap_wall_cells(wall_x: i32, height: u32, gap_y: i32) -> Vec<Cell> {
    wall_cells(wall_x, height)
        .into_iter()
        .filter(|c| c.y != gap_y)
        .collect()
}

/// A grid whose column `wall_x` is blocked except at row `gap_y`.
pub fn gap_wall_grid(width: u32, height: u32, wall_x: i32, gap_y: i32) -> Occupancy {
    Occupancy::new(geometry(width, height), gap_wall_cells(wall_x, height, gap_y))
}

fn geometry(width: u32, height: u32) -> GridGeometry {
    GridGeometry::new(width, height).expect("fixture dimensions must be non-zero")
}
