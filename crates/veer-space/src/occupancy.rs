//! Immutable obstacle mask over a [`GridGeometry`].

use crate::grid::GridGeometry;
use smallvec::SmallVec;
use veer_core::{Cell, Direction};

/// A grid plus the set of impassable cells.
///
/// Obstacle coordinates outside the grid are silently dropped at
/// construction; duplicates collapse. Once built the mask never changes.
#[derive(Clone, Debug)]
pub struct Occupancy {
    geometry: GridGeometry,
    blocked: Vec<bool>,
    obstacle_count: usize,
}

impl Occupancy {
    /// Build an occupancy mask from obstacle coordinates.
    pub fn new(geometry: GridGeometry, obstacles: impl IntoIterator<Item = Cell>) -> Self {
        let mut blocked = vec![false; geometry.cell_count()];
        let mut obstacle_count = 0;
        for cell in obstacles {
            if let Some(rank) = geometry.rank(cell) {
                if !blocked[rank] {
                    blocked[rank] = true;
                    obstacle_count += 1;
                }
            }
        }
        Self {
            geometry,
            blocked,
            obstacle_count,
        }
    }

    /// An occupancy mask with no obstacles.
    pub fn open(geometry: GridGeometry) -> Self {
        Self::new(geometry, std::iter::empty())
    }

    /// The underlying grid.
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Number of distinct in-bounds obstacles.
    pub fn obstacle_count(&self) -> usize {
        self.obstacle_count
    }

    /// Returns `true` if `cell` is in bounds and marked as an obstacle.
    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.geometry
            .rank(cell)
            .is_some_and(|rank| self.blocked[rank])
    }

    /// Returns `true` if `cell` is in bounds and not an obstacle.
    pub fn is_passable(&self, cell: Cell) -> bool {
        self.geometry
            .rank(cell)
            .is_some_and(|rank| !self.blocked[rank])
    }

    /// Passable 4-connected neighbours of `cell`, with step directions.
    pub fn passable_neighbours(&self, cell: Cell) -> SmallVec<[(Direction, Cell); 4]> {
        let mut out = self.geometry.neighbours(cell);
        out.retain(|(_, nb)| self.is_passable(*nb));
        out
    }

    /// In-bounds obstacles in row-major order.
    pub fn obstacles(&self) -> impl Iterator<Item = Cell> + '_ {
        self.blocked
            .iter()
            .enumerate()
            .filter(|(_, b)| **b)
            .filter_map(move |(rank, _)| self.geometry.cell_at(rank))
    }
}
