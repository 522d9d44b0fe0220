//! Grid cell coordinates and the four cardinal [`Direction`]s.

use std::fmt;

/// A cell coordinate on a 2D grid.
///
/// `x` is the column and `y` the row. Coordinates are signed so that
/// caller-supplied positions outside the grid can be represented (and
/// rejected or ignored) rather than wrapping on conversion.
///
/// Ordering is lexicographic on `(x, y)`; the search frontier relies on
/// this as its final tie-breaker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Cell {
    /// Create a cell at `(x, y)`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan (L1) distance to `other`.
    pub fn manhattan(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y))
    }

    /// The cell one step away in `dir`. Not bounds-checked; saturates at
    /// the `i32` limits.
    pub fn step(self, dir: Direction) -> Cell {
        let (dx, dy) = dir.offset();
        Cell::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Direction of the unit step from `self` to `to`, or `None` if the
    /// two cells are not 4-adjacent.
    pub fn direction_to(self, to: Cell) -> Option<Direction> {
        match (to.x.checked_sub(self.x), to.y.checked_sub(self.y)) {
            (Some(-1), Some(0)) => Some(Direction::West),
            (Some(1), Some(0)) => Some(Direction::East),
            (Some(0), Some(-1)) => Some(Direction::North),
            (Some(0), Some(1)) => Some(Direction::South),
            _ => None,
        }
    }

    /// Returns `true` if `other` is exactly one orthogonal step away.
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four orthogonal moves on a 4-connected grid.
///
/// `North` decreases `y`, `South` increases it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Move one cell west (x - 1).
    West,
    /// Move one cell east (x + 1).
    East,
    /// Move one cell north (y - 1).
    North,
    /// Move one cell south (y + 1).
    South,
}

impl Direction {
    /// All four directions in neighbour enumeration order.
    pub const ALL: [Direction; 4] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
    ];

    /// Returns the `(dx, dy)` offset for this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
            Direction::North => (0, -1),
            Direction::South => (0, 1),
        }
    }

    /// The direction pointing the opposite way.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::West => Direction::East,
            Direction::East => Direction::West,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
        }
    }
}
