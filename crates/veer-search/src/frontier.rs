//! Min-ordered open list for [`MultiTermAStar`](crate::MultiTermAStar).
//!
//! Entries carry only their ordering key `(f, g, cell)`; every other
//! piece of search state lives in the side map. Floats compare with
//! [`f64::total_cmp`], so the order is total and the pop sequence is
//! fully determined by the pushes.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use veer_core::Cell;

/// Ordering key for one frontier entry.
///
/// Sorted by `f` ascending, then `g` ascending, then cell `(x, y)`
/// lexicographically.
#[derive(Clone, Copy, Debug)]
pub struct FrontierKey {
    /// Estimated total cost `g + h`.
    pub f: f64,
    /// Cost from start at push time.
    pub g: f64,
    /// The cell this entry refers to.
    pub cell: Cell,
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.g.total_cmp(&other.g))
            .then_with(|| self.cell.cmp(&other.cell))
    }
}

/// Binary-heap frontier popping the smallest [`FrontierKey`] first.
///
/// `BinaryHeap` is a max-heap, so keys are stored as `Reverse<FrontierKey>`.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<FrontierKey>>,
    pushes: usize,
    high_water: usize,
}

impl Frontier {
    /// An empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an entry.
    pub fn push(&mut self, f: f64, g: f64, cell: Cell) {
        self.heap.push(Reverse(FrontierKey { f, g, cell }));
        self.pushes += 1;
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Pop the entry with the smallest key.
    pub fn pop(&mut self) -> Option<FrontierKey> {
        self.heap.pop().map(|Reverse(key)| key)
    }

    /// Current number of entries, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total pushes since creation.
    pub fn pushes(&self) -> usize {
        self.pushes
    }

    /// Largest size the frontier has reached.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(frontier: &mut Frontier) -> Vec<(f64, f64, Cell)> {
        std::iter::from_fn(|| frontier.pop().map(|k| (k.f, k.g, k.cell))).collect()
    }

    #[test]
    fn pops_lowest_f_first() {
        let mut fr = Frontier::new();
        fr.push(5.0, 1.0, Cell::new(0, 0));
        fr.push(2.0, 1.0, Cell::new(1, 0));
        fr.push(3.0, 1.0, Cell::new(2, 0));
        let fs: Vec<f64> = drain(&mut fr).into_iter().map(|e| e.0).collect();
        assert_eq!(fs, vec![2.0, 3.0, 5.0]);
    }

    #[test]
    fn ties_break_on_g_then_cell() {
        let mut fr = Frontier::new();
        fr.push(4.0, 3.0, Cell::new(0, 0));
        fr.push(4.0, 2.0, Cell::new(5, 5));
        fr.push(4.0, 2.0, Cell::new(1, 9));
        fr.push(4.0, 2.0, Cell::new(1, 2));
        let order: Vec<Cell> = drain(&mut fr).into_iter().map(|e| e.2).collect();
        assert_eq!(
            order,
            vec![
                Cell::new(1, 2),
                Cell::new(1, 9),
                Cell::new(5, 5),
                Cell::new(0, 0)
            ]
        );
    }

    #[test]
    fn tracks_pushes_and_high_water() {
        let mut fr = Frontier::new();
        fr.push(1.0, 0.0, Cell::new(0, 0));
        fr.push(2.0, 0.0, Cell::new(0, 1));
        let _ = fr.pop();
        fr.push(3.0, 0.0, Cell::new(0, 2));
        assert_eq!(fr.pushes(), 3);
        assert_eq!(fr.high_water(), 2);
        assert_eq!(fr.len(), 2);
    }

    #[test]
    fn negative_zero_and_zero_order_totally() {
        let mut fr = Frontier::new();
        fr.push(0.0, 0.0, Cell::new(0, 0));
        fr.push(-0.0, 0.0, Cell::new(1, 0));
        assert_eq!(fr.pop().map(|k| k.cell), Some(Cell::new(1, 0)));
    }
}
