//! Test utilities and mock types for Veer development.
//!
//! Provides mock implementations of [`EdgeCost`] for driving the search
//! without generated fields, plus path checks shared by the integration
//! tests. Grid fixtures live in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use veer_core::{Cell, Direction, EdgeCost, Term, TermVector, Weights};
use veer_space::Occupancy;

/// Every step costs one unit of time and nothing else.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformCost;

impl EdgeCost for UniformCost {
    fn edge_terms(&self, _from: Cell, _to: Cell, _previous: Option<Direction>) -> TermVector {
        let mut t = TermVector::ZERO;
        t[Term::Time] = 1.0;
        t
    }

    fn combine(&self, terms: &TermVector) -> f64 {
        terms[Term::Time]
    }

    fn heuristic_scale(&self) -> f64 {
        1.0
    }
}

/// One unit of time per step plus `turn_cost` energy on every turn.
///
/// Mirrors the direction handling of the real cost model without any
/// field lookups.
#[derive(Clone, Copy, Debug)]
pub struct TurnCountingCost {
    pub turn_cost: f64,
    pub weights: Weights,
}

impl TurnCountingCost {
    pub fn new(turn_cost: f64) -> Self {
        Self {
            turn_cost,
            weights: Weights::time_only().with(Term::Energy, 1.0),
        }
    }
}

impl EdgeCost for TurnCountingCost {
    fn edge_terms(&self, from: Cell, to: Cell, previous: Option<Direction>) -> TermVector {
        let mut t = TermVector::ZERO;
        t[Term::Time] = 1.0;
        if let (Some(prev), Some(dir)) = (previous, from.direction_to(to)) {
            if prev != dir {
                t[Term::Energy] = self.turn_cost;
            }
        }
        t
    }

    fn combine(&self, terms: &TermVector) -> f64 {
        self.weights.combine(terms)
    }

    fn heuristic_scale(&self) -> f64 {
        self.weights.time
    }
}

/// Checks that `path` is a 4-connected walk from `start` to `goal`
/// through passable cells only.
///
/// Returns a description of the first violation.
pub fn check_path(
    occupancy: &Occupancy,
    path: &[Cell],
    start: Cell,
    goal: Cell,
) -> Result<(), String> {
    match (path.first(), path.last()) {
        (Some(&first), Some(&last)) => {
            if first != start {
                return Err(format!("path starts at {first}, expected {start}"));
            }
            if last != goal {
                return Err(format!("path ends at {last}, expected {goal}"));
            }
        }
        _ => return Err("path is empty".to_string()),
    }
    for &cell in path {
        if !occupancy.is_passable(cell) {
            return Err(format!("path crosses impassable cell {cell}"));
        }
    }
    for pair in path.windows(2) {
        if !pair[0].is_adjacent(pair[1]) {
            return Err(format!("{} and {} are not adjacent", pair[0], pair[1]));
        }
    }
    Ok(())
}

/// Re-prices `path` edge by edge under `cost`.
///
/// Returns the summed term vector and the scalar cost accumulated the
/// same way the search accumulates `g`.
pub fn replay_path<C: EdgeCost>(cost: &C, path: &[Cell]) -> (TermVector, f64) {
    let mut terms = TermVector::ZERO;
    let mut g = 0.0;
    let mut previous = None;
    for pair in path.windows(2) {
        let edge = cost.edge_terms(pair[0], pair[1], previous);
        g += cost.combine(&edge);
        terms += edge;
        previous = pair[0].direction_to(pair[1]);
    }
    (terms, g)
}

#[cfg(test)]
mod tests {
    use super::*;
    use veer_space::GridGeometry;

    #[test]
    fn turn_counting_charges_turns_only() {
        let cost = TurnCountingCost::new(0.5);
        let path = [
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(2, 0),
            Cell::new(2, 1),
        ];
        let (terms, g) = replay_path(&cost, &path);
        assert_eq!(terms[Term::Time], 3.0);
        assert_eq!(terms[Term::Energy], 0.5);
        assert_eq!(g, 3.5);
    }

    #[test]
    fn check_path_reports_gaps() {
        let occ = Occupancy::open(GridGeometry::new(3, 3).unwrap());
        let path = [Cell::new(0, 0), Cell::new(2, 0)];
        assert!(check_path(&occ, &path, Cell::new(0, 0), Cell::new(2, 0)).is_err());
        let path = [Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)];
        assert!(check_path(&occ, &path, Cell::new(0, 0), Cell::new(2, 0)).is_ok());
    }
}
