//! Search results: [`PlanOutcome`] and [`PathFailure`].

use crate::metrics::SearchMetrics;
use std::fmt;
use veer_core::{Cell, TermVector};

/// Why a search returned no path.
///
/// Unreachability is a normal result, not an error: every variant is
/// reported through [`PlanOutcome::failure`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathFailure {
    /// Start or goal lies outside the grid.
    OutOfBounds,
    /// The start cell is an obstacle.
    StartBlocked,
    /// The goal cell is an obstacle.
    GoalBlocked,
    /// The frontier emptied without reaching the goal.
    NoPath,
    /// The expansion budget ran out before the goal was reached.
    ExpansionLimit,
}

impl fmt::Display for PathFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => write!(f, "start or goal is out of bounds"),
            Self::StartBlocked => write!(f, "start cell is an obstacle"),
            Self::GoalBlocked => write!(f, "goal cell is an obstacle"),
            Self::NoPath => write!(f, "goal is unreachable from start"),
            Self::ExpansionLimit => write!(f, "expansion budget exhausted"),
        }
    }
}

/// The result of one planning call.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanOutcome {
    /// Cells from start to goal inclusive; empty when not found.
    pub path: Vec<Cell>,
    /// Whether the goal was reached.
    pub found: bool,
    /// Scalar cost `g` at the goal; 0 when not found.
    pub total_cost: f64,
    /// Per-term sums accumulated along `path`; zero when not found.
    pub terms: TermVector,
    /// Reason for failure, `None` when found.
    pub failure: Option<PathFailure>,
    /// Search counters.
    pub metrics: SearchMetrics,
}

impl PlanOutcome {
    /// A successful outcome.
    pub fn found(path: Vec<Cell>, total_cost: f64, terms: TermVector, metrics: SearchMetrics) -> Self {
        Self {
            path,
            found: true,
            total_cost,
            terms,
            failure: None,
            metrics,
        }
    }

    /// A failed outcome: empty path, zero cost and terms.
    pub fn failed(failure: PathFailure, metrics: SearchMetrics) -> Self {
        Self {
            path: Vec::new(),
            found: false,
            total_cost: 0.0,
            terms: TermVector::ZERO,
            failure: Some(failure),
            metrics,
        }
    }

    /// Number of moves along the path (`path.len() - 1`, or 0).
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
