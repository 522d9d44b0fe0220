//! The [`EdgeCost`] seam between cost models and the search engine.

use crate::cell::{Cell, Direction};
use crate::term::TermVector;

/// Per-edge cost queries used by the search engine.
///
/// Implemented by the field-backed cost model in `veer-search` and by
/// mock models in tests. Implementations must be pure: the same edge
/// always yields the same terms.
pub trait EdgeCost {
    /// Raw per-term costs of moving from `from` to the adjacent cell `to`.
    ///
    /// `previous` is the direction of the edge that entered `from`, or
    /// `None` on the first step of a path.
    fn edge_terms(&self, from: Cell, to: Cell, previous: Option<Direction>) -> TermVector;

    /// Collapse a term vector into the scalar cost used for ordering.
    fn combine(&self, terms: &TermVector) -> f64;

    /// Multiplier applied to the Manhattan distance-to-goal heuristic.
    fn heuristic_scale(&self) -> f64;
}
