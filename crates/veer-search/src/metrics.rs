//! Per-search counters.
//!
//! [`SearchMetrics`] is filled in by
//! [`MultiTermAStar::search`](crate::MultiTermAStar::search) and returned
//! with every [`PlanOutcome`](crate::PlanOutcome), found or not.

/// Counters collected during a single search call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchMetrics {
    /// Frontier entries popped and expanded (stale entries excluded).
    pub nodes_expanded: usize,
    /// Frontier entries popped and discarded as stale.
    pub stale_skipped: usize,
    /// Frontier pushes, including the start node.
    pub pushes: usize,
    /// Largest frontier size observed.
    pub frontier_high_water: usize,
    /// Wall-clock time for the search, in microseconds.
    pub elapsed_us: u64,
}
