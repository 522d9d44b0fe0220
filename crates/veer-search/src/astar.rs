//! Multi-term A* over a 4-connected occupancy grid.
//!
//! The search orders expansion by the scalar `f = g + h` but carries,
//! for every reached cell, the per-term [`TermVector`] accumulated along
//! its best-known predecessor chain. On success the vector recorded at
//! the goal is exactly the elementwise sum of edge terms along the
//! returned path.
//!
//! Search state is keyed by cell only. The energy term depends on the
//! incoming direction, so the result is the best path under that
//! simplification rather than a guaranteed optimum when energy has
//! non-zero weight.

use crate::frontier::Frontier;
use crate::metrics::SearchMetrics;
use crate::outcome::{PathFailure, PlanOutcome};
use log::{debug, trace};
use std::time::Instant;
use veer_core::{Cell, Direction, EdgeCost, TermVector};
use veer_space::{GridGeometry, Occupancy};

/// Best-known state for one reached cell.
#[derive(Clone, Copy, Debug)]
struct NodeRecord {
    g: f64,
    terms: TermVector,
    incoming: Option<Direction>,
    parent: Option<usize>,
}

/// A* search engine, generic over the edge cost model.
pub struct MultiTermAStar<'a, C> {
    occupancy: &'a Occupancy,
    cost: &'a C,
    max_expansions: Option<usize>,
}

impl<'a, C: EdgeCost> MultiTermAStar<'a, C> {
    /// Create a search over `occupancy` priced by `cost`.
    pub fn new(occupancy: &'a Occupancy, cost: &'a C) -> Self {
        Self {
            occupancy,
            cost,
            max_expansions: None,
        }
    }

    /// Stop with [`PathFailure::ExpansionLimit`] after this many expansions.
    pub fn with_max_expansions(mut self, max_expansions: Option<usize>) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    /// Find a path from `start` to `goal`.
    ///
    /// Never fails hard: unreachable or invalid endpoints produce a
    /// not-found [`PlanOutcome`] with the reason in `failure`.
    pub fn search(&self, start: Cell, goal: Cell) -> PlanOutcome {
        let started = Instant::now();
        let mut metrics = SearchMetrics::default();
        let outcome = self.run(start, goal, &mut metrics);
        metrics.elapsed_us = started.elapsed().as_micros() as u64;
        PlanOutcome { metrics, ..outcome }
    }

    fn run(&self, start: Cell, goal: Cell, metrics: &mut SearchMetrics) -> PlanOutcome {
        trace!("[AStar] search: start={} goal={}", start, goal);
        let geometry = self.occupancy.geometry();

        let (Some(start_rank), Some(goal_rank)) = (geometry.rank(start), geometry.rank(goal))
        else {
            debug!("[AStar] FAILED: OutOfBounds - start or goal outside grid");
            return PlanOutcome::failed(PathFailure::OutOfBounds, SearchMetrics::default());
        };
        if self.occupancy.is_blocked(start) {
            debug!("[AStar] FAILED: StartBlocked at {}", start);
            return PlanOutcome::failed(PathFailure::StartBlocked, SearchMetrics::default());
        }
        if self.occupancy.is_blocked(goal) {
            debug!("[AStar] FAILED: GoalBlocked at {}", goal);
            return PlanOutcome::failed(PathFailure::GoalBlocked, SearchMetrics::default());
        }

        let h_scale = self.cost.heuristic_scale();
        let heuristic = |cell: Cell| h_scale * f64::from(cell.manhattan(goal));

        let mut records: Vec<Option<NodeRecord>> = vec![None; geometry.cell_count()];
        let mut frontier = Frontier::new();

        records[start_rank] = Some(NodeRecord {
            g: 0.0,
            terms: TermVector::ZERO,
            incoming: None,
            parent: None,
        });
        frontier.push(heuristic(start), 0.0, start);

        let failure = loop {
            let Some(entry) = frontier.pop() else {
                break PathFailure::NoPath;
            };
            let Some(rank) = geometry.rank(entry.cell) else {
                continue;
            };
            let Some(current) = records[rank] else {
                continue;
            };
            if entry.g > current.g {
                metrics.stale_skipped += 1;
                continue;
            }

            if rank == goal_rank {
                Self::fill_frontier_metrics(metrics, &frontier);
                let path = Self::reconstruct(&records, geometry, goal_rank);
                debug!(
                    "[AStar] SUCCESS: path length={} cells, cost={:.3}, nodes_expanded={}",
                    path.len(),
                    current.g,
                    metrics.nodes_expanded
                );
                return PlanOutcome::found(path, current.g, current.terms, SearchMetrics::default());
            }

            if self
                .max_expansions
                .is_some_and(|max| metrics.nodes_expanded >= max)
            {
                break PathFailure::ExpansionLimit;
            }
            metrics.nodes_expanded += 1;

            for (dir, next) in self.occupancy.passable_neighbours(entry.cell) {
                let Some(next_rank) = geometry.rank(next) else {
                    continue;
                };
                let edge = self.cost.edge_terms(entry.cell, next, current.incoming);
                let g = current.g + self.cost.combine(&edge);

                let improves = records[next_rank].is_none_or(|r| g < r.g);
                if improves {
                    records[next_rank] = Some(NodeRecord {
                        g,
                        terms: current.terms + edge,
                        incoming: Some(dir),
                        parent: Some(rank),
                    });
                    frontier.push(g + heuristic(next), g, next);
                }
            }
        };

        Self::fill_frontier_metrics(metrics, &frontier);
        debug!(
            "[AStar] FAILED: {:?} after expanding {} nodes",
            failure, metrics.nodes_expanded
        );
        PlanOutcome::failed(failure, SearchMetrics::default())
    }

    fn fill_frontier_metrics(metrics: &mut SearchMetrics, frontier: &Frontier) {
        metrics.pushes = frontier.pushes();
        metrics.frontier_high_water = frontier.high_water();
    }

    fn reconstruct(
        records: &[Option<NodeRecord>],
        geometry: &GridGeometry,
        goal_rank: usize,
    ) -> Vec<Cell> {
        let mut path = Vec::new();
        let mut cursor = Some(goal_rank);
        while let Some(rank) = cursor {
            if let Some(cell) = geometry.cell_at(rank) {
                path.push(cell);
            }
            cursor = records[rank].and_then(|r| r.parent);
        }
        path.reverse();
        path
    }
}
