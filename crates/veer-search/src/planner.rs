//! [`Planner`] and the one-shot [`plan`] entry point.

use crate::astar::MultiTermAStar;
use crate::config::{ConfigError, PlanRequest, PlannerConfig};
use crate::cost::CostModel;
use crate::outcome::PlanOutcome;
use log::debug;
use veer_core::{Cell, Weights};
use veer_fields::{CostFields, FieldContext};
use veer_space::Occupancy;

/// A validated grid with its derived cost fields, ready to plan on.
///
/// Fields are generated once in [`Planner::new`]; each call to
/// [`plan`](Planner::plan) runs an independent search over them.
#[derive(Clone, Debug)]
pub struct Planner {
    occupancy: Occupancy,
    fields: CostFields,
    weights: Weights,
    max_expansions: Option<usize>,
}

impl Planner {
    /// Validate `config` and generate the risk, uncertainty and memory
    /// fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for invalid dimensions, weights, or field
    /// parameters, or if a generated field contains non-finite values.
    pub fn new(config: PlannerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let geometry = config.geometry()?;
        let occupancy = Occupancy::new(geometry, config.obstacles.iter().copied());
        let ctx = FieldContext::new(&occupancy, &config.hazards);
        let fields = CostFields::generate(
            &ctx,
            &config.risk_field()?,
            &config.uncertainty_field()?,
            &config.memory_field()?,
        )?;
        debug!(
            "[Planner] ready: {}x{} grid, {} obstacles, weights={:?}",
            geometry.width(),
            geometry.height(),
            occupancy.obstacle_count(),
            config.weights
        );
        Ok(Self {
            occupancy,
            fields,
            weights: config.weights,
            max_expansions: config.max_expansions,
        })
    }

    /// Search for a path from `start` to `goal`.
    pub fn plan(&self, start: Cell, goal: Cell) -> PlanOutcome {
        let model = CostModel::new(&self.fields, self.weights);
        MultiTermAStar::new(&self.occupancy, &model)
            .with_max_expansions(self.max_expansions)
            .search(start, goal)
    }

    /// The obstacle mask.
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// The derived cost fields.
    pub fn fields(&self) -> &CostFields {
        &self.fields
    }

    /// The term weights.
    pub fn weights(&self) -> &Weights {
        &self.weights
    }
}

/// Build a [`Planner`] for `request.config` and run one search.
///
/// # Errors
///
/// Only configuration problems are errors; an unreachable goal is a
/// not-found [`PlanOutcome`].
pub fn plan(request: &PlanRequest) -> Result<PlanOutcome, ConfigError> {
    let planner = Planner::new(request.config.clone())?;
    Ok(planner.plan(request.start, request.goal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::PathFailure;

    #[test]
    fn default_request_finds_a_path() {
        let out = plan(&PlanRequest::default()).unwrap();
        assert!(out.found);
        assert_eq!(out.path.first(), Some(&Cell::new(1, 1)));
        assert_eq!(out.path.last(), Some(&Cell::new(30, 20)));
        assert!(out.path.len() >= 49);
    }

    #[test]
    fn invalid_config_is_an_error() {
        let request = PlanRequest {
            config: PlannerConfig {
                height: 0,
                ..PlannerConfig::default()
            },
            ..PlanRequest::default()
        };
        assert!(plan(&request).is_err());
    }

    #[test]
    fn planner_reuses_fields_across_queries() {
        let planner = Planner::new(PlannerConfig::default()).unwrap();
        let a = planner.plan(Cell::new(0, 0), Cell::new(5, 5));
        let b = planner.plan(Cell::new(5, 5), Cell::new(0, 0));
        assert!(a.found && b.found);
        assert_eq!(a.steps(), 10);
        assert_eq!(b.steps(), 10);
    }

    #[test]
    fn out_of_bounds_goal_is_not_an_error() {
        let planner = Planner::new(PlannerConfig::default()).unwrap();
        let out = planner.plan(Cell::new(0, 0), Cell::new(40, 0));
        assert_eq!(out.failure, Some(PathFailure::OutOfBounds));
    }
}
