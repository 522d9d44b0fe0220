//! Multi-term A* search for the Veer planner.
//!
//! Given an [`Occupancy`](veer_space::Occupancy) grid and any
//! [`EdgeCost`](veer_core::EdgeCost) model, [`MultiTermAStar`] finds a
//! path and reports both its scalar cost and the per-term breakdown.
//! [`CostModel`] is the field-backed cost model; [`Planner`] and
//! [`plan`] wire it to configuration.
//!
//! # Quick start
//!
//! ```
//! use veer_core::{Cell, Term, Weights};
//! use veer_search::{plan, PlanRequest, PlannerConfig};
//!
//! let request = PlanRequest {
//!     config: PlannerConfig {
//!         width: 5,
//!         height: 5,
//!         weights: Weights::time_only(),
//!         ..PlannerConfig::default()
//!     },
//!     start: Cell::new(0, 0),
//!     goal: Cell::new(2, 2),
//! };
//! let outcome = plan(&request).unwrap();
//! assert!(outcome.found);
//! assert_eq!(outcome.path.len(), 5);
//! assert_eq!(outcome.terms[Term::Time], 4.0);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod astar;
pub mod config;
pub mod cost;
pub mod frontier;
pub mod metrics;
pub mod outcome;
pub mod planner;

pub use astar::MultiTermAStar;
pub use config::{ConfigError, PlanRequest, PlannerConfig};
pub use cost::CostModel;
pub use frontier::{Frontier, FrontierKey};
pub use metrics::SearchMetrics;
pub use outcome::{PathFailure, PlanOutcome};
pub use planner::{plan, Planner};
