//! Veer: explainable multi-term path planning on 2-D grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Veer sub-crates, plus the caller-side [`report`] layer that turns a
//! raw [`PlanOutcome`](search::PlanOutcome) into percentages and a
//! one-paragraph explanation.
//!
//! # Quick start
//!
//! ```rust
//! use veer::prelude::*;
//!
//! let request = PlanRequest {
//!     config: PlannerConfig {
//!         obstacles: (0..20).map(|y| Cell::new(16, y)).collect(),
//!         hazards: vec![Cell::new(24, 12)],
//!         ..PlannerConfig::default()
//!     },
//!     ..PlanRequest::default()
//! };
//! let outcome = plan(&request).unwrap();
//! assert!(outcome.found);
//!
//! let report = PlanReport::from_outcome(&outcome);
//! assert_eq!(report.steps, outcome.path.len() - 1);
//! println!("{}", report.explanation);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `veer-core` | Cells, terms, weights, scalar fields, errors, `EdgeCost` |
//! | [`space`] | `veer-space` | Grid geometry and occupancy |
//! | [`fields`] | `veer-fields` | Risk, uncertainty and memory field generators |
//! | [`search`] | `veer-search` | Cost model, multi-term A*, planner entry points |
//! | [`report`] | this crate | Percentages and explanation text |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and traits (`veer-core`).
///
/// Contains [`types::Cell`], [`types::Term`], [`types::TermVector`],
/// [`types::Weights`], [`types::ScalarField`] and the
/// [`types::EdgeCost`] trait.
pub use veer_core as types;

/// Grid geometry and occupancy (`veer-space`).
pub use veer_space as space;

/// Derived cost fields (`veer-fields`).
///
/// [`fields::RiskField`], [`fields::UncertaintyField`] and
/// [`fields::MemoryField`] all implement [`fields::FieldGenerator`].
pub use veer_fields as fields;

/// Search engine and planner (`veer-search`).
///
/// [`search::plan`] is the one-shot entry point; [`search::Planner`]
/// keeps generated fields around for repeated queries.
pub use veer_search as search;

pub mod report;

/// Common imports for typical Veer usage.
///
/// ```rust
/// use veer::prelude::*;
/// ```
pub mod prelude {
    pub use veer_core::{Cell, Direction, EdgeCost, Term, TermVector, Weights};
    pub use veer_search::{
        plan, ConfigError, PathFailure, PlanOutcome, PlanRequest, Planner, PlannerConfig,
    };
    pub use veer_space::{GridGeometry, Occupancy};

    pub use crate::report::PlanReport;
}
