//! Derived cost fields for the Veer planner.
//!
//! Each generator turns sparse inputs (obstacle or hazard coordinates,
//! or just a seed) into a dense [`ScalarField`](veer_core::ScalarField)
//! over the grid:
//!
//! 1. [`RiskField`]: `exp(-d/σ)` of the Manhattan distance to the
//!    nearest obstacle, with obstacle cells pinned to 1.0.
//! 2. [`UncertaintyField`]: seeded ChaCha8 uniform noise, box-blurred.
//! 3. [`MemoryField`]: sum of `decay^d` bumps around each hazard,
//!    normalized by the maximum.
//!
//! All three implement [`FieldGenerator`] and read their inputs from a
//! shared [`FieldContext`]. [`CostFields`] bundles one of each.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod blur;
pub mod context;
pub mod generator;
pub mod memory;
pub mod risk;
pub mod set;
pub mod uncertainty;

pub use context::FieldContext;
pub use generator::FieldGenerator;
pub use memory::{MemoryField, MemoryFieldBuilder};
pub use risk::{RiskField, RiskFieldBuilder};
pub use set::CostFields;
pub use uncertainty::{UncertaintyField, UncertaintyFieldBuilder};
