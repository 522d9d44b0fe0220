//! Core types and traits for the Veer multi-term grid planner.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental value types shared across the workspace: grid cells
//! and directions, the five-way cost decomposition ([`TermVector`]),
//! planning [`Weights`], dense [`ScalarField`] storage, error types,
//! and the [`EdgeCost`] trait the search engine is generic over.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod field;
pub mod term;
pub mod traits;
pub mod weights;

pub use cell::{Cell, Direction};
pub use error::{FieldError, WeightsError};
pub use field::{FieldKind, ScalarField};
pub use term::{Term, TermVector};
pub use traits::EdgeCost;
pub use weights::Weights;
