//! Grid geometry and occupancy for the Veer planner.
//!
//! [`GridGeometry`] is the 4-connected rectangular lattice every field
//! and search runs on: bounds checks, row-major ranks, neighbour
//! enumeration, and Manhattan distance. [`Occupancy`] layers an
//! immutable obstacle mask on top of it.
//!
//! Edges absorb: cells on the border simply have fewer neighbours.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod occupancy;

pub use error::SpaceError;
pub use grid::GridGeometry;
pub use occupancy::Occupancy;
