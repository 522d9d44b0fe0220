//! Read-only inputs shared by every field generator.

use veer_core::Cell;
use veer_space::{GridGeometry, Occupancy};

/// Inputs available to a [`FieldGenerator`](crate::FieldGenerator).
///
/// Borrowed for the duration of one generation call. Hazards are kept
/// as given; generators that use them ignore out-of-grid entries.
#[derive(Clone, Copy, Debug)]
pub struct FieldContext<'a> {
    occupancy: &'a Occupancy,
    hazards: &'a [Cell],
}

impl<'a> FieldContext<'a> {
    /// Create a context over an occupancy mask and a hazard list.
    pub fn new(occupancy: &'a Occupancy, hazards: &'a [Cell]) -> Self {
        Self { occupancy, hazards }
    }

    /// The grid being generated over.
    pub fn geometry(&self) -> &'a GridGeometry {
        self.occupancy.geometry()
    }

    /// The obstacle mask.
    pub fn occupancy(&self) -> &'a Occupancy {
        self.occupancy
    }

    /// Hazard coordinates, possibly including out-of-grid entries.
    pub fn hazards(&self) -> &'a [Cell] {
        self.hazards
    }
}
