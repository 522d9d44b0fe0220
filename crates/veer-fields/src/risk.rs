//! Obstacle-proximity risk field.
//!
//! Each cell's risk is `exp(-d / sigma)` where `d` is the Manhattan
//! distance to the nearest in-bounds obstacle. Obstacle cells are pinned
//! to exactly 1.0. With no obstacles the field is all zeros.
//!
//! Distance is computed exactly, as a brute-force minimum over every
//! obstacle, which is fine at the grid sizes this planner targets.
//!
//! Constructed via the builder pattern: [`RiskField::builder`].

use crate::context::FieldContext;
use crate::generator::FieldGenerator;
use log::trace;
use veer_core::{Cell, FieldError, FieldKind, ScalarField};

/// Obstacle-proximity field generator.
#[derive(Clone, Debug)]
pub struct RiskField {
    sigma: f64,
}

/// Builder for [`RiskField`].
pub struct RiskFieldBuilder {
    sigma: f64,
}

impl RiskField {
    /// Default fall-off length, in cells.
    pub const DEFAULT_SIGMA: f64 = 4.0;

    /// Create a new builder for configuring a `RiskField`.
    pub fn builder() -> RiskFieldBuilder {
        RiskFieldBuilder {
            sigma: Self::DEFAULT_SIGMA,
        }
    }

    /// Fall-off length.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl Default for RiskField {
    fn default() -> Self {
        Self {
            sigma: Self::DEFAULT_SIGMA,
        }
    }
}

impl RiskFieldBuilder {
    /// Set the fall-off length (default: 4.0). Must be finite and > 0.
    pub fn sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    /// Build the generator, validating configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `sigma` is non-finite or not strictly positive.
    pub fn build(self) -> Result<RiskField, FieldError> {
        if !self.sigma.is_finite() || self.sigma <= 0.0 {
            return Err(FieldError::InvalidParameter {
                field: FieldKind::Risk,
                parameter: "sigma",
                reason: format!("must be finite and > 0, got {}", self.sigma),
            });
        }
        Ok(RiskField { sigma: self.sigma })
    }
}

impl FieldGenerator for RiskField {
    fn kind(&self) -> FieldKind {
        FieldKind::Risk
    }

    fn generate(&self, ctx: &FieldContext<'_>) -> ScalarField {
        let geometry = ctx.geometry();
        let occupancy = ctx.occupancy();
        let mut field = ScalarField::zeros(geometry.width(), geometry.height());

        let obstacles: Vec<Cell> = occupancy.obstacles().collect();
        if obstacles.is_empty() {
            trace!("[RiskField] no in-bounds obstacles, field is zero");
            return field;
        }

        let out = field.as_mut_slice();
        for (i, cell) in geometry.cells().enumerate() {
            if occupancy.is_blocked(cell) {
                out[i] = 1.0;
                continue;
            }
            let d = obstacles
                .iter()
                .map(|&o| cell.manhattan(o))
                .min()
                .unwrap_or(u32::MAX);
            out[i] = (-f64::from(d) / self.sigma).exp() as f32;
        }

        trace!(
            "[RiskField] generated {}x{} from {} obstacles (sigma={})",
            geometry.width(),
            geometry.height(),
            obstacles.len(),
            self.sigma
        );
        field
    }
}
