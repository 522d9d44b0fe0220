//! One of each derived field, generated together for a single plan.

use crate::context::FieldContext;
use crate::generator::FieldGenerator;
use crate::memory::MemoryField;
use crate::risk::RiskField;
use crate::uncertainty::UncertaintyField;
use log::debug;
use veer_core::{Cell, FieldError, FieldKind, ScalarField};

/// The three dense fields a cost model reads.
///
/// All three share the grid's dimensions and contain only finite
/// values in `[0, 1]`.
#[derive(Clone, Debug)]
pub struct CostFields {
    risk: ScalarField,
    uncertainty: ScalarField,
    memory: ScalarField,
}

impl CostFields {
    /// Run the three generators over `ctx`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::NonFinite`] if any generator emits a NaN
    /// or infinite value.
    pub fn generate(
        ctx: &FieldContext<'_>,
        risk: &RiskField,
        uncertainty: &UncertaintyField,
        memory: &MemoryField,
    ) -> Result<Self, FieldError> {
        let fields = Self {
            risk: risk.generate_checked(ctx)?,
            uncertainty: uncertainty.generate_checked(ctx)?,
            memory: memory.generate_checked(ctx)?,
        };
        debug!(
            "[CostFields] {}x{}: obstacles={} hazards={}",
            ctx.geometry().width(),
            ctx.geometry().height(),
            ctx.occupancy().obstacle_count(),
            ctx.hazards().len()
        );
        Ok(fields)
    }

    /// Assemble from already generated fields.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::ShapeMismatch`] if the uncertainty or
    /// memory field differs in size from the risk field.
    pub fn from_fields(
        risk: ScalarField,
        uncertainty: ScalarField,
        memory: ScalarField,
    ) -> Result<Self, FieldError> {
        let expected = (risk.width(), risk.height());
        for (kind, f) in [
            (FieldKind::Uncertainty, &uncertainty),
            (FieldKind::Memory, &memory),
        ] {
            let actual = (f.width(), f.height());
            if actual != expected {
                return Err(FieldError::ShapeMismatch {
                    field: kind,
                    expected,
                    actual,
                });
            }
        }
        Ok(Self {
            risk,
            uncertainty,
            memory,
        })
    }

    /// Obstacle-proximity field.
    pub fn risk(&self) -> &ScalarField {
        &self.risk
    }

    /// Smoothed-noise field.
    pub fn uncertainty(&self) -> &ScalarField {
        &self.uncertainty
    }

    /// Hazard-memory field.
    pub fn memory(&self) -> &ScalarField {
        &self.memory
    }

    /// `(risk, uncertainty, memory)` at `cell`, zeros if out of bounds.
    pub fn sample(&self, cell: Cell) -> (f32, f32, f32) {
        (
            self.risk.value_or_zero(cell),
            self.uncertainty.value_or_zero(cell),
            self.memory.value_or_zero(cell),
        )
    }
}
