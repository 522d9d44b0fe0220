//! Hazard-memory field.
//!
//! Every in-bounds hazard adds a bump of `decay^d` to each cell, where
//! `d` is the Manhattan distance from the cell to the hazard. The summed
//! field is divided by its maximum so the hottest cell reads 1.0. With
//! no in-bounds hazards the field stays all zeros.
//!
//! Cost is O(hazards × cells).
//!
//! Constructed via the builder pattern: [`MemoryField::builder`].

use crate::context::FieldContext;
use crate::generator::FieldGenerator;
use log::trace;
use veer_core::{Cell, FieldError, FieldKind, ScalarField};

/// Decayed hazard-bump field generator.
#[derive(Clone, Debug)]
pub struct MemoryField {
    decay: f64,
}

/// Builder for [`MemoryField`].
pub struct MemoryFieldBuilder {
    decay: f64,
}

impl MemoryField {
    /// Default per-cell decay factor.
    pub const DEFAULT_DECAY: f64 = 0.9;

    /// Create a new builder for configuring a `MemoryField`.
    pub fn builder() -> MemoryFieldBuilder {
        MemoryFieldBuilder {
            decay: Self::DEFAULT_DECAY,
        }
    }

    /// Per-cell decay factor.
    pub fn decay(&self) -> f64 {
        self.decay
    }
}

impl Default for MemoryField {
    fn default() -> Self {
        Self {
            decay: Self::DEFAULT_DECAY,
        }
    }
}

impl MemoryFieldBuilder {
    /// Set the decay factor (default: 0.9). Must be in `(0, 1]`.
    pub fn decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    /// Build the generator, validating configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `decay` is non-finite or outside `(0, 1]`.
    pub fn build(self) -> Result<MemoryField, FieldError> {
        if !self.decay.is_finite() || self.decay <= 0.0 || self.decay > 1.0 {
            return Err(FieldError::InvalidParameter {
                field: FieldKind::Memory,
                parameter: "decay",
                reason: format!("must be in (0, 1], got {}", self.decay),
            });
        }
        Ok(MemoryField { decay: self.decay })
    }
}

impl FieldGenerator for MemoryField {
    fn kind(&self) -> FieldKind {
        FieldKind::Memory
    }

    fn generate(&self, ctx: &FieldContext<'_>) -> ScalarField {
        let geometry = ctx.geometry();
        let (width, height) = (geometry.width(), geometry.height());

        let hazards: Vec<Cell> = ctx
            .hazards()
            .iter()
            .copied()
            .filter(|&h| geometry.contains(h))
            .collect();
        if hazards.is_empty() {
            trace!("[MemoryField] no in-bounds hazards, field is zero");
            return ScalarField::zeros(width, height);
        }

        // Precompute decay^d for every distance that can occur.
        let max_d = (width - 1) as usize + (height - 1) as usize;
        let mut falloff = Vec::with_capacity(max_d + 1);
        let mut p = 1.0f64;
        for _ in 0..=max_d {
            falloff.push(p);
            p *= self.decay;
        }

        let mut raw = vec![0.0f64; geometry.cell_count()];
        for &hazard in &hazards {
            for (i, cell) in geometry.cells().enumerate() {
                raw[i] += falloff[cell.manhattan(hazard) as usize];
            }
        }

        let max = raw.iter().copied().fold(0.0f64, f64::max);
        let mut field = ScalarField::zeros(width, height);
        if max > 0.0 {
            for (out, v) in field.as_mut_slice().iter_mut().zip(&raw) {
                *out = (v / max) as f32;
            }
        }

        trace!(
            "[MemoryField] generated {}x{} from {} hazards (decay={})",
            width,
            height,
            hazards.len(),
            self.decay
        );
        field
    }
}
