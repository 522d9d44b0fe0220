//! The [`FieldGenerator`] trait.

use crate::context::FieldContext;
use veer_core::{FieldError, FieldKind, ScalarField};

/// Builds one dense cost field from a [`FieldContext`].
///
/// Generators are pure: the same context always yields a bit-identical
/// field. They hold only their own parameters, validated at build time.
pub trait FieldGenerator {
    /// Which field this generator produces.
    fn kind(&self) -> FieldKind;

    /// Generate the field. Always returns a field sized to the grid.
    fn generate(&self, ctx: &FieldContext<'_>) -> ScalarField;

    /// Generate the field and reject it if any cell is NaN or infinite.
    fn generate_checked(&self, ctx: &FieldContext<'_>) -> Result<ScalarField, FieldError> {
        let field = self.generate(ctx);
        match field.first_non_finite() {
            Some(cell_index) => Err(FieldError::NonFinite {
                field: self.kind(),
                cell_index,
            }),
            None => Ok(field),
        }
    }
}
