//! Error types shared across the planner crates.
//!
//! Unreachable goals are *not* errors: the search reports them as a
//! failed outcome. These types cover malformed configuration and the
//! post-generation sentinel check on field values.

use crate::field::FieldKind;
use crate::term::Term;
use std::error::Error;
use std::fmt;

/// Errors from term weight validation.
#[derive(Clone, Debug, PartialEq)]
pub enum WeightsError {
    /// A weight is negative, NaN, or infinite.
    Invalid {
        /// The offending term.
        term: Term,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for WeightsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid { term, value } => {
                write!(f, "weight '{term}' must be finite and >= 0, got {value}")
            }
        }
    }
}

impl Error for WeightsError {}

/// Errors from cost field configuration or generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// A generator parameter is out of range.
    InvalidParameter {
        /// The field being configured.
        field: FieldKind,
        /// Name of the parameter.
        parameter: &'static str,
        /// Human-readable description of the valid range.
        reason: String,
    },
    /// A generated field contains NaN or infinity.
    NonFinite {
        /// The field containing the bad value.
        field: FieldKind,
        /// Row-major index of the first non-finite cell.
        cell_index: usize,
    },
    /// Field dimensions do not match the grid being planned on.
    ShapeMismatch {
        /// The mismatched field.
        field: FieldKind,
        /// `(width, height)` expected by the grid.
        expected: (u32, u32),
        /// `(width, height)` of the field.
        actual: (u32, u32),
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                field,
                parameter,
                reason,
            } => write!(f, "{field} field: invalid {parameter}: {reason}"),
            Self::NonFinite { field, cell_index } => {
                write!(f, "{field} field: non-finite value at cell {cell_index}")
            }
            Self::ShapeMismatch {
                field,
                expected,
                actual,
            } => write!(
                f,
                "{field} field: expected {}x{}, got {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
        }
    }
}

impl Error for FieldError {}
