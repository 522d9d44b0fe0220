//! Dense per-cell [`ScalarField`] storage and the [`FieldKind`] tag.

use crate::cell::Cell;
use std::fmt;

/// Which derived cost field a [`ScalarField`] holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Obstacle proximity.
    Risk,
    /// Smoothed seeded noise.
    Uncertainty,
    /// Decayed hazard bumps.
    Memory,
}

impl FieldKind {
    /// Lower-case name for logs and errors.
    pub const fn name(self) -> &'static str {
        match self {
            FieldKind::Risk => "risk",
            FieldKind::Uncertainty => "uncertainty",
            FieldKind::Memory => "memory",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dense `width × height` array of `f32`, one value per cell.
///
/// Storage is row-major: cell `(x, y)` lives at `y * width + x`.
/// Fields are built once by a generator and are read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarField {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl ScalarField {
    /// A field of the given size with every cell set to zero.
    pub fn zeros(width: u32, height: u32) -> Self {
        Self::filled(width, height, 0.0)
    }

    /// A field of the given size with every cell set to `value`.
    pub fn filled(width: u32, height: u32, value: f32) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            data: vec![value; len],
        }
    }

    /// Wrap an existing row-major buffer.
    ///
    /// Returns `None` if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<f32>) -> Option<Self> {
        if data.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the field has no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major index of `cell`, or `None` if it lies outside the field.
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        if cell.x < 0 || cell.y < 0 {
            return None;
        }
        let (x, y) = (cell.x as u32, cell.y as u32);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Value at `cell`, or `None` if out of bounds.
    pub fn get(&self, cell: Cell) -> Option<f32> {
        self.index_of(cell).map(|i| self.data[i])
    }

    /// Value at `cell`, or `0.0` if out of bounds.
    pub fn value_or_zero(&self, cell: Cell) -> f32 {
        self.get(cell).unwrap_or(0.0)
    }

    /// Flat row-major view.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Mutable flat row-major view, for generators filling the field.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Largest cell value, or `0.0` for an empty field.
    pub fn max_value(&self) -> f32 {
        self.data.iter().copied().fold(0.0f32, f32::max)
    }

    /// Index of the first NaN or infinite cell, if any.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.data.iter().position(|v| !v.is_finite())
    }

    /// Returns `true` if every cell is exactly zero.
    pub fn is_all_zero(&self) -> bool {
        self.data.iter().all(|&v| v == 0.0)
    }
}
