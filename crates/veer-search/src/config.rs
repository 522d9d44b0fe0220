//! Planner configuration, validation, and error types.
//!
//! [`PlannerConfig`] describes the grid and cost model for a planner;
//! [`PlanRequest`] adds a start and goal for one-shot planning.
//! [`validate()`](PlannerConfig::validate) checks every parameter up
//! front so that [`Planner::new`](crate::Planner::new) is the only place
//! configuration can fail.

use std::error::Error;
use std::fmt;

use veer_core::{Cell, FieldError, Weights, WeightsError};
use veer_fields::{MemoryField, RiskField, UncertaintyField};
use veer_space::{GridGeometry, SpaceError};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a [`PlannerConfig`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Grid dimensions are invalid.
    Space(SpaceError),
    /// A term weight is negative or non-finite.
    Weights(WeightsError),
    /// A field parameter is out of range, or a field came out non-finite.
    Field(FieldError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "grid: {e}"),
            Self::Weights(e) => write!(f, "weights: {e}"),
            Self::Field(e) => write!(f, "field: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::Weights(e) => Some(e),
            Self::Field(e) => Some(e),
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<WeightsError> for ConfigError {
    fn from(e: WeightsError) -> Self {
        Self::Weights(e)
    }
}

impl From<FieldError> for ConfigError {
    fn from(e: FieldError) -> Self {
        Self::Field(e)
    }
}

// ── PlannerConfig ──────────────────────────────────────────────────

/// Everything needed to build a [`Planner`](crate::Planner).
#[derive(Clone, Debug, PartialEq)]
pub struct PlannerConfig {
    /// Grid width in cells. Default: 32.
    pub width: u32,
    /// Grid height in cells. Default: 24.
    pub height: u32,
    /// Impassable cells. Out-of-grid entries are ignored.
    pub obstacles: Vec<Cell>,
    /// Recorded hazard locations. Out-of-grid entries are ignored.
    pub hazards: Vec<Cell>,
    /// Per-term weights.
    pub weights: Weights,
    /// Uncertainty noise seed. `None` falls back to
    /// [`UncertaintyField::DEFAULT_SEED`]. Default: `Some(7)`.
    pub seed: Option<u64>,
    /// Risk fall-off length. Default: 4.0.
    pub risk_sigma: f64,
    /// Hazard-memory decay per cell. Default: 0.9.
    pub memory_decay: f64,
    /// Uncertainty blur half-width. Default: 2.
    pub blur_radius: u32,
    /// Uncertainty blur passes. Default: 2.
    pub blur_passes: u32,
    /// Optional cap on search expansions. Default: unbounded.
    pub max_expansions: Option<usize>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            width: 32,
            height: 24,
            obstacles: Vec::new(),
            hazards: Vec::new(),
            weights: Weights::default(),
            seed: Some(7),
            risk_sigma: RiskField::DEFAULT_SIGMA,
            memory_decay: MemoryField::DEFAULT_DECAY,
            blur_radius: UncertaintyField::DEFAULT_RADIUS,
            blur_passes: UncertaintyField::DEFAULT_PASSES,
            max_expansions: None,
        }
    }
}

impl PlannerConfig {
    /// Grid geometry for these dimensions.
    pub fn geometry(&self) -> Result<GridGeometry, ConfigError> {
        Ok(GridGeometry::new(self.width, self.height)?)
    }

    /// Risk generator for these parameters.
    pub fn risk_field(&self) -> Result<RiskField, ConfigError> {
        Ok(RiskField::builder().sigma(self.risk_sigma).build()?)
    }

    /// Uncertainty generator for these parameters.
    pub fn uncertainty_field(&self) -> Result<UncertaintyField, ConfigError> {
        Ok(UncertaintyField::builder()
            .seed_or_default(self.seed)
            .radius(self.blur_radius)
            .passes(self.blur_passes)
            .build()?)
    }

    /// Memory generator for these parameters.
    pub fn memory_field(&self) -> Result<MemoryField, ConfigError> {
        Ok(MemoryField::builder().decay(self.memory_decay).build()?)
    }

    /// Check every parameter without generating any field.
    ///
    /// Reports the first problem found, checking the grid, then the
    /// weights, then each field's parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.geometry()?;
        self.weights.validate()?;
        self.risk_field()?;
        self.uncertainty_field()?;
        self.memory_field()?;
        Ok(())
    }
}

// ── PlanRequest ────────────────────────────────────────────────────

/// A one-shot planning request: a configuration plus endpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanRequest {
    /// Grid and cost model.
    pub config: PlannerConfig,
    /// Start cell. Default: (1, 1).
    pub start: Cell,
    /// Goal cell. Default: (30, 20).
    pub goal: Cell,
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self {
            config: PlannerConfig::default(),
            start: Cell::new(1, 1),
            goal: Cell::new(30, 20),
        }
    }
}
