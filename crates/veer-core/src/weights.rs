//! Per-request term [`Weights`].

use crate::error::WeightsError;
use crate::term::{Term, TermVector};

/// Non-negative weights applied to each cost term when collapsing a
/// [`TermVector`] into a single scalar.
///
/// One value per planning request; nothing here is shared or mutated
/// across requests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weights {
    /// Weight on per-step travel time. Also scales the search heuristic.
    pub time: f64,
    /// Weight on obstacle proximity.
    pub risk: f64,
    /// Weight on turning effort.
    pub energy: f64,
    /// Weight on sensing uncertainty.
    pub uncertainty: f64,
    /// Weight on hazard memory.
    pub memory: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            time: 1.0,
            risk: 1.0,
            energy: 0.5,
            uncertainty: 0.3,
            memory: 1.0,
        }
    }
}

impl Weights {
    /// Only travel time counts; every other weight is zero.
    pub fn time_only() -> Self {
        Self {
            time: 1.0,
            risk: 0.0,
            energy: 0.0,
            uncertainty: 0.0,
            memory: 0.0,
        }
    }

    /// Weight for a single term.
    pub fn get(&self, term: Term) -> f64 {
        match term {
            Term::Time => self.time,
            Term::Risk => self.risk,
            Term::Energy => self.energy,
            Term::Uncertainty => self.uncertainty,
            Term::Memory => self.memory,
        }
    }

    /// Set the weight for a single term.
    pub fn with(mut self, term: Term, value: f64) -> Self {
        match term {
            Term::Time => self.time = value,
            Term::Risk => self.risk = value,
            Term::Energy => self.energy = value,
            Term::Uncertainty => self.uncertainty = value,
            Term::Memory => self.memory = value,
        }
        self
    }

    /// Check that every weight is finite and `>= 0`.
    ///
    /// Reports the first offending term in canonical order.
    pub fn validate(&self) -> Result<(), WeightsError> {
        for term in Term::ALL {
            let value = self.get(term);
            if !value.is_finite() || value < 0.0 {
                return Err(WeightsError::Invalid { term, value });
            }
        }
        Ok(())
    }

    /// Weighted dot product of `terms` against these weights.
    pub fn combine(&self, terms: &TermVector) -> f64 {
        self.time * terms[Term::Time]
            + self.risk * terms[Term::Risk]
            + self.energy * terms[Term::Energy]
            + self.uncertainty * terms[Term::Uncertainty]
            + self.memory * terms[Term::Memory]
    }
}
