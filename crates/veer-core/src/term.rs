//! The five cost terms and the fixed-size [`TermVector`] that carries them.

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut};

/// One of the five independent cost terms a path is scored on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// Constant per-step travel time.
    Time,
    /// Proximity to obstacles.
    Risk,
    /// Turning effort.
    Energy,
    /// Smoothed sensing noise.
    Uncertainty,
    /// Decayed cost around previously recorded hazards.
    Memory,
}

impl Term {
    /// Number of terms.
    pub const COUNT: usize = 5;

    /// All terms in canonical order.
    pub const ALL: [Term; Term::COUNT] = [
        Term::Time,
        Term::Risk,
        Term::Energy,
        Term::Uncertainty,
        Term::Memory,
    ];

    /// Position of this term in a [`TermVector`].
    pub const fn index(self) -> usize {
        match self {
            Term::Time => 0,
            Term::Risk => 1,
            Term::Energy => 2,
            Term::Uncertainty => 3,
            Term::Memory => 4,
        }
    }

    /// Lower-case name, as used in reports.
    pub const fn name(self) -> &'static str {
        match self {
            Term::Time => "time",
            Term::Risk => "risk",
            Term::Energy => "energy",
            Term::Uncertainty => "uncertainty",
            Term::Memory => "memory",
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-term cost values, always holding exactly one entry per [`Term`].
///
/// Used both for the raw cost of a single edge and for the running sum
/// along a path. Addition is elementwise.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TermVector([f64; Term::COUNT]);

impl TermVector {
    /// All five terms set to zero.
    pub const ZERO: TermVector = TermVector([0.0; Term::COUNT]);

    /// Build a vector from values in canonical [`Term::ALL`] order.
    pub const fn from_array(values: [f64; Term::COUNT]) -> Self {
        Self(values)
    }

    /// Value of a single term.
    pub fn get(&self, term: Term) -> f64 {
        self.0[term.index()]
    }

    /// Overwrite a single term.
    pub fn set(&mut self, term: Term, value: f64) {
        self.0[term.index()] = value;
    }

    /// Sum of all five terms, unweighted.
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Iterate `(term, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Term, f64)> + '_ {
        Term::ALL.iter().map(move |&t| (t, self.get(t)))
    }

    /// Raw values in canonical order.
    pub fn as_array(&self) -> &[f64; Term::COUNT] {
        &self.0
    }

    /// Returns `true` if every term is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&v| v == 0.0)
    }
}

impl Index<Term> for TermVector {
    type Output = f64;

    fn index(&self, term: Term) -> &f64 {
        &self.0[term.index()]
    }
}

impl IndexMut<Term> for TermVector {
    fn index_mut(&mut self, term: Term) -> &mut f64 {
        &mut self.0[term.index()]
    }
}

impl Add for TermVector {
    type Output = TermVector;

    fn add(mut self, rhs: TermVector) -> TermVector {
        self += rhs;
        self
    }
}

impl AddAssign for TermVector {
    fn add_assign(&mut self, rhs: TermVector) {
        for (lhs, r) in self.0.iter_mut().zip(rhs.0) {
            *lhs += r;
        }
    }
}

impl fmt::Display for TermVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (term, value) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{term}={value:.4}")?;
        }
        Ok(())
    }
}
