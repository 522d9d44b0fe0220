//! Human-facing summary of a [`PlanOutcome`].
//!
//! The search itself only produces raw term sums. This module derives
//! the per-term share of the total and a short explanation naming the
//! two terms that dominated the chosen route.

use std::fmt;
use veer_core::{Term, TermVector};
use veer_search::PlanOutcome;

/// Explanation used when the search found no path.
pub const NO_PATH_EXPLANATION: &str = "No path found. Try removing obstacles or moving start/goal.";

/// Denominator used in place of a zero term total.
const ZERO_TOTAL: f64 = 1e-9;

/// Percentages and explanation derived from one [`PlanOutcome`].
#[derive(Clone, Debug, PartialEq)]
pub struct PlanReport {
    /// Whether a path was found.
    pub found: bool,
    /// Moves along the path.
    pub steps: usize,
    /// Scalar path cost.
    pub total_cost: f64,
    /// Raw per-term sums.
    pub breakdown: TermVector,
    /// Each term's share of the raw term total, in percent.
    pub percentages: TermVector,
    /// One-paragraph explanation.
    pub explanation: String,
}

impl PlanReport {
    /// Summarize `outcome`.
    pub fn from_outcome(outcome: &PlanOutcome) -> Self {
        if !outcome.found {
            return Self {
                found: false,
                steps: 0,
                total_cost: outcome.total_cost,
                breakdown: outcome.terms,
                percentages: TermVector::ZERO,
                explanation: NO_PATH_EXPLANATION.to_string(),
            };
        }

        let steps = outcome.steps();
        let percentages = percentages(&outcome.terms);
        let explanation = explain(&percentages, steps);
        Self {
            found: true,
            steps,
            total_cost: outcome.total_cost,
            breakdown: outcome.terms,
            percentages,
            explanation,
        }
    }

    /// Terms by descending share. Ties keep canonical term order.
    pub fn dominant_terms(&self) -> Vec<(Term, f64)> {
        ranked(&self.percentages)
    }
}

impl fmt::Display for PlanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.explanation)
    }
}

/// `value / total * 100` per term, with a zero total replaced by a tiny
/// positive one.
pub fn percentages(terms: &TermVector) -> TermVector {
    let total = terms.sum();
    let total = if total == 0.0 { ZERO_TOTAL } else { total };
    let mut out = TermVector::ZERO;
    for (term, value) in terms.iter() {
        out[term] = value / total * 100.0;
    }
    out
}

fn ranked(percentages: &TermVector) -> Vec<(Term, f64)> {
    let mut v: Vec<(Term, f64)> = percentages.iter().collect();
    v.sort_by(|a, b| b.1.total_cmp(&a.1));
    v
}

fn explain(percentages: &TermVector, steps: usize) -> String {
    let major = ranked(percentages)
        .into_iter()
        .take(2)
        .map(|(term, pct)| format!("{term} ({pct:.1}%)"))
        .collect::<Vec<_>>()
        .join(" and ");
    format!(
        "Chose this route mainly due to {major}. Total steps: {steps}. \
         Time cost is per step, risk rises near walls, energy penalizes turns, \
         uncertainty comes from noisy areas, and memory avoids prior bump spots."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use veer_core::Cell;
    use veer_search::{PathFailure, SearchMetrics};

    fn found(terms: [f64; 5], len: usize) -> PlanOutcome {
        let path = (0..len as i32).map(|x| Cell::new(x, 0)).collect();
        let terms = TermVector::from_array(terms);
        PlanOutcome::found(path, terms.sum(), terms, SearchMetrics::default())
    }

    // ── Percentage tests ────────────────────────────────────────

    #[test]
    fn percentages_sum_to_hundred() {
        let p = percentages(&TermVector::from_array([4.0, 2.0, 0.4, 1.6, 2.0]));
        assert!((p.sum() - 100.0).abs() < 1e-9);
        assert!((p[Term::Time] - 40.0).abs() < 1e-9);
        assert!((p[Term::Energy] - 4.0).abs() < 1e-9);
    }

    #[test]
    fn zero_total_gives_zero_percentages() {
        let p = percentages(&TermVector::ZERO);
        assert!(p.is_zero());
    }

    // ── Report tests ────────────────────────────────────────────

    #[test]
    fn not_found_report() {
        let outcome = PlanOutcome::failed(PathFailure::NoPath, SearchMetrics::default());
        let r = PlanReport::from_outcome(&outcome);
        assert!(!r.found);
        assert_eq!(r.steps, 0);
        assert!(r.percentages.is_zero());
        assert_eq!(r.explanation, NO_PATH_EXPLANATION);
    }

    #[test]
    fn explanation_names_top_two_terms() {
        let r = PlanReport::from_outcome(&found([4.0, 2.0, 0.4, 1.6, 2.0], 5));
        assert_eq!(r.steps, 4);
        assert!(r
            .explanation
            .starts_with("Chose this route mainly due to time (40.0%) and risk (20.0%)."));
        assert!(r.explanation.contains("Total steps: 4."));
    }

    #[test]
    fn dominant_terms_break_ties_by_term_order() {
        let r = PlanReport::from_outcome(&found([1.0, 2.0, 0.0, 1.0, 2.0], 2));
        let order: Vec<Term> = r.dominant_terms().into_iter().map(|(t, _)| t).collect();
        assert_eq!(
            order,
            vec![
                Term::Risk,
                Term::Memory,
                Term::Time,
                Term::Uncertainty,
                Term::Energy
            ]
        );
    }

    #[test]
    fn single_cell_path_has_zero_steps() {
        let r = PlanReport::from_outcome(&found([0.0; 5], 1));
        assert!(r.found);
        assert_eq!(r.steps, 0);
        assert!(r.percentages.is_zero());
        assert!(r.explanation.contains("Total steps: 0."));
    }
}
