//! The field-backed [`CostModel`].

use veer_core::{Cell, Direction, EdgeCost, Term, TermVector, Weights};
use veer_fields::CostFields;

/// Energy charged when an edge turns away from the previous direction.
pub const TURN_PENALTY: f64 = 0.2;

/// Time charged per step.
pub const STEP_TIME: f64 = 1.0;

/// Per-edge costs read from the three derived fields.
///
/// Borrows the fields for the duration of a search; never mutates them.
/// Field terms are sampled at the cell being entered.
#[derive(Clone, Copy, Debug)]
pub struct CostModel<'a> {
    fields: &'a CostFields,
    weights: Weights,
}

impl<'a> CostModel<'a> {
    /// Create a cost model over `fields` with the given weights.
    pub fn new(fields: &'a CostFields, weights: Weights) -> Self {
        Self { fields, weights }
    }

    /// The weights used by [`combine`](EdgeCost::combine).
    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// The fields being sampled.
    pub fn fields(&self) -> &'a CostFields {
        self.fields
    }
}

impl EdgeCost for CostModel<'_> {
    fn edge_terms(&self, from: Cell, to: Cell, previous: Option<Direction>) -> TermVector {
        let (risk, uncertainty, memory) = self.fields.sample(to);
        let turned = match (previous, from.direction_to(to)) {
            (Some(prev), Some(dir)) => prev != dir,
            _ => false,
        };

        let mut terms = TermVector::ZERO;
        terms[Term::Time] = STEP_TIME;
        terms[Term::Risk] = f64::from(risk);
        terms[Term::Energy] = if turned { TURN_PENALTY } else { 0.0 };
        terms[Term::Uncertainty] = f64::from(uncertainty);
        terms[Term::Memory] = f64::from(memory);
        terms
    }

    fn combine(&self, terms: &TermVector) -> f64 {
        self.weights.combine(terms)
    }

    fn heuristic_scale(&self) -> f64 {
        self.weights.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veer_core::ScalarField;

    fn fields() -> CostFields {
        let mut risk = ScalarField::zeros(3, 3);
        risk.as_mut_slice()[4] = 0.5; // (1, 1)
        let uncertainty = ScalarField::filled(3, 3, 0.25);
        let mut memory = ScalarField::zeros(3, 3);
        memory.as_mut_slice()[5] = 1.0; // (2, 1)
        CostFields::from_fields(risk, uncertainty, memory).unwrap()
    }

    // ── Term tests ──────────────────────────────────────────────

    #[test]
    fn fields_are_sampled_at_destination() {
        let f = fields();
        let model = CostModel::new(&f, Weights::default());
        let t = model.edge_terms(Cell::new(0, 1), Cell::new(1, 1), None);
        assert_eq!(t[Term::Time], 1.0);
        assert_eq!(t[Term::Risk], 0.5);
        assert_eq!(t[Term::Uncertainty], 0.25);
        assert_eq!(t[Term::Memory], 0.0);

        let t = model.edge_terms(Cell::new(1, 1), Cell::new(2, 1), None);
        assert_eq!(t[Term::Risk], 0.0);
        assert_eq!(t[Term::Memory], 1.0);
    }

    #[test]
    fn first_step_is_never_a_turn() {
        let f = fields();
        let model = CostModel::new(&f, Weights::default());
        let t = model.edge_terms(Cell::new(0, 0), Cell::new(0, 1), None);
        assert_eq!(t[Term::Energy], 0.0);
    }

    #[test]
    fn straight_step_costs_no_energy() {
        let f = fields();
        let model = CostModel::new(&f, Weights::default());
        let t = model.edge_terms(Cell::new(0, 0), Cell::new(1, 0), Some(Direction::East));
        assert_eq!(t[Term::Energy], 0.0);
    }

    #[test]
    fn turning_costs_energy() {
        let f = fields();
        let model = CostModel::new(&f, Weights::default());
        let t = model.edge_terms(Cell::new(1, 0), Cell::new(1, 1), Some(Direction::East));
        assert_eq!(t[Term::Energy], TURN_PENALTY);
        // Reversing counts as a turn too.
        let t = model.edge_terms(Cell::new(1, 0), Cell::new(0, 0), Some(Direction::East));
        assert_eq!(t[Term::Energy], TURN_PENALTY);
    }

    // ── Combine tests ───────────────────────────────────────────

    #[test]
    fn combine_uses_weights() {
        let f = fields();
        let weights = Weights::time_only().with(Term::Risk, 2.0);
        let model = CostModel::new(&f, weights);
        let t = model.edge_terms(Cell::new(0, 1), Cell::new(1, 1), None);
        assert_eq!(model.combine(&t), 1.0 + 2.0 * 0.5);
    }

    #[test]
    fn heuristic_scale_is_time_weight() {
        let f = fields();
        let model = CostModel::new(&f, Weights::default().with(Term::Time, 3.0));
        assert_eq!(model.heuristic_scale(), 3.0);
    }
}
