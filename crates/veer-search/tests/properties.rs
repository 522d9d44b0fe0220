//! Property tests: path validity and term-sum exactness on random grids.

use proptest::prelude::*;
use veer_core::{Cell, EdgeCost, Term, Weights};
use veer_search::{CostModel, MultiTermAStar, Planner, PlannerConfig};
use veer_space::{GridGeometry, Occupancy};
use veer_test_utils::{check_path, replay_path, TurnCountingCost, UniformCost};

fn arb_weights() -> impl Strategy<Value = Weights> {
    (0.0f64..3.0, 0.0f64..3.0, 0.0f64..3.0, 0.0f64..3.0, 0.0f64..3.0).prop_map(
        |(time, risk, energy, uncertainty, memory)| Weights {
            time,
            risk,
            energy,
            uncertainty,
            memory,
        },
    )
}

fn arb_cells(max: i32, len: usize) -> impl Strategy<Value = Vec<Cell>> {
    proptest::collection::vec((0..max, 0..max), 0..len)
        .prop_map(|v| v.into_iter().map(Cell::from).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn found_paths_are_valid_and_exact(
        w in 2u32..12,
        h in 2u32..12,
        obstacles in arb_cells(12, 30),
        hazards in arb_cells(12, 4),
        weights in arb_weights(),
        seed in any::<u64>(),
        sx in 0i32..12, sy in 0i32..12,
        gx in 0i32..12, gy in 0i32..12,
    ) {
        let start = Cell::new(sx % w as i32, sy % h as i32);
        let goal = Cell::new(gx % w as i32, gy % h as i32);
        let planner = Planner::new(PlannerConfig {
            width: w,
            height: h,
            obstacles,
            hazards,
            weights,
            seed: Some(seed),
            ..PlannerConfig::default()
        }).unwrap();
        let out = planner.plan(start, goal);

        if !out.found {
            prop_assert!(out.path.is_empty());
            prop_assert!(out.terms.is_zero());
            prop_assert_eq!(out.total_cost, 0.0);
            return Ok(());
        }

        prop_assert!(check_path(planner.occupancy(), &out.path, start, goal).is_ok());

        // Replaying the path reproduces the recorded sums exactly.
        let model = CostModel::new(planner.fields(), weights);
        let (terms, g) = replay_path(&model, &out.path);
        prop_assert_eq!(terms, out.terms);
        prop_assert_eq!(g.to_bits(), out.total_cost.to_bits());

        // The weighted sum of the terms matches the scalar cost.
        let combined = model.combine(&out.terms);
        prop_assert!((combined - out.total_cost).abs() <= 1e-9 * out.total_cost.max(1.0));

        prop_assert_eq!(out.terms[Term::Time], out.steps() as f64);
    }

    #[test]
    fn uniform_cost_paths_are_shortest(
        w in 2u32..10,
        h in 2u32..10,
        sx in 0i32..10, sy in 0i32..10,
        gx in 0i32..10, gy in 0i32..10,
    ) {
        let occ = Occupancy::open(GridGeometry::new(w, h).unwrap());
        let start = Cell::new(sx % w as i32, sy % h as i32);
        let goal = Cell::new(gx % w as i32, gy % h as i32);
        let out = MultiTermAStar::new(&occ, &UniformCost).search(start, goal);
        prop_assert!(out.found);
        prop_assert_eq!(out.steps() as u32, start.manhattan(goal));
        prop_assert_eq!(out.total_cost, f64::from(start.manhattan(goal)));
    }

    #[test]
    fn turn_counting_sums_match_replay(
        obstacles in arb_cells(8, 16),
    ) {
        let occ = Occupancy::new(GridGeometry::new(8, 8).unwrap(), obstacles);
        let cost = TurnCountingCost::new(0.3);
        let (start, goal) = (Cell::new(0, 0), Cell::new(7, 7));
        let out = MultiTermAStar::new(&occ, &cost).search(start, goal);
        if out.found {
            let (terms, g) = replay_path(&cost, &out.path);
            prop_assert_eq!(terms, out.terms);
            prop_assert_eq!(g.to_bits(), out.total_cost.to_bits());
        }
    }
}
