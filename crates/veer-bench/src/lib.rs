//! Benchmark workloads for the Veer planner.
//!
//! - [`reference_request`]: the default 32x24 request with a gapped wall
//!   and two hazards.
//! - [`field_workload`]: a square grid with scattered obstacles and
//!   hazards for field-generation benchmarks.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use veer_core::Cell;
use veer_search::PlanRequest;
use veer_space::{GridGeometry, Occupancy};

/// The default request with a wall at `x = 16` open only in the bottom
/// four rows, plus two hazards near the route.
pub fn reference_request() -> PlanRequest {
    let mut request = PlanRequest::default();
    request.config.obstacles = (0..20).map(|y| Cell::new(16, y)).collect();
    request.config.hazards = vec![Cell::new(24, 12), Cell::new(8, 18)];
    request
}

/// A `size × size` occupancy with a deterministic obstacle lattice and
/// the hazard list to go with it.
///
/// Obstacles sit on every cell where `(x * 7 + y * 13) % 11 == 0`;
/// hazards are placed on a coarse diagonal.
pub fn field_workload(size: u32) -> (Occupancy, Vec<Cell>) {
    let geometry = match GridGeometry::new(size.max(1), size.max(1)) {
        Ok(g) => g,
        Err(e) => panic!("benchmark grid size {size} is invalid: {e}"),
    };
    let obstacles: Vec<Cell> = geometry
        .cells()
        .filter(|c| (c.x * 7 + c.y * 13) % 11 == 0)
        .collect();
    let hazards = (0..size as i32)
        .step_by(8)
        .map(|i| Cell::new(i, i))
        .collect();
    (Occupancy::new(geometry, obstacles), hazards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_request_is_solvable() {
        let out = veer_search::plan(&reference_request()).unwrap();
        assert!(out.found);
    }

    #[test]
    fn field_workload_is_deterministic() {
        let (a, ha) = field_workload(64);
        let (b, hb) = field_workload(64);
        assert_eq!(a.obstacle_count(), b.obstacle_count());
        assert!(a.obstacle_count() > 0);
        assert_eq!(ha, hb);
        assert_eq!(ha.len(), 8);
    }
}
