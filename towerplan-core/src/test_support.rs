//! Test-only solver and fixtures used by unit and behaviour tests.

use crate::{Instance, Point, Solution, SolveError, Solver};

/// `Solver` that places one tower on every city.
///
/// Always feasible for a valid instance, never cheap.
#[derive(Debug, Copy, Clone, Default)]
pub struct NaiveSolver;

impl Solver for NaiveSolver {
    fn solve<'a>(&self, instance: &'a Instance) -> Result<Solution<'a>, SolveError> {
        instance.validate()?;
        Ok(Solution::new(instance.cities().to_vec(), instance))
    }
}

/// A 10x10 grid with `R_s = 1`, `R_p = 2` and one city at `(9, 0)`.
#[must_use]
pub fn corner_instance() -> Instance {
    Instance::new(10, 1, 2, vec![Point::new(9, 0)])
}

/// Six towers in three clusters, scoring `1289.52692064` on a grid with
/// `R_p = 2`.
#[must_use]
pub fn clustered_towers() -> Vec<Point> {
    [(0, 0), (0, 1), (0, 2), (5, 5), (5, 6), (9, 9)]
        .into_iter()
        .map(Point::from)
        .collect()
}
