//! Tests for the `Solver` trait using a stub implementation.

use rstest::rstest;
use towerplan_core::{
    Instance, Point, SizeClass, Solution, SolveError, Solver, SolutionViolation, select_best,
    solve_checked,
};

/// Places a single tower at a fixed coordinate.
struct FixedSolver(Point);

impl Solver for FixedSolver {
    fn solve<'a>(&self, instance: &'a Instance) -> Result<Solution<'a>, SolveError> {
        Ok(Solution::new(vec![self.0], instance))
    }
}

/// Places a tower on every city, rejecting malformed instances itself.
struct CitySolver;

impl Solver for CitySolver {
    fn solve<'a>(&self, instance: &'a Instance) -> Result<Solution<'a>, SolveError> {
        instance.validate()?;
        Ok(Solution::new(instance.cities().to_vec(), instance))
    }
}

#[rstest]
#[case(Point::new(0, 4), true)]
#[case(Point::new(3, 3), false)]
#[case(Point::new(30, 0), false)]
fn solver_output_is_validated(#[case] tower: Point, #[case] should_succeed: bool) {
    let instance = SizeClass::SMALL.instance(vec![Point::new(0, 0)]);
    let result = solve_checked(&FixedSolver(tower), &instance);
    assert_eq!(result.is_ok(), should_succeed);
}

#[rstest]
fn out_of_bounds_output_is_infeasible() {
    let instance = SizeClass::SMALL.instance(vec![Point::new(0, 0)]);
    let err = solve_checked(&FixedSolver(Point::new(30, 0)), &instance).expect_err("outside");
    assert_eq!(
        err,
        SolveError::Infeasible(SolutionViolation::TowerOutOfBounds {
            tower: Point::new(30, 0),
            side: 30,
        })
    );
}

#[rstest]
fn cheapest_of_several_solvers_wins() {
    let instance = SizeClass::SMALL.instance(vec![Point::new(2, 2), Point::new(3, 3)]);
    let solvers: [&dyn Solver; 2] = [&CitySolver, &FixedSolver(Point::new(2, 3))];
    let candidates: Vec<Solution<'_>> = solvers
        .iter()
        .map(|solver| solve_checked(*solver, &instance).expect("feasible"))
        .collect();
    let best = select_best(&candidates).expect("two candidates");
    assert_eq!(best.index, 1);
    assert_eq!(best.solution.towers(), &[Point::new(2, 3)]);
}
