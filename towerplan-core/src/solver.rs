//! The seam between the core model and solving strategies.

use thiserror::Error;

use crate::{Instance, InstanceViolation, Solution, SolutionViolation};

/// Errors returned by [`Solver::solve`] and [`solve_checked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The instance handed to the solver is malformed.
    #[error("instance is invalid: {0}")]
    InvalidInstance(#[from] InstanceViolation),
    /// The solver produced towers that do not form a valid solution.
    #[error("solver produced an invalid solution: {0}")]
    Infeasible(#[from] SolutionViolation),
}

/// Place towers for an instance.
///
/// Implementations should return [`SolveError`] for instances they cannot
/// handle rather than panicking. Solvers must be `Send + Sync` so a batch can
/// share one solver across threads.
pub trait Solver: Send + Sync {
    /// Produce a solution borrowing `instance`.
    fn solve<'a>(&self, instance: &'a Instance) -> Result<Solution<'a>, SolveError>;
}

/// Run `solver` on a validated instance and validate what it returns.
///
/// # Errors
/// Returns [`SolveError::InvalidInstance`] before calling the solver when
/// `instance` is malformed, any error the solver reports, and
/// [`SolveError::Infeasible`] when its output fails validation.
///
/// # Examples
/// ```
/// use towerplan_core::{Instance, Point, Solution, SolveError, Solver, solve_checked};
///
/// struct Corner;
///
/// impl Solver for Corner {
///     fn solve<'a>(&self, instance: &'a Instance) -> Result<Solution<'a>, SolveError> {
///         Ok(Solution::new(vec![Point::new(0, 0)], instance))
///     }
/// }
///
/// let near = Instance::new(10, 2, 4, vec![Point::new(1, 1)]);
/// assert!(solve_checked(&Corner, &near).is_ok());
///
/// let far = Instance::new(10, 2, 4, vec![Point::new(9, 9)]);
/// assert!(matches!(
///     solve_checked(&Corner, &far),
///     Err(SolveError::Infeasible(_))
/// ));
/// ```
pub fn solve_checked<'a, S>(solver: &S, instance: &'a Instance) -> Result<Solution<'a>, SolveError>
where
    S: Solver + ?Sized,
{
    instance.validate()?;
    let solution = solver.solve(instance)?;
    solution.validate()?;
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;
    use rstest::rstest;

    struct EmptySolver;

    impl Solver for EmptySolver {
        fn solve<'a>(&self, instance: &'a Instance) -> Result<Solution<'a>, SolveError> {
            Ok(Solution::new(Vec::new(), instance))
        }
    }

    #[rstest]
    fn empty_solution_fails_when_cities_exist() {
        let instance = Instance::new(10, 1, 2, vec![Point::new(4, 4)]);
        let err = solve_checked(&EmptySolver, &instance).expect_err("city left uncovered");
        assert_eq!(
            err,
            SolveError::Infeasible(SolutionViolation::UncoveredCity {
                city: Point::new(4, 4),
                radius: 1,
            })
        );
    }

    #[rstest]
    fn empty_solution_is_valid_without_cities() {
        let instance = Instance::new(10, 1, 2, Vec::new());
        let solution = solve_checked(&EmptySolver, &instance).expect("nothing to cover");
        assert!(solution.towers().is_empty());
    }

    #[rstest]
    fn invalid_instance_is_rejected_first() {
        let instance = Instance::new(10, 1, 2, vec![Point::new(4, 4), Point::new(4, 4)]);
        let err = solve_checked(&EmptySolver, &instance).expect_err("duplicate city");
        assert!(matches!(err, SolveError::InvalidInstance(_)));
    }

    #[rstest]
    fn accepts_trait_objects() {
        let solver: Box<dyn Solver> = Box::new(EmptySolver);
        let instance = Instance::new(10, 1, 2, Vec::new());
        assert!(solve_checked(solver.as_ref(), &instance).is_ok());
    }
}
