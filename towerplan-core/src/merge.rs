//! Choosing the cheapest of several candidate solutions.

use crate::Solution;

/// A candidate picked by [`select_best`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored<'s, 'a> {
    /// Position of the candidate in the input slice.
    pub index: usize,
    /// The chosen candidate.
    pub solution: &'s Solution<'a>,
    /// Its penalty under the default model.
    pub penalty: f64,
}

/// Return the candidate with the lowest penalty.
///
/// Ties keep the earliest candidate. Returns `None` for an empty slice.
/// Candidates are scored as given; validate them first if that matters.
///
/// # Examples
/// ```
/// use towerplan_core::{Instance, Point, Solution, select_best};
///
/// let instance = Instance::new(10, 1, 5, vec![Point::new(0, 0)]);
/// let crowded = Solution::new(vec![Point::new(0, 0), Point::new(0, 1)], &instance);
/// let single = Solution::new(vec![Point::new(0, 0)], &instance);
/// let candidates = [crowded, single];
///
/// let best = select_best(&candidates).expect("two candidates");
/// assert_eq!(best.index, 1);
/// assert_eq!(best.penalty, 170.0);
/// ```
#[must_use]
pub fn select_best<'s, 'a>(candidates: &'s [Solution<'a>]) -> Option<Scored<'s, 'a>> {
    candidates
        .iter()
        .enumerate()
        .map(|(index, solution)| Scored {
            index,
            solution,
            penalty: solution.penalty(),
        })
        .reduce(|best, next| {
            if next.penalty.total_cmp(&best.penalty).is_lt() {
                next
            } else {
                best
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Instance, Point};
    use rstest::{fixture, rstest};

    #[fixture]
    fn instance() -> Instance {
        Instance::new(10, 1, 3, vec![Point::new(2, 2)])
    }

    #[rstest]
    fn empty_input_has_no_best() {
        assert!(select_best(&[]).is_none());
    }

    #[rstest]
    fn picks_lowest_penalty(instance: Instance) {
        let candidates = [
            Solution::new(
                vec![Point::new(2, 2), Point::new(2, 3), Point::new(3, 3)],
                &instance,
            ),
            Solution::new(vec![Point::new(2, 2), Point::new(9, 9)], &instance),
            Solution::new(vec![Point::new(2, 3), Point::new(2, 2)], &instance),
        ];
        let best = select_best(&candidates).expect("non-empty");
        assert_eq!(best.index, 1);
        assert!((best.penalty - 340.0).abs() < 1e-9);
        assert_eq!(best.solution, &candidates[1]);
    }

    #[rstest]
    fn ties_keep_the_earliest(instance: Instance) {
        let candidates = [
            Solution::new(vec![Point::new(2, 2)], &instance),
            Solution::new(vec![Point::new(2, 1)], &instance),
        ];
        let best = select_best(&candidates).expect("non-empty");
        assert_eq!(best.index, 0);
    }
}
