//! Behaviour tests for parsing, validating and scoring solutions.

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use towerplan_core::{Instance, ParseError, PenaltyModel, Point, Solution, SolutionViolation};

type Outcome = Option<Result<Vec<Point>, ParseError>>;

#[fixture]
fn instance() -> RefCell<Instance> {
    RefCell::new(Instance::new(0, 0, 0, Vec::new()))
}

#[fixture]
fn towers() -> RefCell<Vec<Point>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn outcome() -> RefCell<Outcome> {
    RefCell::new(None)
}

fn parse_into(instance: &RefCell<Instance>, outcome: &RefCell<Outcome>, lines: &[&str]) {
    let instance = instance.borrow();
    let parsed = Solution::parse(lines, &instance).map(Solution::into_towers);
    *outcome.borrow_mut() = Some(parsed);
}

fn parse_error(outcome: &RefCell<Outcome>) -> ParseError {
    match outcome.borrow_mut().take() {
        Some(Err(err)) => err,
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[given("a ten by ten grid with one city in the corner")]
fn given_corner_instance(#[from(instance)] instance: &RefCell<Instance>) {
    *instance.borrow_mut() = Instance::new(10, 1, 2, vec![Point::new(9, 0)]);
}

#[when("the solution document places one tower beside the city")]
fn when_tower_beside(
    #[from(instance)] instance: &RefCell<Instance>,
    #[from(outcome)] outcome: &RefCell<Outcome>,
) {
    parse_into(instance, outcome, &["# Penalty: 170", "1", "9 1"]);
}

#[when("the solution document places one tower outside the grid")]
fn when_tower_outside(
    #[from(instance)] instance: &RefCell<Instance>,
    #[from(outcome)] outcome: &RefCell<Outcome>,
) {
    parse_into(instance, outcome, &["1", "10 0"]);
}

#[when("the solution document places one tower in the opposite corner")]
fn when_tower_far(
    #[from(instance)] instance: &RefCell<Instance>,
    #[from(outcome)] outcome: &RefCell<Outcome>,
) {
    parse_into(instance, outcome, &["1", "0 9"]);
}

#[when("the towers repeat the tower beside the city")]
fn when_repeated(#[from(towers)] towers: &RefCell<Vec<Point>>) {
    *towers.borrow_mut() = vec![Point::new(9, 1); 3];
}

#[when("the solution is deduplicated")]
fn when_deduplicated(
    #[from(instance)] instance: &RefCell<Instance>,
    #[from(towers)] towers: &RefCell<Vec<Point>>,
) {
    let instance = instance.borrow();
    let mut solution = Solution::new(towers.take(), &instance);
    solution.deduplicate();
    *towers.borrow_mut() = solution.into_towers();
}

#[when("the towers form three clusters")]
fn when_clustered(#[from(towers)] towers: &RefCell<Vec<Point>>) {
    *towers.borrow_mut() = [(0, 0), (0, 1), (0, 2), (5, 5), (5, 6), (9, 9)]
        .into_iter()
        .map(Point::from)
        .collect();
}

#[then("parsing succeeds")]
fn then_parsed(
    #[from(outcome)] outcome: &RefCell<Outcome>,
    #[from(towers)] towers: &RefCell<Vec<Point>>,
) {
    match outcome.borrow_mut().take() {
        Some(Ok(parsed)) => *towers.borrow_mut() = parsed,
        other => panic!("expected a parsed solution, got {other:?}"),
    }
}

#[then("parsing fails because a tower is out of bounds")]
fn then_out_of_bounds(#[from(outcome)] outcome: &RefCell<Outcome>) {
    assert!(matches!(
        parse_error(outcome),
        ParseError::InvalidSolution(SolutionViolation::TowerOutOfBounds { .. })
    ));
}

#[then("parsing fails because a city is uncovered")]
fn then_uncovered(#[from(outcome)] outcome: &RefCell<Outcome>) {
    assert!(matches!(
        parse_error(outcome),
        ParseError::InvalidSolution(SolutionViolation::UncoveredCity { .. })
    ));
}

#[then("the solution holds one tower")]
fn then_one_tower(#[from(towers)] towers: &RefCell<Vec<Point>>) {
    assert_eq!(towers.borrow().as_slice(), &[Point::new(9, 1)]);
}

#[then("the solution is valid")]
fn then_valid(
    #[from(instance)] instance: &RefCell<Instance>,
    #[from(towers)] towers: &RefCell<Vec<Point>>,
) {
    let instance = instance.borrow();
    let solution = Solution::new(towers.borrow().clone(), &instance);
    assert_eq!(solution.validate(), Ok(()));
}

#[then("the penalty equals the base penalty")]
fn then_base_penalty(
    #[from(instance)] instance: &RefCell<Instance>,
    #[from(towers)] towers: &RefCell<Vec<Point>>,
) {
    let instance = instance.borrow();
    let solution = Solution::new(towers.borrow().clone(), &instance);
    assert!((solution.penalty() - PenaltyModel::BASE).abs() < 1e-9);
}

#[then("the penalty matches the clustered reference value")]
fn then_clustered_penalty(
    #[from(instance)] instance: &RefCell<Instance>,
    #[from(towers)] towers: &RefCell<Vec<Point>>,
) {
    let instance = instance.borrow();
    let solution = Solution::new(towers.borrow().clone(), &instance);
    assert_eq!(solution.overlap_counts(), vec![2, 2, 2, 1, 1, 0]);
    assert!((solution.penalty() - 1_289.526_920_64).abs() < 1e-6);
}

#[scenario(path = "tests/features/solution.feature", index = 0)]
fn tower_beside_city(
    instance: RefCell<Instance>,
    towers: RefCell<Vec<Point>>,
    outcome: RefCell<Outcome>,
) {
    let _ = (instance, towers, outcome);
}

#[scenario(path = "tests/features/solution.feature", index = 1)]
fn tower_outside_grid(
    instance: RefCell<Instance>,
    towers: RefCell<Vec<Point>>,
    outcome: RefCell<Outcome>,
) {
    let _ = (instance, towers, outcome);
}

#[scenario(path = "tests/features/solution.feature", index = 2)]
fn distant_tower(
    instance: RefCell<Instance>,
    towers: RefCell<Vec<Point>>,
    outcome: RefCell<Outcome>,
) {
    let _ = (instance, towers, outcome);
}

#[scenario(path = "tests/features/solution.feature", index = 3)]
fn deduplication(
    instance: RefCell<Instance>,
    towers: RefCell<Vec<Point>>,
    outcome: RefCell<Outcome>,
) {
    let _ = (instance, towers, outcome);
}

#[scenario(path = "tests/features/solution.feature", index = 4)]
fn clustered_penalty(
    instance: RefCell<Instance>,
    towers: RefCell<Vec<Point>>,
    outcome: RefCell<Outcome>,
) {
    let _ = (instance, towers, outcome);
}
