//! Core domain types for the towerplan toolkit.
//!
//! An [`Instance`] lists cities on a square grid; a [`Solution`] places
//! towers so every city lies within the coverage radius of some tower. The
//! penalty grows exponentially with how many towers crowd each other inside
//! the penalty radius. Every radius check goes through [`ExactDistance`], so
//! points exactly on a boundary classify the same way on every platform.
//!
//! # Examples
//! ```
//! use towerplan_core::{Instance, Solution};
//!
//! let instance: Instance = "1\n10\n1\n2\n9 0".parse()?;
//! let solution = Solution::parse_str("# Penalty: 170\n1\n9 1", &instance)?;
//! assert!(solution.is_valid());
//! assert_eq!(solution.penalty(), 170.0);
//! # Ok::<(), towerplan_core::ParseError>(())
//! ```

#![forbid(unsafe_code)]

pub mod distance;
pub mod error;
pub mod instance;
pub mod merge;
pub mod penalty;
pub mod point;
pub mod size;
pub mod solution;
pub mod solver;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod text;

pub use distance::{DistanceError, ExactDistance, Magnitude};
pub use error::ParseError;
pub use instance::{Instance, InstanceViolation};
pub use merge::{Scored, select_best};
pub use penalty::PenaltyModel;
pub use point::{Point, PointParseError, PointPatch};
pub use size::{SizeClass, SizeName, UnknownSizeName};
pub use solution::{Solution, SolutionViolation};
pub use solver::{SolveError, Solver, solve_checked};
pub use text::is_comment;
