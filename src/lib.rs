//! Facade crate for the towerplan toolkit.
//!
//! This crate re-exports the core domain types and exposes the file helpers
//! behind the `fs` feature.

#![forbid(unsafe_code)]

pub use towerplan_core::{
    DistanceError, ExactDistance, Instance, InstanceViolation, Magnitude, ParseError,
    PenaltyModel, Point, PointParseError, PointPatch, Scored, SizeClass, SizeName, Solution,
    SolutionViolation, SolveError, Solver, UnknownSizeName, is_comment, select_best,
    solve_checked,
};

#[cfg(feature = "test-support")]
pub use towerplan_core::test_support;

#[cfg(feature = "fs")]
pub use towerplan_fs::{
    FsError, MergeError, MergeOutcome, MergeRecord, MergeReport, merge_record, merge_records,
    read_instance, read_solution, write_solution,
};
