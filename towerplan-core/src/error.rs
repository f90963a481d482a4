//! Errors raised while reading instance and solution documents.

use std::num::ParseIntError;

use thiserror::Error;

use crate::{InstanceViolation, PointParseError, SolutionViolation};

/// Errors returned by [`Instance::parse`](crate::Instance::parse) and
/// [`Solution::parse`](crate::Solution::parse).
///
/// Line numbers are 1-based and count comment lines, so they match what an
/// editor shows for the input file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A coordinate line was malformed.
    #[error("line {line}: {source}")]
    Point {
        /// Line holding the malformed coordinates.
        line: usize,
        /// Underlying coordinate error.
        #[source]
        source: PointParseError,
    },
    /// A header field was not a non-negative integer.
    #[error("line {line}: {field} must be a non-negative integer, got {value:?}")]
    InvalidNumber {
        /// Line holding the field.
        line: usize,
        /// Name of the header field.
        field: &'static str,
        /// Raw text of the line.
        value: String,
        /// Source error from integer parsing.
        #[source]
        source: ParseIntError,
    },
    /// The input ended before a required header field.
    #[error("input ended before {field}")]
    TruncatedInput {
        /// Name of the missing header field.
        field: &'static str,
    },
    /// The declared item count disagrees with the lines that follow it.
    #[error("declared {declared} {item} but found {actual}")]
    CountMismatch {
        /// What was counted, e.g. `"cities"`.
        item: &'static str,
        /// Count from the header.
        declared: usize,
        /// Number of coordinate lines present.
        actual: usize,
    },
    /// The parsed instance breaks a structural invariant.
    #[error("invalid instance: {0}")]
    InvalidInstance(#[from] InstanceViolation),
    /// The parsed solution breaks a validity invariant.
    #[error("invalid solution: {0}")]
    InvalidSolution(#[from] SolutionViolation),
}
