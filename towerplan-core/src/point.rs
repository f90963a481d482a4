//! Integer grid coordinates.
//!
//! Cities and towers are both [`Point`] values. A point serialises to one
//! `"{x} {y}"` line of the instance and solution text formats.

use std::fmt;
use std::io::{self, Write};
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

use crate::ExactDistance;

/// Errors returned by [`Point::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointParseError {
    /// The line did not hold exactly two whitespace-separated tokens.
    #[error("expected two coordinates, found {found}")]
    WrongTokenCount {
        /// Number of tokens present.
        found: usize,
    },
    /// A token was not a base-10 integer.
    #[error("invalid coordinate {token:?}")]
    InvalidCoordinate {
        /// Offending token.
        token: String,
        /// Source error from integer parsing.
        #[source]
        source: ParseIntError,
    },
}

/// A coordinate on the grid.
///
/// # Examples
/// ```
/// use towerplan_core::Point;
///
/// let point = Point::parse("2 3")?;
/// assert_eq!(point, Point::new(2, 3));
/// assert_eq!(point.serialize_to_string(), "2 3");
/// # Ok::<(), towerplan_core::PointParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

/// Fields to override in [`Point::replace`]; `None` keeps the original value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointPatch {
    /// Replacement `x`, if any.
    pub x: Option<i32>,
    /// Replacement `y`, if any.
    pub y: Option<i32>,
}

impl Point {
    /// Construct a point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Parse a `"{x} {y}"` line.
    ///
    /// # Errors
    /// Returns [`PointParseError::WrongTokenCount`] unless the line holds
    /// exactly two tokens, and [`PointParseError::InvalidCoordinate`] when a
    /// token is not an integer.
    pub fn parse(line: &str) -> Result<Self, PointParseError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [x, y] = tokens.as_slice() else {
            return Err(PointParseError::WrongTokenCount {
                found: tokens.len(),
            });
        };
        Ok(Self::new(parse_coordinate(x)?, parse_coordinate(y)?))
    }

    /// Write the point as a `"{x} {y}\n"` line.
    ///
    /// # Errors
    /// Propagates errors from `out`.
    pub fn serialize<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }

    /// The serialised line without its trailing newline.
    #[must_use]
    pub fn serialize_to_string(&self) -> String {
        self.to_string()
    }

    /// Squared Euclidean distance between `self` and `other`.
    ///
    /// # Examples
    /// ```
    /// use towerplan_core::Point;
    ///
    /// assert_eq!(Point::new(0, 0).distance_squared(Point::new(3, 4)), 25);
    /// ```
    #[must_use]
    pub fn distance_squared(self, other: Self) -> u128 {
        let dx = u128::from((i64::from(self.x) - i64::from(other.x)).unsigned_abs());
        let dy = u128::from((i64::from(self.y) - i64::from(other.y)).unsigned_abs());
        dx * dx + dy * dy
    }

    /// Distance between `self` and `other` as an [`ExactDistance`].
    ///
    /// # Examples
    /// ```
    /// use towerplan_core::Point;
    ///
    /// let d = Point::new(0, 0).distance_exact(Point::new(2, 3));
    /// assert!(d < 5_i64);
    /// assert!(!(d >= 5_i64));
    /// ```
    #[must_use]
    pub fn distance_exact(self, other: Self) -> ExactDistance {
        ExactDistance::from_squared(self.distance_squared(other))
    }

    /// A copy of `self` with the fields set in `patch` replaced.
    ///
    /// # Examples
    /// ```
    /// use towerplan_core::{Point, PointPatch};
    ///
    /// let point = Point::new(1, 2);
    /// assert_eq!(point.replace(PointPatch { y: Some(3), ..PointPatch::default() }), Point::new(1, 3));
    /// ```
    #[must_use]
    pub fn replace(self, patch: PointPatch) -> Self {
        Self::new(patch.x.unwrap_or(self.x), patch.y.unwrap_or(self.y))
    }

    /// Whether both coordinates lie in `[0, side)`.
    #[must_use]
    pub fn in_square(self, side: u32) -> bool {
        let bound = i64::from(side);
        (0..bound).contains(&i64::from(self.x)) && (0..bound).contains(&i64::from(self.y))
    }
}

fn parse_coordinate(token: &str) -> Result<i32, PointParseError> {
    token
        .parse()
        .map_err(|source| PointParseError::InvalidCoordinate {
            token: token.to_owned(),
            source,
        })
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = PointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2 3", Point::new(2, 3))]
    #[case("  -4\t7 ", Point::new(-4, 7))]
    #[case("0 0\n", Point::new(0, 0))]
    fn parses_two_integers(#[case] line: &str, #[case] expected: Point) {
        assert_eq!(Point::parse(line), Ok(expected));
    }

    #[rstest]
    #[case("2", 1)]
    #[case("2 3 4", 3)]
    #[case("", 0)]
    fn rejects_wrong_token_count(#[case] line: &str, #[case] found: usize) {
        assert_eq!(
            Point::parse(line),
            Err(PointParseError::WrongTokenCount { found })
        );
    }

    #[rstest]
    #[case("2 x")]
    #[case("1.5 2")]
    #[case("0x1 2")]
    fn rejects_non_integers(#[case] line: &str) {
        assert!(matches!(
            Point::parse(line),
            Err(PointParseError::InvalidCoordinate { .. })
        ));
    }

    #[rstest]
    fn replace_overrides_only_given_fields() {
        let point = Point::new(1, 2);
        let moved = point.replace(PointPatch {
            x: Some(3),
            y: None,
        });
        assert_eq!(moved, Point::new(3, 2));
        assert_eq!(point.replace(PointPatch::default()), point);
    }

    #[rstest]
    fn distances_agree() {
        let first = Point::new(1, 2);
        let second = Point::new(3, 3);
        assert_eq!(first.distance_squared(second), 5);
        assert_eq!(first.distance_exact(second), ExactDistance::from_squared(5));
    }

    #[rstest]
    fn distance_spans_full_coordinate_range() {
        let low = Point::new(i32::MIN, i32::MIN);
        let high = Point::new(i32::MAX, i32::MAX);
        let side = u128::from(u32::MAX);
        assert_eq!(low.distance_squared(high), 2 * side * side);
    }

    #[rstest]
    fn serializes_as_line() {
        let mut out = Vec::new();
        Point::new(1, 2)
            .serialize(&mut out)
            .expect("writing to a Vec cannot fail");
        assert_eq!(out, b"1 2\n");
        assert_eq!(Point::new(1, 2).serialize_to_string(), "1 2");
    }

    #[rstest]
    #[case(Point::new(0, 0), 10, true)]
    #[case(Point::new(9, 9), 10, true)]
    #[case(Point::new(10, 0), 10, false)]
    #[case(Point::new(9, -1), 10, false)]
    #[case(Point::new(0, 0), 0, false)]
    fn square_bounds_are_half_open(#[case] point: Point, #[case] side: u32, #[case] inside: bool) {
        assert_eq!(point.in_square(side), inside);
    }
}
